use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use festivos::configuration::Configuration;
use festivos::time::calendar::holidayclassifier::holidays_in_year;
use festivos::time::calendar::holidaymatcher::{is_holiday, HolidayError};
use festivos::time::calendar::yearcalendar::year_calendar;

const USAGE: &str = "usage: festivos [--config <path>] (check <YYYY/MM/DD> | list <year> | calendar <year>)";

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn usage() -> ExitCode {
    eprintln!("{}", USAGE);
    ExitCode::from(2)
}

fn parse_year(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok()
}

fn main() -> ExitCode {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let config_result = if args.first().map(String::as_str) == Some("--config") {
        if args.len() < 2 {
            return usage();
        }
        let path = args[1].clone();
        args.drain(..2);
        Configuration::from_reader(path)
    } else {
        Configuration::from_env()
    };

    let config = match config_result {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.log_level());

    let rules = match config.rule_provider().rules() {
        Ok(rules) => rules,
        Err(err) => {
            error!(%err, "cannot load holiday rules");
            return ExitCode::FAILURE;
        }
    };

    let argv: Vec<&str> = args.iter().map(String::as_str).collect();
    match argv.as_slice() {
        ["check", date] => match is_holiday(date, &rules) {
            Ok(verdict) => {
                if verdict.is_holiday() {
                    println!("Es Festivo");
                } else {
                    println!("No es Festivo");
                }
                ExitCode::SUCCESS
            },
            Err(HolidayError::Validation(err)) => {
                eprintln!("{}", err);
                ExitCode::from(2)
            },
            Err(HolidayError::Computation(err)) => {
                error!(%err, "cannot evaluate holiday rules");
                ExitCode::FAILURE
            }
        },
        ["list", year] => {
            let Some(year) = parse_year(year) else {
                return usage();
            };
            match holidays_in_year(year, &rules) {
                Ok(holidays) => {
                    for holiday in holidays {
                        println!("{}  {}", holiday.date(), holiday.name());
                    }
                    ExitCode::SUCCESS
                },
                Err(err) => {
                    error!(%err, "cannot evaluate holiday rules");
                    ExitCode::FAILURE
                }
            }
        },
        ["calendar", year] => {
            let Some(year) = parse_year(year) else {
                return usage();
            };
            match year_calendar(year, &rules) {
                Ok(days) => {
                    for day in days {
                        println!("{}  {}  {}", day.date(), day.date().weekday(), day.day_type());
                    }
                    ExitCode::SUCCESS
                },
                Err(err) => {
                    error!(%err, "cannot evaluate holiday rules");
                    ExitCode::FAILURE
                }
            }
        },
        _ => usage()
    }
}
