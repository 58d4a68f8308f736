pub mod configuration;

pub mod catalog {
    pub mod catalogerror;
    pub mod holidaycatalog;
    pub mod colombia;
}

pub mod time {
    pub mod utility;
    pub mod calendardate;
    pub mod datevalidator;
    pub mod mondayshift;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod holidayrule;
        pub mod easter;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
    }

    pub mod calendar {
        pub mod holidayclassifier;
        pub mod holidaymatcher;
        pub mod yearcalendar;
    }
}
