use crate::time::recurringholiday::holidayrule::HolidayRule;

use super::catalogerror::CatalogError;
use super::holidaycatalog::HolidayRuleProvider;

/// National holidays of Colombia (Ley 51 de 1983).
pub fn default_rules() -> Vec<HolidayRule> {
    vec![
        HolidayRule::fixed("Año nuevo", 1, 1),
        HolidayRule::fixed("Día del Trabajo", 5, 1),
        HolidayRule::fixed("Independencia Colombia", 7, 20),
        HolidayRule::fixed("Batalla de Boyacá", 8, 7),
        HolidayRule::fixed("Inmaculada Concepción", 12, 8),
        HolidayRule::fixed("Navidad", 12, 25),

        HolidayRule::fixed_monday("Santos Reyes", 1, 6),
        HolidayRule::fixed_monday("San José", 3, 19),
        HolidayRule::fixed_monday("San Pedro y San Pablo", 6, 29),
        HolidayRule::fixed_monday("Asunción de la Virgen", 8, 15),
        HolidayRule::fixed_monday("Día de la Raza", 10, 12),
        HolidayRule::fixed_monday("Todos los santos", 11, 1),
        HolidayRule::fixed_monday("Independencia de Cartagena", 11, 11),

        HolidayRule::easter_fixed("Jueves Santo", -3),
        HolidayRule::easter_fixed("Viernes Santo", -2),
        HolidayRule::easter_fixed("Domingo de Pascua", 0),

        HolidayRule::easter_monday("Ascensión del Señor", 40),
        HolidayRule::easter_monday("Corpus Christi", 61),
        HolidayRule::easter_monday("Sagrado Corazón de Jesús", 68),
    ]
}

/// The built-in catalog.
#[derive(Default)]
pub struct ColombiaCatalog;

impl HolidayRuleProvider for ColombiaCatalog {
    fn rules(&self) -> Result<Vec<HolidayRule>, CatalogError> {
        Ok(default_rules())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::recurringholiday::holidayrule::HolidayType;

    #[test]
    fn catalog_shape() {
        let rules = default_rules();
        assert_eq!(rules.len(), 19);
        let count = |t: HolidayType| rules.iter().filter(|r| r.holiday_type().unwrap() == t).count();
        assert_eq!(count(HolidayType::Fixed), 6);
        assert_eq!(count(HolidayType::FixedMonday), 7);
        assert_eq!(count(HolidayType::EasterFixed), 3);
        assert_eq!(count(HolidayType::EasterMonday), 3);
    }

    #[test]
    fn palm_sunday_is_not_a_rule() {
        assert!(default_rules().iter().all(|r| r.offset() != -7));
    }
}
