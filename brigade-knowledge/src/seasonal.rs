//! Seasonal rules: calorie ranges and starter serving temperatures.

use brigade_core::menu::{Season, Temperature};

/// Recommended total-calorie range for a season's menus.
pub fn calorie_range(season: Season) -> (u32, u32) {
    match season {
        Season::Summer => (550, 950),
        Season::Winter => (850, 1450),
        Season::Spring | Season::Autumn => (650, 1250),
        Season::Any => (550, 1450),
    }
}

/// Whether a menu's calorie load suits the season.
pub fn is_calorie_count_appropriate(calories: u32, season: Season) -> bool {
    let (min, max) = calorie_range(season);
    (min..=max).contains(&calories)
}

/// Starter temperatures that work for a season.
pub fn appropriate_starter_temperatures(season: Season) -> &'static [Temperature] {
    match season {
        Season::Summer => &[Temperature::Cold, Temperature::Warm],
        Season::Winter => &[Temperature::Hot],
        Season::Spring => &[Temperature::Warm, Temperature::Cold, Temperature::Hot],
        Season::Autumn => &[Temperature::Warm, Temperature::Hot],
        Season::Any => &[Temperature::Hot, Temperature::Warm, Temperature::Cold],
    }
}

/// Whether a starter temperature suits the season.
pub fn is_starter_temperature_appropriate(temperature: Temperature, season: Season) -> bool {
    appropriate_starter_temperatures(season).contains(&temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winter_wants_hot_starters() {
        assert!(is_starter_temperature_appropriate(Temperature::Hot, Season::Winter));
        assert!(!is_starter_temperature_appropriate(Temperature::Cold, Season::Winter));
    }

    #[test]
    fn summer_calorie_band_is_the_lightest() {
        assert!(is_calorie_count_appropriate(700, Season::Summer));
        assert!(!is_calorie_count_appropriate(1200, Season::Summer));
        assert!(is_calorie_count_appropriate(1200, Season::Winter));
    }
}
