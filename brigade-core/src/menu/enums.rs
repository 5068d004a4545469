use serde::{Deserialize, Serialize};

/// Event types the engine plans menus for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Wedding,
    Familiar,
    Congress,
    Corporate,
    Christening,
    Communion,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::Wedding,
        EventType::Familiar,
        EventType::Congress,
        EventType::Corporate,
        EventType::Christening,
        EventType::Communion,
    ];
}

/// Seasons. `Any` marks both season-agnostic requests and dishes available
/// year-round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    Any,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
        Season::Any,
    ];

    /// Position in the yearly cycle, `None` for `Any`.
    pub fn cycle_index(self) -> Option<usize> {
        match self {
            Season::Spring => Some(0),
            Season::Summer => Some(1),
            Season::Autumn => Some(2),
            Season::Winter => Some(3),
            Season::Any => None,
        }
    }

    /// Cyclic distance between two concrete seasons (0..=2).
    pub fn cyclic_distance(self, other: Season) -> Option<usize> {
        let (a, b) = (self.cycle_index()?, other.cycle_index()?);
        let d = a.abs_diff(b);
        Some(d.min(4 - d))
    }
}

/// Course slot a dish occupies in a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DishType {
    Starter,
    MainCourse,
    Dessert,
}

/// Gastronomic category of a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DishCategory {
    Soup,
    Cream,
    Broth,
    Salad,
    Vegetable,
    Legume,
    Pasta,
    Rice,
    Meat,
    Poultry,
    Fish,
    Seafood,
    Egg,
    Tapas,
    Snack,
    Fruit,
    Pastry,
    IceCream,
    Cake,
}

/// Culinary styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CulinaryStyle {
    Classic,
    Modern,
    Fusion,
    Regional,
    /// Haute cuisine, molecular techniques.
    Sibarita,
    Gourmet,
    /// Mild, family-friendly cooking.
    Suave,
}

impl CulinaryStyle {
    pub const ALL: [CulinaryStyle; 7] = [
        CulinaryStyle::Classic,
        CulinaryStyle::Modern,
        CulinaryStyle::Fusion,
        CulinaryStyle::Regional,
        CulinaryStyle::Sibarita,
        CulinaryStyle::Gourmet,
        CulinaryStyle::Suave,
    ];
}

/// Culinary cultural traditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CulturalTradition {
    Mediterranean,
    Catalan,
    Basque,
    Galician,
    Italian,
    French,
    Greek,
    Moroccan,
    Turkish,
    Lebanese,
    Nordic,
    Russian,
    Japanese,
    Mexican,
    Spanish,
}

impl CulturalTradition {
    pub const ALL: [CulturalTradition; 15] = [
        CulturalTradition::Mediterranean,
        CulturalTradition::Catalan,
        CulturalTradition::Basque,
        CulturalTradition::Galician,
        CulturalTradition::Italian,
        CulturalTradition::French,
        CulturalTradition::Greek,
        CulturalTradition::Moroccan,
        CulturalTradition::Turkish,
        CulturalTradition::Lebanese,
        CulturalTradition::Nordic,
        CulturalTradition::Russian,
        CulturalTradition::Japanese,
        CulturalTradition::Mexican,
        CulturalTradition::Spanish,
    ];
}

/// Serving temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Temperature {
    Hot,
    Warm,
    Cold,
}

/// Preparation complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    /// Ordinal position, for distance-based similarity.
    pub fn rank(self) -> u8 {
        match self {
            Complexity::Low => 0,
            Complexity::Medium => 1,
            Complexity::High => 2,
        }
    }
}

/// Dominant flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flavor {
    Sweet,
    Salty,
    Sour,
    Bitter,
    Umami,
    Fatty,
    Spicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_cyclic_distance_wraps() {
        assert_eq!(Season::Spring.cyclic_distance(Season::Winter), Some(1));
        assert_eq!(Season::Spring.cyclic_distance(Season::Autumn), Some(2));
        assert_eq!(Season::Summer.cyclic_distance(Season::Summer), Some(0));
        assert_eq!(Season::Any.cyclic_distance(Season::Summer), None);
    }

    #[test]
    fn enums_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&DishType::MainCourse).unwrap(),
            "\"main_course\""
        );
        assert_eq!(
            serde_json::to_string(&DishCategory::IceCream).unwrap(),
            "\"ice_cream\""
        );
    }
}
