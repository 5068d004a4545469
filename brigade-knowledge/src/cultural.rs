//! Cultural tradition characteristics and the hand-authored affinity table.

use brigade_core::menu::{CulinaryStyle, CulturalTradition, DishCategory};

/// Default affinity between unrelated traditions.
pub const AFFINITY_FLOOR: f64 = 0.3;

/// Hand-authored affinity between culinary traditions, based on shared
/// ingredients and techniques. Looked up in both directions.
const AFFINITY: &[(CulturalTradition, CulturalTradition, f64)] = &[
    // Mediterranean family: olive oil, tomato, herbs.
    (CulturalTradition::Italian, CulturalTradition::Spanish, 0.8),
    (CulturalTradition::Italian, CulturalTradition::French, 0.7),
    (CulturalTradition::Spanish, CulturalTradition::French, 0.6),
    (CulturalTradition::Mediterranean, CulturalTradition::Italian, 0.8),
    (CulturalTradition::Mediterranean, CulturalTradition::Spanish, 0.8),
    (CulturalTradition::Mediterranean, CulturalTradition::Greek, 0.8),
    (CulturalTradition::Mediterranean, CulturalTradition::French, 0.6),
    (CulturalTradition::Greek, CulturalTradition::Turkish, 0.7),
    (CulturalTradition::Greek, CulturalTradition::Lebanese, 0.6),
    (CulturalTradition::Lebanese, CulturalTradition::Turkish, 0.7),
    (CulturalTradition::Lebanese, CulturalTradition::Italian, 0.5),
    (CulturalTradition::French, CulturalTradition::Lebanese, 0.4),
    (CulturalTradition::Moroccan, CulturalTradition::Turkish, 0.6),
    (CulturalTradition::Moroccan, CulturalTradition::Lebanese, 0.6),
    (CulturalTradition::Moroccan, CulturalTradition::Spanish, 0.5),
    // Iberian regional family.
    (CulturalTradition::Catalan, CulturalTradition::Spanish, 0.9),
    (CulturalTradition::Basque, CulturalTradition::Spanish, 0.8),
    (CulturalTradition::Galician, CulturalTradition::Spanish, 0.8),
    (CulturalTradition::Catalan, CulturalTradition::Mediterranean, 0.8),
    (CulturalTradition::Catalan, CulturalTradition::Basque, 0.6),
    (CulturalTradition::Basque, CulturalTradition::Galician, 0.6),
    (CulturalTradition::Galician, CulturalTradition::Catalan, 0.6),
    (CulturalTradition::Catalan, CulturalTradition::French, 0.5),
    // Latin / colonial threads.
    (CulturalTradition::Mexican, CulturalTradition::Spanish, 0.5),
    // North / east.
    (CulturalTradition::Nordic, CulturalTradition::Russian, 0.5),
    (CulturalTradition::Nordic, CulturalTradition::Japanese, 0.4),
    (CulturalTradition::Nordic, CulturalTradition::Galician, 0.4),
];

/// Affinity between two traditions in [0, 1]; 1.0 for identity.
pub fn cultural_affinity(a: CulturalTradition, b: CulturalTradition) -> f64 {
    if a == b {
        return 1.0;
    }
    AFFINITY
        .iter()
        .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
        .map(|(_, _, v)| *v)
        .unwrap_or(AFFINITY_FLOOR)
}

/// Signature ingredients, typical categories, and styles of a tradition.
pub struct CulturalProfile {
    pub key_ingredients: &'static [&'static str],
    pub typical_categories: &'static [DishCategory],
    pub styles: &'static [CulinaryStyle],
}

pub fn cultural_profile(tradition: CulturalTradition) -> CulturalProfile {
    match tradition {
        CulturalTradition::Mediterranean => CulturalProfile {
            key_ingredients: &["olive-oil", "tomato", "garlic", "herbs"],
            typical_categories: &[DishCategory::Fish, DishCategory::Salad, DishCategory::Vegetable],
            styles: &[CulinaryStyle::Classic, CulinaryStyle::Regional],
        },
        CulturalTradition::Catalan => CulturalProfile {
            key_ingredients: &["olive-oil", "tomato", "garlic", "almonds", "romesco"],
            typical_categories: &[DishCategory::Fish, DishCategory::Meat, DishCategory::Vegetable],
            styles: &[CulinaryStyle::Regional, CulinaryStyle::Sibarita],
        },
        CulturalTradition::Basque => CulturalProfile {
            key_ingredients: &["cod", "peppers", "txakoli", "idiazabal"],
            typical_categories: &[DishCategory::Fish, DishCategory::Tapas, DishCategory::Meat],
            styles: &[CulinaryStyle::Gourmet, CulinaryStyle::Regional],
        },
        CulturalTradition::Galician => CulturalProfile {
            key_ingredients: &["octopus", "potato", "paprika", "turnip-greens"],
            typical_categories: &[DishCategory::Seafood, DishCategory::Fish],
            styles: &[CulinaryStyle::Regional, CulinaryStyle::Classic],
        },
        CulturalTradition::Italian => CulturalProfile {
            key_ingredients: &["pasta", "olive-oil", "tomato", "parmesan", "basil"],
            typical_categories: &[DishCategory::Pasta, DishCategory::Meat, DishCategory::Vegetable],
            styles: &[CulinaryStyle::Classic, CulinaryStyle::Regional],
        },
        CulturalTradition::French => CulturalProfile {
            key_ingredients: &["butter", "cream", "wine", "herbs"],
            typical_categories: &[DishCategory::Cream, DishCategory::Meat, DishCategory::Pastry],
            styles: &[CulinaryStyle::Classic, CulinaryStyle::Gourmet],
        },
        CulturalTradition::Greek => CulturalProfile {
            key_ingredients: &["olive-oil", "feta", "lemon", "oregano"],
            typical_categories: &[DishCategory::Salad, DishCategory::Fish, DishCategory::Vegetable],
            styles: &[CulinaryStyle::Regional, CulinaryStyle::Classic],
        },
        CulturalTradition::Moroccan => CulturalProfile {
            key_ingredients: &["spices", "lamb", "couscous", "dates", "almonds"],
            typical_categories: &[DishCategory::Meat, DishCategory::Legume],
            styles: &[CulinaryStyle::Fusion, CulinaryStyle::Regional],
        },
        CulturalTradition::Turkish => CulturalProfile {
            key_ingredients: &["lamb", "yogurt", "eggplant", "spices"],
            typical_categories: &[DishCategory::Meat, DishCategory::Legume],
            styles: &[CulinaryStyle::Regional, CulinaryStyle::Classic],
        },
        CulturalTradition::Lebanese => CulturalProfile {
            key_ingredients: &["chickpeas", "tahini", "lemon", "parsley"],
            typical_categories: &[DishCategory::Legume, DishCategory::Salad],
            styles: &[CulinaryStyle::Regional, CulinaryStyle::Fusion],
        },
        CulturalTradition::Nordic => CulturalProfile {
            key_ingredients: &["fish", "berries", "root-vegetables", "rye"],
            typical_categories: &[DishCategory::Fish, DishCategory::Vegetable],
            styles: &[CulinaryStyle::Modern, CulinaryStyle::Regional],
        },
        CulturalTradition::Russian => CulturalProfile {
            key_ingredients: &["beets", "potato", "dill", "sour-cream"],
            typical_categories: &[DishCategory::Soup, DishCategory::Meat],
            styles: &[CulinaryStyle::Classic, CulinaryStyle::Regional],
        },
        CulturalTradition::Japanese => CulturalProfile {
            key_ingredients: &["soy-sauce", "rice", "fish", "seaweed", "miso"],
            typical_categories: &[DishCategory::Fish, DishCategory::Rice],
            styles: &[CulinaryStyle::Modern, CulinaryStyle::Sibarita],
        },
        CulturalTradition::Mexican => CulturalProfile {
            key_ingredients: &["corn", "chili", "beans", "cilantro", "lime"],
            typical_categories: &[DishCategory::Meat, DishCategory::Legume],
            styles: &[CulinaryStyle::Regional, CulinaryStyle::Fusion],
        },
        CulturalTradition::Spanish => CulturalProfile {
            key_ingredients: &["olive-oil", "garlic", "paprika", "saffron"],
            typical_categories: &[DishCategory::Rice, DishCategory::Fish, DishCategory::Tapas],
            styles: &[CulinaryStyle::Classic, CulinaryStyle::Regional],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affinity_is_symmetric_and_bounded() {
        for a in CulturalTradition::ALL {
            for b in CulturalTradition::ALL {
                let ab = cultural_affinity(a, b);
                assert_eq!(ab, cultural_affinity(b, a));
                assert!((0.0..=1.0).contains(&ab));
            }
        }
    }

    #[test]
    fn identity_is_one_and_unrelated_floors() {
        assert_eq!(
            cultural_affinity(CulturalTradition::Japanese, CulturalTradition::Japanese),
            1.0
        );
        assert_eq!(
            cultural_affinity(CulturalTradition::Japanese, CulturalTradition::Mexican),
            AFFINITY_FLOOR
        );
    }
}
