//! Dish-to-dish and menu-to-menu similarity, used by adaptation when
//! hunting for alternative courses and by retention when judging
//! redundancy.

use brigade_core::menu::{Dish, Menu};

/// Similarity between two dishes in [0, 1]. Dishes of different course
/// types never compare (0.0).
pub fn dish_similarity(a: &Dish, b: &Dish) -> f64 {
    if a.dish_type != b.dish_type {
        return 0.0;
    }

    let category = if a.category == b.category { 1.0 } else { 0.3 };

    let max_price = a.price.max(b.price);
    let price = if max_price <= 0.0 {
        1.0
    } else {
        a.price.min(b.price) / max_price
    };

    let complexity = 1.0 - (a.complexity.rank().abs_diff(b.complexity.rank()) as f64) / 2.0;

    let flavor = jaccard(&a.flavors, &b.flavors);
    let style = jaccard(&a.styles, &b.styles);

    let max_cal = a.calories.max(b.calories);
    let calories = if max_cal == 0 {
        1.0
    } else {
        a.calories.min(b.calories) as f64 / max_cal as f64
    };

    (category + price + complexity + flavor + style + calories) / 6.0
}

/// Jaccard overlap of two small sets; 0.5 for two empty sets (no signal).
fn jaccard<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.5;
    }
    let common = a.iter().filter(|x| b.contains(x)).count();
    let union = a.len() + b.len() - common;
    if union == 0 {
        0.5
    } else {
        common as f64 / union as f64
    }
}

/// Similarity between two whole menus in [0, 1]. The main course carries
/// the most weight.
pub fn menu_similarity(a: &Menu, b: &Menu) -> f64 {
    let starter = dish_similarity(&a.starter, &b.starter);
    let main = dish_similarity(&a.main_course, &b.main_course);
    let dessert = dish_similarity(&a.dessert, &b.dessert);

    let max_price = a.total_price.max(b.total_price);
    let price = if max_price <= 0.0 {
        1.0
    } else {
        a.total_price.min(b.total_price) / max_price
    };

    let style = if a.dominant_style == b.dominant_style {
        1.0
    } else {
        0.5
    };

    0.20 * starter + 0.35 * main + 0.20 * dessert + 0.15 * price + 0.10 * style
}

#[cfg(test)]
mod tests {
    use super::*;
    use brigade_core::menu::DishType;

    #[test]
    fn identical_dishes_score_one() {
        let d = test_fixtures::fixture_dish("gazpacho");
        assert!((dish_similarity(&d, &d) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cross_course_dishes_never_compare() {
        let starter = test_fixtures::fixture_dish("gazpacho");
        let main = test_fixtures::fixture_dish("grilled-sea-bass");
        assert_eq!(starter.dish_type, DishType::Starter);
        assert_eq!(dish_similarity(&starter, &main), 0.0);
    }

    #[test]
    fn same_category_beats_different_category() {
        let soup_a = test_fixtures::fixture_dish("gazpacho");
        let soup_b = test_fixtures::fixture_dish("carrot-ginger-soup");
        let salad = test_fixtures::fixture_dish("caprese-tower");
        assert!(dish_similarity(&soup_a, &soup_b) > dish_similarity(&soup_a, &salad));
    }

    #[test]
    fn menu_similarity_bounded() {
        use brigade_core::traits::ICaseStore;
        let store = test_fixtures::seeded_store();
        let a = store.get_case("wedding-gourmet-001").unwrap().menu;
        let b = store.get_case("familiar-classic-001").unwrap().menu;
        let s = menu_similarity(&a, &b);
        assert!((0.0..=1.0).contains(&s));
        assert!((menu_similarity(&a, &a) - 1.0).abs() < 1e-9);
    }
}
