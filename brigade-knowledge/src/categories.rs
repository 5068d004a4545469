//! Category incompatibility and course progression rules.

use brigade_core::menu::DishCategory;

/// Category pairs that should not share a menu (repetitive or clashing).
const INCOMPATIBLE: &[(DishCategory, DishCategory)] = &[
    (DishCategory::Soup, DishCategory::Broth),
    (DishCategory::Soup, DishCategory::Cream),
    (DishCategory::Cream, DishCategory::Broth),
    (DishCategory::Pasta, DishCategory::Rice),
    (DishCategory::Pasta, DishCategory::Pasta),
    (DishCategory::Rice, DishCategory::Rice),
    (DishCategory::Soup, DishCategory::Soup),
    (DishCategory::Salad, DishCategory::Salad),
    (DishCategory::Meat, DishCategory::Meat),
    (DishCategory::Fish, DishCategory::Fish),
];

/// Whether two dish categories may appear in the same menu.
pub fn are_categories_compatible(a: DishCategory, b: DishCategory) -> bool {
    !INCOMPATIBLE.contains(&(a, b)) && !INCOMPATIBLE.contains(&(b, a))
}

/// Starter categories that lead well into the given main categories.
pub fn good_progressions(starter: DishCategory) -> &'static [DishCategory] {
    match starter {
        DishCategory::Salad | DishCategory::Vegetable => {
            &[DishCategory::Meat, DishCategory::Fish, DishCategory::Poultry]
        }
        DishCategory::Soup => &[DishCategory::Meat, DishCategory::Pasta, DishCategory::Rice],
        DishCategory::Cream => &[DishCategory::Fish, DishCategory::Poultry],
        DishCategory::Tapas => &[DishCategory::Meat, DishCategory::Fish],
        _ => &[],
    }
}

/// Whether a starter category flows naturally into a main category.
pub fn is_good_progression(starter: DishCategory, main: DishCategory) -> bool {
    good_progressions(starter).contains(&main)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_categories_clash() {
        assert!(!are_categories_compatible(
            DishCategory::Soup,
            DishCategory::Soup
        ));
        assert!(!are_categories_compatible(
            DishCategory::Pasta,
            DishCategory::Rice
        ));
    }

    #[test]
    fn salad_into_fish_is_fine() {
        assert!(are_categories_compatible(
            DishCategory::Salad,
            DishCategory::Fish
        ));
        assert!(is_good_progression(DishCategory::Salad, DishCategory::Fish));
    }
}
