//! Wine pairing: subtype/flavor compatibility and selection priorities.

use brigade_core::menu::Flavor;

/// Dish flavors a wine subtype pairs with.
pub fn wine_compatible_flavors(subtype: &str) -> &'static [Flavor] {
    match subtype {
        "dry" => &[Flavor::Salty, Flavor::Sour, Flavor::Fatty],
        "fruity" => &[Flavor::Sweet, Flavor::Umami],
        "full-bodied" => &[Flavor::Fatty, Flavor::Umami],
        "young" => &[Flavor::Bitter, Flavor::Umami],
        "rose" => &[Flavor::Salty, Flavor::Sweet, Flavor::Umami],
        "sparkling" => &[Flavor::Salty, Flavor::Fatty, Flavor::Sweet],
        "sweet" => &[Flavor::Sweet, Flavor::Umami, Flavor::Fatty],
        "aged" => &[Flavor::Umami, Flavor::Fatty],
        _ => &[],
    }
}

/// Whether a wine subtype suits the dish flavors. Dessert pairing only
/// accepts sweet and sparkling wines.
pub fn is_wine_compatible(subtype: &str, flavors: &[Flavor], is_dessert: bool) -> bool {
    if is_dessert && !matches!(subtype, "sweet" | "sparkling") {
        return false;
    }
    let compatible = wine_compatible_flavors(subtype);
    flavors.iter().any(|f| compatible.contains(f))
}

/// Selection priority for a wine subtype (higher is better).
pub fn wine_priority(subtype: &str, is_dessert: bool) -> i32 {
    if is_dessert {
        match subtype {
            "sweet" => 50,
            "sparkling" => 40,
            _ => 5,
        }
    } else {
        match subtype {
            "full-bodied" => 25,
            "fruity" => 20,
            "rose" => 18,
            "dry" => 15,
            "young" => 12,
            "sparkling" | "aged" => 10,
            _ => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dessert_rejects_dry_wines() {
        assert!(!is_wine_compatible("dry", &[Flavor::Sweet], true));
        assert!(is_wine_compatible("sweet", &[Flavor::Sweet], true));
    }

    #[test]
    fn full_bodied_tops_main_course_priority() {
        assert!(wine_priority("full-bodied", false) > wine_priority("sparkling", false));
        assert!(wine_priority("sweet", true) > wine_priority("full-bodied", true));
    }
}
