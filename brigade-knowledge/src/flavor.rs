//! Flavor compatibility relation.

use brigade_core::menu::Flavor;

/// Flavors that pair well with the given one. Symmetry is enforced by the
/// lookup, not by the table.
pub fn compatible_flavors(flavor: Flavor) -> &'static [Flavor] {
    match flavor {
        Flavor::Sweet => &[Flavor::Sour, Flavor::Salty, Flavor::Fatty, Flavor::Bitter],
        Flavor::Salty => &[Flavor::Sweet, Flavor::Umami, Flavor::Sour, Flavor::Fatty],
        Flavor::Sour => &[Flavor::Sweet, Flavor::Salty, Flavor::Fatty],
        Flavor::Bitter => &[Flavor::Sweet, Flavor::Fatty],
        Flavor::Umami => &[Flavor::Salty, Flavor::Fatty, Flavor::Spicy],
        Flavor::Fatty => &[Flavor::Sour, Flavor::Salty, Flavor::Sweet, Flavor::Bitter, Flavor::Umami],
        Flavor::Spicy => &[Flavor::Umami, Flavor::Sweet],
    }
}

/// Whether two flavors harmonize. A flavor is always compatible with itself.
pub fn are_flavors_compatible(a: Flavor, b: Flavor) -> bool {
    a == b || compatible_flavors(a).contains(&b) || compatible_flavors(b).contains(&a)
}

/// Whether any flavor pair across the two sets harmonizes. Empty sets are
/// treated as compatible (nothing to clash).
pub fn any_flavor_harmony(a: &[Flavor], b: &[Flavor]) -> bool {
    if a.is_empty() || b.is_empty() {
        return true;
    }
    a.iter().any(|fa| b.iter().any(|fb| are_flavors_compatible(*fa, *fb)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compatibility_is_symmetric() {
        for a in [
            Flavor::Sweet,
            Flavor::Salty,
            Flavor::Sour,
            Flavor::Bitter,
            Flavor::Umami,
            Flavor::Fatty,
            Flavor::Spicy,
        ] {
            for b in compatible_flavors(a) {
                assert!(
                    are_flavors_compatible(*b, a),
                    "{a:?} -> {b:?} not symmetric"
                );
            }
        }
    }

    #[test]
    fn identical_flavors_are_compatible() {
        assert!(are_flavors_compatible(Flavor::Spicy, Flavor::Spicy));
    }

    #[test]
    fn empty_sets_do_not_clash() {
        assert!(any_flavor_harmony(&[], &[Flavor::Sweet]));
    }
}
