//! Price-proportion sanity rules for menu composition.

use brigade_core::models::PriceBucket;

/// Target per-course price shares by bucket:
/// (starter min/max, main min/max, dessert min/max).
pub fn price_proportions(bucket: PriceBucket) -> (f64, f64, f64, f64, f64, f64) {
    match bucket {
        PriceBucket::Economy => (0.10, 0.30, 0.30, 0.50, 0.08, 0.25),
        PriceBucket::Mid => (0.15, 0.30, 0.35, 0.50, 0.12, 0.25),
        PriceBucket::Premium => (0.12, 0.25, 0.35, 0.50, 0.12, 0.25),
    }
}

/// Whether course prices respect the bucket's target shares, with extra
/// tolerance on both sides.
pub fn validate_price_proportions(
    starter: f64,
    main: f64,
    dessert: f64,
    bucket: PriceBucket,
    tolerance: f64,
) -> bool {
    let total = starter + main + dessert;
    if total <= 0.0 {
        return false;
    }
    let (s_min, s_max, m_min, m_max, d_min, d_max) = price_proportions(bucket);
    let within = |share: f64, min: f64, max: f64| {
        (min - tolerance..=max + tolerance).contains(&share)
    };
    within(starter / total, s_min, s_max)
        && within(main / total, m_min, m_max)
        && within(dessert / total, d_min, d_max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_menu_passes() {
        assert!(validate_price_proportions(12.0, 24.0, 9.0, PriceBucket::Mid, 0.25));
    }

    #[test]
    fn starter_heavy_menu_fails() {
        assert!(!validate_price_proportions(40.0, 10.0, 5.0, PriceBucket::Mid, 0.05));
    }
}
