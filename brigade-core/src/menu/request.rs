use serde::{Deserialize, Serialize};

use super::enums::{CulinaryStyle, CulturalTradition, EventType, Season};

/// A client request: the problem side of a case.
///
/// Either price bound may be unset; a one-sided band is interpreted by the
/// similarity engine. Unset optional fields mark their criteria as
/// unspecified for weight masking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub id: String,
    pub event_type: EventType,
    pub season: Season,
    pub num_guests: u32,
    #[serde(default)]
    pub price_min: Option<f64>,
    #[serde(default)]
    pub price_max: Option<f64>,
    pub wants_wine: bool,
    #[serde(default)]
    pub preferred_style: Option<CulinaryStyle>,
    #[serde(default)]
    pub cultural_preference: Option<CulturalTradition>,
    /// Diet labels that MUST be satisfied.
    #[serde(default)]
    pub required_diets: Vec<String>,
    /// Diet labels to favor when possible.
    #[serde(default)]
    pub soft_diets: Vec<String>,
    /// Ingredients that must not appear anywhere (allergens).
    #[serde(default)]
    pub restricted_ingredients: Vec<String>,
    /// Ingredients to avoid when an alternative exists.
    #[serde(default)]
    pub soft_restricted_ingredients: Vec<String>,
}

impl Request {
    /// Whether any price bound was given.
    pub fn has_price_band(&self) -> bool {
        self.price_min.is_some() || self.price_max.is_some()
    }

    /// Width of the price band when both bounds are set.
    pub fn band_width(&self) -> Option<f64> {
        match (self.price_min, self.price_max) {
            (Some(lo), Some(hi)) if hi > lo => Some(hi - lo),
            _ => None,
        }
    }

    /// Midpoint of the band, falling back to whichever bound exists.
    pub fn band_center(&self) -> Option<f64> {
        match (self.price_min, self.price_max) {
            (Some(lo), Some(hi)) => Some((lo + hi) / 2.0),
            (Some(lo), None) => Some(lo),
            (None, Some(hi)) => Some(hi),
            (None, None) => None,
        }
    }

    /// Whether a total price falls inside the (possibly one-sided) band.
    pub fn price_in_band(&self, total: f64) -> bool {
        self.price_min.map_or(true, |lo| total >= lo)
            && self.price_max.map_or(true, |hi| total <= hi)
    }
}

impl Default for Request {
    fn default() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            event_type: EventType::Familiar,
            season: Season::Any,
            num_guests: 50,
            price_min: None,
            price_max: None,
            wants_wine: false,
            preferred_style: None,
            cultural_preference: None,
            required_diets: Vec::new(),
            soft_diets: Vec::new(),
            restricted_ingredients: Vec::new(),
            soft_restricted_ingredients: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_sided_band_accepts_open_end() {
        let req = Request {
            price_min: Some(30.0),
            price_max: None,
            ..Request::default()
        };
        assert!(req.price_in_band(1000.0));
        assert!(!req.price_in_band(29.0));
    }

    #[test]
    fn unset_band_accepts_everything() {
        let req = Request::default();
        assert!(!req.has_price_band());
        assert!(req.price_in_band(0.0));
    }
}
