use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use brigade_core::errors::{CbrResult, StoreError};
use brigade_core::menu::{Beverage, Case, CulinaryStyle, Dish, DishType, EventType, Season};
use brigade_core::traits::ICaseStore;

/// Absolute price band a case's menu total falls into. Index key only;
/// proposal buckets are relative to the request band instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceBand {
    Low,
    Medium,
    High,
    Premium,
}

impl PriceBand {
    pub fn classify(total: f64) -> Self {
        if total < 30.0 {
            PriceBand::Low
        } else if total < 60.0 {
            PriceBand::Medium
        } else if total < 100.0 {
            PriceBand::High
        } else {
            PriceBand::Premium
        }
    }
}

/// The in-memory case store.
#[derive(Debug, Default)]
pub struct CaseStore {
    cases: Vec<Case>,
    dishes: BTreeMap<String, Dish>,
    beverages: BTreeMap<String, Beverage>,
    // Secondary indices hold case ids.
    by_event: BTreeMap<EventType, Vec<String>>,
    by_season: BTreeMap<Season, Vec<String>>,
    by_style: BTreeMap<CulinaryStyle, Vec<String>>,
    by_band: BTreeMap<PriceBand, Vec<String>>,
}

impl CaseStore {
    pub fn new(dishes: Vec<Dish>, beverages: Vec<Beverage>) -> Self {
        Self {
            cases: Vec::new(),
            dishes: dishes.into_iter().map(|d| (d.id.clone(), d)).collect(),
            beverages: beverages.into_iter().map(|b| (b.id.clone(), b)).collect(),
            by_event: BTreeMap::new(),
            by_season: BTreeMap::new(),
            by_style: BTreeMap::new(),
            by_band: BTreeMap::new(),
        }
    }

    fn index_case(&mut self, case: &Case) {
        let id = case.id.clone();
        self.by_event
            .entry(case.request.event_type)
            .or_default()
            .push(id.clone());
        self.by_season
            .entry(case.request.season)
            .or_default()
            .push(id.clone());
        if let Some(style) = case.menu.dominant_style {
            self.by_style.entry(style).or_default().push(id.clone());
        }
        self.by_band
            .entry(PriceBand::classify(case.menu.total_price))
            .or_default()
            .push(id);
    }

    fn cases_from_ids(&self, ids: Option<&Vec<String>>) -> Vec<Case> {
        ids.map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .filter_map(|id| self.cases.iter().find(|c| &c.id == id))
            .cloned()
            .collect()
    }
}

impl ICaseStore for CaseStore {
    fn add_case(&mut self, case: Case) -> CbrResult<()> {
        if self.cases.iter().any(|c| c.id == case.id) {
            return Err(StoreError::DuplicateCase { id: case.id }.into());
        }
        self.index_case(&case);
        self.cases.push(case);
        Ok(())
    }

    fn update_case(&mut self, case: Case) -> CbrResult<()> {
        let slot = self
            .cases
            .iter_mut()
            .find(|c| c.id == case.id)
            .ok_or_else(|| StoreError::CaseNotFound {
                id: case.id.clone(),
            })?;
        *slot = case;
        // Price band or style may have moved.
        self.rebuild_indices();
        Ok(())
    }

    fn remove_cases(&mut self, ids: &[String]) -> CbrResult<usize> {
        let before = self.cases.len();
        self.cases.retain(|c| !ids.contains(&c.id));
        let removed = before - self.cases.len();
        if removed > 0 {
            self.rebuild_indices();
            debug!(removed, "cases removed from store");
        }
        Ok(removed)
    }

    fn get_case(&self, id: &str) -> Option<Case> {
        self.cases.iter().find(|c| c.id == id).cloned()
    }

    fn all_cases(&self) -> Vec<Case> {
        self.cases.clone()
    }

    fn case_count(&self) -> usize {
        self.cases.len()
    }

    fn record_case_use(&mut self, id: &str) -> CbrResult<()> {
        let case = self
            .cases
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::CaseNotFound { id: id.to_string() })?;
        case.record_use(Utc::now());
        Ok(())
    }

    fn cases_by_event(&self, event: EventType) -> Vec<Case> {
        self.cases_from_ids(self.by_event.get(&event))
    }

    fn cases_by_price_range(&self, min: f64, max: f64) -> Vec<Case> {
        self.cases
            .iter()
            .filter(|c| (min..=max).contains(&c.menu.total_price))
            .cloned()
            .collect()
    }

    fn cases_by_season(&self, season: Season) -> Vec<Case> {
        let mut result = self.cases_from_ids(self.by_season.get(&season));
        if season != Season::Any {
            // Year-round cases serve every concrete season.
            for case in self.cases_from_ids(self.by_season.get(&Season::Any)) {
                if !result.iter().any(|c| c.id == case.id) {
                    result.push(case);
                }
            }
        }
        result
    }

    fn cases_by_style(&self, style: CulinaryStyle) -> Vec<Case> {
        self.cases_from_ids(self.by_style.get(&style))
    }

    fn dish(&self, id: &str) -> Option<Dish> {
        self.dishes.get(id).cloned()
    }

    fn beverage(&self, id: &str) -> Option<Beverage> {
        self.beverages.get(id).cloned()
    }

    fn dishes_by_type(&self, dish_type: DishType) -> Vec<Dish> {
        self.dishes
            .values()
            .filter(|d| d.dish_type == dish_type)
            .cloned()
            .collect()
    }

    fn beverages_by_alcohol(&self, alcoholic: bool) -> Vec<Beverage> {
        self.beverages
            .values()
            .filter(|b| b.alcoholic == alcoholic)
            .cloned()
            .collect()
    }

    fn rebuild_indices(&mut self) {
        self.by_event.clear();
        self.by_season.clear();
        self.by_style.clear();
        self.by_band.clear();
        let cases = std::mem::take(&mut self.cases);
        for case in &cases {
            self.index_case(case);
        }
        self.cases = cases;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_cut_points() {
        assert_eq!(PriceBand::classify(25.0), PriceBand::Low);
        assert_eq!(PriceBand::classify(45.0), PriceBand::Medium);
        assert_eq!(PriceBand::classify(75.0), PriceBand::High);
        assert_eq!(PriceBand::classify(120.0), PriceBand::Premium);
    }
}
