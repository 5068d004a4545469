use crate::errors::CbrResult;
use crate::menu::{Beverage, Case, CulinaryStyle, Dish, DishType, EventType, Season};

/// Case store seam: CRUD + indexed queries + catalog lookups + maintenance.
///
/// Queries return owned clones; the engine is single-threaded and callers
/// must serialize access externally (index rebuild and insertion are not
/// atomic against concurrent readers).
pub trait ICaseStore {
    // --- Cases ---
    fn add_case(&mut self, case: Case) -> CbrResult<()>;
    /// Replace an existing case (matched by id) and reindex it.
    fn update_case(&mut self, case: Case) -> CbrResult<()>;
    fn remove_cases(&mut self, ids: &[String]) -> CbrResult<usize>;
    fn get_case(&self, id: &str) -> Option<Case>;
    fn all_cases(&self) -> Vec<Case>;
    fn case_count(&self) -> usize;
    /// Bump a case's usage counter and last-used stamp.
    fn record_case_use(&mut self, id: &str) -> CbrResult<()>;

    // --- Indexed queries ---
    fn cases_by_event(&self, event: EventType) -> Vec<Case>;
    fn cases_by_price_range(&self, min: f64, max: f64) -> Vec<Case>;
    /// Includes year-round (`Any`) cases for concrete seasons.
    fn cases_by_season(&self, season: Season) -> Vec<Case>;
    fn cases_by_style(&self, style: CulinaryStyle) -> Vec<Case>;

    // --- Catalog ---
    fn dish(&self, id: &str) -> Option<Dish>;
    fn beverage(&self, id: &str) -> Option<Beverage>;
    fn dishes_by_type(&self, dish_type: DishType) -> Vec<Dish>;
    fn beverages_by_alcohol(&self, alcoholic: bool) -> Vec<Beverage>;

    // --- Maintenance ---
    fn rebuild_indices(&mut self);
}
