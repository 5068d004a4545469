//! Seed records and snapshot round-trip.
//!
//! Seed cases reference catalog dishes/beverages by id; resolution happens
//! once at load. Snapshots serialize back to the same shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use brigade_core::errors::{CbrResult, StoreError};
use brigade_core::menu::{
    Beverage, Case, CaseOutcome, CaseSource, CulinaryStyle, CulturalTradition, Dish, Menu,
    Request,
};
use brigade_core::traits::ICaseStore;

use crate::store::CaseStore;

/// A stored case in reference form: request fields plus catalog ids plus
/// outcome fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCase {
    pub id: String,
    pub request: Request,
    pub starter_id: String,
    pub main_course_id: String,
    pub dessert_id: String,
    pub beverage_id: String,
    #[serde(default)]
    pub dominant_style: Option<CulinaryStyle>,
    #[serde(default)]
    pub cultural_theme: Option<CulturalTradition>,
    pub outcome: CaseOutcome,
    #[serde(default)]
    pub negative: bool,
    #[serde(default)]
    pub usage_count: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_used: Option<DateTime<Utc>>,
}

/// The full persisted shape: catalogs plus seed cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub dishes: Vec<Dish>,
    pub beverages: Vec<Beverage>,
    pub cases: Vec<SeedCase>,
}

impl CaseStore {
    /// Build a store from catalogs and seed cases, resolving referenced ids.
    pub fn from_seed(
        dishes: Vec<Dish>,
        beverages: Vec<Beverage>,
        seeds: Vec<SeedCase>,
    ) -> CbrResult<Self> {
        let mut store = CaseStore::new(dishes, beverages);
        let seed_count = seeds.len();
        for seed in seeds {
            let case = store.resolve_seed(seed)?;
            store.add_case(case)?;
        }
        info!(cases = seed_count, "case store seeded");
        Ok(store)
    }

    /// Parse a snapshot from JSON and build the store.
    pub fn from_snapshot_json(input: &str) -> CbrResult<Self> {
        let snapshot: StoreSnapshot =
            serde_json::from_str(input).map_err(|e| StoreError::MalformedSeed {
                reason: e.to_string(),
            })?;
        Self::from_seed(snapshot.dishes, snapshot.beverages, snapshot.cases)
    }

    /// Serialize the store back to the seed shape.
    pub fn snapshot(&self) -> StoreSnapshot {
        let mut dishes: Vec<Dish> = Vec::new();
        let mut beverages: Vec<Beverage> = Vec::new();
        let mut seen_dishes = std::collections::BTreeSet::new();
        let mut seen_beverages = std::collections::BTreeSet::new();

        let cases = self
            .all_cases()
            .into_iter()
            .map(|case| {
                for (_, dish) in case.menu.courses() {
                    if seen_dishes.insert(dish.id.clone()) {
                        dishes.push(dish.clone());
                    }
                }
                if seen_beverages.insert(case.menu.beverage.id.clone()) {
                    beverages.push(case.menu.beverage.clone());
                }
                SeedCase {
                    id: case.id.clone(),
                    request: case.request.clone(),
                    starter_id: case.menu.starter.id.clone(),
                    main_course_id: case.menu.main_course.id.clone(),
                    dessert_id: case.menu.dessert.id.clone(),
                    beverage_id: case.menu.beverage.id.clone(),
                    dominant_style: case.menu.dominant_style,
                    cultural_theme: case.menu.cultural_theme,
                    outcome: case.outcome.clone(),
                    negative: case.negative,
                    usage_count: case.usage_count,
                    created_at: Some(case.created_at),
                    last_used: case.last_used,
                }
            })
            .collect();

        // Catalog entries not referenced by any case still belong in the
        // snapshot.
        for dish in self.catalog_dishes() {
            if seen_dishes.insert(dish.id.clone()) {
                dishes.push(dish);
            }
        }
        for beverage in self.catalog_beverages() {
            if seen_beverages.insert(beverage.id.clone()) {
                beverages.push(beverage);
            }
        }

        StoreSnapshot {
            dishes,
            beverages,
            cases,
        }
    }

    fn resolve_seed(&self, seed: SeedCase) -> CbrResult<Case> {
        let resolve_dish = |id: &str| {
            self.dish(id).ok_or_else(|| StoreError::UnknownDish {
                case_id: seed.id.clone(),
                dish_id: id.to_string(),
            })
        };
        let starter = resolve_dish(&seed.starter_id)?;
        let main_course = resolve_dish(&seed.main_course_id)?;
        let dessert = resolve_dish(&seed.dessert_id)?;
        let beverage =
            self.beverage(&seed.beverage_id)
                .ok_or_else(|| StoreError::UnknownBeverage {
                    case_id: seed.id.clone(),
                    beverage_id: seed.beverage_id.clone(),
                })?;

        let mut menu = Menu::new(
            format!("menu-{}", seed.id),
            starter,
            main_course,
            dessert,
            beverage,
        );
        menu.dominant_style = seed.dominant_style;
        menu.cultural_theme = seed.cultural_theme;

        let mut case = Case::new(seed.id, seed.request, menu, seed.outcome)
            .with_source(CaseSource::Seed);
        case.negative = seed.negative;
        case.usage_count = seed.usage_count;
        if let Some(created_at) = seed.created_at {
            case.created_at = created_at;
        }
        case.last_used = seed.last_used;
        Ok(case)
    }

    fn catalog_dishes(&self) -> Vec<Dish> {
        use brigade_core::menu::DishType;
        let mut all = self.dishes_by_type(DishType::Starter);
        all.extend(self.dishes_by_type(DishType::MainCourse));
        all.extend(self.dishes_by_type(DishType::Dessert));
        all
    }

    fn catalog_beverages(&self) -> Vec<Beverage> {
        let mut all = self.beverages_by_alcohol(true);
        all.extend(self.beverages_by_alcohol(false));
        all
    }
}
