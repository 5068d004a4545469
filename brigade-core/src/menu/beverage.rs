use serde::{Deserialize, Serialize};

use super::enums::Flavor;

/// A catalog beverage. Catalog-immutable like [`super::Dish`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beverage {
    pub id: String,
    pub name: String,
    pub alcoholic: bool,
    /// Price per guest.
    pub price: f64,
    /// Beverage kind, e.g. "red-wine", "white-wine", "herbal-tea".
    pub kind: String,
    /// Wine subtype when declared, e.g. "dry", "fruity", "full-bodied".
    #[serde(default)]
    pub subtype: Option<String>,
    /// Dish flavors this beverage pairs with.
    #[serde(default)]
    pub compatible_flavors: Vec<Flavor>,
}
