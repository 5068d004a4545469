//! # brigade-knowledge
//!
//! Stateless gastronomic domain knowledge: compatibility tables, per-event
//! preferences, seasonal rules, and the ingredient catalog.
//!
//! Everything here is read-only after construction. The engines share one
//! [`KnowledgeBase`] behind an `Arc` — it is injected, never a global.

pub mod categories;
pub mod cultural;
pub mod events;
pub mod flavor;
pub mod ingredients;
pub mod pricing;
pub mod seasonal;
pub mod wine;

pub use ingredients::{IngredientCatalog, IngredientInfo, IngredientSubstitution};

/// The aggregated knowledge source consulted by every phase.
///
/// The static tables are free functions in the submodules; this struct adds
/// the data-driven ingredient catalog and is the single handle passed to the
/// engines.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    pub ingredients: IngredientCatalog,
}

impl KnowledgeBase {
    /// The built-in knowledge base.
    pub fn builtin() -> Self {
        Self {
            ingredients: IngredientCatalog::builtin(),
        }
    }

    /// A knowledge base with a custom ingredient catalog (e.g. loaded from
    /// JSON at startup).
    pub fn with_catalog(catalog: IngredientCatalog) -> Self {
        Self {
            ingredients: catalog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brigade_core::menu::CulturalTradition;

    #[test]
    fn builtin_knowledge_is_queryable() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.ingredients.is_cultural("pasta", CulturalTradition::Italian));
        assert!(kb.ingredients.violates("cream", "vegan"));
    }
}
