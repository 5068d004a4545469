//! The ingredient catalog: interchange groups, culture tags, and diet
//! violation labels, with reverse indices and substitution search.
//!
//! Substitution never leaves an ingredient's group — groups bound the
//! search space so a swap keeps the dish gastronomically coherent.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use brigade_core::menu::CulturalTradition;

use crate::cultural::cultural_affinity;

/// Neutral credit for ingredients the catalog has never seen.
const UNKNOWN_INGREDIENT_CREDIT: f64 = 0.5;

/// Credit for universal ingredients evaluated against any culture.
const UNIVERSAL_CREDIT: f64 = 0.6;

/// Affinity above which another culture counts as "similar" for
/// substitution purposes.
const SIMILAR_CULTURE_THRESHOLD: f64 = 0.6;

/// Per-ingredient knowledge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngredientInfo {
    /// Traditions this ingredient is characteristic of.
    #[serde(default)]
    pub cultures: Vec<CulturalTradition>,
    /// Pantry staples that belong everywhere.
    #[serde(default)]
    pub universal: bool,
    /// Diet labels this ingredient VIOLATES (e.g. cream violates "vegan").
    #[serde(default)]
    pub non_compliant: BTreeSet<String>,
}

/// A proposed ingredient substitution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientSubstitution {
    pub original: String,
    pub replacement: String,
    pub reason: String,
    /// How confident the catalog is in the swap, in [0, 1].
    pub confidence: f64,
}

/// The catalog: groups of interchangeable ingredients plus per-ingredient
/// info, with reverse indices built once after construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngredientCatalog {
    /// Group name -> members, in preference order.
    pub groups: BTreeMap<String, Vec<String>>,
    pub ingredients: BTreeMap<String, IngredientInfo>,
    #[serde(skip)]
    ingredient_to_group: BTreeMap<String, String>,
    #[serde(skip)]
    culture_to_ingredients: BTreeMap<CulturalTradition, BTreeSet<String>>,
}

impl IngredientCatalog {
    /// Build the reverse indices. Must run after construction or
    /// deserialization, before queries.
    pub fn build_indices(&mut self) {
        self.ingredient_to_group = self
            .groups
            .iter()
            .flat_map(|(g, members)| members.iter().map(move |m| (m.clone(), g.clone())))
            .collect();
        self.culture_to_ingredients.clear();
        for (name, info) in &self.ingredients {
            for culture in &info.cultures {
                self.culture_to_ingredients
                    .entry(*culture)
                    .or_default()
                    .insert(name.clone());
            }
        }
    }

    /// Load a catalog from its JSON shape and build indices.
    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        let mut catalog: IngredientCatalog = serde_json::from_str(input)?;
        catalog.build_indices();
        Ok(catalog)
    }

    pub fn group_of(&self, ingredient: &str) -> Option<&str> {
        self.ingredient_to_group.get(ingredient).map(String::as_str)
    }

    pub fn ingredients_of_culture(&self, culture: CulturalTradition) -> Option<&BTreeSet<String>> {
        self.culture_to_ingredients.get(&culture)
    }

    /// Whether the ingredient violates a diet label. Unknown ingredients
    /// violate nothing.
    pub fn violates(&self, ingredient: &str, label: &str) -> bool {
        self.ingredients
            .get(ingredient)
            .map_or(false, |i| i.non_compliant.contains(label))
    }

    /// The subset of `labels` that `ingredient` violates.
    pub fn violated_labels<'a>(&self, ingredient: &str, labels: &'a [String]) -> Vec<&'a str> {
        labels
            .iter()
            .filter(|l| self.violates(ingredient, l))
            .map(String::as_str)
            .collect()
    }

    /// Whether the ingredient is characteristic of the tradition.
    pub fn is_cultural(&self, ingredient: &str, tradition: CulturalTradition) -> bool {
        self.ingredients
            .get(ingredient)
            .map_or(false, |i| i.cultures.contains(&tradition))
    }

    /// Cultural credit of one ingredient for a target tradition, in [0, 1].
    ///
    /// Target-tagged ingredients score 1.0; foreign ones score their best
    /// tagged-culture affinity, universals at least 0.6, unknowns neutral.
    pub fn cultural_credit(&self, ingredient: &str, target: CulturalTradition) -> f64 {
        let Some(info) = self.ingredients.get(ingredient) else {
            return UNKNOWN_INGREDIENT_CREDIT;
        };
        if info.cultures.contains(&target) {
            return 1.0;
        }
        let mut credit = info
            .cultures
            .iter()
            .map(|c| cultural_affinity(target, *c))
            .fold(0.0, f64::max);
        if info.universal {
            credit = credit.max(UNIVERSAL_CREDIT);
        }
        if credit == 0.0 {
            // Tagged with nothing at all: mildly off-theme.
            credit = 0.4;
        }
        credit
    }

    /// Fraction-weighted cultural fit of an ingredient list, in [0, 1].
    /// Empty lists are neutral.
    pub fn cultural_fit(&self, ingredients: &[String], target: CulturalTradition) -> f64 {
        if ingredients.is_empty() {
            return UNKNOWN_INGREDIENT_CREDIT;
        }
        let total: f64 = ingredients
            .iter()
            .map(|i| self.cultural_credit(i, target))
            .sum();
        total / ingredients.len() as f64
    }

    /// Same-group substitution satisfying ALL the given diet labels.
    ///
    /// Returns `None` when the ingredient already complies, or when its
    /// group holds no compliant alternative (the dish cannot be adapted).
    pub fn find_dietary_substitution(
        &self,
        ingredient: &str,
        labels: &[String],
    ) -> Option<IngredientSubstitution> {
        let violated = self.violated_labels(ingredient, labels);
        if violated.is_empty() {
            return None;
        }
        let group = self.group_of(ingredient)?;
        let members = self.groups.get(group)?;
        let replacement = members.iter().find(|m| {
            m.as_str() != ingredient && labels.iter().all(|l| !self.violates(m, l))
        })?;
        Some(IngredientSubstitution {
            original: ingredient.to_string(),
            replacement: replacement.clone(),
            reason: format!(
                "violates {}; same group ({group})",
                violated.join(", ")
            ),
            confidence: 0.9,
        })
    }

    /// Same-group substitution toward a target culture.
    ///
    /// Preference order: target-culture member (0.9), member of a similar
    /// culture by affinity (0.8), universal member (0.7). Ingredients
    /// already on-theme or themselves universal are left alone.
    pub fn find_cultural_substitution(
        &self,
        ingredient: &str,
        target: CulturalTradition,
    ) -> Option<IngredientSubstitution> {
        if self.is_cultural(ingredient, target) {
            return None;
        }
        // Universal ingredients fit everywhere; leave them be.
        if self
            .ingredients
            .get(ingredient)
            .map_or(false, |i| i.universal)
        {
            return None;
        }

        if let Some(group) = self.group_of(ingredient) {
            let members = self.groups.get(group).map(Vec::as_slice).unwrap_or(&[]);

            // 1. A member specific to the target culture.
            if let Some(m) = members
                .iter()
                .find(|m| m.as_str() != ingredient && self.is_cultural(m, target))
            {
                return Some(IngredientSubstitution {
                    original: ingredient.to_string(),
                    replacement: m.clone(),
                    reason: format!("same group ({group}), specific to the target cuisine"),
                    confidence: 0.9,
                });
            }

            // 2. A member from a similar culture, best affinity first.
            let mut similar: Vec<(&String, f64)> = members
                .iter()
                .filter(|m| m.as_str() != ingredient)
                .filter_map(|m| {
                    let best = self
                        .ingredients
                        .get(m)?
                        .cultures
                        .iter()
                        .map(|c| cultural_affinity(target, *c))
                        .fold(0.0, f64::max);
                    (best >= SIMILAR_CULTURE_THRESHOLD).then_some((m, best))
                })
                .collect();
            similar.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
            if let Some((m, affinity)) = similar.first() {
                return Some(IngredientSubstitution {
                    original: ingredient.to_string(),
                    replacement: (*m).clone(),
                    reason: format!(
                        "same group ({group}), from a similar culture (affinity {affinity:.2})"
                    ),
                    confidence: 0.8,
                });
            }

            // 3. A universal member.
            if let Some(m) = members.iter().find(|m| {
                m.as_str() != ingredient
                    && self.ingredients.get(*m).map_or(false, |i| i.universal)
            }) {
                return Some(IngredientSubstitution {
                    original: ingredient.to_string(),
                    replacement: m.clone(),
                    reason: format!("same group ({group}), universal ingredient"),
                    confidence: 0.7,
                });
            }
        }

        None
    }

    /// The built-in catalog.
    pub fn builtin() -> Self {
        use CulturalTradition::*;

        // (name, group, cultures, universal, violated diet labels)
        type Row = (
            &'static str,
            &'static str,
            &'static [CulturalTradition],
            bool,
            &'static [&'static str],
        );
        const ROWS: &[Row] = &[
            // Cooking fats
            ("olive-oil", "cooking-fats", &[Mediterranean, Italian, Spanish, Greek, Catalan], true, &[]),
            ("butter", "cooking-fats", &[French], false, &["vegan", "dairy-free"]),
            ("coconut-oil", "cooking-fats", &[], true, &[]),
            ("sesame-oil", "cooking-fats", &[Japanese], false, &[]),
            // Animal and plant proteins
            ("beef", "proteins", &[], true, &["vegan", "vegetarian", "pescatarian"]),
            ("lamb", "proteins", &[Moroccan, Turkish], false, &["vegan", "vegetarian", "pescatarian"]),
            ("pork", "proteins", &[Spanish], false, &["vegan", "vegetarian", "pescatarian", "pork-free"]),
            ("chicken", "proteins", &[], true, &["vegan", "vegetarian", "pescatarian"]),
            ("turkey", "proteins", &[], true, &["vegan", "vegetarian", "pescatarian"]),
            ("duck", "proteins", &[French], false, &["vegan", "vegetarian", "pescatarian"]),
            ("tofu", "proteins", &[Japanese], true, &[]),
            ("seitan", "proteins", &[], true, &["gluten-free"]),
            ("tempeh", "proteins", &[], true, &[]),
            // Fish and seafood
            ("cod", "fish", &[Basque, Galician, Nordic], false, &["vegan", "vegetarian"]),
            ("sea-bass", "fish", &[Mediterranean], false, &["vegan", "vegetarian"]),
            ("salmon", "fish", &[Nordic], false, &["vegan", "vegetarian"]),
            ("tuna", "fish", &[Japanese], false, &["vegan", "vegetarian"]),
            ("octopus", "fish", &[Galician], false, &["vegan", "vegetarian", "shellfish-free"]),
            ("shrimp", "fish", &[Spanish], false, &["vegan", "vegetarian", "shellfish-free"]),
            // Dairy and its stand-ins
            ("cream", "dairy", &[French], false, &["vegan", "dairy-free"]),
            ("milk", "dairy", &[], true, &["vegan", "dairy-free"]),
            ("cheese", "dairy", &[French, Italian], false, &["vegan", "dairy-free"]),
            ("parmesan", "dairy", &[Italian], false, &["vegan", "dairy-free"]),
            ("feta", "dairy", &[Greek], false, &["vegan", "dairy-free"]),
            ("yogurt", "dairy", &[Turkish], false, &["vegan", "dairy-free"]),
            ("idiazabal", "dairy", &[Basque], false, &["vegan", "dairy-free"]),
            ("sour-cream", "dairy", &[Russian], false, &["vegan", "dairy-free"]),
            ("coconut-cream", "dairy", &[], true, &[]),
            ("coconut-milk", "dairy", &[], true, &[]),
            ("almond-milk", "dairy", &[], true, &["nut-free"]),
            // Eggs and binders
            ("egg", "binders", &[], true, &["vegan"]),
            ("aquafaba", "binders", &[], true, &[]),
            ("gelatin", "setting-agents", &[], true, &["vegan", "vegetarian"]),
            ("agar-agar", "setting-agents", &[Japanese], true, &[]),
            // Grains and starches
            ("flour", "grains", &[], true, &["gluten-free"]),
            ("pasta", "grains", &[Italian], false, &["gluten-free"]),
            ("couscous", "grains", &[Moroccan], false, &["gluten-free"]),
            ("rye", "grains", &[Nordic], false, &["gluten-free"]),
            ("breadcrumbs", "grains", &[], true, &["gluten-free"]),
            ("rice", "grains", &[Japanese, Spanish], true, &[]),
            ("quinoa", "grains", &[], true, &[]),
            ("corn", "grains", &[Mexican], false, &[]),
            ("polenta", "grains", &[Italian], false, &[]),
            // Legumes
            ("chickpeas", "legumes", &[Lebanese, Moroccan], true, &[]),
            ("lentils", "legumes", &[], true, &[]),
            ("beans", "legumes", &[Mexican], true, &[]),
            ("white-beans", "legumes", &[Spanish], false, &[]),
            // Vegetables
            ("tomato", "vegetables", &[Mediterranean, Italian, Spanish], true, &[]),
            ("onion", "vegetables", &[], true, &[]),
            ("garlic", "vegetables", &[Mediterranean, Spanish], true, &[]),
            ("peppers", "vegetables", &[Basque, Spanish], false, &[]),
            ("eggplant", "vegetables", &[Turkish, Mediterranean], false, &[]),
            ("zucchini", "vegetables", &[Mediterranean], false, &[]),
            ("pumpkin", "vegetables", &[], true, &[]),
            ("potato", "vegetables", &[Galician, Russian], true, &[]),
            ("beets", "vegetables", &[Russian], false, &[]),
            ("carrots", "vegetables", &[], true, &[]),
            ("cabbage", "vegetables", &[], true, &[]),
            ("kale", "vegetables", &[Nordic], false, &[]),
            ("cucumber", "vegetables", &[Greek], false, &[]),
            ("turnip-greens", "vegetables", &[Galician], false, &[]),
            ("root-vegetables", "vegetables", &[Nordic], false, &[]),
            ("sweet-potato", "vegetables", &[], true, &[]),
            ("mushrooms", "vegetables", &[], true, &[]),
            // Herbs, spices, condiments
            ("basil", "herbs", &[Italian], false, &[]),
            ("oregano", "herbs", &[Greek, Italian], false, &[]),
            ("parsley", "herbs", &[Lebanese], true, &[]),
            ("cilantro", "herbs", &[Mexican], false, &[]),
            ("dill", "herbs", &[Russian, Nordic], false, &[]),
            ("herbs", "herbs", &[French], true, &[]),
            ("mint", "herbs", &[Moroccan, Lebanese], false, &[]),
            ("spices", "spices", &[Moroccan, Turkish], true, &[]),
            ("paprika", "spices", &[Spanish], false, &[]),
            ("saffron", "spices", &[Spanish], false, &[]),
            ("chili", "spices", &[Mexican], false, &[]),
            ("cumin", "spices", &[Moroccan], false, &[]),
            ("cinnamon", "spices", &[Moroccan], true, &[]),
            ("ginger", "spices", &[Japanese], false, &[]),
            ("wasabi", "spices", &[Japanese], false, &[]),
            ("pepper", "spices", &[], true, &[]),
            ("salt", "spices", &[], true, &[]),
            ("miso", "condiments", &[Japanese], false, &[]),
            ("soy-sauce", "condiments", &[Japanese], false, &["gluten-free"]),
            ("tahini", "condiments", &[Lebanese], false, &["nut-free"]),
            ("romesco", "condiments", &[Catalan], false, &["nut-free"]),
            ("vinegar", "condiments", &[], true, &[]),
            ("mustard", "condiments", &[French], false, &[]),
            ("lemon", "citrus", &[Mediterranean, Greek], true, &[]),
            ("lime", "citrus", &[Mexican], false, &[]),
            ("orange", "citrus", &[Mediterranean, Spanish], false, &[]),
            ("seaweed", "condiments", &[Japanese], false, &[]),
            // Sweeteners
            ("sugar", "sweeteners", &[], true, &[]),
            ("honey", "sweeteners", &[Greek], true, &["vegan"]),
            ("maple-syrup", "sweeteners", &[], true, &[]),
            ("dates", "sweeteners", &[Moroccan], false, &[]),
            ("agave", "sweeteners", &[Mexican], false, &[]),
            // Nuts and seeds
            ("almonds", "nuts", &[Catalan, Moroccan], false, &["nut-free"]),
            ("walnuts", "nuts", &[French], false, &["nut-free"]),
            ("pine-nuts", "nuts", &[Catalan, Mediterranean], false, &["nut-free"]),
            ("hazelnuts", "nuts", &[Catalan], false, &["nut-free"]),
            ("seeds", "nuts", &[], true, &[]),
            // Fruits
            ("apple", "fruits", &[], true, &[]),
            ("berries", "fruits", &[Nordic], false, &[]),
            ("mango", "fruits", &[], true, &[]),
            ("grapes", "fruits", &[Spanish, French], false, &[]),
            ("peach", "fruits", &[], true, &[]),
            ("fig", "fruits", &[Mediterranean, Greek], false, &[]),
            // Dessert bases and wine
            ("chocolate", "dessert-bases", &[], true, &[]),
            ("vanilla", "dessert-bases", &[], true, &[]),
            ("wine", "wines", &[French, Spanish], false, &[]),
            ("txakoli", "wines", &[Basque], false, &[]),
        ];

        let mut catalog = IngredientCatalog::default();
        for (name, group, cultures, universal, non_compliant) in ROWS {
            catalog
                .groups
                .entry((*group).to_string())
                .or_default()
                .push((*name).to_string());
            catalog.ingredients.insert(
                (*name).to_string(),
                IngredientInfo {
                    cultures: cultures.to_vec(),
                    universal: *universal,
                    non_compliant: non_compliant.iter().map(|s| s.to_string()).collect(),
                },
            );
        }
        catalog.build_indices();
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dietary_substitution_stays_in_group() {
        let catalog = IngredientCatalog::builtin();
        let sub = catalog
            .find_dietary_substitution("cream", &["vegan".into()])
            .unwrap();
        assert_eq!(catalog.group_of(&sub.replacement), Some("dairy"));
        assert!(!catalog.violates(&sub.replacement, "vegan"));
    }

    #[test]
    fn compliant_ingredient_needs_no_substitution() {
        let catalog = IngredientCatalog::builtin();
        assert!(catalog
            .find_dietary_substitution("tomato", &["vegan".into()])
            .is_none());
    }

    #[test]
    fn meat_has_a_vegan_stand_in() {
        let catalog = IngredientCatalog::builtin();
        let sub = catalog
            .find_dietary_substitution("chicken", &["vegan".into()])
            .unwrap();
        assert!(["tofu", "seitan", "tempeh"].contains(&sub.replacement.as_str()));
    }

    #[test]
    fn multiple_labels_must_all_hold() {
        let catalog = IngredientCatalog::builtin();
        // vegan + gluten-free rules out seitan.
        let sub = catalog
            .find_dietary_substitution("beef", &["vegan".into(), "gluten-free".into()])
            .unwrap();
        assert_ne!(sub.replacement, "seitan");
    }

    #[test]
    fn cultural_credit_ranks_home_similar_foreign() {
        use CulturalTradition::*;
        let catalog = IngredientCatalog::builtin();
        let home = catalog.cultural_credit("pasta", Italian);
        let near = catalog.cultural_credit("pasta", Spanish);
        let far = catalog.cultural_credit("pasta", Japanese);
        assert_eq!(home, 1.0);
        assert!(near > far);
    }

    #[test]
    fn cultural_substitution_prefers_target_culture() {
        use CulturalTradition::*;
        let catalog = IngredientCatalog::builtin();
        let sub = catalog.find_cultural_substitution("basil", Greek).unwrap();
        assert_eq!(catalog.group_of(&sub.replacement), Some("herbs"));
        assert!(catalog.is_cultural(&sub.replacement, Greek));
    }

    #[test]
    fn universal_ingredients_are_left_alone() {
        use CulturalTradition::*;
        let catalog = IngredientCatalog::builtin();
        assert!(catalog.find_cultural_substitution("salt", Japanese).is_none());
    }

    #[test]
    fn json_round_trip_rebuilds_indices() {
        let catalog = IngredientCatalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        let reloaded = IngredientCatalog::from_json(&json).unwrap();
        assert_eq!(reloaded.group_of("cream"), Some("dairy"));
    }
}
