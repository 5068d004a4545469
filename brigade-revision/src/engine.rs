//! The revision engine: runs every check, aggregates the status, scores the
//! menu.

use std::sync::Arc;

use tracing::debug;

use brigade_core::config::RevisionConfig;
use brigade_core::errors::CbrResult;
use brigade_core::menu::{Menu, Request};
use brigade_core::models::{
    IssueSeverity, ValidationIssue, ValidationReport, ValidationStatus,
};
use brigade_core::traits::IReviser;
use brigade_knowledge::KnowledgeBase;

use crate::checks;
use crate::score::quality_score;

pub struct Reviser {
    knowledge: Arc<KnowledgeBase>,
    config: RevisionConfig,
}

impl Reviser {
    pub fn new(knowledge: Arc<KnowledgeBase>, config: RevisionConfig) -> Self {
        Self { knowledge, config }
    }

    /// Validate with an optional historical feedback score from the source
    /// case, which feeds the small score bonus.
    pub fn validate_with_history(
        &self,
        menu: &Menu,
        request: &Request,
        source_feedback: Option<f64>,
    ) -> CbrResult<ValidationReport> {
        let catalog = &self.knowledge.ingredients;

        let mut issues: Vec<ValidationIssue> = Vec::new();
        issues.extend(checks::pricing::check_price(menu, request));
        issues.extend(checks::cultural::check_culture(menu, request, catalog));
        issues.extend(checks::seasonal::check_temperature(menu, request));
        issues.extend(checks::gastronomy::check_flavors(menu));
        issues.extend(checks::gastronomy::check_categories(menu));
        issues.extend(checks::seasonal::check_calories(menu, request));
        issues.extend(checks::gastronomy::check_dessert_after_fatty(menu));
        issues.extend(checks::event::check_complexity(menu, request));
        issues.extend(checks::pricing::check_proportions(menu, request));
        issues.extend(checks::constraints::check_diets(menu, request));
        issues.extend(checks::constraints::check_allergens(menu, request));
        issues.extend(checks::constraints::check_soft_preferences(menu, request));

        let errors = issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Error)
            .count();
        let warnings = issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Warning)
            .count();

        let status = if errors > 0 {
            ValidationStatus::Invalid
        } else if warnings > self.config.warning_budget
            || (self.config.strict_mode && warnings > 0)
        {
            ValidationStatus::Invalid
        } else if warnings > 0 {
            ValidationStatus::ValidWithWarnings
        } else {
            ValidationStatus::Valid
        };

        let score = quality_score(menu, request, &issues, catalog, source_feedback);
        debug!(menu = %menu.id, ?status, errors, warnings, score, "menu validated");

        Ok(ValidationReport {
            status,
            issues,
            score,
        })
    }
}

impl IReviser for Reviser {
    fn validate(&self, menu: &Menu, request: &Request) -> CbrResult<ValidationReport> {
        self.validate_with_history(menu, request, None)
    }
}
