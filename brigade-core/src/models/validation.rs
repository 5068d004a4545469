use serde::{Deserialize, Serialize};

/// Outcome of validating one menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    Valid,
    ValidWithWarnings,
    Invalid,
}

/// Severity of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    /// Hard violation — the menu cannot be proposed.
    Error,
    /// Soft shortfall — counts against the warning budget.
    Warning,
    /// Informational only.
    Info,
}

/// Which check raised the issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Price,
    Culture,
    Temperature,
    Flavors,
    Categories,
    Calories,
    Dessert,
    Complexity,
    Proportions,
    Dietary,
    Ingredients,
}

/// One graded issue found during revision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub category: IssueCategory,
    pub message: String,
    #[serde(default)]
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    pub fn error(category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            category,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn warning(category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            category,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn info(category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Info,
            category,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Aggregated validation result for one menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub status: ValidationStatus,
    pub issues: Vec<ValidationIssue>,
    /// Weighted quality score in [0, 100].
    pub score: f64,
}

impl ValidationReport {
    /// Whether the menu may be presented to the client.
    pub fn is_valid(&self) -> bool {
        matches!(
            self.status,
            ValidationStatus::Valid | ValidationStatus::ValidWithWarnings
        )
    }

    pub fn count(&self, severity: IssueSeverity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    /// Primary reason a rejected menu was rejected.
    pub fn rejection_reason(&self) -> Option<&str> {
        self.issues
            .iter()
            .find(|i| i.severity == IssueSeverity::Error)
            .map(|i| i.message.as_str())
            .or_else(|| {
                (!self.is_valid()).then_some("rejected by accumulated warnings")
            })
    }
}
