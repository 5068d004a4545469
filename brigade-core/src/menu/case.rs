use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::menu::Menu;
use super::request::Request;

/// Where a case came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseSource {
    /// Loaded from the seed library at startup.
    Seed,
    /// Retained from live feedback.
    Learned,
    /// Produced by adapting another case.
    Adapted,
}

/// Recorded result of serving a case's menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseOutcome {
    pub success: bool,
    /// Client feedback on the 1-5 scale.
    pub score: f64,
    #[serde(default)]
    pub comment: String,
}

/// A CBR case: one request, the menu that answered it, and its outcome.
///
/// Negative cases document failures and are consulted only to avoid
/// repeating them — they are never adapted into proposals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    pub request: Request,
    pub menu: Menu,
    pub outcome: CaseOutcome,
    /// Times this case seeded a proposal.
    pub usage_count: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_used: Option<DateTime<Utc>>,
    /// Free-form notes appended by retention updates.
    #[serde(default)]
    pub notes: Vec<String>,
    pub source: CaseSource,
    #[serde(default)]
    pub negative: bool,
}

impl Case {
    pub fn new(id: impl Into<String>, request: Request, menu: Menu, outcome: CaseOutcome) -> Self {
        Self {
            id: id.into(),
            request,
            menu,
            outcome,
            usage_count: 0,
            created_at: Utc::now(),
            last_used: None,
            notes: Vec::new(),
            source: CaseSource::Learned,
            negative: false,
        }
    }

    pub fn with_source(mut self, source: CaseSource) -> Self {
        self.source = source;
        self
    }

    pub fn as_negative(mut self) -> Self {
        self.negative = true;
        self
    }

    /// Record one reuse of this case.
    pub fn record_use(&mut self, now: DateTime<Utc>) {
        self.usage_count += 1;
        self.last_used = Some(now);
    }
}

/// Identity equality: two cases are equal if they share an id. Content
/// comparison goes through similarity, not equality.
impl PartialEq for Case {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_id() {
        let req = Request::default();
        let menu = crate::menu::test_support::minimal_menu();
        let outcome = CaseOutcome {
            success: true,
            score: 4.0,
            comment: String::new(),
        };
        let a = Case::new("c1", req.clone(), menu.clone(), outcome.clone());
        let mut b = Case::new("c1", req, menu, outcome);
        b.usage_count = 99;
        assert_eq!(a, b);
    }
}
