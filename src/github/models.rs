//! Typed models for the tracker's REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Issue state as reported by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// A repository label. Immutable once fetched; refreshed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: i64,
    /// Unique within a repository.
    pub name: String,
    /// 6 hex digits, no leading `#`.
    pub color: String,
    pub description: Option<String>,
}

/// The user embedded in issues and comments. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub avatar_url: String,
}

/// An issue fetched from the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,
    /// Human-facing number, unique within the repository.
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub state: IssueState,
    pub labels: Vec<Label>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: User,
    pub html_url: String,
}

impl Issue {
    /// Whether the issue carries a label with the given name.
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l.name == name)
    }

    /// The label signaling this issue's priority, if any: literally
    /// `critical`, or any label whose name contains `priority`.
    pub fn priority_label(&self) -> Option<&Label> {
        self.labels
            .iter()
            .find(|l| l.name == "critical" || l.name.contains("priority"))
    }
}

/// A comment on an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub body: String,
    pub user: User,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub html_url: String,
}

/// Request body for creating an issue.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateIssueParams {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

/// Request body for a partial issue update. Omitted fields are left
/// unchanged server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateIssueParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<IssueState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl UpdateIssueParams {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.state.is_none() && self.labels.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::factories;
    use rstest::rstest;

    #[test]
    fn issue_state_round_trips_lowercase() {
        let json = serde_json::to_string(&IssueState::Closed).unwrap();
        assert_eq!(json, "\"closed\"");
        let back: IssueState = serde_json::from_str("\"open\"").unwrap();
        assert_eq!(back, IssueState::Open);
    }

    #[rstest]
    #[case::literal_critical(vec!["critical"], Some("critical"))]
    #[case::priority_substring(vec!["bug", "medium-priority"], Some("medium-priority"))]
    #[case::first_match_wins(vec!["critical", "high-priority"], Some("critical"))]
    #[case::no_priority(vec!["bug", "docs"], None)]
    fn priority_label_uses_loose_match(
        #[case] labels: Vec<&str>,
        #[case] expected: Option<&str>,
    ) {
        let issue = factories::issue_with(|i| {
            i.labels = labels.iter().map(|n| factories::label(n)).collect();
        });
        assert_eq!(issue.priority_label().map(|l| l.name.as_str()), expected);
    }

    #[test]
    fn update_params_skip_omitted_fields() {
        let params = UpdateIssueParams {
            state: Some(IssueState::Closed),
            ..Default::default()
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "closed" }));
    }
}
