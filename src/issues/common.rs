//! Helpers shared by the issue commands.

use crate::github::GitHubClient;
use crate::github::models::{Issue, IssueState};
use crate::issues::category::CategoryTable;
use crate::issues::error::{IssuesError, Result};
use crate::shared::config::Config;

/// Build a client for the configured repository.
pub fn client_from_config(config: &Config) -> Result<GitHubClient> {
    if config.github.owner.is_empty() || config.github.repo.is_empty() {
        return Err(IssuesError::RepoNotConfigured);
    }
    Ok(GitHubClient::new(&config.github.owner, &config.github.repo)?)
}

/// The glyph the list and detail views use for an issue state.
pub fn state_glyph(state: IssueState) -> &'static str {
    match state {
        IssueState::Open => "○",
        IssueState::Closed => "●",
    }
}

/// Format the non-priority labels of an issue for an inline list row,
/// capped at `max`.
pub fn inline_labels(issue: &Issue, max: usize) -> String {
    let priority = issue.priority_label().map(|l| l.name.clone());
    issue
        .labels
        .iter()
        .filter(|l| Some(&l.name) != priority.as_ref())
        .take(max)
        .map(|l| l.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reserved label names joined for error messages.
pub fn reserved_names(table: &CategoryTable) -> String {
    table
        .tabs()
        .iter()
        .filter_map(|t| t.label_name.as_deref())
        .collect::<Vec<_>>()
        .join(", ")
}
