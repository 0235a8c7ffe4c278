use thiserror::Error;

use crate::github::GitHubError;

#[derive(Error, Debug)]
pub enum IssuesError {
    #[error("Repository is not configured; set github.owner and github.repo in issuedeck.yaml")]
    RepoNotConfigured,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("At least one category label is required (one of: {0})")]
    MissingCategoryLabel(String),

    #[error("Nothing to update; pass at least one of --title, --body, --state, --label")]
    EmptyUpdate,

    #[error(transparent)]
    GitHub(#[from] GitHubError),
}

pub type Result<T> = std::result::Result<T, IssuesError>;
