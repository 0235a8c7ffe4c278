//! Per-session filter state for the issues view.

use clap::ValueEnum;

use crate::github::models::IssueState;
use crate::issues::category::ALL_CATEGORY_ID;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    Closed,
}

impl StatusFilter {
    pub fn matches(self, state: IssueState) -> bool {
        match self {
            Self::All => true,
            Self::Open => state == IssueState::Open,
            Self::Closed => state == IssueState::Closed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortOption {
    /// Newest first (by creation time).
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
    /// Issue number, ascending.
    NumberAsc,
    /// Issue number, descending.
    NumberDesc,
    /// Title, A to Z.
    TitleAsc,
    /// Title, Z to A.
    TitleDesc,
}

/// Filter state for one view session. Not persisted anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub category: String,
    pub status: StatusFilter,
    /// AND semantics: every selected label must be present.
    pub selected_labels: Vec<String>,
    pub search: String,
    pub sort: SortOption,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORY_ID.to_string(),
            status: StatusFilter::All,
            selected_labels: Vec::new(),
            search: String::new(),
            sort: SortOption::Newest,
        }
    }
}

impl FilterState {
    /// Switch category. Label filters are category-scoped and never carry
    /// across categories, so they are cleared here.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.selected_labels.clear();
    }

}
