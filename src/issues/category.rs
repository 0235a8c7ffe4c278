//! Category tabs and their reserved label names.
//!
//! Each non-"all" category is backed by exactly one reserved label name: an
//! issue belongs to the category iff it carries that label. The table is the
//! single place reserved names live; membership checks, facet exclusion and
//! the save-time category invariant all consult it.

use crate::github::models::Issue;
use crate::shared::config::CategoryConfig;

pub const ALL_CATEGORY_ID: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTab {
    pub id: String,
    pub label: String,
    /// Reserved label name; `None` only for the built-in "all" tab.
    pub label_name: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    tabs: Vec<CategoryTab>,
}

impl CategoryTable {
    /// Build the table from config, prepending the built-in "all" tab.
    pub fn from_config(categories: &[CategoryConfig]) -> Self {
        let mut tabs = vec![CategoryTab {
            id: ALL_CATEGORY_ID.to_string(),
            label: "All".to_string(),
            label_name: None,
            color: None,
        }];
        tabs.extend(categories.iter().map(|c| CategoryTab {
            id: c.id.clone(),
            label: c.label.clone(),
            label_name: Some(c.label_name.clone()),
            color: Some(c.color.clone()),
        }));
        Self { tabs }
    }

    pub fn tabs(&self) -> &[CategoryTab] {
        &self.tabs
    }

    /// Look up a tab by id; unknown ids fall back to "all" so a stale
    /// selection degrades instead of erroring.
    pub fn tab(&self, id: &str) -> &CategoryTab {
        self.tabs.iter().find(|t| t.id == id).unwrap_or(&self.tabs[0])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tabs.iter().any(|t| t.id == id)
    }

    /// Whether `label_name` is reserved by some category.
    pub fn is_reserved(&self, label_name: &str) -> bool {
        self.tabs
            .iter()
            .any(|t| t.label_name.as_deref() == Some(label_name))
    }

    /// Whether the issue belongs to the tab: label-set membership for named
    /// categories, everything for "all".
    pub fn issue_in_tab(&self, tab: &CategoryTab, issue: &Issue) -> bool {
        match &tab.label_name {
            None => true,
            Some(name) => issue.has_label(name),
        }
    }

    /// Save-time invariant: an edited label set must keep at least one
    /// category label. Vacuously true when no categories are configured.
    pub fn has_category_label(&self, label_names: &[String]) -> bool {
        if self.tabs.len() == 1 {
            return true;
        }
        label_names.iter().any(|n| self.is_reserved(n))
    }
}
