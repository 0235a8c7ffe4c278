//! Weekly plan file model.
//!
//! The plan file is YAML: a `weeks` list where each week carries its id,
//! display label, date range and the items scheduled into it. Loading splits
//! that into an ordered bucket sequence plus a bucket-id → items map, which is
//! what the forecast and reconciliation code works over.

use std::collections::BTreeMap;
use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use super::error::{PlanError, Result};
use crate::github::models::IssueState;

/// One scheduling bucket. Date bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekBucket {
    pub id: String,
    pub label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl WeekBucket {
    /// Whether the given date falls inside this bucket.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// An issue scheduled into a week. `priority` is free-form; tiers are derived
/// lazily via [`PriorityTier::classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledItem {
    pub number: u64,
    pub title: String,
    pub category: String,
    pub priority: String,
    pub status: IssueState,
}

/// The loaded plan: week buckets in file order and the items keyed by week id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub weeks: Vec<WeekBucket>,
    pub items: BTreeMap<String, Vec<ScheduledItem>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlanFile {
    #[serde(default)]
    weeks: Vec<WeekFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WeekFile {
    id: String,
    label: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    #[serde(default)]
    items: Vec<ItemFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ItemFile {
    number: u64,
    title: String,
    category: String,
    priority: String,
    status: IssueState,
}

impl Plan {
    /// Load a plan from a YAML file. Week ids must be unique.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PlanError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let file: PlanFile =
            serde_yaml::from_str(&content).map_err(|source| PlanError::ParseError {
                path: path.to_path_buf(),
                source,
            })?;

        let mut seen = HashSet::new();
        let mut weeks = Vec::with_capacity(file.weeks.len());
        let mut items = BTreeMap::new();
        for week in file.weeks {
            if !seen.insert(week.id.clone()) {
                return Err(PlanError::DuplicateWeek(week.id));
            }
            items.insert(
                week.id.clone(),
                week.items
                    .into_iter()
                    .map(|i| ScheduledItem {
                        number: i.number,
                        title: i.title,
                        category: i.category,
                        priority: i.priority,
                        status: i.status,
                    })
                    .collect(),
            );
            weeks.push(WeekBucket {
                id: week.id,
                label: week.label,
                start_date: week.start_date,
                end_date: week.end_date,
            });
        }
        Ok(Plan { weeks, items })
    }

    /// Items scheduled into the given week, in file order.
    pub fn items_for(&self, week_id: &str) -> &[ScheduledItem] {
        self.items.get(week_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All scheduled items across every week, in week order.
    pub fn all_items(&self) -> impl Iterator<Item = &ScheduledItem> {
        self.weeks.iter().flat_map(|w| self.items_for(&w.id))
    }

    /// The week whose date range contains `today`, if any.
    pub fn current_week(&self, today: NaiveDate) -> Option<&WeekBucket> {
        self.weeks.iter().find(|w| w.contains(today))
    }
}

/// Priority tier derived from the free-form priority string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityTier {
    Critical,
    High,
    Medium,
    Low,
}

impl PriorityTier {
    /// Lenient, case-insensitive prefix match: `crit*` / `high*` / `med*`;
    /// anything else is Low.
    pub fn classify(priority: &str) -> Self {
        let lower = priority.trim().to_lowercase();
        if lower.starts_with("crit") {
            Self::Critical
        } else if lower.starts_with("high") {
            Self::High
        } else if lower.starts_with("med") {
            Self::Medium
        } else {
            Self::Low
        }
    }
}
