//! Completion forecasting over the weekly plan.

use super::model::{Plan, PriorityTier};
use crate::github::models::IssueState;
use crate::issues::category::CategoryTable;

/// Per-week progress plus the cumulative forecast: the overall completion
/// percentage the plan would reach if everything scheduled through this week
/// were done.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekForecast {
    pub week_id: String,
    pub completed: usize,
    pub total: usize,
    /// Completed fraction of this bucket alone; 0.0 for an empty bucket.
    pub completion_ratio: f64,
    /// `round(100 * cumulative planned through this week / total planned)`,
    /// 0 when nothing is planned at all.
    pub cumulative_forecast_percent: u32,
}

/// Aggregate progress for the whole plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSummary {
    pub total_planned: usize,
    pub total_completed: usize,
    pub overall_percent: u32,
    pub by_category: Vec<CategoryProgress>,
    pub by_priority: PriorityBreakdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryProgress {
    pub id: String,
    pub label: String,
    pub completed: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorityBreakdown {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (100.0 * part as f64 / whole as f64).round() as u32
}

/// Compute the per-week forecast in week order.
pub fn forecast(plan: &Plan) -> Vec<WeekForecast> {
    let grand_total: usize = plan.weeks.iter().map(|w| plan.items_for(&w.id).len()).sum();

    let mut cumulative = 0usize;
    plan.weeks
        .iter()
        .map(|week| {
            let items = plan.items_for(&week.id);
            let total = items.len();
            let completed = items
                .iter()
                .filter(|i| i.status == IssueState::Closed)
                .count();
            cumulative += total;
            WeekForecast {
                week_id: week.id.clone(),
                completed,
                total,
                completion_ratio: if total == 0 {
                    0.0
                } else {
                    completed as f64 / total as f64
                },
                cumulative_forecast_percent: percent(cumulative, grand_total),
            }
        })
        .collect()
}

/// Aggregate totals, per-category progress over the configured categories
/// (items with an unknown category still count toward the totals) and the
/// priority tier breakdown.
pub fn summarize(plan: &Plan, table: &CategoryTable) -> PlanSummary {
    let mut total_planned = 0usize;
    let mut total_completed = 0usize;
    let mut by_priority = PriorityBreakdown::default();
    let mut by_category: Vec<CategoryProgress> = table
        .tabs()
        .iter()
        .filter(|t| t.label_name.is_some())
        .map(|t| CategoryProgress {
            id: t.id.clone(),
            label: t.label.clone(),
            completed: 0,
            total: 0,
        })
        .collect();

    for item in plan.all_items() {
        total_planned += 1;
        let done = item.status == IssueState::Closed;
        if done {
            total_completed += 1;
        }
        if let Some(progress) = by_category.iter_mut().find(|c| c.id == item.category) {
            progress.total += 1;
            if done {
                progress.completed += 1;
            }
        }
        match PriorityTier::classify(&item.priority) {
            PriorityTier::Critical => by_priority.critical += 1,
            PriorityTier::High => by_priority.high += 1,
            PriorityTier::Medium => by_priority.medium += 1,
            PriorityTier::Low => by_priority.low += 1,
        }
    }

    PlanSummary {
        total_planned,
        total_completed,
        overall_percent: percent(total_completed, total_planned),
        by_category,
        by_priority,
    }
}
