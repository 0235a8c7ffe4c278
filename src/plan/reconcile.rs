//! Reconcile a loaded plan against the live issue collection.

use std::collections::HashMap;

use super::model::Plan;
use crate::github::models::{Issue, IssueState};

/// Overwrite each scheduled item's status with the live state of the issue it
/// points at. Items whose number is not in the live collection keep their
/// last-known status. Order and membership never change.
pub fn reconcile(plan: &mut Plan, live: &[Issue]) {
    let states: HashMap<u64, IssueState> = live.iter().map(|i| (i.number, i.state)).collect();

    let mut updated = 0usize;
    for items in plan.items.values_mut() {
        for item in items.iter_mut() {
            if let Some(state) = states.get(&item.number) {
                if item.status != *state {
                    updated += 1;
                }
                item.status = *state;
            }
        }
    }
    tracing::debug!(live = live.len(), updated, "reconciled plan against tracker");
}
