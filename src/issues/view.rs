//! Derived state for the issues list view.
//!
//! `compute` is a pure function of the fetched snapshot and the session's
//! filter state. It is re-run from scratch on every input change; nothing is
//! cached. The stages run in a fixed order, each consuming the previous
//! stage's output: category scoping, tab counts, status filter, label filter
//! (AND), facet tally, search, sort, stats.

use crate::github::models::{Issue, IssueState};
use crate::issues::category::{CategoryTab, CategoryTable};
use crate::issues::filter::{FilterState, SortOption};

/// Badge count for one category tab, computed over the full collection so
/// inactive tabs show their totals too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabCount {
    pub id: String,
    pub label: String,
    pub count: usize,
}

/// A label available for filtering in the current context, with its
/// occurrence count. Selected labels stay visible even at count zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facet {
    pub name: String,
    /// Color of the label as seen on an issue; `None` when the facet is
    /// only present because it is selected.
    pub color: Option<String>,
    pub count: usize,
    pub selected: bool,
}

/// Summary statistics over the category-scoped set (not the filtered list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub open: usize,
    pub closed: usize,
    /// Loose rule kept for compatibility: a label literally named
    /// `critical` or containing `priority` counts as critical.
    pub critical: usize,
    pub total: usize,
}

#[derive(Debug)]
pub struct BoardView<'a> {
    pub tab_counts: Vec<TabCount>,
    pub issues_in_category: Vec<&'a Issue>,
    pub facets: Vec<Facet>,
    pub filtered: Vec<&'a Issue>,
    pub stats: Stats,
}

pub fn compute<'a>(
    issues: &'a [Issue],
    table: &CategoryTable,
    filter: &FilterState,
) -> BoardView<'a> {
    let tab = table.tab(&filter.category);

    // 1. Category scoping.
    let issues_in_category: Vec<&Issue> = issues
        .iter()
        .filter(|i| table.issue_in_tab(tab, i))
        .collect();

    // 2. Badge counts for every tab, over the full collection.
    let tab_counts = tab_counts(issues, table);

    // 3. Status filter.
    let status_filtered: Vec<&Issue> = issues_in_category
        .iter()
        .copied()
        .filter(|i| filter.status.matches(i.state))
        .collect();

    // 4. Label filter, AND semantics: the label set must be a superset of
    //    the selection.
    let label_filtered: Vec<&Issue> = status_filtered
        .into_iter()
        .filter(|i| filter.selected_labels.iter().all(|name| i.has_label(name)))
        .collect();

    // 5. Facets, relative to the current selection so a selected label stays
    //    visible even when further filtering drops its count.
    let facets = facets(&label_filtered, table, &filter.selected_labels);

    // 6. Search.
    let searched = search(label_filtered, &filter.search);

    // 7. Sort (stable).
    let filtered = sort(searched, filter.sort);

    // 8. Stats over the category-scoped set.
    let stats = stats(&issues_in_category);

    BoardView {
        tab_counts,
        issues_in_category,
        facets,
        filtered,
        stats,
    }
}

fn tab_counts(issues: &[Issue], table: &CategoryTable) -> Vec<TabCount> {
    table
        .tabs()
        .iter()
        .map(|tab: &CategoryTab| TabCount {
            id: tab.id.clone(),
            label: tab.label.clone(),
            count: issues.iter().filter(|i| table.issue_in_tab(tab, i)).count(),
        })
        .collect()
}

fn facets(filtered: &[&Issue], table: &CategoryTable, selected: &[String]) -> Vec<Facet> {
    // Tally in first-seen order; collections are small enough that a linear
    // scan beats pulling in an ordered map.
    let mut tally: Vec<Facet> = Vec::new();
    for issue in filtered {
        for label in &issue.labels {
            // Category labels are reserved and never offered as facets.
            if table.is_reserved(&label.name) {
                continue;
            }
            match tally.iter_mut().find(|f| f.name == label.name) {
                Some(facet) => facet.count += 1,
                None => tally.push(Facet {
                    name: label.name.clone(),
                    color: Some(label.color.clone()),
                    count: 1,
                    selected: selected.contains(&label.name),
                }),
            }
        }
    }

    // Union in selected labels the tally missed, at count zero, so they can
    // still be toggled off.
    for name in selected {
        if !tally.iter().any(|f| &f.name == name) {
            tally.push(Facet {
                name: name.clone(),
                color: None,
                count: 0,
                selected: true,
            });
        }
    }

    // Zero-count suppression applies only to unselected facets.
    tally.retain(|f| f.count > 0 || f.selected);
    tally.sort_by(|a, b| b.count.cmp(&a.count));
    tally
}

fn search<'a>(issues: Vec<&'a Issue>, query: &str) -> Vec<&'a Issue> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return issues;
    }

    issues
        .into_iter()
        .filter(|i| {
            i.title.to_lowercase().contains(&query)
                || i.body
                    .as_deref()
                    .is_some_and(|b| b.to_lowercase().contains(&query))
                || i.labels.iter().any(|l| l.name.to_lowercase().contains(&query))
                || i.number.to_string().contains(&query)
        })
        .collect()
}

fn sort<'a>(mut issues: Vec<&'a Issue>, sort: SortOption) -> Vec<&'a Issue> {
    match sort {
        SortOption::Newest => issues.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOption::Oldest => issues.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOption::NumberAsc => issues.sort_by_key(|i| i.number),
        SortOption::NumberDesc => issues.sort_by(|a, b| b.number.cmp(&a.number)),
        SortOption::TitleAsc => issues.sort_by(|a, b| compare_titles(a, b)),
        SortOption::TitleDesc => issues.sort_by(|a, b| compare_titles(b, a)),
    }
    issues
}

fn compare_titles(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
        .then_with(|| a.title.cmp(&b.title))
}

fn stats(issues_in_category: &[&Issue]) -> Stats {
    let open = issues_in_category
        .iter()
        .filter(|i| i.state == IssueState::Open)
        .count();
    let closed = issues_in_category
        .iter()
        .filter(|i| i.state == IssueState::Closed)
        .count();
    let critical = issues_in_category
        .iter()
        .filter(|i| i.priority_label().is_some())
        .count();
    Stats {
        open,
        closed,
        critical,
        total: issues_in_category.len(),
    }
}
