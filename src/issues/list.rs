//! The issues list view: category tabs, filters, facets and the sorted list.

use clap::Args;

use super::common::{client_from_config, inline_labels, state_glyph};
use super::error::IssuesError;
use super::filter::{FilterState, SortOption, StatusFilter};
use super::view::{self, BoardView};
use crate::issues::category::CategoryTable;
use crate::shared::config::{Config, load_config};
use crate::shared::table::fit;
use crate::shared::time::format_relative_date;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct ListArgs {
    /// Category tab to scope the list to (default: all)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Status filter
    #[arg(short, long, value_enum, default_value_t = StatusFilter::All)]
    pub status: StatusFilter,

    /// Label filter; repeatable, all given labels must be present
    #[arg(short, long = "label")]
    pub labels: Vec<String>,

    /// Free-text search over title, body, labels and issue number
    #[arg(short = 'q', long)]
    pub search: Option<String>,

    /// Sort order
    #[arg(long, value_enum, default_value_t = SortOption::Newest)]
    pub sort: SortOption,
}

#[tokio::main]
pub async fn run(args: &ListArgs) -> anyhow::Result<()> {
    let config = load_config()?;
    run_with_config(args, &config).await
}

async fn run_with_config(args: &ListArgs, config: &Config) -> anyhow::Result<()> {
    let table = CategoryTable::from_config(&config.categories);
    let filter = build_filter(args, &table)?;
    let client = client_from_config(config)?;

    // Issues and labels resolve independently; a label catalogue failure
    // must not take the list down with it.
    let (issues, labels) = tokio::join!(client.list_issues("all", None), client.list_labels());
    let issues = issues?;
    let catalogue = match labels {
        Ok(labels) => labels,
        Err(e) => {
            tracing::warn!(error = %e, "failed to fetch label catalogue");
            Vec::new()
        }
    };

    for selected in &filter.selected_labels {
        if !catalogue.is_empty() && !catalogue.iter().any(|l| &l.name == selected) {
            eprintln!("warning: label '{selected}' does not exist in the repository");
        }
    }

    let view = view::compute(&issues, &table, &filter);
    print!("{}", format_view(&view, &filter));
    Ok(())
}

/// Resolve CLI flags into a filter state. Setting the category clears any
/// label selection, so labels are applied afterwards.
fn build_filter(args: &ListArgs, table: &CategoryTable) -> Result<FilterState, IssuesError> {
    let mut filter = FilterState::default();
    if let Some(category) = &args.category {
        if !table.contains(category) {
            return Err(IssuesError::UnknownCategory(category.clone()));
        }
        filter.set_category(category.clone());
    }
    filter.selected_labels = args.labels.clone();
    filter.status = args.status;
    filter.search = args.search.clone().unwrap_or_default();
    filter.sort = args.sort;
    Ok(filter)
}

fn format_view(view: &BoardView<'_>, filter: &FilterState) -> String {
    let mut out = String::new();

    let tabs = view
        .tab_counts
        .iter()
        .map(|t| {
            if t.id == filter.category {
                format!("[{} ({})]", t.label, t.count)
            } else {
                format!("{} ({})", t.label, t.count)
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&tabs);
    out.push('\n');

    let s = view.stats;
    out.push_str(&format!(
        "{} total · {} open · {} closed · {} critical\n",
        s.total, s.open, s.closed, s.critical
    ));

    if !view.facets.is_empty() {
        out.push_str("\nLabels:\n");
        for facet in &view.facets {
            let mark = if facet.selected { "✓" } else { " " };
            out.push_str(&format!("  {mark} {} ({})\n", facet.name, facet.count));
        }
    }

    let shown = view.filtered.len();
    let scoped = view.issues_in_category.len();
    if shown == scoped {
        out.push_str(&format!(
            "\n{shown} issue{}\n",
            if shown == 1 { "" } else { "s" }
        ));
    } else {
        out.push_str(&format!(
            "\n{shown} of {scoped} issue{}\n",
            if scoped == 1 { "" } else { "s" }
        ));
    }
    for issue in &view.filtered {
        let labels = inline_labels(issue, 3);
        let line = format!(
            "  {} #{:<5} {} {}  {}",
            state_glyph(issue.state),
            issue.number,
            fit(&issue.title, 50),
            fit(&format_relative_date(issue.created_at), 12),
            issue.user.login,
        );
        if labels.is_empty() {
            out.push_str(line.trim_end());
        } else {
            out.push_str(&format!("{line}  [{labels}]"));
        }
        out.push('\n');
    }

    out
}
