//! The weekly plan view: per-week progress, cumulative forecast, category and
//! priority breakdowns.

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::Args;

use super::forecast::{self, PlanSummary, WeekForecast};
use super::model::Plan;
use crate::issues::category::CategoryTable;
use crate::issues::common::client_from_config;
use crate::shared::config::{Config, load_config};
use crate::shared::table::fit;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct PlanArgs {
    /// Render the plan file as-is, without reconciling against the tracker
    #[arg(long)]
    pub no_refresh: bool,

    /// Plan file to load (default: the configured plan_file)
    #[arg(long)]
    pub plan_file: Option<PathBuf>,
}

#[tokio::main]
pub async fn run(args: &PlanArgs) -> anyhow::Result<()> {
    let config = load_config()?;
    run_with_config(args, &config).await
}

async fn run_with_config(args: &PlanArgs, config: &Config) -> anyhow::Result<()> {
    let path = args
        .plan_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.plan_file));
    let mut plan = Plan::load(&path)?;

    if !args.no_refresh {
        let client = client_from_config(config)?;
        let live = client.list_issues("all", None).await?;
        super::reconcile::reconcile(&mut plan, &live);
    }

    let table = CategoryTable::from_config(&config.categories);
    let summary = forecast::summarize(&plan, &table);
    let forecasts = forecast::forecast(&plan);
    let today = Utc::now().date_naive();
    print!("{}", format_plan(&plan, &summary, &forecasts, today));
    Ok(())
}

fn format_plan(
    plan: &Plan,
    summary: &PlanSummary,
    forecasts: &[WeekForecast],
    today: NaiveDate,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Overall: {}/{} done ({}%)\n",
        summary.total_completed, summary.total_planned, summary.overall_percent
    ));

    if summary.by_category.iter().any(|c| c.total > 0) {
        out.push_str("\nBy category:\n");
        for category in &summary.by_category {
            if category.total == 0 {
                continue;
            }
            out.push_str(&format!(
                "  {} {}/{}\n",
                fit(&category.label, 16),
                category.completed,
                category.total
            ));
        }
    }

    if summary.total_planned > 0 {
        let p = &summary.by_priority;
        out.push_str("\nBy priority:\n");
        for (name, count) in [
            ("Critical", p.critical),
            ("High", p.high),
            ("Medium", p.medium),
            ("Low", p.low),
        ] {
            out.push_str(&format!("  {} {count}\n", fit(name, 16)));
        }
    }

    let current = plan.current_week(today).map(|w| w.id.clone());
    out.push_str("\nWeeks:\n");
    for (week, fc) in plan.weeks.iter().zip(forecasts) {
        let marker = if current.as_deref() == Some(&week.id) {
            "*"
        } else {
            " "
        };
        out.push_str(&format!(
            "{marker} {} {:>2}/{:<2}  overall if done: {:>3}%",
            fit(&week.label, 20),
            fc.completed,
            fc.total,
            fc.cumulative_forecast_percent
        ));
        if current.as_deref() == Some(&week.id) {
            out.push_str("  (current)");
        }
        out.push('\n');
        for item in plan.items_for(&week.id) {
            out.push_str(&format!(
                "    {} #{:<5} {} [{}]\n",
                crate::issues::common::state_glyph(item.status),
                item.number,
                fit(&item.title, 44),
                item.priority
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::models::IssueState;
    use crate::testing::factories;

    fn sample() -> (Plan, PlanSummary, Vec<WeekForecast>) {
        let mut plan = factories::empty_plan(vec![
            factories::week("w1", "Week 1", "2025-01-06", "2025-01-12"),
            factories::week("w2", "Week 2", "2025-01-13", "2025-01-19"),
        ]);
        plan.items.insert(
            "w1".to_string(),
            vec![
                factories::scheduled_item(12, "High", IssueState::Closed),
                factories::scheduled_item(15, "critical", IssueState::Open),
            ],
        );
        plan.items.insert(
            "w2".to_string(),
            vec![factories::scheduled_item(20, "low", IssueState::Open)],
        );
        let summary = forecast::summarize(&plan, &factories::category_table());
        let forecasts = forecast::forecast(&plan);
        (plan, summary, forecasts)
    }

    #[test]
    fn renders_overall_weeks_and_current_marker() {
        let (plan, summary, forecasts) = sample();
        let today = "2025-01-14".parse().unwrap();
        let rendered = format_plan(&plan, &summary, &forecasts, today);

        assert!(rendered.contains("Overall: 1/3 done (33%)"));
        assert!(rendered.contains("overall if done:  67%"));
        assert!(rendered.contains("overall if done: 100%"));
        assert!(rendered.contains("* Week 2"));
        assert!(rendered.contains("(current)"));
        assert!(rendered.contains("#12"));
        assert!(rendered.contains("[critical]"));
    }

    #[test]
    fn no_current_marker_outside_every_week() {
        let (plan, summary, forecasts) = sample();
        let today = "2025-03-01".parse().unwrap();
        let rendered = format_plan(&plan, &summary, &forecasts, today);
        assert!(!rendered.contains("(current)"));
    }

    #[test]
    fn empty_plan_renders_zeroes_without_breakdowns() {
        let plan = factories::empty_plan(vec![]);
        let summary = forecast::summarize(&plan, &factories::category_table());
        let forecasts = forecast::forecast(&plan);
        let rendered = format_plan(&plan, &summary, &forecasts, "2025-01-01".parse().unwrap());

        assert!(rendered.contains("Overall: 0/0 done (0%)"));
        assert!(!rendered.contains("By category:"));
        assert!(!rendered.contains("By priority:"));
    }
}
