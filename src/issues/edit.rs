//! Edit an existing issue: partial update of title, body, state and labels.

use clap::Args;

use super::common::{client_from_config, reserved_names};
use super::error::IssuesError;
use crate::github::models::{IssueState, UpdateIssueParams};
use crate::issues::category::CategoryTable;
use crate::shared::config::load_config;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct EditArgs {
    /// Issue number
    pub number: u64,

    #[arg(short, long)]
    pub title: Option<String>,

    #[arg(short, long)]
    pub body: Option<String>,

    /// Open or close the issue
    #[arg(short, long, value_enum)]
    pub state: Option<StateArg>,

    /// Replacement label set; repeatable. Must keep at least one category
    /// label.
    #[arg(short, long = "label")]
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StateArg {
    Open,
    Closed,
}

impl From<StateArg> for IssueState {
    fn from(value: StateArg) -> Self {
        match value {
            StateArg::Open => Self::Open,
            StateArg::Closed => Self::Closed,
        }
    }
}

#[tokio::main]
pub async fn run(args: &EditArgs) -> anyhow::Result<()> {
    let config = load_config()?;
    let table = CategoryTable::from_config(&config.categories);
    let params = build_params(args, &table)?;

    let client = client_from_config(&config)?;
    let issue = client.update_issue(args.number, &params).await?;

    println!(
        "Updated #{}: {} ({})",
        issue.number,
        issue.title,
        issue.state.as_str()
    );
    Ok(())
}

/// Validate the edit before any network call. Replacing the label set must
/// keep the issue classified under at least one category.
fn build_params(args: &EditArgs, table: &CategoryTable) -> Result<UpdateIssueParams, IssuesError> {
    let params = UpdateIssueParams {
        title: args.title.clone(),
        body: args.body.clone(),
        state: args.state.map(Into::into),
        labels: (!args.labels.is_empty()).then(|| args.labels.clone()),
    };

    if params.is_empty() {
        return Err(IssuesError::EmptyUpdate);
    }
    if let Some(labels) = &params.labels {
        if !table.has_category_label(labels) {
            return Err(IssuesError::MissingCategoryLabel(reserved_names(table)));
        }
    }
    Ok(params)
}
