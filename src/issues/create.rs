//! Create a new issue.

use clap::Args;

use super::common::client_from_config;
use crate::github::models::CreateIssueParams;
use crate::shared::config::load_config;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct CreateArgs {
    /// Issue title (required, must be non-empty)
    #[arg(short, long)]
    pub title: String,

    /// Issue body (Markdown)
    #[arg(short, long)]
    pub body: Option<String>,

    /// Labels to apply; repeatable
    #[arg(short, long = "label")]
    pub labels: Vec<String>,
}

#[tokio::main]
pub async fn run(args: &CreateArgs) -> anyhow::Result<()> {
    let config = load_config()?;
    let client = client_from_config(&config)?;

    let params = CreateIssueParams {
        title: args.title.clone(),
        body: args.body.clone(),
        labels: (!args.labels.is_empty()).then(|| args.labels.clone()),
    };
    let issue = client.create_issue(&params).await?;

    println!("Created #{}: {}", issue.number, issue.title);
    println!("{}", issue.html_url);
    Ok(())
}
