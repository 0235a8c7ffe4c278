//! Post a comment on an issue.

use clap::Args;

use super::common::client_from_config;
use crate::shared::config::load_config;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct CommentArgs {
    /// Issue number
    pub number: u64,

    /// Comment body (must be non-empty)
    pub body: String,
}

#[tokio::main]
pub async fn run(args: &CommentArgs) -> anyhow::Result<()> {
    let config = load_config()?;
    let client = client_from_config(&config)?;

    let comment = client.create_comment(args.number, &args.body).await?;
    println!("Commented on #{}: {}", args.number, comment.html_url);
    Ok(())
}
