//! Issue detail view: the issue plus its comments.

use clap::Args;

use super::common::{client_from_config, state_glyph};
use crate::github::models::{Comment, Issue};
use crate::shared::config::load_config;
use crate::shared::time::format_relative_date;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct ShowArgs {
    /// Issue number
    pub number: u64,
}

#[tokio::main]
pub async fn run(args: &ShowArgs) -> anyhow::Result<()> {
    let config = load_config()?;
    let client = client_from_config(&config)?;

    // Independent fetches; neither depends on the other's result.
    let (issue, comments) = tokio::join!(
        client.get_issue(args.number),
        client.list_comments(args.number)
    );
    let issue = issue?;
    let comments = comments?;

    print!("{}", format_issue(&issue, &comments));
    Ok(())
}

fn format_issue(issue: &Issue, comments: &[Comment]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} #{} {}\n",
        state_glyph(issue.state),
        issue.number,
        issue.title
    ));
    out.push_str(&format!(
        "{} · opened {} by {}\n",
        issue.state.as_str(),
        format_relative_date(issue.created_at),
        issue.user.login
    ));
    if !issue.labels.is_empty() {
        let names: Vec<&str> = issue.labels.iter().map(|l| l.name.as_str()).collect();
        out.push_str(&format!("labels: {}\n", names.join(", ")));
    }
    out.push_str(&format!("{}\n", issue.html_url));

    out.push('\n');
    match issue.body.as_deref() {
        Some(body) if !body.trim().is_empty() => {
            out.push_str(body.trim_end());
            out.push('\n');
        }
        _ => out.push_str("No description provided.\n"),
    }

    if !comments.is_empty() {
        out.push_str(&format!("\n--- {} comment{} ---\n", comments.len(), {
            if comments.len() == 1 { "" } else { "s" }
        }));
        for comment in comments {
            out.push_str(&format!(
                "\n{} · {}\n{}\n",
                comment.user.login,
                format_relative_date(comment.created_at),
                comment.body.trim_end()
            ));
        }
    }

    out
}
