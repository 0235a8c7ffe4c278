//! List the repository's label catalogue.

use clap::Args;

use super::common::client_from_config;
use crate::github::models::Label;
use crate::shared::config::load_config;
use crate::shared::table::fit;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct LabelsArgs {}

#[tokio::main]
pub async fn run(_args: &LabelsArgs) -> anyhow::Result<()> {
    let config = load_config()?;
    let client = client_from_config(&config)?;

    let labels = client.list_labels().await?;
    print!("{}", format_labels(&labels));
    Ok(())
}

fn format_labels(labels: &[Label]) -> String {
    let mut out = String::new();
    for label in labels {
        let description = label.description.as_deref().unwrap_or("");
        out.push_str(
            format!("{} #{}  {}\n", fit(&label.name, 24), label.color, description).trim_end(),
        );
        out.push('\n');
    }
    out
}
