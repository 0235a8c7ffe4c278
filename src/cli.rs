use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::ConfigCommands;
use crate::issues::IssuesCommands;
use crate::issues::labels::LabelsArgs;
use crate::plan::PlanArgs;

#[derive(Parser)]
#[command(
    name = "issuedeck",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Browse and edit tracker issues
    #[command(subcommand)]
    Issues(IssuesCommands),

    /// List the repository's labels
    Labels(LabelsArgs),

    /// Show the weekly plan with progress and forecast
    Plan(PlanArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
