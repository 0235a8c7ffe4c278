pub mod category;
mod comment;
pub(crate) mod common;
mod create;
mod edit;
pub(crate) mod error;
pub mod filter;
pub mod labels;
mod list;
mod show;
pub mod view;

use clap::Subcommand;

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum IssuesCommands {
    /// List issues with category tabs, label filters, search and sorting
    List(list::ListArgs),

    /// Show a single issue with its comments
    Show(show::ShowArgs),

    /// Create a new issue
    Create(create::CreateArgs),

    /// Edit an issue's title, body, state or labels
    Edit(edit::EditArgs),

    /// Add a comment to an issue
    Comment(comment::CommentArgs),
}

impl IssuesCommands {
    pub fn run(&self) -> anyhow::Result<()> {
        match self {
            Self::List(args) => list::run(args),
            Self::Show(args) => show::run(args),
            Self::Create(args) => create::run(args),
            Self::Edit(args) => edit::run(args),
            Self::Comment(args) => comment::run(args),
        }
    }
}
