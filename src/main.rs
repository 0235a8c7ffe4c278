mod cli;
mod config;
mod github;
mod issues;
mod plan;
mod shared;
#[cfg(test)]
mod testing;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "issuedeck=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let Cli { command } = Cli::parse();

    match command {
        Commands::Issues(cmd) => cmd.run()?,
        Commands::Labels(args) => issues::labels::run(&args)?,
        Commands::Plan(args) => plan::run(&args)?,
        Commands::Config(cmd) => cmd.run()?,
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "issuedeck",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}
