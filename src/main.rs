//! webmem CLI entry point.

mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use webmem::cli::{Cli, Commands, ConfigAction};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Summarize {
            file,
            minutes,
            since,
            pretty,
        } => commands::summarize::handle(&file, minutes, since.as_deref(), pretty),
        Commands::Charts {
            file,
            limit,
            pretty,
        } => commands::charts::handle(&file, limit, pretty),
        Commands::Graph {
            file,
            limit,
            pretty,
        } => commands::graph::handle(&file, limit, pretty),
        Commands::Events { file, host, limit } => {
            commands::events::handle(&file, host.as_deref(), limit)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Edit => commands::config::handle_edit(),
            ConfigAction::Migrate => commands::config::handle_migrate(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
