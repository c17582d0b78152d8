//! mig CLI - directory-based schema migrations for DuckDB

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod context;

use cli::{Cli, Commands};
use commands::{install, migrate, new, rollback, schema, status};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.global.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match &cli.command {
        Commands::Install => install::execute(&cli.global),
        Commands::New(args) => new::execute(args, &cli.global),
        Commands::Migrate => migrate::execute(&cli.global),
        Commands::Rollback => rollback::execute(&cli.global),
        Commands::Status(args) => status::execute(args, &cli.global),
        Commands::Schema => schema::execute(&cli.global),
    }
}
