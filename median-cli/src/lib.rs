use clap::{Parser, Subcommand};
use colored::Colorize;
use once_cell::sync::Lazy;

mod commands;
mod config;
mod utils;

/// Median of two integer sequences
#[derive(Parser)]
#[command(name = "median")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Calc(commands::calc::CalcArgs),
    Sort(commands::sort::SortArgs),
}

static CMD_ARGS: Lazy<Cli> = Lazy::new(|| {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    env_logger::init();
    Cli::parse_from(std::env::args())
});

/// Run a parsed command and return what it would print.
pub fn entry(cli: &Cli) -> anyhow::Result<String> {
    match &cli.command {
        Commands::Calc(cmd) => cmd.run(),
        Commands::Sort(cmd) => cmd.run(),
    }
}

#[doc(hidden)]
pub fn main() -> anyhow::Result<()> {
    match entry(&CMD_ARGS) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(err) => {
            log::debug!("{:?}", err);
            eprintln!("❌ {}: {}", "ERROR".red().bold(), format!("{:#}", err).red());
            std::process::exit(1);
        }
    }
}
