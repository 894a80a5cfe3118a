mod cli;
mod commands;
mod config;
mod paths;
mod ui;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Commands};
use config::HelpersConfig;
use std::io;

/// Global context for the application
pub struct Context {
    pub verbose: u8,
    pub quiet: bool,
    pub config: HelpersConfig,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    if let Err(e) = run(cli) {
        ui::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // These work without (or on a broken) config file
    let command = match cli.command {
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "helpers", &mut io::stdout());
            return Ok(());
        }
        Commands::Config(cmd) => return commands::config::run(cli.quiet, cmd),
        command => command,
    };

    let ctx = Context {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: HelpersConfig::load()?,
    };
    log::trace!("Effective config: {:?}", ctx.config);

    match command {
        Commands::Text(cmd) => commands::text::run(&ctx, cmd),
        Commands::Number(cmd) => commands::number::run(&ctx, cmd),
        Commands::Date(cmd) => commands::date::run(&ctx, cmd),
        Commands::Validate(args) => commands::validate::run(&ctx, args),
        Commands::Constants { table, json } => commands::constants::run(&ctx, table, json),
        Commands::Config(_) | Commands::Completions { .. } => Ok(()),
    }
}
