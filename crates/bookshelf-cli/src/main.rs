//! Bookshelf CLI
//!
//! Command-line interface for Bookshelf - a personal library catalog.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use bookshelf_core::{BookStatus, Catalog, Config};

mod commands;
mod logging;
mod menu;
mod output;
mod prompt;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(about = "Bookshelf - Personal library catalog")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of the default
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Use this catalog file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu
    Menu,
    /// Add a book
    Add {
        /// Book title
        title: String,
        /// Book author
        author: String,
        /// Publication year
        year: String,
    },
    /// Delete a book
    #[command(alias = "rm")]
    Delete {
        /// Book ID
        id: u64,
        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Search by title, author or year
    Search {
        /// Search term
        term: String,
    },
    /// List all books
    #[command(alias = "ls")]
    List,
    /// Change a book's lending status
    Status {
        /// Book ID
        id: u64,
        /// New status (available, checked-out)
        status: BookStatus,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, catalog_file, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));
    let config_path = cli.config.as_ref();

    // Config commands don't need the catalog
    if let Some(Commands::Config { command }) = &cli.command {
        return handle_config_command(command.clone(), config_path, &output);
    }

    let config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;
    logging::init(&config, cli.verbose);

    let mut catalog = match cli.catalog {
        Some(ref path) => Catalog::open(path),
        None => Catalog::open_with_config(&config),
    }
    .with_context(|| {
        let path = cli.catalog.clone().unwrap_or_else(|| config.catalog_path());
        format!("Failed to open catalog {:?}", path)
    })?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => menu::run(&mut catalog),
        Commands::Add {
            title,
            author,
            year,
        } => commands::book::add(&mut catalog, title, author, year, &output),
        Commands::Delete { id, yes } => commands::book::delete(&mut catalog, id, yes, &output),
        Commands::Search { term } => commands::book::search(&catalog, term, &output),
        Commands::List => commands::book::list(&catalog, &output),
        Commands::Status { id, status } => {
            commands::book::status(&mut catalog, id, status, &output)
        }
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}
