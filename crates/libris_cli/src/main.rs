//! Libris CLI
//!
//! Console front end for a small lending library.
//!
//! # Commands
//!
//! - `menu` - Interactive menu (the default)
//! - `demo` - Seed sample data, run sample checkouts, then open the menu
//! - `books` - List books
//! - `users` - List users

mod commands;

use clap::{Parser, Subcommand};
use libris_core::LibraryConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Libris library console.
#[derive(Parser)]
#[command(name = "libris")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding books.json and users.json
    #[arg(global = true, short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    /// Write compact JSON instead of indented JSON
    #[arg(global = true, long)]
    compact: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu
    Menu {
        /// Do not save the catalog when the menu exits
        #[arg(long)]
        no_save: bool,
    },

    /// Seed sample books and users, run sample checkouts, then open the menu
    Demo {
        /// Stop after the scripted part
        #[arg(long)]
        no_menu: bool,
    },

    /// List all books
    Books {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List all users
    Users {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = LibraryConfig::new()
        .data_dir(cli.data_dir)
        .pretty_json(!cli.compact);

    match cli.command.unwrap_or(Commands::Menu { no_save: false }) {
        Commands::Menu { no_save } => {
            commands::menu::run(&config.save_on_exit(!no_save))?;
        }
        Commands::Demo { no_menu } => {
            commands::demo::run(&config, !no_menu)?;
        }
        Commands::Books { format } => {
            commands::list::books(&config, &format)?;
        }
        Commands::Users { format } => {
            commands::list::users(&config, &format)?;
        }
        Commands::Version => {
            println!("Libris CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Libris Core v{}", libris_core::VERSION);
        }
    }

    Ok(())
}
