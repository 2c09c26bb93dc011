//! inistore CLI
//!
//! Command-line access to INI settings files.
//!
//! # Commands
//!
//! - `get` - Print a value
//! - `set` - Write a value
//! - `sections` - List section names
//! - `section` - Print the entries of one section
//! - `dump` - Print the document without comments
//! - `exists` - Check for a section or key
//! - `erase` - Delete a section
//! - `import` - Write many `key=value` pairs in one batch

mod commands;

use clap::{Parser, Subcommand};
use inistore_core::DEFAULT_FILE_NAME;
use inistore_storage::TextEncoding;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Read and edit INI settings files.
#[derive(Parser)]
#[command(name = "inistore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the settings file (defaults to config.ini)
    #[arg(global = true, short, long)]
    path: Option<PathBuf>,

    /// Encoding for new files (utf8, utf16le, utf16be)
    #[arg(global = true, short, long)]
    encoding: Option<TextEncoding>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value of a key
    Get {
        /// Section name
        section: String,

        /// Key name
        key: String,

        /// Printed when the key is missing or empty
        #[arg(short, long, default_value = "")]
        default: String,
    },

    /// Write the value of a key
    Set {
        /// Section name
        section: String,

        /// Key name
        key: String,

        /// New value
        value: String,
    },

    /// List section names
    Sections {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print the entries of a section
    Section {
        /// Section name
        name: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print the whole document without comments
    Dump,

    /// Check whether a section, or a key inside it, exists
    Exists {
        /// Section name
        section: String,

        /// Key name
        key: Option<String>,
    },

    /// Delete a section and its entries
    Erase {
        /// Section name
        section: String,
    },

    /// Write key=value pairs from a file (or stdin) in a single batch
    Import {
        /// Target section (defaults to Common)
        #[arg(short, long)]
        section: Option<String>,

        /// Input file; reads stdin when omitted
        input: Option<PathBuf>,
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

    let path = cli.path.unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME));
    let encoding = cli.encoding;

    match cli.command {
        Commands::Get {
            section,
            key,
            default,
        } => {
            let ini = commands::open(&path, encoding)?;
            commands::get::run(&ini, &section, &key, &default);
        }
        Commands::Set {
            section,
            key,
            value,
        } => {
            let mut ini = commands::open(&path, encoding)?;
            commands::set::run(&mut ini, &section, &key, &value)?;
        }
        Commands::Sections { format } => {
            let ini = commands::open(&path, encoding)?;
            commands::section::list(&ini, &format)?;
        }
        Commands::Section { name, format } => {
            let ini = commands::open(&path, encoding)?;
            commands::section::show(&ini, &name, &format)?;
        }
        Commands::Dump => {
            let ini = commands::open(&path, encoding)?;
            commands::dump::run(&ini);
        }
        Commands::Exists { section, key } => {
            let ini = commands::open(&path, encoding)?;
            if !commands::exists::run(&ini, &section, key.as_deref()) {
                std::process::exit(1);
            }
        }
        Commands::Erase { section } => {
            let mut ini = commands::open(&path, encoding)?;
            commands::erase::run(&mut ini, &section)?;
        }
        Commands::Import { section, input } => {
            let mut ini = commands::open(&path, encoding)?;
            commands::import::run(&mut ini, section.as_deref(), input.as_deref())?;
        }
        Commands::Version => {
            println!("inistore CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("inistore Core v{}", inistore_core::VERSION);
        }
    }

    Ok(())
}
