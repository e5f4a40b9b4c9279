//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use std::io::{self, Write};

pub mod convert;
pub mod split;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split compound words into dictionary fragments
    Split(split::SplitArgs),

    /// Convert a plain-text word list into a dictionary blob
    Convert(convert::ConvertArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in languages
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Convert(args) => args.execute(),
            Commands::List { subcommand } => subcommand.write_to(&mut io::stdout().lock()),
        }
    }
}

impl ListCommands {
    /// Print the listing
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        match self {
            ListCommands::Languages => {
                writeln!(out, "Built-in languages:")?;
                for language in wordsplit_core::Language::all() {
                    writeln!(out, "  {:<4}{}", language.code(), language.name())?;
                }
            }
            ListCommands::Formats => {
                writeln!(out, "Output formats:")?;
                writeln!(out, "  text      word and fragments, one word per line")?;
                writeln!(out, "  json      array of word/fragments objects")?;
                writeln!(out, "  markdown  numbered list with totals")?;
            }
        }
        Ok(())
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` overrides the level picked here.
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run in-process
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
