//! Command-line interface module
//!
//! This module handles argument parsing, prompting, and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;
pub mod prompt;

use anyhow::Result;
use clap::Parser;

use commands::Commands;

/// sfunpack - remove metadata components from unlocked Salesforce packages
///
/// Inventories the unlocked packages installed in an org and removes the
/// packaged metadata components of a selected package, one at a time.
#[derive(Parser, Debug)]
#[command(name = "sfunpack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        if let Some(cmd) = self.command {
            cmd.run().await
        } else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
