//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate. Which operation runs is decided from these arguments by
//! [`crate::operation`].

use crate::operation::{determine, Operation, Provider};
use clap::Parser;
use cmd_cache_core::error::Result;

/// Command-line arguments for the `cmdc` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use cmd_cache_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cmdc", "--append", "ls -la"]);
/// assert!(args.append);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "cmdc", about = "Bookmark your favorite shell commands and run them by number.")]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Appends the specified command to the list.
    #[arg(long, short = 'a', action, conflicts_with = "remove")]
    pub append: bool,

    /// Removes the specified command from the list.
    #[arg(long, short = 'r', action)]
    pub remove: bool,

    /// Path to the file that stores the commands, one per line.
    ///
    /// If not provided, defaults to `~/.cmdCache`.
    #[arg(long = "file", short = 'f')]
    pub store_path: Option<String>,

    /// Shell used to run a stored command.
    ///
    /// If not provided, defaults to `/bin/sh`.
    #[arg(long, short = 's')]
    pub shell: Option<String>,

    /// Perform a dry run, which just prints out the command but does not execute it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// Leave blank to print the saved command list, specify a number to run that command.
    ///
    /// With `--append` this is the command text, with `--remove` the number
    /// of the command to delete.
    #[arg(num_args(1))]
    pub command: Option<String>,
}

impl Provider for Args {
    fn get_operation(&self) -> Result<Operation> {
        determine(self.append, self.remove, self.command.as_deref())
    }
}
