//! cmd-cache CLI Library
//!
//! This crate provides the command-line interface for cmd-cache, a personal
//! bookmark manager for shell commands. It parses arguments, picks the single
//! operation an invocation performs, and runs it against the command store.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`operation`]: Choosing display, run, append or remove from the arguments
//! - [`dispatch`]: Running the chosen operation and writing its output
//!
//! # Examples
//!
//! The CLI binary (`cmdc`) can be used in several ways:
//!
//! ```bash
//! # List the stored commands
//! cmdc
//!
//! # Run command number 2
//! cmdc 2
//!
//! # Store a new command
//! cmdc --append "git log --oneline --graph"
//!
//! # Delete command number 0
//! cmdc --remove 0
//!
//! # Show what command 2 is without running it
//! cmdc --dry-run 2
//! ```

pub mod cli_args;
pub mod dispatch;
pub mod operation;
