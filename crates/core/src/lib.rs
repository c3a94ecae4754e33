//! cmd-cache Core Library
//!
//! This crate provides the core functionality for cmd-cache, a personal
//! bookmark manager for shell commands. Commands are kept one per line in a
//! plain text file and addressed by their zero-based line number.
//!
//! # Key Features
//!
//! - **Command Store**: Load the backing file into an ordered index-to-command mapping
//! - **Index Validation**: Parse and range-check user-supplied indices
//! - **Safe Rewrites**: Removal rewrites through a temporary file and atomic rename
//! - **Execution**: Run a stored command through the shell and capture its output
//! - **Error Handling**: One error type for every failure mode, decided on by the caller
//!
//! # Examples
//!
//! Listing the stored commands:
//!
//! ```no_run
//! use cmd_cache_core::config::{get_store_path, StoreConfig};
//! use cmd_cache_core::store::CommandStore;
//!
//! let path = get_store_path(&None);
//! let store = CommandStore::load(StoreConfig::for_path(path), false)?;
//! for entry in store.entries() {
//!     println!("{}\t{}", entry.index, entry.command);
//! }
//! # Ok::<(), cmd_cache_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod execution;
pub mod store;
