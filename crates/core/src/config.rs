//! Configuration path utilities for cmd-cache.
//!
//! This module resolves the backing file path and shell, expanding `~` in
//! paths, and builds the [`StoreConfig`] handed to the store.

use std::path::PathBuf;

/// Default path for the stored commands file
const DEFAULT_STORE_PATH: &str = "~/.cmdCache";

/// Default shell to use for command execution
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Where the store lives and what to tell the user when it is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub empty_message: String,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>, empty_message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            empty_message: empty_message.into(),
        }
    }

    /// Builds a config for `path` using the standard empty-store message.
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let empty_message = empty_store_message(&path.display().to_string());
        Self {
            path,
            empty_message,
        }
    }
}

/// Resolves the backing file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// store path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use cmd_cache_core::config::get_store_path;
///
/// let custom_path = get_store_path(&Some("/path/to/commands".to_string()));
/// assert_eq!(custom_path, "/path/to/commands");
/// ```
pub fn get_store_path(store_path_arg: &Option<String>) -> String {
    let store_path = match store_path_arg {
        Some(store_path) => store_path,
        None => DEFAULT_STORE_PATH,
    };

    shellexpand::tilde(store_path).to_string()
}

/// Resolves the shell used to run stored commands, expanding `~`.
pub fn get_shell(shell_arg: &Option<String>) -> String {
    let shell = match shell_arg {
        Some(shell) => shell,
        None => DEFAULT_SHELL,
    };

    shellexpand::tilde(shell).to_string()
}

/// The message shown when there are no stored commands yet.
pub fn empty_store_message(path: &str) -> String {
    format!(
        "\nYou have not yet stored any favorite commands.  \
         Add your favorite commands to: \n\n\t{path}\n\n\
         Each command should be on its own line with no other text or formatting."
    )
}
