//! Runs the selected operation against the command store.
//!
//! Everything user-facing is written to `out` so the whole flow can be driven
//! from tests; errors are returned for `main` to turn into an exit code.

use std::io::Write;

use cmd_cache_core::config::{self, StoreConfig};
use cmd_cache_core::error::{Error, Result};
use cmd_cache_core::store::CommandStore;
use log::{debug, warn};

use crate::cli_args::Args;
use crate::operation::{Operation, Provider};

/// Performs the one operation requested by `args`.
///
/// # Errors
///
/// Returns the store, validation or execution error that stopped the
/// operation. [`Error::EmptyStore`] is informational and should exit cleanly.
pub fn execute<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let operation = args.get_operation()?;

    let store_path = config::get_store_path(&args.store_path);
    debug!("Store path: `{store_path}`");

    let append_pending = matches!(operation, Operation::Append(_));
    let store = CommandStore::load(StoreConfig::for_path(&store_path), append_pending)?;

    if args.dry_run && !matches!(operation, Operation::Run(_)) {
        warn!("Dry run only applies when running a command; ignoring it.");
    }

    match operation {
        Operation::Display => write!(out, "{store}").map_err(Error::Stdio),
        Operation::Append(command) => {
            let index = store.append(&command)?;
            writeln!(out, "Appending command {index}: {command}").map_err(Error::Stdio)
        }
        Operation::Remove(index) => {
            let entry = store.entry(&index)?;
            writeln!(out, "Deleting command {entry}...").map_err(Error::Stdio)?;
            store.remove(entry.index)?;
            Ok(())
        }
        Operation::Run(index) => {
            let entry = store.entry(&index)?;
            writeln!(out, "Running command {entry}...\n").map_err(Error::Stdio)?;

            if args.dry_run {
                writeln!(out, "Dry run is specified, exiting without executing.")
                    .map_err(Error::Stdio)?;
                return Ok(());
            }
            out.flush().map_err(Error::Stdio)?;

            let shell = config::get_shell(&args.shell);
            debug!("Shell: `{shell}`");
            let stdout = store.run(entry.index, &shell)?;
            writeln!(out, "{stdout}").map_err(Error::Stdio)
        }
    }
}
