//! Operation selection from the parsed flags and positional argument.

use cmd_cache_core::error::Error::{ConflictingOperations, MissingOperand};
use cmd_cache_core::error::Result;

/// The single unit of work one invocation performs.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Operation {
    /// No positional argument: print the stored commands
    Display,
    /// Run the command at the given (unvalidated) index
    Run(String),
    /// Store the given command text
    Append(String),
    /// Delete the command at the given (unvalidated) index
    Remove(String),
}

/// Trait for objects that can determine which operation to perform.
pub trait Provider {
    /// # Errors
    ///
    /// Returns an error if the operation flags conflict or the operation is
    /// missing its operand.
    fn get_operation(&self) -> Result<Operation>;
}

/// Determines the operation from the `--append`/`--remove` flags and the
/// positional operand.
///
/// # Errors
///
/// Returns [`ConflictingOperations`] if both flags are set, or
/// [`MissingOperand`] if `--append` or `--remove` is given without an operand.
///
/// # Examples
///
/// ```rust
/// use cmd_cache_cli::operation::{determine, Operation};
///
/// assert_eq!(determine(false, false, None).unwrap(), Operation::Display);
/// assert_eq!(determine(false, false, Some("1")).unwrap(), Operation::Run("1".to_string()));
/// assert!(determine(true, false, None).is_err());
/// ```
pub fn determine(append: bool, remove: bool, operand: Option<&str>) -> Result<Operation> {
    let operand = operand.map(ToString::to_string);

    match (append, remove, operand) {
        (true, true, _) => Err(ConflictingOperations),
        (true, false, Some(command)) => Ok(Operation::Append(command)),
        (true, false, None) => Err(MissingOperand("command".to_string())),
        (false, true, Some(index)) => Ok(Operation::Remove(index)),
        (false, true, None) => Err(MissingOperand("index".to_string())),
        (false, false, Some(index)) => Ok(Operation::Run(index)),
        (false, false, None) => Ok(Operation::Display),
    }
}
