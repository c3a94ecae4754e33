use std::process::{Command, Stdio};

use log::{debug, info};

use crate::error::{Error, Result};

/// Builds the `<shell> -c <command>` invocation for a stored command.
pub fn shell_command(shell: &str, command: &str) -> Command {
    let mut invocation = Command::new(shell);
    invocation.args(["-c", command]);
    invocation
}

/// Executes a stored command through `shell`, capturing its output.
///
/// Returns the captured standard output as text. Standard error is returned
/// inside the error when the command fails and logged otherwise.
///
/// # Errors
///
/// Returns an error if the shell cannot be spawned or the command exits with
/// a non-zero status.
pub fn execute_captured(shell: &str, command: &str) -> Result<String> {
    info!("Executing `{command}` with `{shell}`");

    let output = shell_command(shell, command)
        .stdin(Stdio::inherit())
        .output()?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if output.status.success() {
        if !stderr.is_empty() {
            debug!("Discarding stderr of successful command: {stderr}");
        }
        Ok(stdout)
    } else {
        Err(Error::SubProcessExit {
            command: command.to_string(),
            code: output.status.code(),
            stderr,
        })
    }
}
