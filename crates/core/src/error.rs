use log::debug;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Not a failure: the store has nothing to show. Carries the message to print.
    #[error("{}", .0)]
    EmptyStore(String),

    #[error("You must enter the number of a valid command [0,{}], got `{}`", .highest, .input)]
    InvalidIndex { input: String, highest: usize },

    #[error("Missing {}: {}", .0, missing_operand_hint(.0))]
    MissingOperand(String),

    #[error("Only one of `--append` or `--remove` may be given.")]
    ConflictingOperations,

    #[error("Commands must fit on a single line, got: {:?}", .0)]
    MultilineCommand(String),

    #[error("Command `{}` exited with {}{}", .command, exit_description(.code), stderr_suffix(.stderr))]
    SubProcessExit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Could not start the shell: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("STDIO error: {}", .0)]
    Stdio(std::io::Error),

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },
}

fn missing_operand_hint(what: &str) -> &'static str {
    match what {
        "command" => "pass the command text to store after `--append`",
        _ => "pass the number of a stored command",
    }
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let stderr = stderr.trim_end();
    if stderr.is_empty() {
        String::new()
    } else {
        format!(":\n{stderr}")
    }
}

impl Error {
    pub fn invalid_index(input: &str, highest: usize) -> Self {
        Self::InvalidIndex {
            input: input.to_string(),
            highest,
        }
    }

    pub fn io_error(file_description: &str, path: &str, original: std::io::Error) -> Self {
        debug!("{file_description} file `{path}`: {original}");
        Self::Io {
            file_description: file_description.to_string(),
            path: path.to_string(),
            original,
        }
    }

    /// Whether the dispatch layer should treat this as a clean, zero-status exit.
    #[must_use]
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::EmptyStore(_))
    }
}
