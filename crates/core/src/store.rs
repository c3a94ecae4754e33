//! The command store backed by a newline-delimited text file.
//!
//! Each line of the backing file is one stored command; its zero-based line
//! number is its index. Lines end at `\n`, `\r\n` or a lone `\r`. The file is the only source of truth: a
//! [`CommandStore`] is a snapshot loaded once per invocation, and every
//! mutation goes straight to disk.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::{debug, info};
use tempfile::NamedTempFile;

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::execution;

const FILE_DESCRIPTION: &str = "command store";

/// One stored shell command and its position in the backing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub index: usize,
    pub command: String,
}

impl Display for CommandEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.index, self.command)
    }
}

#[derive(Debug)]
pub struct CommandStore {
    commands: BTreeMap<usize, String>,
    config: StoreConfig,
}

impl CommandStore {
    /// Loads the store from the configured backing file.
    ///
    /// A missing file is created empty. Each line, with trailing whitespace
    /// stripped, becomes the command at the next index starting from 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStore`] if nothing was loaded and no append is
    /// pending, or an I/O error if the file cannot be created or read.
    pub fn load(config: StoreConfig, append_pending: bool) -> Result<Self> {
        let path = config.path.display().to_string();

        if !config.path.exists() {
            create_empty(&config.path).map_err(|e| Error::io_error(FILE_DESCRIPTION, &path, e))?;
            info!("Created empty command store at `{path}`");
        }

        let contents = fs::read_to_string(&config.path)
            .map_err(|e| Error::io_error(FILE_DESCRIPTION, &path, e))?;

        let commands: BTreeMap<usize, String> = line_chunks(&contents)
            .into_iter()
            .map(|line| line.trim_end().to_string())
            .enumerate()
            .collect();
        debug!("Loaded {} commands from `{path}`", commands.len());

        if commands.is_empty() && !append_pending {
            return Err(Error::EmptyStore(config.empty_message));
        }

        Ok(Self { commands, config })
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The highest valid index, or `None` when no commands are stored.
    pub fn highest_index(&self) -> Option<usize> {
        self.commands.len().checked_sub(1)
    }

    /// The entry at `index`, if one was loaded.
    pub fn get(&self, index: usize) -> Option<CommandEntry> {
        self.commands.get(&index).map(|command| CommandEntry {
            index,
            command: command.clone(),
        })
    }

    /// All entries in ascending index order.
    pub fn entries(&self) -> impl Iterator<Item = CommandEntry> + '_ {
        self.commands.iter().map(|(index, command)| CommandEntry {
            index: *index,
            command: command.clone(),
        })
    }

    /// Parses a user-supplied index and checks it is in `[0, highest_index]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] when `input` is not a non-negative
    /// integer in range, or [`Error::EmptyStore`] when there is nothing to
    /// index.
    pub fn validate(&self, input: &str) -> Result<usize> {
        let Some(highest) = self.highest_index() else {
            return Err(Error::EmptyStore(self.config.empty_message.clone()));
        };

        match input.trim().parse::<usize>() {
            Ok(index) if index <= highest => Ok(index),
            _ => Err(Error::invalid_index(input, highest)),
        }
    }

    /// Validates `input` and returns the entry it names.
    ///
    /// # Errors
    ///
    /// See [`CommandStore::validate`].
    pub fn entry(&self, input: &str) -> Result<CommandEntry> {
        let index = self.validate(input)?;
        Ok(CommandEntry {
            index,
            command: self.commands[&index].clone(),
        })
    }

    /// Appends `command` as a new line at the end of the backing file.
    ///
    /// Returns the index the command will occupy on the next load. The loaded
    /// snapshot is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOperand`] for empty text,
    /// [`Error::MultilineCommand`] if the text contains a line break, or an
    /// I/O error if the file cannot be written.
    pub fn append(&self, command: &str) -> Result<usize> {
        if command.is_empty() {
            return Err(Error::MissingOperand("command".to_string()));
        }
        if command.contains(['\n', '\r']) {
            return Err(Error::MultilineCommand(command.to_string()));
        }

        let path = self.config.path.display().to_string();
        let to_io_error = |e| Error::io_error(FILE_DESCRIPTION, &path, e);

        let needs_separator = !ends_with_line_break(&self.config.path).map_err(to_io_error)?;

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.config.path)
            .map_err(to_io_error)?;

        if needs_separator {
            file.write_all(b"\n").map_err(to_io_error)?;
        }
        writeln!(file, "{command}").map_err(to_io_error)?;

        let index = self.commands.len();
        info!("Appended command {index} to `{path}`");
        Ok(index)
    }

    /// Removes the command at `index` from the backing file.
    ///
    /// The remaining lines are copied unchanged, in order, into a temporary
    /// file next to the backing file, which then atomically replaces it with
    /// the original file's permissions. The temporary file is deleted if any
    /// step fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `index` was not loaded, or an I/O
    /// error if the rewrite fails. The backing file is untouched on error.
    pub fn remove(&self, index: usize) -> Result<CommandEntry> {
        let entry = self.entry(&index.to_string())?;

        let path = self.config.path.display().to_string();
        let to_io_error = |e| Error::io_error(FILE_DESCRIPTION, &path, e);

        let contents = fs::read_to_string(&self.config.path).map_err(to_io_error)?;
        let kept = line_chunks(&contents)
            .into_iter()
            .enumerate()
            .filter(|(line_index, _)| *line_index != index)
            .map(|(_, line)| line);

        replace_atomically(&self.config.path, kept).map_err(to_io_error)?;

        info!("Removed command {index} from `{path}`");
        Ok(entry)
    }

    /// Runs the command at `index` through `shell`, returning its stdout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `index` was not loaded, or the
    /// execution error if the shell fails to start or exits non-zero.
    pub fn run(&self, index: usize, shell: &str) -> Result<String> {
        let entry = self.entry(&index.to_string())?;

        execution::execute_captured(shell, &entry.command)
    }
}

impl Display for CommandStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("\n\nCommand#\tCommand\n-------------------------------\n")?;

        for entry in self.entries() {
            writeln!(f, "{}\t{}", entry.index, entry.command)?;
        }

        f.write_str("\n")
    }
}

fn create_empty(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    File::create(path).map(|_| ())
}

/// Splits `contents` into lines that keep their terminator.
fn line_chunks(contents: &str) -> Vec<&str> {
    let bytes = contents.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut position = 0;

    while position < bytes.len() {
        let end = match bytes[position] {
            b'\n' => Some(position),
            b'\r' if bytes.get(position + 1) == Some(&b'\n') => Some(position + 1),
            b'\r' => Some(position),
            _ => None,
        };
        if let Some(end) = end {
            lines.push(&contents[start..=end]);
            start = end + 1;
            position = end;
        }
        position += 1;
    }

    if start < contents.len() {
        lines.push(&contents[start..]);
    }
    lines
}

/// True for an empty file or one whose last byte ends a line.
fn ends_with_line_break(path: &Path) -> io::Result<bool> {
    let mut file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(matches!(last[0], b'\n' | b'\r'))
}

/// Writes `lines` to a temporary file beside `target` and renames it over
/// `target`. The temporary file is removed when any step fails.
fn replace_atomically<'a>(target: &Path, lines: impl Iterator<Item = &'a str>) -> io::Result<()> {
    let directory = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = fs::metadata(target)?.permissions();

    let mut rewritten = NamedTempFile::new_in(directory)?;
    for line in lines {
        rewritten.write_all(line.as_bytes())?;
    }
    rewritten.as_file().set_permissions(permissions)?;
    rewritten.as_file().sync_all()?;
    rewritten.persist(target).map_err(|e| e.error)?;
    Ok(())
}
