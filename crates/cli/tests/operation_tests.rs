#[cfg(test)]
mod tests {
    use clap::Parser;
    use cmd_cache_cli::cli_args::Args;
    use cmd_cache_cli::dispatch::execute;
    use cmd_cache_core::error::Error;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn store_file(contents: Option<&str>) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".cmdCache");
        if let Some(contents) = contents {
            fs::write(&path, contents).unwrap();
        }
        (dir, path)
    }

    /// Parses `extra` after `cmdc --file <path>` and runs it, returning the output.
    fn invoke(path: &Path, extra: &[&str]) -> (Result<(), Error>, String) {
        let path = path.to_str().unwrap();
        let mut argv = vec!["cmdc", "--file", path];
        argv.extend_from_slice(extra);

        let args = Args::parse_from(argv);
        let mut out = Vec::new();
        let result = execute(&args, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_display_lists_commands() {
        let (_dir, path) = store_file(Some("ls -la\necho hi\n"));

        let (result, out) = invoke(&path, &[]);

        assert!(result.is_ok());
        assert!(out.contains("Command#\tCommand"));
        assert!(out.contains("0\tls -la\n1\techo hi\n"));
    }

    #[test]
    fn test_run_prints_banner_and_output() {
        let (_dir, path) = store_file(Some("ls -la\necho hi\n"));

        let (result, out) = invoke(&path, &["1"]);

        assert!(result.is_ok());
        assert_eq!(out, "Running command 1: echo hi...\n\nhi\n\n");
    }

    #[test]
    fn test_dry_run_does_not_execute() {
        let (dir, path) = store_file(None);
        let marker = dir.path().join("marker");
        fs::write(&path, format!("touch {}\n", marker.display())).unwrap();

        let (result, out) = invoke(&path, &["--dry-run", "0"]);

        assert!(result.is_ok());
        assert!(out.contains("Dry run is specified"));
        assert!(!marker.exists());
    }

    #[test]
    fn test_run_out_of_range() {
        let (_dir, path) = store_file(Some("ls -la\necho hi\n"));

        let (result, out) = invoke(&path, &["5"]);

        let error = result.unwrap_err();
        assert!(!error.is_informational());
        assert!(error.to_string().contains("[0,1]"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_failure_is_an_error() {
        let (_dir, path) = store_file(Some("exit 4\n"));

        let (result, _) = invoke(&path, &["0"]);

        assert!(matches!(result, Err(Error::SubProcessExit { code: Some(4), .. })));
    }

    #[test]
    fn test_remove_then_append() {
        let (_dir, path) = store_file(Some("ls -la\necho hi\n"));

        let (result, out) = invoke(&path, &["--remove", "0"]);
        assert!(result.is_ok());
        assert_eq!(out, "Deleting command 0: ls -la...\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "echo hi\n");

        let (result, out) = invoke(&path, &["--append", "pwd"]);
        assert!(result.is_ok());
        assert_eq!(out, "Appending command 1: pwd\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "echo hi\npwd\n");
    }

    #[test]
    fn test_empty_store_is_informational() {
        let (_dir, path) = store_file(None);

        let (result, out) = invoke(&path, &[]);

        assert!(path.exists());
        assert!(out.is_empty());
        assert!(result.unwrap_err().is_informational());
    }

    #[test]
    fn test_append_to_missing_file() {
        let (_dir, path) = store_file(None);

        let (result, out) = invoke(&path, &["-a", "git status"]);

        assert!(result.is_ok());
        assert_eq!(out, "Appending command 0: git status\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "git status\n");
    }

    #[test]
    fn test_missing_operands_are_usage_errors() {
        let (_dir, path) = store_file(Some("ls\n"));

        let (result, _) = invoke(&path, &["--append"]);
        assert!(matches!(result, Err(Error::MissingOperand(_))));

        let (result, _) = invoke(&path, &["--remove"]);
        assert!(matches!(result, Err(Error::MissingOperand(_))));

        assert_eq!(fs::read_to_string(&path).unwrap(), "ls\n");
    }
}
