//! Integration tests for CLI wiring.
//!
//! These tests run the built binary and check exit codes and the exact
//! stdout contract: one `path:line:column: name` line per match, nothing else.

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use std::process::{Command, Output};
    use tempfile::TempDir;

    fn run_refreturn(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_refreturn"))
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute refreturn")
    }

    fn stdout_lines(output: &Output) -> Vec<String> {
        let mut lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect();
        lines.sort();
        lines
    }

    fn path_arg(path: &Path) -> &str {
        path.to_str().expect("Temp path should be UTF-8")
    }

    #[test]
    fn test_cli_reports_matches_and_ignores_broken_files() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path();
        fs::write(root.join("a.go"), "package a\n\nfunc F() *int { return nil }\n").unwrap();
        fs::write(root.join("b.go"), "package b\n\nfunc G() (int, int) { return 0, 0 }\n").unwrap();
        fs::write(root.join("c.go"), "package c\n\nfunc H() (r *string) { return }\n").unwrap();
        fs::write(root.join("d.go"), "package d\n\nfunc Broken( {\n").unwrap();

        let output = run_refreturn(&[path_arg(root)]);

        assert!(
            output.status.success(),
            "Expected exit 0, stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        assert_eq!(
            stdout_lines(&output),
            vec![
                format!("{}:3:1: F", root.join("a.go").display()),
                format!("{}:3:1: H", root.join("c.go").display()),
            ]
        );
    }

    #[test]
    fn test_cli_missing_root_exits_nonzero_without_output() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let output = run_refreturn(&[path_arg(&missing)]);

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
    }

    #[test]
    fn test_cli_flags_are_honored() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("a.gox"), "package a\n\nfunc F() *int { return nil }\n").unwrap();
        fs::write(root.join("b.go"), "package b\n\nfunc G() *int { return nil }\n").unwrap();

        let output = run_refreturn(&[
            "--workers",
            "2",
            "--queue-size",
            "1",
            "--extension",
            "gox",
            path_arg(root),
        ]);

        assert!(output.status.success());
        assert_eq!(
            stdout_lines(&output),
            vec![format!("{}:3:1: F", root.join("a.gox").display())]
        );
    }

    #[test]
    fn test_cli_verbose_logs_to_stderr_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("d.go"), "package d\n\nfunc Broken( {\n").unwrap();

        let output = run_refreturn(&["--verbose", path_arg(dir.path())]);

        assert!(output.status.success());
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("d.go"));
    }

    #[test]
    fn test_cli_rejects_zero_workers() {
        let dir = TempDir::new().unwrap();
        let output = run_refreturn(&["--workers", "0", path_arg(dir.path())]);

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_cli_requires_path() {
        let output = run_refreturn(&[]);
        assert!(!output.status.success());
    }

    #[test]
    fn test_cli_version() {
        let output = run_refreturn(&["--version"]);
        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
    }
}
