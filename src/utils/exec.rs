//! External command execution utilities.
//!
//! Builder API for launching the compiler as a child process whose standard
//! streams are inherited from the parent.
//!
//! # Examples
//!
//! ```ignore
//! use crate::utils::exec::Cmd;
//!
//! // Fire and forget, streams inherited
//! let child = Cmd::new("sass")
//!     .arg("sass/default.scss:css/default.css")
//!     .cwd(root)
//!     .spawn_inherited()?;
//! ```

use anyhow::{Context, Result};
use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
    process::{Child, Command, Stdio},
};

/// Command builder for external process execution.
///
/// Provides a fluent API for configuring and launching external commands.
#[derive(Default)]
pub struct Cmd {
    program: OsString,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
}

impl Cmd {
    /// Create a new command builder.
    pub fn new<S: AsRef<OsStr>>(program: S) -> Self {
        Self {
            program: program.as_ref().to_owned(),
            ..Default::default()
        }
    }

    /// Create from a command array (e.g., `["sass"]` or `["npx", "sass"]`).
    pub fn from_slice<S: AsRef<OsStr>>(cmd: &[S]) -> Self {
        let mut iter = cmd.iter();
        let program = iter
            .next()
            .map(|s| s.as_ref().to_owned())
            .unwrap_or_default();
        let args: Vec<_> = iter.map(|s| s.as_ref().to_owned()).collect();
        Self {
            program,
            args,
            ..Default::default()
        }
    }

    /// Add a single argument.
    pub fn arg<S: AsRef<OsStr>>(mut self, arg: S) -> Self {
        let arg = arg.as_ref();
        if !arg.is_empty() {
            self.args.push(arg.to_owned());
        }
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            let arg = arg.as_ref();
            if !arg.is_empty() {
                self.args.push(arg.to_owned());
            }
        }
        self
    }

    /// Set working directory.
    pub fn cwd<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.cwd = Some(dir.as_ref().to_owned());
        self
    }

    /// Spawn with stdin/stdout/stderr inherited from the parent and return
    /// the child handle without waiting.
    ///
    /// Output appears interleaved live in the parent's terminal; nothing is
    /// captured or transformed.
    pub fn spawn_inherited(self) -> Result<Child> {
        let name = self.program_name();
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }

        cmd.spawn()
            .with_context(|| format!("Failed to spawn `{name}`"))
    }

    /// Get the program name for error messages.
    fn program_name(&self) -> String {
        self.program.to_string_lossy().to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_cmd_builder() {
        let cmd = Cmd::new("echo")
            .arg("hello")
            .args(["world", "!"])
            .cwd("/tmp");

        assert_eq!(cmd.program, OsString::from("echo"));
        assert_eq!(cmd.args.len(), 3);
        assert_eq!(cmd.cwd, Some(PathBuf::from("/tmp")));
    }

    #[test]
    fn test_from_slice_splits_program_and_args() {
        let cmd = Cmd::from_slice(&["npx", "sass", "--watch"]);
        assert_eq!(cmd.program, OsString::from("npx"));
        assert_eq!(cmd.args, vec![OsString::from("sass"), OsString::from("--watch")]);
    }

    #[test]
    fn test_empty_args_filtered() {
        let cmd = Cmd::new("echo").arg("").args(["a", "", "b"]);
        assert_eq!(cmd.args.len(), 2);
    }

    #[test]
    fn test_spawn_returns_before_child_exits() {
        let start = Instant::now();
        let mut child = Cmd::new("sleep").arg("5").spawn_inherited().unwrap();
        assert!(start.elapsed() < Duration::from_millis(500));

        child.kill().ok();
        child.wait().ok();
    }

    #[test]
    fn test_spawn_error_names_program() {
        let err = Cmd::new("sassrun-test-no-such-binary")
            .spawn_inherited()
            .unwrap_err();
        assert!(format!("{err}").contains("sassrun-test-no-such-binary"));
    }
}
