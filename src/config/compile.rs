//! Compile section configuration.
//!
//! # Example
//!
//! ```toml
//! [compile]
//! entries = ["default", "admin"]
//! source_dir = "sass"
//! output_dir = "css"
//! command = ["sass"]
//! ```

use super::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// `[compile]` section: entry names and the compiler command.
///
/// Each entry name maps to one `<source_dir>/<name>.scss:<output_dir>/<name>.css`
/// argument, in list order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileConfig {
    /// Ordered entry names.
    pub entries: Vec<String>,
    /// Directory holding `<name>.scss` sources.
    pub source_dir: String,
    /// Directory receiving `<name>.css` output.
    pub output_dir: String,
    /// Compiler command (e.g., `["sass"]` or `["npx", "sass"]`).
    pub command: Vec<String>,
    /// Suppress the launch log line.
    pub quiet: bool,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            entries: vec!["default".into()],
            source_dir: "sass".into(),
            output_dir: "css".into(),
            command: vec!["sass".into()],
            quiet: false,
        }
    }
}

impl CompileConfig {
    /// Validate the compile section.
    ///
    /// An unresolvable command is only a warning: launch failures stay with
    /// the process-spawning facility.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.entries.is_empty() {
            diag.error("compile.entries", "entry list is empty");
        }

        for name in &self.entries {
            if name.is_empty() {
                diag.error("compile.entries", "entry name is empty");
            } else if name.contains(['/', '\\']) {
                diag.error(
                    "compile.entries",
                    format!("entry name `{name}` contains a path separator"),
                );
            }
        }

        if self.command.is_empty() {
            diag.error("compile.command", "compiler command is empty");
            return;
        }

        // Package runners can download packages at runtime, skip the lookup
        let cmd = &self.command[0];
        let is_package_runner = ["npx", "bunx", "pnpx", "yarn", "dlx"].contains(&cmd.as_str());
        if !is_package_runner && which::which(cmd).is_err() {
            diag.warn(
                "compile.command",
                format!("`{cmd}` not found on PATH, launch will likely fail"),
            );
        }
    }
}
