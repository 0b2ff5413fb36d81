//! Runner configuration management for `sassrun.toml`.
//!
//! The config file is optional: when none is found, the defaults reproduce
//! the stock layout (`sass/default.scss` -> `css/default.css`, compiled by
//! the `sass` command found on PATH).
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[compile]` | Entry names, source/output dirs, command       |

mod compile;
mod error;
mod util;

pub use compile::CompileConfig;
pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};

use crate::cli::Cli;
use crate::log;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::find_config_file;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sassrun.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RunnerConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Compile settings
    #[serde(default)]
    pub compile: CompileConfig,
}

impl RunnerConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. A missing file is not
    /// an error: the built-in defaults apply and the working directory
    /// becomes the project root.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let config_name = shellexpand::tilde(&cli.config.to_string_lossy()).into_owned();
        let mut config = match find_config_file(Path::new(&config_name)) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.clone());
                config.config_path = Some(path);
                config
            }
            None => Self {
                root: cwd,
                ..Self::default()
            },
        };

        // CLI quiet wins over the config file
        if cli.quiet {
            config.compile.quiet = true;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (sassrun.toml) since it's always at project root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Validate the loaded configuration, printing non-fatal warnings.
    fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.compile.validate(&mut diag);
        diag.print_warnings();
        if diag.has_errors() {
            return Err(ConfigError::Diagnostics(diag).into());
        }
        Ok(())
    }

    /// Get the project root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_defaults() {
        let config = RunnerConfig::from_str("").unwrap();
        assert_eq!(config.compile.entries, vec!["default"]);
        assert_eq!(config.compile.command, vec!["sass"]);
    }

    #[test]
    fn test_from_str_overrides() {
        let config = RunnerConfig::from_str(
            r#"
[compile]
entries = ["default", "admin"]
command = ["npx", "sass"]
"#,
        )
        .unwrap();
        assert_eq!(config.compile.entries, vec!["default", "admin"]);
        assert_eq!(config.compile.command, vec!["npx", "sass"]);
        // Unspecified fields keep their defaults
        assert_eq!(config.compile.source_dir, "sass");
        assert_eq!(config.compile.output_dir, "css");
    }

    #[test]
    fn test_unknown_fields_collected() {
        let (_, ignored) = RunnerConfig::parse_with_ignored(
            r#"
[compile]
entries = ["default"]
unknown_key = true
"#,
        )
        .unwrap();
        assert_eq!(ignored, vec!["compile.unknown_key"]);
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sassrun.toml");
        fs::write(&path, "[compile]\nentries = [\"site\"]\n").unwrap();

        let config = RunnerConfig::from_path(&path).unwrap();
        assert_eq!(config.compile.entries, vec!["site"]);
    }

    #[test]
    fn test_validate_rejects_empty_entries() {
        let config = RunnerConfig::from_str("[compile]\nentries = []").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_broken_toml_is_parse_error() {
        assert!(RunnerConfig::from_str("[compile\nentries = [").is_err());
    }
}
