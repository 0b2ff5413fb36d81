//! Compiler launch: argument construction and fire-and-forget spawn.

use crate::config::RunnerConfig;
use crate::utils::exec::Cmd;
use crate::{debug, log};
use anyhow::Result;
use std::process::Child;

/// Generate the `source:destination` pair argument for one entry name.
///
/// The sass CLI takes textual `source:destination` pairs, so the separator
/// is a forward slash on every platform.
pub fn entry_arg(name: &str, source_dir: &str, output_dir: &str) -> String {
    format!("{source_dir}/{name}.scss:{output_dir}/{name}.css")
}

/// Build the full argument vector: the configured command, one generated
/// argument per entry in entry order, then passthrough arguments verbatim.
pub fn build_argv(config: &RunnerConfig, extra_args: &[String]) -> Vec<String> {
    let compile = &config.compile;
    let mut argv = compile.command.clone();
    argv.extend(
        compile
            .entries
            .iter()
            .map(|name| entry_arg(name, &compile.source_dir, &compile.output_dir)),
    );
    argv.extend(extra_args.iter().cloned());
    argv
}

/// Launch the compiler with inherited streams and return the child handle.
///
/// Does not wait: callers may await the handle, the CLI path never does.
pub fn launch(config: &RunnerConfig, extra_args: &[String]) -> Result<Child> {
    let argv = build_argv(config, extra_args);

    if !config.compile.quiet
        && let Some((program, rest)) = argv.split_first()
    {
        log!("launch"; "`{}` {}", program, rest.join(" "));
    }
    debug!("launch"; "cwd: {}", config.get_root().display());

    Cmd::from_slice(&argv).cwd(config.get_root()).spawn_inherited()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompileConfig;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    fn config_with(compile: CompileConfig) -> RunnerConfig {
        RunnerConfig {
            root: PathBuf::from("."),
            compile,
            ..RunnerConfig::default()
        }
    }

    #[test]
    fn test_entry_arg_default() {
        assert_eq!(
            entry_arg("default", "sass", "css"),
            "sass/default.scss:css/default.css"
        );
    }

    #[test]
    fn test_argv_no_extras() {
        let config = config_with(CompileConfig::default());
        assert_eq!(
            build_argv(&config, &[]),
            vec!["sass", "sass/default.scss:css/default.css"]
        );
    }

    #[test]
    fn test_argv_extras_appended_in_order() {
        let config = config_with(CompileConfig::default());
        let extras = vec!["--watch".to_string(), "--style=compressed".to_string()];
        assert_eq!(
            build_argv(&config, &extras),
            vec![
                "sass",
                "sass/default.scss:css/default.css",
                "--watch",
                "--style=compressed"
            ]
        );
    }

    #[test]
    fn test_argv_multiple_entries_preserve_order() {
        let config = config_with(CompileConfig {
            entries: vec!["default".into(), "alt".into()],
            ..CompileConfig::default()
        });
        assert_eq!(
            build_argv(&config, &[]),
            vec![
                "sass",
                "sass/default.scss:css/default.css",
                "sass/alt.scss:css/alt.css"
            ]
        );
    }

    #[test]
    fn test_argv_multi_element_command() {
        let config = config_with(CompileConfig {
            command: vec!["npx".into(), "sass".into()],
            ..CompileConfig::default()
        });
        assert_eq!(
            build_argv(&config, &[]),
            vec!["npx", "sass", "sass/default.scss:css/default.css"]
        );
    }

    #[test]
    fn test_launch_does_not_block() {
        let config = config_with(CompileConfig {
            entries: vec![],
            command: vec!["sleep".into(), "5".into()],
            quiet: true,
            ..CompileConfig::default()
        });

        let start = Instant::now();
        let mut child = launch(&config, &[]).unwrap();
        assert!(start.elapsed() < Duration::from_millis(500));

        child.kill().ok();
        child.wait().ok();
    }
}
