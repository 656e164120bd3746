//! DOCA command-line front-end.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use doca_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{load_registry, load_settings, run_catalogue, run_replay, run_show};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<i32> {
    let settings = load_settings(cli)?;
    let registry = load_registry(&settings)?;
    match &cli.command {
        Command::Catalogue => {
            run_catalogue(&registry);
            Ok(0)
        }
        Command::Show(args) => run_show(&registry, &settings, args),
        Command::Replay(args) => run_replay(&registry, &settings, args),
    }
}

/// Logging configuration from the CLI flags.
///
/// `--log-level` wins over `-v`/`-q`; either one disables the `RUST_LOG`
/// override. ANSI output follows `--color`, and `auto` only colors an
/// interactive stderr.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit = cli.log_level.map(|level| match level {
        LogLevelArg::Error => LevelFilter::ERROR,
        LogLevelArg::Warn => LevelFilter::WARN,
        LogLevelArg::Info => LevelFilter::INFO,
        LogLevelArg::Debug => LevelFilter::DEBUG,
        LogLevelArg::Trace => LevelFilter::TRACE,
    });
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter: explicit.unwrap_or_else(|| cli.verbosity.tracing_level_filter()),
        use_env_filter: explicit.is_none() && !cli.verbosity.is_present(),
        with_timestamps: cli.log_timestamps,
        with_ansi,
        format,
        log_file: cli.log_file.clone(),
        ..LogConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> LogConfig {
        let argv = ["doca"].iter().chain(args).chain(&["catalogue"]);
        log_config_from_cli(&Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn defaults_defer_to_rust_log() {
        let defaults = config(&[]);
        assert_eq!(defaults.level_filter, LevelFilter::WARN);
        assert!(defaults.use_env_filter);
        assert!(!defaults.with_timestamps);
        assert_eq!(defaults.format, LogFormat::Pretty);
    }

    #[test]
    fn timestamps_flag_reaches_config() {
        let stamped = config(&["--log-timestamps", "--log-format", "compact"]);
        assert!(stamped.with_timestamps);
        assert_eq!(stamped.format, LogFormat::Compact);
    }

    #[test]
    fn explicit_level_overrides_verbosity() {
        let explicit = config(&["-v", "--log-level", "trace"]);
        assert_eq!(explicit.level_filter, LevelFilter::TRACE);
        assert!(!explicit.use_env_filter);

        let verbose = config(&["-vv"]);
        assert_eq!(verbose.level_filter, LevelFilter::DEBUG);
        assert!(!verbose.use_env_filter);
    }

    #[test]
    fn never_color_disables_ansi() {
        assert!(!config(&["--color", "never"]).with_ansi);
        assert!(config(&["--color", "always"]).with_ansi);
    }
}
