//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use doca_view::{IdStrategy, Intent};

#[derive(Parser)]
#[command(
    name = "doca",
    version,
    about = "DOCA - Browse document compliance blueprints",
    long_about = "Browse the Document Oriented Compliance Architecture catalogue.\n\n\
                  Lists document categories, shows the blueprint of a document type \
                  and replays navigation intents against the view engine."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Initial viewport width in pixels (overrides the settings file).
    #[arg(long = "width", value_name = "PX", global = true)]
    pub width: Option<u32>,

    /// How ids are synthesized for blueprints without a stored id.
    #[arg(long = "id-strategy", value_enum, global = true)]
    pub id_strategy: Option<IdStrategyArg>,

    /// Blueprint shown for documents that have none.
    #[arg(long = "fallback", value_name = "KEY", global = true)]
    pub fallback: Option<String>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List categories and their documents.
    Catalogue,

    /// Show the blueprint of one document type.
    Show(ShowArgs),

    /// Apply a sequence of intents and print the resulting view.
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Document key, e.g. "White Paper".
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Print the blueprint as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Intent to apply, in order: select:<key>, toggle:<label>, sidebar,
    /// resize:<width>. May be repeated.
    #[arg(short = 'i', long = "intent", value_name = "INTENT")]
    pub intents: Vec<Intent>,

    /// Print the final view tree as JSON.
    #[arg(long = "json")]
    pub json: bool,

    /// Print the view after every intent, not only the last.
    #[arg(long = "each")]
    pub each: bool,
}

/// CLI id strategy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum IdStrategyArg {
    Stable,
    Random,
}

impl From<IdStrategyArg> for IdStrategy {
    fn from(arg: IdStrategyArg) -> Self {
        match arg {
            IdStrategyArg::Stable => Self::Stable,
            IdStrategyArg::Random => Self::Random,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
