//! CLI argument definitions for the `als` tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use als_codec::{AlsReaderOptions, AlsWriterOptions, Version};

#[derive(Parser)]
#[command(
    name = "als",
    version,
    about = "Inspect and convert Live set (.als) files",
    long_about = "Inspect and convert Live set (.als) files.\n\n\
                  Unpacks containers to editable document text and back, \
                  summarizes projects and re-targets them to other supported versions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Decompress FILE.als into FILE.xml.
    ToXml {
        #[arg(value_name = "FILE.als")]
        input: PathBuf,
    },

    /// Compress FILE.xml into FILE.als.
    ToAls {
        #[arg(value_name = "FILE.xml")]
        input: PathBuf,

        /// Check that the text is a well-formed document first.
        #[arg(long)]
        check: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print a summary of a Live set.
    Inspect {
        #[arg(value_name = "FILE.als")]
        input: PathBuf,

        /// Print the full model as JSON instead of tables.
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        input_args: InputArgs,
    },

    /// Re-export a Live set, optionally in another version's layout.
    #[command(disable_version_flag = true)]
    Convert {
        #[arg(value_name = "IN.als")]
        input: PathBuf,

        #[arg(value_name = "OUT.als")]
        output: PathBuf,

        /// Target version (e.g. 12.0.0). Defaults to the input's version.
        #[arg(long = "version", value_name = "X.Y.Z", value_parser = parse_version)]
        target: Option<Version>,

        #[command(flatten)]
        input_args: InputArgs,

        #[command(flatten)]
        output_args: OutputArgs,
    },
}

#[derive(Args)]
pub struct InputArgs {
    /// Require a UTF-8 document declaration.
    #[arg(long)]
    pub strict: bool,
}

impl InputArgs {
    pub fn reader_options(&self) -> AlsReaderOptions {
        let options = AlsReaderOptions::new();
        if self.strict { options.strict() } else { options }
    }
}

#[derive(Args)]
pub struct OutputArgs {
    /// Gzip compression level (0-9).
    #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(u32).range(0..=9))]
    pub level: u32,

    /// Write document text without indentation.
    #[arg(long)]
    pub compact: bool,
}

impl OutputArgs {
    pub fn writer_options(&self) -> AlsWriterOptions {
        let options = AlsWriterOptions::new().with_compression(self.level);
        if self.compact { options.compact() } else { options }
    }
}

fn parse_version(text: &str) -> Result<Version, String> {
    text.parse().map_err(|_| {
        let supported: Vec<String> = Version::ALL.iter().map(ToString::to_string).collect();
        format!("supported versions are {}", supported.join(", "))
    })
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
