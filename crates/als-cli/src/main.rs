//! `als` command line tool.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use als_cli::commands::{
    CommandError, project_json, run_convert, run_inspect, run_to_als, run_to_xml,
};
use als_cli::logging::{LogConfig, LogFormat, init_logging};
use als_cli::summary::print_summary;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let code = if error.use_stderr() { 1 } else { 0 };
            let _ = error.print();
            std::process::exit(code);
        }
    };
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let exit_code = match run(cli.command) {
        Ok(()) => 0,
        Err(error) => {
            tracing::error!(%error, "command failed");
            eprintln!("error: {error:#}");
            error.exit_code()
        }
    };
    std::process::exit(exit_code);
}

fn run(command: Command) -> Result<(), CommandError> {
    match command {
        Command::ToXml { input } => {
            let output = run_to_xml(&input)?;
            println!("{}", output.display());
        }
        Command::ToAls {
            input,
            check,
            output,
        } => {
            let written = run_to_als(&input, check, &output.writer_options())?;
            println!("{}", written.display());
        }
        Command::Inspect {
            input,
            json,
            input_args,
        } => {
            let (project, version) = run_inspect(&input, &input_args.reader_options())?;
            if json {
                println!("{}", project_json(&project, version)?);
            } else {
                print_summary(&project, version);
            }
        }
        Command::Convert {
            input,
            output,
            target,
            input_args,
            output_args,
        } => {
            let version = run_convert(
                &input,
                &output,
                target,
                &input_args.reader_options(),
                &output_args.writer_options(),
            )?;
            println!("{} ({version})", output.display());
        }
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
