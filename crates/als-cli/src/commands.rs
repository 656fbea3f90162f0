//! Subcommand implementations.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use thiserror::Error;
use tracing::{debug, info};

use als_codec::tree::Document;
use als_codec::{
    AlsError, AlsReaderOptions, AlsWriterOptions, Version, conform, gzip, read_als_with_options,
    write_als_with_options,
};
use als_model::Project;

/// Container file extension.
pub const ALS_EXTENSION: &str = "als";
/// Plain document text extension.
pub const XML_EXTENSION: &str = "xml";

/// A failed command, classified by exit code.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("{} does not have the .{expected} extension", path.display())]
    WrongExtension {
        path: PathBuf,
        expected: &'static str,
    },

    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

impl CommandError {
    /// Process exit code: 2 missing input, 3 wrong extension, 4 anything
    /// else.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingInput(_) => 2,
            Self::WrongExtension { .. } => 3,
            Self::Failed(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, CommandError>;

/// Decompress `<FILE>.als` into `<FILE>.xml`, dropping blank lines.
pub fn run_to_xml(input: &Path) -> Result<PathBuf> {
    check_input(input, ALS_EXTENSION)?;
    let output = input.with_extension(XML_EXTENSION);

    let file = File::open(input).with_context(|| format!("open {}", input.display()))?;
    let text = gzip::decompress(BufReader::new(file))
        .with_context(|| format!("decompress {}", input.display()))?;
    let kept: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    debug!(
        lines = kept.len(),
        dropped = text.lines().count() - kept.len(),
        "filtered blank lines"
    );
    let mut content = kept.join("\n");
    content.push('\n');
    std::fs::write(&output, content).with_context(|| format!("write {}", output.display()))?;

    info!(output = %output.display(), "wrote document text");
    Ok(output)
}

/// Compress `<FILE>.xml` into `<FILE>.als`.
///
/// With `check`, the text must parse as a document tree first.
pub fn run_to_als(input: &Path, check: bool, options: &AlsWriterOptions) -> Result<PathBuf> {
    check_input(input, XML_EXTENSION)?;
    let output = input.with_extension(ALS_EXTENSION);

    let text =
        std::fs::read_to_string(input).with_context(|| format!("read {}", input.display()))?;
    if check {
        let document = Document::parse(&text)
            .with_context(|| format!("parse {}", input.display()))?;
        debug!(nodes = document.node_count(), "document text is well formed");
    }
    let file = File::create(&output).with_context(|| format!("create {}", output.display()))?;
    gzip::compress(file, &text, options.compression)
        .with_context(|| format!("compress into {}", output.display()))?;

    info!(output = %output.display(), "wrote container");
    Ok(output)
}

/// Import a container for inspection.
pub fn run_inspect(input: &Path, options: &AlsReaderOptions) -> Result<(Project, Version)> {
    read_project(input, options)
}

/// Import a container and write it back, optionally in another version's
/// layout. Returns the version written.
pub fn run_convert(
    input: &Path,
    output: &Path,
    target: Option<Version>,
    reader_options: &AlsReaderOptions,
    writer_options: &AlsWriterOptions,
) -> Result<Version> {
    if !has_extension(output, ALS_EXTENSION) {
        return Err(CommandError::WrongExtension {
            path: output.to_path_buf(),
            expected: ALS_EXTENSION,
        });
    }
    let (mut project, detected) = read_project(input, reader_options)?;
    let version = target.unwrap_or(detected);
    if version != detected {
        info!(from = %detected, to = %version, "converting between versions");
        conform(&mut project, version);
    }
    write_als_with_options(output, &project, version, writer_options)
        .with_context(|| format!("write {}", output.display()))?;
    Ok(version)
}

/// The model as pretty printed JSON, tagged with its version.
pub fn project_json(project: &Project, version: Version) -> Result<String> {
    let value = serde_json::json!({
        "version": version.to_string(),
        "project": project,
    });
    serde_json::to_string_pretty(&value)
        .context("serialize project")
        .map_err(CommandError::from)
}

fn read_project(input: &Path, options: &AlsReaderOptions) -> Result<(Project, Version)> {
    check_input(input, ALS_EXTENSION)?;
    read_als_with_options(input, options.clone()).map_err(|error| match error {
        AlsError::FileNotFound { path } => CommandError::MissingInput(path),
        other => anyhow!(other)
            .context(format!("import {}", input.display()))
            .into(),
    })
}

fn check_input(path: &Path, expected: &'static str) -> Result<()> {
    if !path.is_file() {
        return Err(CommandError::MissingInput(path.to_path_buf()));
    }
    if !has_extension(path, expected) {
        return Err(CommandError::WrongExtension {
            path: path.to_path_buf(),
            expected,
        });
    }
    Ok(())
}

fn has_extension(path: &Path, expected: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(expected))
}
