//! `.als` container writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use als_model::Project;

use crate::error::Result;
use crate::gzip;
use crate::options::AlsWriterOptions;
use crate::schema;
use crate::version::Version;

/// Live set writer.
pub struct AlsWriter<W: Write> {
    writer: BufWriter<W>,
    options: AlsWriterOptions,
}

impl<W: Write> AlsWriter<W> {
    /// Create a new writer.
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, AlsWriterOptions::default())
    }

    /// Create a new writer with options.
    pub fn with_options(writer: W, options: AlsWriterOptions) -> Self {
        Self {
            writer: BufWriter::new(writer),
            options,
        }
    }

    /// Write `project` in the layout of `version`.
    ///
    /// Nothing reaches the underlying stream unless the whole container
    /// was built.
    pub fn write_project(mut self, project: &Project, version: Version) -> Result<()> {
        let bytes = render(project, version, &self.options)?;
        self.writer.write_all(&bytes)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Encode, serialize and compress `project` into container bytes.
fn render(project: &Project, version: Version, options: &AlsWriterOptions) -> Result<Vec<u8>> {
    let document = schema::encode(project, version)?;
    let text = document.serialize_with(options.print_options())?;
    gzip::compress(Vec::new(), &text, options.compression)
}

impl AlsWriter<File> {
    /// Create a `.als` file for writing. The file is truncated right away;
    /// use [`write_als`] to leave an existing file intact on failure.
    pub fn create(path: &Path) -> Result<Self> {
        Self::create_with_options(path, AlsWriterOptions::default())
    }

    /// Create a `.als` file with options.
    pub fn create_with_options(path: &Path, options: AlsWriterOptions) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::with_options(file, options))
    }
}

/// Export a project to a container stream.
pub fn export_project<W: Write>(output: W, project: &Project, version: Version) -> Result<()> {
    AlsWriter::new(output).write_project(project, version)
}

/// Write a project to a `.als` file.
pub fn write_als(path: &Path, project: &Project, version: Version) -> Result<()> {
    write_als_with_options(path, project, version, &AlsWriterOptions::default())
}

/// Write a project to a `.als` file with options.
///
/// The file is only created or replaced once the container is complete,
/// so an export error leaves an existing file untouched.
pub fn write_als_with_options(
    path: &Path,
    project: &Project,
    version: Version,
    options: &AlsWriterOptions,
) -> Result<()> {
    let bytes = render(project, version, options)?;
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(&bytes)?;
    file.flush()?;
    tracing::info!(path = %path.display(), %version, "wrote live set");
    Ok(())
}
