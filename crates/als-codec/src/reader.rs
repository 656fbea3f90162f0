//! `.als` container reader.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use als_model::Project;

use crate::error::{AlsError, Result};
use crate::gzip;
use crate::options::AlsReaderOptions;
use crate::schema;
use crate::tree::Document;
use crate::version::Version;

/// Live set reader.
///
/// Decompresses the container, parses the document text and maps it onto
/// a [`Project`] using the version named by the document's creator.
pub struct AlsReader<R: Read> {
    reader: BufReader<R>,
    options: AlsReaderOptions,
}

impl<R: Read> AlsReader<R> {
    /// Create a new reader.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, AlsReaderOptions::default())
    }

    /// Create a new reader with options.
    pub fn with_options(reader: R, options: AlsReaderOptions) -> Self {
        Self {
            reader: BufReader::new(reader),
            options,
        }
    }

    /// Decompress and parse the document tree without mapping it.
    pub fn read_document(self) -> Result<Document> {
        let text = gzip::decompress(self.reader)?;
        let document = Document::parse(&text)?;
        if self.options.strict_declaration {
            check_declaration(&document)?;
        }
        Ok(document)
    }

    /// Read the whole container into a project.
    pub fn read_project(self) -> Result<(Project, Version)> {
        let document = self.read_document()?;
        schema::decode(&document)
    }
}

impl AlsReader<File> {
    /// Open a `.als` file for reading.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_options(path, AlsReaderOptions::default())
    }

    /// Open a `.als` file with options.
    pub fn open_with_options(path: &Path, options: AlsReaderOptions) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AlsError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                AlsError::Io(e)
            }
        })?;
        Ok(Self::with_options(file, options))
    }
}

fn check_declaration(document: &Document) -> Result<()> {
    let declaration = document
        .declaration()
        .ok_or_else(|| AlsError::malformed("document has no declaration"))?;
    match declaration.encoding.as_deref() {
        Some(encoding) if encoding.eq_ignore_ascii_case("UTF-8") => Ok(()),
        Some(encoding) => Err(AlsError::malformed(format!(
            "declared encoding {encoding} is not UTF-8"
        ))),
        None => Err(AlsError::malformed("declaration names no encoding")),
    }
}

/// Import a project from a container stream.
pub fn import_project<R: Read>(input: R) -> Result<(Project, Version)> {
    AlsReader::new(input).read_project()
}

/// Read a `.als` file from a path.
pub fn read_als(path: &Path) -> Result<(Project, Version)> {
    read_als_with_options(path, AlsReaderOptions::default())
}

/// Read a `.als` file with options.
pub fn read_als_with_options(path: &Path, options: AlsReaderOptions) -> Result<(Project, Version)> {
    let (project, version) = AlsReader::open_with_options(path, options)?.read_project()?;
    tracing::info!(
        path = %path.display(),
        %version,
        tracks = project.tracks.len(),
        "read live set"
    );
    Ok((project, version))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(text: &str) -> Vec<u8> {
        gzip::compress(Vec::new(), text, 6).unwrap()
    }

    #[test]
    fn test_open_missing_file() {
        let err = read_als(Path::new("/definitely/not/here.als")).unwrap_err();
        assert!(matches!(err, AlsError::FileNotFound { .. }));
    }

    #[test]
    fn test_strict_declaration() {
        let bytes = container("<Ableton Creator=\"Ableton Live 9.7.7\" />");
        let lenient = AlsReader::new(bytes.as_slice()).read_document().unwrap();
        assert!(lenient.declaration().is_none());

        let err = AlsReader::with_options(bytes.as_slice(), AlsReaderOptions::new().strict())
            .read_document()
            .unwrap_err();
        assert!(matches!(err, AlsError::MalformedTree { .. }));

        let latin = container("<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><Ableton />");
        let err = AlsReader::with_options(latin.as_slice(), AlsReaderOptions::new().strict())
            .read_document()
            .unwrap_err();
        assert!(matches!(err, AlsError::MalformedTree { .. }));
    }

    #[test]
    fn test_unknown_creator_is_rejected() {
        let bytes = container(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Ableton Creator=\"Ableton Live 7.0.0\" />\n",
        );
        let err = import_project(bytes.as_slice()).unwrap_err();
        assert!(matches!(err, AlsError::UnsupportedVersion { .. }));
    }

    #[test]
    fn test_wrong_root_is_malformed() {
        let bytes = container("<Bitwig Creator=\"Ableton Live 9.7.7\" />");
        let err = import_project(bytes.as_slice()).unwrap_err();
        assert!(matches!(err, AlsError::MalformedTree { .. }));
    }

    #[test]
    fn test_plain_text_is_not_a_container() {
        let err = import_project("<Ableton />".as_bytes()).unwrap_err();
        assert!(matches!(err, AlsError::Decompression { .. }));
    }
}
