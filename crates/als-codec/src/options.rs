//! Reader and writer options.

use crate::gzip::DEFAULT_LEVEL;
use crate::tree::PrintOptions;

/// Options for reading `.als` containers.
#[derive(Debug, Clone, Default)]
pub struct AlsReaderOptions {
    /// Require a `<?xml version="1.0" encoding="UTF-8"?>` declaration.
    pub strict_declaration: bool,
}

impl AlsReaderOptions {
    /// Create reader options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject documents without a UTF-8 declaration.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict_declaration = true;
        self
    }
}

/// Options for writing `.als` containers.
#[derive(Debug, Clone)]
pub struct AlsWriterOptions {
    /// Gzip level, 0 (store) to 9 (best, default).
    pub compression: u32,
    /// Tab-indent the document text (default: true).
    pub indent: bool,
}

impl Default for AlsWriterOptions {
    fn default() -> Self {
        Self {
            compression: DEFAULT_LEVEL,
            indent: true,
        }
    }
}

impl AlsWriterOptions {
    /// Create writer options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gzip level. Values above 9 are clamped.
    #[must_use]
    pub fn with_compression(mut self, level: u32) -> Self {
        self.compression = level.min(9);
        self
    }

    /// Write the document text without indentation.
    #[must_use]
    pub fn compact(mut self) -> Self {
        self.indent = false;
        self
    }

    pub(crate) fn print_options(&self) -> PrintOptions {
        PrintOptions {
            indent: self.indent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_defaults() {
        let options = AlsWriterOptions::default();
        assert_eq!(options.compression, 9);
        assert!(options.indent);
    }

    #[test]
    fn test_builders() {
        let options = AlsWriterOptions::new().with_compression(42).compact();
        assert_eq!(options.compression, 9);
        assert!(!options.print_options().indent);
        assert!(AlsReaderOptions::new().strict().strict_declaration);
    }
}
