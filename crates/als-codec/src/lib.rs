//! Live set (`.als`) container reader and writer.
//!
//! A Live set file is gzip-compressed document text: a single `Ableton`
//! root element whose `Creator` attribute names the producing version.
//! This crate maps that tree onto the typed model of the `als-model` crate
//! and back.
//!
//! # Features
//!
//! - Closed set of supported versions, detected from the creator string
//! - Version-gated fields decided by ordered version predicates
//! - One mapping walk shared by import and export, so both directions
//!   always agree on field order and tag names
//! - Audio, MIDI, group and return tracks as a closed sum type
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use als_codec::{read_als, write_als};
//!
//! let (mut project, version) = read_als(Path::new("song.als")).unwrap();
//! println!("{version}: {} tracks", project.tracks.len());
//!
//! project.annotation = "mixed down".to_string();
//! write_als(Path::new("song_out.als"), &project, version).unwrap();
//! ```
//!
//! Converting to another version first conforms the gated fields:
//!
//! ```no_run
//! use std::path::Path;
//! use als_codec::{Version, conform, read_als, write_als};
//!
//! let (mut project, _) = read_als(Path::new("old.als")).unwrap();
//! conform(&mut project, Version::V12_0_0);
//! write_als(Path::new("new.als"), &project, Version::V12_0_0).unwrap();
//! ```

pub mod access;
mod error;
pub mod gzip;
mod options;
mod reader;
mod schema;
pub mod tree;
mod version;
mod writer;

// Re-export error types
pub use error::{AlsError, Result};

pub use options::{AlsReaderOptions, AlsWriterOptions};
pub use version::Version;

// Mapping entry points
pub use schema::{ROOT_TAG, conform, decode, encode};

// Re-export reader functionality
pub use reader::{AlsReader, import_project, read_als, read_als_with_options};

// Re-export writer functionality
pub use writer::{AlsWriter, export_project, write_als, write_als_with_options};

pub use als_model as model;
