//! Shared error types for the catalog crate.

use std::path::PathBuf;
use thiserror::Error;

use guess_core::model::{CategoryError, EntryError};

/// Fatal startup errors: the game cannot run without a valid manifest and a
/// populated image directory.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read catalog manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("catalog manifest is not valid JSON: {0}")]
    ManifestParse(#[from] serde_json::Error),

    #[error("catalog manifest lists no entries")]
    NoEntries,

    #[error("catalog manifest repeats filename {filename}")]
    DuplicateFilename { filename: String },

    #[error("manifest entry {filename} has no matching image file")]
    MissingImage { filename: String },

    #[error("image directory not found: {path}")]
    ImageDirMissing { path: PathBuf },

    #[error("cannot read image directory {path}: {source}")]
    ImageDirRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no images found in {path}")]
    NoImages { path: PathBuf },

    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error(transparent)]
    Entry(#[from] EntryError),
}

/// Per-round image errors: the referenced file cannot be read or its bytes
/// cannot be decoded/re-encoded.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ImageError {
    #[error("image file not found: {filename}")]
    Missing { filename: String },

    #[error("failed to read image {filename}: {source}")]
    Io {
        filename: String,
        source: std::io::Error,
    },

    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),

    #[error("failed to encode rotated image: {0}")]
    Encode(image::ImageError),
}
