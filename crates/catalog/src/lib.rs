#![forbid(unsafe_code)]

pub mod error;
pub mod images;
pub mod manifest;

pub use error::{ConfigError, ImageError};
pub use images::{DirectoryImages, ImageSource, InMemoryImages, mime_for, rotate_encoded};
pub use manifest::{Catalog, ManifestRecord};
