use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use tracing::debug;

use guess_core::model::{Rotation, SUPPORTED_EXTENSIONS};

use crate::error::{ConfigError, ImageError};

//
// ─── IMAGE SOURCE ──────────────────────────────────────────────────────────────
//

/// Resolves catalog filenames to raw encoded image bytes.
///
/// The directory-backed source is the production implementation; the
/// in-memory source backs tests.
pub trait ImageSource: Send + Sync {
    /// True when the source holds a file with this name.
    fn contains(&self, filename: &str) -> bool;

    /// Raw encoded bytes for the given filename.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::Missing` when the source holds no such file, or
    /// `ImageError::Io` when the bytes cannot be read.
    fn read(&self, filename: &str) -> Result<Vec<u8>, ImageError>;

    /// Number of images the source holds.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//
// ─── DIRECTORY SOURCE ──────────────────────────────────────────────────────────
//

/// A flat directory of png/jpg/jpeg files, scanned once at startup.
#[derive(Debug, Clone)]
pub struct DirectoryImages {
    root: PathBuf,
    files: Vec<String>,
}

impl DirectoryImages {
    /// Scans `root` for supported image files.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ImageDirMissing` when `root` is not a
    /// directory, `ConfigError::ImageDirRead` when it cannot be listed, and
    /// `ConfigError::NoImages` when it holds no supported images.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ConfigError::ImageDirMissing { path: root });
        }

        let listing = fs::read_dir(&root).map_err(|source| ConfigError::ImageDirRead {
            path: root.clone(),
            source,
        })?;

        let mut files = Vec::new();
        for dir_entry in listing {
            let dir_entry = dir_entry.map_err(|source| ConfigError::ImageDirRead {
                path: root.clone(),
                source,
            })?;
            if !dir_entry.path().is_file() {
                continue;
            }
            let name = dir_entry.file_name().to_string_lossy().into_owned();
            if has_supported_extension(&name) {
                files.push(name);
            }
        }

        if files.is_empty() {
            return Err(ConfigError::NoImages { path: root });
        }
        files.sort();
        debug!(count = files.len(), root = %root.display(), "image directory scanned");

        Ok(Self { root, files })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filenames discovered at open time, sorted.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }
}

impl ImageSource for DirectoryImages {
    fn contains(&self, filename: &str) -> bool {
        self.files.iter().any(|file| file == filename)
    }

    fn read(&self, filename: &str) -> Result<Vec<u8>, ImageError> {
        if !self.contains(filename) {
            return Err(ImageError::Missing {
                filename: filename.to_owned(),
            });
        }
        fs::read(self.root.join(filename)).map_err(|source| ImageError::Io {
            filename: filename.to_owned(),
            source,
        })
    }

    fn len(&self) -> usize {
        self.files.len()
    }
}

//
// ─── IN-MEMORY SOURCE ──────────────────────────────────────────────────────────
//

/// Simple in-memory image source for tests and prototyping.
#[derive(Debug, Clone, Default)]
pub struct InMemoryImages {
    files: HashMap<String, Vec<u8>>,
}

impl InMemoryImages {
    #[must_use]
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    pub fn insert(&mut self, filename: impl Into<String>, bytes: Vec<u8>) {
        self.files.insert(filename.into(), bytes);
    }

    /// Builder-style convenience for tests.
    #[must_use]
    pub fn with(mut self, filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(filename, bytes);
        self
    }
}

impl ImageSource for InMemoryImages {
    fn contains(&self, filename: &str) -> bool {
        self.files.contains_key(filename)
    }

    fn read(&self, filename: &str) -> Result<Vec<u8>, ImageError> {
        self.files
            .get(filename)
            .cloned()
            .ok_or_else(|| ImageError::Missing {
                filename: filename.to_owned(),
            })
    }

    fn len(&self) -> usize {
        self.files.len()
    }
}

//
// ─── ROTATION ──────────────────────────────────────────────────────────────────
//

/// Applies a quarter-turn to encoded image bytes.
///
/// `Rotation::R0` passes the bytes through untouched; any other rotation
/// decodes, rotates, and re-encodes as PNG.
///
/// # Errors
///
/// Returns `ImageError::Decode`/`ImageError::Encode` when the bytes cannot
/// be decoded or the rotated image cannot be written back out.
pub fn rotate_encoded(bytes: Vec<u8>, rotation: Rotation) -> Result<Vec<u8>, ImageError> {
    if rotation.is_upright() {
        return Ok(bytes);
    }

    let decoded = image::load_from_memory(&bytes).map_err(ImageError::Decode)?;
    let rotated = match rotation {
        Rotation::R0 => decoded,
        Rotation::R90 => decoded.rotate90(),
        Rotation::R180 => decoded.rotate180(),
        Rotation::R270 => decoded.rotate270(),
    };

    let mut out = Cursor::new(Vec::new());
    rotated
        .write_to(&mut out, image::ImageFormat::Png)
        .map_err(ImageError::Encode)?;
    Ok(out.into_inner())
}

/// MIME type for a filename, by extension. Rotated payloads are always
/// re-encoded as PNG regardless of the source format.
#[must_use]
pub fn mime_for(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_stem, ext)| ext.to_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

fn has_supported_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .is_some_and(|(_stem, ext)| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
