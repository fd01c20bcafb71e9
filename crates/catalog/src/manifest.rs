use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use guess_core::model::{Category, CatalogEntry};

use crate::error::ConfigError;
use crate::images::ImageSource;

//
// ─── MANIFEST RECORDS ──────────────────────────────────────────────────────────
//

/// Raw shape of one manifest record, before validation.
///
/// This mirrors the JSON file so the domain `CatalogEntry` never has to
/// carry serde concerns.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestRecord {
    pub filename: String,
    pub category: Tags,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// The `category` field appears both as a bare string and as a list in the
/// data file.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Tags {
    One(String),
    Many(Vec<String>),
}

impl Tags {
    fn into_vec(self) -> Vec<String> {
        match self {
            Tags::One(tag) => vec![tag],
            Tags::Many(tags) => tags,
        }
    }
}

impl ManifestRecord {
    /// Convert the raw record into a validated domain entry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a tag or the record itself fails
    /// validation.
    pub fn into_entry(self) -> Result<CatalogEntry, ConfigError> {
        let categories = self
            .category
            .into_vec()
            .into_iter()
            .map(Category::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CatalogEntry::new(self.filename, categories, self.aliases)?)
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// The immutable set of city records, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Loads and validates the manifest at `path`, cross-checking every
    /// filename against `images`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the file cannot be read, the JSON is
    /// malformed, or any record fails validation (see `from_records`).
    pub fn load(path: impl AsRef<Path>, images: &dyn ImageSource) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<ManifestRecord> = serde_json::from_str(&raw)?;
        let catalog = Self::from_records(records, images)?;
        info!(
            entries = catalog.len(),
            manifest = %path.display(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Builds a catalog from already-parsed records.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoEntries` for an empty manifest,
    /// `ConfigError::DuplicateFilename` when a filename repeats,
    /// `ConfigError::MissingImage` when `images` lacks a referenced file,
    /// and the underlying validation error for a malformed record.
    pub fn from_records(
        records: Vec<ManifestRecord>,
        images: &dyn ImageSource,
    ) -> Result<Self, ConfigError> {
        if records.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        let mut entries = Vec::with_capacity(records.len());
        let mut seen = HashSet::new();
        for record in records {
            let entry = record.into_entry()?;
            if !seen.insert(entry.filename().to_owned()) {
                return Err(ConfigError::DuplicateFilename {
                    filename: entry.filename().to_owned(),
                });
            }
            if !images.contains(entry.filename()) {
                return Err(ConfigError::MissingImage {
                    filename: entry.filename().to_owned(),
                });
            }
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by its filename.
    #[must_use]
    pub fn get(&self, filename: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.filename() == filename)
    }

    /// Entries carrying `category`, cloned in manifest order.
    ///
    /// An empty result is not an error here; the services layer turns it
    /// into the user-facing empty-category message.
    #[must_use]
    pub fn filter_by_category(&self, category: &Category) -> Vec<CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| e.in_category(category))
            .cloned()
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
