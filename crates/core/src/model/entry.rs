use thiserror::Error;

use crate::model::answer::Answer;
use crate::model::category::Category;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors that can occur when validating a catalog record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EntryError {
    #[error("entry filename cannot be empty")]
    EmptyFilename,

    #[error("entry filename has no supported image extension: {filename}")]
    UnsupportedExtension { filename: String },

    #[error("entry {filename} lists no categories")]
    NoCategories { filename: String },
}

//
// ─── CATALOG ENTRY ─────────────────────────────────────────────────────────────
//

/// Image file extensions the catalog and the directory scan both accept.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// One city record from the catalog: the image filename, the tags it belongs
/// to, and the alternate names accepted as a correct guess.
///
/// The filename doubles as the unique identifier and as the source of the
/// canonical answer. Aliases are stored lowercase, so matching against them
/// is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    filename: String,
    categories: Vec<Category>,
    aliases: Vec<String>,
}

impl CatalogEntry {
    /// Creates a validated catalog entry.
    ///
    /// Aliases are trimmed, lowercased, and dropped when empty; duplicate
    /// categories collapse while keeping first-seen order.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::EmptyFilename` for a blank filename,
    /// `EntryError::UnsupportedExtension` when the filename does not end in a
    /// known image extension, and `EntryError::NoCategories` when the tag
    /// list is empty.
    pub fn new(
        filename: impl Into<String>,
        categories: Vec<Category>,
        aliases: Vec<String>,
    ) -> Result<Self, EntryError> {
        let filename = filename.into().trim().to_owned();
        if filename.is_empty() {
            return Err(EntryError::EmptyFilename);
        }
        if !has_supported_extension(&filename) {
            return Err(EntryError::UnsupportedExtension { filename });
        }
        if categories.is_empty() {
            return Err(EntryError::NoCategories { filename });
        }

        let mut unique_categories: Vec<Category> = Vec::with_capacity(categories.len());
        for category in categories {
            if !unique_categories.contains(&category) {
                unique_categories.push(category);
            }
        }

        let aliases = aliases
            .into_iter()
            .map(|alias| alias.trim().to_lowercase())
            .filter(|alias| !alias.is_empty())
            .collect();

        Ok(Self {
            filename,
            categories: unique_categories,
            aliases,
        })
    }

    // Accessors
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// True when this entry carries the given tag.
    #[must_use]
    pub fn in_category(&self, category: &Category) -> bool {
        self.categories.contains(category)
    }

    /// The accepted answer derived from this entry's filename.
    #[must_use]
    pub fn answer(&self) -> Answer {
        Answer::resolve(&self.filename)
    }

    /// True when an already-normalized guess hits the canonical answer or
    /// one of the aliases.
    #[must_use]
    pub fn accepts(&self, normalized_guess: &str) -> bool {
        self.answer().matches(normalized_guess)
            || self.aliases.iter().any(|alias| alias == normalized_guess)
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

#[cfg(test)]
mod tests {
    use super::*;

    fn capitals() -> Vec<Category> {
        vec![Category::new("us_state_capitals").unwrap()]
    }

    #[test]
    fn entry_normalizes_aliases() {
        let entry = CatalogEntry::new(
            "new_york_city.jpg",
            capitals(),
            vec!["  NYC ".into(), "The Big Apple".into(), "  ".into()],
        )
        .unwrap();

        assert_eq!(entry.aliases(), ["nyc", "the big apple"]);
    }

    #[test]
    fn entry_rejects_blank_filename() {
        let err = CatalogEntry::new("  ", capitals(), Vec::new()).unwrap_err();
        assert_eq!(err, EntryError::EmptyFilename);
    }

    #[test]
    fn entry_rejects_unknown_extension() {
        let err = CatalogEntry::new("denver.gif", capitals(), Vec::new()).unwrap_err();
        assert!(matches!(err, EntryError::UnsupportedExtension { .. }));
    }

    #[test]
    fn entry_accepts_mixed_case_extension() {
        let entry = CatalogEntry::new("denver.JPG", capitals(), Vec::new()).unwrap();
        assert_eq!(entry.filename(), "denver.JPG");
    }

    #[test]
    fn entry_rejects_missing_categories() {
        let err = CatalogEntry::new("denver.jpg", Vec::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, EntryError::NoCategories { .. }));
    }

    #[test]
    fn entry_collapses_duplicate_categories() {
        let tag = Category::new("us_top10_cities").unwrap();
        let entry =
            CatalogEntry::new("houston.png", vec![tag.clone(), tag.clone()], Vec::new()).unwrap();
        assert_eq!(entry.categories().len(), 1);
    }

    #[test]
    fn accepts_canonical_and_alias_but_nothing_else() {
        let entry = CatalogEntry::new(
            "new_york_city.jpg",
            capitals(),
            vec!["nyc".into(), "the big apple".into()],
        )
        .unwrap();

        assert!(entry.accepts("new york city"));
        assert!(entry.accepts("nyc"));
        assert!(entry.accepts("the big apple"));
        assert!(!entry.accepts("new york"));
    }
}
