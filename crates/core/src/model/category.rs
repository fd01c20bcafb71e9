use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors that can occur when building a category tag.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("category tag cannot be empty")]
    Empty,
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// A tag grouping catalog entries (e.g. state capitals, top-20 metros).
///
/// Tags are trimmed and lowercased on construction so filtering is
/// case-insensitive.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Category(String);

impl Category {
    /// Creates a new `Category` from a raw tag string.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::Empty` if the tag is empty or whitespace-only.
    pub fn new(tag: impl Into<String>) -> Result<Self, CategoryError> {
        let tag = tag.into().trim().to_lowercase();
        if tag.is_empty() {
            return Err(CategoryError::Empty);
        }
        Ok(Self(tag))
    }

    /// Returns the underlying tag string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Category({})", self.0)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::new(s)
    }
}

//
// ─── BUILT-IN CATEGORIES ───────────────────────────────────────────────────────
//

/// A category offered on the start screen, paired with its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub display_name: &'static str,
    pub id: &'static str,
}

impl CategoryInfo {
    /// The validated `Category` for this menu item.
    #[must_use]
    pub fn category(&self) -> Category {
        Category(self.id.to_owned())
    }
}

/// The categories offered on the start screen, in menu order.
pub const BUILTIN_CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo {
        display_name: "US State Capitals",
        id: "us_state_capitals",
    },
    CategoryInfo {
        display_name: "Top 20 US Metros",
        id: "us_top20_metros",
    },
    CategoryInfo {
        display_name: "10 Largest US Cities",
        id: "us_top10_cities",
    },
    CategoryInfo {
        display_name: "20 Largest US Cities",
        id: "us_top20_cities",
    },
    CategoryInfo {
        display_name: "30 Largest US Cities",
        id: "us_top30_cities",
    },
];

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_normalizes_case_and_whitespace() {
        let tag = Category::new("  US_State_Capitals ").unwrap();
        assert_eq!(tag.as_str(), "us_state_capitals");
    }

    #[test]
    fn category_rejects_empty_tag() {
        assert_eq!(Category::new("   ").unwrap_err(), CategoryError::Empty);
    }

    #[test]
    fn category_from_str_round_trip() {
        let tag: Category = "us_top20_metros".parse().unwrap();
        assert_eq!(tag.to_string(), "us_top20_metros");
    }

    #[test]
    fn builtin_ids_are_already_normalized() {
        for info in BUILTIN_CATEGORIES {
            assert_eq!(info.category().as_str(), info.id);
        }
    }

    #[test]
    fn builtin_menu_has_five_modes() {
        assert_eq!(BUILTIN_CATEGORIES.len(), 5);
        assert_eq!(BUILTIN_CATEGORIES[0].display_name, "US State Capitals");
    }
}
