//! Book domain model and the fixed catalog.
//!
//! This module defines the core [`Book`] record and the [`Catalog`] that owns the
//! fixed set of books shipped with the plugin. The catalog is defined once at
//! startup from an embedded TOML document and is never mutated afterwards; every
//! derived view (filtered lists, favorites) is recomputed from it on demand.

use serde::{Deserialize, Serialize};

use crate::domain::error::{Result, ZshelfError};

/// Label of the sentinel category that disables category filtering.
///
/// The sentinel is a UI value, not catalog data: it never appears on a book,
/// and selecting it makes the category predicate pass every book through.
pub const ALL_CATEGORIES: &str = "All";

/// An immutable book record.
///
/// Books carry a unique, stable `id` that persisted favorites reference across
/// sessions. Records are created once when the catalog is parsed and never
/// change at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique, stable identifier referenced by the favorite-id set.
    pub id: u32,

    /// Book title, searched case-insensitively.
    pub title: String,

    /// Author name, searched case-insensitively.
    pub author: String,

    /// Category label, matched exactly (case-sensitive) by the filter.
    pub category: String,
}

/// TOML container format for the embedded catalog document.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    books: Vec<Book>,
}

/// The fixed book catalog and its derived category vocabulary.
///
/// Holds the full book list in definition order plus the category list shown
/// by the UI: the [`ALL_CATEGORIES`] sentinel first, then every distinct
/// category appearing in the catalog, each exactly once, in first-seen order.
///
/// # Examples
///
/// ```
/// use zshelf::domain::{Catalog, ALL_CATEGORIES};
///
/// let catalog = Catalog::builtin();
/// assert_eq!(catalog.books().len(), 8);
/// assert_eq!(catalog.categories()[0], ALL_CATEGORIES);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
    categories: Vec<String>,
}

impl Catalog {
    /// Builds a catalog from a list of books, deriving the category vocabulary.
    ///
    /// Categories are collected in first-seen order with the sentinel prepended.
    #[must_use]
    pub fn from_books(books: Vec<Book>) -> Self {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for book in &books {
            if !categories.contains(&book.category) {
                categories.push(book.category.clone());
            }
        }
        Self { books, categories }
    }

    /// Parses a catalog from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or does not match the
    /// expected `[[books]]` table layout.
    pub fn from_toml(document: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(document)
            .map_err(|e| ZshelfError::Catalog(format!("failed to parse catalog: {e}")))?;
        Ok(Self::from_books(file.books))
    }

    /// Returns the built-in eight-book catalog.
    ///
    /// # Panics
    ///
    /// Panics if the embedded catalog document fails to parse (should never occur).
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_toml(include_str!("../../catalog/books.toml"))
            .expect("built-in catalog should always parse")
    }

    /// Returns all books in catalog order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns the category vocabulary: sentinel first, then first-seen order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Looks up a book by its id.
    #[must_use]
    pub fn book_by_id(&self, id: u32) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_eight_books_with_unique_ids() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.books().len(), 8);

        let mut ids: Vec<u32> = catalog.books().iter().map(|b| b.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn categories_are_distinct_first_seen_with_sentinel_first() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.categories(),
            &[
                ALL_CATEGORIES.to_string(),
                "Klasik".to_string(),
                "Manga".to_string(),
                "Kişisel Gelişim".to_string(),
            ]
        );
    }

    #[test]
    fn book_lookup_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.book_by_id(3).map(|b| b.title.as_str()), Some("Berserk"));
        assert!(catalog.book_by_id(99).is_none());
    }

    #[test]
    fn from_books_derives_categories_in_first_seen_order() {
        let books = vec![
            Book {
                id: 1,
                title: "a".into(),
                author: "x".into(),
                category: "B".into(),
            },
            Book {
                id: 2,
                title: "b".into(),
                author: "y".into(),
                category: "A".into(),
            },
            Book {
                id: 3,
                title: "c".into(),
                author: "z".into(),
                category: "B".into(),
            },
        ];
        let catalog = Catalog::from_books(books);
        assert_eq!(catalog.categories(), &["All", "B", "A"]);
    }
}
