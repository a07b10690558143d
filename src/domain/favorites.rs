//! The favorite-id set and its derived book view.
//!
//! Favorites are an ordered sequence of book ids with no duplicates. The only
//! mutation is [`FavoriteSet::toggle`]: remove the id if present, otherwise
//! append it at the end. There is no separate add or remove entry point and no
//! bulk clear; both transition directions are always enabled.
//!
//! Persisted favorite ids may reference books that no longer exist in the
//! catalog. Such stale ids are tolerated silently: they stay in the set but
//! are omitted from the derived favorite-books view.

use crate::domain::book::Book;

/// Ordered, duplicate-free set of favorited book ids.
///
/// # Examples
///
/// ```
/// use zshelf::domain::FavoriteSet;
///
/// let mut favorites = FavoriteSet::new();
/// favorites.toggle(3);
/// assert!(favorites.contains(3));
/// favorites.toggle(3);
/// assert!(favorites.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: Vec<u32>,
}

impl FavoriteSet {
    /// Creates an empty favorite set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a favorite set from persisted ids, dropping duplicates.
    ///
    /// Duplicates can only come from hand-edited or corrupt persisted data;
    /// the first occurrence wins so the stored order is preserved.
    #[must_use]
    pub fn from_ids(ids: Vec<u32>) -> Self {
        let mut set = Self::new();
        for id in ids {
            if !set.contains(id) {
                set.ids.push(id);
            }
        }
        set
    }

    /// Toggles the favorite status of a book id.
    ///
    /// If the id is present it is removed; otherwise it is appended at the
    /// end. Re-toggling an id therefore moves it to the end of the sequence
    /// rather than restoring its original position.
    pub fn toggle(&mut self, id: u32) {
        if let Some(pos) = self.ids.iter().position(|&existing| existing == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    /// Returns whether the id is currently favorited.
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Returns the ids in toggle order.
    #[must_use]
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// Returns the number of favorited ids, including stale ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether no ids are favorited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Derives the favorite books in catalog order.
    ///
    /// Ids not present in `books` are omitted without error.
    #[must_use]
    pub fn favorite_books(&self, books: &[Book]) -> Vec<Book> {
        books
            .iter()
            .filter(|book| self.contains(book.id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::Catalog;

    #[test]
    fn toggle_adds_absent_and_removes_present() {
        let mut favorites = FavoriteSet::new();

        favorites.toggle(2);
        favorites.toggle(3);
        assert_eq!(favorites.ids(), &[2, 3]);

        favorites.toggle(2);
        assert_eq!(favorites.ids(), &[3]);
    }

    #[test]
    fn double_toggle_restores_membership() {
        let mut favorites = FavoriteSet::from_ids(vec![5]);

        favorites.toggle(7);
        favorites.toggle(7);
        assert_eq!(favorites.ids(), &[5]);
    }

    #[test]
    fn toggle_reinsert_appends_at_end() {
        let mut favorites = FavoriteSet::from_ids(vec![1, 2, 3]);

        favorites.toggle(1);
        favorites.toggle(1);
        assert_eq!(favorites.ids(), &[2, 3, 1]);
    }

    #[test]
    fn from_ids_drops_duplicates_keeping_first() {
        let favorites = FavoriteSet::from_ids(vec![4, 2, 4, 2, 9]);
        assert_eq!(favorites.ids(), &[4, 2, 9]);
    }

    #[test]
    fn favorite_books_follow_catalog_order_and_omit_stale_ids() {
        let catalog = Catalog::builtin();
        let favorites = FavoriteSet::from_ids(vec![6, 99, 2]);

        let books = favorites.favorite_books(catalog.books());
        let ids: Vec<u32> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 6], "catalog order, stale id omitted");
        assert_eq!(favorites.len(), 3, "stale id stays in the raw set");
    }
}
