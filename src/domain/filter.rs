//! Pure book filtering and search-match range computation.
//!
//! The filter is a pure function over the catalog: no state, no side effects,
//! and the output always preserves catalog order. Search text matches
//! case-insensitively as a substring of title or author; the category filter
//! requires an exact match unless the [`ALL_CATEGORIES`] sentinel is selected.
//! Both predicates are applied as a conjunction.

use crate::domain::book::{Book, ALL_CATEGORIES};

/// Filters books by search text and category.
///
/// The search text is lowercased once and matched as a substring against the
/// lowercased title and author; an empty search matches every book. The
/// category predicate passes everything through when `selected_category` is
/// the sentinel and otherwise requires exact (case-sensitive) equality with
/// `book.category`. Output order is catalog order.
///
/// # Examples
///
/// ```
/// use zshelf::domain::{filter_books, Catalog, ALL_CATEGORIES};
///
/// let catalog = Catalog::builtin();
/// let hits = filter_books(catalog.books(), "dostoyevski", ALL_CATEGORIES);
/// assert_eq!(hits.len(), 2);
/// ```
#[must_use]
pub fn filter_books(books: &[Book], search_text: &str, selected_category: &str) -> Vec<Book> {
    let query = search_text.to_lowercase();

    books
        .iter()
        .filter(|book| {
            let matches_text = query.is_empty()
                || book.title.to_lowercase().contains(&query)
                || book.author.to_lowercase().contains(&query);

            let matches_category =
                selected_category == ALL_CATEGORIES || book.category == selected_category;

            matches_text && matches_category
        })
        .cloned()
        .collect()
}

/// Computes character-index ranges of search-text occurrences for highlighting.
///
/// Returns `(start, end)` char-index ranges (exclusive end) of every
/// non-overlapping occurrence of the lowercased query in the lowercased text.
/// Ranges index into the original text; when lowercasing changes the character
/// count (e.g. `İ` expands to two characters) the positions no longer line up,
/// so highlighting is skipped and an empty list is returned.
#[must_use]
pub fn match_ranges(text: &str, search_text: &str) -> Vec<(usize, usize)> {
    if search_text.is_empty() {
        return vec![];
    }

    let haystack: Vec<char> = text.to_lowercase().chars().collect();
    if haystack.len() != text.chars().count() {
        return vec![];
    }

    let needle: Vec<char> = search_text.to_lowercase().chars().collect();
    if needle.is_empty() || needle.len() > haystack.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut pos = 0;
    while pos + needle.len() <= haystack.len() {
        if haystack[pos..pos + needle.len()] == needle[..] {
            ranges.push((pos, pos + needle.len()));
            pos += needle.len();
        } else {
            pos += 1;
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::Catalog;

    #[test]
    fn filtering_is_pure_and_order_preserving() {
        let catalog = Catalog::builtin();

        let first = filter_books(catalog.books(), "e", ALL_CATEGORIES);
        let second = filter_books(catalog.books(), "e", ALL_CATEGORIES);
        assert_eq!(first, second);

        let ids: Vec<u32> = first.iter().map(|b| b.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted, "output must preserve catalog order");
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = Catalog::builtin();

        let lower = filter_books(catalog.books(), "dostoyevski", ALL_CATEGORIES);
        let upper = filter_books(catalog.books(), "DOSTOYEVSKI", ALL_CATEGORIES);
        assert_eq!(lower, upper);
        assert_eq!(lower.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1, 6]);
    }

    #[test]
    fn empty_search_returns_all_books_subject_to_category() {
        let catalog = Catalog::builtin();

        let all = filter_books(catalog.books(), "", ALL_CATEGORIES);
        assert_eq!(all.len(), 8);

        let manga = filter_books(catalog.books(), "", "Manga");
        assert_eq!(manga.iter().map(|b| b.id).collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn sentinel_category_returns_all_books_subject_to_text() {
        let catalog = Catalog::builtin();

        let hits = filter_books(catalog.books(), "hugo", ALL_CATEGORIES);
        assert_eq!(hits.iter().map(|b| b.id).collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn search_matches_author_as_well_as_title() {
        let catalog = Catalog::builtin();

        let by_author = filter_books(catalog.books(), "clear", ALL_CATEGORIES);
        assert_eq!(by_author.iter().map(|b| b.id).collect::<Vec<_>>(), vec![8]);

        let by_title = filter_books(catalog.books(), "berserk", ALL_CATEGORIES);
        assert_eq!(by_title.iter().map(|b| b.id).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn predicates_combine_as_conjunction() {
        let catalog = Catalog::builtin();

        // "dostoyevski" matches two Klasik books; restricting to Manga yields none.
        let hits = filter_books(catalog.books(), "dostoyevski", "Manga");
        assert!(hits.is_empty());

        let hits = filter_books(catalog.books(), "suç", "Klasik");
        assert_eq!(hits.iter().map(|b| b.id).collect::<Vec<_>>(), vec![6]);
    }

    #[test]
    fn category_match_is_exact_and_case_sensitive() {
        let catalog = Catalog::builtin();

        let hits = filter_books(catalog.books(), "", "manga");
        assert!(hits.is_empty());
    }

    #[test]
    fn match_ranges_finds_all_occurrences() {
        assert_eq!(match_ranges("Berserk", "er"), vec![(1, 3), (4, 6)]);
        assert_eq!(match_ranges("Berserk", "BERSERK"), vec![(0, 7)]);
        assert_eq!(match_ranges("Berserk", "x"), vec![]);
        assert_eq!(match_ranges("Berserk", ""), vec![]);
    }

    #[test]
    fn match_ranges_skips_length_changing_lowercase() {
        // 'İ' lowercases to "i\u{307}", shifting every later position.
        assert_eq!(match_ranges("İyi Geceler Punpun", "punpun"), vec![]);
    }
}
