//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, along with methods for filtering, selection management, and UI view
//! model generation. It is the single source of truth for all transient UI
//! state; the only persistent values (search text, favorite ids) are loaded
//! into it at startup and written back through worker actions.
//!
//! # State Components
//!
//! - **Catalog**: the fixed book list and its category vocabulary
//! - **Search query / selected category**: the two filter inputs
//! - **Favorites**: the toggle-only favorite-id set
//! - **Filtered books**: derived subset after applying both filters
//! - **Selection**: cursor position within the filtered list
//! - **Input mode**: controls keybinding interpretation and UI layout
//!
//! View models are computed on demand from state snapshots and contain only
//! display-ready data.

use crate::domain::{filter_books, match_ranges, Book, Catalog, FavoriteSet};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BookRow, CategoryBarInfo, EmptyStateInfo, FavoritesPanelInfo, FooterInfo, HeaderInfo,
    SearchBarInfo, UiViewModel,
};

use super::modes::{InputMode, SearchFocus};

/// Rows of UI chrome outside the book table in normal mode: blank line,
/// header, border, category bar, table header, favorites panel (border +
/// title + body), footer border, footer.
const NORMAL_CHROME_ROWS: usize = 9 + FAVORITES_BODY_ROWS;

/// Additional chrome rows when the search box is visible.
const SEARCH_BOX_ROWS: usize = 3;

/// Body lines of the favorites panel (titles or the empty message).
pub const FAVORITES_BODY_ROWS: usize = 4;

/// Display width of the title column in characters.
const TITLE_COLUMN_WIDTH: usize = 26;

/// Display width of the author column in characters.
const AUTHOR_COLUMN_WIDTH: usize = 18;

/// Central application state container.
///
/// Holds the fixed catalog plus all transient UI state. Mutated only by the
/// event handler in response to user input and worker responses; view models
/// are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The fixed book catalog and its derived category vocabulary.
    pub catalog: Catalog,

    /// Current search query string.
    ///
    /// Accumulated by `Char` events, reduced by `Backspace`, cleared by
    /// `Escape`. Restored from storage at startup; every change is persisted.
    pub search_query: String,

    /// Index of the selected category within `catalog.categories()`.
    ///
    /// Index 0 is the sentinel that disables category filtering. Not
    /// persisted; resets to the sentinel every session.
    pub selected_category: usize,

    /// The favorite-id set, persisted on every toggle.
    pub favorites: FavoriteSet,

    /// Books matching the current search query and category.
    ///
    /// Recomputed by `apply_filter()` after every filter change, preserving
    /// catalog order. Used for rendering and selection bounds checking.
    pub filtered_books: Vec<Book>,

    /// Zero-based index of the selected book within `filtered_books`.
    ///
    /// Clamped to valid bounds by `apply_filter()`. Wraps around during
    /// navigation.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state over the given catalog.
    ///
    /// The filter starts empty (sentinel category, no search text), so the
    /// filtered list initially mirrors the whole catalog.
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        let mut state = Self {
            catalog,
            search_query: String::new(),
            selected_category: 0,
            favorites: FavoriteSet::new(),
            filtered_books: vec![],
            selected_index: 0,
            input_mode: InputMode::Normal,
            theme,
        };
        state.apply_filter();
        state
    }

    /// Moves the selection cursor down by one, wrapping to the top at the end.
    pub fn move_selection_down(&mut self) {
        if self.filtered_books.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_books.len();
    }

    /// Moves the selection cursor up by one, wrapping to the bottom at the start.
    pub fn move_selection_up(&mut self) {
        if self.filtered_books.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered_books.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the currently selected book, if any.
    #[must_use]
    pub fn selected_book(&self) -> Option<&Book> {
        self.filtered_books.get(self.selected_index)
    }

    /// Returns the label of the currently selected category.
    #[must_use]
    pub fn selected_category_name(&self) -> &str {
        self.catalog
            .categories()
            .get(self.selected_category)
            .map_or(crate::domain::ALL_CATEGORIES, String::as_str)
    }

    /// Selects the next category, wrapping past the end, and re-filters.
    pub fn next_category(&mut self) {
        let count = self.catalog.categories().len();
        if count == 0 {
            return;
        }
        self.selected_category = (self.selected_category + 1) % count;
        self.apply_filter();
    }

    /// Selects the previous category, wrapping past the start, and re-filters.
    pub fn prev_category(&mut self) {
        let count = self.catalog.categories().len();
        if count == 0 {
            return;
        }
        if self.selected_category == 0 {
            self.selected_category = count - 1;
        } else {
            self.selected_category -= 1;
        }
        self.apply_filter();
    }

    /// Applies the search and category filters to the catalog.
    ///
    /// Recomputes `filtered_books` (catalog order preserved) and clamps
    /// `selected_index` to the new bounds.
    pub fn apply_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filter",
            total_books = self.catalog.books().len(),
            query_len = self.search_query.len(),
            category = %self.selected_category_name(),
        )
        .entered();

        self.filtered_books = filter_books(
            self.catalog.books(),
            &self.search_query,
            self.selected_category_name(),
        );

        if self.filtered_books.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered_books.len() - 1);
        }

        tracing::debug!(
            filtered_count = self.filtered_books.len(),
            "filter applied"
        );
    }

    /// Returns whether the search box is currently part of the layout.
    ///
    /// The box is shown while search mode is active and also whenever a
    /// restored or left-over query is non-empty, so an active text filter is
    /// never invisible.
    #[must_use]
    pub fn search_bar_visible(&self) -> bool {
        matches!(self.input_mode, InputMode::Search(_)) || !self.search_query.is_empty()
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// Handles windowing (showing the slice of filtered books around the
    /// selection), substring-match highlighting, column truncation, and the
    /// favorites panel summary.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UiViewModel {
        let available_rows = self.calculate_available_rows(rows);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.filtered_books.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.filtered_books.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let book_rows: Vec<BookRow> = self.filtered_books[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, book)| {
                self.compute_book_row(book, visible_start + relative_idx, cols)
            })
            .collect();

        UiViewModel {
            rows: book_rows,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_header(),
            category_bar: self.compute_category_bar(),
            search_bar: self.compute_search_bar(),
            favorites: self.compute_favorites_panel(),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
        }
    }

    /// Computes the display row for a single book within the visible window.
    fn compute_book_row(&self, book: &Book, absolute_idx: usize, cols: usize) -> BookRow {
        let title = crate::ui::helpers::truncate_chars(&book.title, TITLE_COLUMN_WIDTH - 2);
        let author = crate::ui::helpers::truncate_chars(&book.author, AUTHOR_COLUMN_WIDTH - 2);

        let category_width = cols.saturating_sub(TITLE_COLUMN_WIDTH + AUTHOR_COLUMN_WIDTH + 4);
        let category = crate::ui::helpers::truncate_chars(&book.category, category_width);

        // Ranges are computed against the truncated display strings so the
        // highlight positions stay aligned with what is printed.
        let (title_highlights, author_highlights) = if self.search_query.is_empty() {
            (vec![], vec![])
        } else {
            (
                match_ranges(&title, &self.search_query),
                match_ranges(&author, &self.search_query),
            )
        };

        BookRow {
            title,
            author,
            category,
            is_favorite: self.favorites.contains(book.id),
            is_selected: absolute_idx == self.selected_index,
            title_highlights,
            author_highlights,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Books ({}) ", self.filtered_books.len()),
        }
    }

    fn compute_category_bar(&self) -> CategoryBarInfo {
        CategoryBarInfo {
            categories: self.catalog.categories().to_vec(),
            selected: self.selected_category,
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if self.search_bar_visible() {
            Some(SearchBarInfo {
                query: self.search_query.clone(),
            })
        } else {
            None
        }
    }

    /// Summarizes the favorites panel: count, visible titles, and overflow.
    ///
    /// Shows every title when they fit into the panel body, otherwise one
    /// body line is given up for an overflow indicator.
    fn compute_favorites_panel(&self) -> FavoritesPanelInfo {
        let favorite_books = self.favorites.favorite_books(self.catalog.books());
        let count = favorite_books.len();

        let (titles, overflow) = if count <= FAVORITES_BODY_ROWS {
            (
                favorite_books.into_iter().map(|book| book.title).collect(),
                0,
            )
        } else {
            let shown = FAVORITES_BODY_ROWS - 1;
            (
                favorite_books
                    .into_iter()
                    .take(shown)
                    .map(|book| book.title)
                    .collect(),
                count - shown,
            )
        };

        FavoritesPanelInfo {
            count,
            titles,
            overflow,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let favorite_hint = if self.selected_book().is_some_and(|book| self.favorites.contains(book.id)) {
            "remove favorite"
        } else {
            "add favorite"
        };

        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: close search  Enter: results  Ctrl+n/p: navigate  Type to filter".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                format!("ESC: close search  /: edit query  j/k: navigate  f: {favorite_hint}")
            }
            InputMode::Normal => {
                format!("j/k: navigate  h/l: category  f: {favorite_hint}  /: search  q: quit")
            }
        };

        FooterInfo { keybindings }
    }

    fn compute_empty_state(&self) -> Option<EmptyStateInfo> {
        if !self.filtered_books.is_empty() {
            return None;
        }
        Some(EmptyStateInfo {
            message: "No books match your filters".to_string(),
            subtitle: "ESC clears the search, h/l changes the category".to_string(),
        })
    }

    /// Calculates rows available for the book table after subtracting chrome.
    fn calculate_available_rows(&self, total_rows: usize) -> usize {
        if self.search_bar_visible() {
            total_rows.saturating_sub(NORMAL_CHROME_ROWS + SEARCH_BOX_ROWS)
        } else {
            total_rows.saturating_sub(NORMAL_CHROME_ROWS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Catalog::builtin(), Theme::default())
    }

    #[test]
    fn new_state_shows_whole_catalog() {
        let state = state();
        assert_eq!(state.filtered_books.len(), 8);
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_category_name(), "All");
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = state();

        state.move_selection_up();
        assert_eq!(state.selected_index, 7);

        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn category_cycling_wraps_and_refilters() {
        let mut state = state();

        state.prev_category();
        assert_eq!(state.selected_category_name(), "Kişisel Gelişim");
        assert_eq!(state.filtered_books.len(), 2);

        state.next_category();
        assert_eq!(state.selected_category_name(), "All");
        assert_eq!(state.filtered_books.len(), 8);
    }

    #[test]
    fn filter_clamps_selection_into_bounds() {
        let mut state = state();
        state.selected_index = 7;

        state.search_query = "dostoyevski".to_string();
        state.apply_filter();
        assert_eq!(state.filtered_books.len(), 2);
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn viewmodel_marks_selected_and_favorite_rows() {
        let mut state = state();
        state.favorites.toggle(1);
        let vm = state.compute_viewmodel(40, 100);

        assert_eq!(vm.rows.len(), 8);
        assert!(vm.rows[0].is_selected);
        assert!(vm.rows[0].is_favorite);
        assert!(!vm.rows[1].is_favorite);
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn viewmodel_reports_empty_state_when_nothing_matches() {
        let mut state = state();
        state.search_query = "zzzz".to_string();
        state.apply_filter();

        let vm = state.compute_viewmodel(40, 100);
        assert!(vm.rows.is_empty());
        assert!(vm.empty_state.is_some());
    }

    #[test]
    fn viewmodel_windows_rows_on_short_terminals() {
        let state = state();
        // 16 total rows leaves 3 table rows after chrome.
        let vm = state.compute_viewmodel(16, 100);
        assert_eq!(vm.rows.len(), 3);
    }

    #[test]
    fn favorites_panel_truncates_with_overflow() {
        let mut state = state();
        for id in [1, 2, 3, 4, 5, 6] {
            state.favorites.toggle(id);
        }

        let vm = state.compute_viewmodel(40, 100);
        assert_eq!(vm.favorites.count, 6);
        assert_eq!(vm.favorites.titles.len(), FAVORITES_BODY_ROWS - 1);
        assert_eq!(vm.favorites.overflow, 3);
    }

    #[test]
    fn search_bar_stays_visible_for_leftover_query() {
        let mut state = state();
        assert!(!state.search_bar_visible());

        state.search_query = "jojo".to_string();
        state.apply_filter();
        assert!(state.search_bar_visible(), "non-empty query keeps the box");

        state.input_mode = InputMode::Search(SearchFocus::Typing);
        state.search_query.clear();
        assert!(state.search_bar_visible(), "search mode keeps the box");
    }

    #[test]
    fn footer_wording_follows_selected_book_favorite_status() {
        let mut state = state();

        let vm = state.compute_viewmodel(40, 100);
        assert!(vm.footer.keybindings.contains("add favorite"));

        state.favorites.toggle(1);
        let vm = state.compute_viewmodel(40, 100);
        assert!(vm.footer.keybindings.contains("remove favorite"));
    }
}
