//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer; they contain no business logic, only display-ready data —
//! truncated columns, highlight ranges, panel summaries.

/// Complete UI view model for one render cycle.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Visible book rows (the window around the selection).
    pub rows: Vec<BookRow>,

    /// Index of the selected row within `rows`.
    pub selected_index: usize,

    /// Header information (title with filtered count).
    pub header: HeaderInfo,

    /// Category selector state.
    pub category_bar: CategoryBarInfo,

    /// Search box state, `None` when the box is not part of the layout.
    pub search_bar: Option<SearchBarInfo>,

    /// Favorites panel summary.
    pub favorites: FavoritesPanelInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Message shown in the table area when no books match the filters.
    pub empty_state: Option<EmptyStateInfo>,
}

/// Display information for a single book row.
///
/// Column strings are pre-truncated to their display widths; highlight ranges
/// index into the truncated strings, not the originals.
#[derive(Debug, Clone)]
pub struct BookRow {
    /// Truncated title column text.
    pub title: String,

    /// Truncated author column text.
    pub author: String,

    /// Truncated category column text.
    pub category: String,

    /// Whether the book is currently favorited (drawn as a marker).
    pub is_favorite: bool,

    /// Whether this row is the current selection.
    pub is_selected: bool,

    /// Character ranges of search-text matches within `title`.
    pub title_highlights: Vec<(usize, usize)>,

    /// Character ranges of search-text matches within `author`.
    pub author_highlights: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Category selector display information.
#[derive(Debug, Clone)]
pub struct CategoryBarInfo {
    /// All selectable categories, sentinel first.
    pub categories: Vec<String>,

    /// Index of the selected category within `categories`.
    pub selected: usize,
}

/// Search box display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}

/// Favorites panel display information.
#[derive(Debug, Clone)]
pub struct FavoritesPanelInfo {
    /// Number of favorite books (stale ids excluded).
    pub count: usize,

    /// Titles shown in the panel body, in catalog order.
    pub titles: Vec<String>,

    /// Number of favorites beyond the shown titles, 0 when all fit.
    pub overflow: usize,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message shown when the filtered list has no entries.
#[derive(Debug, Clone)]
pub struct EmptyStateInfo {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
