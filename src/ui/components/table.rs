//! Book table component renderer.
//!
//! Renders the filtered book list as a three-column table (TITLE, AUTHOR,
//! CATEGORY) with a favorite marker in front of each row. Supports selection
//! highlighting and search-match highlighting.

use crate::ui::helpers::{self, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BookRow;

/// Width of the favorite marker column.
const MARKER_WIDTH: usize = 2;

/// Display width of the title column.
const TITLE_WIDTH: usize = 24;

/// Display width of the author column.
const AUTHOR_WIDTH: usize = 16;

/// Gap between columns.
const COLUMN_GAP: usize = 2;

/// Renders the table column headers at the specified row.
///
/// Displays TITLE, AUTHOR, and CATEGORY headers with bold styling, offset by
/// the marker column. Returns the next available row.
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{}{:<title$}{}{:<author$}{}CATEGORY",
        " ".repeat(MARKER_WIDTH),
        "TITLE",
        " ".repeat(COLUMN_GAP),
        "AUTHOR",
        " ".repeat(COLUMN_GAP),
        title = TITLE_WIDTH,
        author = AUTHOR_WIDTH,
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// Returns the next available row.
pub fn render_table_rows(row: usize, items: &[BookRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single table row at the specified row position.
///
/// # Styling Precedence
///
/// 1. Selection colors (full-row background) when `is_selected`
/// 2. Search-match highlights (unless selected)
/// 3. Normal text color
///
/// The row is padded to the full terminal width so the selection background
/// covers the whole line.
fn render_table_row(row: usize, item: &BookRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base_fg = if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        &theme.colors.selection_fg
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        &theme.colors.text_normal
    };

    if item.is_favorite {
        print!("{}", Theme::fg(&theme.colors.favorite_fg));
        print!("★ ");
        print!("{}", Theme::fg(base_fg));
    } else {
        print!("{}", " ".repeat(MARKER_WIDTH));
    }

    helpers::render_highlighted_text(&item.title, &item.title_highlights, theme, item.is_selected);
    print!(
        "{}",
        " ".repeat(TITLE_WIDTH.saturating_sub(display_width(&item.title)) + COLUMN_GAP)
    );

    helpers::render_highlighted_text(
        &item.author,
        &item.author_highlights,
        theme,
        item.is_selected,
    );
    print!(
        "{}",
        " ".repeat(AUTHOR_WIDTH.saturating_sub(display_width(&item.author)) + COLUMN_GAP)
    );

    print!("{}", item.category);

    let line_len = MARKER_WIDTH
        + TITLE_WIDTH
        + COLUMN_GAP
        + AUTHOR_WIDTH
        + COLUMN_GAP
        + display_width(&item.category);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
