//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for the parts of the
//! interface, each responsible for one region of the pane, plus the screen
//! layout function that stitches them together.
//!
//! # Components
//!
//! - [`header`]: Title bar with the filtered book count
//! - [`category_bar`]: Horizontal category selector
//! - [`search`]: Search input box (shown while searching or filtering)
//! - [`table`]: Book list with TITLE / AUTHOR / CATEGORY columns
//! - [`favorites`]: Read-only favorites summary panel
//! - [`footer`]: Keybinding hints
//! - [`empty`]: Message for an empty filtered list
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Category bar]
//! [Search box - 3 lines, when visible]
//! [Table headers]
//! [Table rows | empty state]
//! [Blank padding]
//! [Border]
//! [Favorites panel - title + body]
//! [Border]
//! [Footer]
//! ```

mod category_bar;
mod empty;
mod favorites;
mod footer;
mod header;
mod search;
mod table;

use crate::app::state::FAVORITES_BODY_ROWS;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UiViewModel;

use category_bar::render_category_bar;
use empty::render_empty_state;
use favorites::render_favorites_panel;
use footer::render_footer;
use header::render_header;
use search::render_search_box;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections. Returns the next available row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full screen layout from a view model.
///
/// The top section (header, category bar, optional search box, table) flows
/// downward from row 2; the bottom section (favorites panel, footer) is
/// anchored to the last rows of the pane. The table's row budget was already
/// accounted for during view model computation, so the two sections never
/// overlap.
pub fn render_screen(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2; // Row 1 stays blank.

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_category_bar(current_row, &vm.category_bar, theme, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_box(current_row, search, theme, cols);
    }

    current_row = render_table_headers(current_row, theme);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        render_table_rows(current_row, &vm.rows, theme, cols);
    }

    let footer_row = rows.saturating_sub(1);
    let footer_border_row = footer_row.saturating_sub(1);
    let panel_border_row = footer_border_row.saturating_sub(FAVORITES_BODY_ROWS + 2);

    render_border(panel_border_row, &theme.colors.border, cols);
    render_favorites_panel(panel_border_row + 1, &vm.favorites, theme, cols);
    render_border(footer_border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
