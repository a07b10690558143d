//! Category selector component renderer.
//!
//! Renders the category vocabulary as a horizontal bar with the selected
//! entry highlighted. The sentinel entry comes first and disables category
//! filtering while selected.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CategoryBarInfo;

/// Renders the category bar at the specified row.
///
/// Each category is drawn as ` label ` with a single space between entries;
/// the selected entry uses the selection colors, the rest the dimmed text
/// color. The line is padded to the full terminal width. Returns the next
/// available row.
pub fn render_category_bar(row: usize, bar: &CategoryBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let mut printed = 0;
    print!(" ");
    printed += 1;

    for (idx, category) in bar.categories.iter().enumerate() {
        let entry = format!(" {category} ");
        let entry_width = display_width(&entry) + 1;
        if printed + entry_width > cols {
            break;
        }

        if idx == bar.selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
            print!("{entry}");
            print!("{}", Theme::reset());
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{entry}");
            print!("{}", Theme::reset());
        }
        print!(" ");
        printed += entry_width;
    }

    print!("{}", " ".repeat(cols.saturating_sub(printed)));
    row + 1
}
