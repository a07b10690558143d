//! Favorites panel component renderer.
//!
//! Renders the read-only favorites summary: a title line with the favorite
//! count, then a fixed-height body listing favorite titles in catalog order,
//! or an empty-state message when nothing is favorited. When more favorites
//! exist than fit, the last body line shows an overflow indicator.

use crate::app::state::FAVORITES_BODY_ROWS;
use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FavoritesPanelInfo;

/// Renders the favorites panel starting at the specified row.
///
/// Occupies `1 + FAVORITES_BODY_ROWS` rows: the title line plus the body.
/// Every line is padded to the full terminal width so stale frame content
/// never shows through. Returns the next available row.
pub fn render_favorites_panel(
    row: usize,
    panel: &FavoritesPanelInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let title = format!(" Favorites ({})", panel.count);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.favorite_fg));
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(display_width(&title))));
    print!("{}", Theme::reset());

    let mut body_row = row + 1;
    let body_end = row + 1 + FAVORITES_BODY_ROWS;

    if panel.count == 0 {
        body_row = render_panel_line(
            body_row,
            " No favorite books yet.",
            &theme.colors.text_dim,
            cols,
        );
    } else {
        for title in &panel.titles {
            body_row = render_panel_line(
                body_row,
                &format!(" - {title}"),
                &theme.colors.text_normal,
                cols,
            );
        }
        if panel.overflow > 0 {
            body_row = render_panel_line(
                body_row,
                &format!(" ... and {} more", panel.overflow),
                &theme.colors.text_dim,
                cols,
            );
        }
    }

    while body_row < body_end {
        body_row = render_panel_line(body_row, "", &theme.colors.text_dim, cols);
    }

    body_row
}

/// Renders one padded panel line in the given color.
fn render_panel_line(row: usize, text: &str, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(display_width(text))));
    print!("{}", Theme::reset());
    row + 1
}
