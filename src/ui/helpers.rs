//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: cursor positioning, character-based width handling (the catalog
//! contains multibyte text, so byte lengths are never used for layout math),
//! and highlighted text rendering for search matches.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape sequence `\x1b[{row};{col}H`. Coordinates are
/// 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Returns the display width of a string in characters.
///
/// Byte length overcounts multibyte text; all padding math goes through this.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Truncates a string to a maximum display width, appending `...` when cut.
///
/// Operates on characters, never byte offsets. Widths of three or less leave
/// no room for the ellipsis and produce a bare prefix.
#[must_use]
pub fn truncate_chars(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return text.chars().take(max_width).collect();
    }
    let prefix: String = text.chars().take(max_width - 3).collect();
    format!("{prefix}...")
}

/// Renders text with highlighted character ranges for search matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// char-index ranges (inclusive start, exclusive end). Highlighted sections
/// use the match highlight colors unless the row is selected, in which case
/// the selection colors take precedence and highlighting is skipped entirely.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end.min(chars.len())].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_counts_chars_not_bytes() {
        assert_eq!(display_width("Suç ve Ceza"), 11);
        assert_eq!(display_width("İyi Geceler Punpun"), 18);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("Berserk", 10), "Berserk");
        assert_eq!(truncate_chars("Atomik Alışkanlıklar", 10), "Atomik ...");
        assert_eq!(truncate_chars("İrade Eğitimi", 6), "İra...");
        assert_eq!(truncate_chars("abcdef", 2), "ab");
    }
}
