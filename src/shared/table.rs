//! Column formatting helpers for terminal output.
//!
//! Width handling goes through unicode-width so CJK titles align correctly.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pads a string with spaces to `width`, or truncates it with a trailing
/// ellipsis when it is too long. Widths are display widths, not char counts.
pub fn fit(s: &str, width: usize) -> String {
    let display_width = s.width();
    if display_width <= width {
        return format!("{s}{}", " ".repeat(width - display_width));
    }
    if width <= 1 {
        return take_width(s, width);
    }

    let truncated = take_width(s, width - 1);
    let padding = width.saturating_sub(truncated.width()).saturating_sub(1);
    format!("{truncated}…{}", " ".repeat(padding))
}

fn take_width(s: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out
}
