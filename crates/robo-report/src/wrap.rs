//! Greedy word wrap and cell truncation.

use crate::metrics::{Font, text_width};

const ELLIPSIS: &str = "...";

/// Breaks `text` into lines no wider than `max_width` points.
///
/// Words are added to the current line while it still fits; the first word
/// that does not fit starts the next line. A single word wider than the
/// column gets a line of its own. Explicit line breaks in the text start a
/// new line, and blank lines are dropped.
pub fn wrap_text(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if text_width(&candidate, font, size) <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// Shortens `text` with a trailing "..." so it fits in `max_width` points.
pub fn truncate_to_width(text: &str, font: Font, size: f32, max_width: f32) -> String {
    if text_width(text, font, size) <= max_width {
        return text.to_string();
    }
    let budget = max_width - text_width(ELLIPSIS, font, size);
    if budget <= 0.0 {
        return String::new();
    }

    let mut kept = String::new();
    let mut used = 0.0;
    for ch in text.chars() {
        let width = text_width(ch.encode_utf8(&mut [0; 4]), font, size);
        if used + width > budget {
            break;
        }
        used += width;
        kept.push(ch);
    }
    format!("{}{ELLIPSIS}", kept.trim_end())
}
