//! Inline color-tag parser
//!
//! The layout engine supports a small markdown-like syntax for
//! coloring spans of text inline:
//!
//! - `[c: red]` or `[color: red]` switches the current color,
//! - `[/]` (or any tag starting with `/`) resets it.
//!
//! The parser is called with the index of an opening `[` and reports
//! how far the tag reaches plus the color effect; it never allocates a
//! parse tree. An unterminated tag consumes the rest of the string.
//! Unknown keys and unknown color names are hard errors, as is a tag
//! body without a `key: value` pair.

use crate::color::Color;
use crate::error::MarkupError;

/// The result of parsing one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupSpan {
    /// Index of the consumed `]`, or the string length when the tag
    /// was unterminated. The caller resumes at `end + 1`.
    pub end: usize,
    /// `Some(color)` to switch, `None` to reset to the default.
    pub color: Option<Color>,
}

/// Parse the tag opening at `chars[open]` (which must be `[`).
pub fn parse_tag(chars: &[char], open: usize) -> Result<MarkupSpan, MarkupError> {
    debug_assert_eq!(chars.get(open), Some(&'['));

    let end = chars[open..]
        .iter()
        .position(|&c| c == ']')
        .map(|rel| open + rel)
        .unwrap_or(chars.len());

    match chars.get(open + 1) {
        // "[]" and "[/...]" both reset to the default color.
        Some(']') | Some('/') => Ok(MarkupSpan { end, color: None }),
        _ => {
            let body: String = chars[open + 1..end].iter().collect();
            let parts: Vec<&str> = body.splitn(3, ':').collect();
            if parts.len() != 2 {
                return Err(MarkupError::MalformedTag(body));
            }

            let key = parts[0].trim().to_uppercase();
            let value = parts[1].trim().to_uppercase();
            match key.as_str() {
                "C" | "COLOR" => match Color::named(&value) {
                    Some(color) => Ok(MarkupSpan {
                        end,
                        color: Some(color),
                    }),
                    None => Err(MarkupError::UnknownColor(value)),
                },
                _ => Err(MarkupError::UnknownKey(key)),
            }
        }
    }
}
