//! Input normalisation applied before classification.

/// Byte-order mark. Stripped wherever it appears, not only at the start.
pub const BOM: char = '\u{FEFF}';

/// Unicode whitespace plus the ASCII information separators (U+001C..U+001F).
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Remove every BOM, then trim leading/trailing whitespace.
///
/// Interior whitespace is preserved. Never fails; the empty string is a
/// valid result.
pub fn clean(raw: &str) -> String {
    let without_bom: String = raw.chars().filter(|&c| c != BOM).collect();
    without_bom.trim_matches(is_trimmable).to_string()
}
