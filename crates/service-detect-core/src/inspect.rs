//! First-character inspection used by the diagnostic output.

use std::fmt;

/// Shown when a character has no assigned Unicode name.
pub const NO_NAME: &str = "<no name>";

/// A character with its code point and Unicode name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharInfo {
    pub ch: char,
    pub code_point: u32,
    pub name: Option<String>,
}

impl CharInfo {
    pub fn of(ch: char) -> Self {
        Self {
            ch,
            code_point: ch as u32,
            name: unicode_names2::name(ch).map(|n| n.to_string()),
        }
    }

    /// `U+` followed by at least four upper-case hex digits.
    pub fn code_point_hex(&self) -> String {
        format!("U+{:04X}", self.code_point)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(NO_NAME)
    }
}

impl fmt::Display for CharInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}'  code: {}  name: {}",
            self.ch,
            self.code_point_hex(),
            self.display_name()
        )
    }
}

/// Inspect the first character of `text`, if any.
pub fn first_char(text: &str) -> Option<CharInfo> {
    text.chars().next().map(CharInfo::of)
}
