//! Closed colour palette for bar tags.  No stringly-typed dispatch past parsing.

use std::fmt;

/// Colour identifier attached to an entry.
///
/// Tags are resolved through [`PALETTE`] by position: `"1"` is the first
/// palette slot, `"2"` the second, and so on.  Names are accepted too.
/// Anything unrecognised is [`ColorTag::None`]; colouring is cosmetic and
/// never an error.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ColorTag {
    #[default]
    None,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// Ordered palette: index `i` answers tag `i + 1`.
pub const PALETTE: [(ColorTag, &str, &str); 7] = [
    (ColorTag::Red, "red", "\x1b[31m"),
    (ColorTag::Green, "green", "\x1b[32m"),
    (ColorTag::Yellow, "yellow", "\x1b[33m"),
    (ColorTag::Blue, "blue", "\x1b[34m"),
    (ColorTag::Magenta, "magenta", "\x1b[35m"),
    (ColorTag::Cyan, "cyan", "\x1b[36m"),
    (ColorTag::White, "white", "\x1b[37m"),
];

pub const RESET: &str = "\x1b[0m";

impl ColorTag {
    /// Palette slot for a 1-based index, `None` outside the table.
    #[must_use]
    pub fn from_index(index: u64) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| PALETTE.get(i))
            .map_or(Self::None, |(tag, _, _)| *tag)
    }

    /// Parse a numeric index or a colour name.  Falls back to `None` on miss.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if let Ok(index) = s.parse::<u64>() {
            return Self::from_index(index);
        }
        let lower = s.to_ascii_lowercase();
        let tag = PALETTE
            .iter()
            .find(|(_, name, _)| *name == lower)
            .map_or(Self::None, |(tag, _, _)| *tag);
        if tag == Self::None && !s.is_empty() {
            tracing::debug!(color = s, "unknown colour tag, rendering uncoloured");
        }
        tag
    }

    /// Escape sequence that starts this colour, if any.
    #[inline]
    #[must_use]
    pub fn ansi(self) -> Option<&'static str> {
        PALETTE
            .iter()
            .find(|(tag, _, _)| *tag == self)
            .map(|(_, _, code)| *code)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        PALETTE
            .iter()
            .find(|(tag, _, _)| *tag == self)
            .map_or("none", |(_, name, _)| *name)
    }
}

// --- convenience conversions ---
impl From<&str> for ColorTag {
    #[inline]
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<&String> for ColorTag {
    #[inline]
    fn from(s: &String) -> Self {
        Self::parse(s)
    }
}

impl From<u64> for ColorTag {
    #[inline]
    fn from(index: u64) -> Self {
        Self::from_index(index)
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wrap `text` in colour + reset sequence.  Uncoloured tags pass through.
#[inline]
#[must_use]
pub fn colorize(tag: ColorTag, text: &str) -> String {
    match tag.ansi() {
        Some(code) => format!("{code}{text}{RESET}"),
        None => text.to_owned(),
    }
}
