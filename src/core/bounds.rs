//! Geometry helpers: value extrema, column widths + terminal size plumbing.

use terminal_size::{Width, terminal_size};

use crate::core::{chart::Entry, constants::FALLBACK_TERMINAL_WIDTH};

/// Largest finite `|value|` in the set.
///
/// * Empty sets and sets with no finite values give `0.0`.
/// * Non-finite values never contribute, so one `inf` cannot flatten every
///   other bar.
#[must_use]
pub fn max_magnitude(entries: &[Entry]) -> f64 {
    entries
        .iter()
        .map(|e| e.value.abs())
        .filter(|m| m.is_finite())
        .fold(0.0, f64::max)
}

/// Widest label, in `char`s.
#[inline]
#[must_use]
pub fn label_width(entries: &[Entry]) -> usize {
    entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0)
}

/// Widest formatted value, in `char`s.
#[inline]
#[must_use]
pub fn value_width(entries: &[Entry]) -> usize {
    entries
        .iter()
        .map(|e| format_value(e.value).len())
        .max()
        .unwrap_or(0)
}

/// Natural representation: integers without a fraction, decimals as the
/// shortest string that round-trips.  `-0` prints as `0`.
#[must_use]
pub fn format_value(v: f64) -> String {
    if v == 0.0 { "0".to_owned() } else { v.to_string() }
}

/// Current terminal width in columns (80 fallback).
#[inline]
#[must_use]
pub fn terminal_width() -> usize {
    terminal_size().map_or(usize::from(FALLBACK_TERMINAL_WIDTH), |(Width(w), _)| {
        usize::from(w)
    })
}
