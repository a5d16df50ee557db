//! A collection of constants.

/// One character of space between the label column and the bar
pub const LABEL_GUTTER: usize = 1;
/// One character of space between the bar and the value column
pub const VALUE_GUTTER: usize = 1;

/// Longest bar takes the whole reference width unless told otherwise.
pub const DEFAULT_PERC_WIDTH: u8 = 100;
/// Upper bound of the legal percentage range (the lower bound is exclusive 0).
pub const MAX_PERC_WIDTH: u8 = 100;

/// Widest row a fixed-width renderer will lay out; matches the range a
/// terminal can report.
pub const MAX_ROW_WIDTH: usize = u16::MAX as usize;

/// Row width used when stdout is not a terminal.
pub const FALLBACK_TERMINAL_WIDTH: u16 = 80;

/// Fill character for bars of non-negative entries.
pub const BAR_FILL: char = '█';
/// Fill character for bars of negative entries.
pub const NEGATIVE_FILL: char = '░';
