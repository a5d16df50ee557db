//! Row geometry for a chart snapshot: column widths, bar budget and the
//! scaled length of every bar.
//!
//! ### Budgeting
//! A row is laid out as
//!
//! ```text
//! <label padded to label_width> <bar> <value>
//! ```
//!
//! The *reference width* is whatever the row width leaves after the label
//! column, its gutter and, when values are shown, the value column plus its
//! gutter.  `perc_width` percent of that (rounded) is the *bar budget*: the
//! length of the bar of the largest-magnitude entry.  Every other bar scales
//! linearly against it.
//!
//! Nothing here is cached; each call recomputes from the chart it is given.

use crate::core::{
    bounds::{label_width, max_magnitude, value_width},
    chart::Chart,
    constants::{LABEL_GUTTER, VALUE_GUTTER},
};

/// Geometry of one bar row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RowLayout {
    pub bar_len: usize,
    pub negative: bool,
}

/// Geometry of a whole chart at a given row width.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub label_width: usize,
    /// `0` when values are hidden.
    pub value_width: usize,
    pub reference_width: usize,
    pub bar_budget: usize,
    pub max_magnitude: f64,
    pub rows: Vec<RowLayout>,
}

impl Layout {
    #[must_use]
    pub fn compute(chart: &Chart, row_width: usize) -> Self {
        let entries = chart.entries();
        let label_width = label_width(entries);
        let value_width = if chart.show_values() {
            value_width(entries)
        } else {
            0
        };
        let reference_width = reference_width(row_width, label_width, value_width);
        let bar_budget = bar_budget(chart.perc_width(), reference_width);
        let max_magnitude = max_magnitude(entries);

        let rows = entries
            .iter()
            .map(|e| RowLayout {
                bar_len: scaled_len(e.value.abs(), max_magnitude, bar_budget),
                negative: e.value < 0.0,
            })
            .collect();

        Self {
            label_width,
            value_width,
            reference_width,
            bar_budget,
            max_magnitude,
            rows,
        }
    }
}

/// Columns left for bars once the label and value columns are reserved.
#[inline]
#[must_use]
pub fn reference_width(row_width: usize, label_width: usize, value_width: usize) -> usize {
    let value_cols = if value_width > 0 {
        value_width + VALUE_GUTTER
    } else {
        0
    };
    row_width.saturating_sub(label_width + LABEL_GUTTER + value_cols)
}

/// `round(perc / 100 * reference)` in integer arithmetic.
///
/// Split into whole hundreds and remainder so no intermediate exceeds
/// `reference_width` for any `perc_width <= 100`.
#[inline]
#[must_use]
pub fn bar_budget(perc_width: u8, reference_width: usize) -> usize {
    let p = usize::from(perc_width.min(100));
    reference_width / 100 * p + (reference_width % 100 * p + 50) / 100
}

/// `round(magnitude / max * budget)` clamped to `[0, budget]`.
///
/// A zero (or non-positive) maximum and non-finite magnitudes give `0`.
#[inline]
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn scaled_len(magnitude: f64, max: f64, budget: usize) -> usize {
    if max <= 0.0 || !magnitude.is_finite() {
        return 0;
    }
    let len = (magnitude / max * budget as f64).round();
    if len <= 0.0 {
        0
    } else {
        (len as usize).min(budget)
    }
}
