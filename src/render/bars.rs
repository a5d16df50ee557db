//! Bar chart text renderer.
//!
//! Single pass from a [`Chart`] snapshot to text:
//! - optional title line
//! - one row per entry, labels padded so bars start in the same column
//! - bars coloured through the entry's palette tag, negative bars drawn with
//!   [`NEGATIVE_FILL`]
//! - optional value column right after each bar

use std::io::{self, IsTerminal, Write, stdout};

use crate::core::{
    bounds::{format_value, terminal_width},
    chart::Chart,
    color::{ColorTag, RESET},
    constants::{BAR_FILL, LABEL_GUTTER, MAX_ROW_WIDTH, NEGATIVE_FILL, VALUE_GUTTER},
};
use crate::render::layout::Layout;

/// Where the row width comes from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Width {
    /// Ask the terminal on every render (handles resizes).
    Terminal,
    Fixed(usize),
}

/// Stateless renderer; the same value can render any number of charts.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    width: Width,
    color: bool,
}

impl Renderer {
    /// Terminal-wide rows; colour only when stdout is a terminal.
    #[inline]
    #[must_use]
    pub fn terminal() -> Self {
        Self {
            width: Width::Terminal,
            color: stdout().is_terminal(),
        }
    }

    /// Rows `width` columns wide (at most [`MAX_ROW_WIDTH`]), colour on.
    #[inline]
    #[must_use]
    pub fn fixed(width: usize) -> Self {
        Self {
            width: Width::Fixed(width.min(MAX_ROW_WIDTH)),
            color: true,
        }
    }

    /// Toggle ANSI colour escapes.
    #[inline]
    #[must_use]
    pub fn color(mut self, on: bool) -> Self {
        self.color = on;
        self
    }

    #[must_use]
    pub fn row_width(&self) -> usize {
        match self.width {
            Width::Terminal => terminal_width(),
            Width::Fixed(w) => w,
        }
    }

    /// Geometry this renderer would use for `chart` right now.
    #[must_use]
    pub fn layout(&self, chart: &Chart) -> Layout {
        Layout::compute(chart, self.row_width())
    }

    /// Render the whole chart to a string, one `\n`-terminated line per row.
    #[must_use]
    pub fn render(&self, chart: &Chart) -> String {
        let layout = self.layout(chart);
        let _span = tracing::debug_span!(
            "render_chart",
            entries = chart.len(),
            label_width = layout.label_width,
            bar_budget = layout.bar_budget,
        )
        .entered();

        let mut out = String::new();
        if !chart.title().is_empty() {
            out.push_str(chart.title());
            out.push('\n');
        }

        for (entry, row) in chart.entries().iter().zip(&layout.rows) {
            push_label(&mut out, &entry.label, layout.label_width);
            out.push_str(&" ".repeat(LABEL_GUTTER));

            let fill = if row.negative { NEGATIVE_FILL } else { BAR_FILL };
            let bar: String = std::iter::repeat_n(fill, row.bar_len).collect();
            self.push_bar(&mut out, &bar, entry.color);

            if chart.show_values() {
                out.push_str(&" ".repeat(VALUE_GUTTER));
                out.push_str(&format_value(entry.value));
            }
            out.push('\n');
        }
        tracing::trace!(bytes = out.len(), "chart rendered");
        out
    }

    /// Render into `sink`.  Identical bytes to [`Renderer::render`].
    pub fn render_to<W: Write>(&self, chart: &Chart, sink: &mut W) -> io::Result<()> {
        sink.write_all(self.render(chart).as_bytes())?;
        sink.flush()
    }

    fn push_bar(&self, out: &mut String, bar: &str, tag: ColorTag) {
        match tag.ansi() {
            Some(code) if self.color && !bar.is_empty() => {
                out.push_str(code);
                out.push_str(bar);
                out.push_str(RESET);
            }
            _ => out.push_str(bar),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::terminal()
    }
}

/// Left-align `label` in a `width`-char column.
#[inline]
fn push_label(out: &mut String, label: &str, width: usize) {
    out.push_str(label);
    let len = label.chars().count();
    for _ in len..width {
        out.push(' ');
    }
}

impl Chart {
    /// Render to stdout at terminal width.
    pub fn draw(&self) -> io::Result<()> {
        Renderer::terminal().render_to(self, &mut stdout().lock())
    }
}
