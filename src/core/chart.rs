//! Chart model: configuration, ordered entries, mutators + fluent builder.

use crate::core::{
    color::ColorTag,
    constants::{DEFAULT_PERC_WIDTH, MAX_PERC_WIDTH},
    error::{ChartError, ValidationError},
};

/// One bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub label: String,
    pub value: f64,
    pub color: ColorTag,
}

impl Entry {
    #[inline]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self::with_color(label, value, ColorTag::None)
    }

    #[inline]
    pub fn with_color(label: impl Into<String>, value: f64, color: impl Into<ColorTag>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

/// Chart-wide options.  `Default` is the documented default set and is
/// built fresh for every chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartConfig {
    pub title: String,
    pub perc_width: u8,
    pub show_values: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            perc_width: DEFAULT_PERC_WIDTH,
            show_values: false,
        }
    }
}

/// Check `n` against the legal `(0, 100]` range.
pub fn validate_perc_width(n: i64) -> Result<u8, ValidationError> {
    match u8::try_from(n) {
        Ok(p) if (1..=MAX_PERC_WIDTH).contains(&p) => Ok(p),
        _ => Err(ValidationError::PercWidthOutOfRange(n)),
    }
}

/// Configuration plus entries in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chart {
    config: ChartConfig,
    entries: Vec<Entry>,
}

impl Chart {
    /// Empty chart with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn builder() -> ChartBuilder {
        ChartBuilder::new()
    }

    pub(crate) fn from_parts(config: ChartConfig, entries: Vec<Entry>) -> Self {
        Self { config, entries }
    }

    // --- mutators ---

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.config.title = title.into();
    }

    /// Fails with [`ValidationError`] unless `n` is in `(0, 100]`; the chart
    /// is left untouched on failure.
    pub fn set_perc_width(&mut self, n: i64) -> Result<(), ChartError> {
        self.config.perc_width = validate_perc_width(n)?;
        Ok(())
    }

    pub fn set_show_values(&mut self, show: bool) {
        self.config.show_values = show;
    }

    pub fn add(&mut self, label: impl Into<String>, value: f64) {
        self.entries.push(Entry::new(label, value));
    }

    pub fn add_with_color(
        &mut self,
        label: impl Into<String>,
        value: f64,
        color: impl Into<ColorTag>,
    ) {
        self.entries.push(Entry::with_color(label, value, color));
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = Entry>) {
        self.entries.extend(entries);
    }

    // --- accessors ---

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.config.title
    }
    #[inline]
    #[must_use]
    pub fn perc_width(&self) -> u8 {
        self.config.perc_width
    }
    #[inline]
    #[must_use]
    pub fn show_values(&self) -> bool {
        self.config.show_values
    }
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fluent builder, validated once in `build`.
#[derive(Debug, Default)]
pub struct ChartBuilder {
    title: Option<String>,
    perc_width: Option<i64>,
    show_values: Option<bool>,
    entries: Vec<Entry>,
}

impl ChartBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn perc_width(mut self, n: i64) -> Self {
        self.perc_width = Some(n);
        self
    }
    #[inline]
    #[must_use]
    pub fn show_values(mut self, b: bool) -> Self {
        self.show_values = Some(b);
        self
    }
    #[inline]
    #[must_use]
    pub fn entry(mut self, label: impl Into<String>, value: f64) -> Self {
        self.entries.push(Entry::new(label, value));
        self
    }
    #[inline]
    #[must_use]
    pub fn colored_entry(
        mut self,
        label: impl Into<String>,
        value: f64,
        color: impl Into<ColorTag>,
    ) -> Self {
        self.entries.push(Entry::with_color(label, value, color));
        self
    }
    #[inline]
    #[must_use]
    pub fn entries(mut self, entries: impl IntoIterator<Item = Entry>) -> Self {
        self.entries.extend(entries);
        self
    }

    pub fn build(self) -> Result<Chart, ChartError> {
        let defaults = ChartConfig::default();
        let perc_width = match self.perc_width {
            Some(n) => validate_perc_width(n)?,
            None => defaults.perc_width,
        };
        Ok(Chart::from_parts(
            ChartConfig {
                title: self.title.unwrap_or(defaults.title),
                perc_width,
                show_values: self.show_values.unwrap_or(defaults.show_values),
            },
            self.entries,
        ))
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ChartBuilder> for Result<Chart, ChartError> {
    fn from(b: ChartBuilder) -> Self {
        b.build()
    }
}
