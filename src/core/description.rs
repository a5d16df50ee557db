//! Declarative chart description: a config document plus a data document.
//!
//! Both documents decode through [`DocumentFormat`] into typed intermediate
//! records before any chart is built, so the chart model never sees a
//! serialization library.  Unknown config options are ignored and missing
//! ones take the defaults of [`ChartConfig`].

use std::fmt;

use serde::{
    Deserialize, Deserializer,
    de::{self, DeserializeOwned, IgnoredAny, MapAccess, SeqAccess, Visitor},
};

use crate::core::{
    chart::{Chart, ChartConfig, Entry, validate_perc_width},
    color::ColorTag,
    error::{ChartError, Document, ParseError},
};

/// A structured text format that can decode typed records.
pub trait DocumentFormat {
    /// Human-readable name used in error messages.
    const NAME: &'static str;

    /// Decode `text`; the error is the format's own message.
    fn decode<T: DeserializeOwned>(text: &str) -> Result<T, String>;
}

pub struct Json;

impl DocumentFormat for Json {
    const NAME: &'static str = "JSON";

    fn decode<T: DeserializeOwned>(text: &str) -> Result<T, String> {
        serde_json::from_str(text).map_err(|e| e.to_string())
    }
}

pub struct Toml;

impl DocumentFormat for Toml {
    const NAME: &'static str = "TOML";

    fn decode<T: DeserializeOwned>(text: &str) -> Result<T, String> {
        toml::from_str(text).map_err(|e| e.to_string())
    }
}

/// Recognised config options.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigDocument {
    pub title: Option<String>,
    pub percwidth: Option<i64>,
    pub showvalues: Option<bool>,
}

/// Color given either as an identifier string or a bare palette index.
/// Any other JSON/TOML value is accepted and renders uncoloured.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawColor {
    Index(u64),
    Name(String),
    Other(IgnoredAny),
}

impl From<&RawColor> for ColorTag {
    fn from(raw: &RawColor) -> Self {
        match raw {
            RawColor::Index(i) => ColorTag::from_index(*i),
            RawColor::Name(s) => ColorTag::parse(s),
            RawColor::Other(_) => ColorTag::None,
        }
    }
}

/// One record of the data document.
#[derive(Debug, Deserialize)]
pub struct DataRecord {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub color: Option<RawColor>,
}

impl From<DataRecord> for Entry {
    fn from(r: DataRecord) -> Self {
        let color = r.color.as_ref().map_or(ColorTag::None, ColorTag::from);
        Entry::with_color(r.label, r.value, color)
    }
}

/// The data document is either a bare sequence or a table holding one.
///
/// Dispatches on the document's shape rather than trying each form in turn,
/// so a bad record reports the format's own message (e.g. a missing field).
#[derive(Debug)]
pub enum DataDocument {
    Records(Vec<DataRecord>),
    Table { entries: Vec<DataRecord> },
}

struct DataDocumentVisitor;

impl<'de> Visitor<'de> for DataDocumentVisitor {
    type Value = DataDocument;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of records or a table with an `entries` sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut records = Vec::new();
        while let Some(record) = seq.next_element()? {
            records.push(record);
        }
        Ok(DataDocument::Records(records))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == "entries" {
                if entries.is_some() {
                    return Err(de::Error::duplicate_field("entries"));
                }
                entries = Some(map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        let entries = entries.ok_or_else(|| de::Error::missing_field("entries"))?;
        Ok(DataDocument::Table { entries })
    }
}

impl<'de> Deserialize<'de> for DataDocument {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(DataDocumentVisitor)
    }
}

impl DataDocument {
    #[must_use]
    pub fn into_records(self) -> Vec<DataRecord> {
        match self {
            Self::Records(r) | Self::Table { entries: r } => r,
        }
    }
}

fn decode<F: DocumentFormat, T: DeserializeOwned>(
    document: Document,
    text: &str,
) -> Result<T, ParseError> {
    F::decode(text).map_err(|message| ParseError {
        document,
        format: F::NAME,
        message,
    })
}

impl ConfigDocument {
    /// Validate and fill defaults.
    pub fn into_config(self) -> Result<ChartConfig, ChartError> {
        let defaults = ChartConfig::default();
        let perc_width = match self.percwidth {
            Some(n) => validate_perc_width(n)?,
            None => defaults.perc_width,
        };
        Ok(ChartConfig {
            title: self.title.unwrap_or(defaults.title),
            perc_width,
            show_values: self.showvalues.unwrap_or(defaults.show_values),
        })
    }
}

impl Chart {
    /// Build a chart from a JSON config document and a JSON data document.
    pub fn from_description(config_doc: &str, data_doc: &str) -> Result<Self, ChartError> {
        Self::from_documents::<Json>(config_doc, data_doc)
    }

    /// Build a chart from documents in any [`DocumentFormat`].
    pub fn from_documents<F: DocumentFormat>(
        config_doc: &str,
        data_doc: &str,
    ) -> Result<Self, ChartError> {
        let config: ConfigDocument = decode::<F, _>(Document::Config, config_doc)?;
        let data: DataDocument = decode::<F, _>(Document::Data, data_doc)?;
        let config = config.into_config()?;
        let entries: Vec<Entry> = data.into_records().into_iter().map(Entry::from).collect();
        tracing::debug!(
            format = F::NAME,
            entries = entries.len(),
            perc_width = config.perc_width,
            "decoded chart description"
        );
        Ok(Self::from_parts(config, entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ValidationError;

    const FRUIT_CONFIG: &str = r#"{
        "title":     "Fruits example",
        "percwidth":  50,
        "showvalues": false
    }"#;

    const FRUIT_DATA: &str = r#"[
        { "label": "cherries",    "value": 1, "color": "1" },
        { "label": "apples",      "value": 3, "color": "2" },
        { "label": "bananas",     "value": 2, "color": "3" },
        { "label": "blueberries", "value": 5, "color": "4" }
    ]"#;

    #[test]
    fn fruit_description_round_trips() {
        let chart = Chart::from_description(FRUIT_CONFIG, FRUIT_DATA).unwrap();
        assert_eq!(chart.title(), "Fruits example");
        assert_eq!(chart.perc_width(), 50);
        assert!(!chart.show_values());
        let rows: Vec<_> = chart
            .entries()
            .iter()
            .map(|e| (e.label.as_str(), e.value, e.color))
            .collect();
        assert_eq!(
            rows,
            [
                ("cherries", 1.0, ColorTag::Red),
                ("apples", 3.0, ColorTag::Green),
                ("bananas", 2.0, ColorTag::Yellow),
                ("blueberries", 5.0, ColorTag::Blue),
            ]
        );
    }

    #[test]
    fn missing_options_take_defaults_and_unknown_are_ignored() {
        let chart = Chart::from_description(r#"{"theme": "dark"}"#, "[]").unwrap();
        assert_eq!(chart.config(), &ChartConfig::default());
        assert!(chart.is_empty());
    }

    #[test]
    fn color_is_optional_and_may_be_numeric() {
        let data = r#"[{"label": "a", "value": -1.5}, {"label": "b", "value": 2, "color": 6}]"#;
        let chart = Chart::from_description("{}", data).unwrap();
        assert_eq!(chart.entries()[0].color, ColorTag::None);
        assert_eq!(chart.entries()[0].value, -1.5);
        assert_eq!(chart.entries()[1].color, ColorTag::Cyan);
    }

    #[test]
    fn unknown_color_falls_back() {
        let data = r#"[
            {"label": "a", "value": 1, "color": "sparkly"},
            {"label": "b", "value": 1, "color": -2},
            {"label": "c", "value": 1, "color": [1, 2]}
        ]"#;
        let chart = Chart::from_description("{}", data).unwrap();
        assert!(chart.entries().iter().all(|e| e.color == ColorTag::None));
    }

    #[test]
    fn malformed_config_is_parse_error() {
        let err = Chart::from_description(r#"{"title": "x""#, "[]").unwrap_err();
        match err {
            ChartError::Parse(e) => {
                assert_eq!(e.document, Document::Config);
                assert_eq!(e.format, "JSON");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_data_is_parse_error() {
        let err = Chart::from_description("{}", r#"[{"label": "a"}]"#).unwrap_err();
        assert!(matches!(err, ChartError::Parse(ParseError { document: Document::Data, .. })));

        let err = Chart::from_description("{}", r#"[{"label": "a", "value": "many"}]"#)
            .unwrap_err();
        assert!(matches!(err, ChartError::Parse(_)));
    }

    #[test]
    fn bad_record_keeps_specific_message() {
        let err = Chart::from_description("{}", r#"[{"label": "a"}]"#).unwrap_err();
        assert!(err.to_string().contains("missing field `value`"), "{err}");

        let err = Chart::from_description("{}", r#"{"entries": [{"value": 1}]}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `label`"), "{err}");

        let err = Chart::from_description("{}", r#"{"rows": []}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `entries`"), "{err}");

        let err = Chart::from_documents::<Toml>("", "[[entries]]\nlabel = \"a\"\n").unwrap_err();
        assert!(err.to_string().contains("missing field `value`"), "{err}");
    }

    #[test]
    fn wrong_option_type_is_parse_error() {
        let err = Chart::from_description(r#"{"showvalues": "yes"}"#, "[]").unwrap_err();
        assert!(matches!(err, ChartError::Parse(_)));
    }

    #[test]
    fn out_of_range_perc_width_is_validation_error() {
        for bad in [0, 101, -5] {
            let cfg = format!(r#"{{"percwidth": {bad}}}"#);
            let err = Chart::from_description(&cfg, "[]").unwrap_err();
            assert!(matches!(
                err,
                ChartError::Validation(ValidationError::PercWidthOutOfRange(n)) if n == bad
            ));
        }
    }

    #[test]
    fn data_may_be_wrapped_in_entries_table() {
        let data = r#"{"entries": [{"label": "a", "value": 1}]}"#;
        let chart = Chart::from_description("{}", data).unwrap();
        assert_eq!(chart.len(), 1);
    }

    #[test]
    fn toml_documents_decode() {
        let config = "title = \"Fruits\"\npercwidth = 40\nshowvalues = true\n";
        let data = r#"
            [[entries]]
            label = "cherries"
            value = 1
            color = "red"

            [[entries]]
            label = "apples"
            value = 3.5
        "#;
        let chart = Chart::from_documents::<Toml>(config, data).unwrap();
        assert_eq!(chart.title(), "Fruits");
        assert_eq!(chart.perc_width(), 40);
        assert!(chart.show_values());
        assert_eq!(chart.entries()[0].color, ColorTag::Red);
        assert_eq!(chart.entries()[1].value, 3.5);
    }

    #[test]
    fn malformed_toml_names_format() {
        let err = Chart::from_documents::<Toml>("title = ", "").unwrap_err();
        match err {
            ChartError::Parse(e) => assert_eq!(e.format, "TOML"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
