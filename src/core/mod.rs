//! Aggregates the chart model layer.

pub mod bounds;
pub mod chart;
pub mod color;
pub mod constants;
pub mod data;
pub mod description;
pub mod error;

// re-export frequently-used items for convenience
pub use chart::{Chart, ChartBuilder, ChartConfig, Entry};
pub use color::{ColorTag, PALETTE, colorize};
pub use constants::{BAR_FILL, DEFAULT_PERC_WIDTH, LABEL_GUTTER, NEGATIVE_FILL, VALUE_GUTTER};
pub use description::{DocumentFormat, Json, Toml};
pub use error::{ChartError, Document, GraphError, ParseError, ValidationError};
