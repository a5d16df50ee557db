//! Public-facing crate root: re-exports.
//!
//! ```no_run
//! let mut chart = termbars::Chart::new();
//! chart.set_title("Fruits");
//! chart.set_perc_width(50)?;
//! chart.add_with_color("cherries", 1.0, "1");
//! chart.add_with_color("blueberries", 5.0, "4");
//! chart.draw()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use core::{
    chart::{Chart, ChartBuilder, ChartConfig, Entry},
    color::{ColorTag, colorize},
    data::{ParseCsvError, read_csv},
    description::{DocumentFormat, Json, Toml},
    error::{ChartError, GraphError, ParseError, ValidationError},
};

pub use render::{Layout, Renderer};
