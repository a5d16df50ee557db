use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(name = "termbars", about = "Horizontal bar charts in the terminal")]
pub struct Cli {
    #[command(flatten)]
    pub output: OutputArgs,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Draw a chart from a config document and a data document
    Doc(DocArgs),
    /// Draw a chart from `label,value[,color]` CSV rows
    Csv(CsvArgs),
    /// Show the colour palette and its tags
    Colors,
    /// Draw the built-in example charts
    Examples,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Copy)]
pub struct OutputArgs {
    /// Fixed row width instead of the terminal width
    #[arg(long, global = true, value_name = "COLS")]
    pub width: Option<usize>,

    /// Never emit ANSI colour escapes
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit debug logs on stderr
    #[arg(long, global = true)]
    pub debug: bool,
}

/// `termbars doc …`
#[derive(Parser, Debug)]
pub struct DocArgs {
    /// Config document (title, percwidth, showvalues); defaults if omitted
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Data document (sequence of label/value/color records)
    #[arg(short, long, value_name = "FILE")]
    pub data: PathBuf,
}

/// `termbars csv …`
#[derive(Parser, Debug)]
pub struct CsvArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Chart title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Percentage of the available width given to the longest bar
    #[arg(short, long, value_name = "1-100", allow_negative_numbers = true)]
    pub percwidth: Option<i64>,

    /// Append each entry's value after its bar
    #[arg(short = 'v', long)]
    pub show_values: bool,
}
