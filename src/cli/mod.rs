mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;
use tracing_subscriber::EnvFilter;

use crate::core::error::GraphError;

/// stderr logger; `RUST_LOG` wins unless `--debug` raises it.
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("termbars=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // fails only when a global subscriber is already installed; keep that one
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .ok();
}

pub fn run() -> Result<(), GraphError> {
    let cli = parse::Cli::parse();
    init_logging(cli.output.debug);
    match cli.cmd {
        parse::Command::Doc(a) => handlers::doc(&a, cli.output),
        parse::Command::Csv(a) => handlers::csv(a, cli.output),
        parse::Command::Colors => handlers::colors(),
        parse::Command::Examples => handlers::examples(cli.output),
    }
}
