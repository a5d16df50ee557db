use std::process::ExitCode;

fn main() -> ExitCode {
    match termbars::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("termbars: {e}");
            ExitCode::FAILURE
        }
    }
}
