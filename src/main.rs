//! shapes - creational pattern walkthrough

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = shape_patterns::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
