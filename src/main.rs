//! cliparam - demo tool for declarative command-line parameters

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = cliparam::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
