use std::process::ExitCode;

use cashbook_core::cli::{self, output};

fn main() -> ExitCode {
    cashbook_core::init();
    match cli::run(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(err);
            ExitCode::FAILURE
        }
    }
}
