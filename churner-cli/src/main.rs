//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::error::Error;

fn main() {
    if let Err(err) = churner_cli::run() {
        eprintln!("churner: {err}");
        let mut cause = err.source();
        while let Some(source) = cause {
            eprintln!("  caused by: {source}");
            cause = source.source();
        }
        std::process::exit(1);
    }
}
