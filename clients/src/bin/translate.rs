//! `braille-translate` — Translates between English and O/. Braille cells.
//!
//! The direction is detected from the input: text made only of `O`, `.` and
//! spaces is decoded as Braille, anything else is encoded as English.
//!
//! **Usage:**
//! ```text
//! braille-translate [--from auto|english|braille] [--format text|json] [-v|-q] <TEXT>...
//! ```
//!
//! Exits with status 2 when no text is given and non-zero when the text
//! cannot be translated.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::Result;
use braille_clients::cli::USAGE;
use braille_clients::{logging, run, Args};
use clap::Parser;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_level());

    if args.text.is_empty() {
        println!("Error: Please provide a string to translate.");
        println!("{USAGE}");
        process::exit(2);
    }

    let rendered = run(&args)?;
    println!("{rendered}");
    Ok(())
}
