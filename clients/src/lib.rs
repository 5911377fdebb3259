//! Command-line front end for the `braille` crate.
//!
//! The `braille-translate` binary is a thin wrapper over [`cli::run`]; the
//! argument model, output rendering, and logging bootstrap live here so they
//! can be tested without spawning a process.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod cli;
pub mod logging;
pub mod output;

pub use cli::{run, Args, SourceArg};
pub use output::{render, OutputFormat};
