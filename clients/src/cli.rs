//! Argument model for `braille-translate`.

use anyhow::{Context, Result};
use braille::{translate_with, InputKind, TranslateOptions};
use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::filter::LevelFilter;

use crate::logging;
use crate::output::{render, OutputFormat};

/// Usage line printed when no text is given.
pub const USAGE: &str = "Usage: braille-translate [OPTIONS] <TEXT>...";

/// How to decide which direction to translate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SourceArg {
    /// Classify the input: only `O`, `.` and spaces means Braille.
    #[default]
    Auto,
    /// Treat the input as English and encode it.
    English,
    /// Treat the input as Braille and decode it.
    Braille,
}

impl SourceArg {
    /// Converts the flag into library options.
    #[must_use]
    pub const fn options(self) -> TranslateOptions {
        match self {
            Self::Auto => TranslateOptions { source: None },
            Self::English => TranslateOptions::from_source(InputKind::English),
            Self::Braille => TranslateOptions::from_source(InputKind::Braille),
        }
    }
}

/// Translate between English text and O/. Braille cells.
#[derive(Debug, Parser)]
#[command(
    name = "braille-translate",
    version,
    about = "Translate between English text and six-dot Braille cells written as O and ."
)]
pub struct Args {
    /// Text to translate. Multiple words are joined with single spaces.
    ///
    /// Everything from the first word on is text, including words that look
    /// like flags, so options must come before the text.
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub text: Vec<String>,

    /// Input representation (default: detect from the text).
    #[arg(long, value_enum, default_value_t = SourceArg::Auto)]
    pub from: SourceArg,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// The words to translate, joined with single spaces.
    #[must_use]
    pub fn joined_text(&self) -> String {
        self.text.join(" ")
    }

    /// Log level selected by `-v` / `-q`.
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        logging::level_for(self.verbose, self.quiet)
    }
}

/// Translates the arguments' text and renders it in the requested format.
///
/// # Errors
///
/// Returns an error if the text cannot be translated (an unsupported English
/// character, or Braille that is not a whole number of cells) or if JSON
/// rendering fails.
pub fn run(args: &Args) -> Result<String> {
    let text = args.joined_text();
    let translation =
        translate_with(&text, &args.from.options()).context("could not translate input")?;
    render(&translation, args.format)
}
