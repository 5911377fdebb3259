//! Rendering a translation for stdout.

use anyhow::{Context, Result};
use braille::Translation;
use clap::ValueEnum;

/// Output format for `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The translated text only.
    #[default]
    Text,
    /// A JSON object with source, target, input, and output.
    Json,
}

/// Renders `translation` in `format`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(translation: &Translation, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(translation.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(translation).context("failed to serialize translation")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use braille::translate;

    #[test]
    fn test_render_text() {
        let t = translate("b").unwrap();
        assert_eq!(render(&t, OutputFormat::Text).unwrap(), "O.O...");
    }

    #[test]
    fn test_render_json() {
        let t = translate("O.O...").unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render(&t, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["source"], "braille");
        assert_eq!(json["target"], "english");
        assert_eq!(json["input"], "O.O...");
        assert_eq!(json["output"], "b");
    }
}
