//! Core data models for enumgrab
//!
//! These types describe one extraction run: what to look for, how to
//! normalize what was found, and the resulting entry list.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Enum name looked up when nothing else is configured
pub const DEFAULT_ENUM_NAME: &str = "TextureFormat";

/// How the enumeration block is located in the source text
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Strategy {
    /// Literal text pattern. Matches the first occurrence anywhere,
    /// including inside comments and string literals.
    #[default]
    Regex,
    /// Tree-sitter C++ parse. Only real `enum class` declarations match.
    Structural,
}

/// How entries are printed on stdout
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Debug listing of the entry vector: `["A", "B"]`
    #[default]
    Debug,
    /// One entry per line
    Lines,
    /// JSON report with declaration metadata
    Json,
}

/// Post-processing applied to each line of the block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Normalization {
    /// Strip spaces, split on newline, drop one trailing `,` per line
    #[default]
    TrimSeparators,
    /// Strip spaces, split on newline, keep everything else
    Raw,
}

/// The captured interior of an enum declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumBlock {
    /// Text between the opening brace line and the closing `};` line
    pub text: String,
    /// Line of the `enum class` keyword (1-indexed)
    pub line: usize,
}

impl EnumBlock {
    pub fn new(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            line,
        }
    }
}

/// Resolved settings for one extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub enum_name: String,
    pub strategy: Strategy,
    pub format: OutputFormat,
    pub normalization: Normalization,
    /// Pretty-print JSON output (only with `OutputFormat::Json`)
    pub pretty: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            enum_name: DEFAULT_ENUM_NAME.to_string(),
            strategy: Strategy::default(),
            format: OutputFormat::default(),
            normalization: Normalization::default(),
            pretty: false,
        }
    }
}

/// Result of a successful extraction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Extraction {
    pub enum_name: String,
    pub strategy: Strategy,
    /// Line of the declaration (1-indexed)
    pub line: usize,
    /// Entries in declaration order. Empty strings from trailing blank
    /// lines are kept.
    pub entries: Vec<String>,
}

/// A scoped enum declaration found by the structural parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDeclaration {
    pub name: String,
    /// Line of the declaration (1-indexed)
    pub line: usize,
    /// Enumerator names without initializers
    pub enumerators: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("regex".parse::<Strategy>().unwrap(), Strategy::Regex);
        assert_eq!("Structural".parse::<Strategy>().unwrap(), Strategy::Structural);
        assert!("ast".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Debug.to_string(), "debug");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!("LINES".parse::<OutputFormat>().unwrap(), OutputFormat::Lines);
    }

    #[test]
    fn test_default_options() {
        let options = ExtractOptions::default();
        assert_eq!(options.enum_name, "TextureFormat");
        assert_eq!(options.strategy, Strategy::Regex);
        assert_eq!(options.format, OutputFormat::Debug);
        assert_eq!(options.normalization, Normalization::TrimSeparators);
        assert!(!options.pretty);
    }
}
