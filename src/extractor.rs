//! Enum block extraction and entry normalization
//!
//! Locating the block sits behind [`BlockExtractor`] so the literal text
//! pattern and the Tree-sitter lookup are interchangeable. Both produce an
//! [`EnumBlock`] whose text goes through the same [`normalize_block`] step.

use anyhow::{Context, Result};
use regex::Regex;
use std::borrow::Cow;
use std::path::Path;

use crate::models::{EnumBlock, ExtractOptions, Extraction, Normalization, Strategy};
use crate::parsers;

/// Locates the interior of one enum declaration in source text
pub trait BlockExtractor {
    /// Strategy this extractor implements
    fn strategy(&self) -> Strategy;

    /// Return the first matching block, or `None` when the enum is absent
    fn extract_block(&self, source: &str) -> Result<Option<EnumBlock>>;
}

/// Literal pattern over raw text.
///
/// Matches `enum class NAME {` + newline, a body made only of word
/// characters, commas, spaces and newlines, then newline + `};`. The match
/// is not anchored to declaration context: the first occurrence wins even
/// inside a comment or string literal.
pub struct RegexExtractor {
    pattern: Regex,
}

impl RegexExtractor {
    pub fn new(enum_name: &str) -> Result<Self> {
        let pattern = format!(
            r"enum class {} \{{\n([ \w,\n]*)\n\}};",
            regex::escape(enum_name)
        );
        let pattern = Regex::new(&pattern)
            .with_context(|| format!("Invalid enum pattern for {}", enum_name))?;

        Ok(Self { pattern })
    }
}

impl BlockExtractor for RegexExtractor {
    fn strategy(&self) -> Strategy {
        Strategy::Regex
    }

    fn extract_block(&self, source: &str) -> Result<Option<EnumBlock>> {
        let Some(captures) = self.pattern.captures(source) else {
            return Ok(None);
        };

        // Group 1 always participates when the whole pattern matched
        let (Some(whole), Some(body)) = (captures.get(0), captures.get(1)) else {
            return Ok(None);
        };

        let line = line_of_offset(source, whole.start());
        log::debug!("Regex matched enum block at line {} ({} bytes)", line, body.len());

        Ok(Some(EnumBlock::new(body.as_str(), line)))
    }
}

/// Tree-sitter lookup of a real `enum class` declaration.
///
/// The block text is rebuilt from the enumerator names, one per line with
/// comma separators, so it normalizes exactly like a regex capture.
pub struct StructuralExtractor {
    enum_name: String,
}

impl StructuralExtractor {
    pub fn new(enum_name: &str) -> Self {
        Self {
            enum_name: enum_name.to_string(),
        }
    }
}

impl BlockExtractor for StructuralExtractor {
    fn strategy(&self) -> Strategy {
        Strategy::Structural
    }

    fn extract_block(&self, source: &str) -> Result<Option<EnumBlock>> {
        let decl = parsers::find_scoped_enum(source, &self.enum_name)?;

        Ok(decl.map(|decl| EnumBlock::new(decl.enumerators.join(",\n"), decl.line)))
    }
}

/// Extractor factory that selects the implementation for a strategy
pub struct ExtractorFactory;

impl ExtractorFactory {
    pub fn create(strategy: Strategy, enum_name: &str) -> Result<Box<dyn BlockExtractor>> {
        match strategy {
            Strategy::Regex => Ok(Box::new(RegexExtractor::new(enum_name)?)),
            Strategy::Structural => Ok(Box::new(StructuralExtractor::new(enum_name))),
        }
    }
}

/// Split a block into entries.
///
/// Every space is removed and the result is split on `\n`. Order is kept
/// and nothing is filtered: a trailing blank line yields a final `""`.
/// With [`Normalization::TrimSeparators`] one trailing comma is dropped
/// from each line.
pub fn normalize_block(block: &str, normalization: Normalization) -> Vec<String> {
    block
        .replace(' ', "")
        .split('\n')
        .map(|line| match normalization {
            Normalization::TrimSeparators => line.strip_suffix(',').unwrap_or(line).to_string(),
            Normalization::Raw => line.to_string(),
        })
        .collect()
}

/// Extract the configured enum from source text
pub fn extract_entries(source: &str, options: &ExtractOptions) -> Result<Extraction> {
    let source = fold_line_endings(source);
    let extractor = ExtractorFactory::create(options.strategy, &options.enum_name)?;

    let Some(block) = extractor.extract_block(&source)? else {
        anyhow::bail!(
            "No `enum class {}` block found ({} strategy)",
            options.enum_name,
            extractor.strategy()
        );
    };

    let entries = normalize_block(&block.text, options.normalization);
    log::info!(
        "Extracted {} entries from enum class {} at line {}",
        entries.len(),
        options.enum_name,
        block.line
    );

    Ok(Extraction {
        enum_name: options.enum_name.clone(),
        strategy: extractor.strategy(),
        line: block.line,
        entries,
    })
}

/// Read a header from disk and extract the configured enum
pub fn extract_file(path: &Path, options: &ExtractOptions) -> Result<Extraction> {
    log::debug!("Reading {}", path.display());

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    extract_entries(&source, options)
}

/// Fold CRLF to LF so Windows-edited headers match the `\n` pattern
fn fold_line_endings(source: &str) -> Cow<'_, str> {
    if source.contains("\r\n") {
        Cow::Owned(source.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(source)
    }
}

/// 1-indexed line number of a byte offset
fn line_of_offset(source: &str, offset: usize) -> usize {
    source.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regex_options() -> ExtractOptions {
        ExtractOptions::default()
    }

    fn structural_options() -> ExtractOptions {
        ExtractOptions {
            strategy: Strategy::Structural,
            ..Default::default()
        }
    }

    #[test]
    fn test_basic_block() {
        let source = "enum class TextureFormat {\nRGBA8,\nRGB8,\nDEPTH24\n};\n";

        let extraction = extract_entries(source, &regex_options()).unwrap();
        assert_eq!(extraction.entries, vec!["RGBA8", "RGB8", "DEPTH24"]);
        assert_eq!(extraction.line, 1);
        assert_eq!(extraction.strategy, Strategy::Regex);
    }

    #[test]
    fn test_raw_keeps_separators() {
        let source = "enum class TextureFormat {\nRGBA8,\nRGB8,\nDEPTH24\n};\n";
        let options = ExtractOptions {
            normalization: Normalization::Raw,
            ..Default::default()
        };

        let extraction = extract_entries(source, &options).unwrap();
        assert_eq!(extraction.entries, vec!["RGBA8,", "RGB8,", "DEPTH24"]);
    }

    #[test]
    fn test_trailing_comma_and_blank_line_yield_empty_entry() {
        let source = "enum class TextureFormat {\n  RGBA8,\n  RGB8,\n\n};";

        let extraction = extract_entries(source, &regex_options()).unwrap();
        assert_eq!(extraction.entries, vec!["RGBA8", "RGB8", ""]);
    }

    #[test]
    fn test_interior_spaces_are_stripped() {
        let source = "enum class TextureFormat {\n  NAME1 ,\n  NAME2\n};";

        let extraction = extract_entries(source, &regex_options()).unwrap();
        assert_eq!(extraction.entries, vec!["NAME1", "NAME2"]);
    }

    #[test]
    fn test_missing_enum_is_an_error() {
        let source = "enum class Color {\nRED\n};";

        let err = extract_entries(source, &regex_options()).unwrap_err();
        assert!(err.to_string().contains("enum class TextureFormat"));
    }

    #[test]
    fn test_underlying_type_does_not_match_literal_pattern() {
        let source = "enum class TextureFormat : uint32_t {\n    R8_UINT,\n    R8_SINT\n};";

        assert!(extract_entries(source, &regex_options()).is_err());

        let extraction = extract_entries(source, &structural_options()).unwrap();
        assert_eq!(extraction.entries, vec!["R8_UINT", "R8_SINT"]);
        assert_eq!(extraction.strategy, Strategy::Structural);
    }

    #[test]
    fn test_regex_matches_inside_comment() {
        let source = "// enum class TextureFormat {\n// OLD\n// };\n\
                      /*\nenum class TextureFormat {\nOLD,\nLEGACY\n};\n*/\n\
                      enum class TextureFormat {\nNEW\n};\n";

        let extraction = extract_entries(source, &regex_options()).unwrap();
        assert_eq!(extraction.entries, vec!["OLD", "LEGACY"]);
        assert_eq!(extraction.line, 5);

        let extraction = extract_entries(source, &structural_options()).unwrap();
        assert_eq!(extraction.entries, vec!["NEW"]);
        assert_eq!(extraction.line, 10);
    }

    #[test]
    fn test_crlf_line_endings() {
        let source = "enum class TextureFormat {\r\nRGBA8,\r\nRGB8\r\n};\r\n";

        let extraction = extract_entries(source, &regex_options()).unwrap();
        assert_eq!(extraction.entries, vec!["RGBA8", "RGB8"]);
    }

    #[test]
    fn test_custom_enum_name_is_escaped() {
        let source = "enum class FmtXKind {\nB\n};\nenum class Fmt.Kind {\nA\n};";
        let options = ExtractOptions {
            enum_name: "Fmt.Kind".to_string(),
            ..Default::default()
        };

        let extraction = extract_entries(source, &options).unwrap();
        assert_eq!(extraction.entries, vec!["A"]);
    }

    #[test]
    fn test_block_with_disallowed_characters_does_not_match() {
        let source = "enum class TextureFormat {\n    GPU_ONLY = 0,\n    CPU_ONLY\n};";

        assert!(extract_entries(source, &regex_options()).is_err());
    }

    #[test]
    fn test_normalize_block_keeps_order_and_duplicates() {
        let entries = normalize_block("C,\nA,\nC", Normalization::TrimSeparators);
        assert_eq!(entries, vec!["C", "A", "C"]);
    }

    #[test]
    fn test_normalize_only_trims_one_comma() {
        let entries = normalize_block("A,,\nB, C,", Normalization::TrimSeparators);
        assert_eq!(entries, vec!["A,", "B,C"]);
    }

    #[test]
    fn test_factory_selects_strategy() {
        let regex = ExtractorFactory::create(Strategy::Regex, "TextureFormat").unwrap();
        assert_eq!(regex.strategy(), Strategy::Regex);

        let structural = ExtractorFactory::create(Strategy::Structural, "TextureFormat").unwrap();
        assert_eq!(structural.strategy(), Strategy::Structural);
    }

    #[test]
    fn test_line_of_offset() {
        let source = "a\nb\nc";
        assert_eq!(line_of_offset(source, 0), 1);
        assert_eq!(line_of_offset(source, 2), 2);
        assert_eq!(line_of_offset(source, 4), 3);
    }
}
