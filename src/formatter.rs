//! Rendering of extracted entries for stdout

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::models::{Extraction, OutputFormat, Strategy};

/// JSON shape of one extraction
#[derive(Debug, Serialize)]
struct ExtractionReport<'a> {
    path: String,
    enum_name: &'a str,
    strategy: Strategy,
    line: usize,
    entries: &'a [String],
}

/// Render an extraction in the requested format.
///
/// - `Debug`: `["RGBA8", "RGB8"]`
/// - `Lines`: one entry per line (empty entries stay as empty lines)
/// - `Json`: minified unless `pretty` is set
pub fn render(
    extraction: &Extraction,
    path: &Path,
    format: OutputFormat,
    pretty: bool,
) -> Result<String> {
    match format {
        OutputFormat::Debug => Ok(format!("{:?}", extraction.entries)),
        OutputFormat::Lines => Ok(extraction.entries.join("\n")),
        OutputFormat::Json => {
            let report = ExtractionReport {
                path: path.display().to_string(),
                enum_name: &extraction.enum_name,
                strategy: extraction.strategy,
                line: extraction.line,
                entries: &extraction.entries,
            };

            let json = if pretty {
                serde_json::to_string_pretty(&report)
            } else {
                serde_json::to_string(&report)
            };
            json.context("Failed to serialize extraction")
        }
    }
}
