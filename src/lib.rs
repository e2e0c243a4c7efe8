//! enumgrab: print the entries of a C++ `enum class` declaration
//!
//! Reads a header, finds the first `enum class TextureFormat { ... };`
//! block and returns its entries in declaration order.
//!
//! # Architecture
//!
//! - **Extractor**: locates the block (literal regex or Tree-sitter lookup)
//!   and normalizes it into entries
//! - **Formatter**: renders entries as a debug listing, lines or JSON
//! - **CLI**: argument-count check, config resolution, stream wiring
//!
//! # Example Usage
//!
//! ```no_run
//! use enumgrab::{extract_file, ExtractOptions};
//! use std::path::Path;
//!
//! let extraction = extract_file(Path::new("enums.hpp"), &ExtractOptions::default()).unwrap();
//! println!("{:?}", extraction.entries);
//! ```

pub mod cli;
pub mod config;
pub mod extractor;
pub mod formatter;
pub mod models;
pub mod output;
pub mod parsers;

// Re-export commonly used types
pub use extractor::{extract_entries, extract_file, normalize_block, BlockExtractor, ExtractorFactory};
pub use models::{EnumBlock, ExtractOptions, Extraction, Normalization, OutputFormat, Strategy};
