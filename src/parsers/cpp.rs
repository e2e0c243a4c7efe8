//! C++ enum lookup using Tree-sitter
//!
//! Finds scoped enum declarations (`enum class` / `enum struct`) by name:
//! - Underlying types (`enum class Format : uint32_t`)
//! - Enumerators with initializers (`GPU_ONLY = 0`)
//! - Comments between enumerators
//! - Declarations nested in namespaces
//!
//! Text inside comments and string literals never matches, unlike the
//! literal pattern used by the regex extractor.

use anyhow::{Context, Result};
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};

use crate::models::EnumDeclaration;

/// Find the first scoped enum named `enum_name` in `source`
pub fn find_scoped_enum(source: &str, enum_name: &str) -> Result<Option<EnumDeclaration>> {
    let mut parser = Parser::new();
    let language = tree_sitter_cpp::LANGUAGE;

    parser
        .set_language(&language.into())
        .context("Failed to set C++ language")?;

    let tree = parser
        .parse(source, None)
        .context("Failed to parse C++ source")?;

    let root_node = tree.root_node();

    let query_str = r#"
        (enum_specifier
            name: (type_identifier) @name
            body: (enumerator_list) @body) @enum
    "#;

    let query = Query::new(&language.into(), query_str)
        .context("Failed to create enum query")?;

    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, root_node, source.as_bytes());

    while let Some(match_) = matches.next() {
        let mut name = None;
        let mut body = None;
        let mut enum_node = None;

        for capture in match_.captures {
            let capture_name: &str = query.capture_names()[capture.index as usize];
            match capture_name {
                "name" => name = Some(capture.node),
                "body" => body = Some(capture.node),
                "enum" => enum_node = Some(capture.node),
                _ => {}
            }
        }

        let (Some(name), Some(body), Some(node)) = (name, body, enum_node) else {
            continue;
        };

        let found = name
            .utf8_text(source.as_bytes())
            .context("Enum name is not valid UTF-8")?;

        if found != enum_name || !is_scoped(&node) {
            continue;
        }

        log::debug!(
            "Found enum class {} at line {}",
            found,
            node.start_position().row + 1
        );

        return Ok(Some(EnumDeclaration {
            name: found.to_string(),
            line: node.start_position().row + 1, // Convert 0-indexed to 1-indexed
            enumerators: enumerator_names(source, &body)?,
        }));
    }

    Ok(None)
}

/// True for `enum class` and `enum struct`
fn is_scoped(node: &Node) -> bool {
    let mut cursor = node.walk();
    let scoped = node
        .children(&mut cursor)
        .any(|child| matches!(child.kind(), "class" | "struct"));
    scoped
}

/// Enumerator names in declaration order, initializers dropped
fn enumerator_names(source: &str, body: &Node) -> Result<Vec<String>> {
    let mut cursor = body.walk();
    let mut names = Vec::new();

    for child in body.named_children(&mut cursor) {
        if child.kind() != "enumerator" {
            continue; // comments, preprocessor noise
        }
        if let Some(name) = child.child_by_field_name("name") {
            let text = name
                .utf8_text(source.as_bytes())
                .context("Enumerator name is not valid UTF-8")?;
            names.push(text.to_string());
        }
    }

    Ok(names)
}
