//! Go syntax tree provider built on tree-sitter.

use std::path::Path;

use tree_sitter::{Language, Node, Parser, Tree};

use crate::error::{Result, ScanError};

/// File extension scanned in directory mode unless configured otherwise.
pub const GO_EXT: &str = "go";

#[must_use]
pub fn grammar() -> Language {
    tree_sitter_go::language()
}

/// Returns true if the path carries one of the given extensions.
#[must_use]
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}

/// Parses Go source into a tree.
///
/// tree-sitter recovers from syntax errors by inserting `ERROR` and missing
/// nodes; such a tree is rejected so a broken file yields no findings.
///
/// # Errors
/// Returns `ScanError::Language` if the grammar cannot be loaded and
/// `ScanError::Parse` if the source does not form a valid tree.
pub fn parse(path: &Path, source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser.set_language(grammar())?;

    let Some(tree) = parser.parse(source, None) else {
        return Err(ScanError::Parse {
            path: path.to_path_buf(),
            line: 1,
            column: 1,
            message: "parser produced no tree".to_string(),
        });
    };

    let root = tree.root_node();
    if root.has_error() {
        let bad = first_error(root).unwrap_or(root);
        let point = bad.start_position();
        let message = if bad.is_missing() {
            format!("missing {}", bad.kind())
        } else {
            "syntax error".to_string()
        };
        return Err(ScanError::Parse {
            path: path.to_path_buf(),
            line: point.row + 1,
            column: point.column + 1,
            message,
        });
    }

    Ok(tree)
}

/// Finds the first error or missing node in source order.
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

/// Canonical text of a node for reporting.
///
/// Whitespace runs that span a line break collapse to one space so a
/// multi-line expression fits on one report line; everything else is kept
/// as written.
#[must_use]
pub fn render(node: Node, source: &str) -> String {
    let text = node.utf8_text(source.as_bytes()).unwrap_or("").trim();
    if !text.contains('\n') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut pending = String::new();
    for c in text.chars() {
        if c.is_whitespace() {
            pending.push(c);
            continue;
        }
        flush_whitespace(&mut out, &mut pending);
        out.push(c);
    }
    flush_whitespace(&mut out, &mut pending);
    out
}

fn flush_whitespace(out: &mut String, pending: &mut String) {
    if pending.is_empty() {
        return;
    }
    if pending.contains('\n') {
        out.push(' ');
    } else {
        out.push_str(pending);
    }
    pending.clear();
}

/// Source text of a node, borrowed.
#[must_use]
pub fn text<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}
