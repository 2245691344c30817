//! Python language setup for the tree-sitter parser.
//!
//! All tree-sitter configuration lives here so the rest of the crate only
//! ever sees a parsed tree or an [`ExtractError`].

use tree_sitter::{Node, Parser, Tree};

use crate::error::ExtractError;

/// Tree-sitter grammar for the one language this crate targets.
pub fn python() -> tree_sitter::Language {
    tree_sitter_python::LANGUAGE.into()
}

/// Parse one source unit into a syntax tree.
///
/// Tree-sitter is error-tolerant, so "cannot be parsed" means the produced
/// tree contains ERROR or MISSING nodes; a unit with any syntax error is
/// rejected as a whole, matching the behavior of a strict parser.
pub fn parse_module(source: &str) -> Result<Tree, ExtractError> {
    let mut parser = Parser::new();
    parser
        .set_language(&python())
        .map_err(|e| ExtractError::Language(e.to_string()))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ExtractError::Parse("parser produced no syntax tree".to_string()))?;

    let root = tree.root_node();
    if root.has_error() {
        return Err(ExtractError::Parse(describe_error(root)));
    }

    Ok(tree)
}

fn describe_error(root: Node) -> String {
    match first_error(root) {
        Some(node) => {
            let pos = node.start_position();
            format!("syntax error at line {}, column {}", pos.row + 1, pos.column)
        }
        None => "syntax error".to_string(),
    }
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error(child) {
            return Some(found);
        }
    }
    None
}
