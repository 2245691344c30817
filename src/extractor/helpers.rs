//! Shared utilities for the tree walk: docstring lookup, attribute paths,
//! and string delimiter handling.

use tree_sitter::Node;

use super::ModuleExtractor;

/// Docstring of a function or class: the first statement of its body, when
/// that statement is a bare string expression.
pub(super) fn docstring(ex: &ModuleExtractor, node: &Node) -> Option<String> {
    let body = node.child_by_field_name("body")?;
    body_docstring(ex, &body)
}

/// Same rule applied directly to a body node (or the module root).
pub(super) fn body_docstring(ex: &ModuleExtractor, body: &Node) -> Option<String> {
    let mut cursor = body.walk();
    let first = body
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment")?;
    if first.kind() != "expression_statement" {
        return None;
    }
    let expr = first.named_child(0)?;
    if expr.kind() != "string" {
        return None;
    }
    let text = strip_string_delimiters(&ex.node_text(&expr));
    Some(text.trim().to_string())
}

/// Render a name or attribute chain as a dotted path.
pub(super) fn attribute_path(ex: &ModuleExtractor, node: &Node) -> String {
    match node.kind() {
        "identifier" => ex.node_text(node),
        "attribute" => {
            let object = node.child_by_field_name("object");
            let attr = node.child_by_field_name("attribute");
            match (object, attr) {
                (Some(object), Some(attr)) => {
                    format!("{}.{}", attribute_path(ex, &object), ex.node_text(&attr))
                }
                _ => "unknown".to_string(),
            }
        }
        _ => "unknown".to_string(),
    }
}

/// Strip Python string delimiters: triple quotes first, then single-char
/// quotes, tolerating `r`/`b`/`f`/`u` prefix letters.
pub(crate) fn strip_string_delimiters(s: &str) -> String {
    let trimmed = s.trim_start_matches(|c: char| matches!(c, 'r' | 'R' | 'b' | 'B' | 'f' | 'F' | 'u' | 'U'));
    let delimiters = [("\"\"\"", 3usize), ("'''", 3), ("\"", 1), ("'", 1)];

    for (delimiter, strip_count) in &delimiters {
        if trimmed.starts_with(delimiter)
            && trimmed.ends_with(delimiter)
            && trimmed.len() >= strip_count * 2
        {
            return trimmed[*strip_count..trimmed.len() - strip_count].to_string();
        }
    }

    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_triple_and_single_quotes() {
        assert_eq!(strip_string_delimiters("\"\"\"doc\"\"\""), "doc");
        assert_eq!(strip_string_delimiters("'''doc'''"), "doc");
        assert_eq!(strip_string_delimiters("\"hi\""), "hi");
        assert_eq!(strip_string_delimiters("'hi'"), "hi");
    }

    #[test]
    fn tolerates_prefix_letters() {
        assert_eq!(strip_string_delimiters("r\"raw\""), "raw");
        assert_eq!(strip_string_delimiters("f'val'"), "val");
    }

    #[test]
    fn leaves_unquoted_text_alone() {
        assert_eq!(strip_string_delimiters("plain"), "plain");
    }
}
