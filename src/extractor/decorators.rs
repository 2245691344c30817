//! Decorator extraction and rendering.
//!
//! Decorators are stored as rendered strings on the function or class. The
//! renderer is total: argument shapes it does not support collapse to `...`
//! and a decorator expression of unknown shape becomes the
//! `unknown_decorator` sentinel.

use tree_sitter::Node;

use super::{helpers, values, ModuleExtractor};

const ELIDED: &str = "...";
const UNKNOWN: &str = "unknown_decorator";

/// Collect the decorators of a function or class definition. They live on
/// the wrapping `decorated_definition` node, one `decorator` child each.
pub(super) fn extract_decorators(ex: &ModuleExtractor, node: &Node) -> Vec<String> {
    let Some(parent) = node.parent() else {
        return Vec::new();
    };
    if parent.kind() != "decorated_definition" {
        return Vec::new();
    }

    let mut decorators = Vec::new();
    let mut cursor = parent.walk();
    for child in parent.children(&mut cursor) {
        if child.kind() == "decorator" {
            if let Some(expr) = child.named_child(0) {
                decorators.push(render_decorator(ex, expr));
            }
        }
    }
    decorators
}

/// Render a decorator expression into display text.
pub(crate) fn render_decorator(ex: &ModuleExtractor, node: Node) -> String {
    match node.kind() {
        "identifier" => ex.node_text(&node),
        "attribute" => helpers::attribute_path(ex, &node),
        "call" => {
            let callee = node
                .child_by_field_name("function")
                .map(|f| helpers::attribute_path(ex, &f))
                .unwrap_or_else(|| "unknown".to_string());
            let mut args = Vec::new();
            if let Some(arg_list) = node.child_by_field_name("arguments") {
                let mut cursor = arg_list.walk();
                for arg in arg_list.named_children(&mut cursor) {
                    match arg.kind() {
                        "comment" => {}
                        "keyword_argument" => {
                            let key = arg
                                .child_by_field_name("name")
                                .map(|n| ex.node_text(&n))
                                .unwrap_or_default();
                            let value = arg
                                .child_by_field_name("value")
                                .map(|v| render_argument(ex, v, true))
                                .unwrap_or_else(|| ELIDED.to_string());
                            args.push(format!("{}={}", key, value));
                        }
                        _ => args.push(render_argument(ex, arg, false)),
                    }
                }
            }
            format!("{}({})", callee, args.join(", "))
        }
        _ => UNKNOWN.to_string(),
    }
}

/// Per-kind argument rendering. Keyword values additionally render nested
/// calls as `callee(...)` instead of eliding them entirely.
fn render_argument(ex: &ModuleExtractor, node: Node, keyword: bool) -> String {
    match node.kind() {
        "string" | "integer" | "float" | "true" | "false" | "none" => {
            values::render_value(ex, node).repr()
        }
        "identifier" => ex.node_text(&node),
        "attribute" => helpers::attribute_path(ex, &node),
        "list" => {
            let mut items = Vec::new();
            let mut cursor = node.walk();
            for element in node.named_children(&mut cursor) {
                if element.kind() == "comment" {
                    continue;
                }
                match values::render_literal(ex, element) {
                    Some(value) => items.push(value.repr()),
                    None => items.push(ELIDED.to_string()),
                }
            }
            format!("[{}]", items.join(", "))
        }
        "call" if keyword => {
            let callee = node
                .child_by_field_name("function")
                .map(|f| helpers::attribute_path(ex, &f))
                .unwrap_or_else(|| "unknown".to_string());
            format!("{}(...)", callee)
        }
        _ => ELIDED.to_string(),
    }
}
