//! Assignment extraction for module globals and class-level constants.

use tree_sitter::Node;

use super::{values, ModuleExtractor};
use crate::model::GlobalVar;

/// Record a module-level assignment. Later assignments to an already-seen
/// name are dropped, not overwritten.
pub(super) fn extract_globals(ex: &ModuleExtractor, node: Node, globals: &mut Vec<GlobalVar>) {
    let (targets, value_node) = assignment_targets(ex, node);
    let Some(value_node) = value_node else {
        return;
    };
    let value = values::render_value(ex, value_node);
    for name in targets {
        if !globals.iter().any(|var| var.name == name) {
            globals.push(GlobalVar { name, value: value.clone() });
        }
    }
}

/// Record a class-body assignment. Only scalar constant literals are kept;
/// anything else is silently omitted.
pub(super) fn extract_class_vars(ex: &ModuleExtractor, node: Node, class_vars: &mut Vec<GlobalVar>) {
    let (targets, value_node) = assignment_targets(ex, node);
    let Some(value_node) = value_node else {
        return;
    };
    let Some(value) = values::render_literal(ex, value_node) else {
        return;
    };
    for name in targets {
        class_vars.push(GlobalVar { name, value: value.clone() });
    }
}

/// Collect identifier targets across chained assignments (`a = b = 1`) in
/// source order and return the final right-hand side. Tuple and attribute
/// targets are not tracked.
fn assignment_targets<'t>(ex: &ModuleExtractor, node: Node<'t>) -> (Vec<String>, Option<Node<'t>>) {
    let mut names = Vec::new();
    let mut current = node;
    loop {
        if let Some(left) = current.child_by_field_name("left") {
            if left.kind() == "identifier" {
                names.push(ex.node_text(&left));
            }
        }
        match current.child_by_field_name("right") {
            Some(right) if right.kind() == "assignment" => current = right,
            right => return (names, right),
        }
    }
}
