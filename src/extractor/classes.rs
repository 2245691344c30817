//! Class definition extraction.
//!
//! The class visitor walks its own body: direct assignments become class
//! constants, everything else is visited with the class as the active
//! scope. The completed class is appended to the model's top-level list
//! after its body, so nested classes precede their enclosing class.

use tree_sitter::Node;

use super::{assignments, helpers, ModuleExtractor, Scope};
use crate::model::{Class, StructuralModel};

pub(super) fn visit_class(ex: &ModuleExtractor, node: Node, model: &mut StructuralModel, depth: u32) {
    let name = node
        .child_by_field_name("name")
        .map(|n| ex.node_text(&n))
        .unwrap_or_else(|| "Anonymous".to_string());

    let bases = node
        .child_by_field_name("superclasses")
        .map(|s| base_list(ex, &s))
        .unwrap_or_default();

    let mut class = Class {
        name,
        bases,
        doc: helpers::docstring(ex, &node),
        class_vars: Vec::new(),
        methods: Vec::new(),
    };

    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for stmt in body.children(&mut cursor) {
            match direct_assignment(&stmt) {
                Some(assign) => {
                    assignments::extract_class_vars(ex, assign, &mut class.class_vars);
                }
                None => {
                    let mut scope = Scope::Class(&mut class);
                    ex.visit(stmt, model, &mut scope, depth + 1);
                }
            }
        }
    }

    model.classes.push(class);
}

/// Simple names and dotted paths only; keyword arguments (`metaclass=...`)
/// and subscripted bases are not tracked.
fn base_list(ex: &ModuleExtractor, superclasses: &Node) -> Vec<String> {
    let mut bases = Vec::new();
    let mut cursor = superclasses.walk();
    for child in superclasses.named_children(&mut cursor) {
        match child.kind() {
            "identifier" => bases.push(ex.node_text(&child)),
            "attribute" => bases.push(helpers::attribute_path(ex, &child)),
            _ => {}
        }
    }
    bases
}

/// An assignment that is a direct statement of the class body.
fn direct_assignment<'t>(stmt: &Node<'t>) -> Option<Node<'t>> {
    if stmt.kind() != "expression_statement" {
        return None;
    }
    let expr = stmt.named_child(0)?;
    if expr.kind() == "assignment" {
        Some(expr)
    } else {
        None
    }
}
