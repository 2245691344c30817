//! Function and method extraction.
//!
//! A definition always produces a [`Function`] appended to the model's
//! top-level list or to the active class's method list, whichever is in
//! scope. The walk then continues into the body so nested definitions and
//! imports are still collected.

use tree_sitter::Node;

use super::{decorators, helpers, signatures, values, ModuleExtractor, Scope};
use crate::model::{Function, StructuralModel};

pub(super) fn visit_function(
    ex: &ModuleExtractor,
    node: Node,
    model: &mut StructuralModel,
    scope: &mut Scope,
    depth: u32,
) {
    let function = extract_function(ex, node);
    match scope {
        Scope::Module => model.functions.push(function),
        Scope::Class(class) => class.methods.push(function),
    }

    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for child in body.children(&mut cursor) {
            ex.visit(child, model, scope, depth + 1);
        }
    }
}

fn extract_function(ex: &ModuleExtractor, node: Node) -> Function {
    let name = node
        .child_by_field_name("name")
        .map(|n| ex.node_text(&n))
        .unwrap_or_else(|| "Anonymous".to_string());

    let is_async = signatures::has_async_keyword(&node);

    let params = node
        .child_by_field_name("parameters")
        .map(|p| signatures::extract_parameters(ex, &p))
        .unwrap_or_default();

    let return_type = node
        .child_by_field_name("return_type")
        .map(|r| values::render_annotation(ex, r));

    Function {
        name,
        params,
        doc: helpers::docstring(ex, &node),
        return_type,
        decorators: decorators::extract_decorators(ex, &node),
        is_async,
    }
}

#[cfg(test)]
mod tests {
    use crate::extract_structure;

    #[test]
    fn multi_line_docstrings_are_kept_whole() {
        let source = "def run():\n    \"\"\"First line.\n\n    Details follow.\n    \"\"\"\n    pass\n";
        let model = extract_structure(source).unwrap();
        let doc = model.functions[0].doc.as_deref().unwrap();
        assert!(doc.starts_with("First line."));
        assert!(doc.contains("Details follow."));
    }

    #[test]
    fn functions_without_docstring_have_none() {
        let model = extract_structure("def run():\n    x = 1\n    return x\n").unwrap();
        assert!(model.functions[0].doc.is_none());
    }

    #[test]
    fn methods_inside_methods_attach_to_the_class() {
        let source = "class Runner:\n    def start(self):\n        def helper():\n            pass\n        return helper\n";
        let model = extract_structure(source).unwrap();
        let names: Vec<&str> = model.classes[0].methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["start", "helper"]);
    }
}
