//! Parameter list extraction.
//!
//! The walk keeps positional parameters in declaration order, then appends
//! the `*args` variadic and `**kwargs` keyword-variadic as trailing entries
//! whose names keep the marker prefix. Keyword-only parameters (anything
//! after the `*` slot) are not part of the positional walk and are dropped.

use tree_sitter::Node;

use super::{values, ModuleExtractor};
use crate::model::Parameter;

pub(super) fn extract_parameters(ex: &ModuleExtractor, parameters_node: &Node) -> Vec<Parameter> {
    let mut positional = Vec::new();
    let mut vararg: Option<Parameter> = None;
    let mut kwarg: Option<Parameter> = None;
    let mut keyword_only = false;

    let mut cursor = parameters_node.walk();
    for child in parameters_node.named_children(&mut cursor) {
        match child.kind() {
            "identifier" => {
                if !keyword_only {
                    positional.push(Parameter::untyped(ex.node_text(&child)));
                }
            }
            "typed_parameter" => {
                let Some(inner) = child.named_child(0) else { continue };
                let ty = child
                    .child_by_field_name("type")
                    .map(|t| values::render_annotation(ex, t));
                match inner.kind() {
                    "list_splat_pattern" => {
                        vararg = Some(Parameter { name: ex.node_text(&inner), ty });
                        keyword_only = true;
                    }
                    "dictionary_splat_pattern" => {
                        kwarg = Some(Parameter { name: ex.node_text(&inner), ty });
                    }
                    _ => {
                        if !keyword_only {
                            positional.push(Parameter { name: ex.node_text(&inner), ty });
                        }
                    }
                }
            }
            "default_parameter" => {
                if keyword_only {
                    continue;
                }
                if let Some(name) = child.child_by_field_name("name") {
                    if name.kind() == "identifier" {
                        positional.push(Parameter::untyped(ex.node_text(&name)));
                    }
                }
            }
            "typed_default_parameter" => {
                if keyword_only {
                    continue;
                }
                let name = child.child_by_field_name("name");
                let ty = child
                    .child_by_field_name("type")
                    .map(|t| values::render_annotation(ex, t));
                if let Some(name) = name {
                    positional.push(Parameter { name: ex.node_text(&name), ty });
                }
            }
            "list_splat_pattern" => {
                vararg = Some(Parameter::untyped(ex.node_text(&child)));
                keyword_only = true;
            }
            "dictionary_splat_pattern" => {
                kwarg = Some(Parameter::untyped(ex.node_text(&child)));
            }
            "keyword_separator" => keyword_only = true,
            _ => {}
        }
    }

    let mut params = positional;
    if let Some(vararg) = vararg {
        params.push(vararg);
    }
    if let Some(kwarg) = kwarg {
        params.push(kwarg);
    }
    params
}

/// Check whether a function definition carries the `async` keyword.
pub(super) fn has_async_keyword(node: &Node) -> bool {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "async" {
            return true;
        }
    }
    false
}
