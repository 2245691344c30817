//! Rendering of value and annotation expressions.
//!
//! Both entry points are total: shapes the renderer does not recognize
//! degrade to sentinels (the [`Value`] sentinel variants for values, the
//! unparsed source text or `Any` for annotations) instead of failing.

use tree_sitter::Node;

use super::{helpers, ModuleExtractor};
use crate::model::Value;

/// Sentinel for annotations that cannot be rendered at all.
pub(crate) const ANY_TYPE: &str = "Any";

/// Render a right-hand-side expression into a [`Value`].
pub(crate) fn render_value(ex: &ModuleExtractor, node: Node) -> Value {
    match node.kind() {
        "string" => Value::Str(helpers::strip_string_delimiters(&ex.node_text(&node))),
        "concatenated_string" => {
            let mut joined = String::new();
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                if child.kind() == "string" {
                    joined.push_str(&helpers::strip_string_delimiters(&ex.node_text(&child)));
                }
            }
            Value::Str(joined)
        }
        "integer" => parse_int(&ex.node_text(&node)),
        "float" => parse_float(&ex.node_text(&node)),
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "none" => Value::None,
        "list" => Value::List(render_elements(ex, &node)),
        "tuple" => Value::Tuple(render_elements(ex, &node)),
        "dictionary" => {
            let mut pairs = Vec::new();
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                if child.kind() != "pair" {
                    continue;
                }
                let key = child.child_by_field_name("key");
                let value = child.child_by_field_name("value");
                if let (Some(key), Some(value)) = (key, value) {
                    pairs.push((render_value(ex, key), render_value(ex, value)));
                }
            }
            Value::Dict(pairs)
        }
        "parenthesized_expression" => match node.named_child(0) {
            Some(inner) => render_value(ex, inner),
            None => Value::Complex,
        },
        "identifier" => Value::Ref(ex.node_text(&node)),
        "call" => Value::Computed,
        _ => Value::Complex,
    }
}

/// Render a node only when it is a scalar constant literal; used for
/// class-level assignments, which keep constants and drop everything else.
pub(crate) fn render_literal(ex: &ModuleExtractor, node: Node) -> Option<Value> {
    match render_value(ex, node) {
        v @ (Value::Str(_) | Value::Int(_) | Value::Float(_) | Value::Bool(_) | Value::None) => {
            Some(v)
        }
        _ => None,
    }
}

fn render_elements(ex: &ModuleExtractor, node: &Node) -> Vec<Value> {
    let mut items = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "comment" {
            continue;
        }
        items.push(render_value(ex, child));
    }
    items
}

fn parse_int(text: &str) -> Value {
    let cleaned = text.replace('_', "");
    let parsed = if let Some(hex) = cleaned.strip_prefix("0x").or_else(|| cleaned.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16)
    } else if let Some(oct) = cleaned.strip_prefix("0o").or_else(|| cleaned.strip_prefix("0O")) {
        i64::from_str_radix(oct, 8)
    } else if let Some(bin) = cleaned.strip_prefix("0b").or_else(|| cleaned.strip_prefix("0B")) {
        i64::from_str_radix(bin, 2)
    } else {
        cleaned.parse::<i64>()
    };
    match parsed {
        Ok(value) => Value::Int(value),
        Err(_) => Value::Complex,
    }
}

fn parse_float(text: &str) -> Value {
    match text.replace('_', "").parse::<f64>() {
        Ok(value) => Value::Float(value),
        Err(_) => Value::Complex,
    }
}

/// Render a type annotation expression into display text.
///
/// The known shapes are tried in sequence; anything else falls back to the
/// node's own source text and, failing that, the [`ANY_TYPE`] sentinel.
/// Subscripted generics appear as two different tree shapes depending on
/// position (`subscript` in expression context, `generic_type` in type
/// context); both render as `Base[Arg, ...]`.
pub(crate) fn render_annotation(ex: &ModuleExtractor, node: Node) -> String {
    match node.kind() {
        "type" => match node.named_child(0) {
            Some(inner) => render_annotation(ex, inner),
            None => ANY_TYPE.to_string(),
        },
        "identifier" => ex.node_text(&node),
        "attribute" => helpers::attribute_path(ex, &node),
        "subscript" => {
            let base = node
                .child_by_field_name("value")
                .map(|value| render_annotation(ex, value))
                .unwrap_or_else(|| ANY_TYPE.to_string());
            let mut cursor = node.walk();
            let args: Vec<String> = node
                .children_by_field_name("subscript", &mut cursor)
                .map(|arg| render_annotation(ex, arg))
                .collect();
            format!("{}[{}]", base, args.join(", "))
        }
        "generic_type" => {
            let mut base = ANY_TYPE.to_string();
            let mut args = Vec::new();
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                if child.kind() == "type_parameter" {
                    let mut inner = child.walk();
                    for arg in child.named_children(&mut inner) {
                        args.push(render_annotation(ex, arg));
                    }
                } else {
                    base = render_annotation(ex, child);
                }
            }
            format!("{}[{}]", base, args.join(", "))
        }
        "tuple" => {
            let mut cursor = node.walk();
            let parts: Vec<String> = node
                .named_children(&mut cursor)
                .map(|child| render_annotation(ex, child))
                .collect();
            parts.join(", ")
        }
        "member_type" => {
            let mut cursor = node.walk();
            let parts: Vec<String> = node
                .named_children(&mut cursor)
                .map(|child| render_annotation(ex, child))
                .collect();
            parts.join(".")
        }
        "string" => helpers::strip_string_delimiters(&ex.node_text(&node)),
        "none" => "None".to_string(),
        "integer" | "float" | "true" | "false" => ex.node_text(&node),
        _ => {
            let text = ex.node_text(&node);
            let text = text.trim();
            if node.is_error() || node.is_missing() || text.is_empty() {
                ANY_TYPE.to_string()
            } else {
                text.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::extract_structure;
    use crate::model::Value;

    fn global_value(source: &str) -> Value {
        extract_structure(source).expect("source should parse").globals[0]
            .value
            .clone()
    }

    #[test]
    fn scalar_literals_pass_through() {
        assert_eq!(global_value("x = 'hi'\n"), Value::Str("hi".into()));
        assert_eq!(global_value("x = 0x1F\n"), Value::Int(31));
        assert_eq!(global_value("x = 1_000\n"), Value::Int(1000));
        assert_eq!(global_value("x = 2.5\n"), Value::Float(2.5));
        assert_eq!(global_value("x = True\n"), Value::Bool(true));
        assert_eq!(global_value("x = None\n"), Value::None);
    }

    #[test]
    fn containers_recurse() {
        assert_eq!(
            global_value("x = [1, name, fetch()]\n"),
            Value::List(vec![Value::Int(1), Value::Ref("name".into()), Value::Computed])
        );
        assert_eq!(
            global_value("x = (1, 2)\n"),
            Value::Tuple(vec![Value::Int(1), Value::Int(2)])
        );
        assert_eq!(
            global_value("x = {\"k\": [1]}\n"),
            Value::Dict(vec![(Value::Str("k".into()), Value::List(vec![Value::Int(1)]))])
        );
    }

    #[test]
    fn adjacent_string_literals_join() {
        assert_eq!(global_value("x = 'a' 'b'\n"), Value::Str("ab".into()));
    }

    fn param_type(source: &str) -> String {
        extract_structure(source).expect("source should parse").functions[0].params[0]
            .ty
            .clone()
            .expect("parameter should be annotated")
    }

    #[test]
    fn annotations_render_generics_and_paths() {
        assert_eq!(param_type("def f(a: int): pass\n"), "int");
        assert_eq!(param_type("def f(a: List[int]): pass\n"), "List[int]");
        assert_eq!(param_type("def f(a: Dict[str, int]): pass\n"), "Dict[str, int]");
        assert_eq!(
            param_type("def f(a: Optional[List[str]]): pass\n"),
            "Optional[List[str]]"
        );
        assert_eq!(param_type("def f(a: os.PathLike): pass\n"), "os.PathLike");
        assert_eq!(param_type("def f(a: \"User\"): pass\n"), "User");
    }

    #[test]
    fn unrecognized_annotations_fall_back_to_source_text() {
        assert_eq!(param_type("def f(a: int | None): pass\n"), "int | None");
    }

    #[test]
    fn return_annotations_use_the_same_renderer() {
        let model = extract_structure("def f() -> Dict[str, int]:\n    pass\n").unwrap();
        assert_eq!(model.functions[0].return_type.as_deref(), Some("Dict[str, int]"));
    }
}
