//! The structural model built from one unit of Python source.
//!
//! Ownership is strictly tree-shaped: the model owns its lists, the lists
//! own their records, and nothing points back up. A model is built in one
//! pass and dropped after serialization; no state survives between calls.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Reserved name of the Python constructor method.
pub const CONSTRUCTOR_NAME: &str = "__init__";

/// Rendered decorator text that marks a method as static.
pub const STATIC_DECORATOR: &str = "staticmethod";

/// Root record owned by one extraction call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructuralModel {
    /// Path of the source file, for batch output; absent for anonymous text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_doc: Option<String>,
    pub imports: Vec<Import>,
    pub globals: Vec<GlobalVar>,
    pub functions: Vec<Function>,
    pub classes: Vec<Class>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    /// `import module [as alias]`
    Plain,
    /// `from module import name [as alias]`
    From,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Import {
    pub kind: ImportKind,
    /// Present only for `from` imports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// A named constant captured at module level or in a class body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalVar {
    pub name: String,
    pub value: Value,
}

/// Best-effort rendering of a right-hand-side expression.
///
/// Shapes the extractor understands pass through structurally; everything
/// else degrades to one of the sentinel variants rather than failing.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    None,
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Dict(Vec<(Value, Value)>),
    /// A bare name reference, rendered as `<name>`.
    Ref(String),
    /// A call expression whose result is only known at runtime.
    Computed,
    /// Any other shape.
    Complex,
}

impl Value {
    /// Python-style literal rendering, used by the IDL adapter.
    ///
    /// Reference and sentinel markers render quoted, like the string values
    /// they stand in for; the adapter strips the quotes at statement level.
    pub fn repr(&self) -> String {
        match self {
            Value::Str(s) => quote_single(s),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 {
                    format!("{f:.1}")
                } else {
                    f.to_string()
                }
            }
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            Value::None => "None".to_string(),
            Value::List(items) => {
                let rendered: Vec<String> = items.iter().map(Value::repr).collect();
                format!("[{}]", rendered.join(", "))
            }
            Value::Tuple(items) => {
                let rendered: Vec<String> = items.iter().map(Value::repr).collect();
                if rendered.len() == 1 {
                    format!("({},)", rendered[0])
                } else {
                    format!("({})", rendered.join(", "))
                }
            }
            Value::Dict(pairs) => {
                let rendered: Vec<String> = pairs
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k.repr(), v.repr()))
                    .collect();
                format!("{{{}}}", rendered.join(", "))
            }
            Value::Ref(name) => format!("'<{}>'", name),
            Value::Computed => "'<function call>'".to_string(),
            Value::Complex => "'<complex value>'".to_string(),
        }
    }

    /// String form used for JSON dictionary keys.
    fn json_key(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Bool(true) => "true".to_string(),
            Value::Bool(false) => "false".to_string(),
            Value::None => "null".to_string(),
            Value::Ref(name) => format!("<{}>", name),
            Value::Computed => "<function call>".to_string(),
            Value::Complex => "<complex value>".to_string(),
            other => other.repr(),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Str(s) => serializer.serialize_str(s),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::None => serializer.serialize_unit(),
            Value::List(items) | Value::Tuple(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Dict(pairs) => {
                let mut map = serializer.serialize_map(Some(pairs.len()))?;
                for (key, value) in pairs {
                    map.serialize_entry(&key.json_key(), value)?;
                }
                map.end()
            }
            Value::Ref(name) => serializer.serialize_str(&format!("<{}>", name)),
            Value::Computed => serializer.serialize_str("<function call>"),
            Value::Complex => serializer.serialize_str("<complex value>"),
        }
    }
}

fn quote_single(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    /// Variadic parameters keep their `*`/`**` marker prefix.
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
}

impl Parameter {
    pub fn untyped(name: String) -> Self {
        Self { name, ty: None }
    }
}

/// A function definition, owned by the model (top-level) or by exactly one
/// class (method).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Function {
    pub name: String,
    pub params: Vec<Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Absent means the signature renders with the untyped `void` marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    pub decorators: Vec<String>,
    pub is_async: bool,
}

impl Function {
    pub fn is_static(&self) -> bool {
        self.decorators.iter().any(|d| d == STATIC_DECORATOR)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Class {
    pub name: String,
    /// Simple names or dotted paths.
    pub bases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Constant literals only; non-literal class-level assignments are
    /// silently omitted.
    pub class_vars: Vec<GlobalVar>,
    pub methods: Vec<Function>,
}

impl Class {
    /// The constructor method, if the class defines one. Rendered separately
    /// by the IDL adapter, never among ordinary methods.
    pub fn constructor(&self) -> Option<&Function> {
        self.methods.iter().find(|m| m.name == CONSTRUCTOR_NAME)
    }

    /// All methods except the constructor.
    pub fn regular_methods(&self) -> impl Iterator<Item = &Function> {
        self.methods.iter().filter(|m| m.name != CONSTRUCTOR_NAME)
    }
}
