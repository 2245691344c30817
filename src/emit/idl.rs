//! The IDL adapter: a compact, documentation-oriented rendering of the
//! structural model. The output reads like an interface-definition
//! language but is not a compilable grammar.

use super::route;
use crate::model::{Class, Function, GlobalVar, Import, ImportKind, Parameter, StructuralModel, Value};

/// Explanatory preamble prepended to IDL output on request.
pub const IDL_PREAMBLE: &str = "System Prompt:
You are an expert Python programmer analyzing files that pair IDL
(Interface Definition Language) declarations with Python implementations.
Treat the IDL declarations (keywords like \"function\", \"in\", \"returns\"
and \"const\") as interfaces carrying type information, and focus the
analysis on the Python code itself: overall purpose, module architecture,
key functions, and notable design decisions. Emphasize practical insights
that help developers understand and work with the code.

";

/// Rendered return type of an unannotated function.
const VOID: &str = "void";

pub fn to_idl(model: &StructuralModel) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(doc) = &model.module_doc {
        for line in doc.lines() {
            lines.push(format!("// {}", line.trim()));
        }
        lines.push(String::new());
    }

    for import in &model.imports {
        lines.push(import_line(import));
    }
    if !model.imports.is_empty() {
        lines.push(String::new());
    }

    for var in &model.globals {
        lines.push(const_line(var, ""));
    }
    if !model.globals.is_empty() {
        lines.push(String::new());
    }

    for function in &model.functions {
        push_doc_and_decorators(&mut lines, function, "");
        let params = render_params(function.params.iter());
        let returns = function.return_type.as_deref().unwrap_or(VOID);
        lines.push(format!(
            "function {}({}) returns {};",
            function.name,
            params.join(", "),
            returns
        ));
        lines.push(String::new());
    }

    for class in &model.classes {
        push_class(&mut lines, class);
    }

    lines.join("\n")
}

fn import_line(import: &Import) -> String {
    match import.kind {
        ImportKind::Plain => match &import.alias {
            Some(alias) => format!("import {} as {};", import.name, alias),
            None => format!("import {};", import.name),
        },
        ImportKind::From => {
            let mut name = import.name.clone();
            if let Some(alias) = &import.alias {
                name = format!("{} as {}", name, alias);
            }
            match &import.module {
                Some(module) if module.ends_with('.') => format!("import {}{};", module, name),
                Some(module) => format!("import {}.{};", module, name),
                None => format!("import {};", name),
            }
        }
    }
}

fn const_line(var: &GlobalVar, indent: &str) -> String {
    format!("{}const {} = {};", indent, var.name, statement_value(&var.value))
}

/// Statement-level value rendering: the none value reads `undefined`, and
/// reference/sentinel markers shed their wrapping quotes so they read as
/// bare identifiers rather than strings.
fn statement_value(value: &Value) -> String {
    if matches!(value, Value::None) {
        return "undefined".to_string();
    }
    let repr = value.repr();
    if repr.starts_with("'<") && repr.ends_with(">'") {
        repr[1..repr.len() - 1].to_string()
    } else {
        repr
    }
}

fn push_doc_and_decorators(lines: &mut Vec<String>, function: &Function, indent: &str) {
    if let Some(doc) = &function.doc {
        for line in doc.lines() {
            lines.push(format!("{}// {}", indent, line.trim()));
        }
    }
    for decorator in &function.decorators {
        lines.push(format!("{}@{}", indent, route::normalize(decorator)));
    }
}

fn render_params<'a>(params: impl Iterator<Item = &'a Parameter>) -> Vec<String> {
    params
        .map(|param| match &param.ty {
            Some(ty) => format!("in {} {}", ty, param.name),
            None => format!("in {}", param.name),
        })
        .collect()
}

fn push_class(lines: &mut Vec<String>, class: &Class) {
    let extends = if class.bases.is_empty() {
        String::new()
    } else {
        format!(" extends {}", class.bases.join(", "))
    };
    lines.push(format!("interface {}{} {{", class.name, extends));

    if let Some(doc) = &class.doc {
        for line in doc.lines() {
            lines.push(format!("  // {}", line.trim()));
        }
        lines.push(String::new());
    }

    for var in &class.class_vars {
        lines.push(const_line(var, "  "));
    }
    if !class.class_vars.is_empty() {
        lines.push(String::new());
    }

    if let Some(ctor) = class.constructor() {
        // The leading self parameter is implicit in the constructor form.
        let params: Vec<String> = ctor
            .params
            .iter()
            .skip(1)
            .map(|param| match &param.ty {
                Some(ty) => format!("{} {}", ty, param.name),
                None => param.name.clone(),
            })
            .collect();
        let mut line = format!("  constructor({});", params.join(", "));
        if let Some(doc) = &ctor.doc {
            if let Some(first) = doc.lines().next() {
                line.push_str("  // ");
                line.push_str(first);
            }
        }
        lines.push(line);
        lines.push(String::new());
    }

    for method in class.regular_methods() {
        push_doc_and_decorators(lines, method, "  ");

        let is_static = method.is_static();
        let mut params: &[Parameter] = &method.params;
        if !is_static {
            if let Some(first) = params.first() {
                if first.name == "self" {
                    params = &params[1..];
                }
            }
        }
        let rendered = render_params(params.iter());
        let returns = method.return_type.as_deref().unwrap_or(VOID);
        if is_static {
            lines.push(format!(
                "  static {}({}) returns {};",
                method.name,
                rendered.join(", "),
                returns
            ));
        } else {
            lines.push(format!(
                "  {}({}) returns {};",
                method.name,
                rendered.join(", "),
                returns
            ));
        }
        lines.push(String::new());
    }

    lines.push("};".to_string());
    lines.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::to_idl;
    use crate::emit::Format;
    use crate::transform;

    fn idl(source: &str) -> String {
        transform(source, Format::Idl).expect("source should transform")
    }

    #[test]
    fn imports_render_as_statements() {
        let out = idl("import os\nimport numpy as np\nfrom pathlib import Path\n");
        assert!(out.contains("import os;"));
        assert!(out.contains("import numpy as np;"));
        assert!(out.contains("import pathlib.Path;"));
    }

    #[test]
    fn module_docstring_becomes_a_comment_block() {
        let out = idl("\"\"\"Small helper module.\"\"\"\n");
        assert!(out.starts_with("// Small helper module."));
    }

    #[test]
    fn function_with_docstring_and_types() {
        let out = idl("def greet(name: str) -> str:\n    \"\"\"Greets.\"\"\"\n    return name\n");
        assert!(out.contains("// Greets."));
        assert!(out.contains("function greet(in str name) returns str;"));
    }

    #[test]
    fn untyped_functions_return_void() {
        let out = idl("def run(task):\n    pass\n");
        assert!(out.contains("function run(in task) returns void;"));
    }

    #[test]
    fn class_with_base_and_constructor() {
        let out = idl("class Greeter(Base):\n    def __init__(self, name):\n        self.name = name\n");
        assert!(out.contains("interface Greeter extends Base {"));
        assert!(out.contains("  constructor(name);"));
        assert!(!out.contains("__init__"));
        assert!(out.contains("};"));
    }

    #[test]
    fn constructor_docstring_is_appended_inline() {
        let out = idl(
            "class Job:\n    def __init__(self, name):\n        \"\"\"Build a job.\"\"\"\n        self.name = name\n",
        );
        assert!(out.contains("  constructor(name);  // Build a job."));
    }

    #[test]
    fn static_methods_keep_their_parameters() {
        let source = "class Math:\n    @staticmethod\n    def add(a, b):\n        return a + b\n\n    def scale(self, k):\n        return k\n";
        let out = idl(source);
        assert!(out.contains("  @staticmethod"));
        assert!(out.contains("  static add(in a, in b) returns void;"));
        assert!(out.contains("  scale(in k) returns void;"));
        assert!(!out.contains("in self"));
    }

    #[test]
    fn route_decorators_are_normalized() {
        let out = idl("@router.get(\"/users\", tags=[\"admin\"])\ndef list_users():\n    pass\n");
        assert!(out.contains("@Route(method=GET, path=\"/users\", tags=[admin])"));
    }

    #[test]
    fn other_decorators_pass_through_verbatim() {
        let out = idl("@lru_cache(maxsize=128)\ndef cached():\n    pass\n");
        assert!(out.contains("@lru_cache(maxsize=128)"));
    }

    #[test]
    fn globals_render_python_style_with_first_value() {
        let out = idl("CONFIG = {\"a\": 1}\nCONFIG = 2\n");
        assert!(out.contains("const CONFIG = {'a': 1};"));
        assert!(!out.contains("const CONFIG = 2;"));
    }

    #[test]
    fn reference_globals_read_as_identifiers() {
        let out = idl("DEFAULT = TIMEOUT\nBUILT = make()\n");
        assert!(out.contains("const DEFAULT = <TIMEOUT>;"));
        assert!(out.contains("const BUILT = <function call>;"));
    }

    #[test]
    fn none_globals_render_undefined() {
        let out = idl("MISSING = None\n");
        assert!(out.contains("const MISSING = undefined;"));
    }

    #[test]
    fn class_constants_render_inside_the_interface() {
        let out = idl("class Config:\n    RETRIES = 3\n");
        assert!(out.contains("  const RETRIES = 3;"));
    }

    #[test]
    fn adapter_is_deterministic() {
        let model = crate::extract_structure(
            "import os\nX = 1\n\nclass C:\n    def m(self):\n        pass\n",
        )
        .unwrap();
        assert_eq!(to_idl(&model), to_idl(&model));
    }
}
