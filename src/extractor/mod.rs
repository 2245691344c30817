//! Structural extraction from a parsed Python tree.
//!
//! This module is organized into focused sub-modules:
//! - helpers: docstring and attribute-path utilities
//! - values: rendering of value and annotation expressions
//! - signatures: parameter list extraction
//! - decorators: decorator extraction and rendering
//! - imports: import statement handling
//! - assignments: module-level and class-level assignment extraction
//! - functions: function and method extraction
//! - classes: class definition extraction

pub(crate) mod assignments;
pub(crate) mod classes;
pub(crate) mod decorators;
pub(crate) mod functions;
pub(crate) mod helpers;
pub(crate) mod imports;
pub(crate) mod signatures;
pub(crate) mod values;

use tracing::debug;
use tree_sitter::{Node, Tree};

use crate::model::{Class, StructuralModel};

/// Where a visited definition belongs: the module itself, or the class
/// whose body is currently being walked.
///
/// The class slot is single-level on purpose: a nested class definition
/// replaces it for the duration of its subtree and the previous scope
/// resumes afterward, so nested classes land in the model's top-level list.
pub(crate) enum Scope<'m> {
    Module,
    Class(&'m mut Class),
}

/// Walks one parsed module and builds its [`StructuralModel`].
pub(crate) struct ModuleExtractor<'s> {
    source: &'s str,
}

impl<'s> ModuleExtractor<'s> {
    pub fn new(source: &'s str) -> Self {
        Self { source }
    }

    /// Get the source text covered by a node.
    pub fn node_text(&self, node: &Node) -> String {
        let bytes = self.source.as_bytes();
        let (start, end) = (node.start_byte(), node.end_byte());
        if start < bytes.len() && end <= bytes.len() {
            String::from_utf8_lossy(&bytes[start..end]).to_string()
        } else {
            String::new()
        }
    }

    pub fn build(&self, tree: &Tree) -> StructuralModel {
        let mut model = StructuralModel::default();
        let root = tree.root_node();

        model.module_doc = helpers::body_docstring(self, &root);

        let mut scope = Scope::Module;
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            self.visit(child, &mut model, &mut scope, 0);
        }

        debug!(
            imports = model.imports.len(),
            globals = model.globals.len(),
            functions = model.functions.len(),
            classes = model.classes.len(),
            "extracted module structure"
        );
        model
    }

    /// Node-kind dispatch for the recursive walk.
    ///
    /// `depth` counts enclosing function and class bodies; assignments only
    /// populate globals at depth 0. Unrecognized kinds recurse generically
    /// so definitions nested in control flow are still found.
    fn visit(&self, node: Node, model: &mut StructuralModel, scope: &mut Scope, depth: u32) {
        match node.kind() {
            "import_statement" | "import_from_statement" => {
                imports::extract_imports(self, node, &mut model.imports);
            }
            "assignment" => {
                // Class-body assignments are consumed by the class visitor;
                // anything reaching here inside a class or function is dropped.
                if depth == 0 && matches!(scope, Scope::Module) {
                    assignments::extract_globals(self, node, &mut model.globals);
                }
            }
            "function_definition" => {
                functions::visit_function(self, node, model, scope, depth);
            }
            "class_definition" => {
                classes::visit_class(self, node, model, depth);
            }
            _ => {
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    self.visit(child, model, scope, depth);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::extract_structure;
    use crate::model::{StructuralModel, Value};

    fn build(source: &str) -> StructuralModel {
        extract_structure(source).expect("source should parse")
    }

    #[test]
    fn collects_imports_in_order() {
        let model = build("import os\nimport sys as system\nfrom pathlib import Path\n");
        assert_eq!(model.imports.len(), 3);
        assert_eq!(model.imports[0].name, "os");
        assert_eq!(model.imports[1].name, "sys");
        assert_eq!(model.imports[1].alias.as_deref(), Some("system"));
        assert_eq!(model.imports[2].module.as_deref(), Some("pathlib"));
        assert_eq!(model.imports[2].name, "Path");
    }

    #[test]
    fn module_docstring_is_captured() {
        let model = build("\"\"\"Utility module.\"\"\"\nimport os\n");
        assert_eq!(model.module_doc.as_deref(), Some("Utility module."));
    }

    #[test]
    fn a_leading_comment_is_not_a_docstring() {
        let model = build("# just a comment\nimport os\n");
        assert!(model.module_doc.is_none());
    }

    #[test]
    fn first_assignment_wins_for_globals() {
        let model = build("X = {\"a\": 1}\nX = 2\n");
        assert_eq!(model.globals.len(), 1);
        assert_eq!(model.globals[0].name, "X");
        assert_eq!(
            model.globals[0].value,
            Value::Dict(vec![(Value::Str("a".into()), Value::Int(1))])
        );
    }

    #[test]
    fn assignments_inside_functions_are_ignored() {
        let model = build("def f():\n    X = 1\n    return X\n");
        assert!(model.globals.is_empty());
        assert_eq!(model.functions.len(), 1);
    }

    #[test]
    fn chained_assignment_records_each_target_once() {
        let model = build("a = b = 1\n");
        let names: Vec<&str> = model.globals.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(model.globals[0].value, Value::Int(1));
    }

    #[test]
    fn function_signature_fields() {
        let source = "async def fetch(url: str, *args, **kwargs) -> bytes:\n    \"\"\"Fetch a URL.\"\"\"\n    return b\"\"\n";
        let model = build(source);
        let func = &model.functions[0];
        assert!(func.is_async);
        assert_eq!(func.doc.as_deref(), Some("Fetch a URL."));
        assert_eq!(func.return_type.as_deref(), Some("bytes"));
        let names: Vec<&str> = func.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["url", "*args", "**kwargs"]);
        assert_eq!(func.params[0].ty.as_deref(), Some("str"));
    }

    #[test]
    fn keyword_only_parameters_are_dropped() {
        let model = build("def f(a, *args, flag=False, **kwargs):\n    pass\n");
        let names: Vec<&str> = model.functions[0].params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "*args", "**kwargs"]);
    }

    #[test]
    fn methods_attach_to_their_class() {
        let source = "class Greeter(Base):\n    \"\"\"Says hello.\"\"\"\n    GREETING = \"hi\"\n\n    def __init__(self, name):\n        self.name = name\n\n    def greet(self) -> str:\n        return self.name\n";
        let model = build(source);
        assert!(model.functions.is_empty());
        let class = &model.classes[0];
        assert_eq!(class.name, "Greeter");
        assert_eq!(class.bases, vec!["Base".to_string()]);
        assert_eq!(class.doc.as_deref(), Some("Says hello."));
        assert_eq!(class.class_vars.len(), 1);
        assert_eq!(class.class_vars[0].value, Value::Str("hi".into()));
        assert!(class.constructor().is_some());
        let names: Vec<&str> = class.regular_methods().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["greet"]);
    }

    #[test]
    fn non_literal_class_vars_are_omitted() {
        let model = build("class C:\n    TABLE = build_table()\n    LIMIT = 10\n");
        let class = &model.classes[0];
        assert_eq!(class.class_vars.len(), 1);
        assert_eq!(class.class_vars[0].name, "LIMIT");
        assert_eq!(class.class_vars[0].value, Value::Int(10));
    }

    #[test]
    fn nested_class_lands_in_top_level_list() {
        let source = "class Outer:\n    class Inner:\n        def ping(self):\n            pass\n\n    def outer_method(self):\n        pass\n";
        let model = build(source);
        let names: Vec<&str> = model.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Inner", "Outer"]);
        let inner = &model.classes[0];
        assert_eq!(inner.methods.len(), 1);
        assert_eq!(inner.methods[0].name, "ping");
        let outer = &model.classes[1];
        assert_eq!(outer.methods.len(), 1);
        assert_eq!(outer.methods[0].name, "outer_method");
    }

    #[test]
    fn nested_functions_are_recorded_in_scope() {
        let model = build("def outer():\n    def inner():\n        pass\n");
        let names: Vec<&str> = model.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["outer", "inner"]);
    }

    #[test]
    fn unsupported_shapes_degrade_instead_of_failing() {
        let model = build("x = [e for e in range(10) if e]\ny = -1\nz = fetch()\n");
        assert_eq!(model.globals[0].value, Value::Complex);
        assert_eq!(model.globals[1].value, Value::Complex);
        assert_eq!(model.globals[2].value, Value::Computed);
    }

    #[test]
    fn syntax_errors_are_the_only_failure() {
        assert!(extract_structure("def broken(:\n").is_err());
        assert!(extract_structure("match point:\n    case (0, 0):\n        pass\n").is_ok());
    }
}
