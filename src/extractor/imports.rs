//! Import statement extraction.
//!
//! Handles `import`, `from ... import` and aliased imports. Imports are
//! collected wherever they appear, including inside function bodies.

use tree_sitter::Node;

use super::ModuleExtractor;
use crate::model::{Import, ImportKind};

pub(super) fn extract_imports(ex: &ModuleExtractor, node: Node, imports: &mut Vec<Import>) {
    match node.kind() {
        "import_statement" => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                match child.kind() {
                    "dotted_name" => imports.push(Import {
                        kind: ImportKind::Plain,
                        module: None,
                        name: ex.node_text(&child),
                        alias: None,
                    }),
                    "aliased_import" => {
                        if let Some((name, alias)) = split_alias(ex, &child) {
                            imports.push(Import {
                                kind: ImportKind::Plain,
                                module: None,
                                name,
                                alias: Some(alias),
                            });
                        }
                    }
                    _ => {}
                }
            }
        }
        "import_from_statement" => {
            let module = node
                .child_by_field_name("module_name")
                .map(|m| ex.node_text(&m));

            // Names come after the `import` keyword; the module name before
            // it is itself a dotted_name and must be skipped.
            let mut seen_import_keyword = false;
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                if child.kind() == "import" {
                    seen_import_keyword = true;
                    continue;
                }
                if !seen_import_keyword {
                    continue;
                }
                match child.kind() {
                    "dotted_name" => imports.push(Import {
                        kind: ImportKind::From,
                        module: module.clone(),
                        name: ex.node_text(&child),
                        alias: None,
                    }),
                    "aliased_import" => {
                        if let Some((name, alias)) = split_alias(ex, &child) {
                            imports.push(Import {
                                kind: ImportKind::From,
                                module: module.clone(),
                                name,
                                alias: Some(alias),
                            });
                        }
                    }
                    "wildcard_import" => imports.push(Import {
                        kind: ImportKind::From,
                        module: module.clone(),
                        name: "*".to_string(),
                        alias: None,
                    }),
                    _ => {}
                }
            }
        }
        _ => {}
    }
}

/// Extract the `name as alias` pair from an aliased_import node: the first
/// name-like child is the name, the second is the alias.
fn split_alias(ex: &ModuleExtractor, node: &Node) -> Option<(String, String)> {
    let mut name: Option<String> = None;
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if matches!(child.kind(), "dotted_name" | "identifier") {
            match name {
                None => name = Some(ex.node_text(&child)),
                Some(found) => return Some((found, ex.node_text(&child))),
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use crate::extract_structure;
    use crate::model::ImportKind;

    #[test]
    fn multiple_names_in_one_statement() {
        let model = extract_structure("import os, sys\n").unwrap();
        let names: Vec<&str> = model.imports.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["os", "sys"]);
    }

    #[test]
    fn aliased_imports_keep_both_names() {
        let model = extract_structure("import numpy as np\n").unwrap();
        assert_eq!(model.imports[0].name, "numpy");
        assert_eq!(model.imports[0].alias.as_deref(), Some("np"));
        assert_eq!(model.imports[0].kind, ImportKind::Plain);
    }

    #[test]
    fn from_imports_carry_their_module() {
        let model = extract_structure("from typing import List, Optional as Opt\n").unwrap();
        assert_eq!(model.imports.len(), 2);
        for import in &model.imports {
            assert_eq!(import.kind, ImportKind::From);
            assert_eq!(import.module.as_deref(), Some("typing"));
        }
        assert_eq!(model.imports[1].name, "Optional");
        assert_eq!(model.imports[1].alias.as_deref(), Some("Opt"));
    }

    #[test]
    fn wildcard_imports_use_a_star_name() {
        let model = extract_structure("from os.path import *\n").unwrap();
        assert_eq!(model.imports[0].name, "*");
        assert_eq!(model.imports[0].module.as_deref(), Some("os.path"));
    }

    #[test]
    fn relative_imports_keep_the_dot_prefix() {
        let model = extract_structure("from . import helpers\n").unwrap();
        assert_eq!(model.imports[0].module.as_deref(), Some("."));
        assert_eq!(model.imports[0].name, "helpers");
    }

    #[test]
    fn imports_inside_functions_are_collected() {
        let model = extract_structure("def lazy():\n    import json\n    return json\n").unwrap();
        assert_eq!(model.imports.len(), 1);
        assert_eq!(model.imports[0].name, "json");
    }
}
