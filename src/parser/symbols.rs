use super::common::{descendants, node_line, node_text};
use super::{Declaration, DeclarationKind};
use std::path::Path;
use tree_sitter::Node;

/// Node kinds that make a variable binding function-valued
const FUNCTION_VALUES: [&str; 4] = [
    "arrow_function",
    "function_expression",
    "function",
    "generator_function",
];

/// Collect the named declarations of one file: function declarations,
/// function-valued bindings and class methods.
///
/// Anonymous values have no name to reference and are skipped by
/// construction rather than reported.
pub fn collect_declarations(root: Node, source: &str, file: &Path) -> Vec<Declaration> {
    let mut declarations = Vec::new();

    for node in descendants(root) {
        match node.kind() {
            "function_declaration" | "generator_function_declaration" => {
                if let Some(name) = node.child_by_field_name("name") {
                    declarations.push(Declaration {
                        name: node_text(name, source).to_string(),
                        file: file.to_path_buf(),
                        kind: DeclarationKind::Function,
                        line: node_line(node),
                    });
                }
            }
            "variable_declarator" => {
                if let Some(decl) = binding_declaration(node, source, file) {
                    declarations.push(decl);
                }
            }
            "method_definition" => {
                if let Some(decl) = method_declaration(node, source, file) {
                    declarations.push(decl);
                }
            }
            "public_field_definition" | "field_definition" => {
                if let Some(decl) = field_declaration(node, source, file) {
                    declarations.push(decl);
                }
            }
            _ => {}
        }
    }

    declarations
}

/// `const foo = () => {}` and friends. Destructuring patterns are skipped;
/// they bind values, not callable names we can match by identifier.
fn binding_declaration(node: Node, source: &str, file: &Path) -> Option<Declaration> {
    let value = node.child_by_field_name("value")?;
    if !FUNCTION_VALUES.contains(&value.kind()) {
        return None;
    }

    let name = node.child_by_field_name("name")?;
    if name.kind() != "identifier" {
        return None;
    }

    Some(Declaration {
        name: node_text(name, source).to_string(),
        file: file.to_path_buf(),
        kind: DeclarationKind::Binding,
        line: node_line(node),
    })
}

fn method_declaration(node: Node, source: &str, file: &Path) -> Option<Declaration> {
    let name = node.child_by_field_name("name")?;
    if name.kind() != "property_identifier" {
        // computed names and private members cannot be matched by identifier
        return None;
    }

    let text = node_text(name, source);
    if text == "constructor" {
        // invoked through `new ClassName()`, never by name
        return None;
    }

    Some(Declaration {
        name: text.to_string(),
        file: file.to_path_buf(),
        kind: DeclarationKind::Method,
        line: node_line(node),
    })
}

/// Class fields holding a function value: `handleClick = () => {}`
fn field_declaration(node: Node, source: &str, file: &Path) -> Option<Declaration> {
    let value = node.child_by_field_name("value")?;
    if !FUNCTION_VALUES.contains(&value.kind()) {
        return None;
    }

    // the TSX grammar names this field "name", the JavaScript grammar "property"
    let name = node
        .child_by_field_name("name")
        .or_else(|| node.child_by_field_name("property"))?;
    if name.kind() != "property_identifier" {
        return None;
    }

    Some(Declaration {
        name: node_text(name, source).to_string(),
        file: file.to_path_buf(),
        kind: DeclarationKind::Method,
        line: node_line(node),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SourceParser;
    use std::path::PathBuf;

    fn declarations_of(source: &str) -> Vec<(String, DeclarationKind)> {
        let mut parser = SourceParser::new();
        let attempt = parser.parse(source).unwrap();
        assert!(attempt.clean, "fixture source must parse");
        collect_declarations(attempt.tree.root_node(), source, &PathBuf::from("/app/a.ts"))
            .into_iter()
            .map(|d| (d.name, d.kind))
            .collect()
    }

    #[test]
    fn test_function_declarations() {
        let found = declarations_of(
            r#"
            function formatDate(d) { return d.toISOString(); }
            export function parseQuery(raw: string) { return raw.split("&"); }
            "#,
        );
        assert_eq!(
            found,
            vec![
                ("formatDate".to_string(), DeclarationKind::Function),
                ("parseQuery".to_string(), DeclarationKind::Function),
            ]
        );
    }

    #[test]
    fn test_function_valued_bindings() {
        let found = declarations_of(
            r#"
            const toSlug = (s) => s.toLowerCase();
            let retry = function () { return 1; };
            const limit = 10;
            const { a, b } = require("./pair");
            "#,
        );
        assert_eq!(
            found,
            vec![
                ("toSlug".to_string(), DeclarationKind::Binding),
                ("retry".to_string(), DeclarationKind::Binding),
            ]
        );
    }

    #[test]
    fn test_class_methods() {
        let found = declarations_of(
            r#"
            class Store {
                constructor(url) { this.url = url; }
                fetchAll() { return fetch(this.url); }
                onUpdate = () => { this.fetchAll(); };
            }
            "#,
        );
        let names: Vec<&str> = found.iter().map(|(n, _)| n.as_str()).collect();
        assert!(names.contains(&"fetchAll"));
        assert!(names.contains(&"onUpdate"));
        assert!(!names.contains(&"constructor"));
    }

    #[test]
    fn test_anonymous_values_skipped() {
        let found = declarations_of(
            r#"
            [1, 2].map(function (x) { return x * 2; });
            export default function () { return 1; }
            "#,
        );
        assert!(found.is_empty());
    }
}
