use super::common::{descendants, node_line, node_text, string_value};
use super::RawImport;
use tree_sitter::Node;

/// Collect every raw import specifier in a parsed tree: static imports,
/// re-exports with a source clause, `require()` calls and dynamic `import()`.
pub fn collect_imports(root: Node, source: &str) -> Vec<RawImport> {
    let mut imports = Vec::new();

    for node in descendants(root) {
        match node.kind() {
            "import_statement" | "export_statement" => {
                // export_statement carries a source only for re-exports
                if let Some(src) = node.child_by_field_name("source") {
                    if let Some(specifier) = string_value(src, source) {
                        imports.push(RawImport {
                            specifier,
                            line: node_line(node),
                        });
                    }
                }
            }
            "call_expression" => {
                if let Some(specifier) = import_call_specifier(node, source) {
                    imports.push(RawImport {
                        specifier,
                        line: node_line(node),
                    });
                }
            }
            _ => {}
        }
    }

    imports
}

/// Specifier of a `require("...")` or `import("...")` call, if this call is one
fn import_call_specifier(call: Node, source: &str) -> Option<String> {
    let function = call.child_by_field_name("function")?;

    let is_import_call = match function.kind() {
        "identifier" => node_text(function, source) == "require",
        "import" => true,
        _ => false,
    };
    if !is_import_call {
        return None;
    }

    let arguments = call.child_by_field_name("arguments")?;
    let mut cursor = arguments.walk();
    let result = arguments
        .children(&mut cursor)
        .find(|arg| arg.kind() == "string")
        .and_then(|arg| string_value(arg, source));
    result
}
