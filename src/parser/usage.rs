use super::common::{descendants, node_line, node_text};
use super::{UsageContext, UsageEvent};
use tree_sitter::Node;

/// Collect identifier-usage evidence from a parsed tree.
///
/// The four contexts that count as usage: direct-call callees, the final
/// property of member-call callees, identifiers in markup tag/attribute
/// position, and rebound names in named export lists.
pub fn collect_usages(root: Node, source: &str) -> Vec<UsageEvent> {
    let mut usages = Vec::new();

    for node in descendants(root) {
        match node.kind() {
            "call_expression" => {
                if let Some(event) = call_usage(node, source) {
                    usages.push(event);
                }
            }
            "jsx_opening_element" | "jsx_self_closing_element" => {
                markup_usages(node, source, &mut usages);
            }
            "export_specifier" => {
                if let Some(name) = node.child_by_field_name("name") {
                    usages.push(UsageEvent {
                        name: node_text(name, source).to_string(),
                        context: UsageContext::ExportRebind,
                        line: node_line(node),
                    });
                }
            }
            _ => {}
        }
    }

    usages
}

fn call_usage(call: Node, source: &str) -> Option<UsageEvent> {
    let function = call.child_by_field_name("function")?;

    match function.kind() {
        "identifier" => Some(UsageEvent {
            name: node_text(function, source).to_string(),
            context: UsageContext::Call,
            line: node_line(call),
        }),
        "member_expression" => {
            let property = function.child_by_field_name("property")?;
            if property.kind() != "property_identifier" {
                return None;
            }
            Some(UsageEvent {
                name: node_text(property, source).to_string(),
                context: UsageContext::MemberCall,
                line: node_line(call),
            })
        }
        _ => None,
    }
}

/// Every identifier within an opening or self-closing markup element counts:
/// the tag name itself and anything in attribute position.
fn markup_usages(element: Node, source: &str, usages: &mut Vec<UsageEvent>) {
    for node in descendants(element) {
        if matches!(
            node.kind(),
            "identifier" | "property_identifier" | "jsx_identifier"
        ) {
            usages.push(UsageEvent {
                name: node_text(node, source).to_string(),
                context: UsageContext::MarkupTag,
                line: node_line(node),
            });
        }
    }
}
