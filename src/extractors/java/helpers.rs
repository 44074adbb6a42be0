/// Helper functions for Java syntax reading
/// Handles modifiers, type references, and error location
use crate::extractors::java::JavaSyntaxReader;
use crate::syntax::{DeclarationKind, TypeReference};
use tree_sitter::Node;

/// Whether a node kind is a class-diagram type declaration
pub(super) fn is_type_declaration(kind: &str) -> bool {
    crate::language::get_type_declaration_node_kinds("java").contains(&kind)
}

/// Declaration kind for any node the reader lowers into a [`crate::syntax::TypeDeclaration`]
pub(super) fn declaration_kind(kind: &str) -> Option<DeclarationKind> {
    if is_type_declaration(kind) {
        return Some(if kind == "interface_declaration" {
            DeclarationKind::Interface
        } else {
            DeclarationKind::Class
        });
    }
    if !crate::language::get_type_scope_node_kinds("java").contains(&kind) {
        return None;
    }
    match kind {
        "enum_declaration" => Some(DeclarationKind::Enum),
        _ => Some(DeclarationKind::Record),
    }
}

/// 1-based line of a node
pub(super) fn line_of(node: &Node) -> usize {
    node.start_position().row + 1
}

/// Extract keyword modifiers from a Java node (public, private, static, final, etc.)
///
/// Annotations live in the same `modifiers` node as named children and are skipped.
pub(super) fn extract_modifiers(reader: &JavaSyntaxReader, node: Node) -> Vec<String> {
    node.children(&mut node.walk())
        .find(|c| c.kind() == "modifiers")
        .map(|modifiers_node| {
            modifiers_node
                .children(&mut modifiers_node.walk())
                .filter(|c| !c.is_named())
                .map(|c| reader.get_node_text(&c))
                .collect()
        })
        .unwrap_or_default()
}

/// Extract superclass from a class declaration node
pub(super) fn extract_superclass(reader: &JavaSyntaxReader, node: Node) -> Option<TypeReference> {
    let superclass_node = node
        .children(&mut node.walk())
        .find(|c| c.kind() == "superclass")?;

    let type_node = superclass_node
        .named_children(&mut superclass_node.walk())
        .find_map(class_type_of)?;

    type_reference(reader, type_node)
}

/// Extract implemented interfaces from a class declaration
pub(super) fn extract_implemented_interfaces(
    reader: &JavaSyntaxReader,
    node: Node,
) -> Vec<TypeReference> {
    type_list_under(reader, node, "super_interfaces")
}

/// Extract extended interfaces from an interface declaration
pub(super) fn extract_extended_interfaces(
    reader: &JavaSyntaxReader,
    node: Node,
) -> Vec<TypeReference> {
    type_list_under(reader, node, "extends_interfaces")
}

fn type_list_under(reader: &JavaSyntaxReader, node: Node, clause_kind: &str) -> Vec<TypeReference> {
    let Some(clause_node) = node
        .children(&mut node.walk())
        .find(|c| c.kind() == clause_kind)
    else {
        return Vec::new();
    };

    let Some(type_list_node) = clause_node
        .children(&mut clause_node.walk())
        .find(|c| c.kind() == "type_list")
    else {
        return Vec::new();
    };

    type_list_node
        .named_children(&mut type_list_node.walk())
        .filter_map(class_type_of)
        .filter_map(|c| type_reference(reader, c))
        .collect()
}

fn is_class_type(kind: &str) -> bool {
    matches!(
        kind,
        "type_identifier" | "scoped_type_identifier" | "generic_type"
    )
}

/// The class-type node of a clause entry; `@A Bar` yields `Bar`
fn class_type_of(node: Node) -> Option<Node> {
    match node.kind() {
        kind if is_class_type(kind) => Some(node),
        "annotated_type" => node
            .named_children(&mut node.walk())
            .find(|c| is_class_type(c.kind())),
        _ => None,
    }
}

/// Lower a class-type node into a reference, dropping type arguments
pub(super) fn type_reference(reader: &JavaSyntaxReader, node: Node) -> Option<TypeReference> {
    let text = strip_type_arguments(&reader.get_node_text(&node));
    if text.is_empty() {
        return None;
    }
    Some(TypeReference::from_dotted(&text))
}

/// Remove `<...>` groups (nested included) and whitespace from a type name
pub(super) fn strip_type_arguments(text: &str) -> String {
    let mut depth = 0usize;
    let mut stripped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            c if depth == 0 && !c.is_whitespace() => stripped.push(c),
            _ => {}
        }
    }
    stripped
}

/// Depth-first search for the first ERROR or MISSING node
pub(super) fn find_first_error<'a>(node: Node<'a>) -> Option<Node<'a>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    for child in node.children(&mut node.walk()) {
        if let Some(error_node) = find_first_error(child) {
            return Some(error_node);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_type_arguments() {
        assert_eq!(strip_type_arguments("Comparable<Shape>"), "Comparable");
        assert_eq!(
            strip_type_arguments("Map<String, List<Integer>>"),
            "Map"
        );
        assert_eq!(
            strip_type_arguments("Outer<T>.Inner<U>"),
            "Outer.Inner"
        );
        assert_eq!(strip_type_arguments("java.io.Serializable"), "java.io.Serializable");
    }

    #[test]
    fn test_only_class_and_interface_are_type_declarations() {
        assert!(is_type_declaration("class_declaration"));
        assert!(is_type_declaration("interface_declaration"));
        assert!(!is_type_declaration("enum_declaration"));
        assert!(!is_type_declaration("record_declaration"));
    }

    #[test]
    fn test_declaration_kind_covers_scopes() {
        assert_eq!(declaration_kind("class_declaration"), Some(DeclarationKind::Class));
        assert_eq!(
            declaration_kind("interface_declaration"),
            Some(DeclarationKind::Interface)
        );
        assert_eq!(declaration_kind("enum_declaration"), Some(DeclarationKind::Enum));
        assert_eq!(declaration_kind("record_declaration"), Some(DeclarationKind::Record));
        assert_eq!(declaration_kind("annotation_type_declaration"), None);
    }
}
