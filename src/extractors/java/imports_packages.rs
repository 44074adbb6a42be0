/// Import and package declaration reading
use crate::extractors::java::JavaSyntaxReader;
use crate::syntax::ImportDeclaration;
use tree_sitter::Node;

/// Read the dotted name of a package declaration
pub(super) fn read_package(reader: &JavaSyntaxReader, node: Node) -> Option<String> {
    let name_node = node
        .named_children(&mut node.walk())
        .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))?;

    Some(reader.get_node_text(&name_node))
}

/// Read an import declaration
///
/// `import a.b.*;` is recorded with `qualified_name` `a.b` and the wildcard flag.
pub(super) fn read_import(reader: &JavaSyntaxReader, node: Node) -> Option<ImportDeclaration> {
    let name_node = node
        .named_children(&mut node.walk())
        .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))?;
    let full_import_path = reader.get_node_text(&name_node);

    // Check if it's a static import
    let is_static = node
        .children(&mut node.walk())
        .any(|c| c.kind() == "static");

    // Check for wildcard imports (asterisk node)
    let has_asterisk = node
        .children(&mut node.walk())
        .any(|c| c.kind() == "asterisk");

    let mut import = if has_asterisk {
        ImportDeclaration::wildcard(full_import_path)
    } else {
        ImportDeclaration::single(full_import_path)
    };
    import.is_static = is_static;
    Some(import)
}
