/// Class, interface, enum and record declaration reading
use crate::extractors::base::ExtractionError;
use crate::extractors::java::JavaSyntaxReader;
use crate::syntax::{DeclarationKind, TypeDeclaration};
use tree_sitter::Node;

use super::{fields, helpers, methods};

/// Read a declaration, including nested declarations
///
/// Enums and records only contribute their name and nested declarations;
/// their headers are not diagram content.
pub(super) fn read_type_declaration(
    reader: &JavaSyntaxReader,
    node: Node,
    kind: DeclarationKind,
) -> Result<TypeDeclaration, ExtractionError> {
    let line = helpers::line_of(&node);
    let name_node = node
        .child_by_field_name("name")
        .ok_or(ExtractionError::MissingNode {
            kind: "identifier",
            line,
        })?;

    let mut declaration = TypeDeclaration {
        name: reader.get_node_text(&name_node),
        kind,
        modifiers: helpers::extract_modifiers(reader, node),
        line,
        ..Default::default()
    };

    match kind {
        DeclarationKind::Interface => {
            declaration.extended_types = helpers::extract_extended_interfaces(reader, node);
        }
        DeclarationKind::Class => {
            declaration.extended_types = helpers::extract_superclass(reader, node)
                .into_iter()
                .collect();
            declaration.implemented_types = helpers::extract_implemented_interfaces(reader, node);
        }
        DeclarationKind::Enum | DeclarationKind::Record => {}
    }

    let body = node.child_by_field_name("body").or_else(|| {
        node.children(&mut node.walk()).find(|c| {
            matches!(c.kind(), "class_body" | "interface_body" | "enum_body")
        })
    });
    if let Some(body) = body {
        if body.kind() == "enum_body" {
            // Members after the constants sit in `enum_body_declarations`
            if let Some(declarations) = body
                .named_children(&mut body.walk())
                .find(|c| c.kind() == "enum_body_declarations")
            {
                read_body(reader, declarations, &mut declaration)?;
            }
        } else {
            read_body(reader, body, &mut declaration)?;
        }
    }

    Ok(declaration)
}

/// Read the members of a class, interface or enum body
///
/// Method bodies and enum constant bodies are not entered, so local and
/// anonymous classes never become declarations.
fn read_body(
    reader: &JavaSyntaxReader,
    body: Node,
    declaration: &mut TypeDeclaration,
) -> Result<(), ExtractionError> {
    for member in body.named_children(&mut body.walk()) {
        match member.kind() {
            "field_declaration" | "constant_declaration" => {
                declaration.fields.push(fields::read_field(reader, member)?);
            }
            "method_declaration" => {
                declaration.methods.push(methods::read_method(reader, member)?);
            }
            kind => {
                if let Some(nested_kind) = helpers::declaration_kind(kind) {
                    declaration
                        .members
                        .push(read_type_declaration(reader, member, nested_kind)?);
                }
            }
        }
    }
    Ok(())
}
