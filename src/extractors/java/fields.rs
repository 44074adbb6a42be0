/// Field and interface constant reading
use crate::extractors::base::ExtractionError;
use crate::extractors::java::JavaSyntaxReader;
use crate::syntax::{FieldMember, VariableDeclarator};
use tree_sitter::Node;

use super::helpers;

/// Read a `field_declaration` or `constant_declaration`
///
/// Every declarator is kept here; deciding how many reach the model is the
/// class-view extractor's job.
pub(super) fn read_field(
    reader: &JavaSyntaxReader,
    node: Node,
) -> Result<FieldMember, ExtractionError> {
    let line = helpers::line_of(&node);
    let type_node = node
        .child_by_field_name("type")
        .ok_or(ExtractionError::MissingNode { kind: "type", line })?;
    let field_type = reader.get_node_text(&type_node);

    let mut variables = Vec::new();
    for declarator in node.children_by_field_name("declarator", &mut node.walk()) {
        let Some(name_node) = declarator.child_by_field_name("name") else {
            continue;
        };
        // `int b[]` declares an `int[]`
        let dimensions = declarator
            .child_by_field_name("dimensions")
            .map(|d| helpers::strip_type_arguments(&reader.get_node_text(&d)))
            .unwrap_or_default();
        variables.push(VariableDeclarator {
            type_name: format!("{}{}", field_type, dimensions),
            name: reader.get_node_text(&name_node),
        });
    }

    if variables.is_empty() {
        return Err(ExtractionError::MissingNode {
            kind: "variable_declarator",
            line,
        });
    }

    Ok(FieldMember {
        modifiers: helpers::extract_modifiers(reader, node),
        variables,
    })
}
