/// Method and parameter reading
use crate::extractors::base::ExtractionError;
use crate::extractors::java::JavaSyntaxReader;
use crate::syntax::{MethodMember, Parameter};
use tree_sitter::Node;

use super::helpers;

/// Read a `method_declaration`
pub(super) fn read_method(
    reader: &JavaSyntaxReader,
    node: Node,
) -> Result<MethodMember, ExtractionError> {
    let line = helpers::line_of(&node);
    let name_node = node
        .child_by_field_name("name")
        .ok_or(ExtractionError::MissingNode {
            kind: "identifier",
            line,
        })?;

    let return_type = node
        .child_by_field_name("type")
        .map(|n| reader.get_node_text(&n))
        .unwrap_or_else(|| "void".to_string());

    let parameters = node
        .child_by_field_name("parameters")
        .map(|params| read_parameters(reader, params))
        .unwrap_or_default();

    Ok(MethodMember {
        modifiers: helpers::extract_modifiers(reader, node),
        return_type,
        name: reader.get_node_text(&name_node),
        parameters,
    })
}

/// Read `formal_parameters`; receiver parameters (`Foo this`) are skipped
fn read_parameters(reader: &JavaSyntaxReader, params: Node) -> Vec<Parameter> {
    params
        .named_children(&mut params.walk())
        .filter_map(|param| match param.kind() {
            "formal_parameter" => read_formal_parameter(reader, param),
            "spread_parameter" => read_spread_parameter(reader, param),
            _ => None,
        })
        .collect()
}

fn read_formal_parameter(reader: &JavaSyntaxReader, param: Node) -> Option<Parameter> {
    let type_node = param.child_by_field_name("type")?;
    let name_node = param.child_by_field_name("name")?;
    let dimensions = param
        .child_by_field_name("dimensions")
        .map(|d| reader.get_node_text(&d))
        .unwrap_or_default();

    Some(Parameter {
        type_name: format!("{}{}", reader.get_node_text(&type_node), dimensions),
        name: reader.get_node_text(&name_node),
    })
}

/// `String... keys` is recorded with its element type `String`
fn read_spread_parameter(reader: &JavaSyntaxReader, param: Node) -> Option<Parameter> {
    let children: Vec<Node> = param.named_children(&mut param.walk()).collect();
    let type_node = children
        .iter()
        .find(|c| !matches!(c.kind(), "modifiers" | "variable_declarator"))?;
    let name_node = children
        .iter()
        .find(|c| c.kind() == "variable_declarator")
        .and_then(|d| d.child_by_field_name("name"))?;

    Some(Parameter {
        type_name: reader.get_node_text(type_node),
        name: reader.get_node_text(&name_node),
    })
}
