//! Member filtering: which fields and methods reach the view

use crate::extractors::base::{ParserConfig, UmlField, UmlMethod, Visibility};
use crate::syntax::TypeDeclaration;

/// Fields passing the policy, in declaration order
///
/// Only the first declarator of `int a, b;` is modeled.
pub(super) fn extract_fields(declaration: &TypeDeclaration, config: &ParserConfig) -> Vec<UmlField> {
    declaration
        .fields
        .iter()
        .filter_map(|field| {
            let visibility = Visibility::from_modifiers(&field.modifiers);
            if !config.is_field_included(visibility) {
                return None;
            }
            let first = field.variables.first()?;
            Some(UmlField {
                visibility,
                is_static: field.is_static(),
                type_name: first.type_name.clone(),
                name: first.name.clone(),
            })
        })
        .collect()
}

/// Methods passing the policy, in declaration order
pub(super) fn extract_methods(
    declaration: &TypeDeclaration,
    config: &ParserConfig,
) -> Vec<UmlMethod> {
    declaration
        .methods
        .iter()
        .filter_map(|method| {
            let visibility = Visibility::from_modifiers(&method.modifiers);
            if !config.is_method_included(visibility) {
                return None;
            }
            Some(UmlMethod {
                visibility,
                is_static: method.is_static(),
                is_abstract: method.is_abstract(),
                return_type: method.return_type.clone(),
                name: method.name.clone(),
                params: method
                    .parameters
                    .iter()
                    .map(|p| p.type_name.clone())
                    .collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{FieldMember, MethodMember, Parameter, VariableDeclarator};

    fn field(modifiers: &[&str], names: &[&str]) -> FieldMember {
        FieldMember {
            modifiers: modifiers.iter().map(|m| m.to_string()).collect(),
            variables: names
                .iter()
                .map(|n| VariableDeclarator {
                    type_name: "int".to_string(),
                    name: n.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_excluded_fields_leave_no_trace() {
        let mut foo = crate::syntax::TypeDeclaration::class("Foo");
        foo.fields = vec![
            field(&["public"], &["a"]),
            field(&["private"], &["b"]),
            field(&[], &["c"]),
            field(&["protected", "static"], &["d"]),
        ];
        let config = ParserConfig::default()
            .with_field_visibility([Visibility::Public, Visibility::Protected]);

        let fields = extract_fields(&foo, &config);
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "d"]);
        assert!(fields[1].is_static);
        assert_eq!(fields[1].visibility, Some(Visibility::Protected));
    }

    #[test]
    fn test_package_private_field_keeps_unset_visibility() {
        let mut foo = crate::syntax::TypeDeclaration::class("Foo");
        foo.fields = vec![field(&["final"], &["count"])];
        let config = ParserConfig::default().with_field_visibility([Visibility::Default]);

        let fields = extract_fields(&foo, &config);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].visibility, None);
    }

    #[test]
    fn test_only_first_declarator_is_modeled() {
        let mut foo = crate::syntax::TypeDeclaration::class("Foo");
        foo.fields = vec![field(&["public"], &["a", "b"])];

        let fields = extract_fields(&foo, &ParserConfig::default());
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "a");
    }

    #[test]
    fn test_methods_drop_parameter_names() {
        let mut foo = crate::syntax::TypeDeclaration::class("Foo");
        foo.methods = vec![
            MethodMember {
                modifiers: vec!["public".to_string(), "abstract".to_string()],
                return_type: "void".to_string(),
                name: "put".to_string(),
                parameters: vec![
                    Parameter {
                        type_name: "String".to_string(),
                        name: "key".to_string(),
                    },
                    Parameter {
                        type_name: "int[]".to_string(),
                        name: "values".to_string(),
                    },
                ],
            },
            MethodMember {
                modifiers: vec!["private".to_string()],
                return_type: "int".to_string(),
                name: "hidden".to_string(),
                parameters: Vec::new(),
            },
        ];
        let config = ParserConfig::default().with_method_visibility([Visibility::Public]);

        let methods = extract_methods(&foo, &config);
        assert_eq!(methods.len(), 1);
        let put = &methods[0];
        assert!(put.is_abstract);
        assert!(!put.is_static);
        assert_eq!(put.params, vec!["String", "int[]"]);
    }
}
