// Class-view model types
//
// All data structures produced by the class-view extractor: the view, its
// types with their members, and the relations between types.

use serde::{Deserialize, Serialize};

use super::visibility::Visibility;

/// Kind of an extracted type declaration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TypeKind {
    #[serde(rename = "class")]
    Class,
    #[serde(rename = "abstract class")]
    AbstractClass,
    #[serde(rename = "interface")]
    Interface,
}

impl TypeKind {
    /// Convert from string representation
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "class" => Some(TypeKind::Class),
            "abstract class" => Some(TypeKind::AbstractClass),
            "interface" => Some(TypeKind::Interface),
            _ => None,
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeKind::Class => write!(f, "class"),
            TypeKind::AbstractClass => write!(f, "abstract class"),
            TypeKind::Interface => write!(f, "interface"),
        }
    }
}

/// A field kept by the visibility policy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UmlField {
    /// `None` when the declaration carries no visibility keyword
    pub visibility: Option<Visibility>,
    pub is_static: bool,
    /// Declared type as written in source, not resolved
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
}

/// A method kept by the visibility policy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UmlMethod {
    pub visibility: Option<Visibility>,
    pub is_static: bool,
    pub is_abstract: bool,
    /// Return type as written in source
    pub return_type: String,
    pub name: String,
    /// Parameter types in declaration order; parameter names are dropped
    pub params: Vec<String>,
}

/// One extracted class or interface
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UmlType {
    /// Package supplied by the caller
    pub package_name: String,
    /// Dot-joined enclosing path plus simple name (`Outer.Inner`), no package
    pub name: String,
    pub kind: TypeKind,
    pub fields: Vec<UmlField>,
    pub methods: Vec<UmlMethod>,
}

impl UmlType {
    /// Fully-qualified name: package plus qualified name
    pub fn full_name(&self) -> String {
        qualify(&self.package_name, &self.name)
    }

    /// Last segment of the qualified name
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// Relation kinds between extracted types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// Interface implementation; source is the interface
    Realizes,
    /// Class or interface extension; source is the supertype
    Generalizes,
    /// Nesting; source is the enclosing type
    Owns,
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelationKind::Realizes => write!(f, "realizes"),
            RelationKind::Generalizes => write!(f, "generalizes"),
            RelationKind::Owns => write!(f, "owns"),
        }
    }
}

/// Relation between two fully-qualified type names
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct UmlRelation {
    pub source: String,
    pub target: String,
    pub kind: RelationKind,
}

impl UmlRelation {
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: RelationKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }
}

/// Extraction output for one compilation unit
///
/// Types and relations keep insertion order. Nothing is de-duplicated: a
/// declaration that appears twice in the input appears twice here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UmlView {
    pub types: Vec<UmlType>,
    pub relations: Vec<UmlRelation>,
}

impl UmlView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_type(&mut self, uml_type: UmlType) {
        self.types.push(uml_type);
    }

    pub fn add_relation(&mut self, relation: UmlRelation) {
        self.relations.push(relation);
    }

    /// First type whose package-less qualified name matches
    pub fn find_type(&self, name: &str) -> Option<&UmlType> {
        self.types.iter().find(|t| t.name == name)
    }

    pub fn relations_of_kind(&self, kind: RelationKind) -> impl Iterator<Item = &UmlRelation> {
        self.relations.iter().filter(move |r| r.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.relations.is_empty()
    }

    /// Serialize the view for hand-off to a renderer
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Join a package and a dotted name; the default (empty) package adds nothing
pub fn qualify(package_name: &str, name: &str) -> String {
    if package_name.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", package_name, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_type(name: &str) -> UmlType {
        UmlType {
            package_name: "com.acme".to_string(),
            name: name.to_string(),
            kind: TypeKind::Class,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    #[test]
    fn test_full_name_includes_package() {
        let nested = sample_type("Outer.Inner");
        assert_eq!(nested.full_name(), "com.acme.Outer.Inner");
        assert_eq!(nested.simple_name(), "Inner");
    }

    #[test]
    fn test_qualify_default_package() {
        assert_eq!(qualify("", "Foo"), "Foo");
        assert_eq!(qualify("p", "Foo"), "p.Foo");
    }

    #[test]
    fn test_kinds_serialize_as_diagram_keywords() {
        let json = serde_json::to_string(&TypeKind::AbstractClass).unwrap();
        assert_eq!(json, "\"abstract class\"");
        let json = serde_json::to_string(&RelationKind::Generalizes).unwrap();
        assert_eq!(json, "\"generalizes\"");
        assert_eq!(TypeKind::from_string("interface"), Some(TypeKind::Interface));
        assert_eq!(TypeKind::from_string("enum"), None);
    }

    #[test]
    fn test_view_keeps_duplicates_in_insertion_order() {
        let mut view = UmlView::new();
        view.add_type(sample_type("Foo"));
        view.add_type(sample_type("Foo"));
        view.add_relation(UmlRelation::new("p.A", "p.B", RelationKind::Owns));

        assert_eq!(view.types.len(), 2);
        assert_eq!(view.relations_of_kind(RelationKind::Owns).count(), 1);
        assert_eq!(view.relations_of_kind(RelationKind::Realizes).count(), 0);
    }

    #[test]
    fn test_view_json_round_trips() {
        let mut view = UmlView::new();
        let mut foo = sample_type("Foo");
        foo.fields.push(UmlField {
            visibility: Some(Visibility::Public),
            is_static: false,
            type_name: "int".to_string(),
            name: "x".to_string(),
        });
        view.add_type(foo);

        let json = view.to_json().unwrap();
        assert!(json.contains("\"type\": \"int\""));
        let parsed: UmlView = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, view);
    }
}
