// Classview Core - tree-sitter based class-diagram extraction for Java
//
// Parses Java compilation units and builds a class view: types with their
// filtered fields and methods, plus realizes/generalizes/owns relations.

pub mod extractors;
pub mod language;
pub mod syntax;
pub mod utils;

pub use extractors::{
    ClassViewExtractor, ExtractionError, ExtractorManager, ParserConfig, RelationKind,
    SourceFile, TypeKind, UmlField, UmlMethod, UmlRelation, UmlType, UmlView, Visibility,
};
