// Base types shared by the class-view extractor
//
// Modular structure:
// - types.rs: The view and everything it holds (types, fields, methods, relations)
// - visibility.rs: Visibility levels and modifier classification
// - config.rs: Visibility policy (ParserConfig)
// - imports.rs: Import table and type-name resolution
// - errors.rs: Errors raised while parsing and lowering sources

pub mod config;
pub mod errors;
pub mod imports;
pub mod types;
pub mod visibility;

// Re-export key types for external use
pub use config::ParserConfig;
pub use errors::ExtractionError;
pub use imports::ImportTable;
pub use types::{
    qualify, RelationKind, TypeKind, UmlField, UmlMethod, UmlRelation, UmlType, UmlView,
};
pub use visibility::Visibility;
