//! Class-view extraction for Java sources
//!
//! # Architecture
//!
//! The module is organized into several sub-modules:
//! - `base` - Model entities, visibility policy, import resolution and errors
//! - `java` - Lowers a tree-sitter-java tree into the syntax model
//! - `class_view` - Walks the syntax model and builds the class view
//! - `manager` - ExtractorManager public API (single file, disk, batch)

pub mod base;
pub mod class_view;
pub mod java;
pub mod manager;

// Re-export the public API
pub use base::{
    ExtractionError, ImportTable, ParserConfig, RelationKind, TypeKind, UmlField, UmlMethod,
    UmlRelation, UmlType, UmlView, Visibility,
};
pub use class_view::ClassViewExtractor;
pub use java::JavaSyntaxReader;
pub use manager::{ExtractorManager, SourceFile};
