//! Language Support - Shared tree-sitter language configuration
//!
//! The class-view extractor understands Java only. ALL tree-sitter grammar
//! wiring goes through this module so the manager never names a grammar crate.

use crate::extractors::base::ExtractionError;

/// Languages the extractor manager accepts
pub const SUPPORTED_LANGUAGES: &[&str] = &["java"];

/// Get tree-sitter language parser for a given language name
///
/// This is the SINGLE SOURCE OF TRUTH for grammar selection.
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language, ExtractionError> {
    match language {
        "java" => Ok(tree_sitter_java::LANGUAGE.into()),
        _ => Err(ExtractionError::UnsupportedLanguage(language.to_string())),
    }
}

/// Detect language from file extension
///
/// Returns the language name that can be passed to `get_tree_sitter_language()`.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "java" => Some("java"),
        _ => None,
    }
}

/// Detect language from a file path, falling back to `None` for files without
/// a recognized extension
pub fn detect_language_from_path(file_path: &str) -> Option<&'static str> {
    std::path::Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(detect_language_from_extension)
}

/// Get AST node kinds that introduce a class-diagram type declaration
pub fn get_type_declaration_node_kinds(language: &str) -> Vec<&'static str> {
    match language {
        "java" => vec!["class_declaration", "interface_declaration"],
        _ => vec![],
    }
}

/// Get AST node kinds that are not diagram types themselves but can declare
/// nested classes and interfaces
pub fn get_type_scope_node_kinds(language: &str) -> Vec<&'static str> {
    match language {
        "java" => vec!["enum_declaration", "record_declaration"],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_grammar_loads() {
        let language = get_tree_sitter_language("java").unwrap();
        let mut parser = tree_sitter::Parser::new();
        assert!(parser.set_language(&language).is_ok());
    }

    #[test]
    fn test_unsupported_language_is_rejected() {
        let err = get_tree_sitter_language("cobol").unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedLanguage(ref l) if l == "cobol"));
    }

    #[test]
    fn test_detect_language_from_path() {
        assert_eq!(detect_language_from_path("src/com/acme/Foo.java"), Some("java"));
        assert_eq!(detect_language_from_path("Foo.kt"), None);
        assert_eq!(detect_language_from_path("Makefile"), None);
    }

    #[test]
    fn test_type_declaration_kinds() {
        let kinds = get_type_declaration_node_kinds("java");
        assert!(kinds.contains(&"class_declaration"));
        assert!(kinds.contains(&"interface_declaration"));
        assert!(get_type_declaration_node_kinds("rust").is_empty());
    }

    #[test]
    fn test_enums_and_records_are_scopes_not_types() {
        let scopes = get_type_scope_node_kinds("java");
        assert_eq!(scopes, vec!["enum_declaration", "record_declaration"]);
        assert!(!get_type_declaration_node_kinds("java").contains(&"enum_declaration"));
    }
}
