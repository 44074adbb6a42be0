/// Java syntax reader: lowers a tree-sitter-java tree into the syntax model
///
/// This module is organized into focused sub-modules:
/// - helpers: Shared utility functions (modifiers, type references, error location)
/// - classes: Class and interface declarations and their bodies
/// - methods: Method declarations and parameters
/// - fields: Field and interface constant declarations
/// - imports_packages: Import and package declarations
mod classes;
mod fields;
mod helpers;
mod imports_packages;
mod methods;

use crate::extractors::base::ExtractionError;
use crate::syntax::CompilationUnit;
use tree_sitter::{Node, Tree};

/// Reads one parsed Java file into a [`CompilationUnit`]
pub struct JavaSyntaxReader {
    file_path: String,
    content: String,
}

impl JavaSyntaxReader {
    pub fn new(file_path: String, content: String) -> Self {
        Self { file_path, content }
    }

    /// Lower the whole tree
    ///
    /// Trees with syntax errors are rejected; the class-view extractor only
    /// ever sees well-formed input.
    pub fn read_unit(&self, tree: &Tree) -> Result<CompilationUnit, ExtractionError> {
        let root = tree.root_node();
        if root.has_error() {
            let error_node = helpers::find_first_error(root).unwrap_or(root);
            let position = error_node.start_position();
            return Err(ExtractionError::Malformed {
                file: self.file_path.clone(),
                line: position.row + 1,
                column: position.column + 1,
            });
        }

        let mut unit = CompilationUnit::default();
        for child in root.named_children(&mut root.walk()) {
            match child.kind() {
                "package_declaration" => {
                    unit.package = imports_packages::read_package(self, child);
                }
                "import_declaration" => {
                    if let Some(import) = imports_packages::read_import(self, child) {
                        unit.imports.push(import);
                    }
                }
                kind => {
                    if let Some(declaration_kind) = helpers::declaration_kind(kind) {
                        unit.types.push(classes::read_type_declaration(
                            self,
                            child,
                            declaration_kind,
                        )?);
                    }
                }
            }
        }

        tracing::trace!(
            "Read {} imports and {} top-level types from {}",
            unit.imports.len(),
            unit.types.len(),
            self.file_path
        );
        Ok(unit)
    }

    /// Get text from a tree-sitter node
    pub(crate) fn get_node_text(&self, node: &Node) -> String {
        let content_bytes = self.content.as_bytes();
        let (start_byte, end_byte) = (node.start_byte(), node.end_byte());
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::JavaSyntaxReader;
    use crate::extractors::base::ExtractionError;
    use crate::syntax::CompilationUnit;

    pub(crate) fn read(source: &str) -> Result<CompilationUnit, ExtractionError> {
        let mut parser = tree_sitter::Parser::new();
        let language = crate::language::get_tree_sitter_language("java")?;
        parser.set_language(&language).unwrap();
        let tree = parser.parse(source, None).unwrap();
        JavaSyntaxReader::new("Test.java".to_string(), source.to_string()).read_unit(&tree)
    }

    pub(crate) fn read_ok(source: &str) -> CompilationUnit {
        read(source).expect("source should lower cleanly")
    }
}
