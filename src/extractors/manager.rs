//! ExtractorManager - Public API for class-view extraction
//!
//! Handles file parsing, lowers the tree through the Java syntax reader and
//! runs the class-view extractor. This module is the main public interface
//! for clients turning Java source into a [`UmlView`].

use crate::extractors::base::{ExtractionError, ParserConfig, UmlView};
use crate::extractors::class_view::ClassViewExtractor;
use crate::extractors::java::JavaSyntaxReader;
use crate::syntax::CompilationUnit;
use anyhow::Context;
use rayon::prelude::*;
use std::path::Path;
use tree_sitter::Parser;

/// One source handed to batch extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path used for language detection and error messages
    pub file_path: String,
    pub content: String,
    /// Package computed by the caller for this file
    pub package_name: String,
}

impl SourceFile {
    pub fn new(
        file_path: impl Into<String>,
        content: impl Into<String>,
        package_name: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            content: content.into(),
            package_name: package_name.into(),
        }
    }
}

/// Manager for class-view extraction
pub struct ExtractorManager {
    // No state needed - every call builds its own parser, import table and view
}

impl Default for ExtractorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self {}
    }

    /// Get supported languages
    pub fn supported_languages(&self) -> Vec<&'static str> {
        crate::language::SUPPORTED_LANGUAGES.to_vec()
    }

    /// Parse file content into a syntax model
    pub fn parse_unit(
        &self,
        file_path: &str,
        content: &str,
    ) -> Result<CompilationUnit, anyhow::Error> {
        // Determine language from file extension
        let language = self.get_language_from_extension(file_path)?;

        // Create parser for the language
        let mut parser = Parser::new();
        let tree_sitter_language = crate::language::get_tree_sitter_language(language)?;

        parser
            .set_language(&tree_sitter_language)
            .map_err(|e| ExtractionError::ParserSetup {
                language: language.to_string(),
                reason: e.to_string(),
            })?;

        // Parse the file
        let tree = parser
            .parse(content, None)
            .ok_or_else(|| ExtractionError::ParseFailed(file_path.to_string()))?;

        let reader = JavaSyntaxReader::new(file_path.to_string(), content.to_string());
        Ok(reader.read_unit(&tree)?)
    }

    /// Extract the class view of one source text
    pub fn extract_view(
        &self,
        file_path: &str,
        content: &str,
        package_name: &str,
        config: &ParserConfig,
    ) -> Result<UmlView, anyhow::Error> {
        let unit = self
            .parse_unit(file_path, content)
            .with_context(|| format!("Failed to read Java source: {}", file_path))?;

        let view = ClassViewExtractor::new(package_name, config).extract(&unit);

        tracing::trace!(
            "Extracted {} types and {} relations from {}",
            view.types.len(),
            view.relations.len(),
            file_path
        );
        Ok(view)
    }

    /// Read a file from disk and extract its class view
    ///
    /// Files in unsupported languages are rejected before they are read.
    pub fn extract_file(
        &self,
        path: &Path,
        package_name: &str,
        config: &ParserConfig,
    ) -> Result<UmlView, anyhow::Error> {
        if !crate::utils::file_utils::is_supported_file(path) {
            let extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or("");
            return Err(ExtractionError::UnsupportedLanguage(extension.to_string()).into());
        }
        let content = crate::utils::file_utils::read_file_content(path)?;
        self.extract_view(&path.to_string_lossy(), &content, package_name, config)
    }

    /// Extract many sources in parallel
    ///
    /// Results are returned in input order. Each source gets its own parser,
    /// import table and view; a failing source only fails its own slot.
    pub fn extract_views_batch(
        &self,
        sources: &[SourceFile],
        config: &ParserConfig,
    ) -> Vec<Result<UmlView, anyhow::Error>> {
        sources
            .par_iter()
            .map(|source| {
                let result = self.extract_view(
                    &source.file_path,
                    &source.content,
                    &source.package_name,
                    config,
                );
                if let Err(e) = &result {
                    tracing::warn!("Skipping {}: {:#}", source.file_path, e);
                }
                result
            })
            .collect()
    }

    fn get_language_from_extension(&self, file_path: &str) -> Result<&'static str, ExtractionError> {
        crate::language::detect_language_from_path(file_path).ok_or_else(|| {
            let extension = Path::new(file_path)
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or("");
            ExtractionError::UnsupportedLanguage(extension.to_string())
        })
    }
}
