//! Error types for parsing and lowering Java sources
//!
//! The class-view traversal itself cannot fail; every error here comes from
//! turning source text into a syntax model.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported language: '{0}'. Supported languages: java")]
    UnsupportedLanguage(String),

    #[error("Failed to set parser language for {language}: {reason}")]
    ParserSetup { language: String, reason: String },

    #[error("Failed to parse file: {0}")]
    ParseFailed(String),

    #[error("Syntax error in {file} at line {line}, column {column}")]
    Malformed {
        file: String,
        line: usize,
        column: usize,
    },

    #[error("Missing {kind} node at line {line}")]
    MissingNode { kind: &'static str, line: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_location() {
        let err = ExtractionError::Malformed {
            file: "Foo.java".to_string(),
            line: 3,
            column: 7,
        };
        assert_eq!(
            err.to_string(),
            "Syntax error in Foo.java at line 3, column 7"
        );
    }

    #[test]
    fn test_errors_convert_into_anyhow() {
        let err: anyhow::Error = ExtractionError::ParseFailed("Foo.java".to_string()).into();
        assert!(err.downcast_ref::<ExtractionError>().is_some());
    }
}
