//! Visibility policy deciding which members reach the class view

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::visibility::Visibility;

/// Which member visibility levels are kept, per member kind
///
/// Members without a visibility keyword are tested as [`Visibility::Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Field visibility levels to include
    pub field_visibility: BTreeSet<Visibility>,
    /// Method visibility levels to include
    pub method_visibility: BTreeSet<Visibility>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            field_visibility: Visibility::ALL.into_iter().collect(),
            method_visibility: Visibility::ALL.into_iter().collect(),
        }
    }
}

impl ParserConfig {
    /// Replace the set of field visibility levels to include
    pub fn with_field_visibility(mut self, levels: impl IntoIterator<Item = Visibility>) -> Self {
        self.field_visibility = levels.into_iter().collect();
        self
    }

    /// Replace the set of method visibility levels to include
    pub fn with_method_visibility(mut self, levels: impl IntoIterator<Item = Visibility>) -> Self {
        self.method_visibility = levels.into_iter().collect();
        self
    }

    pub fn is_field_included(&self, visibility: Option<Visibility>) -> bool {
        self.field_visibility
            .contains(&visibility.unwrap_or(Visibility::Default))
    }

    pub fn is_method_included(&self, visibility: Option<Visibility>) -> bool {
        self.method_visibility
            .contains(&visibility.unwrap_or(Visibility::Default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_includes_everything() {
        let config = ParserConfig::default();
        for level in Visibility::ALL {
            assert!(config.is_field_included(Some(level)));
            assert!(config.is_method_included(Some(level)));
        }
        assert!(config.is_field_included(None));
        assert!(config.is_method_included(None));
    }

    #[test]
    fn test_unset_visibility_uses_default_bucket() {
        let config = ParserConfig::default()
            .with_field_visibility([Visibility::Public])
            .with_method_visibility([Visibility::Default]);

        assert!(!config.is_field_included(None));
        assert!(config.is_method_included(None));
        assert!(!config.is_method_included(Some(Visibility::Public)));
    }

    #[test]
    fn test_field_and_method_sets_are_independent() {
        let config = ParserConfig::default().with_field_visibility([Visibility::Private]);

        assert!(config.is_field_included(Some(Visibility::Private)));
        assert!(!config.is_field_included(Some(Visibility::Public)));
        assert!(config.is_method_included(Some(Visibility::Public)));
    }

    #[test]
    fn test_config_deserializes_from_json() {
        let config: ParserConfig =
            serde_json::from_str(r#"{"field_visibility": ["public", "protected"]}"#).unwrap();

        assert!(config.is_field_included(Some(Visibility::Protected)));
        assert!(!config.is_field_included(Some(Visibility::Private)));
        // Missing keys fall back to the permissive default
        assert!(config.is_method_included(Some(Visibility::Private)));
    }
}
