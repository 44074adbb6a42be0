//! Import table and best-effort type-name resolution
//!
//! Resolution has no classpath: a name that is neither imported nor qualified
//! is assumed to live in the referencing type's package. Wildcard imports are
//! never expanded, so names they bring in fall back to that same assumption.

use std::collections::HashMap;

use crate::syntax::{ImportDeclaration, TypeReference};

use super::types::qualify;

/// Simple name -> fully-qualified name for one compilation unit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportTable {
    entries: HashMap<String, String>,
}

impl ImportTable {
    /// Build the table from a unit's imports; a later import of the same
    /// simple name replaces an earlier one.
    pub fn from_imports(imports: &[ImportDeclaration]) -> Self {
        let mut entries = HashMap::with_capacity(imports.len());
        for import in imports.iter().filter(|i| !i.is_wildcard) {
            entries.insert(import.name.clone(), import.qualified_name.clone());
        }
        Self { entries }
    }

    pub fn get(&self, simple_name: &str) -> Option<&str> {
        self.entries.get(simple_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a reference written in an `extends`/`implements` clause
    pub fn resolve(&self, reference: &TypeReference, package_name: &str) -> String {
        match &reference.qualifier {
            None => match self.get(&reference.name) {
                Some(imported) => imported.to_string(),
                None => qualify(package_name, &reference.name),
            },
            Some(qualifier) => {
                let (head, rest) = match qualifier.split_once('.') {
                    Some((head, rest)) => (head, Some(rest)),
                    None => (qualifier.as_str(), None),
                };
                match (self.get(head), rest) {
                    (Some(imported), Some(rest)) => {
                        format!("{}.{}.{}", imported, rest, reference.name)
                    }
                    (Some(imported), None) => format!("{}.{}", imported, reference.name),
                    // Capitalized head names a type in this package (`Outer.Inner`)
                    (None, _) if head.starts_with(|c: char| c.is_ascii_uppercase()) => {
                        qualify(package_name, &format!("{}.{}", qualifier, reference.name))
                    }
                    // Lower-case head is a package path: already qualified
                    (None, _) => format!("{}.{}", qualifier, reference.name),
                }
            }
        }
    }
}
