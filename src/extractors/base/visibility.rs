//! Visibility levels and modifier classification
//!
//! Java has three visibility keywords; a member with none of them is
//! package-private, which the model calls `Default`.

use serde::{Deserialize, Serialize};

/// Visibility levels for class members
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
    /// Package-private: no visibility keyword present
    Default,
}

impl Visibility {
    /// Every level, in the order a diagram lists them
    pub const ALL: [Visibility; 4] = [
        Visibility::Public,
        Visibility::Protected,
        Visibility::Private,
        Visibility::Default,
    ];

    /// Classify one raw modifier token
    ///
    /// Returns `None` for tokens that are not visibility keywords (`static`,
    /// `final`, `abstract`, ...). Surrounding whitespace is ignored.
    pub fn from_modifier(token: &str) -> Option<Visibility> {
        match token.trim() {
            "public" => Some(Visibility::Public),
            "protected" => Some(Visibility::Protected),
            "private" => Some(Visibility::Private),
            _ => None,
        }
    }

    /// First visibility keyword in a modifier list, if any
    pub fn from_modifiers<S: AsRef<str>>(modifiers: &[S]) -> Option<Visibility> {
        modifiers
            .iter()
            .find_map(|m| Visibility::from_modifier(m.as_ref()))
    }

    /// Parse a level name as used in configuration (`"default"` included)
    pub fn from_string(s: &str) -> Option<Visibility> {
        match s.trim() {
            "default" | "package" => Some(Visibility::Default),
            other => Visibility::from_modifier(other),
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Protected => write!(f, "protected"),
            Visibility::Private => write!(f, "private"),
            Visibility::Default => write!(f, "default"),
        }
    }
}
