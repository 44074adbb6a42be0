//! Qualified identity of a declaration and its ownership relation

use crate::extractors::base::{qualify, RelationKind, UmlRelation};
use crate::syntax::Enclosing;

/// Where a declaration sits relative to the compilation unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Identity {
    /// Dot-joined enclosing path plus simple name, package excluded
    pub qualified_name: String,
    /// Qualified name minus its innermost segment, recorded when the walk
    /// crosses from a declaration directly into the unit
    pub owner: Option<String>,
}

/// Walk the enclosing chain outward, prefixing each enclosing simple name
pub(super) fn resolve_identity(simple_name: &str, enclosing: &Enclosing<'_>) -> Identity {
    let mut qualified_name = simple_name.to_string();
    let mut owner = None;
    let mut current = enclosing;

    loop {
        match current {
            Enclosing::Unit => break,
            Enclosing::Type { decl, parent } => {
                qualified_name = format!("{}.{}", decl.name, qualified_name);
                if let Enclosing::Unit = parent {
                    owner = qualified_name
                        .rsplit_once('.')
                        .map(|(outer, _)| outer.to_string());
                }
                current = *parent;
            }
        }
    }

    Identity {
        qualified_name,
        owner,
    }
}

impl Identity {
    /// `owns` relation from the enclosing type to this one, if nested
    pub(super) fn ownership(&self, package_name: &str) -> Option<UmlRelation> {
        self.owner.as_ref().map(|owner| {
            UmlRelation::new(
                qualify(package_name, owner),
                qualify(package_name, &self.qualified_name),
                RelationKind::Owns,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TypeDeclaration;

    #[test]
    fn test_top_level_name_is_simple_name() {
        let identity = resolve_identity("Foo", &Enclosing::Unit);
        assert_eq!(identity.qualified_name, "Foo");
        assert!(identity.owner.is_none());
        assert!(identity.ownership("p").is_none());
    }

    #[test]
    fn test_deep_nesting_joins_outer_to_inner() {
        let outer = TypeDeclaration::class("Outer");
        let mid = TypeDeclaration::class("Mid");
        let root = Enclosing::Unit;
        let outer_frame = Enclosing::Type {
            decl: &outer,
            parent: &root,
        };
        let mid_frame = Enclosing::Type {
            decl: &mid,
            parent: &outer_frame,
        };

        let identity = resolve_identity("Inner", &mid_frame);
        assert_eq!(identity.qualified_name, "Outer.Mid.Inner");
        assert_eq!(identity.owner.as_deref(), Some("Outer.Mid"));

        let owns = identity.ownership("p").unwrap();
        assert_eq!(owns.source, "p.Outer.Mid");
        assert_eq!(owns.target, "p.Outer.Mid.Inner");
        assert_eq!(owns.kind, RelationKind::Owns);
    }
}
