//! Realization and generalization relations

use crate::extractors::base::{ImportTable, RelationKind, UmlRelation, UmlView};
use crate::syntax::TypeReference;

/// Append one relation per reference; the resolved reference is the source
/// and the declaring type is the target
pub(super) fn emit_relations(
    references: &[TypeReference],
    kind: RelationKind,
    target: &str,
    package_name: &str,
    imports: &ImportTable,
    view: &mut UmlView,
) {
    for reference in references {
        let source = imports.resolve(reference, package_name);
        tracing::trace!("{} {} {}", source, kind, target);
        view.add_relation(UmlRelation::new(source, target, kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::ImportDeclaration;

    #[test]
    fn test_no_references_no_relations() {
        let mut view = UmlView::new();
        emit_relations(
            &[],
            RelationKind::Realizes,
            "p.Foo",
            "p",
            &ImportTable::default(),
            &mut view,
        );
        assert!(view.relations.is_empty());
    }

    #[test]
    fn test_sources_resolve_through_imports() {
        let imports = ImportTable::from_imports(&[ImportDeclaration::single("q.Left")]);
        let mut view = UmlView::new();
        emit_relations(
            &[TypeReference::simple("Left"), TypeReference::simple("Right")],
            RelationKind::Generalizes,
            "p.Both",
            "p",
            &imports,
            &mut view,
        );

        assert_eq!(
            view.relations,
            vec![
                UmlRelation::new("q.Left", "p.Both", RelationKind::Generalizes),
                UmlRelation::new("p.Right", "p.Both", RelationKind::Generalizes),
            ]
        );
    }
}
