/// Class-view extractor: turns a compilation unit into a class-diagram model
///
/// This module is organized into focused sub-modules:
/// - members: Field and method filtering under the visibility policy
/// - naming: Qualified identity and the ownership relation for nested types
/// - relationships: Realization and generalization relations
///
/// The traversal keeps no state between declarations. Each activation
/// receives the enclosing chain, the unit's import table and the view to
/// append to; nested declarations get their own activation.
mod members;
mod naming;
mod relationships;

use crate::extractors::base::{
    ImportTable, ParserConfig, RelationKind, TypeKind, UmlType, UmlView,
};
use crate::syntax::{CompilationUnit, Enclosing, TypeDeclaration};
use tracing::{debug, trace};

/// Extracts a [`UmlView`] from one compilation unit
pub struct ClassViewExtractor<'c> {
    package_name: String,
    config: &'c ParserConfig,
}

impl<'c> ClassViewExtractor<'c> {
    pub fn new(package_name: impl Into<String>, config: &'c ParserConfig) -> Self {
        Self {
            package_name: package_name.into(),
            config,
        }
    }

    /// Extract every class and interface of the unit, nested ones included
    pub fn extract(&self, unit: &CompilationUnit) -> UmlView {
        let mut view = UmlView::new();
        let imports = ImportTable::from_imports(&unit.imports);
        let root = Enclosing::Unit;

        for declaration in &unit.types {
            self.visit(declaration, &root, &imports, &mut view);
        }

        debug!(
            "Extracted {} types and {} relations for package '{}'",
            view.types.len(),
            view.relations.len(),
            self.package_name
        );
        view
    }

    /// Extract one declaration and everything nested inside it
    ///
    /// `imports` must be the table of the unit at the root of `enclosing`.
    pub fn visit(
        &self,
        declaration: &TypeDeclaration,
        enclosing: &Enclosing<'_>,
        imports: &ImportTable,
        view: &mut UmlView,
    ) {
        if declaration.kind.is_modeled() {
            self.record(declaration, enclosing, imports, view);
        } else {
            trace!(
                "Descending into {:?} {} (line {}) without modeling it",
                declaration.kind,
                declaration.name,
                declaration.line
            );
        }

        let frame = Enclosing::Type {
            decl: declaration,
            parent: enclosing,
        };
        for nested in &declaration.members {
            self.visit(nested, &frame, imports, view);
        }
    }

    /// Add the type of one class or interface and its outgoing relations
    fn record(
        &self,
        declaration: &TypeDeclaration,
        enclosing: &Enclosing<'_>,
        imports: &ImportTable,
        view: &mut UmlView,
    ) {
        let identity = naming::resolve_identity(&declaration.name, enclosing);
        let uml_type = UmlType {
            package_name: self.package_name.clone(),
            name: identity.qualified_name.clone(),
            kind: classify_kind(declaration),
            fields: members::extract_fields(declaration, self.config),
            methods: members::extract_methods(declaration, self.config),
        };
        let full_name = uml_type.full_name();
        trace!(
            "{} {} (line {}): {} fields, {} methods",
            uml_type.kind,
            full_name,
            declaration.line,
            uml_type.fields.len(),
            uml_type.methods.len()
        );
        view.add_type(uml_type);

        if let Some(owns) = identity.ownership(&self.package_name) {
            view.add_relation(owns);
        }

        relationships::emit_relations(
            &declaration.implemented_types,
            RelationKind::Realizes,
            &full_name,
            &self.package_name,
            imports,
            view,
        );
        relationships::emit_relations(
            &declaration.extended_types,
            RelationKind::Generalizes,
            &full_name,
            &self.package_name,
            imports,
            view,
        );
    }
}

/// `interface`, else `class` upgraded to `abstract class` by an `abstract` modifier
pub fn classify_kind(declaration: &TypeDeclaration) -> TypeKind {
    if declaration.is_interface() {
        TypeKind::Interface
    } else if declaration.has_modifier("abstract") {
        TypeKind::AbstractClass
    } else {
        TypeKind::Class
    }
}
