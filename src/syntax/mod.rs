//! Parser-independent syntax model consumed by the class-view extractor
//!
//! The Java adapter in `extractors::java` lowers a tree-sitter tree into these
//! owned records. Everything downstream of the adapter works on this model and
//! never touches tree-sitter node kinds.

/// One parsed source file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilationUnit {
    /// Package named by the `package` declaration, if any. Recorded only;
    /// callers supply the package used for qualification.
    pub package: Option<String>,
    /// Import declarations in source order
    pub imports: Vec<ImportDeclaration>,
    /// Top-level type declarations in source order
    pub types: Vec<TypeDeclaration>,
}

/// A single `import` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclaration {
    /// Last segment of the imported name (`Bar` for `com.acme.Bar`)
    pub name: String,
    /// Full dotted name as written, without a trailing `.*`
    pub qualified_name: String,
    pub is_static: bool,
    pub is_wildcard: bool,
}

impl ImportDeclaration {
    /// Build a single-type import from its dotted name
    pub fn single(qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let name = qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(qualified_name.as_str())
            .to_string();
        Self {
            name,
            qualified_name,
            is_static: false,
            is_wildcard: false,
        }
    }

    /// Build an on-demand (`.*`) import of a package or type
    pub fn wildcard(qualified_name: impl Into<String>) -> Self {
        Self {
            is_wildcard: true,
            ..Self::single(qualified_name)
        }
    }
}

/// What a [`TypeDeclaration`] declares
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    #[default]
    Class,
    Interface,
    /// Enums and records are not diagram types, only scopes for nested
    /// classes and interfaces
    Enum,
    Record,
}

impl DeclarationKind {
    /// Whether declarations of this kind appear in the class view
    pub fn is_modeled(self) -> bool {
        matches!(self, DeclarationKind::Class | DeclarationKind::Interface)
    }
}

/// A class, interface, enum or record declaration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeDeclaration {
    /// Simple name as declared
    pub name: String,
    pub kind: DeclarationKind,
    /// Keyword modifiers in source order (annotations excluded)
    pub modifiers: Vec<String>,
    pub fields: Vec<FieldMember>,
    pub methods: Vec<MethodMember>,
    /// `implements` clause of a class
    pub implemented_types: Vec<TypeReference>,
    /// `extends` clause: at most one for a class, any number for an interface
    pub extended_types: Vec<TypeReference>,
    /// Nested declarations in source order
    pub members: Vec<TypeDeclaration>,
    /// 1-based line of the declaration
    pub line: usize,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>, kind: DeclarationKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, DeclarationKind::Class)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, DeclarationKind::Interface)
    }

    pub fn is_interface(&self) -> bool {
        self.kind == DeclarationKind::Interface
    }

    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers.iter().any(|m| m == modifier)
    }
}

/// A field declaration; `int a, b;` carries two declarators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMember {
    pub modifiers: Vec<String>,
    pub variables: Vec<VariableDeclarator>,
}

impl FieldMember {
    pub fn is_static(&self) -> bool {
        self.modifiers.iter().any(|m| m == "static")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclarator {
    /// Declared type as written, including array dimensions
    pub type_name: String,
    pub name: String,
}

/// A method declaration (constructors are not methods)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodMember {
    pub modifiers: Vec<String>,
    /// Return type as written
    pub return_type: String,
    pub name: String,
    pub parameters: Vec<Parameter>,
}

impl MethodMember {
    pub fn is_static(&self) -> bool {
        self.modifiers.iter().any(|m| m == "static")
    }

    pub fn is_abstract(&self) -> bool {
        self.modifiers.iter().any(|m| m == "abstract")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub type_name: String,
    pub name: String,
}

/// A type named in an `extends` or `implements` clause
///
/// `name` is the last identifier with type arguments stripped; `qualifier`
/// holds whatever dotted prefix was written before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReference {
    pub name: String,
    pub qualifier: Option<String>,
}

impl TypeReference {
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qualifier: None,
        }
    }

    /// Split a dotted reference such as `java.io.Serializable`
    pub fn from_dotted(text: &str) -> Self {
        match text.rsplit_once('.') {
            Some((qualifier, name)) => Self {
                name: name.to_string(),
                qualifier: Some(qualifier.to_string()),
            },
            None => Self::simple(text),
        }
    }
}

/// The node that directly encloses a type declaration
///
/// Parent navigation is expressed as a chain of borrowed frames built during
/// traversal, so the syntax model itself carries no back-pointers.
#[derive(Debug, Clone, Copy)]
pub enum Enclosing<'a> {
    /// Top level of the compilation unit
    Unit,
    Type {
        decl: &'a TypeDeclaration,
        parent: &'a Enclosing<'a>,
    },
}
