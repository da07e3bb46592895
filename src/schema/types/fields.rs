//! Field-level data model for the schema registry
//!
//! A `SchemaField` describes one exposed operation or data member: its
//! externally visible name, the type it produces, its ordered argument
//! list and the name of the resolver expected to back it at request
//! time. Resolver bindings are weak references; the validator checks
//! them against a resolver provider at audit time.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Built-in scalar types recognised by the schema core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarType {
    String,
    Int,
    Float,
    Boolean,
    Id,
}

/// Reference to the type a field or argument produces.
///
/// Named references are resolved against the registry's type map when
/// the snapshot is built; a dangling name aborts the build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeRef {
    Scalar(ScalarType),
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn string() -> Self {
        Self::Scalar(ScalarType::String)
    }

    pub fn int() -> Self {
        Self::Scalar(ScalarType::Int)
    }

    pub fn float() -> Self {
        Self::Scalar(ScalarType::Float)
    }

    pub fn boolean() -> Self {
        Self::Scalar(ScalarType::Boolean)
    }

    pub fn id() -> Self {
        Self::Scalar(ScalarType::Id)
    }

    pub fn named<S: Into<String>>(name: S) -> Self {
        Self::Named(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// Whether the outermost wrapper marks this reference non-nullable.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// The innermost named type, unwrapping list and non-null wrappers.
    /// Returns `None` for scalar references.
    pub fn named_type(&self) -> Option<&str> {
        match self {
            Self::Scalar(_) => None,
            Self::Named(name) => Some(name),
            Self::List(inner) | Self::NonNull(inner) => inner.named_type(),
        }
    }
}

/// Where a field is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Query,
    Mutation,
    ObjectField,
}

/// One declared argument of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldArgument {
    pub name: String,
    pub type_ref: TypeRef,
    pub required: bool,
    pub default: Option<Value>,
    pub description: Option<String>,
}

impl FieldArgument {
    pub fn new<S: Into<String>>(name: S, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            required: false,
            default: None,
            description: None,
        }
    }

    /// A required (non-nullable) argument.
    pub fn required<S: Into<String>>(name: S, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            required: true,
            default: None,
            description: None,
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Deprecation metadata kept on a legacy field that forwards to its
/// canonical replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deprecation {
    pub reason: String,
    pub forwards_to: String,
}

/// One exposed operation or data member of the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    pub kind: FieldKind,
    pub type_ref: TypeRef,
    pub arguments: Vec<FieldArgument>,
    // resolver identifier only; existence is checked by the validator
    pub resolver: Option<String>,
    pub description: Option<String>,
    pub deprecated: Option<Deprecation>,
}

impl SchemaField {
    pub fn new<S: Into<String>>(name: S, kind: FieldKind, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            kind,
            type_ref,
            arguments: Vec::new(),
            resolver: None,
            description: None,
            deprecated: None,
        }
    }

    pub fn with_argument(mut self, argument: FieldArgument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_resolver<S: Into<String>>(mut self, resolver: S) -> Self {
        self.resolver = Some(resolver.into());
        self
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_deprecation<S: Into<String>>(mut self, reason: S, forwards_to: S) -> Self {
        self.deprecated = Some(Deprecation {
            reason: reason.into(),
            forwards_to: forwards_to.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_type_unwraps_wrappers() {
        let type_ref = TypeRef::non_null(TypeRef::list(TypeRef::named("Vertex")));
        assert_eq!(type_ref.named_type(), Some("Vertex"));
        assert!(type_ref.is_non_null());
        assert_eq!(TypeRef::float().named_type(), None);
    }

    #[test]
    fn field_builder_accumulates_arguments() {
        let field = SchemaField::new("meshData", FieldKind::Query, TypeRef::named("MeshData"))
            .with_argument(FieldArgument::required("name", TypeRef::string()))
            .with_resolver("resolve_mesh_data");
        assert_eq!(field.arguments.len(), 1);
        assert!(field.arguments[0].required);
        assert_eq!(field.resolver.as_deref(), Some("resolve_mesh_data"));
    }
}
