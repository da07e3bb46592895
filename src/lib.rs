//! scenefold - GraphQL schema composition for 3D scene APIs
//!
//! A schema here is assembled from many independently authored
//! extension modules: each registers its types, query fields and
//! mutation fields into a [`schema::SchemaRegistry`], the registry is
//! frozen into an immutable [`schema::SchemaSnapshot`], and the
//! snapshot is audited by the [`schema::SchemaValidator`] against a
//! [`resolver::ResolverProvider`]. The [`naming`] module normalizes
//! field names toward the canonical `domain.operation` convention and
//! plans reversible renames for legacy camelCase names.
//!
//! Assembly follows a build-then-freeze lifecycle: one builder
//! constructs the snapshot, after which it is safe for unlimited
//! concurrent reads. Rebuilding produces a new snapshot that replaces
//! the old one wholesale.

pub mod constants;
pub mod extensions;
pub mod naming;
pub mod resolver;
pub mod schema;

pub use naming::{
    canonicalize_field_name, generate_migration_plan, standardize_field_name, to_camel, to_pascal,
    to_snake, Canonicalization, DeprecatedFieldDescriptor, FieldNameRecord, MigrationPlan,
};
pub use resolver::{select_provider, ResolverProvider, ResolverTable};
pub use schema::{
    plan_field_migration, unify_schema, validate_schema, FieldArgument, FieldKind, RegisterOutcome,
    RegisteredType, ScalarType, SchemaError, SchemaField, SchemaRegistry, SchemaResult,
    SchemaSnapshot, SchemaValidator, TypeKind, TypeRef, UnifiedSchema, ValidationReport,
};
