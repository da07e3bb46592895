pub mod registry;
pub mod types;
pub mod unification;
pub mod validation;

pub use registry::{MergeOutcome, RegisterOutcome, SchemaRegistry};
pub use types::{
    Deprecation, FieldArgument, FieldKind, RegisteredType, ScalarType, SchemaError, SchemaField,
    SchemaResult, SchemaSnapshot, TypeKind, TypeRef,
};
pub use unification::{plan_field_migration, unify_schema, UnifiedSchema};
pub use validation::{validate_schema, SchemaValidator, ValidationReport};
