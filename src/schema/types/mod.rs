pub mod errors;
pub mod fields;
pub mod schema;

pub use errors::{SchemaError, SchemaResult};
pub use fields::{Deprecation, FieldArgument, FieldKind, ScalarType, SchemaField, TypeRef};
pub use schema::{RegisteredType, SchemaSnapshot, TypeKind};
