//! Naming normalization and migration tooling
//!
//! - `case` - conversion between snake_case, camelCase and PascalCase
//! - `field_name` - structured `domain.operation` field names
//! - `migration` - rename planning for legacy camelCase field names

pub mod case;
pub mod field_name;
pub mod migration;

pub use case::{to_camel, to_pascal, to_snake};
pub use field_name::{
    create_field_name, create_input_type_name, create_result_type_name, create_type_name,
    FieldNameRecord,
};
pub use migration::{
    canonicalize_field_name, find_field_name_inconsistencies, find_potential_duplicates,
    generate_migration_plan, standardize_field_name, Canonicalization, DeprecatedFieldDescriptor,
    MigrationPlan,
};
