//! One-call schema pipeline: build, audit, plan migration
//!
//! Runs the full assembly from every extension module, audits the
//! frozen snapshot against a resolver provider and computes the naming
//! migration plan. Nothing is applied to the snapshot here; the caller
//! decides whether to merge the deprecated-field descriptors into the
//! served schema.

use std::collections::HashMap;

use log::info;

use crate::extensions;
use crate::naming::{generate_migration_plan, DeprecatedFieldDescriptor, MigrationPlan};
use crate::resolver::ResolverProvider;

use super::types::{SchemaResult, SchemaSnapshot};
use super::validation::{validate_schema, ValidationReport};

/// The assembled schema together with its audit and migration output.
#[derive(Debug, Clone)]
pub struct UnifiedSchema {
    pub schema: SchemaSnapshot,
    pub validation: ValidationReport,
    pub migration: MigrationPlan,
    pub deprecated_fields: HashMap<String, DeprecatedFieldDescriptor>,
}

/// Migration plan over a snapshot's mutation fields.
///
/// Query fields stay camelCase by convention; only the mutation
/// surface migrates toward `domain.operation` names.
pub fn plan_field_migration(schema: &SchemaSnapshot) -> MigrationPlan {
    generate_migration_plan(schema.mutation_fields().keys().map(String::as_str))
}

/// Build the schema from all extensions, validate it and plan the
/// naming migration.
pub fn unify_schema(resolvers: &dyn ResolverProvider) -> SchemaResult<UnifiedSchema> {
    let schema = extensions::build_schema()?;

    let validation = validate_schema(&schema, resolvers);
    info!(
        "Schema validated against '{}': valid={}",
        resolvers.module_name(),
        validation.valid
    );

    let migration = plan_field_migration(&schema);
    info!(
        "Migration plan ready: {} renames, {} skipped",
        migration.renames.len(),
        migration.skipped.len()
    );

    let deprecated_fields = migration.deprecated_fields();
    Ok(UnifiedSchema {
        schema,
        validation,
        migration,
        deprecated_fields,
    })
}
