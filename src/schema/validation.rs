//! Static schema audit
//!
//! Four independent checks run against an assembled snapshot: resolver
//! presence, naming conventions, duplicate-intent detection and
//! response/input type shape. Every finding is a human-readable string
//! collected into one `ValidationReport`; no check raises an error or
//! stops the others from running.

use log::info;
use serde::{Deserialize, Serialize};

use crate::constants::{DOMAIN_DELIMITER, INTERNAL_PREFIX};
use crate::naming::find_potential_duplicates;
use crate::resolver::ResolverProvider;

use super::types::{SchemaField, SchemaSnapshot, TypeKind};

/// Findings from one audit pass. Produced fresh per call, never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub missing_resolvers: Vec<String>,
    pub type_issues: Vec<String>,
    pub naming_issues: Vec<String>,
    pub potential_duplicates: Vec<String>,
}

impl ValidationReport {
    /// Whether the audit produced no findings of any kind.
    pub fn is_clean(&self) -> bool {
        self.missing_resolvers.is_empty()
            && self.type_issues.is_empty()
            && self.naming_issues.is_empty()
            && self.potential_duplicates.is_empty()
    }

    pub fn finding_count(&self) -> usize {
        self.missing_resolvers.len()
            + self.type_issues.len()
            + self.naming_issues.len()
            + self.potential_duplicates.len()
    }
}

/// Audits assembled schemas against a resolver provider.
pub struct SchemaValidator<'a> {
    resolvers: &'a dyn ResolverProvider,
}

impl<'a> SchemaValidator<'a> {
    pub fn new(resolvers: &'a dyn ResolverProvider) -> Self {
        Self { resolvers }
    }

    /// Run all four checks and concatenate their findings.
    ///
    /// Only missing resolvers clear the `valid` flag; naming, shape and
    /// duplicate findings are advisory.
    pub fn validate(&self, schema: &SchemaSnapshot) -> ValidationReport {
        let missing_resolvers = self.check_resolvers(schema);
        let naming_issues = check_naming_conventions(schema);
        let potential_duplicates = check_potential_duplicates(schema);
        let type_issues = check_type_definitions(schema);

        let report = ValidationReport {
            valid: missing_resolvers.is_empty(),
            missing_resolvers,
            type_issues,
            naming_issues,
            potential_duplicates,
        };
        info!(
            "Schema audit finished: {} findings ({} missing resolvers)",
            report.finding_count(),
            report.missing_resolvers.len()
        );
        report
    }

    fn check_resolvers(&self, schema: &SchemaSnapshot) -> Vec<String> {
        let mut missing = Vec::new();
        for (field_name, field) in schema.query_fields() {
            if !self.field_has_resolver(field) {
                missing.push(format!("Query.{}", field_name));
            }
        }
        for (field_name, field) in schema.mutation_fields() {
            if !self.field_has_resolver(field) {
                missing.push(format!("Mutation.{}", field_name));
            }
        }
        missing.sort();
        missing
    }

    fn field_has_resolver(&self, field: &SchemaField) -> bool {
        field
            .resolver
            .as_deref()
            .is_some_and(|name| self.resolvers.has_resolver(name))
    }
}

/// One-shot audit with a throwaway validator.
pub fn validate_schema(schema: &SchemaSnapshot, resolvers: &dyn ResolverProvider) -> ValidationReport {
    SchemaValidator::new(resolvers).validate(schema)
}

fn check_naming_conventions(schema: &SchemaSnapshot) -> Vec<String> {
    let mut issues = Vec::new();

    for type_name in schema.type_map().keys() {
        if type_name.starts_with("__") {
            continue;
        }
        let starts_upper = type_name.chars().next().is_some_and(char::is_uppercase);
        if !starts_upper || type_name.contains('_') {
            issues.push(format!("Type name '{}' is not PascalCase", type_name));
        }
    }

    for field_name in schema.query_fields().keys() {
        if field_name.starts_with(INTERNAL_PREFIX) {
            continue;
        }
        let starts_upper = field_name.chars().next().is_some_and(char::is_uppercase);
        if starts_upper || field_name.contains('-') {
            issues.push(format!("Query field '{}' is not camelCase", field_name));
        }
    }

    for field_name in schema.mutation_fields().keys() {
        let starts_lower = field_name.chars().next().is_some_and(char::is_lowercase);
        if !field_name.contains(DOMAIN_DELIMITER) && !starts_lower {
            issues.push(format!(
                "Mutation field '{}' is not camelCase or domain.operation form",
                field_name
            ));
        }
    }

    issues.sort();
    issues
}

fn check_potential_duplicates(schema: &SchemaSnapshot) -> Vec<String> {
    find_potential_duplicates(schema.mutation_fields().keys().map(String::as_str))
}

fn check_type_definitions(schema: &SchemaSnapshot) -> Vec<String> {
    let mut issues = Vec::new();

    for (type_name, type_def) in schema.type_map() {
        if type_name.starts_with("__") || type_def.kind == TypeKind::Enum {
            continue;
        }

        if type_name.contains("Result") || type_name.contains("Response") {
            let has_success = type_def.has_field("success");
            let has_message = type_def.has_field("message");
            if !(has_success && has_message) {
                issues.push(format!(
                    "Response type '{}' is missing required success/message fields",
                    type_name
                ));
            }
        }

        if type_name.contains("Input") {
            for (field_name, field) in &type_def.fields {
                let lowered = field_name.to_lowercase();
                if field.type_ref.is_non_null()
                    && !lowered.contains("id")
                    && !lowered.contains("required")
                {
                    issues.push(format!(
                        "Required input field '{}.{}' should mention 'Required' or 'Id' in its name",
                        type_name, field_name
                    ));
                }
            }
        }
    }

    issues.sort();
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ResolverTable;
    use crate::schema::registry::SchemaRegistry;
    use crate::schema::types::{FieldKind, RegisteredType, TypeRef};

    fn snapshot_with_mesh_query(resolver: Option<&str>) -> SchemaSnapshot {
        let mut registry = SchemaRegistry::new();
        registry.register_type(
            "MeshData",
            RegisteredType::object("MeshData")
                .with_field(SchemaField::new("name", FieldKind::ObjectField, TypeRef::string())),
        );
        let mut field = SchemaField::new("meshData", FieldKind::Query, TypeRef::named("MeshData"));
        if let Some(name) = resolver {
            field = field.with_resolver(name);
        }
        registry.register_query("meshData", field);
        registry.build_snapshot().unwrap()
    }

    #[test]
    fn missing_resolver_clears_valid_flag() {
        let schema = snapshot_with_mesh_query(Some("resolve_mesh_data"));
        let empty = ResolverTable::new("scene_resolver");
        let report = validate_schema(&schema, &empty);
        assert!(!report.valid);
        assert_eq!(report.missing_resolvers, vec!["Query.meshData"]);
    }

    #[test]
    fn bound_resolver_passes() {
        let schema = snapshot_with_mesh_query(Some("resolve_mesh_data"));
        let table = ResolverTable::new("scene_resolver").with_resolver("resolve_mesh_data");
        let report = validate_schema(&schema, &table);
        assert!(report.valid);
        assert!(report.is_clean());
    }

    #[test]
    fn unbound_field_is_reported() {
        let schema = snapshot_with_mesh_query(None);
        let table = ResolverTable::new("scene_resolver").with_resolver("resolve_mesh_data");
        let report = validate_schema(&schema, &table);
        assert_eq!(report.missing_resolvers, vec!["Query.meshData"]);
    }

    #[test]
    fn naming_check_flags_type_and_field_drift() {
        let mut registry = SchemaRegistry::new();
        registry.register_type("mesh_data", RegisteredType::object("mesh_data"));
        registry.register_query(
            "MeshData",
            SchemaField::new("MeshData", FieldKind::Query, TypeRef::string())
                .with_resolver("resolve_mesh_data"),
        );
        registry.register_mutation(
            "CreateMesh",
            SchemaField::new("CreateMesh", FieldKind::Mutation, TypeRef::string())
                .with_resolver("resolve_create_mesh"),
        );
        let schema = registry.build_snapshot().unwrap();
        let issues = check_naming_conventions(&schema);
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().any(|issue| issue.contains("'mesh_data'")));
        assert!(issues.iter().any(|issue| issue.contains("Query field 'MeshData'")));
        assert!(issues.iter().any(|issue| issue.contains("'CreateMesh'")));
    }

    #[test]
    fn result_type_without_message_is_flagged_once() {
        let mut registry = SchemaRegistry::new();
        registry.register_type(
            "BooleanOperationResult",
            RegisteredType::object("BooleanOperationResult")
                .with_field(SchemaField::new("success", FieldKind::ObjectField, TypeRef::boolean())),
        );
        let schema = registry.build_snapshot().unwrap();
        let issues = check_type_definitions(&schema);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("BooleanOperationResult"));
    }

    #[test]
    fn non_null_input_field_naming_is_linted() {
        let mut registry = SchemaRegistry::new();
        registry.register_type(
            "MeshCreateInput",
            RegisteredType::input("MeshCreateInput")
                .with_field(SchemaField::new(
                    "name",
                    FieldKind::ObjectField,
                    TypeRef::non_null(TypeRef::string()),
                ))
                .with_field(SchemaField::new(
                    "objectId",
                    FieldKind::ObjectField,
                    TypeRef::non_null(TypeRef::id()),
                )),
        );
        let schema = registry.build_snapshot().unwrap();
        let issues = check_type_definitions(&schema);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("MeshCreateInput.name"));
    }

    #[test]
    fn internal_names_are_skipped() {
        let mut registry = SchemaRegistry::new();
        registry.register_query(
            "_llmFunctionList",
            SchemaField::new("_llmFunctionList", FieldKind::Query, TypeRef::string())
                .with_resolver("resolve_llm_function_list"),
        );
        let schema = registry.build_snapshot().unwrap();
        assert!(check_naming_conventions(&schema).is_empty());
    }
}
