//! Schema registry: the mutable catalog extension modules populate
//!
//! The registry is owned by the schema-build orchestrator and passed by
//! mutable reference to every extension registration call. Extension
//! modules may load in any order and more than once, so registration is
//! idempotent: the first definition under a name wins and later
//! attempts are skipped with a warning. Once every module has
//! registered, `build_snapshot` freezes the accumulated state into an
//! immutable `SchemaSnapshot`.

use std::collections::{HashMap, HashSet};

use log::{info, warn};

use super::types::{
    RegisteredType, SchemaError, SchemaField, SchemaResult, SchemaSnapshot, TypeRef,
};

/// Outcome of an idempotent registration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Inserted,
    /// The name was taken; the first registration was kept.
    AlreadyRegistered,
}

impl RegisterOutcome {
    pub fn is_inserted(self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// Result of merging a registry into an existing snapshot.
///
/// The merged schema holds the union of both field and type maps.
/// Names already present in the snapshot keep their existing
/// definition; each skipped entry is listed in `collisions`.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub schema: SchemaSnapshot,
    pub collisions: Vec<String>,
}

/// Catalog of named types, query fields and mutation fields for one
/// schema-build session.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    types: HashMap<String, RegisteredType>,
    query_fields: HashMap<String, SchemaField>,
    mutation_fields: HashMap<String, SchemaField>,
    registered_components: HashSet<String>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type unless the name is already taken.
    pub fn register_type(&mut self, name: &str, type_def: RegisteredType) -> RegisterOutcome {
        if self.types.contains_key(name) {
            warn!("Type '{}' is already registered; keeping the first definition", name);
            return RegisterOutcome::AlreadyRegistered;
        }
        self.types.insert(name.to_string(), type_def);
        RegisterOutcome::Inserted
    }

    /// Register a query field unless the name is already taken.
    pub fn register_query(&mut self, field_name: &str, field_def: SchemaField) -> RegisterOutcome {
        if self.query_fields.contains_key(field_name) {
            warn!(
                "Query field '{}' is already registered; keeping the first definition",
                field_name
            );
            return RegisterOutcome::AlreadyRegistered;
        }
        self.query_fields.insert(field_name.to_string(), field_def);
        RegisterOutcome::Inserted
    }

    /// Register a mutation field unless the name is already taken.
    pub fn register_mutation(
        &mut self,
        field_name: &str,
        field_def: SchemaField,
    ) -> RegisterOutcome {
        if self.mutation_fields.contains_key(field_name) {
            warn!(
                "Mutation field '{}' is already registered; keeping the first definition",
                field_name
            );
            return RegisterOutcome::AlreadyRegistered;
        }
        self.mutation_fields.insert(field_name.to_string(), field_def);
        RegisterOutcome::Inserted
    }

    pub fn get_type(&self, name: &str) -> Option<&RegisteredType> {
        self.types.get(name)
    }

    /// Look up a type that must already be registered.
    ///
    /// A missing forward reference is a build-time configuration error,
    /// not a runtime condition to recover from.
    pub fn require_type(&self, name: &str) -> SchemaResult<&RegisteredType> {
        self.types
            .get(name)
            .ok_or_else(|| SchemaError::not_found(name))
    }

    /// A `TypeRef` to a type that must already be registered.
    pub fn named_ref(&self, name: &str) -> SchemaResult<TypeRef> {
        self.require_type(name)?;
        Ok(TypeRef::named(name))
    }

    /// Record that a component has run its registration. Returns `true`
    /// the first time, `false` once already recorded.
    pub fn register_component(&mut self, component_name: &str) -> bool {
        self.registered_components.insert(component_name.to_string())
    }

    pub fn is_component_registered(&self, component_name: &str) -> bool {
        self.registered_components.contains(component_name)
    }

    pub fn types(&self) -> &HashMap<String, RegisteredType> {
        &self.types
    }

    pub fn query_fields(&self) -> &HashMap<String, SchemaField> {
        &self.query_fields
    }

    pub fn mutation_fields(&self) -> &HashMap<String, SchemaField> {
        &self.mutation_fields
    }

    /// Freeze the accumulated state into an immutable snapshot.
    ///
    /// Every named type reference in root fields, arguments and
    /// registered composites must resolve, and every entry must be
    /// registered under the name it declares; a violation aborts the
    /// build, since it is a developer-time configuration defect.
    pub fn build_snapshot(&self) -> SchemaResult<SchemaSnapshot> {
        for (field_name, field) in &self.query_fields {
            if field.name != *field_name {
                return Err(SchemaError::invalid_field(format!(
                    "Query field registered as '{}' declares the name '{}'",
                    field_name, field.name
                )));
            }
            self.check_field_refs(&format!("Query.{}", field_name), field)?;
        }
        for (field_name, field) in &self.mutation_fields {
            if field.name != *field_name {
                return Err(SchemaError::invalid_field(format!(
                    "Mutation field registered as '{}' declares the name '{}'",
                    field_name, field.name
                )));
            }
            self.check_field_refs(&format!("Mutation.{}", field_name), field)?;
        }
        for (type_name, type_def) in &self.types {
            if type_def.name != *type_name {
                return Err(SchemaError::invalid_data(format!(
                    "Type registered as '{}' declares the name '{}'",
                    type_name, type_def.name
                )));
            }
            for (field_name, field) in &type_def.fields {
                self.check_field_refs(&format!("{}.{}", type_name, field_name), field)?;
            }
        }

        info!(
            "Schema built: {} types, {} queries, {} mutations",
            self.types.len(),
            self.query_fields.len(),
            self.mutation_fields.len()
        );

        Ok(SchemaSnapshot::new(
            self.query_fields.clone(),
            self.mutation_fields.clone(),
            self.types.clone(),
        ))
    }

    /// Drop all registrations. Used during add-on teardown.
    pub fn clear(&mut self) {
        self.types.clear();
        self.query_fields.clear();
        self.mutation_fields.clear();
        self.registered_components.clear();
    }

    fn check_field_refs(&self, context: &str, field: &SchemaField) -> SchemaResult<()> {
        self.check_type_ref(context, &field.type_ref)?;
        for argument in &field.arguments {
            self.check_type_ref(&format!("{}({})", context, argument.name), &argument.type_ref)?;
        }
        Ok(())
    }

    fn check_type_ref(&self, context: &str, type_ref: &TypeRef) -> SchemaResult<()> {
        if let Some(name) = type_ref.named_type() {
            if !self.types.contains_key(name) {
                return Err(SchemaError::not_found(format!(
                    "{} references unregistered type '{}'",
                    context, name
                )));
            }
        }
        Ok(())
    }
}

impl SchemaSnapshot {
    /// Merge a registry's accumulated fields and types into this
    /// snapshot, producing a new snapshot.
    ///
    /// The result is the union of both sides. A name already present in
    /// the snapshot keeps its existing definition; the skipped entry is
    /// reported in the outcome's collision list rather than silently
    /// overwriting.
    pub fn merge_registry(&self, registry: &SchemaRegistry) -> MergeOutcome {
        let mut collisions = Vec::new();
        let (mut query_fields, mut mutation_fields, mut type_map) = self.clone().into_parts();

        for (name, field) in registry.query_fields() {
            if query_fields.contains_key(name) {
                collisions.push(format!("Query.{}", name));
            } else {
                query_fields.insert(name.clone(), field.clone());
            }
        }
        for (name, field) in registry.mutation_fields() {
            if mutation_fields.contains_key(name) {
                collisions.push(format!("Mutation.{}", name));
            } else {
                mutation_fields.insert(name.clone(), field.clone());
            }
        }
        for (name, type_def) in registry.types() {
            if type_map.contains_key(name) {
                collisions.push(format!("Type.{}", name));
            } else {
                type_map.insert(name.clone(), type_def.clone());
            }
        }

        collisions.sort();
        for collision in &collisions {
            warn!("Merge kept the existing definition of {}", collision);
        }

        MergeOutcome {
            schema: SchemaSnapshot::new(query_fields, mutation_fields, type_map),
            collisions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::FieldKind;

    fn vertex_type() -> RegisteredType {
        RegisteredType::object("Vertex")
            .with_field(SchemaField::new("x", FieldKind::ObjectField, TypeRef::float()))
    }

    #[test]
    fn duplicate_type_registration_keeps_first() {
        let mut registry = SchemaRegistry::new();
        let first = vertex_type();
        let second = RegisteredType::object("Vertex")
            .with_field(SchemaField::new("y", FieldKind::ObjectField, TypeRef::float()));

        assert!(registry.register_type("Vertex", first.clone()).is_inserted());
        assert_eq!(
            registry.register_type("Vertex", second),
            RegisterOutcome::AlreadyRegistered
        );
        assert_eq!(registry.get_type("Vertex"), Some(&first));
    }

    #[test]
    fn require_type_fails_on_missing_forward_reference() {
        let registry = SchemaRegistry::new();
        assert!(matches!(
            registry.require_type("MeshData"),
            Err(SchemaError::NotFound(_))
        ));
    }

    #[test]
    fn build_snapshot_rejects_dangling_type_ref() {
        let mut registry = SchemaRegistry::new();
        registry.register_query(
            "meshData",
            SchemaField::new("meshData", FieldKind::Query, TypeRef::named("MeshData")),
        );
        let err = registry.build_snapshot().unwrap_err();
        assert!(matches!(err, SchemaError::NotFound(_)));
    }

    #[test]
    fn build_snapshot_counts_registrations() {
        let mut registry = SchemaRegistry::new();
        registry.register_type("Vertex", vertex_type());
        registry.register_query(
            "vertex",
            SchemaField::new("vertex", FieldKind::Query, TypeRef::named("Vertex")),
        );
        let snapshot = registry.build_snapshot().unwrap();
        assert_eq!(snapshot.query_fields().len(), 1);
        assert_eq!(snapshot.type_map().len(), 1);
    }

    #[test]
    fn build_snapshot_rejects_name_mismatches() {
        let mut registry = SchemaRegistry::new();
        registry.register_type("Point", vertex_type());
        assert!(matches!(
            registry.build_snapshot(),
            Err(SchemaError::InvalidData(_))
        ));

        let mut registry = SchemaRegistry::new();
        registry.register_query(
            "vertexInfo",
            SchemaField::new("vertex", FieldKind::Query, TypeRef::string()),
        );
        assert!(matches!(
            registry.build_snapshot(),
            Err(SchemaError::InvalidField(_))
        ));
    }

    #[test]
    fn component_registration_is_recorded_once() {
        let mut registry = SchemaRegistry::new();
        assert!(registry.register_component("mesh"));
        assert!(!registry.register_component("mesh"));
        assert!(registry.is_component_registered("mesh"));
    }

    #[test]
    fn merge_unions_fields_and_reports_collisions() {
        let mut registry = SchemaRegistry::new();
        registry.register_type("Vertex", vertex_type());
        registry.register_mutation(
            "mesh.create",
            SchemaField::new("mesh.create", FieldKind::Mutation, TypeRef::named("Vertex")),
        );
        let snapshot = registry.build_snapshot().unwrap();

        let mut extra = SchemaRegistry::new();
        let replacement = SchemaField::new("mesh.create", FieldKind::Mutation, TypeRef::string());
        extra.register_mutation("mesh.create", replacement);
        extra.register_mutation(
            "mesh.delete",
            SchemaField::new("mesh.delete", FieldKind::Mutation, TypeRef::string()),
        );

        let outcome = snapshot.merge_registry(&extra);
        assert_eq!(outcome.collisions, vec!["Mutation.mesh.create"]);
        assert_eq!(outcome.schema.mutation_fields().len(), 2);
        // the earlier registration survives the merge untouched
        assert_eq!(
            outcome.schema.mutation_fields()["mesh.create"].type_ref,
            TypeRef::named("Vertex")
        );
    }

    #[test]
    fn clear_empties_all_maps() {
        let mut registry = SchemaRegistry::new();
        registry.register_type("Vertex", vertex_type());
        registry.register_component("mesh");
        registry.clear();
        assert!(registry.types().is_empty());
        assert!(!registry.is_component_registered("mesh"));
    }
}
