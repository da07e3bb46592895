//! Composite type and snapshot structures
//!
//! `RegisteredType` is a named composite contributed by an extension
//! module. `SchemaSnapshot` is the frozen result of a build: once
//! constructed it is never mutated, so any number of readers may share
//! it. Rebuilding produces a fresh snapshot that replaces the old one
//! wholesale.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::fields::SchemaField;

/// The shape of a registered composite type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    Object,
    Input,
    Enum,
}

/// A named composite registered by an extension module.
///
/// Object and input types carry a field map; enum types carry a map
/// from value name to description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredType {
    pub name: String,
    pub kind: TypeKind,
    pub fields: HashMap<String, SchemaField>,
    pub enum_values: HashMap<String, String>,
    pub description: Option<String>,
}

impl RegisteredType {
    fn new<S: Into<String>>(name: S, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            fields: HashMap::new(),
            enum_values: HashMap::new(),
            description: None,
        }
    }

    pub fn object<S: Into<String>>(name: S) -> Self {
        Self::new(name, TypeKind::Object)
    }

    pub fn input<S: Into<String>>(name: S) -> Self {
        Self::new(name, TypeKind::Input)
    }

    pub fn enumeration<S: Into<String>>(name: S) -> Self {
        Self::new(name, TypeKind::Enum)
    }

    /// Add a field, keyed by its own name.
    pub fn with_field(mut self, field: SchemaField) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    pub fn with_value<S: Into<String>>(mut self, value: S, description: S) -> Self {
        self.enum_values.insert(value.into(), description.into());
        self
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }
}

/// An immutable, fully assembled schema.
///
/// Built once from a registry (or by merging a registry into an
/// existing snapshot) and then only read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    query_fields: HashMap<String, SchemaField>,
    mutation_fields: HashMap<String, SchemaField>,
    type_map: HashMap<String, RegisteredType>,
}

impl SchemaSnapshot {
    pub(crate) fn new(
        query_fields: HashMap<String, SchemaField>,
        mutation_fields: HashMap<String, SchemaField>,
        type_map: HashMap<String, RegisteredType>,
    ) -> Self {
        Self {
            query_fields,
            mutation_fields,
            type_map,
        }
    }

    pub fn query_fields(&self) -> &HashMap<String, SchemaField> {
        &self.query_fields
    }

    pub fn mutation_fields(&self) -> &HashMap<String, SchemaField> {
        &self.mutation_fields
    }

    pub fn type_map(&self) -> &HashMap<String, RegisteredType> {
        &self.type_map
    }

    pub fn get_type(&self, name: &str) -> Option<&RegisteredType> {
        self.type_map.get(name)
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        HashMap<String, SchemaField>,
        HashMap<String, SchemaField>,
        HashMap<String, RegisteredType>,
    ) {
        (self.query_fields, self.mutation_fields, self.type_map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::fields::{FieldKind, TypeRef};

    #[test]
    fn registered_type_keys_fields_by_name() {
        let vertex = RegisteredType::object("Vertex")
            .with_field(SchemaField::new("x", FieldKind::ObjectField, TypeRef::float()))
            .with_field(SchemaField::new("y", FieldKind::ObjectField, TypeRef::float()));
        assert!(vertex.has_field("x"));
        assert!(!vertex.has_field("z"));
    }

    #[test]
    fn snapshot_exposes_field_maps_read_only() {
        let mut mutations = HashMap::new();
        mutations.insert(
            "mesh.create".to_string(),
            SchemaField::new("mesh.create", FieldKind::Mutation, TypeRef::string()),
        );
        let snapshot = SchemaSnapshot::new(HashMap::new(), mutations, HashMap::new());
        assert!(snapshot.mutation_fields().contains_key("mesh.create"));
        assert!(snapshot.query_fields().is_empty());
        assert!(snapshot.get_type("MeshData").is_none());
    }
}
