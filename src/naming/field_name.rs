//! Structured field names under the `domain.operation` convention
//!
//! Canonical field names carry the domain before the delimiter and the
//! operation after it (`mesh.create`). Type names for a pair are
//! derived in PascalCase with a `Result` or `Input` suffix
//! (`MeshCreateResult`).

use serde::{Deserialize, Serialize};

use crate::constants::DOMAIN_DELIMITER;

use super::case::to_pascal;

/// A field name parsed into its domain and operation parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldNameRecord {
    pub domain: String,
    pub operation: String,
}

impl FieldNameRecord {
    pub fn new<S: Into<String>>(domain: S, operation: S) -> Self {
        Self {
            domain: domain.into(),
            operation: operation.into(),
        }
    }

    /// Parse a field name on the domain delimiter.
    ///
    /// A name without the delimiter is legacy: the whole name becomes
    /// the operation and the domain is left empty.
    pub fn parse(field_name: &str) -> Self {
        match field_name.split_once(DOMAIN_DELIMITER) {
            Some((domain, operation)) => Self::new(domain, operation),
            None => Self::new("", field_name),
        }
    }

    /// Whether this record came from a canonical name.
    pub fn is_canonical(&self) -> bool {
        !self.domain.is_empty()
    }

    /// The canonical `domain.operation` spelling.
    pub fn field_name(&self) -> String {
        create_field_name(&self.domain, &self.operation)
    }
}

/// Compose a canonical field name from a domain and an operation.
pub fn create_field_name(domain: &str, operation: &str) -> String {
    format!("{}{}{}", domain, DOMAIN_DELIMITER, operation)
}

/// Derive a PascalCase type name for a domain/operation pair.
pub fn create_type_name(domain: &str, operation: &str, suffix: &str) -> String {
    format!("{}{}{}", to_pascal(domain), to_pascal(operation), suffix)
}

pub fn create_result_type_name(domain: &str, operation: &str) -> String {
    create_type_name(domain, operation, "Result")
}

pub fn create_input_type_name(domain: &str, operation: &str) -> String {
    create_type_name(domain, operation, "Input")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        let record = FieldNameRecord::parse("mesh.create");
        assert_eq!(record, FieldNameRecord::new("mesh", "create"));
        assert!(record.is_canonical());
        assert_eq!(record.field_name(), "mesh.create");
    }

    #[test]
    fn splits_on_first_delimiter_only() {
        let record = FieldNameRecord::parse("mesh.create.extra");
        assert_eq!(record.domain, "mesh");
        assert_eq!(record.operation, "create.extra");
    }

    #[test]
    fn legacy_name_has_empty_domain() {
        let record = FieldNameRecord::parse("createObject");
        assert!(!record.is_canonical());
        assert_eq!(record.operation, "createObject");
    }

    #[test]
    fn derives_type_names() {
        assert_eq!(create_result_type_name("object", "create"), "ObjectCreateResult");
        assert_eq!(create_input_type_name("vrm", "export"), "VrmExportInput");
        assert_eq!(
            create_type_name("geometry_node_group", "create", "Result"),
            "GeometryNodeGroupCreateResult"
        );
    }
}
