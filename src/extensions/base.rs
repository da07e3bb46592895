//! Base schema types shared by every domain extension
//!
//! Registers the error model, the common operation-result shape and the
//! shared input types, and provides the helper other extensions use to
//! manufacture their own result types on top of the base fields.

use log::info;

use crate::schema::registry::SchemaRegistry;
use crate::schema::types::{
    FieldKind, RegisteredType, SchemaField, SchemaResult, TypeRef,
};

/// Build an operation-result object type carrying the base
/// `success`/`message`/`error`/`executionTimeMs` fields.
///
/// Extensions add their own fields on top with `with_field`.
pub fn operation_result_type<S: Into<String>>(name: S) -> RegisteredType {
    RegisteredType::object(name)
        .with_field(
            SchemaField::new("success", FieldKind::ObjectField, TypeRef::non_null(TypeRef::boolean()))
                .with_description("Whether the operation succeeded"),
        )
        .with_field(
            SchemaField::new("message", FieldKind::ObjectField, TypeRef::string())
                .with_description("Result message"),
        )
        .with_field(
            SchemaField::new("error", FieldKind::ObjectField, TypeRef::named("Error"))
                .with_description("Error details, present on failure"),
        )
        .with_field(
            SchemaField::new("executionTimeMs", FieldKind::ObjectField, TypeRef::float())
                .with_description("Execution time in milliseconds"),
        )
}

/// Register the base error and result types plus the shared inputs.
pub fn register_base_schema(registry: &mut SchemaRegistry) -> SchemaResult<()> {
    if !registry.register_component("base") {
        return Ok(());
    }

    registry.register_type(
        "ErrorCategory",
        RegisteredType::enumeration("ErrorCategory")
            .with_value("USER_INPUT", "Input validation failed")
            .with_value("PERMISSION", "Caller lacks permission")
            .with_value("RESOURCE_NOT_FOUND", "A referenced resource does not exist")
            .with_value("SYSTEM", "Internal system error")
            .with_value("OPERATION_FAILED", "The operation ran but failed")
            .with_description("Category of a reported error"),
    );

    registry.register_type(
        "Error",
        RegisteredType::object("Error")
            .with_field(
                SchemaField::new("code", FieldKind::ObjectField, TypeRef::non_null(TypeRef::string()))
                    .with_description("Machine-readable error code"),
            )
            .with_field(
                SchemaField::new("message", FieldKind::ObjectField, TypeRef::non_null(TypeRef::string()))
                    .with_description("Human-readable error message"),
            )
            .with_field(
                SchemaField::new("category", FieldKind::ObjectField, TypeRef::named("ErrorCategory"))
                    .with_description("Error category"),
            )
            .with_field(
                SchemaField::new("details", FieldKind::ObjectField, TypeRef::string())
                    .with_description("Additional error detail"),
            )
            .with_field(
                SchemaField::new("path", FieldKind::ObjectField, TypeRef::list(TypeRef::string()))
                    .with_description("Path to where the error occurred"),
            )
            .with_field(
                SchemaField::new("suggestions", FieldKind::ObjectField, TypeRef::list(TypeRef::string()))
                    .with_description("Suggested fixes"),
            ),
    );

    registry.register_type("BasicOperationResult", operation_result_type("BasicOperationResult"));

    registry.register_type(
        "Vector3Input",
        RegisteredType::input("Vector3Input")
            .with_field(SchemaField::new("x", FieldKind::ObjectField, TypeRef::float()))
            .with_field(SchemaField::new("y", FieldKind::ObjectField, TypeRef::float()))
            .with_field(SchemaField::new("z", FieldKind::ObjectField, TypeRef::float()))
            .with_description("3D coordinate input"),
    );

    registry.register_type(
        "ColorInput",
        RegisteredType::input("ColorInput")
            .with_field(SchemaField::new("r", FieldKind::ObjectField, TypeRef::float()))
            .with_field(SchemaField::new("g", FieldKind::ObjectField, TypeRef::float()))
            .with_field(SchemaField::new("b", FieldKind::ObjectField, TypeRef::float()))
            .with_field(SchemaField::new("a", FieldKind::ObjectField, TypeRef::float()))
            .with_description("RGBA color input, each component 0.0-1.0"),
    );

    info!("Base schema types registered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_registration_is_idempotent() {
        let mut registry = SchemaRegistry::new();
        register_base_schema(&mut registry).unwrap();
        let type_count = registry.types().len();
        register_base_schema(&mut registry).unwrap();
        assert_eq!(registry.types().len(), type_count);
    }

    #[test]
    fn result_helper_carries_base_fields() {
        let result = operation_result_type("MeshOperationResult");
        assert!(result.has_field("success"));
        assert!(result.has_field("message"));
        assert!(result.has_field("error"));
        assert!(result.has_field("executionTimeMs"));
    }
}
