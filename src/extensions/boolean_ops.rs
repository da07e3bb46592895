//! Boolean operation schema extension

use log::info;
use serde_json::json;

use crate::schema::registry::SchemaRegistry;
use crate::schema::types::{
    FieldArgument, FieldKind, RegisteredType, SchemaField, SchemaResult, TypeRef,
};

use super::base::operation_result_type;

pub fn register_boolean_schema(registry: &mut SchemaRegistry) -> SchemaResult<()> {
    if !registry.register_component("boolean_ops") {
        return Ok(());
    }

    registry.register_type(
        "BooleanOperation",
        RegisteredType::enumeration("BooleanOperation")
            .with_value("UNION", "Join both meshes")
            .with_value("DIFFERENCE", "Subtract the tool from the target")
            .with_value("INTERSECT", "Keep only the overlap")
            .with_description("Kind of boolean operation"),
    );

    registry.register_type(
        "BooleanSolver",
        RegisteredType::enumeration("BooleanSolver")
            .with_value("FAST", "Fast solver, lower precision")
            .with_value("EXACT", "Exact solver, slower but precise")
            .with_description("Solver backing a boolean operation"),
    );

    registry.register_type(
        "BooleanOperationResult",
        operation_result_type("BooleanOperationResult")
            .with_field(SchemaField::new("status", FieldKind::ObjectField, TypeRef::string()))
            .with_field(
                SchemaField::new("targetObject", FieldKind::ObjectField, TypeRef::string())
                    .with_description("Name of the target object"),
            )
            .with_field(
                SchemaField::new("toolObject", FieldKind::ObjectField, TypeRef::string())
                    .with_description("Name of the tool object"),
            )
            .with_field(SchemaField::new("operation", FieldKind::ObjectField, TypeRef::string()))
            .with_field(SchemaField::new("solver", FieldKind::ObjectField, TypeRef::string()))
            .with_field(
                SchemaField::new("issues", FieldKind::ObjectField, TypeRef::list(TypeRef::string()))
                    .with_description("Problems encountered during the operation"),
            ),
    );

    let result = registry.named_ref("BooleanOperationResult")?;
    let operation = registry.named_ref("BooleanOperation")?;
    let solver = registry.named_ref("BooleanSolver")?;

    registry.register_mutation(
        "boolean.operation",
        SchemaField::new("boolean.operation", FieldKind::Mutation, result.clone())
            .with_argument(FieldArgument::required("targetObject", TypeRef::string()))
            .with_argument(FieldArgument::required("toolObject", TypeRef::string()))
            .with_argument(FieldArgument::required("operation", operation.clone()))
            .with_argument(
                FieldArgument::new("autoRepair", TypeRef::boolean())
                    .with_default(json!(true))
                    .with_description("Repair the mesh before operating"),
            )
            .with_argument(
                FieldArgument::new("validateResult", TypeRef::boolean())
                    .with_default(json!(true))
                    .with_description("Validate the mesh afterwards"),
            )
            .with_argument(
                FieldArgument::new("deleteTool", TypeRef::boolean())
                    .with_default(json!(false))
                    .with_description("Remove the tool object afterwards"),
            )
            .with_argument(
                FieldArgument::new("solver", solver.clone()).with_default(json!("EXACT")),
            )
            .with_description("Run a boolean operation between two meshes")
            .with_resolver("resolve_boolean_operation"),
    );

    registry.register_mutation(
        "boolean.enhancedOperation",
        SchemaField::new("boolean.enhancedOperation", FieldKind::Mutation, result)
            .with_argument(FieldArgument::required("targetObject", TypeRef::string()))
            .with_argument(FieldArgument::required("toolObject", TypeRef::string()))
            .with_argument(FieldArgument::required("operation", operation))
            .with_argument(FieldArgument::new("solver", solver).with_default(json!("EXACT")))
            .with_description("Boolean operation with automatic repair and error recovery")
            .with_resolver("resolve_enhanced_boolean_operation"),
    );

    info!("Boolean schema registered");
    Ok(())
}
