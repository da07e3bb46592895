//! Mesh domain schema extension
//!
//! Geometry data types plus the mesh query and mutation surface, wired
//! to the scene resolver module.

use log::info;

use crate::schema::registry::SchemaRegistry;
use crate::schema::types::{
    FieldArgument, FieldKind, RegisteredType, SchemaField, SchemaResult, TypeRef,
};

use super::base::operation_result_type;

pub fn register_mesh_schema(registry: &mut SchemaRegistry) -> SchemaResult<()> {
    if !registry.register_component("mesh") {
        return Ok(());
    }

    registry.register_type(
        "Vertex",
        RegisteredType::object("Vertex")
            .with_field(SchemaField::new("x", FieldKind::ObjectField, TypeRef::float()))
            .with_field(SchemaField::new("y", FieldKind::ObjectField, TypeRef::float()))
            .with_field(SchemaField::new("z", FieldKind::ObjectField, TypeRef::float())),
    );

    registry.register_type(
        "Edge",
        RegisteredType::object("Edge").with_field(
            SchemaField::new("vertices", FieldKind::ObjectField, TypeRef::list(TypeRef::int()))
                .with_description("Indices of the two endpoint vertices"),
        ),
    );

    registry.register_type(
        "Face",
        RegisteredType::object("Face").with_field(
            SchemaField::new("vertices", FieldKind::ObjectField, TypeRef::list(TypeRef::int()))
                .with_description("Indices of the vertices forming the face"),
        ),
    );

    let vertex = registry.named_ref("Vertex")?;
    let edge = registry.named_ref("Edge")?;
    let face = registry.named_ref("Face")?;

    registry.register_type(
        "MeshData",
        RegisteredType::object("MeshData")
            .with_field(SchemaField::new("name", FieldKind::ObjectField, TypeRef::string()))
            .with_field(
                SchemaField::new("vertices", FieldKind::ObjectField, TypeRef::list(vertex)),
            )
            .with_field(SchemaField::new("edges", FieldKind::ObjectField, TypeRef::list(edge)))
            .with_field(SchemaField::new("faces", FieldKind::ObjectField, TypeRef::list(face)))
            .with_field(SchemaField::new("vertexCount", FieldKind::ObjectField, TypeRef::int()))
            .with_field(SchemaField::new("faceCount", FieldKind::ObjectField, TypeRef::int())),
    );

    let mesh_data = registry.named_ref("MeshData")?;
    registry.register_type(
        "MeshOperationResult",
        operation_result_type("MeshOperationResult")
            .with_field(
                SchemaField::new("objectName", FieldKind::ObjectField, TypeRef::string())
                    .with_description("Name of the affected object"),
            )
            .with_field(
                SchemaField::new("mesh", FieldKind::ObjectField, mesh_data.clone())
                    .with_description("Mesh data after the operation"),
            ),
    );

    registry.register_query(
        "meshData",
        SchemaField::new("meshData", FieldKind::Query, mesh_data)
            .with_argument(
                FieldArgument::required("name", TypeRef::string()).with_description("Mesh name"),
            )
            .with_description("Detailed data for a named mesh")
            .with_resolver("resolve_mesh_data"),
    );

    let mesh_result = registry.named_ref("MeshOperationResult")?;
    let vector3_input = registry.named_ref("Vector3Input")?;

    registry.register_mutation(
        "mesh.create",
        SchemaField::new("mesh.create", FieldKind::Mutation, mesh_result.clone())
            .with_argument(
                FieldArgument::new("name", TypeRef::string())
                    .with_description("Mesh name, generated when omitted"),
            )
            .with_argument(
                FieldArgument::new("primitiveType", TypeRef::string())
                    .with_description("Primitive to start from (cube, sphere, plane, ...)"),
            )
            .with_argument(
                FieldArgument::new("location", vector3_input.clone())
                    .with_description("Initial placement in the scene"),
            )
            .with_description("Create a new mesh")
            .with_resolver("resolve_create_mesh"),
    );

    // legacy spelling kept callable for older clients
    registry.register_mutation(
        "createMesh",
        SchemaField::new("createMesh", FieldKind::Mutation, mesh_result.clone())
            .with_argument(FieldArgument::new("name", TypeRef::string()))
            .with_argument(FieldArgument::new("primitiveType", TypeRef::string()))
            .with_argument(FieldArgument::new("location", vector3_input.clone()))
            .with_deprecation(
                "This field is deprecated. Use `mesh.create` instead.",
                "mesh.create",
            )
            .with_resolver("resolve_create_mesh"),
    );

    registry.register_mutation(
        "mesh.editVertices",
        SchemaField::new("mesh.editVertices", FieldKind::Mutation, mesh_result)
            .with_argument(FieldArgument::required("name", TypeRef::string()))
            .with_argument(
                FieldArgument::required("vertices", TypeRef::list(vector3_input))
                    .with_description("Replacement vertex coordinates"),
            )
            .with_description("Edit the vertices of a mesh")
            .with_resolver("resolve_edit_mesh_vertices"),
    );

    info!("Mesh schema registered");
    Ok(())
}
