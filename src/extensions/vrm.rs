//! VRM template and export schema extension

use log::info;
use serde_json::json;

use crate::schema::registry::SchemaRegistry;
use crate::schema::types::{
    FieldArgument, FieldKind, RegisteredType, SchemaField, SchemaResult, TypeRef,
};

use super::base::operation_result_type;

pub fn register_vrm_schema(registry: &mut SchemaRegistry) -> SchemaResult<()> {
    if !registry.register_component("vrm") {
        return Ok(());
    }

    registry.register_type(
        "VrmTemplateType",
        RegisteredType::enumeration("VrmTemplateType")
            .with_value("HUMANOID", "Standard humanoid")
            .with_value("FANTASY_HUMANOID", "Fantasy-styled human")
            .with_value("FANTASY_ELF", "Elf with long ears and a slender build")
            .with_value("FANTASY_DWARF", "Dwarf with a stocky build")
            .with_value("SCIFI_HUMANOID", "Futuristic human")
            .with_value("SCIFI_ROBOT", "Mechanical robot")
            .with_value("SCIFI_CYBORG", "Human-machine hybrid")
            .with_description("Base template for a VRM model"),
    );

    registry.register_type(
        "VrmExportOptionsInput",
        RegisteredType::input("VrmExportOptionsInput")
            .with_field(
                SchemaField::new("includeBlendShapes", FieldKind::ObjectField, TypeRef::boolean())
                    .with_description("Include blend shapes in the export"),
            )
            .with_field(
                SchemaField::new("optimizeMesh", FieldKind::ObjectField, TypeRef::boolean())
                    .with_description("Optimize meshes before export"),
            )
            .with_field(
                SchemaField::new("exportTextures", FieldKind::ObjectField, TypeRef::boolean()),
            )
            .with_field(
                SchemaField::new("exportPhysics", FieldKind::ObjectField, TypeRef::boolean()),
            ),
    );

    registry.register_type(
        "VrmTemplateResult",
        operation_result_type("VrmTemplateResult").with_field(
            SchemaField::new("objectName", FieldKind::ObjectField, TypeRef::string())
                .with_description("Name of the generated model object"),
        ),
    );

    registry.register_type(
        "VrmExportResult",
        operation_result_type("VrmExportResult").with_field(
            SchemaField::new("filePath", FieldKind::ObjectField, TypeRef::string())
                .with_description("Path of the exported file"),
        ),
    );

    let template_type = registry.named_ref("VrmTemplateType")?;
    let template_result = registry.named_ref("VrmTemplateResult")?;
    let export_options = registry.named_ref("VrmExportOptionsInput")?;
    let export_result = registry.named_ref("VrmExportResult")?;

    registry.register_mutation(
        "vrm.applyTemplate",
        SchemaField::new("vrm.applyTemplate", FieldKind::Mutation, template_result)
            .with_argument(FieldArgument::required("templateType", template_type))
            .with_argument(
                FieldArgument::new("name", TypeRef::string())
                    .with_description("Model name, generated when omitted"),
            )
            .with_description("Generate a model from a VRM template")
            .with_resolver("resolve_apply_vrm_template"),
    );

    registry.register_mutation(
        "vrm.export",
        SchemaField::new("vrm.export", FieldKind::Mutation, export_result)
            .with_argument(FieldArgument::required("filePath", TypeRef::string()))
            .with_argument(
                FieldArgument::new("options", export_options)
                    .with_default(json!(null))
                    .with_description("Export options, defaults applied when omitted"),
            )
            .with_description("Export the current model as VRM")
            .with_resolver("resolve_export_vrm"),
    );

    info!("VRM schema registered");
    Ok(())
}
