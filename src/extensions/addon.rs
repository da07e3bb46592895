//! Add-on management schema extension
//!
//! The mutation surface predates the `domain.operation` convention and
//! keeps its legacy camelCase names (`enableAddon`, `installAddon`, ...)
//! for existing consumers; the migration planner derives their
//! canonical replacements.

use log::info;

use crate::schema::registry::SchemaRegistry;
use crate::schema::types::{
    FieldArgument, FieldKind, RegisteredType, SchemaField, SchemaResult, TypeRef,
};

pub fn register_addon_schema(registry: &mut SchemaRegistry) -> SchemaResult<()> {
    if !registry.register_component("addon") {
        return Ok(());
    }

    registry.register_type(
        "AddonInfo",
        RegisteredType::object("AddonInfo")
            .with_field(SchemaField::new("name", FieldKind::ObjectField, TypeRef::string()))
            .with_field(SchemaField::new("isEnabled", FieldKind::ObjectField, TypeRef::boolean()))
            .with_field(SchemaField::new("description", FieldKind::ObjectField, TypeRef::string()))
            .with_field(SchemaField::new("author", FieldKind::ObjectField, TypeRef::string()))
            .with_field(SchemaField::new("version", FieldKind::ObjectField, TypeRef::string()))
            .with_field(SchemaField::new("category", FieldKind::ObjectField, TypeRef::string()))
            .with_field(
                SchemaField::new("blenderVersion", FieldKind::ObjectField, TypeRef::string())
                    .with_description("Minimum supported host version"),
            ),
    );

    registry.register_type(
        "AddonStatus",
        RegisteredType::object("AddonStatus")
            .with_field(SchemaField::new("status", FieldKind::ObjectField, TypeRef::string()))
            .with_field(SchemaField::new("message", FieldKind::ObjectField, TypeRef::string()))
            .with_field(SchemaField::new("addonName", FieldKind::ObjectField, TypeRef::string()))
            .with_field(SchemaField::new("isEnabled", FieldKind::ObjectField, TypeRef::boolean())),
    );

    registry.register_type(
        "AddonUpdateInfo",
        RegisteredType::object("AddonUpdateInfo")
            .with_field(SchemaField::new("name", FieldKind::ObjectField, TypeRef::string()))
            .with_field(SchemaField::new("currentVersion", FieldKind::ObjectField, TypeRef::string()))
            .with_field(
                SchemaField::new("availableVersion", FieldKind::ObjectField, TypeRef::string()),
            )
            .with_field(SchemaField::new("hasUpdate", FieldKind::ObjectField, TypeRef::boolean())),
    );

    let addon_info = registry.named_ref("AddonInfo")?;
    let addon_status = registry.named_ref("AddonStatus")?;
    let update_info = registry.named_ref("AddonUpdateInfo")?;

    registry.register_query(
        "addonInfo",
        SchemaField::new("addonInfo", FieldKind::Query, addon_info.clone())
            .with_argument(FieldArgument::required("addonName", TypeRef::string()))
            .with_description("Information about one add-on")
            .with_resolver("get_addon_info"),
    );

    registry.register_query(
        "allAddons",
        SchemaField::new("allAddons", FieldKind::Query, TypeRef::list(addon_info))
            .with_description("All add-ons known to the host")
            .with_resolver("get_all_addons"),
    );

    registry.register_query(
        "addonUpdates",
        SchemaField::new("addonUpdates", FieldKind::Query, TypeRef::list(update_info))
            .with_description("Add-ons with an update available")
            .with_resolver("check_addon_updates"),
    );

    registry.register_mutation(
        "enableAddon",
        SchemaField::new("enableAddon", FieldKind::Mutation, addon_status.clone())
            .with_argument(FieldArgument::required("addonName", TypeRef::string()))
            .with_description("Enable an add-on")
            .with_resolver("enable_addon"),
    );

    registry.register_mutation(
        "disableAddon",
        SchemaField::new("disableAddon", FieldKind::Mutation, addon_status.clone())
            .with_argument(FieldArgument::required("addonName", TypeRef::string()))
            .with_description("Disable an add-on")
            .with_resolver("disable_addon"),
    );

    registry.register_mutation(
        "installAddon",
        SchemaField::new("installAddon", FieldKind::Mutation, addon_status.clone())
            .with_argument(
                FieldArgument::required("filePath", TypeRef::string())
                    .with_description("Path to the add-on archive"),
            )
            .with_description("Install an add-on from a file")
            .with_resolver("install_addon"),
    );

    registry.register_mutation(
        "installAddonFromUrl",
        SchemaField::new("installAddonFromUrl", FieldKind::Mutation, addon_status.clone())
            .with_argument(FieldArgument::required("url", TypeRef::string()))
            .with_description("Install an add-on from a URL")
            .with_resolver("install_addon_from_url"),
    );

    registry.register_mutation(
        "updateAddon",
        SchemaField::new("updateAddon", FieldKind::Mutation, addon_status)
            .with_argument(FieldArgument::required("addonName", TypeRef::string()))
            .with_description("Update an installed add-on")
            .with_resolver("update_addon"),
    );

    info!("Addon schema registered");
    Ok(())
}
