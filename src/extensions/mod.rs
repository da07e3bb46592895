//! Domain schema extensions and the build orchestrator
//!
//! Each extension contributes a closed set of types and fields to a
//! `SchemaRegistry`, guarded by a component marker so repeated loading
//! is harmless. `build_schema` runs them all in dependency order,
//! freezes the snapshot and merges in the task queue surface.

use log::{info, warn};

use crate::resolver::ResolverTable;
use crate::schema::registry::SchemaRegistry;
use crate::schema::types::{SchemaResult, SchemaSnapshot};

pub mod addon;
pub mod base;
pub mod boolean_ops;
pub mod mesh;
pub mod task_queue;
pub mod vrm;

/// Run every registry-backed extension against the given registry.
pub fn register_all(registry: &mut SchemaRegistry) -> SchemaResult<()> {
    base::register_base_schema(registry)?;
    mesh::register_mesh_schema(registry)?;
    boolean_ops::register_boolean_schema(registry)?;
    addon::register_addon_schema(registry)?;
    vrm::register_vrm_schema(registry)?;
    Ok(())
}

/// Assemble the full schema: all registry extensions, then the
/// merge-style task queue extension on top of the frozen snapshot.
pub fn build_schema() -> SchemaResult<SchemaSnapshot> {
    let mut registry = SchemaRegistry::new();
    register_all(&mut registry)?;
    let snapshot = registry.build_snapshot()?;

    let outcome = task_queue::extend_schema_with_task_queue(&snapshot)?;
    for collision in &outcome.collisions {
        warn!("Task queue extension collided with {}", collision);
    }

    info!("Schema assembly complete");
    Ok(outcome.schema)
}

/// The resolver surface of the designated scene resolver module: every
/// callable the extensions bind by name.
pub fn resolver_table() -> ResolverTable {
    let mut table = ResolverTable::new("scene_resolver");
    for name in [
        // mesh
        "resolve_mesh_data",
        "resolve_create_mesh",
        "resolve_edit_mesh_vertices",
        // boolean
        "resolve_boolean_operation",
        "resolve_enhanced_boolean_operation",
        // addon
        "get_addon_info",
        "get_all_addons",
        "check_addon_updates",
        "enable_addon",
        "disable_addon",
        "install_addon",
        "install_addon_from_url",
        "update_addon",
        // vrm
        "resolve_apply_vrm_template",
        "resolve_export_vrm",
        // task queue
        "resolve_task",
        "resolve_all_tasks",
        "resolve_task_queue_info",
        "resolve_create_task",
        "resolve_cancel_task",
        "resolve_clear_tasks",
    ] {
        table.insert(name);
    }
    table
}
