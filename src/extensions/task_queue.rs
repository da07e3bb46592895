//! Task queue schema extension
//!
//! Unlike the registry-backed extensions this one contributes its
//! fields to an already assembled snapshot: it accumulates into a local
//! registry and merges, so the task surface can be switched on after
//! the core schema is frozen. Its result types reference the base
//! `Error` type resolved from the target schema during the merge.

use log::info;
use serde_json::json;

use crate::schema::registry::{MergeOutcome, SchemaRegistry};
use crate::schema::types::{
    FieldArgument, FieldKind, RegisteredType, SchemaField, SchemaResult, SchemaSnapshot, TypeRef,
};

use super::base::operation_result_type;

/// Extend an assembled schema with the task queue types and fields.
pub fn extend_schema_with_task_queue(schema: &SchemaSnapshot) -> SchemaResult<MergeOutcome> {
    let mut registry = SchemaRegistry::new();
    register_task_queue_schema(&mut registry)?;
    Ok(schema.merge_registry(&registry))
}

pub fn register_task_queue_schema(registry: &mut SchemaRegistry) -> SchemaResult<()> {
    if !registry.register_component("task_queue") {
        return Ok(());
    }

    registry.register_type(
        "TaskStatus",
        RegisteredType::enumeration("TaskStatus")
            .with_value("PENDING", "Waiting for a worker")
            .with_value("RUNNING", "Currently executing")
            .with_value("COMPLETED", "Finished successfully")
            .with_value("FAILED", "Finished with an error")
            .with_value("CANCELLED", "Cancelled before completion"),
    );

    let status = registry.named_ref("TaskStatus")?;
    registry.register_type(
        "Task",
        RegisteredType::object("Task")
            .with_field(SchemaField::new("id", FieldKind::ObjectField, TypeRef::id()))
            .with_field(SchemaField::new("name", FieldKind::ObjectField, TypeRef::string()))
            .with_field(SchemaField::new("taskType", FieldKind::ObjectField, TypeRef::string()))
            .with_field(SchemaField::new("status", FieldKind::ObjectField, status.clone()))
            .with_field(SchemaField::new("priority", FieldKind::ObjectField, TypeRef::int()))
            .with_field(
                SchemaField::new("progress", FieldKind::ObjectField, TypeRef::float())
                    .with_description("Progress in the range 0.0-1.0"),
            )
            .with_field(SchemaField::new("message", FieldKind::ObjectField, TypeRef::string()))
            .with_field(
                SchemaField::new("result", FieldKind::ObjectField, TypeRef::string())
                    .with_description("Task result as a JSON string"),
            )
            .with_field(SchemaField::new("error", FieldKind::ObjectField, TypeRef::string())),
    );

    let task = registry.named_ref("Task")?;
    registry.register_type(
        "TaskQueueInfo",
        RegisteredType::object("TaskQueueInfo")
            .with_field(SchemaField::new("running", FieldKind::ObjectField, TypeRef::boolean()))
            .with_field(SchemaField::new("workerCount", FieldKind::ObjectField, TypeRef::int()))
            .with_field(SchemaField::new("pendingTasks", FieldKind::ObjectField, TypeRef::int()))
            .with_field(SchemaField::new("runningTasks", FieldKind::ObjectField, TypeRef::int()))
            .with_field(SchemaField::new("completedTasks", FieldKind::ObjectField, TypeRef::int()))
            .with_field(SchemaField::new("failedTasks", FieldKind::ObjectField, TypeRef::int()))
            .with_field(SchemaField::new("tasks", FieldKind::ObjectField, TypeRef::list(task.clone()))),
    );

    registry.register_type(
        "CreateTaskResult",
        operation_result_type("CreateTaskResult")
            .with_field(SchemaField::new("taskId", FieldKind::ObjectField, TypeRef::id()))
            .with_field(SchemaField::new("task", FieldKind::ObjectField, task.clone())),
    );

    registry.register_type(
        "CancelTaskResult",
        operation_result_type("CancelTaskResult")
            .with_field(SchemaField::new("task", FieldKind::ObjectField, task.clone())),
    );

    registry.register_type(
        "ClearTasksResult",
        operation_result_type("ClearTasksResult").with_field(
            SchemaField::new("clearedCount", FieldKind::ObjectField, TypeRef::int())
                .with_description("Number of tasks removed"),
        ),
    );

    registry.register_query(
        "task",
        SchemaField::new("task", FieldKind::Query, task.clone())
            .with_argument(FieldArgument::required("id", TypeRef::id()))
            .with_description("One task by id")
            .with_resolver("resolve_task"),
    );

    registry.register_query(
        "allTasks",
        SchemaField::new("allTasks", FieldKind::Query, TypeRef::list(task))
            .with_argument(
                FieldArgument::new("status", TypeRef::list(status))
                    .with_description("Restrict to the given states"),
            )
            .with_description("All tasks in the queue")
            .with_resolver("resolve_all_tasks"),
    );

    let queue_info = registry.named_ref("TaskQueueInfo")?;
    registry.register_query(
        "taskQueueInfo",
        SchemaField::new("taskQueueInfo", FieldKind::Query, queue_info)
            .with_description("Queue counters and worker state")
            .with_resolver("resolve_task_queue_info"),
    );

    let create_result = registry.named_ref("CreateTaskResult")?;
    let cancel_result = registry.named_ref("CancelTaskResult")?;
    let clear_result = registry.named_ref("ClearTasksResult")?;

    registry.register_mutation(
        "createTask",
        SchemaField::new("createTask", FieldKind::Mutation, create_result)
            .with_argument(FieldArgument::required("taskType", TypeRef::string()))
            .with_argument(
                FieldArgument::new("paramsJson", TypeRef::string())
                    .with_description("Task parameters as a JSON string"),
            )
            .with_argument(FieldArgument::new("name", TypeRef::string()))
            .with_argument(FieldArgument::new("priority", TypeRef::int()).with_default(json!(0)))
            .with_description("Queue a new task")
            .with_resolver("resolve_create_task"),
    );

    registry.register_mutation(
        "cancelTask",
        SchemaField::new("cancelTask", FieldKind::Mutation, cancel_result)
            .with_argument(FieldArgument::required("taskId", TypeRef::id()))
            .with_description("Cancel a queued or running task")
            .with_resolver("resolve_cancel_task"),
    );

    registry.register_mutation(
        "clearTasks",
        SchemaField::new("clearTasks", FieldKind::Mutation, clear_result)
            .with_argument(
                FieldArgument::new("maxAgeSeconds", TypeRef::int())
                    .with_default(json!(0))
                    .with_description("Only clear tasks older than this"),
            )
            .with_description("Remove finished tasks from the queue")
            .with_resolver("resolve_clear_tasks"),
    );

    info!("Task queue schema registered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extensions::base::register_base_schema;

    fn base_snapshot() -> SchemaSnapshot {
        let mut registry = SchemaRegistry::new();
        register_base_schema(&mut registry).unwrap();
        registry.build_snapshot().unwrap()
    }

    #[test]
    fn merge_adds_task_fields_without_collisions() {
        let outcome = extend_schema_with_task_queue(&base_snapshot()).unwrap();
        assert!(outcome.collisions.is_empty());
        assert!(outcome.schema.mutation_fields().contains_key("createTask"));
        assert!(outcome.schema.query_fields().contains_key("taskQueueInfo"));
        assert!(outcome.schema.get_type("TaskStatus").is_some());
        // base types are still present in the merged snapshot
        assert!(outcome.schema.get_type("Error").is_some());
    }

    #[test]
    fn merging_twice_reports_collisions_and_keeps_first() {
        let once = extend_schema_with_task_queue(&base_snapshot()).unwrap();
        let twice = extend_schema_with_task_queue(&once.schema).unwrap();
        assert!(!twice.collisions.is_empty());
        assert!(twice.collisions.contains(&"Mutation.createTask".to_string()));
        assert_eq!(
            twice.schema.mutation_fields().len(),
            once.schema.mutation_fields().len()
        );
    }
}
