use scenefold::extensions;
use scenefold::{
    validate_schema, FieldKind, RegisteredType, ResolverTable, SchemaField, SchemaRegistry,
    TypeRef,
};

#[test]
fn assembled_schema_is_valid_against_the_designated_resolver_module() {
    let _ = env_logger::builder().is_test(true).try_init();

    let schema = extensions::build_schema().unwrap();
    let report = validate_schema(&schema, &extensions::resolver_table());

    assert!(report.valid, "unexpected findings: {:?}", report.missing_resolvers);
    assert!(report.missing_resolvers.is_empty());
}

#[test]
fn removing_one_resolver_is_detected_but_not_fatal_to_the_audit() {
    let schema = extensions::build_schema().unwrap();

    let mut table = ResolverTable::new("scene_resolver");
    for name in ["resolve_create_mesh", "resolve_edit_mesh_vertices"] {
        table.insert(name);
    }

    let report = validate_schema(&schema, &table);
    assert!(!report.valid);
    assert!(report.missing_resolvers.contains(&"Query.meshData".to_string()));
    assert!(report.missing_resolvers.contains(&"Mutation.enableAddon".to_string()));
    assert!(!report.missing_resolvers.contains(&"Mutation.mesh.create".to_string()));
}

#[test]
fn result_type_without_message_yields_exactly_one_shape_finding() {
    let mut registry = SchemaRegistry::new();
    registry.register_type(
        "BooleanOperationResult",
        RegisteredType::object("BooleanOperationResult")
            .with_field(SchemaField::new("success", FieldKind::ObjectField, TypeRef::boolean()))
            .with_field(SchemaField::new("status", FieldKind::ObjectField, TypeRef::string())),
    );
    let schema = registry.build_snapshot().unwrap();

    let report = validate_schema(&schema, &ResolverTable::new("scene_resolver"));
    assert_eq!(report.type_issues.len(), 1);
    assert!(report.type_issues[0].contains("BooleanOperationResult"));
}

#[test]
fn a_fault_in_one_check_leaves_the_other_findings_intact() {
    let mut registry = SchemaRegistry::new();
    // shape fault: a Result type with no fields at all
    registry.register_type("BrokenResult", RegisteredType::object("BrokenResult"));
    // naming fault: a snake_case type name
    registry.register_type("mesh_data", RegisteredType::object("mesh_data"));
    // duplicate-intent fault: overlapping operation tokens, neither resolvable
    registry.register_mutation(
        "mesh.create",
        SchemaField::new("mesh.create", FieldKind::Mutation, TypeRef::string()),
    );
    registry.register_mutation(
        "mesh.createFromTemplate",
        SchemaField::new("mesh.createFromTemplate", FieldKind::Mutation, TypeRef::string()),
    );
    let schema = registry.build_snapshot().unwrap();

    let report = validate_schema(&schema, &ResolverTable::new("scene_resolver"));

    // every check contributed its findings despite the faults in the others
    assert_eq!(
        report.missing_resolvers,
        vec!["Mutation.mesh.create", "Mutation.mesh.createFromTemplate"]
    );
    assert!(report.naming_issues.iter().any(|issue| issue.contains("mesh_data")));
    assert_eq!(
        report.potential_duplicates,
        vec!["similar operations: mesh.create / mesh.createFromTemplate"]
    );
    assert!(report.type_issues.iter().any(|issue| issue.contains("BrokenResult")));
}

#[test]
fn enum_result_types_are_exempt_from_the_shape_check() {
    let mut registry = SchemaRegistry::new();
    registry.register_type(
        "ExportResultKind",
        RegisteredType::enumeration("ExportResultKind")
            .with_value("SAVED", "Written to disk")
            .with_value("SKIPPED", "Nothing to export"),
    );
    let schema = registry.build_snapshot().unwrap();
    let report = validate_schema(&schema, &ResolverTable::new("scene_resolver"));
    assert!(report.type_issues.is_empty());
}

#[test]
fn report_serializes_for_build_tooling() {
    let schema = extensions::build_schema().unwrap();
    let report = validate_schema(&schema, &extensions::resolver_table());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["valid"], serde_json::json!(true));
    assert!(json["missing_resolvers"].as_array().unwrap().is_empty());
}
