use waypoint_registry::{OperationsError, RegistryError};

#[test]
fn validation_error_names_the_operation_and_coordinate() {
    let err = OperationsError::Validation {
        op: "create",
        coordinate: "book - prod".into(),
    };
    let msg = format!("{err}");
    assert!(msg.contains("create rejected"));
    assert!(msg.contains("book - prod"));
}

#[test]
fn dispatch_errors_name_the_missing_entry() {
    let err = OperationsError::FinderNotFound {
        name: "by_title".into(),
        coordinate: "book - ".into(),
    };
    assert!(format!("{err}").contains("'by_title'"));

    let err = OperationsError::ActionNotFound {
        name: "archive".into(),
        coordinate: "book - ".into(),
    };
    assert!(format!("{err}").contains("'archive'"));

    let err = OperationsError::FacetNotFound {
        name: "stats".into(),
        coordinate: "book - ".into(),
    };
    assert!(format!("{err}").contains("'stats'"));
}

#[test]
fn backend_errors_are_transparent() {
    let err: OperationsError = anyhow::anyhow!("disk on fire").into();
    assert_eq!(format!("{err}"), "disk on fire");
}

#[test]
fn lookup_errors_carry_the_request_context() {
    let err = RegistryError::InstanceNotFound {
        registry: "library".into(),
        kta: "book, shelf".into(),
        scopes: "prod".into(),
    };
    let msg = format!("{err}");
    assert!(msg.contains("library"));
    assert!(msg.contains("book, shelf"));
    assert!(msg.contains("prod"));
}

#[test]
fn ambiguous_match_reports_the_candidate_count() {
    let err = RegistryError::AmbiguousMatch {
        registry: "library".into(),
        kta: "book".into(),
        scopes: String::new(),
        count: 3,
    };
    let msg = format!("{err}");
    assert!(msg.contains('3'));
    assert!(msg.contains("more specific scopes"));
}

#[test]
fn registry_not_found_names_the_type() {
    let err = RegistryError::RegistryNotFound("warehouse".into());
    assert!(format!("{err}").contains("warehouse"));
}
