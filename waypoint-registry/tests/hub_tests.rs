mod common;

use common::{book_instance, Book};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use waypoint_registry::{Registry, RegistryError, RegistryHub};

#[test]
fn unknown_type_is_registry_not_found() {
    let hub = RegistryHub::new();
    let err = hub.get("library", &["book"], &[]).unwrap_err();
    assert!(matches!(err, RegistryError::RegistryNotFound(_)));
    assert!(format!("{err}").contains("library"));
}

#[test]
fn created_registries_are_linked_back_to_the_hub() {
    let hub = RegistryHub::new();
    let registry = hub.create_registry("library");

    assert_eq!(registry.type_name(), "library");
    let owner = registry.hub().expect("hub link set");
    assert!(Arc::ptr_eq(&owner, &hub));
}

#[test]
fn get_routes_to_the_registry_and_propagates_its_result() {
    let hub = RegistryHub::new();
    let registry = hub.create_registry("library");
    let instance = book_instance(&["prod"]);
    registry.register(Arc::clone(&instance)).unwrap();

    // Success routes through unchanged.
    let via_hub = hub.get("library", &["book"], &["prod"]).unwrap();
    assert_eq!(via_hub.coordinate(), instance.coordinate());

    // Registry-level failures propagate unchanged too.
    let err = hub.get("library", &["magazine"], &[]).unwrap_err();
    assert!(matches!(err, RegistryError::InstanceNotFound { .. }));
}

#[test]
fn typed_lookup_routes_through_the_hub() {
    let hub = RegistryHub::new();
    let registry = hub.create_registry("library");
    registry.register(book_instance(&[])).unwrap();

    let typed = hub.get_instance::<Book>("library", &["book"], &[]).unwrap();
    assert_eq!(typed.coordinate().kta().primary_type(), "book");
}

#[test]
fn reregistering_a_type_name_overwrites_the_registry() {
    let hub = RegistryHub::new();
    let older = Registry::new("library");
    let newer = Registry::new("library");

    hub.register_registry(Arc::clone(&older));
    hub.register_registry(Arc::clone(&newer));

    let resolved = hub.registry("library").unwrap();
    assert!(Arc::ptr_eq(&resolved, &newer));
    assert_eq!(hub.types(), vec!["library"]);
}

#[test]
fn all_coordinates_aggregates_across_registries() {
    let hub = RegistryHub::new();
    hub.create_registry("library")
        .register(book_instance(&["prod"]))
        .unwrap();
    hub.create_registry("archive")
        .register(book_instance(&[]))
        .unwrap();

    let all = hub.all_coordinates();
    assert_eq!(all.len(), 2);
    assert_eq!(all["library"].len(), 1);
    assert_eq!(all["archive"].len(), 1);
    assert_eq!(all["library"][0].scopes(), ["prod"]);
}

#[test]
fn types_lists_every_registered_name() {
    let hub = RegistryHub::new();
    hub.create_registry("library");
    hub.create_registry("archive");

    let mut types = hub.types();
    types.sort_unstable();
    assert_eq!(types, vec!["archive", "library"]);
}
