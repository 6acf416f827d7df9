use pretty_assertions::assert_eq;
use waypoint_model::{Coordinate, CoordinateError, TypeHierarchy, MAX_HIERARCHY_DEPTH};

#[test]
fn hierarchy_rejects_empty() {
    let result = TypeHierarchy::try_new(Vec::<String>::new());
    assert_eq!(result.unwrap_err(), CoordinateError::EmptyHierarchy);
}

#[test]
fn hierarchy_rejects_more_than_six_levels() {
    let parts = ["a", "b", "c", "d", "e", "f", "g"];
    let result = TypeHierarchy::try_new(parts);
    assert_eq!(result.unwrap_err(), CoordinateError::TooDeep(7));
}

#[test]
fn hierarchy_accepts_one_through_six_levels() {
    let names = ["a", "b", "c", "d", "e", "f"];
    for depth in 1..=MAX_HIERARCHY_DEPTH {
        let kta = TypeHierarchy::try_new(names[..depth].iter().copied()).unwrap();
        assert_eq!(kta.depth(), depth);
    }
}

#[test]
fn single_name_normalizes_to_one_element_hierarchy() {
    // Coordinate::primary("x") is the single-string form of try_new(&["x"], ..).
    assert_eq!(
        Coordinate::primary("book"),
        Coordinate::try_new(&["book"], &[]).unwrap()
    );
}

#[test]
fn hierarchy_accessors() {
    let kta = TypeHierarchy::try_new(["book", "shelf", "library"]).unwrap();
    assert_eq!(kta.primary_type(), "book");
    assert_eq!(kta.parts(), ["book", "shelf", "library"]);
    assert_eq!(kta.depth(), 3);
}

#[test]
fn hierarchy_matching_is_exact() {
    let kta = TypeHierarchy::try_new(["book", "shelf"]).unwrap();
    assert!(kta.matches(&["book", "shelf"]));
    assert!(!kta.matches(&["book"]));
    assert!(!kta.matches(&["shelf", "book"]));
    assert!(!kta.matches(&["book", "shelf", "library"]));
}

#[test]
fn display_joins_hierarchy_and_scopes_around_separator() {
    let coordinate = Coordinate::try_new(&["book", "shelf"], &["prod", "eu"]).unwrap();
    assert_eq!(coordinate.to_string(), "book, shelf - prod, eu");
}

#[test]
fn display_with_empty_scopes_has_trailing_empty_string() {
    let coordinate = Coordinate::primary("book");
    assert_eq!(coordinate.to_string(), "book - ");
}

#[test]
fn scope_superset_matching() {
    let coordinate = Coordinate::try_new(&["book"], &["prod", "eu"]).unwrap();
    assert!(coordinate.scopes_superset_of(&[]));
    assert!(coordinate.scopes_superset_of(&["prod"]));
    assert!(coordinate.scopes_superset_of(&["eu", "prod"]));
    assert!(!coordinate.scopes_superset_of(&["prod", "us"]));
}

#[test]
fn unscoped_coordinate_covers_only_the_empty_request() {
    let coordinate = Coordinate::primary("book");
    assert!(coordinate.scopes_superset_of(&[]));
    assert!(!coordinate.scopes_superset_of(&["prod"]));
}

#[test]
fn scope_set_equality_ignores_order_and_duplicates() {
    let a = Coordinate::try_new(&["book"], &["prod", "eu"]).unwrap();
    let b = Coordinate::try_new(&["book"], &["eu", "prod", "eu"]).unwrap();
    let c = Coordinate::try_new(&["book"], &["eu"]).unwrap();
    assert!(a.same_scope_set(&b));
    assert!(!a.same_scope_set(&c));
}

#[test]
fn serde_round_trip() {
    let coordinate = Coordinate::try_new(&["book", "shelf"], &["prod"]).unwrap();
    let json = serde_json::to_string(&coordinate).unwrap();
    let back: Coordinate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, coordinate);
}

#[test]
fn serde_rejects_empty_hierarchy() {
    let result: Result<TypeHierarchy, _> = serde_json::from_str("[]");
    assert!(result.is_err());
}

#[test]
fn serde_rejects_oversized_hierarchy() {
    let json = r#"["a","b","c","d","e","f","g"]"#;
    let result: Result<TypeHierarchy, _> = serde_json::from_str(json);
    assert!(result.is_err());
}
