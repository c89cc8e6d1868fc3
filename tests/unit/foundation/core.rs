use super::*;

#[test]
fn orientation_uses_original_aspect() {
    assert_eq!(
        Orientation::from_dimensions(4000.0, 2000.0),
        Orientation::Landscape
    );
    assert_eq!(
        Orientation::from_dimensions(2000.0, 4000.0),
        Orientation::Portrait
    );
    assert_eq!(
        Orientation::from_dimensions(100.0, 100.0),
        Orientation::Landscape
    );
    assert!(Orientation::from_dimensions(1.0, 2.0).is_portrait());
}

#[test]
fn orientation_serializes_snake_case() {
    let s = serde_json::to_string(&Orientation::Portrait).unwrap();
    assert_eq!(s, "\"portrait\"");
}

