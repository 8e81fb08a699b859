use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgba8 = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Rgba8::opaque(255, 0, 0));

    let c: Rgba8 = serde_json::from_value(json!("0000FF80")).unwrap();
    assert_eq!(c, Rgba8::new(0, 0, 255, 128));
}

#[test]
fn parses_object_with_default_alpha() {
    let c: Rgba8 = serde_json::from_value(json!({"r": 1, "g": 2, "b": 3})).unwrap();
    assert_eq!(c, Rgba8::opaque(1, 2, 3));

    let c: Rgba8 = serde_json::from_value(json!({"r": 1, "g": 2, "b": 3, "a": 0})).unwrap();
    assert_eq!(c.a, 0);
}

#[test]
fn parses_arrays() {
    let c: Rgba8 = serde_json::from_value(json!([10, 20, 30])).unwrap();
    assert_eq!(c, Rgba8::opaque(10, 20, 30));

    let c: Rgba8 = serde_json::from_value(json!([10, 20, 30, 40])).unwrap();
    assert_eq!(c, Rgba8::new(10, 20, 30, 40));
}

#[test]
fn rejects_malformed_colors() {
    assert!(serde_json::from_value::<Rgba8>(json!("#fff")).is_err());
    assert!(serde_json::from_value::<Rgba8>(json!("#gg0000")).is_err());
    assert!(serde_json::from_value::<Rgba8>(json!([1, 2])).is_err());
    assert!(serde_json::from_value::<Rgba8>(json!([1, 2, 300])).is_err());
}

#[test]
fn serialized_object_form_round_trips() {
    let c = Rgba8::new(9, 8, 7, 6);
    let v = serde_json::to_value(c).unwrap();
    assert_eq!(v, json!({"r": 9, "g": 8, "b": 7, "a": 6}));
    assert_eq!(serde_json::from_value::<Rgba8>(v).unwrap(), c);
}
