use super::*;

#[test]
fn defaults_are_rest_values() {
    let p = VisualProps::default();
    for prop in Property::ALL {
        assert_eq!(p.get(prop), prop.rest_value());
    }
}

#[test]
fn opacity_writes_are_clamped() {
    let mut p = VisualProps::default();
    p.set(Property::Opacity, 1.4);
    assert_eq!(p.opacity, 1.0);
    p.set(Property::Opacity, -0.2);
    assert_eq!(p.opacity, 0.0);
    p.set(Property::Y, -100.0);
    assert_eq!(p.get(Property::Y), -100.0);
}

#[test]
fn tween_rejects_non_finite_ends() {
    assert!(Tween::new(0.0, f64::INFINITY).is_err());
    assert!(Tween::new(f64::NAN, 1.0).is_err());
    let t = Tween::new(100.0, 0.0).unwrap();
    assert_eq!(t.at(0.0), 100.0);
    assert_eq!(t.at(1.0), 0.0);
    assert_eq!(t.at(0.5), 50.0);
}

#[test]
fn property_names_serialize_snake_case() {
    assert_eq!(serde_json::to_string(&Property::Opacity).unwrap(), "\"opacity\"");
}
