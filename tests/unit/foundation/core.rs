use super::*;

#[test]
fn viewport_rejects_negative_and_non_finite() {
    assert!(Viewport::new(-1.0, 10.0).is_err());
    assert!(Viewport::new(10.0, f64::NAN).is_err());
    assert!(Viewport::new(0.0, 0.0).unwrap().is_degenerate());
    assert_eq!(
        Viewport::new(1440.0, 900.0).unwrap().center(),
        Point::new(720.0, 450.0)
    );
}

#[test]
fn hex_unpacks_channels() {
    let c = Rgba8::from_hex(0xd9ff00, 204);
    assert_eq!((c.r, c.g, c.b, c.a), (0xd9, 0xff, 0x00, 204));
}

#[test]
fn hsla_primaries() {
    assert_eq!(
        Rgba8::from_hsla(0.0, 1.0, 0.5, 1.0),
        Rgba8 {
            r: 255,
            g: 0,
            b: 0,
            a: 255
        }
    );
    assert_eq!(Rgba8::from_hsla(120.0, 1.0, 0.5, 0.0).g, 255);
    let greenish = Rgba8::from_hsla(70.0, 1.0, 0.5, 0.5);
    assert!(greenish.g == 255 && greenish.r > 150 && greenish.b == 0);
}

#[test]
fn clamp01_maps_nan_to_zero() {
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(-3.0), 0.0);
    assert_eq!(clamp01(3.0), 1.0);
    assert_eq!(clamp01(0.25), 0.25);
}
