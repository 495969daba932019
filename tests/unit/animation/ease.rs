use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn out_of_range_progress_is_clamped() {
    assert_eq!(Ease::OutQuart.apply(-1.0), 0.0);
    assert_eq!(Ease::OutQuart.apply(2.0), 1.0);
}

#[test]
fn parses_dotted_curve_names() {
    assert_eq!("power3.out".parse::<Ease>().unwrap(), Ease::OutQuart);
    assert_eq!("power2.out".parse::<Ease>().unwrap(), Ease::OutCubic);
    assert_eq!("power4.out".parse::<Ease>().unwrap(), Ease::OutQuint);
    assert_eq!("sine.in".parse::<Ease>().unwrap(), Ease::InSine);
    assert_eq!("power1.inOut".parse::<Ease>().unwrap(), Ease::InOutQuad);
    assert_eq!("none".parse::<Ease>().unwrap(), Ease::Linear);
    assert_eq!("power2".parse::<Ease>().unwrap(), Ease::OutCubic);
}

#[test]
fn rejects_unknown_names() {
    assert!("elastic.out".parse::<Ease>().is_err());
    assert!("power3.sideways".parse::<Ease>().is_err());
}
