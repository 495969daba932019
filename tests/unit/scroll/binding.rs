use super::*;

fn vp(w: f64, h: f64) -> Viewport {
    Viewport::new(w, h).unwrap()
}

#[test]
fn anchors_parse() {
    assert_eq!("top".parse::<Anchor>().unwrap(), Anchor::Fraction(0.0));
    assert_eq!("center".parse::<Anchor>().unwrap(), Anchor::Fraction(0.5));
    assert_eq!("bottom".parse::<Anchor>().unwrap(), Anchor::Fraction(1.0));
    assert_eq!("75%".parse::<Anchor>().unwrap(), Anchor::Fraction(0.75));
    assert_eq!("120px".parse::<Anchor>().unwrap(), Anchor::Pixels(120.0));
    assert_eq!("40".parse::<Anchor>().unwrap(), Anchor::Pixels(40.0));
    assert!("middle".parse::<Anchor>().is_err());
}

#[test]
fn trigger_point_needs_two_parts() {
    assert!("top".parse::<TriggerPoint>().is_err());
    assert!("top top top".parse::<TriggerPoint>().is_err());
    let tp: TriggerPoint = "top 75%".parse().unwrap();
    assert_eq!(tp.element, Anchor::Fraction(0.0));
    assert_eq!(tp.viewport, Anchor::Fraction(0.75));
}

#[test]
fn end_point_parses_distance_and_trigger() {
    assert_eq!("+=2000".parse::<EndPoint>().unwrap(), EndPoint::Distance(2000.0));
    assert!(matches!(
        "bottom 20%".parse::<EndPoint>().unwrap(),
        EndPoint::Trigger(_)
    ));
    assert!("+=-5".parse::<EndPoint>().is_err());
}

#[test]
fn toggle_actions_parse_in_order() {
    let t: ToggleActions = "play none none reverse".parse().unwrap();
    assert_eq!(t, ToggleActions::default());
    let t: ToggleActions = "restart complete reset none".parse().unwrap();
    assert_eq!(t.on_enter, Action::Restart);
    assert_eq!(t.on_leave, Action::Complete);
    assert_eq!(t.on_enter_back, Action::Reset);
    assert_eq!(t.on_leave_back, Action::None);
    assert!("play none".parse::<ToggleActions>().is_err());
}

#[test]
fn span_maps_region_edges_to_scroll_offsets() {
    let region = Rect::new(0.0, 2000.0, 1000.0, 2400.0);
    let b = ScrollBinding::parse("top 75%", "bottom 20%").unwrap();
    let span = b.span(region, vp(1000.0, 800.0));
    assert_eq!(span.start, 2000.0 - 600.0);
    assert_eq!(span.end, 2400.0 - 160.0);

    assert_eq!(span.progress(0.0), 0.0);
    assert_eq!(span.progress(span.start), 0.0);
    assert_eq!(span.progress(span.end), 1.0);
    assert_eq!(span.progress(1e9), 1.0);
    let mid = (span.start + span.end) / 2.0;
    assert!((span.progress(mid) - 0.5).abs() < 1e-12);
}

#[test]
fn distance_end_is_relative_to_start() {
    let region = Rect::new(0.0, 900.0, 1000.0, 1800.0);
    let b = ScrollBinding::parse("top top", "+=2000").unwrap();
    let span = b.span(region, vp(1000.0, 900.0));
    assert_eq!(span.start, 900.0);
    assert_eq!(span.end, 2900.0);
}

#[test]
fn zero_height_region_is_a_step() {
    let region = Rect::new(0.0, 500.0, 100.0, 500.0);
    let b = ScrollBinding::new("top top".parse().unwrap(), EndPoint::default());
    let span = b.span(region, vp(100.0, 100.0));
    assert!(span.is_empty());
    assert_eq!(span.progress(499.9), 0.0);
    assert_eq!(span.progress(500.0), 1.0);
}

#[test]
fn media_gate() {
    let b = ScrollBinding::parse("top top", "bottom bottom")
        .unwrap()
        .min_viewport_width(1024.0);
    assert!(b.applies_to(vp(1440.0, 900.0)));
    assert!(!b.applies_to(vp(800.0, 900.0)));
    assert!(ScrollBinding::parse("top top", "+=1").unwrap().applies_to(vp(1.0, 1.0)));
}
