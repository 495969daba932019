use super::*;

fn ids(n: u32) -> Vec<ElementId> {
    (0..n).map(ElementId).collect()
}

#[test]
fn offset_grammar_parses() {
    assert_eq!("-=1".parse::<StartOffset>().unwrap(), StartOffset::AfterEnd(-1.0));
    assert_eq!("+=.3".parse::<StartOffset>().unwrap(), StartOffset::AfterEnd(0.3));
    assert_eq!("<".parse::<StartOffset>().unwrap(), StartOffset::WithPrevious(0.0));
    assert_eq!("<0.2".parse::<StartOffset>().unwrap(), StartOffset::WithPrevious(0.2));
    assert_eq!("2.5".parse::<StartOffset>().unwrap(), StartOffset::At(2.5));
    assert!("".parse::<StartOffset>().is_err());
    assert!("-=abc".parse::<StartOffset>().is_err());
}

#[test]
fn offset_display_round_trips_through_parse() {
    for s in ["-=0.8", "+=0.5", "<", "<0.25", "3"] {
        let parsed: StartOffset = s.parse().unwrap();
        assert_eq!(parsed.to_string().parse::<StartOffset>().unwrap(), parsed);
    }
}

#[test]
fn builder_applies_timeline_defaults() {
    let spec = TimelineSpec::builder()
        .defaults(1.2, Ease::OutQuart)
        .step(StepBuilder::new(ElementId(0)).tween(Property::Y, 100.0, 0.0))
        .step(
            StepBuilder::new(ElementId(1))
                .tween(Property::Opacity, 0.0, 1.0)
                .duration(0.4)
                .ease(Ease::Linear),
        )
        .build()
        .unwrap();

    assert_eq!(spec.steps().len(), 2);
    assert_eq!(spec.steps()[0].duration, 1.2);
    assert_eq!(spec.steps()[0].ease, Ease::OutQuart);
    assert_eq!(spec.steps()[1].duration, 0.4);
    assert_eq!(spec.steps()[1].ease, Ease::Linear);
}

#[test]
fn stagger_requires_collection() {
    let err = TimelineSpec::builder()
        .step(
            StepBuilder::new(ElementId(0))
                .tween(Property::Y, 1.0, 0.0)
                .stagger(0.1),
        )
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("collection"));

    TimelineSpec::builder()
        .step(
            StepBuilder::new(ids(3))
                .tween(Property::Y, 1.0, 0.0)
                .stagger(0.1),
        )
        .build()
        .unwrap();
}

#[test]
fn negative_duration_is_rejected() {
    let err = TimelineSpec::builder()
        .step(
            StepBuilder::new(ElementId(0))
                .tween(Property::X, 0.0, 1.0)
                .duration(-0.1),
        )
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("step 0"));
}

#[test]
fn empty_and_duplicate_tweens_are_rejected() {
    assert!(
        TimelineSpec::builder()
            .step(StepBuilder::new(ElementId(0)))
            .build()
            .is_err()
    );
    assert!(
        TimelineSpec::builder()
            .step(
                StepBuilder::new(ElementId(0))
                    .tween(Property::X, 0.0, 1.0)
                    .tween(Property::X, 1.0, 2.0)
            )
            .build()
            .is_err()
    );
    assert!(
        TimelineSpec::builder()
            .step(StepBuilder::new(ElementId(0)).tween(Property::X, f64::NAN, 1.0))
            .build()
            .is_err()
    );
}

#[test]
fn target_ids_view() {
    assert_eq!(Target::from(ElementId(4)).ids(), &[ElementId(4)]);
    assert_eq!(Target::from(ids(2)).ids(), &[ElementId(0), ElementId(1)]);
    assert!(!Target::from(ElementId(4)).is_collection());
}
