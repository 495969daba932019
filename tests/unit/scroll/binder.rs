use super::*;
use crate::animation::{ease::Ease, property::Property};
use crate::foundation::core::Rect;
use crate::scroll::binding::EndPoint;
use crate::timeline::{
    runnable::Scheduler,
    spec::{StepBuilder, TimelineSpec},
};

fn vp() -> Viewport {
    Viewport::new(1000.0, 800.0).unwrap()
}

fn sample(scroll_y: f64) -> ScrollSample {
    ScrollSample {
        scroll_y,
        viewport: vp(),
        resized: false,
    }
}

fn fade(id: ElementId) -> RunnableTimeline {
    Scheduler::build(
        &TimelineSpec::builder()
            .step(
                StepBuilder::new(id)
                    .tween(Property::Opacity, 0.0, 1.0)
                    .duration(1.0)
                    .ease(Ease::Linear),
            )
            .build()
            .unwrap(),
    )
}

#[test]
fn pinned_region_holds_still_then_rejoins_flow_without_jump() {
    let mut stage = Stage::new();
    let y = 1200.0;
    let h = 600.0;
    let region = stage.mount("pinned", Rect::new(0.0, y, 1000.0, y + h));

    let mut binder = ScrollBinder::new();
    let binding = ScrollBinding::new("top top".parse().unwrap(), EndPoint::default())
        .pin(PinTarget::Trigger);
    binder.bind(region, binding, Driver::Notify, &mut stage).unwrap();

    let mut prev = None;
    let mut scroll = y - 100.0;
    while scroll <= y + h + 100.0 {
        binder.update(&sample(scroll), &mut stage);
        let top = stage.viewport_top(region, scroll).unwrap();
        if (y..=y + h).contains(&scroll) {
            assert_eq!(top, 0.0, "scroll {scroll}");
        }
        if let Some(p) = prev {
            // Moves at most one step per step of scroll; never jumps.
            assert!(top <= p && p - top <= 10.0 + 1e-9, "jump at {scroll}: {p} -> {top}");
        }
        prev = Some(top);
        scroll += 10.0;
    }
    assert!(matches!(
        stage.pin(region),
        Some(PinState::Released { spacing }) if spacing == h
    ));
}

#[test]
fn toggle_fires_once_per_direction_change() {
    let mut stage = Stage::new();
    let card = stage.mount("card", Rect::new(0.0, 2000.0, 1000.0, 2400.0));
    let mut binder = ScrollBinder::new();
    let id = binder.bind(
        card,
        ScrollBinding::parse("top 75%", "bottom 20%").unwrap(),
        Driver::Timeline(fade(card)),
        &mut stage,
    )
    .unwrap();
    assert_eq!(stage.get(card, Property::Opacity), Some(0.0));

    assert!(binder.update(&sample(0.0), &mut stage).is_empty());

    let n = binder.update(&sample(1500.0), &mut stage);
    assert_eq!(n.len(), 1);
    assert_eq!(n[0].event, TriggerEvent::Enter);
    assert!(binder.timeline(id).unwrap().is_playing());

    // Staying inside fires nothing.
    assert!(binder.update(&sample(1550.0), &mut stage).is_empty());

    for _ in 0..10 {
        binder.advance(0.2, &mut stage);
    }
    assert_eq!(stage.get(card, Property::Opacity), Some(1.0));

    let n = binder.update(&sample(0.0), &mut stage);
    assert_eq!(n.len(), 1);
    assert_eq!(n[0].event, TriggerEvent::LeaveBack);
    let tl = binder.timeline(id).unwrap();
    assert!(tl.is_playing());
    assert_eq!(tl.direction(), crate::timeline::runnable::Direction::Reverse);
    assert!(binder.update(&sample(10.0), &mut stage).is_empty());
}

#[test]
fn jumping_past_the_end_reports_enter_then_leave() {
    let mut stage = Stage::new();
    let r = stage.mount("r", Rect::new(0.0, 1000.0, 1000.0, 1200.0));
    let mut binder = ScrollBinder::new();
    binder.bind(
        r,
        ScrollBinding::parse("top center", "bottom center").unwrap(),
        Driver::Notify,
        &mut stage,
    )
    .unwrap();
    let events: Vec<_> = binder
        .update(&sample(5000.0), &mut stage)
        .iter()
        .map(|n| n.event)
        .collect();
    assert_eq!(events, vec![TriggerEvent::Enter, TriggerEvent::Leave]);

    let events: Vec<_> = binder
        .update(&sample(700.0), &mut stage)
        .iter()
        .map(|n| n.event)
        .collect();
    assert_eq!(events, vec![TriggerEvent::EnterBack]);
}

#[test]
fn scrub_seeks_every_update() {
    let mut stage = Stage::new();
    let r = stage.mount("r", Rect::new(0.0, 0.0, 1000.0, 800.0));
    let mut binder = ScrollBinder::new();
    let id = binder.bind(
        r,
        ScrollBinding::parse("top top", "+=1000").unwrap().scrub(true),
        Driver::Timeline(fade(r)),
        &mut stage,
    )
    .unwrap();
    binder.update(&sample(250.0), &mut stage);
    assert_eq!(binder.progress(id), Some(0.25));
    assert_eq!(stage.get(r, Property::Opacity), Some(0.25));
    binder.update(&sample(100.0), &mut stage);
    assert_eq!(stage.get(r, Property::Opacity), Some(0.1));
    assert!(!binder.timeline(id).unwrap().is_playing());
}

#[test]
fn resize_remeasures_bounds() {
    let mut stage = Stage::new();
    let r = stage.mount("r", Rect::new(0.0, 1000.0, 1000.0, 1400.0));
    let mut binder = ScrollBinder::new();
    let id = binder.bind(
        r,
        ScrollBinding::parse("top bottom", "bottom top").unwrap(),
        Driver::Notify,
        &mut stage,
    )
    .unwrap();
    binder.update(&sample(0.0), &mut stage);
    assert_eq!(binder.span(id).unwrap().start, 200.0);

    stage.set_layout(r, Rect::new(0.0, 3000.0, 1000.0, 3400.0));
    binder.update(&sample(0.0), &mut stage);
    assert_eq!(binder.span(id).unwrap().start, 200.0);

    let resized = ScrollSample {
        scroll_y: 0.0,
        viewport: Viewport::new(1000.0, 600.0).unwrap(),
        resized: true,
    };
    binder.update(&resized, &mut stage);
    assert_eq!(binder.span(id).unwrap().start, 2400.0);
}

#[test]
fn missing_region_is_skipped_and_media_gate_releases_pin() {
    let mut stage = Stage::new();
    let gone = stage.mount("gone", Rect::new(0.0, 0.0, 10.0, 10.0));
    let section = stage.mount("section", Rect::new(0.0, 0.0, 1000.0, 3000.0));
    let panel = stage.mount("panel", Rect::new(0.0, 0.0, 500.0, 800.0));
    let mut binder = ScrollBinder::new();
    binder
        .bind(gone, ScrollBinding::parse("top top", "+=10").unwrap(), Driver::Notify, &mut stage)
        .unwrap();
    binder.bind(
        section,
        ScrollBinding::parse("top top", "bottom bottom")
            .unwrap()
            .pin(PinTarget::Element(panel))
            .min_viewport_width(1024.0),
        Driver::Notify,
        &mut stage,
    )
    .unwrap();
    stage.unmount(gone);

    let wide = ScrollSample {
        scroll_y: 500.0,
        viewport: Viewport::new(1440.0, 800.0).unwrap(),
        resized: true,
    };
    binder.update(&wide, &mut stage);
    assert_eq!(stage.pin(panel), Some(PinState::Pinned { viewport_top: 0.0 }));

    let narrow = ScrollSample {
        scroll_y: 500.0,
        viewport: Viewport::new(800.0, 800.0).unwrap(),
        resized: true,
    };
    binder.update(&narrow, &mut stage);
    assert_eq!(stage.pin(panel), Some(PinState::Flow));

    binder.release(&mut stage);
    assert!(binder.is_empty());
}

#[test]
fn binding_an_unmounted_region_is_a_scroll_error() {
    let mut stage = Stage::new();
    let r = stage.mount("r", Rect::new(0.0, 0.0, 10.0, 10.0));
    stage.unmount(r);
    let mut binder = ScrollBinder::new();
    let err = binder
        .bind(r, ScrollBinding::parse("top top", "+=10").unwrap(), Driver::Notify, &mut stage)
        .unwrap_err();
    assert!(err.to_string().starts_with("scroll error:"));
    assert!(binder.is_empty());
}
