use super::*;

fn vp() -> Viewport {
    Viewport::new(1280.0, 720.0).unwrap()
}

fn sample(scroll_y: f64, resized: bool) -> ScrollSample {
    ScrollSample {
        scroll_y,
        viewport: vp(),
        resized,
    }
}

#[test]
fn entrance_lands_every_card_at_rest() {
    let mut stage = Stage::new();
    let card = stage.mount("card", Rect::ZERO);
    let mut tl = entrance(card, (-100.0, 0.0)).unwrap();
    assert_eq!(tl.total_duration(), 2.0);

    tl.seek(0.0, &mut stage);
    assert_eq!(stage.get(card, Property::X), Some(-100.0));
    assert_eq!(stage.get(card, Property::Opacity), Some(0.0));

    tl.seek(1.0, &mut stage);
    assert_eq!(stage.get(card, Property::X), Some(0.0));
    assert_eq!(stage.get(card, Property::Y), Some(0.0));
    assert_eq!(stage.get(card, Property::Opacity), Some(1.0));
}

#[test]
fn cards_mount_hidden_at_their_offsets() {
    let mut stage = Stage::new();
    let hub = EventHub::new();
    let s = Services::mount(&mut stage, &hub).unwrap();
    assert_eq!(s.cards().len(), SERVICES.len());
    assert_eq!(s.binder().len(), SERVICES.len());
    for (&card, svc) in s.cards().iter().zip(&SERVICES) {
        assert_eq!(stage.get(card, Property::Opacity), Some(0.0));
        assert_eq!(stage.get(card, Property::X), Some(svc.enter_from.0));
        assert_eq!(stage.get(card, Property::Y), Some(svc.enter_from.1));
    }
}

#[test]
fn unset_direction_falls_back_to_rising() {
    let mut stage = Stage::new();
    let hub = EventHub::new();
    let card = ServiceCard {
        enter_from: (0.0, 0.0),
        ..SERVICES[0]
    };
    let s = Services::mount_cards(&mut stage, &hub, &[card]).unwrap();
    assert_eq!(stage.get(s.cards()[0], Property::Y), Some(SERVICE_FALLBACK_FROM.1));
}

#[test]
fn grid_layout_honors_column_spans() {
    let mut stage = Stage::new();
    let hub = EventHub::new();
    let mut s = Services::mount(&mut stage, &hub).unwrap();
    let h = s.layout(0.0, vp(), &mut stage);
    let r: Vec<Rect> = s.cards().iter().map(|&c| stage.layout(c).unwrap()).collect();

    assert_eq!(r[0].y0, r[1].y0);
    assert!(r[0].width() > r[1].width());
    assert_eq!(r[2].y0, r[3].y0);
    assert!(r[2].y0 > r[0].y0);
    assert!(r[4].y0 > r[3].y0);
    assert!((r[4].width() - (1280.0 - 2.0 * 96.0)).abs() < 1e-9);
    assert!(h > r[4].y1);

    let narrow = Viewport::new(400.0, 800.0).unwrap();
    let h_narrow = s.layout(0.0, narrow, &mut stage);
    assert!(h_narrow > h);
    let x0: Vec<f64> = s.cards().iter().map(|&c| stage.layout(c).unwrap().x0).collect();
    assert!(x0.iter().all(|&x| x == x0[0]));
}

#[test]
fn scroll_plays_then_reverses_the_first_row() {
    let mut stage = Stage::new();
    let hub = EventHub::new();
    let mut s = Services::mount(&mut stage, &hub).unwrap();
    s.layout(2000.0, vp(), &mut stage);
    let first = s.cards()[0];
    let third = s.cards()[2];

    s.scroll(&sample(0.0, true), &mut stage);
    s.advance(1.0, &mut stage);
    assert_eq!(stage.get(first, Property::Opacity), Some(0.0));

    // card0 top sits at 2256; "top 75%" is reached at 2256 - 540.
    s.scroll(&sample(1800.0, false), &mut stage);
    assert!(s.entrance_of(0).unwrap().is_playing());
    assert!(!s.entrance_of(2).unwrap().is_playing());
    s.advance(2.0, &mut stage);
    assert_eq!(stage.get(first, Property::Opacity), Some(1.0));
    assert_eq!(stage.get(first, Property::Y), Some(0.0));
    assert_eq!(stage.get(third, Property::Opacity), Some(0.0));

    s.scroll(&sample(0.0, false), &mut stage);
    s.advance(2.0, &mut stage);
    assert_eq!(stage.get(first, Property::Opacity), Some(0.0));
    assert_eq!(stage.get(first, Property::Y), Some(-100.0));
}

#[test]
fn unmount_releases_everything() {
    let mut stage = Stage::new();
    let hub = EventHub::new();
    let mut s = Services::mount(&mut stage, &hub).unwrap();
    s.unmount(&mut stage);
    assert!(stage.is_empty());
    assert_eq!(hub.count(ListenerKind::Scroll), 0);
    assert!(s.binder().is_empty());
}
