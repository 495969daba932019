use super::*;
use crate::render::scene::SceneRef;

fn config(accelerated: bool) -> PageConfig {
    let mut cfg = PageConfig::default();
    cfg.particles.count = 40;
    cfg.globe.node_count = 20;
    cfg.accelerated_graphics = accelerated;
    cfg
}

fn viewport() -> Viewport {
    Viewport::new(1440.0, 900.0).unwrap()
}

fn settle(hero: &mut Hero, stage: &mut Stage) {
    for _ in 0..1000 {
        hero.advance(1.0 / 60.0, stage);
        if !hero.controller().is_transitioning() {
            return;
        }
    }
    panic!("hero never settled");
}

#[test]
fn intro_runs_once_then_settles_on_first_slide() {
    let mut stage = Stage::new();
    let hub = EventHub::new();
    let mut hero = Hero::mount(&mut stage, &hub, &config(true), viewport()).unwrap();
    let (top, _) = hero.titles();
    assert_eq!(hero.phase(), SlidePhase::Intro);
    assert_eq!(stage.get(top, Property::Opacity), Some(0.0));
    assert_eq!(stage.get(hero.button(), Property::Scale), Some(0.8));
    assert_eq!(hero.select(2).unwrap(), RequestOutcome::Busy);

    settle(&mut hero, &mut stage);
    assert_eq!(hero.phase(), SlidePhase::Idle(0));
    assert_eq!(stage.get(top, Property::Opacity), Some(1.0));
    assert_eq!(stage.get(hero.button(), Property::Scale), Some(1.0));
    assert_eq!(hero.last_events(), &[SlideEvent::Settled(0)]);
}

#[test]
fn swap_changes_copy_and_background_scene() {
    let mut stage = Stage::new();
    let hub = EventHub::new();
    let mut hero = Hero::mount(&mut stage, &hub, &config(true), viewport()).unwrap();
    settle(&mut hero, &mut stage);
    assert_eq!(
        hero.scene().map(|s| s.scene()),
        Some(SceneRef::ParticleField { hue: 70.0 })
    );

    assert_eq!(hero.select(1).unwrap(), RequestOutcome::Started);
    settle(&mut hero, &mut stage);
    let (top, bottom) = hero.titles();
    assert_eq!(stage.text(top), Some("GLOBAL"));
    assert_eq!(stage.text(bottom), Some("OPERATIONS"));
    assert_eq!(
        hero.scene().map(|s| s.scene()),
        Some(SceneRef::Globe { tilt_lock: true })
    );
    assert!(hero.render(1.0 / 60.0) > 0);
}

#[test]
fn unavailable_globe_degrades_to_static_backdrop() {
    let mut stage = Stage::new();
    let hub = EventHub::new();
    let mut cfg = config(false);
    cfg.hero.intro = false;
    let mut hero = Hero::mount(&mut stage, &hub, &cfg, viewport()).unwrap();
    assert_eq!(hero.phase(), SlidePhase::Idle(0));

    hero.select(1).unwrap();
    settle(&mut hero, &mut stage);
    assert!(hero.scene().is_none());
    assert_eq!(hero.render(1.0 / 60.0), 0);
    let (top, _) = hero.titles();
    assert_eq!(stage.get(top, Property::Opacity), Some(1.0));

    hero.select(2).unwrap();
    settle(&mut hero, &mut stage);
    assert!(hero.scene().is_some());
}

#[test]
fn layout_fills_one_viewport() {
    let mut stage = Stage::new();
    let hub = EventHub::new();
    let mut hero = Hero::mount(&mut stage, &hub, &config(true), viewport()).unwrap();
    assert_eq!(hero.layout(0.0, viewport(), &mut stage), 900.0);
    let (top, bottom) = hero.titles();
    let a = stage.layout(top).unwrap();
    let b = stage.layout(bottom).unwrap();
    assert!(b.y0 > a.y1);
    assert!(b.x0 > a.x0);

    hero.unmount(&mut stage);
    assert!(stage.is_empty());
    assert_eq!(hub.total(), 0);
}
