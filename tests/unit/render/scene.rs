use std::{cell::Cell, rc::Rc};

use super::*;

fn vp() -> Viewport {
    Viewport::new(800.0, 600.0).unwrap()
}

#[derive(Debug)]
struct Probe {
    disposed: Rc<Cell<u32>>,
    target: Rc<Cell<(f64, f64)>>,
    mounted: bool,
    ops: Vec<DrawOp>,
}

impl SceneRenderer for Probe {
    fn mount(&mut self, _surface: &RenderSurface) -> StagecraftResult<()> {
        self.mounted = true;
        Ok(())
    }
    fn set_pointer_target(&mut self, x: f64, y: f64) {
        self.target.set((x, y));
    }
    fn resize(&mut self, _width: f64, _height: f64) {}
    fn render_frame(&mut self, _dt: f64) -> &[DrawOp] {
        &self.ops
    }
    fn dispose(&mut self) {
        self.mounted = false;
        self.disposed.set(self.disposed.get() + 1);
    }
    fn is_mounted(&self) -> bool {
        self.mounted
    }
}

fn probe() -> (Box<Probe>, Rc<Cell<u32>>, Rc<Cell<(f64, f64)>>) {
    let disposed = Rc::new(Cell::new(0));
    let target = Rc::new(Cell::new((9.0, 9.0)));
    let p = Box::new(Probe {
        disposed: disposed.clone(),
        target: target.clone(),
        mounted: false,
        ops: Vec::new(),
    });
    (p, disposed, target)
}

#[test]
fn normalize_maps_corners_to_ndc() {
    let e = PointerEvent::new(0.0, 0.0, vp());
    assert_eq!(e.normalize(), Vec2::new(-1.0, 1.0));
    let e = PointerEvent::new(800.0, 600.0, vp());
    assert_eq!(e.normalize(), Vec2::new(1.0, -1.0));
    let e = PointerEvent::new(400.0, 300.0, vp());
    assert_eq!(e.normalize(), Vec2::ZERO);
    let e = PointerEvent::new(10.0, 10.0, Viewport::new(0.0, 0.0).unwrap());
    assert_eq!(e.normalize(), Vec2::ZERO);
}

#[test]
fn tilt_lock_pins_vertical_and_keeps_original() {
    let original = PointerEvent::new(120.0, 40.0, vp());
    let locked = tilt_lock(original);
    assert_eq!(locked.client, Point::new(120.0, 300.0));
    assert_eq!(original.client, Point::new(120.0, 40.0));
    assert_eq!(locked.normalize().y, 0.0);
    assert_eq!(locked.normalize().x, original.normalize().x);
}

#[test]
fn dropping_mounted_scene_disposes_exactly_once() {
    let (p, disposed, _) = probe();
    let surface = RenderSurface::from_viewport(vp(), true);
    let scene = MountedScene::mount_with(SceneRef::ParticleField { hue: 70.0 }, p, &surface)
        .unwrap();
    assert!(scene.renderer().is_mounted());
    drop(scene);
    assert_eq!(disposed.get(), 1);
}

#[test]
fn globe_scene_applies_tilt_lock_before_forwarding() {
    let (p, _, target) = probe();
    let surface = RenderSurface::from_viewport(vp(), true);
    let mut scene =
        MountedScene::mount_with(SceneRef::Globe { tilt_lock: true }, p, &surface).unwrap();
    scene.pointer(PointerEvent::new(800.0, 0.0, vp()));
    assert_eq!(target.get(), (1.0, 0.0));

    let (p, _, target) = probe();
    let mut scene =
        MountedScene::mount_with(SceneRef::Globe { tilt_lock: false }, p, &surface).unwrap();
    scene.pointer(PointerEvent::new(800.0, 0.0, vp()));
    assert_eq!(target.get(), (1.0, 1.0));
}

#[test]
fn globe_without_accelerated_context_fails_to_mount() {
    let surface = RenderSurface::from_viewport(vp(), false);
    let err = MountedScene::mount(
        SceneRef::Globe { tilt_lock: false },
        &SceneParams::default(),
        &surface,
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("renderer error:"));

    let particles = MountedScene::mount(
        SceneRef::ParticleField { hue: 70.0 },
        &SceneParams::default(),
        &surface,
    );
    assert!(particles.is_ok());
}
