use super::*;

fn surface() -> RenderSurface {
    RenderSurface {
        width: 640.0,
        height: 360.0,
        accelerated: false,
    }
}

#[test]
fn mount_spawns_every_particle_inside_the_volume() {
    let mut f = ParticleField::new(1500, 70.0, 0.05, 7);
    assert!(f.is_empty());
    f.mount(&surface()).unwrap();
    assert_eq!(f.len(), 1500);
    assert!(f.depths().all(|z| (0.0..640.0).contains(&z)));
}

#[test]
fn frame_emits_trail_then_one_dot_per_particle() {
    let mut f = ParticleField::new(50, 70.0, 0.05, 1);
    f.mount(&surface()).unwrap();
    let ops = f.render_frame(1.0 / 60.0);
    assert!(matches!(ops[0], DrawOp::Fade { .. }));
    assert_eq!(ops.len(), 51);
    assert!(ops[1..].iter().all(|op| matches!(op, DrawOp::Dot { radius, .. } if *radius > 0.0)));
}

#[test]
fn particles_respawn_at_the_far_plane() {
    let mut f = ParticleField::new(200, 70.0, 0.05, 3);
    f.mount(&surface()).unwrap();
    // 0.1 is the slowest speed; 6400 frames cross the whole depth.
    for _ in 0..100 {
        f.render_frame(64.0 / 60.0 * 1.0);
    }
    assert_eq!(f.len(), 200);
    assert!(f.depths().all(|z| z > 0.0 && z <= 640.0));
}

#[test]
fn same_seed_same_frames() {
    let mut a = ParticleField::new(100, 60.0, 0.05, 42);
    let mut b = ParticleField::new(100, 60.0, 0.05, 42);
    a.mount(&surface()).unwrap();
    b.mount(&surface()).unwrap();
    for _ in 0..10 {
        assert_eq!(a.render_frame(0.016), b.render_frame(0.016));
    }
}

#[test]
fn empty_surface_fails_and_dispose_releases() {
    let mut f = ParticleField::new(10, 70.0, 0.05, 0);
    let zero = RenderSurface {
        width: 0.0,
        height: 0.0,
        accelerated: true,
    };
    assert!(f.mount(&zero).is_err());
    assert!(f.render_frame(0.016).is_empty());
    f.mount(&surface()).unwrap();
    f.dispose();
    assert!(!f.is_mounted());
    assert!(f.is_empty());
    assert!(f.render_frame(0.016).is_empty());
}
