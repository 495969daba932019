use super::*;

fn surface() -> RenderSurface {
    RenderSurface {
        width: 1200.0,
        height: 800.0,
        accelerated: true,
    }
}

#[test]
fn nodes_sit_on_the_shell() {
    let mut g = PointCloudGlobe::new(200, 0.05, 11);
    g.mount(&surface()).unwrap();
    assert_eq!(g.nodes().len(), 200);
    for n in g.nodes() {
        let r = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        assert!((r - NODE_RADIUS).abs() < 1e-9);
    }
}

#[test]
fn auto_rotation_accumulates_per_frame() {
    let mut g = PointCloudGlobe::new(10, 0.05, 0);
    g.mount(&surface()).unwrap();
    for _ in 0..60 {
        g.render_frame(1.0 / 60.0);
    }
    assert!((g.rotation().y - 60.0 * AUTO_ROTATE).abs() < 1e-12);
}

#[test]
fn pointer_tilt_is_damped_not_snapped() {
    let mut g = PointCloudGlobe::new(10, 0.05, 0);
    g.mount(&surface()).unwrap();
    g.set_pointer_target(1.0, 1.0);
    g.render_frame(1.0 / 60.0);
    let r = g.rotation();
    assert!((r.x.target - 0.1).abs() < 1e-12);
    assert!((r.z.target - 0.04).abs() < 1e-12);
    assert!((r.x.current - 0.1 * 0.05).abs() < 1e-12);

    for _ in 0..400 {
        g.render_frame(1.0 / 60.0);
    }
    assert!((g.rotation().x.current - 0.1).abs() < 1e-6);
}

#[test]
fn projected_nodes_land_near_screen_centre() {
    let mut g = PointCloudGlobe::new(200, 0.05, 5);
    g.mount(&surface()).unwrap();
    let ops = g.render_frame(0.0);
    assert_eq!(ops.len(), 200);
    for op in ops {
        let DrawOp::Dot { center, radius, .. } = op else {
            panic!("unexpected op {op:?}");
        };
        assert!((0.0..1200.0).contains(&center.x));
        assert!((0.0..800.0).contains(&center.y));
        assert!(*radius > 0.0);
    }
}

#[test]
fn needs_accelerated_context() {
    let mut g = PointCloudGlobe::new(10, 0.05, 0);
    let s = RenderSurface {
        accelerated: false,
        ..surface()
    };
    assert!(g.mount(&s).is_err());
    assert!(!g.is_mounted());
    assert!(g.render_frame(0.016).is_empty());
}
