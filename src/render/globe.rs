use std::f64::consts::PI;

use crate::{
    foundation::{
        core::{Point, Rgba8},
        error::{StagecraftError, StagecraftResult},
        math::{Damped, SplitMix64},
    },
    render::scene::{DrawOp, RenderSurface, SceneRenderer},
};

/// Node shell radius, slightly above the unit globe surface of 6.
pub const NODE_RADIUS: f64 = 6.05;
/// Auto-rotation about the vertical axis, radians per 60 Hz frame.
pub const AUTO_ROTATE: f64 = 0.0005;

const REFERENCE_FPS: f64 = 60.0;
const CAMERA: [f64; 3] = [0.0, 5.0, 18.0];
const FOV_Y_DEG: f64 = 45.0;
const NODE_SIZE: f64 = 0.15;
const NODE_COLOR: Rgba8 = Rgba8::from_hex(0xd9ff00, 204);
/// Pointer NDC to target tilt, before the per-axis gains.
const POINTER_GAIN: f64 = 0.2;

type Vec3 = [f64; 3];

fn dot(a: Vec3, b: Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(a: Vec3) -> Vec3 {
    let len = dot(a, a).sqrt();
    [a[0] / len, a[1] / len, a[2] / len]
}

/// Euler rotation in XYZ order: the matrix is `Rx * Ry * Rz`.
fn rotate_xyz(p: Vec3, rx: f64, ry: f64, rz: f64) -> Vec3 {
    let (sz, cz) = rz.sin_cos();
    let p = [p[0] * cz - p[1] * sz, p[0] * sz + p[1] * cz, p[2]];
    let (sy, cy) = ry.sin_cos();
    let p = [p[0] * cy + p[2] * sy, p[1], -p[0] * sy + p[2] * cy];
    let (sx, cx) = rx.sin_cos();
    [p[0], p[1] * cx - p[2] * sx, p[1] * sx + p[2] * cx]
}

/// Rotation of the globe group.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GlobeRotation {
    /// Pitch, damped toward the pointer.
    pub x: Damped,
    /// Yaw, auto-rotating.
    pub y: f64,
    /// Roll, damped toward the pointer.
    pub z: Damped,
}

/// Point-cloud globe with highlighted nodes on its surface.
#[derive(Debug)]
pub struct PointCloudGlobe {
    nodes: Vec<Vec3>,
    node_count: usize,
    rng: SplitMix64,
    rotation: GlobeRotation,
    width: f64,
    height: f64,
    display: Vec<DrawOp>,
    mounted: bool,
}

impl PointCloudGlobe {
    /// Create an unmounted globe with `node_count` nodes.
    pub fn new(node_count: usize, damping: f64, seed: u64) -> Self {
        Self {
            nodes: Vec::new(),
            node_count,
            rng: SplitMix64::new(seed),
            rotation: GlobeRotation {
                x: Damped::new(0.0, damping),
                y: 0.0,
                z: Damped::new(0.0, damping),
            },
            width: 0.0,
            height: 0.0,
            display: Vec::new(),
            mounted: false,
        }
    }

    /// Current rotation.
    pub fn rotation(&self) -> GlobeRotation {
        self.rotation
    }

    /// Node positions in model space.
    pub fn nodes(&self) -> &[[f64; 3]] {
        &self.nodes
    }

    fn sample_sphere(&mut self) -> Vec3 {
        let theta = 2.0 * PI * self.rng.next_f64();
        let phi = (2.0 * self.rng.next_f64() - 1.0).acos();
        [
            NODE_RADIUS * phi.sin() * theta.cos(),
            NODE_RADIUS * phi.sin() * theta.sin(),
            NODE_RADIUS * phi.cos(),
        ]
    }

    fn project(&self, p: Vec3) -> Option<(Point, f64)> {
        let forward = normalize([-CAMERA[0], -CAMERA[1], -CAMERA[2]]);
        let right = normalize(cross(forward, [0.0, 1.0, 0.0]));
        let up = cross(right, forward);
        let d = [p[0] - CAMERA[0], p[1] - CAMERA[1], p[2] - CAMERA[2]];
        let depth = dot(d, forward);
        if depth <= 0.0 {
            return None;
        }
        let focal = self.height * 0.5 / (FOV_Y_DEG.to_radians() * 0.5).tan();
        let sx = self.width * 0.5 + dot(d, right) * focal / depth;
        let sy = self.height * 0.5 - dot(d, up) * focal / depth;
        Some((Point::new(sx, sy), NODE_SIZE * focal / depth * 0.5))
    }
}

impl SceneRenderer for PointCloudGlobe {
    fn mount(&mut self, surface: &RenderSurface) -> StagecraftResult<()> {
        if !surface.accelerated {
            return Err(StagecraftError::renderer("3D graphics context unavailable"));
        }
        if surface.width <= 0.0 || surface.height <= 0.0 {
            return Err(StagecraftError::renderer("globe needs a non-empty surface"));
        }
        self.width = surface.width;
        self.height = surface.height;
        self.nodes = (0..self.node_count).map(|_| self.sample_sphere()).collect();
        self.mounted = true;
        Ok(())
    }

    fn set_pointer_target(&mut self, x: f64, y: f64) {
        self.rotation.x.target = y * POINTER_GAIN * 0.5;
        self.rotation.z.target = x * POINTER_GAIN * 0.2;
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    fn render_frame(&mut self, dt: f64) -> &[DrawOp] {
        self.display.clear();
        if !self.mounted {
            return &self.display;
        }
        self.rotation.y += AUTO_ROTATE * dt.max(0.0) * REFERENCE_FPS;
        let rx = self.rotation.x.step();
        let rz = self.rotation.z.step();
        let ry = self.rotation.y;

        let mut ops = std::mem::take(&mut self.display);
        for &node in &self.nodes {
            if let Some((center, radius)) = self.project(rotate_xyz(node, rx, ry, rz)) {
                ops.push(DrawOp::Dot {
                    center,
                    radius,
                    color: NODE_COLOR,
                });
            }
        }
        self.display = ops;
        &self.display
    }

    fn dispose(&mut self) {
        self.nodes = Vec::new();
        self.display = Vec::new();
        self.mounted = false;
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/globe.rs"]
mod tests;
