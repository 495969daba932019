use crate::{
    foundation::{
        core::{Point, Rgba8},
        error::{StagecraftError, StagecraftResult},
        math::{Damped, SplitMix64},
    },
    render::scene::{DrawOp, RenderSurface, SceneRenderer},
};

/// Simulation steps are authored per 60 Hz frame.
const REFERENCE_FPS: f64 = 60.0;
/// Pointer parallax range in pixels at the screen edge.
const PARALLAX_PX: f64 = 24.0;
const TRAIL: Rgba8 = Rgba8::from_hex(0x000000, 26);

#[derive(Clone, Copy, Debug, PartialEq)]
struct Particle {
    x: f64,
    y: f64,
    z: f64,
    vx: f64,
    vy: f64,
    speed: f64,
    color: Rgba8,
}

/// Particles flying toward the viewer, projected with a simple perspective divide.
#[derive(Debug)]
pub struct ParticleField {
    count: usize,
    hue: f64,
    rng: SplitMix64,
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    parallax_x: Damped,
    parallax_y: Damped,
    display: Vec<DrawOp>,
    mounted: bool,
}

impl ParticleField {
    /// Create an unmounted field of `count` particles around `hue`.
    pub fn new(count: usize, hue: f64, damping: f64, seed: u64) -> Self {
        Self {
            count,
            hue,
            rng: SplitMix64::new(seed),
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            parallax_x: Damped::new(0.0, damping),
            parallax_y: Damped::new(0.0, damping),
            display: Vec::new(),
            mounted: false,
        }
    }

    /// Live particle count.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Return `true` before mount and after dispose.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Current depth of every particle.
    pub fn depths(&self) -> impl Iterator<Item = f64> + '_ {
        self.particles.iter().map(|p| p.z)
    }

    fn spawn(&mut self) -> Particle {
        let rng = &mut self.rng;
        let x = rng.next_f64() * self.width;
        let y = rng.next_f64() * self.height;
        let z = rng.next_f64() * self.width;
        let vx = (rng.next_f64() - 0.5) * 0.2;
        let vy = (rng.next_f64() - 0.5) * 0.2;
        let speed = rng.next_f64() * 0.5 + 0.1;
        let hue = if rng.next_f64() < 0.8 {
            self.hue
        } else {
            self.hue - 10.0
        };
        let alpha = rng.next_f64() * 0.5 + 0.2;
        Particle {
            x,
            y,
            z,
            vx,
            vy,
            speed,
            color: Rgba8::from_hsla(hue, 1.0, 0.5, alpha),
        }
    }
}

impl SceneRenderer for ParticleField {
    fn mount(&mut self, surface: &RenderSurface) -> StagecraftResult<()> {
        if surface.width <= 0.0 || surface.height <= 0.0 {
            return Err(StagecraftError::renderer(
                "particle field needs a non-empty surface",
            ));
        }
        self.width = surface.width;
        self.height = surface.height;
        self.particles = (0..self.count).map(|_| self.spawn()).collect();
        self.display.reserve(self.count + 1);
        self.mounted = true;
        Ok(())
    }

    fn set_pointer_target(&mut self, x: f64, y: f64) {
        self.parallax_x.target = x * PARALLAX_PX;
        self.parallax_y.target = -y * PARALLAX_PX;
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
        let frames = dt.max(0.0) * REFERENCE_FPS;
        let (w, h) = (self.width, self.height);
        let off_x = self.parallax_x.step();
        let off_y = self.parallax_y.step();

        self.display.push(DrawOp::Fade { color: TRAIL });
        for i in 0..self.particles.len() {
            let mut p = self.particles[i];
            p.z -= p.speed * frames;
            if p.z <= 0.0 {
                p = self.spawn();
                p.z = w;
            }
            p.x += p.vx * frames;
            p.y += p.vy * frames;
            self.particles[i] = p;

            if p.z <= 0.0 {
                continue;
            }
            let scale = w / p.z;
            self.display.push(DrawOp::Dot {
                center: Point::new(
                    (p.x - w * 0.5) * scale + w * 0.5 + off_x,
                    (p.y - h * 0.5) * scale + h * 0.5 + off_y,
                ),
                radius: scale * 0.5,
                color: p.color,
            });
        }
        &self.display
    }

    fn dispose(&mut self) {
        self.particles = Vec::new();
        self.display = Vec::new();
        self.mounted = false;
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/particles.rs"]
mod tests;
