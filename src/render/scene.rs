//! Contract between the orchestrator and continuously redrawing background scenes.
//!
//! A [`SceneRenderer`] owns its simulation state and produces a display list per frame. The
//! orchestrator only mounts it, forwards pointer and resize input, and disposes it.

use crate::{
    foundation::{
        core::{Point, Rgba8, Vec2, Viewport},
        error::StagecraftResult,
    },
    render::{globe::PointCloudGlobe, particles::ParticleField},
};

/// Drawing target handed to [`SceneRenderer::mount`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RenderSurface {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// A hardware-accelerated 3D context can be created on this surface.
    pub accelerated: bool,
}

impl RenderSurface {
    /// Surface covering `viewport`.
    pub fn from_viewport(viewport: Viewport, accelerated: bool) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            accelerated,
        }
    }
}

/// Which background scene a section shows.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneRef {
    /// Starfield of particles flying toward the viewer.
    ParticleField {
        /// Dominant hue in degrees.
        hue: f64,
    },
    /// Rotating point-cloud globe.
    Globe {
        /// Constrain pointer input to horizontal-only rotation.
        tilt_lock: bool,
    },
}

/// Pointer position in client coordinates, with the viewport it was measured against.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PointerEvent {
    /// Client position in pixels.
    pub client: Point,
    /// Viewport at event time.
    pub viewport: Viewport,
}

impl PointerEvent {
    /// Create an event.
    pub fn new(x: f64, y: f64, viewport: Viewport) -> Self {
        Self {
            client: Point::new(x, y),
            viewport,
        }
    }

    /// Normalized device coordinates: x and y in `[-1, 1]`, y pointing up.
    ///
    /// A degenerate viewport maps to the origin.
    pub fn normalize(&self) -> Vec2 {
        if self.viewport.is_degenerate() {
            return Vec2::ZERO;
        }
        let x = self.client.x / self.viewport.width * 2.0 - 1.0;
        let y = -(self.client.y / self.viewport.height) * 2.0 + 1.0;
        Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
    }
}

/// Return a copy of `event` with the vertical coordinate pinned to mid-viewport.
pub fn tilt_lock(event: PointerEvent) -> PointerEvent {
    PointerEvent {
        client: Point::new(event.client.x, event.viewport.height * 0.5),
        ..event
    }
}

/// One primitive of a renderer's display list.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Translucent fill over the whole surface (motion trails).
    Fade {
        /// Fill color.
        color: Rgba8,
    },
    /// Filled circle.
    Dot {
        /// Centre in surface pixels.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Fill color.
        color: Rgba8,
    },
}

/// A continuously redrawing visual driven by the page's frame loop.
pub trait SceneRenderer: std::fmt::Debug {
    /// Acquire graphics resources for `surface`. Fails when the context cannot be created.
    fn mount(&mut self, surface: &RenderSurface) -> StagecraftResult<()>;

    /// Set the damped pointer target, in normalized device coordinates.
    fn set_pointer_target(&mut self, x: f64, y: f64);

    /// Surface size changed.
    fn resize(&mut self, width: f64, height: f64);

    /// Step the simulation by `dt` seconds and return the frame's display list.
    fn render_frame(&mut self, dt: f64) -> &[DrawOp];

    /// Release every owned resource. Idempotent.
    fn dispose(&mut self);

    /// Return `true` between a successful mount and dispose.
    fn is_mounted(&self) -> bool;
}

/// Construction parameters shared by the built-in renderers.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SceneParams {
    /// Seed for every random draw.
    pub seed: u64,
    /// Particles in a [`SceneRef::ParticleField`].
    pub particle_count: usize,
    /// Highlighted nodes on a [`SceneRef::Globe`].
    pub globe_nodes: usize,
    /// Per-frame pointer damping factor.
    pub damping: f64,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            seed: 0,
            particle_count: 1500,
            globe_nodes: 200,
            damping: 0.05,
        }
    }
}

/// Create the renderer for `scene`, unmounted.
pub fn create_renderer(scene: SceneRef, params: &SceneParams) -> Box<dyn SceneRenderer> {
    match scene {
        SceneRef::ParticleField { hue } => Box::new(ParticleField::new(
            params.particle_count,
            hue,
            params.damping,
            params.seed,
        )),
        SceneRef::Globe { .. } => Box::new(PointCloudGlobe::new(
            params.globe_nodes,
            params.damping,
            params.seed,
        )),
    }
}

/// A mounted renderer that is disposed when dropped.
///
/// Pointer input passes through [`tilt_lock`] first when the scene asks for it.
#[derive(Debug)]
pub struct MountedScene {
    scene: SceneRef,
    renderer: Box<dyn SceneRenderer>,
}

impl MountedScene {
    /// Create and mount the renderer for `scene`.
    pub fn mount(
        scene: SceneRef,
        params: &SceneParams,
        surface: &RenderSurface,
    ) -> StagecraftResult<Self> {
        Self::mount_with(scene, create_renderer(scene, params), surface)
    }

    /// Mount a caller-supplied renderer for `scene`.
    pub fn mount_with(
        scene: SceneRef,
        mut renderer: Box<dyn SceneRenderer>,
        surface: &RenderSurface,
    ) -> StagecraftResult<Self> {
        renderer.mount(surface)?;
        tracing::debug!(?scene, width = surface.width, height = surface.height, "scene mounted");
        Ok(Self { scene, renderer })
    }

    /// Which scene this is.
    pub fn scene(&self) -> SceneRef {
        self.scene
    }

    /// Forward pointer input.
    pub fn pointer(&mut self, event: PointerEvent) {
        let event = match self.scene {
            SceneRef::Globe { tilt_lock: true } => tilt_lock(event),
            _ => event,
        };
        let ndc = event.normalize();
        self.renderer.set_pointer_target(ndc.x, ndc.y);
    }

    /// Forward a resize.
    pub fn resize(&mut self, viewport: Viewport) {
        self.renderer.resize(viewport.width, viewport.height);
    }

    /// Render one frame.
    pub fn frame(&mut self, dt: f64) -> &[DrawOp] {
        self.renderer.render_frame(dt)
    }

    /// Borrow the renderer.
    pub fn renderer(&self) -> &dyn SceneRenderer {
        self.renderer.as_ref()
    }
}

impl Drop for MountedScene {
    fn drop(&mut self) {
        self.renderer.dispose();
        tracing::debug!(scene = ?self.scene, "scene disposed");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
