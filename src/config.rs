use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::error::{StagecraftError, StagecraftResult},
    render::scene::SceneParams,
};

/// Tunables for the landing page. Every field has a default, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Seed for particle, globe and HUD randomness.
    pub seed: u64,
    /// Run the preloader before the page.
    pub preloader: bool,
    /// A 3D context is available; when false the globe section stays static.
    pub accelerated_graphics: bool,
    /// Hero slide rotation.
    pub hero: HeroConfig,
    /// Hero particle field.
    pub particles: ParticlesConfig,
    /// Operations globe.
    pub globe: GlobeConfig,
    /// Use-case section.
    pub use_cases: UseCasesConfig,
    /// Operations HUD.
    pub global_ops: GlobalOpsConfig,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    /// Seconds between automatic slide changes; `null` disables rotation.
    pub auto_advance_secs: Option<f64>,
    /// Play the one-time entrance before settling on the first slide.
    pub intro: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParticlesConfig {
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobeConfig {
    pub node_count: usize,
    /// Per-frame pointer damping in `(0, 1]`.
    pub damping: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UseCasesConfig {
    /// Viewport width from which the terminal panel pins.
    pub pin_min_width: f64,
    /// Seconds between typed terminal lines.
    pub log_interval_secs: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalOpsConfig {
    /// Seconds between HUD updates.
    pub tick_secs: f64,
    /// Log lines kept, newest first.
    pub log_capacity: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            preloader: true,
            accelerated_graphics: true,
            hero: HeroConfig::default(),
            particles: ParticlesConfig::default(),
            globe: GlobeConfig::default(),
            use_cases: UseCasesConfig::default(),
            global_ops: GlobalOpsConfig::default(),
        }
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            auto_advance_secs: Some(8.0),
            intro: true,
        }
    }
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self { count: 1500 }
    }
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            node_count: 200,
            damping: 0.05,
        }
    }
}

impl Default for UseCasesConfig {
    fn default() -> Self {
        Self {
            pin_min_width: 1024.0,
            log_interval_secs: 1.2,
        }
    }
}

impl Default for GlobalOpsConfig {
    fn default() -> Self {
        Self {
            tick_secs: 2.0,
            log_capacity: 6,
        }
    }
}

fn positive(name: &str, v: f64) -> StagecraftResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(StagecraftError::config(format!("{name} must be finite and > 0")))
    }
}

impl PageConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> StagecraftResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| StagecraftError::config(format!("parse page config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> StagecraftResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StagecraftError::config(format!("open page config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check value ranges.
    pub fn validate(&self) -> StagecraftResult<()> {
        if let Some(secs) = self.hero.auto_advance_secs {
            positive("hero.auto_advance_secs", secs)?;
        }
        if !(self.globe.damping.is_finite() && self.globe.damping > 0.0 && self.globe.damping <= 1.0)
        {
            return Err(StagecraftError::config("globe.damping must be in (0, 1]"));
        }
        if !(self.use_cases.pin_min_width.is_finite() && self.use_cases.pin_min_width >= 0.0) {
            return Err(StagecraftError::config(
                "use_cases.pin_min_width must be finite and >= 0",
            ));
        }
        positive("use_cases.log_interval_secs", self.use_cases.log_interval_secs)?;
        positive("global_ops.tick_secs", self.global_ops.tick_secs)?;
        if self.global_ops.log_capacity == 0 {
            return Err(StagecraftError::config("global_ops.log_capacity must be >= 1"));
        }
        Ok(())
    }

    /// Renderer parameters derived from this config.
    pub fn scene_params(&self) -> SceneParams {
        SceneParams {
            seed: self.seed,
            particle_count: self.particles.count,
            globe_nodes: self.globe.node_count,
            damping: self.globe.damping,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
