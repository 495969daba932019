use crate::foundation::error::{StagecraftError, StagecraftResult};

pub use kurbo::{Point, Rect, Vec2};

/// Opaque handle to a visual element mounted on a [`crate::Stage`].
///
/// Handles are never reused within one stage, so a handle to an unmounted element stays dead.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u32);

/// Visible browser-window area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a validated viewport. Both dimensions must be finite and non-negative.
    pub fn new(width: f64, height: f64) -> StagecraftResult<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(StagecraftError::validation("Viewport dimensions must be finite"));
        }
        if width < 0.0 || height < 0.0 {
            return Err(StagecraftError::validation(
                "Viewport dimensions must be >= 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Viewport centre in client coordinates.
    pub fn center(self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    /// Return `true` when either dimension is zero.
    pub fn is_degenerate(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Straight-alpha RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Build from a packed `0xRRGGBB` value with explicit alpha.
    pub const fn from_hex(rgb: u32, a: u8) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a,
        }
    }

    /// Convert an HSL color (hue in degrees, saturation and lightness in `[0, 1]`) to RGBA.
    pub fn from_hsla(hue_deg: f64, s: f64, l: f64, alpha: f64) -> Self {
        let h = hue_deg.rem_euclid(360.0) / 360.0;
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let channel = |t: f64| {
            let t = t.rem_euclid(1.0);
            let v = if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 0.5 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            };
            (v * 255.0).round().clamp(0.0, 255.0) as u8
        };

        Self {
            r: channel(h + 1.0 / 3.0),
            g: channel(h),
            b: channel(h - 1.0 / 3.0),
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }
}

/// Clamp `v` into `[0, 1]`, mapping NaN to `0`.
pub fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
