use crate::foundation::error::{StagecraftError, StagecraftResult};

/// Animatable visual property of a stage element.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Horizontal offset from the laid-out position, in pixels.
    X,
    /// Vertical offset from the laid-out position, in pixels.
    Y,
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Uniform scale factor.
    Scale,
    /// Width as a percentage of the laid-out width.
    Width,
}

impl Property {
    /// Every property, in channel order.
    pub const ALL: [Property; 5] = [
        Property::X,
        Property::Y,
        Property::Opacity,
        Property::Scale,
        Property::Width,
    ];

    /// Value an element carries before anything animates it.
    pub fn rest_value(self) -> f64 {
        match self {
            Self::X | Self::Y => 0.0,
            Self::Opacity | Self::Scale => 1.0,
            Self::Width => 100.0,
        }
    }
}

/// `{from, to}` pair for one property.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    /// Value before the step starts.
    pub from: f64,
    /// Value after the step completes.
    pub to: f64,
}

impl Tween {
    /// Create a tween; both ends must be finite.
    pub fn new(from: f64, to: f64) -> StagecraftResult<Self> {
        if !from.is_finite() || !to.is_finite() {
            return Err(StagecraftError::validation(
                "Tween endpoints must be finite",
            ));
        }
        Ok(Self { from, to })
    }

    /// Value at eased local progress `t`.
    pub fn at(self, t: f64) -> f64 {
        crate::foundation::math::lerp(self.from, self.to, t)
    }
}

/// Current values of every [`Property`] on one element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualProps {
    /// See [`Property::X`].
    pub x: f64,
    /// See [`Property::Y`].
    pub y: f64,
    /// See [`Property::Opacity`].
    pub opacity: f64,
    /// See [`Property::Scale`].
    pub scale: f64,
    /// See [`Property::Width`].
    pub width: f64,
}

impl Default for VisualProps {
    fn default() -> Self {
        Self {
            x: Property::X.rest_value(),
            y: Property::Y.rest_value(),
            opacity: Property::Opacity.rest_value(),
            scale: Property::Scale.rest_value(),
            width: Property::Width.rest_value(),
        }
    }
}

impl VisualProps {
    /// Read one property.
    pub fn get(&self, p: Property) -> f64 {
        match p {
            Property::X => self.x,
            Property::Y => self.y,
            Property::Opacity => self.opacity,
            Property::Scale => self.scale,
            Property::Width => self.width,
        }
    }

    /// Write one property. Opacity is clamped to `[0, 1]`.
    pub fn set(&mut self, p: Property, v: f64) {
        match p {
            Property::X => self.x = v,
            Property::Y => self.y = v,
            Property::Opacity => self.opacity = v.clamp(0.0, 1.0),
            Property::Scale => self.scale = v,
            Property::Width => self.width = v,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/property.rs"]
mod tests;
