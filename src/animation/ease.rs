use std::str::FromStr;

use crate::foundation::error::StagecraftError;

/// Easing functions used to map normalized animation progress.
///
/// Parses from the dotted curve names used in motion-design tooling, e.g. `"power3.out"`,
/// `"sine.in"` or `"none"`. `powerN` without a suffix means `.out`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in (`power1.in`).
    InQuad,
    /// Quadratic ease-out (`power1.out`).
    #[default]
    OutQuad,
    /// Quadratic ease-in/out (`power1.inOut`).
    InOutQuad,
    /// Cubic ease-in (`power2.in`).
    InCubic,
    /// Cubic ease-out (`power2.out`).
    OutCubic,
    /// Cubic ease-in/out (`power2.inOut`).
    InOutCubic,
    /// Quartic ease-in (`power3.in`).
    InQuart,
    /// Quartic ease-out (`power3.out`).
    OutQuart,
    /// Quartic ease-in/out (`power3.inOut`).
    InOutQuart,
    /// Quintic ease-in (`power4.in`).
    InQuint,
    /// Quintic ease-out (`power4.out`).
    OutQuint,
    /// Quintic ease-in/out (`power4.inOut`).
    InOutQuint,
    /// Sinusoidal ease-in.
    InSine,
    /// Sinusoidal ease-out.
    OutSine,
    /// Sinusoidal ease-in/out.
    InOutSine,
}

impl Ease {
    /// Every curve, in declaration order.
    pub const ALL: [Ease; 16] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuart,
        Ease::OutQuart,
        Ease::InOutQuart,
        Ease::InQuint,
        Ease::OutQuint,
        Ease::InOutQuint,
        Ease::InSine,
        Ease::OutSine,
        Ease::InOutSine,
    ];

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => in_out_pow(t, 2),
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => in_out_pow(t, 3),
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => in_out_pow(t, 4),
            Self::InQuint => t.powi(5),
            Self::OutQuint => 1.0 - (1.0 - t).powi(5),
            Self::InOutQuint => in_out_pow(t, 5),
            Self::InSine => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - (t * std::f64::consts::FRAC_PI_2).cos()
                }
            }
            Self::OutSine => (t * std::f64::consts::FRAC_PI_2).sin(),
            Self::InOutSine => {
                if t >= 1.0 {
                    1.0
                } else {
                    -((std::f64::consts::PI * t).cos() - 1.0) / 2.0
                }
            }
        }
    }
}

fn in_out_pow(t: f64, n: i32) -> f64 {
    if t < 0.5 {
        2f64.powi(n - 1) * t.powi(n)
    } else {
        1.0 - ((-2.0 * t + 2.0).powi(n) / 2.0)
    }
}

impl FromStr for Ease {
    type Err = StagecraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let (family, dir) = match name.split_once('.') {
            Some((f, d)) => (f, d),
            None => (name.as_str(), "out"),
        };

        let pick = |[i, o, io]: [Ease; 3]| match dir {
            "in" => Ok(i),
            "out" => Ok(o),
            "inout" => Ok(io),
            other => Err(StagecraftError::validation(format!(
                "unknown ease direction '{other}' in '{s}'"
            ))),
        };

        match family {
            "none" | "linear" => Ok(Ease::Linear),
            "power1" | "quad" => pick([Ease::InQuad, Ease::OutQuad, Ease::InOutQuad]),
            "power2" | "cubic" => pick([Ease::InCubic, Ease::OutCubic, Ease::InOutCubic]),
            "power3" | "quart" => pick([Ease::InQuart, Ease::OutQuart, Ease::InOutQuart]),
            "power4" | "quint" => pick([Ease::InQuint, Ease::OutQuint, Ease::InOutQuint]),
            "sine" => pick([Ease::InSine, Ease::OutSine, Ease::InOutSine]),
            other => Err(StagecraftError::validation(format!(
                "unknown ease '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
