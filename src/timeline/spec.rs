use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::{
    animation::{
        ease::Ease,
        property::{Property, Tween},
    },
    foundation::core::ElementId,
    foundation::error::{StagecraftError, StagecraftResult},
};

/// What an [`AnimationStep`] animates.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// A single element.
    Element(ElementId),
    /// An ordered collection; each item becomes its own sub-step.
    Collection(Vec<ElementId>),
}

impl Target {
    /// Element handles in order.
    pub fn ids(&self) -> &[ElementId] {
        match self {
            Self::Element(id) => std::slice::from_ref(id),
            Self::Collection(ids) => ids,
        }
    }

    /// Return `true` for [`Target::Collection`].
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Collection(_))
    }
}

impl From<ElementId> for Target {
    fn from(id: ElementId) -> Self {
        Self::Element(id)
    }
}

impl From<Vec<ElementId>> for Target {
    fn from(ids: Vec<ElementId>) -> Self {
        Self::Collection(ids)
    }
}

impl From<&[ElementId]> for Target {
    fn from(ids: &[ElementId]) -> Self {
        Self::Collection(ids.to_vec())
    }
}

/// Where a step starts, relative to what has been placed before it.
///
/// Text form: `"1.5"` (absolute), `"+=0.3"` / `"-=1"` (relative to the timeline end so far),
/// `"<"` / `"<0.2"` (relative to the previous step's start).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartOffset {
    /// Absolute time in seconds.
    At(f64),
    /// Signed gap after the current timeline end. Negative values overlap.
    AfterEnd(f64),
    /// Signed delay after the previous step's start.
    WithPrevious(f64),
}

impl Default for StartOffset {
    fn default() -> Self {
        Self::AfterEnd(0.0)
    }
}

impl StartOffset {
    fn value(self) -> f64 {
        match self {
            Self::At(v) | Self::AfterEnd(v) | Self::WithPrevious(v) => v,
        }
    }
}

impl FromStr for StartOffset {
    type Err = StagecraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let num = |v: &str| -> StagecraftResult<f64> {
            let v = v.trim();
            if v.is_empty() {
                return Ok(0.0);
            }
            v.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .ok_or_else(|| StagecraftError::validation(format!("invalid offset '{s}'")))
        };

        if let Some(rest) = t.strip_prefix("+=") {
            Ok(Self::AfterEnd(num(rest)?))
        } else if let Some(rest) = t.strip_prefix("-=") {
            Ok(Self::AfterEnd(-num(rest)?))
        } else if let Some(rest) = t.strip_prefix('<') {
            Ok(Self::WithPrevious(num(rest)?))
        } else if t.is_empty() {
            Err(StagecraftError::validation("offset must be non-empty"))
        } else {
            Ok(Self::At(num(t)?))
        }
    }
}

impl fmt::Display for StartOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::At(v) => write!(f, "{v}"),
            Self::AfterEnd(v) if v < 0.0 => write!(f, "-={}", -v),
            Self::AfterEnd(v) => write!(f, "+={v}"),
            Self::WithPrevious(v) if v == 0.0 => f.write_str("<"),
            Self::WithPrevious(v) => write!(f, "<{v}"),
        }
    }
}

/// One declarative animation step.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationStep {
    /// Element or collection being animated.
    pub target: Target,
    /// Property deltas applied over the step.
    pub tweens: BTreeMap<Property, Tween>,
    /// Duration in seconds.
    pub duration: f64,
    /// Curve applied to local progress.
    pub ease: Ease,
    /// Placement relative to earlier steps.
    pub offset: StartOffset,
    /// Per-item delay for collection targets.
    pub stagger: Option<f64>,
}

impl AnimationStep {
    /// Check the step's invariants.
    pub fn validate(&self) -> StagecraftResult<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(StagecraftError::validation(
                "AnimationStep duration must be finite and >= 0",
            ));
        }
        if self.tweens.is_empty() {
            return Err(StagecraftError::validation(
                "AnimationStep must animate at least one property",
            ));
        }
        if !self.offset.value().is_finite() {
            return Err(StagecraftError::validation(
                "AnimationStep offset must be finite",
            ));
        }
        if let Some(stagger) = self.stagger {
            if !self.target.is_collection() {
                return Err(StagecraftError::validation(
                    "stagger is only valid on collection targets",
                ));
            }
            if !stagger.is_finite() || stagger < 0.0 {
                return Err(StagecraftError::validation(
                    "stagger must be finite and >= 0",
                ));
            }
        }
        Ok(())
    }
}

/// Immutable ordered list of [`AnimationStep`]s.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineSpec {
    steps: Vec<AnimationStep>,
}

impl TimelineSpec {
    /// Validate and wrap steps.
    pub fn new(steps: Vec<AnimationStep>) -> StagecraftResult<Self> {
        for (i, step) in steps.iter().enumerate() {
            step.validate()
                .map_err(|e| StagecraftError::validation(format!("step {i}: {e}")))?;
        }
        Ok(Self { steps })
    }

    /// Start a builder with default step duration 0.5 s and `power1.out`.
    pub fn builder() -> TimelineBuilder {
        TimelineBuilder::new()
    }

    /// Steps in declaration order.
    pub fn steps(&self) -> &[AnimationStep] {
        &self.steps
    }

    /// Return `true` when there are no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Builder for one [`AnimationStep`].
#[derive(Clone, Debug)]
pub struct StepBuilder {
    target: Target,
    tweens: Vec<(Property, f64, f64)>,
    duration: Option<f64>,
    ease: Option<Ease>,
    offset: StartOffset,
    stagger: Option<f64>,
}

impl StepBuilder {
    /// Create a step for `target`.
    pub fn new(target: impl Into<Target>) -> Self {
        Self {
            target: target.into(),
            tweens: Vec::new(),
            duration: None,
            ease: None,
            offset: StartOffset::default(),
            stagger: None,
        }
    }

    /// Animate `property` from `from` to `to`.
    pub fn tween(mut self, property: Property, from: f64, to: f64) -> Self {
        self.tweens.push((property, from, to));
        self
    }

    /// Set the duration in seconds.
    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = Some(secs);
        self
    }

    /// Set the easing curve.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    /// Set the start placement.
    pub fn offset(mut self, offset: StartOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Set a per-item stagger interval in seconds.
    pub fn stagger(mut self, secs: f64) -> Self {
        self.stagger = Some(secs);
        self
    }

    fn build(self, defaults: (f64, Ease)) -> StagecraftResult<AnimationStep> {
        let mut tweens = BTreeMap::new();
        for (p, from, to) in self.tweens {
            if tweens.insert(p, Tween::new(from, to)?).is_some() {
                return Err(StagecraftError::validation(format!(
                    "property {p:?} is tweened twice in one step"
                )));
            }
        }
        Ok(AnimationStep {
            target: self.target,
            tweens,
            duration: self.duration.unwrap_or(defaults.0),
            ease: self.ease.unwrap_or(defaults.1),
            offset: self.offset,
            stagger: self.stagger,
        })
    }
}

/// Builder for [`TimelineSpec`] values with per-timeline step defaults.
#[derive(Clone, Debug)]
pub struct TimelineBuilder {
    default_duration: f64,
    default_ease: Ease,
    steps: Vec<StepBuilder>,
}

impl Default for TimelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            default_duration: 0.5,
            default_ease: Ease::OutQuad,
            steps: Vec::new(),
        }
    }

    /// Duration and ease used by steps that don't set their own.
    pub fn defaults(mut self, duration: f64, ease: Ease) -> Self {
        self.default_duration = duration;
        self.default_ease = ease;
        self
    }

    /// Append a step.
    pub fn step(mut self, step: StepBuilder) -> Self {
        self.steps.push(step);
        self
    }

    /// Build and validate the final [`TimelineSpec`].
    pub fn build(self) -> StagecraftResult<TimelineSpec> {
        let defaults = (self.default_duration, self.default_ease);
        let steps = self
            .steps
            .into_iter()
            .map(|s| s.build(defaults))
            .collect::<StagecraftResult<Vec<_>>>()?;
        TimelineSpec::new(steps)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/spec.rs"]
mod tests;
