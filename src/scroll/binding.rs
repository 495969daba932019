use std::str::FromStr;

use crate::foundation::{
    core::{ElementId, Rect, Viewport, clamp01},
    error::{StagecraftError, StagecraftResult},
};

/// A position along an element or the viewport, measured from its top edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Fraction of the length (`top` = 0, `center` = 0.5, `bottom` = 1, `75%` = 0.75).
    Fraction(f64),
    /// Absolute pixels from the top edge.
    Pixels(f64),
}

impl Anchor {
    /// Offset from the top edge for a span of `length` pixels.
    pub fn resolve(self, length: f64) -> f64 {
        match self {
            Self::Fraction(f) => f * length,
            Self::Pixels(px) => px,
        }
    }
}

impl FromStr for Anchor {
    type Err = StagecraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        let bad = || StagecraftError::validation(format!("invalid trigger anchor '{s}'"));
        let finite = |v: &str| v.parse::<f64>().ok().filter(|f| f.is_finite());

        match t.as_str() {
            "top" => Ok(Self::Fraction(0.0)),
            "center" => Ok(Self::Fraction(0.5)),
            "bottom" => Ok(Self::Fraction(1.0)),
            _ => {
                if let Some(pct) = t.strip_suffix('%') {
                    finite(pct).map(|v| Self::Fraction(v / 100.0)).ok_or_else(bad)
                } else if let Some(px) = t.strip_suffix("px") {
                    finite(px).map(Self::Pixels).ok_or_else(bad)
                } else {
                    finite(&t).map(Self::Pixels).ok_or_else(bad)
                }
            }
        }
    }
}

/// "When `element` anchor of the trigger region meets `viewport` anchor of the viewport".
///
/// Text form: `"top 75%"`, `"bottom center"`, `"top top"`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TriggerPoint {
    /// Anchor on the trigger region.
    pub element: Anchor,
    /// Anchor on the viewport.
    pub viewport: Anchor,
}

impl TriggerPoint {
    /// Document scroll offset at which this point is reached.
    pub fn scroll_offset(&self, region: Rect, viewport: Viewport) -> f64 {
        region.y0 + self.element.resolve(region.height()) - self.viewport.resolve(viewport.height)
    }
}

impl FromStr for TriggerPoint {
    type Err = StagecraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(element), Some(viewport), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(StagecraftError::validation(format!(
                "trigger point '{s}' must be '<element> <viewport>'"
            )));
        };
        Ok(Self {
            element: element.parse()?,
            viewport: viewport.parse()?,
        })
    }
}

/// End condition of a binding.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndPoint {
    /// Same grammar as the start condition.
    Trigger(TriggerPoint),
    /// Fixed scroll distance after the start (`"+=2000"`).
    Distance(f64),
}

impl Default for EndPoint {
    fn default() -> Self {
        Self::Trigger(TriggerPoint {
            element: Anchor::Fraction(1.0),
            viewport: Anchor::Fraction(0.0),
        })
    }
}

impl FromStr for EndPoint {
    type Err = StagecraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().strip_prefix("+=") {
            Some(d) => d
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(Self::Distance)
                .ok_or_else(|| StagecraftError::validation(format!("invalid end distance '{s}'"))),
            None => Ok(Self::Trigger(s.parse()?)),
        }
    }
}

/// What a toggle binding does to its timeline on a [`crate::TriggerEvent`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Leave the timeline alone.
    #[default]
    None,
    /// Play forward.
    Play,
    /// Play backward.
    Reverse,
    /// Rewind and play forward.
    Restart,
    /// Rewind and stop.
    Reset,
    /// Jump to the end and stop.
    Complete,
}

impl FromStr for Action {
    type Err = StagecraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "play" => Ok(Self::Play),
            "reverse" => Ok(Self::Reverse),
            "restart" => Ok(Self::Restart),
            "reset" => Ok(Self::Reset),
            "complete" => Ok(Self::Complete),
            other => Err(StagecraftError::validation(format!(
                "unknown toggle action '{other}'"
            ))),
        }
    }
}

/// Actions for enter / leave / enter-back / leave-back, in that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToggleActions {
    /// Progress left 0 going forward.
    pub on_enter: Action,
    /// Progress reached 1 going forward.
    pub on_leave: Action,
    /// Progress left 1 going backward.
    pub on_enter_back: Action,
    /// Progress reached 0 going backward.
    pub on_leave_back: Action,
}

impl Default for ToggleActions {
    /// `play none none reverse`
    fn default() -> Self {
        Self {
            on_enter: Action::Play,
            on_leave: Action::None,
            on_enter_back: Action::None,
            on_leave_back: Action::Reverse,
        }
    }
}

impl FromStr for ToggleActions {
    type Err = StagecraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [a, b, c, d] = parts.as_slice() else {
            return Err(StagecraftError::validation(format!(
                "toggle actions '{s}' must name four actions"
            )));
        };
        Ok(Self {
            on_enter: a.parse()?,
            on_leave: b.parse()?,
            on_enter_back: c.parse()?,
            on_leave_back: d.parse()?,
        })
    }
}

/// Which element a pinning binding holds in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinTarget {
    /// The trigger region itself.
    Trigger,
    /// Another element.
    Element(ElementId),
}

/// Scroll-to-progress mapping for one trigger region.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollBinding {
    /// Scroll offset where progress leaves 0.
    pub start: TriggerPoint,
    /// Scroll offset where progress reaches 1.
    pub end: EndPoint,
    /// Couple progress 1:1 to scroll instead of toggling.
    pub scrub: bool,
    /// Used when `scrub` is false.
    pub toggle_actions: ToggleActions,
    /// Hold an element fixed while progress is in `(0, 1)`.
    pub pin: Option<PinTarget>,
    /// The binding is inert below this viewport width.
    pub min_viewport_width: Option<f64>,
}

impl ScrollBinding {
    /// Toggle binding between `start` and `end` with default actions.
    pub fn new(start: TriggerPoint, end: EndPoint) -> Self {
        Self {
            start,
            end,
            scrub: false,
            toggle_actions: ToggleActions::default(),
            pin: None,
            min_viewport_width: None,
        }
    }

    /// Parse start and end conditions from text.
    pub fn parse(start: &str, end: &str) -> StagecraftResult<Self> {
        Ok(Self::new(start.parse()?, end.parse()?))
    }

    /// Couple progress to scroll.
    pub fn scrub(mut self, scrub: bool) -> Self {
        self.scrub = scrub;
        self
    }

    /// Set toggle actions.
    pub fn toggle_actions(mut self, actions: ToggleActions) -> Self {
        self.toggle_actions = actions;
        self
    }

    /// Pin an element while active.
    pub fn pin(mut self, target: PinTarget) -> Self {
        self.pin = Some(target);
        self
    }

    /// Only apply at viewport widths of at least `px`.
    pub fn min_viewport_width(mut self, px: f64) -> Self {
        self.min_viewport_width = Some(px);
        self
    }

    /// Return `true` when the binding applies at this viewport.
    pub fn applies_to(&self, viewport: Viewport) -> bool {
        self.min_viewport_width
            .is_none_or(|min| viewport.width >= min)
    }

    /// Scroll range this binding maps onto `[0, 1]` for a region laid out at `region`.
    pub fn span(&self, region: Rect, viewport: Viewport) -> ScrollSpan {
        let start = self.start.scroll_offset(region, viewport);
        let end = match self.end {
            EndPoint::Trigger(tp) => tp.scroll_offset(region, viewport),
            EndPoint::Distance(d) => start + d,
        };
        ScrollSpan { start, end }
    }
}

/// Measured document scroll range of a binding.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollSpan {
    /// Scroll offset of progress 0.
    pub start: f64,
    /// Scroll offset of progress 1.
    pub end: f64,
}

impl ScrollSpan {
    /// Scroll distance covered, never negative.
    pub fn len(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    /// Return `true` for a zero-length span.
    pub fn is_empty(&self) -> bool {
        self.len() <= 0.0
    }

    /// Progress at document scroll offset `scroll_y`.
    ///
    /// Empty spans are a step function: 0 before `start`, 1 from `start` on.
    pub fn progress(&self, scroll_y: f64) -> f64 {
        let len = self.len();
        if len <= 0.0 {
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }
        clamp01((scroll_y - self.start) / len)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/binding.rs"]
mod tests;
