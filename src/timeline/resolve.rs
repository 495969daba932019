use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::{
    animation::{
        ease::Ease,
        property::{Property, Tween},
    },
    foundation::core::{ElementId, clamp01},
    timeline::spec::{StartOffset, TimelineSpec},
};

/// A single (element, property) tween placed on the absolute timeline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ResolvedTween {
    /// Element being animated.
    pub target: ElementId,
    /// Property being animated.
    pub property: Property,
    /// Endpoint values.
    pub tween: Tween,
    /// Absolute start in seconds.
    pub start: f64,
    /// Duration in seconds.
    pub duration: f64,
    /// Curve applied to local progress.
    pub ease: Ease,
    /// Index of the authoring step.
    pub step: usize,
}

impl ResolvedTween {
    /// Absolute end in seconds.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    fn value_at(&self, time: f64, at_end: bool) -> f64 {
        if self.duration <= 0.0 {
            return if time > self.start || at_end {
                self.tween.to
            } else {
                self.tween.from
            };
        }
        let local = clamp01((time - self.start) / self.duration);
        self.tween.at(self.ease.apply(local))
    }
}

/// All tweens touching one (element, property) pair, ordered by start.
#[derive(Clone, Debug)]
struct Channel {
    target: ElementId,
    property: Property,
    segments: SmallVec<[ResolvedTween; 2]>,
}

/// Output of the offset-resolution pass: absolute tweens plus per-channel lookup.
#[derive(Clone, Debug, Default)]
pub struct ResolvedTimeline {
    tweens: Vec<ResolvedTween>,
    channels: Vec<Channel>,
    total_duration: f64,
}

impl ResolvedTimeline {
    /// Total duration: max end over all resolved tweens.
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Resolved tweens in authoring order (stagger sub-steps expanded).
    pub fn tweens(&self) -> &[ResolvedTween] {
        &self.tweens
    }

    /// Evaluate every channel at absolute `time` and hand each value to `apply`.
    ///
    /// A channel shows the latest-starting tween that has started; before its first tween it shows
    /// that tween's `from`. `at_end` marks the playhead resting on the timeline end so zero-length
    /// tweens placed there count as complete.
    pub fn sample(&self, time: f64, at_end: bool, mut apply: impl FnMut(ElementId, Property, f64)) {
        for ch in &self.channels {
            let idx = ch.segments.partition_point(|s| s.start <= time);
            let value = if idx == 0 {
                ch.segments[0].tween.from
            } else {
                ch.segments[idx - 1].value_at(time, at_end)
            };
            apply(ch.target, ch.property, value);
        }
    }
}

/// Resolve every step's absolute start in one ordered pass.
///
/// `AfterEnd` offsets are measured from the running timeline end, `WithPrevious` from the previous
/// step's start. Collection targets expand to one sub-step per item at
/// `base + index * stagger`. Starts clamp at zero.
pub fn resolve(spec: &TimelineSpec) -> ResolvedTimeline {
    let mut tweens = Vec::new();
    let mut cursor_end = 0.0f64;
    let mut prev_start = 0.0f64;

    for (step_idx, step) in spec.steps().iter().enumerate() {
        let base = match step.offset {
            StartOffset::At(t) => t,
            StartOffset::AfterEnd(gap) => cursor_end + gap,
            StartOffset::WithPrevious(delay) => prev_start + delay,
        };
        let base = if base < 0.0 {
            tracing::debug!(step = step_idx, base, "negative step start clamped to 0");
            0.0
        } else {
            base
        };
        let stagger = step.stagger.unwrap_or(0.0);

        let ids = step.target.ids();
        let mut step_end = base;
        for (k, &id) in ids.iter().enumerate() {
            let start = base + k as f64 * stagger;
            for (&property, &tween) in &step.tweens {
                tweens.push(ResolvedTween {
                    target: id,
                    property,
                    tween,
                    start,
                    duration: step.duration,
                    ease: step.ease,
                    step: step_idx,
                });
            }
            step_end = step_end.max(start + step.duration);
        }

        cursor_end = cursor_end.max(step_end);
        prev_start = base;
    }

    let total_duration = tweens.iter().map(ResolvedTween::end).fold(0.0, f64::max);

    let mut by_channel: BTreeMap<(ElementId, Property), SmallVec<[ResolvedTween; 2]>> =
        BTreeMap::new();
    for tw in &tweens {
        by_channel
            .entry((tw.target, tw.property))
            .or_default()
            .push(*tw);
    }
    let channels = by_channel
        .into_iter()
        .map(|((target, property), mut segments)| {
            // Stable: equal starts keep authoring order, so the later step wins.
            segments.sort_by(|a, b| a.start.total_cmp(&b.start));
            Channel {
                target,
                property,
                segments,
            }
        })
        .collect();

    ResolvedTimeline {
        tweens,
        channels,
        total_duration,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/resolve.rs"]
mod tests;
