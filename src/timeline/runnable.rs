use std::fmt;

use crate::{
    foundation::core::clamp01,
    stage::Surface,
    timeline::{
        resolve::{ResolvedTimeline, resolve},
        spec::TimelineSpec,
    },
};

/// Playback direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Toward progress 1.
    Forward,
    /// Toward progress 0.
    Reverse,
}

/// Emitted when playback reaches a boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackEvent {
    /// Forward playback reached progress 1.
    Completed,
    /// Reverse playback reached progress 0.
    ReverseCompleted,
}

/// Turns a [`TimelineSpec`] into a [`RunnableTimeline`].
pub struct Scheduler;

impl Scheduler {
    /// Resolve offsets and staggers once and return a paused timeline at progress 0.
    #[tracing::instrument(level = "debug", skip(spec), fields(steps = spec.steps().len()))]
    pub fn build(spec: &TimelineSpec) -> RunnableTimeline {
        let resolved = resolve(spec);
        tracing::debug!(
            tweens = resolved.tweens().len(),
            total = resolved.total_duration(),
            "timeline resolved"
        );
        RunnableTimeline {
            resolved,
            progress: 0.0,
            direction: Direction::Forward,
            playing: false,
            on_complete: Vec::new(),
        }
    }
}

type CompleteFn = Box<dyn FnMut(PlaybackEvent)>;

/// A resolved timeline plus a playhead.
///
/// Rendering is a pure function of the playhead: [`RunnableTimeline::seek`] can be called at any
/// rate and the same progress always writes the same values.
pub struct RunnableTimeline {
    resolved: ResolvedTimeline,
    progress: f64,
    direction: Direction,
    playing: bool,
    on_complete: Vec<CompleteFn>,
}

impl fmt::Debug for RunnableTimeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunnableTimeline")
            .field("total_duration", &self.resolved.total_duration())
            .field("progress", &self.progress)
            .field("direction", &self.direction)
            .field("playing", &self.playing)
            .field("on_complete", &self.on_complete.len())
            .finish()
    }
}

impl RunnableTimeline {
    /// Resolved tweens backing this timeline.
    pub fn resolved(&self) -> &ResolvedTimeline {
        &self.resolved
    }

    /// Total duration in seconds.
    pub fn total_duration(&self) -> f64 {
        self.resolved.total_duration()
    }

    /// Playhead in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Playhead in seconds.
    pub fn time(&self) -> f64 {
        self.progress * self.total_duration()
    }

    /// Current direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Return `true` while [`RunnableTimeline::advance`] moves the playhead.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Play forward from the current playhead. No-op when already at the end.
    pub fn play(&mut self) {
        self.direction = Direction::Forward;
        self.playing = self.progress < 1.0;
    }

    /// Play backward from the current playhead. No-op when already at the start.
    pub fn reverse(&mut self) {
        self.direction = Direction::Reverse;
        self.playing = self.progress > 0.0;
    }

    /// Jump to the start and play forward.
    pub fn restart(&mut self) {
        self.progress = 0.0;
        self.direction = Direction::Forward;
        self.playing = true;
    }

    /// Stop moving the playhead.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Register a callback fired whenever playback reaches a boundary.
    pub fn on_complete(&mut self, f: impl FnMut(PlaybackEvent) + 'static) {
        self.on_complete.push(Box::new(f));
    }

    /// Move the playhead to `progress` (clamped to `[0, 1]`) and render.
    ///
    /// Does not change the play state.
    pub fn seek(&mut self, progress: f64, surface: &mut dyn Surface) {
        self.progress = clamp01(progress);
        self.render(surface);
    }

    /// Jump to the end, stop, and render.
    pub fn complete(&mut self, surface: &mut dyn Surface) {
        self.playing = false;
        self.seek(1.0, surface);
    }

    /// Jump to the start, stop, and render.
    pub fn reset(&mut self, surface: &mut dyn Surface) {
        self.playing = false;
        self.seek(0.0, surface);
    }

    /// Advance a playing timeline by `dt` seconds and render.
    ///
    /// Returns the boundary event when playback finishes during this step.
    pub fn advance(&mut self, dt: f64, surface: &mut dyn Surface) -> Option<PlaybackEvent> {
        if !self.playing {
            return None;
        }
        let total = self.total_duration();
        let step = if total > 0.0 {
            dt.max(0.0) / total
        } else {
            1.0
        };
        let (progress, done) = match self.direction {
            Direction::Forward => {
                let p = (self.progress + step).min(1.0);
                (p, p >= 1.0)
            }
            Direction::Reverse => {
                let p = (self.progress - step).max(0.0);
                (p, p <= 0.0)
            }
        };
        self.progress = progress;
        self.render(surface);

        if !done {
            return None;
        }
        self.playing = false;
        let event = match self.direction {
            Direction::Forward => PlaybackEvent::Completed,
            Direction::Reverse => PlaybackEvent::ReverseCompleted,
        };
        for f in &mut self.on_complete {
            f(event);
        }
        Some(event)
    }

    fn render(&self, surface: &mut dyn Surface) {
        let at_end = self.progress >= 1.0;
        self.resolved
            .sample(self.time(), at_end, |target, property, value| {
                surface.apply(target, property, value);
            });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/runnable.rs"]
mod tests;
