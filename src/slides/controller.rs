use smallvec::SmallVec;

use crate::{
    foundation::error::{StagecraftError, StagecraftResult},
    stage::Surface,
    timeline::runnable::{PlaybackEvent, RunnableTimeline},
};

/// Where a [`SlideController`] is in its cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "phase", content = "index", rename_all = "snake_case")]
pub enum SlidePhase {
    /// One-time initial entrance; settles in `Idle(0)`.
    Intro,
    /// Showing slide `i`, accepting requests.
    Idle(usize),
    /// Exit timeline running; will swap to the index.
    ExitingTo(usize),
    /// Entry timeline running on the index.
    EnteringAt(usize),
}

/// Result of [`SlideController::request_transition`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestOutcome {
    /// Exit timeline started.
    Started,
    /// The requested slide is already showing.
    AlreadyActive,
    /// A transition is in flight; the request was dropped.
    Busy,
}

/// Observable milestones of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideEvent {
    /// Exit finished and the active index changed; the owner swaps rendered content now.
    Swapped {
        /// Previously active slide.
        from: usize,
        /// Newly active slide.
        to: usize,
    },
    /// Entry (or intro) finished; the controller is idle on this slide.
    Settled(usize),
}

/// Fixed-period timer that requests the next slide while idle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AutoAdvance {
    /// Seconds of idle time between advances.
    pub period: f64,
    /// Idle time accumulated since the last transition.
    pub elapsed: f64,
    /// When false the timer never fires.
    pub enabled: bool,
}

impl AutoAdvance {
    /// Enabled timer with `period` seconds.
    pub fn every(period: f64) -> StagecraftResult<Self> {
        if !period.is_finite() || period <= 0.0 {
            return Err(StagecraftError::validation(
                "auto-advance period must be finite and > 0",
            ));
        }
        Ok(Self {
            period,
            elapsed: 0.0,
            enabled: true,
        })
    }

    /// A timer that never fires.
    pub fn disabled() -> Self {
        Self {
            period: f64::INFINITY,
            elapsed: 0.0,
            enabled: false,
        }
    }

    fn tick(&mut self, dt: f64) -> bool {
        if !self.enabled {
            return false;
        }
        self.elapsed += dt.max(0.0);
        self.elapsed >= self.period
    }
}

/// Rotates through `len` content variants, one exit-then-entry transition at a time.
///
/// The controller owns the exit, entry and optional intro timelines. Content swapping is left to
/// the owner, which reacts to [`SlideEvent::Swapped`].
#[derive(Debug)]
pub struct SlideController {
    len: usize,
    active: usize,
    phase: SlidePhase,
    exit: RunnableTimeline,
    entry: RunnableTimeline,
    intro: Option<RunnableTimeline>,
    auto: AutoAdvance,
}

impl SlideController {
    /// Create a controller over `len` slides, idle on slide 0 with auto-advance off.
    pub fn new(
        len: usize,
        exit: RunnableTimeline,
        entry: RunnableTimeline,
    ) -> StagecraftResult<Self> {
        if len == 0 {
            return Err(StagecraftError::validation(
                "SlideController needs at least one slide",
            ));
        }
        Ok(Self {
            len,
            active: 0,
            phase: SlidePhase::Idle(0),
            exit,
            entry,
            intro: None,
            auto: AutoAdvance::disabled(),
        })
    }

    /// Run `intro` once on [`SlideController::start`] instead of settling immediately.
    pub fn with_intro(mut self, intro: RunnableTimeline) -> Self {
        self.intro = Some(intro);
        self.phase = SlidePhase::Intro;
        self
    }

    /// Install an auto-advance timer.
    pub fn with_auto_advance(mut self, auto: AutoAdvance) -> Self {
        self.auto = auto;
        self
    }

    /// Begin the initial entrance.
    ///
    /// Intro targets are pre-set to their first frame; without an intro, the entry timeline is
    /// completed so slide 0 is fully shown.
    pub fn start(&mut self, surface: &mut dyn Surface) {
        match (&mut self.intro, self.phase) {
            (Some(intro), SlidePhase::Intro) => {
                intro.seek(0.0, surface);
                intro.play();
                tracing::debug!(duration = intro.total_duration(), "slide intro started");
            }
            _ => self.entry.complete(surface),
        }
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; construction rejects empty slide lists.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index whose content is currently rendered.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Current phase.
    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    /// Return `true` from exit start until entry completion, and during the intro.
    pub fn is_transitioning(&self) -> bool {
        !matches!(self.phase, SlidePhase::Idle(_))
    }

    /// Timeline hiding the outgoing slide.
    pub fn exit(&self) -> &RunnableTimeline {
        &self.exit
    }

    /// Timeline revealing the incoming slide.
    pub fn entry(&self) -> &RunnableTimeline {
        &self.entry
    }

    /// One-time entrance, if installed.
    pub fn intro(&self) -> Option<&RunnableTimeline> {
        self.intro.as_ref()
    }

    /// Auto-advance timer state.
    pub fn auto_advance(&self) -> AutoAdvance {
        self.auto
    }

    /// Turn the auto-advance timer on or off without losing its period.
    pub fn set_auto_advance_enabled(&mut self, enabled: bool) {
        self.auto.enabled = enabled && self.auto.period.is_finite();
        self.auto.elapsed = 0.0;
    }

    /// Ask to show slide `index`.
    ///
    /// Out-of-range indices are an error. Requests while a transition is in flight are dropped,
    /// never queued.
    pub fn request_transition(&mut self, index: usize) -> StagecraftResult<RequestOutcome> {
        if index >= self.len {
            return Err(StagecraftError::validation(format!(
                "slide index {index} out of range (len {})",
                self.len
            )));
        }
        let SlidePhase::Idle(active) = self.phase else {
            tracing::debug!(index, phase = ?self.phase, "slide request dropped while transitioning");
            return Ok(RequestOutcome::Busy);
        };
        if index == active {
            return Ok(RequestOutcome::AlreadyActive);
        }
        self.begin_exit(active, index);
        Ok(RequestOutcome::Started)
    }

    fn begin_exit(&mut self, from: usize, to: usize) {
        tracing::debug!(from, to, "slide transition started");
        self.phase = SlidePhase::ExitingTo(to);
        self.auto.elapsed = 0.0;
        self.exit.restart();
    }

    /// Advance by one frame of `dt` seconds.
    pub fn tick(&mut self, dt: f64, surface: &mut dyn Surface) -> SmallVec<[SlideEvent; 2]> {
        let mut events = SmallVec::new();
        match self.phase {
            SlidePhase::Intro => {
                let done = match &mut self.intro {
                    Some(intro) => intro.advance(dt, surface) == Some(PlaybackEvent::Completed),
                    None => true,
                };
                if done {
                    self.intro = None;
                    self.settle(0, &mut events);
                }
            }
            SlidePhase::Idle(active) => {
                if self.auto.tick(dt) {
                    let next = (active + 1) % self.len;
                    if next != active {
                        tracing::debug!(next, "auto-advance fired");
                        self.begin_exit(active, next);
                    } else {
                        self.auto.elapsed = 0.0;
                    }
                }
            }
            SlidePhase::ExitingTo(next) => {
                if self.exit.advance(dt, surface) == Some(PlaybackEvent::Completed) {
                    let from = self.active;
                    self.active = next;
                    events.push(SlideEvent::Swapped { from, to: next });
                    self.entry.seek(0.0, surface);
                    self.entry.play();
                    self.phase = SlidePhase::EnteringAt(next);
                    tracing::debug!(from, to = next, "slide swapped; entry started");
                }
            }
            SlidePhase::EnteringAt(index) => {
                if self.entry.advance(dt, surface) == Some(PlaybackEvent::Completed) {
                    self.settle(index, &mut events);
                }
            }
        }
        events
    }

    fn settle(&mut self, index: usize, events: &mut SmallVec<[SlideEvent; 2]>) {
        self.phase = SlidePhase::Idle(index);
        self.auto.elapsed = 0.0;
        events.push(SlideEvent::Settled(index));
        tracing::debug!(index, "slide settled");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slides/controller.rs"]
mod tests;
