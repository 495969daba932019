use smallvec::SmallVec;

use crate::{
    foundation::{
        core::{ElementId, Viewport},
        error::{StagecraftError, StagecraftResult},
    },
    scroll::binding::{Action, PinTarget, ScrollBinding, ScrollSpan},
    stage::{PinState, Stage},
    timeline::runnable::{PlaybackEvent, RunnableTimeline},
};

/// Handle to one binding inside a [`ScrollBinder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct TriggerId(pub u32);

/// Boundary crossing of a binding's progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerEvent {
    /// Progress left 0 going forward.
    Enter,
    /// Progress reached 1 going forward.
    Leave,
    /// Progress left 1 going backward.
    EnterBack,
    /// Progress reached 0 going backward.
    LeaveBack,
}

/// A [`TriggerEvent`] attributed to the binding that produced it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TriggerNotice {
    /// Producing binding.
    pub id: TriggerId,
    /// Crossing.
    pub event: TriggerEvent,
    /// Progress after the update.
    pub progress: f64,
}

/// What a binding drives.
#[derive(Debug)]
pub enum Driver {
    /// Scrubbed or toggled timeline, depending on [`ScrollBinding::scrub`].
    Timeline(RunnableTimeline),
    /// Nothing; the owner reacts to the returned [`TriggerNotice`]s.
    Notify,
}

/// One coalesced scroll/resize observation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollSample {
    /// Document scroll offset.
    pub scroll_y: f64,
    /// Current viewport.
    pub viewport: Viewport,
    /// The viewport changed since the previous sample; trigger bounds must be re-measured.
    pub resized: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Zone {
    Before,
    Active,
    After,
}

impl Zone {
    fn of(progress: f64) -> Self {
        if progress <= 0.0 {
            Self::Before
        } else if progress >= 1.0 {
            Self::After
        } else {
            Self::Active
        }
    }
}

fn crossings(from: Zone, to: Zone) -> &'static [TriggerEvent] {
    use TriggerEvent::*;
    match (from, to) {
        (Zone::Before, Zone::Active) => &[Enter],
        (Zone::Before, Zone::After) => &[Enter, Leave],
        (Zone::Active, Zone::After) => &[Leave],
        (Zone::After, Zone::Active) => &[EnterBack],
        (Zone::After, Zone::Before) => &[EnterBack, LeaveBack],
        (Zone::Active, Zone::Before) => &[LeaveBack],
        _ => &[],
    }
}

#[derive(Debug)]
struct Bound {
    id: TriggerId,
    region: ElementId,
    binding: ScrollBinding,
    driver: Driver,
    span: Option<ScrollSpan>,
    pin_top: f64,
    zone: Zone,
    progress: f64,
    enabled: bool,
}

impl Bound {
    fn pinned_element(&self) -> Option<ElementId> {
        self.binding.pin.map(|p| match p {
            PinTarget::Trigger => self.region,
            PinTarget::Element(id) => id,
        })
    }

    fn release_pin(&self, stage: &mut Stage) {
        if let Some(el) = self.pinned_element() {
            stage.set_pin(el, PinState::Flow);
        }
    }
}

/// Maps scroll position onto progress for a component's trigger regions.
///
/// Each component owns its binder; there is no global registry. Dropping the binder drops its
/// timelines; call [`ScrollBinder::release`] first to return pinned elements to normal flow.
#[derive(Debug, Default)]
pub struct ScrollBinder {
    next_id: u32,
    bound: Vec<Bound>,
}

impl ScrollBinder {
    /// Create an empty binder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `region` to `driver`.
    ///
    /// The region (and pinned element, if any) must be mounted. Timelines are rendered at progress
    /// 0 immediately so their targets start in the `from` state before the first scroll sample
    /// arrives.
    pub fn bind(
        &mut self,
        region: ElementId,
        binding: ScrollBinding,
        mut driver: Driver,
        stage: &mut Stage,
    ) -> StagecraftResult<TriggerId> {
        if !stage.contains(region) {
            return Err(StagecraftError::scroll(format!(
                "trigger region {region:?} is not mounted"
            )));
        }
        if let Some(PinTarget::Element(el)) = binding.pin
            && !stage.contains(el)
        {
            return Err(StagecraftError::scroll(format!(
                "pinned element {el:?} is not mounted"
            )));
        }
        let id = TriggerId(self.next_id);
        self.next_id += 1;
        if let Driver::Timeline(tl) = &mut driver {
            tl.seek(0.0, stage);
        }
        tracing::debug!(?id, ?region, scrub = binding.scrub, pin = ?binding.pin, "scroll binding created");
        self.bound.push(Bound {
            id,
            region,
            binding,
            driver,
            span: None,
            pin_top: 0.0,
            zone: Zone::Before,
            progress: 0.0,
            enabled: true,
        });
        Ok(id)
    }

    /// Remove one binding, releasing its pin. Returns its timeline, if any.
    pub fn unbind(&mut self, id: TriggerId, stage: &mut Stage) -> Option<RunnableTimeline> {
        let idx = self.bound.iter().position(|b| b.id == id)?;
        let b = self.bound.remove(idx);
        b.release_pin(stage);
        match b.driver {
            Driver::Timeline(tl) => Some(tl),
            Driver::Notify => None,
        }
    }

    /// Release every pin and drop every binding.
    pub fn release(&mut self, stage: &mut Stage) {
        for b in self.bound.drain(..) {
            b.release_pin(stage);
        }
    }

    /// Number of live bindings.
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    /// Return `true` when nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    /// Last computed progress of `id`.
    pub fn progress(&self, id: TriggerId) -> Option<f64> {
        self.find(id).map(|b| b.progress)
    }

    /// Last measured scroll span of `id`.
    pub fn span(&self, id: TriggerId) -> Option<ScrollSpan> {
        self.find(id).and_then(|b| b.span)
    }

    /// Timeline driven by `id`.
    pub fn timeline(&self, id: TriggerId) -> Option<&RunnableTimeline> {
        match &self.find(id)?.driver {
            Driver::Timeline(tl) => Some(tl),
            Driver::Notify => None,
        }
    }

    fn find(&self, id: TriggerId) -> Option<&Bound> {
        self.bound.iter().find(|b| b.id == id)
    }

    /// Process one coalesced sample.
    ///
    /// Bindings are evaluated independently. Scrubbed timelines are sought to the new progress;
    /// toggled timelines receive their actions for every crossing; all crossings are returned.
    pub fn update(
        &mut self,
        sample: &ScrollSample,
        stage: &mut Stage,
    ) -> SmallVec<[TriggerNotice; 4]> {
        let mut notices = SmallVec::new();

        for b in &mut self.bound {
            let enabled = b.binding.applies_to(sample.viewport);
            if !enabled {
                if b.enabled {
                    tracing::debug!(id = ?b.id, "binding disabled at this viewport width");
                    b.release_pin(stage);
                    b.zone = Zone::Before;
                    b.progress = 0.0;
                }
                b.enabled = false;
                continue;
            }
            if !b.enabled {
                b.span = None;
            }
            b.enabled = true;

            if sample.resized || b.span.is_none() {
                let Some(region) = stage.layout(b.region) else {
                    tracing::debug!(id = ?b.id, region = ?b.region, "trigger region missing; binding skipped");
                    continue;
                };
                let span = b.binding.span(region, sample.viewport);
                if let Some(el) = b.pinned_element()
                    && let Some(layout) = stage.layout(el)
                {
                    b.pin_top = layout.y0 - span.start;
                }
                b.span = Some(span);
            }
            let Some(span) = b.span else { continue };

            let progress = span.progress(sample.scroll_y);
            let zone = Zone::of(progress);
            let events = crossings(b.zone, zone);
            b.zone = zone;
            b.progress = progress;

            if let Some(el) = b.pinned_element() {
                let pin = match zone {
                    Zone::Before => PinState::Flow,
                    Zone::Active => PinState::Pinned {
                        viewport_top: b.pin_top,
                    },
                    Zone::After => PinState::Released {
                        spacing: span.len(),
                    },
                };
                stage.set_pin(el, pin);
            }

            if let Driver::Timeline(tl) = &mut b.driver {
                if b.binding.scrub {
                    tl.seek(progress, stage);
                } else {
                    let actions = b.binding.toggle_actions;
                    for ev in events {
                        let action = match ev {
                            TriggerEvent::Enter => actions.on_enter,
                            TriggerEvent::Leave => actions.on_leave,
                            TriggerEvent::EnterBack => actions.on_enter_back,
                            TriggerEvent::LeaveBack => actions.on_leave_back,
                        };
                        apply_action(tl, action, stage);
                    }
                }
            }

            for &event in events {
                tracing::trace!(id = ?b.id, ?event, progress, "trigger crossing");
                notices.push(TriggerNotice {
                    id: b.id,
                    event,
                    progress,
                });
            }
        }

        notices
    }

    /// Advance toggled timelines by one frame.
    pub fn advance(&mut self, dt: f64, stage: &mut Stage) -> SmallVec<[(TriggerId, PlaybackEvent); 2]> {
        let mut done = SmallVec::new();
        for b in &mut self.bound {
            if let Driver::Timeline(tl) = &mut b.driver
                && let Some(ev) = tl.advance(dt, stage)
            {
                done.push((b.id, ev));
            }
        }
        done
    }
}

fn apply_action(tl: &mut RunnableTimeline, action: Action, stage: &mut Stage) {
    match action {
        Action::None => {}
        Action::Play => tl.play(),
        Action::Reverse => tl.reverse(),
        Action::Restart => tl.restart(),
        Action::Reset => tl.reset(stage),
        Action::Complete => tl.complete(stage),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/binder.rs"]
mod tests;
