//! Landing-page sections.
//!
//! Each section mounts its own elements, owns its own timelines, binders and renderers, and
//! releases all of them in [`Section::unmount`]. Nothing is registered globally.

use std::fmt;

use crate::{
    foundation::{
        core::{ElementId, Rect, Viewport},
        error::{StagecraftError, StagecraftResult},
    },
    render::scene::PointerEvent,
    scroll::binder::ScrollSample,
    stage::Stage,
    timeline::{
        runnable::{RunnableTimeline, Scheduler},
        spec::TimelineBuilder,
    },
};

pub mod about;
pub mod footer;
pub mod global_ops;
pub mod hero;
pub mod preloader;
pub mod services;
pub mod use_cases;

/// A mounted page section driven by the page loop.
pub trait Section: fmt::Debug {
    /// Stable name, also the listener owner tag.
    fn name(&self) -> &'static str;

    /// Place every element with the section's top edge at document offset `top`.
    ///
    /// Returns the document height consumed, including any scroll distance reserved by pins.
    fn layout(&mut self, top: f64, viewport: Viewport, stage: &mut Stage) -> f64;

    /// Process one coalesced scroll/resize sample.
    fn scroll(&mut self, _sample: &ScrollSample, _stage: &mut Stage) {}

    /// Pointer moved.
    fn pointer(&mut self, _event: PointerEvent) {}

    /// Viewport changed; resize owned renderers.
    fn resize(&mut self, _viewport: Viewport) {}

    /// Advance timelines and timers by `dt` seconds.
    fn advance(&mut self, _dt: f64, _stage: &mut Stage) {}

    /// Step owned scene renderers. Returns the number of display-list ops produced.
    fn render(&mut self, _dt: f64) -> usize {
        0
    }

    /// Release pins, listeners and renderers, and remove every element from `stage`.
    fn unmount(&mut self, stage: &mut Stage);
}

/// Elements mounted by one section, removed together.
#[derive(Debug, Default)]
pub(crate) struct ElementSet {
    prefix: &'static str,
    ids: Vec<ElementId>,
}

impl ElementSet {
    pub(crate) fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            ids: Vec::new(),
        }
    }

    pub(crate) fn mount(&mut self, stage: &mut Stage, name: &str) -> ElementId {
        let id = stage.mount(format!("{}.{name}", self.prefix), Rect::ZERO);
        self.ids.push(id);
        id
    }

    pub(crate) fn mount_text(&mut self, stage: &mut Stage, name: &str, text: &str) -> ElementId {
        let id = stage.mount_text(format!("{}.{name}", self.prefix), Rect::ZERO, text);
        self.ids.push(id);
        id
    }

    pub(crate) fn unmount_all(&mut self, stage: &mut Stage) {
        for id in self.ids.drain(..) {
            stage.unmount(id);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }
}

/// Build a timeline, tagging failures with the section that authored it.
pub(crate) fn schedule(
    section: &str,
    builder: TimelineBuilder,
) -> StagecraftResult<RunnableTimeline> {
    let spec = builder
        .build()
        .map_err(|e| StagecraftError::timeline(format!("{section}: {e}")))?;
    Ok(Scheduler::build(&spec))
}

/// Rect `height` tall spanning the viewport width at document offset `top`.
pub(crate) fn band(top: f64, height: f64, viewport: Viewport) -> Rect {
    Rect::new(0.0, top, viewport.width, top + height)
}

#[cfg(test)]
#[path = "../../tests/unit/sections/mod.rs"]
mod tests;
