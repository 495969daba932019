use crate::{
    animation::{ease::Ease, property::Property},
    content::{PRELOADER_TAGLINE, PRELOADER_WORDS},
    events::{EventHub, ListenerGuard, ListenerKind},
    foundation::{
        core::{ElementId, Rect, Viewport},
        error::StagecraftResult,
    },
    sections::{ElementSet, Section, schedule},
    stage::Stage,
    timeline::{
        runnable::{PlaybackEvent, RunnableTimeline},
        spec::{StartOffset, StepBuilder, TimelineSpec},
    },
};

/// Full-screen intro overlay: staggered words, a reveal box, the logo, then fade out.
#[derive(Debug)]
pub struct Preloader {
    elements: ElementSet,
    root: ElementId,
    container: ElementId,
    words: Vec<ElementId>,
    reveal_box: ElementId,
    tagline: ElementId,
    logo: ElementId,
    timeline: RunnableTimeline,
    visible: bool,
    frame: Option<ListenerGuard>,
}

impl Preloader {
    /// Mount the overlay and start its timeline.
    pub fn mount(stage: &mut Stage, hub: &EventHub) -> StagecraftResult<Self> {
        let mut elements = ElementSet::new("preloader");
        let root = elements.mount(stage, "root");
        let container = elements.mount(stage, "animation");
        let words = PRELOADER_WORDS
            .iter()
            .enumerate()
            .map(|(i, w)| elements.mount_text(stage, &format!("word{i}"), w))
            .collect::<Vec<_>>();
        let reveal_box = elements.mount(stage, "reveal_box");
        let tagline = elements.mount_text(stage, "tagline", PRELOADER_TAGLINE);
        let logo = elements.mount(stage, "logo");

        let mut timeline = schedule(
            "preloader",
            TimelineSpec::builder()
                .step(StepBuilder::new(container).tween(Property::Opacity, 0.0, 1.0))
                .step(
                    StepBuilder::new(words.clone())
                        .tween(Property::Y, 30.0, 0.0)
                        .tween(Property::Opacity, 0.0, 1.0)
                        .stagger(0.4),
                )
                .step(
                    StepBuilder::new(words.clone())
                        .tween(Property::Opacity, 1.0, 0.0)
                        .tween(Property::Y, 0.0, -30.0)
                        .offset(StartOffset::AfterEnd(0.3)),
                )
                .step(
                    StepBuilder::new(reveal_box)
                        .tween(Property::Opacity, 0.0, 1.0)
                        .tween(Property::X, 0.0, -30.0)
                        .duration(0.1),
                )
                .step(
                    StepBuilder::new(reveal_box)
                        .tween(Property::Width, 0.0, 100.0)
                        .tween(Property::X, -30.0, 0.0)
                        .duration(0.45)
                        .offset(StartOffset::AfterEnd(0.1)),
                )
                .step(
                    StepBuilder::new(reveal_box)
                        .tween(Property::Width, 100.0, 0.0)
                        .duration(0.3)
                        .offset(StartOffset::AfterEnd(0.5)),
                )
                .step(
                    StepBuilder::new(vec![tagline, logo])
                        .tween(Property::Opacity, 0.0, 1.0)
                        .offset(StartOffset::AfterEnd(-0.5)),
                )
                .step(
                    StepBuilder::new(vec![tagline, logo])
                        .tween(Property::Opacity, 1.0, 0.0)
                        .tween(Property::Y, 0.0, -30.0)
                        .duration(0.6)
                        .offset(StartOffset::AfterEnd(0.5)),
                )
                .step(
                    StepBuilder::new(root)
                        .tween(Property::Opacity, 1.0, 0.0)
                        .duration(0.8)
                        .ease(Ease::InSine)
                        .offset(StartOffset::AfterEnd(0.2)),
                ),
        )?;
        timeline.seek(0.0, stage);
        timeline.play();
        tracing::debug!(duration = timeline.total_duration(), "preloader started");

        Ok(Self {
            elements,
            root,
            container,
            words,
            reveal_box,
            tagline,
            logo,
            timeline,
            visible: true,
            frame: Some(hub.listen(ListenerKind::Frame, "preloader")),
        })
    }

    /// Return `true` until the exit fade completes.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Overlay timeline.
    pub fn timeline(&self) -> &RunnableTimeline {
        &self.timeline
    }

    /// Overlay root element.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Word elements, in order.
    pub fn words(&self) -> &[ElementId] {
        &self.words
    }
}

impl Section for Preloader {
    fn name(&self) -> &'static str {
        "preloader"
    }

    /// Fixed overlay: covers the viewport, takes no document height.
    fn layout(&mut self, _top: f64, viewport: Viewport, stage: &mut Stage) -> f64 {
        let full = Rect::new(0.0, 0.0, viewport.width, viewport.height);
        let c = viewport.center();
        stage.set_layout(self.root, full);
        stage.set_layout(self.container, full);
        for (i, &w) in self.words.iter().enumerate() {
            let y = c.y - 60.0 + i as f64 * 40.0;
            stage.set_layout(w, Rect::new(c.x - 120.0, y, c.x + 120.0, y + 36.0));
        }
        stage.set_layout(self.reveal_box, Rect::new(c.x - 150.0, c.y - 30.0, c.x + 150.0, c.y + 30.0));
        stage.set_layout(self.logo, Rect::new(c.x - 150.0, c.y - 25.0, c.x - 100.0, c.y + 25.0));
        stage.set_layout(self.tagline, Rect::new(c.x - 90.0, c.y - 18.0, c.x + 150.0, c.y + 18.0));
        0.0
    }

    fn advance(&mut self, dt: f64, stage: &mut Stage) {
        if !self.visible {
            return;
        }
        if self.timeline.advance(dt, stage) == Some(PlaybackEvent::Completed) {
            stage.set_hidden(self.root, true);
            self.visible = false;
            self.frame = None;
            tracing::debug!("preloader finished");
        }
    }

    fn unmount(&mut self, stage: &mut Stage) {
        self.frame = None;
        self.visible = false;
        self.elements.unmount_all(stage);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sections/preloader.rs"]
mod tests;
