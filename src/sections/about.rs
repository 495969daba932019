use crate::{
    animation::{ease::Ease, property::Property},
    content::ABOUT_PHRASES,
    events::{EventHub, ListenerGuard, ListenerKind},
    foundation::{
        core::{ElementId, Rect, Viewport},
        error::StagecraftResult,
    },
    scroll::{
        binder::{Driver, ScrollBinder, ScrollSample, TriggerId},
        binding::{PinTarget, ScrollBinding},
    },
    sections::{ElementSet, Section, band, schedule},
    stage::Stage,
    timeline::{
        runnable::RunnableTimeline,
        spec::{StartOffset, StepBuilder, TimelineSpec},
    },
};

/// Scroll distance the pinned section holds for.
pub const PIN_DISTANCE: f64 = 2000.0;
const CHAR_STAGGER: f64 = 0.03;
const CHAR_WIDTH: f64 = 32.0;

/// Pinned section that scrubs three phrases in and out, one character at a time.
#[derive(Debug)]
pub struct About {
    elements: ElementSet,
    root: ElementId,
    phrases: Vec<Vec<ElementId>>,
    binder: ScrollBinder,
    trigger: TriggerId,
    listeners: Vec<ListenerGuard>,
}

impl About {
    /// Mount the section and bind its scrubbed timeline.
    pub fn mount(stage: &mut Stage, hub: &EventHub) -> StagecraftResult<Self> {
        let mut elements = ElementSet::new("about");
        let root = elements.mount(stage, "root");
        let phrases: Vec<Vec<ElementId>> = ABOUT_PHRASES
            .iter()
            .enumerate()
            .map(|(p, phrase)| {
                phrase
                    .chars()
                    .enumerate()
                    .map(|(i, c)| {
                        let glyph = if c == ' ' { '\u{a0}' } else { c };
                        let id = elements.mount_text(
                            stage,
                            &format!("phrase{p}.char{i}"),
                            &glyph.to_string(),
                        );
                        stage.set_parent(id, root);
                        id
                    })
                    .collect()
            })
            .collect();

        let out = |ids: &[ElementId]| {
            StepBuilder::new(ids)
                .tween(Property::Y, 0.0, -100.0)
                .tween(Property::Opacity, 1.0, 0.0)
                .stagger(CHAR_STAGGER)
        };
        let into = |ids: &[ElementId]| {
            StepBuilder::new(ids)
                .tween(Property::Y, 100.0, 0.0)
                .tween(Property::Opacity, 0.0, 1.0)
                .stagger(CHAR_STAGGER)
                .offset(StartOffset::AfterEnd(-1.0))
        };
        let timeline = schedule(
            "about",
            TimelineSpec::builder()
                .defaults(1.2, Ease::OutQuint)
                .step(out(&phrases[0]))
                .step(into(&phrases[1]))
                .step(out(&phrases[1]))
                .step(into(&phrases[2])),
        )?;

        let mut binder = ScrollBinder::new();
        let trigger = binder.bind(
            root,
            ScrollBinding::parse("top top", &format!("+={PIN_DISTANCE}"))?
                .scrub(true)
                .pin(PinTarget::Trigger),
            Driver::Timeline(timeline),
            stage,
        )?;

        Ok(Self {
            elements,
            root,
            phrases,
            binder,
            trigger,
            listeners: vec![
                hub.listen(ListenerKind::Scroll, "about"),
                hub.listen(ListenerKind::Resize, "about"),
            ],
        })
    }

    /// Scrub progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.binder.progress(self.trigger).unwrap_or(0.0)
    }

    /// Section root (the pinned element).
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Character elements of phrase `i`.
    pub fn phrase(&self, i: usize) -> &[ElementId] {
        &self.phrases[i]
    }

    /// Scroll binding.
    pub fn binder(&self) -> &ScrollBinder {
        &self.binder
    }

    /// Scrubbed timeline.
    pub fn timeline(&self) -> Option<&RunnableTimeline> {
        self.binder.timeline(self.trigger)
    }
}

impl Section for About {
    fn name(&self) -> &'static str {
        "about"
    }

    fn layout(&mut self, top: f64, viewport: Viewport, stage: &mut Stage) -> f64 {
        let h = viewport.height;
        stage.set_layout(self.root, band(top, h, viewport));
        let mid = top + h * 0.5;
        for chars in &self.phrases {
            let width = chars.len() as f64 * CHAR_WIDTH;
            let mut x = (viewport.width - width) * 0.5;
            for &c in chars {
                stage.set_layout(c, Rect::new(x, mid - 40.0, x + CHAR_WIDTH, mid + 40.0));
                x += CHAR_WIDTH;
            }
        }
        h + PIN_DISTANCE
    }

    fn scroll(&mut self, sample: &ScrollSample, stage: &mut Stage) {
        self.binder.update(sample, stage);
    }

    fn unmount(&mut self, stage: &mut Stage) {
        self.binder.release(stage);
        self.listeners.clear();
        self.elements.unmount_all(stage);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sections/about.rs"]
mod tests;
