use crate::{
    animation::{ease::Ease, property::Property},
    content::{FOOTER_COLUMNS, FOOTER_SOCIALS},
    events::{EventHub, ListenerGuard, ListenerKind},
    foundation::{
        core::{ElementId, Rect, Viewport},
        error::StagecraftResult,
    },
    scroll::{
        binder::{Driver, ScrollBinder, ScrollSample, TriggerId},
        binding::ScrollBinding,
    },
    sections::{ElementSet, Section, band, schedule},
    stage::Stage,
    timeline::{
        runnable::RunnableTimeline,
        spec::{StepBuilder, TimelineSpec},
    },
};

const HEIGHT: f64 = 480.0;

/// Closing section; its content fades up once, the first time it scrolls into view.
#[derive(Debug)]
pub struct Footer {
    elements: ElementSet,
    root: ElementId,
    content: ElementId,
    columns: Vec<ElementId>,
    socials: Vec<ElementId>,
    binder: ScrollBinder,
    trigger: TriggerId,
    listeners: Vec<ListenerGuard>,
}

impl Footer {
    /// Mount the footer with its content hidden until scrolled into view.
    pub fn mount(stage: &mut Stage, hub: &EventHub) -> StagecraftResult<Self> {
        let mut elements = ElementSet::new("footer");
        let root = elements.mount(stage, "root");
        let content = elements.mount(stage, "content");
        let columns = FOOTER_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, c)| elements.mount_text(stage, &format!("column{i}"), c.title))
            .collect();
        let socials = FOOTER_SOCIALS
            .iter()
            .enumerate()
            .map(|(i, s)| elements.mount_text(stage, &format!("social{i}"), s))
            .collect();

        let reveal = schedule(
            "footer",
            TimelineSpec::builder().step(
                StepBuilder::new(content)
                    .tween(Property::Y, 50.0, 0.0)
                    .tween(Property::Opacity, 0.0, 1.0)
                    .duration(1.0)
                    .ease(Ease::OutQuart),
            ),
        )?;
        let mut binder = ScrollBinder::new();
        let trigger = binder.bind(
            root,
            ScrollBinding::parse("top 90%", "bottom top")?
                .toggle_actions("play none none none".parse()?),
            Driver::Timeline(reveal),
            stage,
        )?;

        Ok(Self {
            elements,
            root,
            content,
            columns,
            socials,
            binder,
            trigger,
            listeners: vec![hub.listen(ListenerKind::Scroll, "footer")],
        })
    }

    /// Faded-in content block.
    pub fn content(&self) -> ElementId {
        self.content
    }

    /// Reveal trigger.
    pub fn binder(&self) -> &ScrollBinder {
        &self.binder
    }

    /// Reveal timeline.
    pub fn timeline(&self) -> Option<&RunnableTimeline> {
        self.binder.timeline(self.trigger)
    }

    /// Whether the reveal has started or finished.
    pub fn revealed(&self) -> bool {
        self.binder
            .timeline(self.trigger)
            .is_some_and(|tl| tl.is_playing() || tl.progress() >= 1.0)
    }
}

impl Section for Footer {
    fn name(&self) -> &'static str {
        "footer"
    }

    fn layout(&mut self, top: f64, viewport: Viewport, stage: &mut Stage) -> f64 {
        let w = viewport.width;
        let pad = if w >= 768.0 { 80.0 } else { 24.0 };
        stage.set_layout(self.root, band(top, HEIGHT, viewport));
        stage.set_layout(self.content, Rect::new(pad, top + pad, w - pad, top + HEIGHT - pad));

        let col_w = (w - pad * 2.0) / (self.columns.len() + 1) as f64;
        for (i, &col) in self.columns.iter().enumerate() {
            let x = pad + (i + 1) as f64 * col_w;
            stage.set_layout(col, Rect::new(x, top + pad, x + col_w, top + pad + 200.0));
        }
        let y = top + HEIGHT - pad - 24.0;
        for (i, &s) in self.socials.iter().enumerate() {
            let x = pad + i as f64 * 120.0;
            stage.set_layout(s, Rect::new(x, y, x + 100.0, y + 24.0));
        }
        HEIGHT
    }

    fn scroll(&mut self, sample: &ScrollSample, stage: &mut Stage) {
        self.binder.update(sample, stage);
    }

    fn advance(&mut self, dt: f64, stage: &mut Stage) {
        self.binder.advance(dt, stage);
    }

    fn unmount(&mut self, stage: &mut Stage) {
        self.binder.release(stage);
        self.listeners.clear();
        self.elements.unmount_all(stage);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sections/footer.rs"]
mod tests;
