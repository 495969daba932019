use crate::{
    animation::{ease::Ease, property::Property},
    content::{SERVICE_FALLBACK_FROM, SERVICES, ServiceCard},
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

const COLUMNS: u8 = 3;
const GRID_MIN_WIDTH: f64 = 768.0;
const PADDING: f64 = 96.0;
const HEADING_HEIGHT: f64 = 160.0;
const CARD_HEIGHT: f64 = 320.0;
const GAP: f64 = 24.0;

/// Slide-and-fade entrance for one card.
pub fn entrance(card: ElementId, from: (f64, f64)) -> StagecraftResult<RunnableTimeline> {
    schedule(
        "services",
        TimelineSpec::builder().step(
            StepBuilder::new(card)
                .tween(Property::X, from.0, 0.0)
                .tween(Property::Y, from.1, 0.0)
                .tween(Property::Opacity, 0.0, 1.0)
                .duration(2.0)
                .ease(Ease::OutCubic),
        ),
    )
}

/// Grid of service cards, each revealed by its own scroll trigger.
#[derive(Debug)]
pub struct Services {
    elements: ElementSet,
    root: ElementId,
    heading: ElementId,
    cards: Vec<ElementId>,
    spans: Vec<u8>,
    binder: ScrollBinder,
    triggers: Vec<TriggerId>,
    listeners: Vec<ListenerGuard>,
}

impl Services {
    /// Mount the default service cards.
    pub fn mount(stage: &mut Stage, hub: &EventHub) -> StagecraftResult<Self> {
        Self::mount_cards(stage, hub, &SERVICES)
    }

    /// Mount an arbitrary card list.
    pub fn mount_cards(
        stage: &mut Stage,
        hub: &EventHub,
        services: &[ServiceCard],
    ) -> StagecraftResult<Self> {
        let mut elements = ElementSet::new("services");
        let root = elements.mount(stage, "root");
        let heading = elements.mount_text(stage, "heading", "Our Services");
        let mut binder = ScrollBinder::new();
        let mut cards = Vec::with_capacity(services.len());
        let mut triggers = Vec::with_capacity(services.len());

        for (i, svc) in services.iter().enumerate() {
            let card = elements.mount_text(stage, &format!("card{i}"), svc.title);
            let from = if svc.enter_from == (0.0, 0.0) {
                SERVICE_FALLBACK_FROM
            } else {
                svc.enter_from
            };
            let trigger = binder.bind(
                card,
                ScrollBinding::parse("top 75%", "bottom 20%")?,
                Driver::Timeline(entrance(card, from)?),
                stage,
            )?;
            cards.push(card);
            triggers.push(trigger);
        }

        Ok(Self {
            elements,
            root,
            heading,
            cards,
            spans: services.iter().map(|s| s.col_span.clamp(1, COLUMNS)).collect(),
            binder,
            triggers,
            listeners: vec![hub.listen(ListenerKind::Scroll, "services")],
        })
    }

    /// Card elements in grid order.
    pub fn cards(&self) -> &[ElementId] {
        &self.cards
    }

    /// Entrance timeline of card `i`.
    pub fn entrance_of(&self, i: usize) -> Option<&RunnableTimeline> {
        self.binder.timeline(*self.triggers.get(i)?)
    }

    /// Card triggers.
    pub fn binder(&self) -> &ScrollBinder {
        &self.binder
    }
}

impl Section for Services {
    fn name(&self) -> &'static str {
        "services"
    }

    fn layout(&mut self, top: f64, viewport: Viewport, stage: &mut Stage) -> f64 {
        let inner = (viewport.width - PADDING * 2.0).max(0.0);
        stage.set_layout(
            self.heading,
            Rect::new(PADDING, top + PADDING, PADDING + inner, top + PADDING + HEADING_HEIGHT),
        );

        let grid = viewport.width >= GRID_MIN_WIDTH;
        let col_w = (inner - GAP * f64::from(COLUMNS - 1)) / f64::from(COLUMNS);
        let mut y = top + PADDING + HEADING_HEIGHT;
        let mut col = 0u8;
        for (&card, &span) in self.cards.iter().zip(&self.spans) {
            let rect = if grid {
                if col + span > COLUMNS {
                    col = 0;
                    y += CARD_HEIGHT + GAP;
                }
                let x0 = PADDING + f64::from(col) * (col_w + GAP);
                let w = col_w * f64::from(span) + GAP * f64::from(span - 1);
                col += span;
                Rect::new(x0, y, x0 + w, y + CARD_HEIGHT)
            } else {
                let r = Rect::new(PADDING, y, PADDING + inner, y + CARD_HEIGHT);
                y += CARD_HEIGHT + GAP;
                r
            };
            stage.set_layout(card, rect);
        }
        if grid && col > 0 {
            y += CARD_HEIGHT + GAP;
        }

        let height = y - GAP + PADDING - top;
        stage.set_layout(self.root, band(top, height, viewport));
        height
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
#[path = "../../tests/unit/sections/services.rs"]
mod tests;
