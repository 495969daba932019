use crate::{
    animation::property::Property,
    config::UseCasesConfig,
    content::{USE_CASES, UseCase},
    events::{EventHub, ListenerGuard, ListenerKind},
    foundation::{
        core::{ElementId, Rect, Viewport},
        error::{StagecraftError, StagecraftResult},
    },
    scroll::{
        binder::{Driver, ScrollBinder, ScrollSample, TriggerEvent, TriggerId},
        binding::{PinTarget, ScrollBinding},
    },
    sections::{ElementSet, Section, band},
    stage::{Stage, Surface},
};

const INACTIVE_OPACITY: f64 = 0.3;
const LINE_HEIGHT: f64 = 28.0;
const PADDING: f64 = 64.0;

/// Types a fixed list of lines one at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct LogTyper {
    lines: &'static [&'static str],
    shown: usize,
    elapsed: f64,
    interval: f64,
}

impl LogTyper {
    /// Typer with every line already shown.
    pub fn complete(lines: &'static [&'static str], interval: f64) -> Self {
        Self {
            lines,
            shown: lines.len(),
            elapsed: 0.0,
            interval,
        }
    }

    /// Start over on `lines`: the first line appears immediately.
    pub fn restart(&mut self, lines: &'static [&'static str]) {
        self.lines = lines;
        self.shown = lines.len().min(1);
        self.elapsed = 0.0;
    }

    /// Advance the typing clock. Returns `true` when a line appeared.
    pub fn advance(&mut self, dt: f64) -> bool {
        if self.is_done() {
            return false;
        }
        self.elapsed += dt.max(0.0);
        let before = self.shown;
        while self.elapsed >= self.interval && !self.is_done() {
            self.elapsed -= self.interval;
            self.shown += 1;
        }
        self.shown != before
    }

    /// Lines typed so far.
    pub fn shown(&self) -> &[&'static str] {
        &self.lines[..self.shown]
    }

    /// Return `true` once every line is visible.
    pub fn is_done(&self) -> bool {
        self.shown >= self.lines.len()
    }
}

/// Case studies beside a pinned terminal that follows the case in view.
#[derive(Debug)]
pub struct UseCases {
    elements: ElementSet,
    root: ElementId,
    panel: ElementId,
    cards: Vec<ElementId>,
    lines: Vec<ElementId>,
    cases: &'static [UseCase],
    active: usize,
    typer: LogTyper,
    pin_min_width: f64,
    binder: ScrollBinder,
    pin: TriggerId,
    case_triggers: Vec<TriggerId>,
    listeners: Vec<ListenerGuard>,
}

impl UseCases {
    /// Mount the section with the first case active.
    pub fn mount(
        stage: &mut Stage,
        hub: &EventHub,
        config: &UseCasesConfig,
    ) -> StagecraftResult<Self> {
        let cases: &'static [UseCase] = &USE_CASES;
        if cases.is_empty() {
            return Err(StagecraftError::validation("use cases need at least one case"));
        }
        let mut elements = ElementSet::new("use_cases");
        let root = elements.mount(stage, "root");
        let panel = elements.mount(stage, "terminal");
        let cards = cases
            .iter()
            .map(|c| elements.mount_text(stage, &format!("case{}", c.id), c.title))
            .collect::<Vec<_>>();
        let max_lines = cases.iter().map(|c| c.logs.len()).max().unwrap_or(0);
        let lines = (0..max_lines)
            .map(|i| {
                let line = elements.mount_text(stage, &format!("terminal.line{i}"), "");
                stage.set_parent(line, panel);
                line
            })
            .collect::<Vec<_>>();

        let mut binder = ScrollBinder::new();
        let pin = binder.bind(
            root,
            ScrollBinding::parse("top top", "bottom bottom")?
                .pin(PinTarget::Element(panel))
                .min_viewport_width(config.pin_min_width),
            Driver::Notify,
            stage,
        )?;
        let case_triggers = cards
            .iter()
            .map(|&card| {
                binder.bind(
                    card,
                    ScrollBinding::parse("top center", "bottom center")?,
                    Driver::Notify,
                    stage,
                )
            })
            .collect::<StagecraftResult<Vec<_>>>()?;

        let this = Self {
            elements,
            root,
            panel,
            cards,
            lines,
            cases,
            active: 0,
            typer: LogTyper::complete(&cases[0].logs, config.log_interval_secs),
            pin_min_width: config.pin_min_width,
            binder,
            pin,
            case_triggers,
            listeners: vec![
                hub.listen(ListenerKind::Scroll, "use_cases"),
                hub.listen(ListenerKind::Interval, "use_cases"),
            ],
        };
        this.present(stage);
        Ok(this)
    }

    /// Index of the case the terminal shows.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Terminal lines typed so far.
    pub fn terminal(&self) -> &[&'static str] {
        self.typer.shown()
    }

    /// Pinned terminal panel.
    pub fn panel(&self) -> ElementId {
        self.panel
    }

    /// Case cards in scroll order.
    pub fn cards(&self) -> &[ElementId] {
        &self.cards
    }

    /// Section root (the pin trigger).
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Pin and case triggers.
    pub fn binder(&self) -> &ScrollBinder {
        &self.binder
    }

    /// Trigger pinning the terminal.
    pub fn pin_trigger(&self) -> TriggerId {
        self.pin
    }

    /// Make case `index` active and restart its terminal.
    pub fn activate(&mut self, index: usize, stage: &mut Stage) {
        if index == self.active || index >= self.cases.len() {
            return;
        }
        tracing::debug!(from = self.active, to = index, "use case switched");
        let cases = self.cases;
        self.active = index;
        self.typer.restart(&cases[index].logs);
        self.present(stage);
    }

    fn present(&self, stage: &mut Stage) {
        for (i, &card) in self.cards.iter().enumerate() {
            let opacity = if i == self.active { 1.0 } else { INACTIVE_OPACITY };
            stage.apply(card, Property::Opacity, opacity);
        }
        let shown = self.typer.shown();
        for (i, &line) in self.lines.iter().enumerate() {
            let text = shown.get(i).copied().unwrap_or_default();
            stage.set_text(line, text);
            stage.apply(line, Property::Opacity, if i < shown.len() { 1.0 } else { 0.0 });
        }
    }
}

impl Section for UseCases {
    fn name(&self) -> &'static str {
        "use_cases"
    }

    fn layout(&mut self, top: f64, viewport: Viewport, stage: &mut Stage) -> f64 {
        let vh = viewport.height;
        let wide = viewport.width >= self.pin_min_width;
        let (panel, height) = if wide {
            let half = viewport.width * 0.5;
            for (i, &card) in self.cards.iter().enumerate() {
                let y = top + i as f64 * vh;
                stage.set_layout(card, Rect::new(PADDING, y, half - PADDING, y + vh));
            }
            let panel = Rect::new(half, top, viewport.width - PADDING, top + vh);
            (panel, self.cards.len() as f64 * vh)
        } else {
            let card_h = vh * 0.8;
            for (i, &card) in self.cards.iter().enumerate() {
                let y = top + i as f64 * card_h;
                stage.set_layout(card, Rect::new(PADDING, y, viewport.width - PADDING, y + card_h));
            }
            let y = top + self.cards.len() as f64 * card_h;
            let panel = Rect::new(PADDING, y, viewport.width - PADDING, y + vh * 0.6);
            (panel, panel.y1 - top)
        };
        stage.set_layout(self.panel, panel);
        for (i, &line) in self.lines.iter().enumerate() {
            let y = panel.y0 + PADDING + i as f64 * LINE_HEIGHT;
            stage.set_layout(line, Rect::new(panel.x0 + 24.0, y, panel.x1 - 24.0, y + LINE_HEIGHT));
        }
        stage.set_layout(self.root, band(top, height, viewport));
        height
    }

    fn scroll(&mut self, sample: &ScrollSample, stage: &mut Stage) {
        let notices = self.binder.update(sample, stage);
        let entered = notices
            .iter()
            .filter(|n| matches!(n.event, TriggerEvent::Enter | TriggerEvent::EnterBack))
            .filter_map(|n| self.case_triggers.iter().position(|&t| t == n.id))
            .last();
        if let Some(index) = entered {
            self.activate(index, stage);
        }
    }

    fn advance(&mut self, dt: f64, stage: &mut Stage) {
        if self.typer.advance(dt) {
            self.present(stage);
        }
    }

    fn unmount(&mut self, stage: &mut Stage) {
        self.binder.release(stage);
        self.listeners.clear();
        self.elements.unmount_all(stage);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sections/use_cases.rs"]
mod tests;
