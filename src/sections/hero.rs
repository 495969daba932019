use crate::{
    animation::{ease::Ease, property::Property},
    config::PageConfig,
    content::{HERO_CTA, HERO_SLIDES, HeroSlide},
    events::{EventHub, ListenerGuard, ListenerKind},
    foundation::{
        core::{ElementId, Rect, Viewport},
        error::StagecraftResult,
    },
    render::scene::{MountedScene, PointerEvent, RenderSurface, SceneParams},
    sections::{ElementSet, Section, band, schedule},
    slides::controller::{AutoAdvance, RequestOutcome, SlideController, SlideEvent, SlidePhase},
    stage::Stage,
    timeline::spec::{StartOffset, StepBuilder, TimelineSpec},
};

/// Full-viewport hero: rotating slide copy over a swappable background scene.
#[derive(Debug)]
pub struct Hero {
    elements: ElementSet,
    root: ElementId,
    canvas: ElementId,
    title_top: ElementId,
    title_bottom: ElementId,
    tags: Vec<ElementId>,
    description: ElementId,
    button: ElementId,
    slides: &'static [HeroSlide],
    controller: SlideController,
    scene: Option<MountedScene>,
    params: SceneParams,
    surface: RenderSurface,
    last_events: Vec<SlideEvent>,
    listeners: Vec<ListenerGuard>,
}

impl Hero {
    /// Mount the hero on slide 0 and start its entrance.
    pub fn mount(
        stage: &mut Stage,
        hub: &EventHub,
        config: &PageConfig,
        viewport: Viewport,
    ) -> StagecraftResult<Self> {
        let slides: &'static [HeroSlide] = &HERO_SLIDES;
        let first = &slides[0];
        let mut elements = ElementSet::new("hero");
        let root = elements.mount(stage, "root");
        let canvas = elements.mount(stage, "canvas");
        let title_top = elements.mount_text(stage, "title_top", first.title_top);
        let title_bottom = elements.mount_text(stage, "title_bottom", first.title_bottom);
        let tags = first
            .tags
            .iter()
            .enumerate()
            .map(|(i, t)| elements.mount_text(stage, &format!("tag{i}"), t))
            .collect::<Vec<_>>();
        let description = elements.mount_text(stage, "description", first.description);
        let button = elements.mount_text(stage, "button", HERO_CTA);
        let titles = vec![title_top, title_bottom];

        let intro = schedule(
            "hero intro",
            TimelineSpec::builder()
                .defaults(1.2, Ease::OutQuart)
                .step(
                    StepBuilder::new(title_top)
                        .tween(Property::Y, 100.0, 0.0)
                        .tween(Property::Opacity, 0.0, 1.0)
                        .offset(StartOffset::AfterEnd(0.5)),
                )
                .step(
                    StepBuilder::new(title_bottom)
                        .tween(Property::Y, 100.0, 0.0)
                        .tween(Property::Opacity, 0.0, 1.0)
                        .offset(StartOffset::AfterEnd(-1.0)),
                )
                .step(
                    StepBuilder::new(tags.clone())
                        .tween(Property::Y, 20.0, 0.0)
                        .tween(Property::Opacity, 0.0, 1.0)
                        .stagger(0.1)
                        .offset(StartOffset::AfterEnd(-0.8)),
                )
                .step(
                    StepBuilder::new(description)
                        .tween(Property::Y, 20.0, 0.0)
                        .tween(Property::Opacity, 0.0, 1.0)
                        .offset(StartOffset::AfterEnd(-0.8)),
                )
                .step(
                    StepBuilder::new(button)
                        .tween(Property::Scale, 0.8, 1.0)
                        .tween(Property::Opacity, 0.0, 1.0)
                        .offset(StartOffset::AfterEnd(-0.6)),
                ),
        )?;

        let mut leaving = titles.clone();
        leaving.extend(&tags);
        leaving.push(description);
        let exit = schedule(
            "hero exit",
            TimelineSpec::builder().step(
                StepBuilder::new(leaving)
                    .tween(Property::Y, 0.0, -60.0)
                    .tween(Property::Opacity, 1.0, 0.0)
                    .duration(0.5)
                    .ease(Ease::InCubic),
            ),
        )?;

        let entry = schedule(
            "hero entry",
            TimelineSpec::builder()
                .defaults(0.8, Ease::OutQuart)
                .step(
                    StepBuilder::new(titles)
                        .tween(Property::Y, 100.0, 0.0)
                        .tween(Property::Opacity, 0.0, 1.0),
                )
                .step(
                    StepBuilder::new(tags.clone())
                        .tween(Property::Y, 20.0, 0.0)
                        .tween(Property::Opacity, 0.0, 1.0)
                        .duration(0.4)
                        .stagger(0.1),
                )
                .step(
                    StepBuilder::new(description)
                        .tween(Property::Y, 20.0, 0.0)
                        .tween(Property::Opacity, 0.0, 1.0)
                        .duration(0.6)
                        .offset(StartOffset::WithPrevious(0.0)),
                ),
        )?;

        let mut controller = SlideController::new(slides.len(), exit, entry)?;
        if config.hero.intro {
            controller = controller.with_intro(intro);
        }
        if let Some(period) = config.hero.auto_advance_secs {
            controller = controller.with_auto_advance(AutoAdvance::every(period)?);
        }
        controller.start(stage);

        let params = config.scene_params();
        let surface = RenderSurface::from_viewport(viewport, config.accelerated_graphics);
        let scene = mount_scene(first, &params, &surface);

        Ok(Self {
            elements,
            root,
            canvas,
            title_top,
            title_bottom,
            tags,
            description,
            button,
            slides,
            controller,
            scene,
            params,
            surface,
            last_events: Vec::new(),
            listeners: vec![
                hub.listen(ListenerKind::Pointer, "hero"),
                hub.listen(ListenerKind::Resize, "hero"),
                hub.listen(ListenerKind::Frame, "hero"),
            ],
        })
    }

    /// Slide state machine.
    pub fn controller(&self) -> &SlideController {
        &self.controller
    }

    /// Current slide phase.
    pub fn phase(&self) -> SlidePhase {
        self.controller.phase()
    }

    /// Indicator click.
    pub fn select(&mut self, index: usize) -> StagecraftResult<RequestOutcome> {
        self.controller.request_transition(index)
    }

    /// Slide events produced by the most recent [`Section::advance`].
    pub fn last_events(&self) -> &[SlideEvent] {
        &self.last_events
    }

    /// Currently mounted background scene, if any.
    pub fn scene(&self) -> Option<&MountedScene> {
        self.scene.as_ref()
    }

    /// Title elements (top, bottom).
    pub fn titles(&self) -> (ElementId, ElementId) {
        (self.title_top, self.title_bottom)
    }

    /// Call-to-action button element.
    pub fn button(&self) -> ElementId {
        self.button
    }

    fn show_slide(&mut self, index: usize, stage: &mut Stage) {
        let slide = self.slides[index];
        stage.set_text(self.title_top, slide.title_top);
        stage.set_text(self.title_bottom, slide.title_bottom);
        for (&el, tag) in self.tags.iter().zip(slide.tags) {
            stage.set_text(el, tag);
        }
        stage.set_text(self.description, slide.description);

        if self.scene.as_ref().map(MountedScene::scene) != Some(slide.scene) {
            // Dispose the old scene before acquiring the new one.
            self.scene = None;
            self.scene = mount_scene(&slide, &self.params, &self.surface);
        }
    }
}

fn mount_scene(
    slide: &HeroSlide,
    params: &SceneParams,
    surface: &RenderSurface,
) -> Option<MountedScene> {
    match MountedScene::mount(slide.scene, params, surface) {
        Ok(scene) => Some(scene),
        Err(e) => {
            tracing::warn!(slide = slide.id, error = %e, "hero background unavailable; showing static backdrop");
            None
        }
    }
}

impl Section for Hero {
    fn name(&self) -> &'static str {
        "hero"
    }

    fn layout(&mut self, top: f64, viewport: Viewport, stage: &mut Stage) -> f64 {
        let h = viewport.height;
        let w = viewport.width;
        let pad_x = if w >= 768.0 { 80.0 } else { 24.0 };
        let mut y = top + if w >= 768.0 { 192.0 } else { 160.0 };
        let line = (w * 0.12).min(160.0) * 0.85;

        stage.set_layout(self.root, band(top, h, viewport));
        stage.set_layout(self.canvas, band(top, h, viewport));
        stage.set_layout(self.title_top, Rect::new(pad_x, y, w - pad_x, y + line));
        y += line + 16.0;
        let indent = pad_x + w * 0.1;
        stage.set_layout(self.title_bottom, Rect::new(indent, y, w - pad_x, y + line));
        y += line + 48.0;
        let mut x = pad_x;
        for &tag in &self.tags {
            stage.set_layout(tag, Rect::new(x, y, x + 120.0, y + 28.0));
            x += 136.0;
        }
        y += 28.0 + 40.0;
        stage.set_layout(self.description, Rect::new(pad_x, y, pad_x + 448.0, y + 72.0));
        y += 72.0 + 40.0;
        stage.set_layout(self.button, Rect::new(pad_x, y, pad_x + 260.0, y + 60.0));
        h
    }

    fn pointer(&mut self, event: PointerEvent) {
        if let Some(scene) = &mut self.scene {
            scene.pointer(event);
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        self.surface = RenderSurface::from_viewport(viewport, self.surface.accelerated);
        if let Some(scene) = &mut self.scene {
            scene.resize(viewport);
        }
    }

    fn advance(&mut self, dt: f64, stage: &mut Stage) {
        self.last_events.clear();
        let events = self.controller.tick(dt, stage);
        for ev in events {
            if let SlideEvent::Swapped { to, .. } = ev {
                self.show_slide(to, stage);
            }
            self.last_events.push(ev);
        }
    }

    fn render(&mut self, dt: f64) -> usize {
        self.scene.as_mut().map_or(0, |s| s.frame(dt).len())
    }

    fn unmount(&mut self, stage: &mut Stage) {
        self.scene = None;
        self.listeners.clear();
        self.elements.unmount_all(stage);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sections/hero.rs"]
mod tests;
