//! The landing page: every section mounted on one stage and driven by one frame loop.
//!
//! Per frame the page takes at most one coalesced scroll sample, hands it to every scroll
//! listener, advances timelines and timers, steps the scene renderers and fingerprints the
//! stage.

use crate::{
    config::PageConfig,
    events::{EventHub, ListenerKind},
    foundation::{
        core::Viewport,
        error::{StagecraftError, StagecraftResult},
    },
    nav::NavMenu,
    render::scene::PointerEvent,
    scroll::coalesce::ScrollCoalescer,
    sections::{
        Section, about::About, footer::Footer, global_ops::GlobalOps, hero::Hero,
        preloader::Preloader, services::Services, use_cases::UseCases,
    },
    slides::controller::{RequestOutcome, SlidePhase},
    stage::{Stage, StageFingerprint},
};

/// Summary of one processed frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameReport {
    /// 0-based frame counter.
    pub frame: u64,
    /// Scroll offset the frame was laid out at.
    pub scroll_y: f64,
    /// A scroll sample was consumed this frame.
    pub scrolled: bool,
    /// Stage presentation differs from the previous frame.
    pub changed: bool,
    /// Stage fingerprint after the frame.
    pub fingerprint: StageFingerprint,
    /// Hero slide state.
    pub slide: SlidePhase,
    /// Hero slide currently shown.
    pub active_slide: usize,
    /// The preloader overlay is still up.
    pub preloader_visible: bool,
    /// Use case the terminal shows.
    pub active_use_case: usize,
    /// Display-list ops emitted by scene renderers.
    pub draw_ops: usize,
}

#[derive(Debug)]
struct Sections {
    preloader: Option<Preloader>,
    hero: Hero,
    about: About,
    services: Services,
    use_cases: UseCases,
    global_ops: GlobalOps,
    footer: Footer,
}

impl Sections {
    /// Sections in document order; the preloader overlay first while it exists.
    fn iter_mut(&mut self) -> impl Iterator<Item = &mut dyn Section> {
        let flow: [&mut dyn Section; 6] = [
            &mut self.hero,
            &mut self.about,
            &mut self.services,
            &mut self.use_cases,
            &mut self.global_ops,
            &mut self.footer,
        ];
        self.preloader
            .as_mut()
            .map(|p| p as &mut dyn Section)
            .into_iter()
            .chain(flow)
    }
}

/// Headless landing page.
#[derive(Debug)]
pub struct LandingPage {
    config: PageConfig,
    stage: Stage,
    hub: EventHub,
    viewport: Viewport,
    coalescer: ScrollCoalescer,
    nav: NavMenu,
    sections: Sections,
    document_height: f64,
    frame_index: u64,
    last_fingerprint: Option<StageFingerprint>,
}

impl LandingPage {
    /// Validate `config`, mount every section and lay the page out at `viewport`.
    #[tracing::instrument(skip(config), fields(width = viewport.width, height = viewport.height))]
    pub fn mount(config: PageConfig, viewport: Viewport) -> StagecraftResult<Self> {
        config.validate()?;
        let mut stage = Stage::new();
        let hub = EventHub::new();

        let preloader = if config.preloader {
            Some(Preloader::mount(&mut stage, &hub)?)
        } else {
            None
        };
        let sections = Sections {
            preloader,
            hero: Hero::mount(&mut stage, &hub, &config, viewport)?,
            about: About::mount(&mut stage, &hub)?,
            services: Services::mount(&mut stage, &hub)?,
            use_cases: UseCases::mount(&mut stage, &hub, &config.use_cases)?,
            global_ops: GlobalOps::mount(&mut stage, &hub, &config, viewport)?,
            footer: Footer::mount(&mut stage, &hub)?,
        };

        let mut page = Self {
            config,
            stage,
            hub,
            viewport,
            coalescer: ScrollCoalescer::new(0.0, viewport),
            nav: NavMenu::default(),
            sections,
            document_height: 0.0,
            frame_index: 0,
            last_fingerprint: None,
        };
        page.layout();
        tracing::info!(
            elements = page.stage.len(),
            listeners = page.hub.total(),
            document_height = page.document_height,
            "landing page mounted"
        );
        Ok(page)
    }

    fn layout(&mut self) {
        let mut top = 0.0;
        for section in self.sections.iter_mut() {
            let h = section.layout(top, self.viewport, &mut self.stage);
            tracing::trace!(section = section.name(), top, height = h, "section laid out");
            top += h;
        }
        self.document_height = top;
    }

    /// Page tunables.
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Presentation state.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Listener registry.
    pub fn hub(&self) -> &EventHub {
        &self.hub
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Total document height, including pinned scroll distance.
    pub fn document_height(&self) -> f64 {
        self.document_height
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport.height).max(0.0)
    }

    /// Latest requested scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.coalescer.scroll_y()
    }

    /// Frames processed so far.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Navigation menu.
    pub fn nav(&self) -> &NavMenu {
        &self.nav
    }

    /// Navigation menu, mutably.
    pub fn nav_mut(&mut self) -> &mut NavMenu {
        &mut self.nav
    }

    /// Hero section.
    pub fn hero(&self) -> &Hero {
        &self.sections.hero
    }

    /// About section.
    pub fn about(&self) -> &About {
        &self.sections.about
    }

    /// Services section.
    pub fn services(&self) -> &Services {
        &self.sections.services
    }

    /// Use-case section.
    pub fn use_cases(&self) -> &UseCases {
        &self.sections.use_cases
    }

    /// Operations section.
    pub fn global_ops(&self) -> &GlobalOps {
        &self.sections.global_ops
    }

    /// Footer section.
    pub fn footer(&self) -> &Footer {
        &self.sections.footer
    }

    /// Preloader, until it finishes.
    pub fn preloader(&self) -> Option<&Preloader> {
        self.sections.preloader.as_ref()
    }

    /// Record a scroll notification; it is applied on the next frame.
    pub fn scroll_to(&mut self, scroll_y: f64) {
        self.coalescer.push_scroll(scroll_y.min(self.max_scroll()));
    }

    /// Apply a viewport change: re-layout, resize renderers and re-measure triggers next frame.
    #[tracing::instrument(skip(self), fields(width = viewport.width, height = viewport.height))]
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.layout();
        let hub = &self.hub;
        for section in self.sections.iter_mut() {
            if hub.is_listening(section.name(), ListenerKind::Resize) {
                section.resize(viewport);
            }
        }
        self.coalescer.push_resize(viewport);
        let max = self.max_scroll();
        if self.coalescer.scroll_y() > max {
            self.coalescer.push_scroll(max);
        }
    }

    /// Route a pointer move to sections listening for pointer input.
    pub fn pointer(&mut self, x: f64, y: f64) {
        let event = PointerEvent::new(x, y, self.viewport);
        let hub = &self.hub;
        for section in self.sections.iter_mut() {
            if hub.is_listening(section.name(), ListenerKind::Pointer) {
                section.pointer(event);
            }
        }
    }

    /// Hero indicator click.
    pub fn select_slide(&mut self, index: usize) -> StagecraftResult<RequestOutcome> {
        self.sections.hero.select(index)
    }

    /// Process one frame of `dt` seconds.
    pub fn frame(&mut self, dt: f64) -> StagecraftResult<FrameReport> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(StagecraftError::validation("frame dt must be finite and >= 0"));
        }
        let sample = self.coalescer.take();
        let hub = &self.hub;
        let stage = &mut self.stage;
        let mut draw_ops = 0;
        for section in self.sections.iter_mut() {
            if let Some(sample) = &sample
                && hub.is_listening(section.name(), ListenerKind::Scroll)
            {
                section.scroll(sample, stage);
            }
            section.advance(dt, stage);
            draw_ops += section.render(dt);
        }

        if let Some(p) = &mut self.sections.preloader
            && !p.is_visible()
        {
            p.unmount(&mut self.stage);
            self.sections.preloader = None;
            tracing::debug!(frame = self.frame_index, "preloader removed");
        }

        let fingerprint = self.stage.fingerprint();
        let changed = self.last_fingerprint != Some(fingerprint);
        self.last_fingerprint = Some(fingerprint);
        let hero = &self.sections.hero;
        let report = FrameReport {
            frame: self.frame_index,
            scroll_y: self.coalescer.scroll_y(),
            scrolled: sample.is_some(),
            changed,
            fingerprint,
            slide: hero.phase(),
            active_slide: hero.controller().active_index(),
            preloader_visible: self.sections.preloader.is_some(),
            active_use_case: self.sections.use_cases.active(),
            draw_ops,
        };
        tracing::trace!(frame = report.frame, changed, draw_ops, "frame processed");
        self.frame_index += 1;
        Ok(report)
    }

    /// Tear every section down. The stage and listener registry end up empty.
    pub fn unmount(mut self) -> Stage {
        let stage = &mut self.stage;
        for section in self.sections.iter_mut() {
            section.unmount(stage);
        }
        tracing::info!(
            remaining_elements = self.stage.len(),
            remaining_listeners = self.hub.total(),
            "landing page unmounted"
        );
        std::mem::take(&mut self.stage)
    }
}

#[cfg(test)]
#[path = "../tests/unit/page.rs"]
mod tests;
