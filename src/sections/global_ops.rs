use std::collections::VecDeque;

use crate::{
    config::PageConfig,
    content::{
        HUD_BOOT_LOG, HUD_INITIAL_LATENCY_MS, HUD_INITIAL_NODES, HUD_LATENCY_RANGE_MS,
        HUD_MESSAGES, HUD_THREAT_LEVEL,
    },
    events::{EventHub, ListenerGuard, ListenerKind},
    foundation::{
        core::{ElementId, Rect, Viewport},
        error::{StagecraftError, StagecraftResult},
        math::SplitMix64,
    },
    render::scene::{MountedScene, PointerEvent, RenderSurface, SceneRef},
    sections::{ElementSet, Section, band},
    stage::Stage,
};

/// Simulated operations telemetry.
///
/// Every tick random-walks the node count, nudges latency inside [`HUD_LATENCY_RANGE_MS`] and
/// pushes one timestamped message onto a newest-first log.
#[derive(Clone, Debug)]
pub struct OpsHud {
    rng: SplitMix64,
    nodes: i64,
    latency_ms: i64,
    log: VecDeque<String>,
    capacity: usize,
    clock_secs: f64,
}

impl OpsHud {
    /// Fresh HUD seeded from `seed`, holding at most `capacity` log lines.
    pub fn new(seed: u64, capacity: usize) -> StagecraftResult<Self> {
        if capacity == 0 {
            return Err(StagecraftError::validation("HUD log capacity must be >= 1"));
        }
        let mut log: VecDeque<String> = HUD_BOOT_LOG.iter().map(|s| s.to_string()).collect();
        log.truncate(capacity);
        Ok(Self {
            rng: SplitMix64::new(seed),
            nodes: HUD_INITIAL_NODES,
            latency_ms: HUD_INITIAL_LATENCY_MS,
            log,
            capacity,
            clock_secs: 0.0,
        })
    }

    /// Active node count.
    pub fn nodes(&self) -> i64 {
        self.nodes
    }

    /// Current latency in milliseconds.
    pub fn latency_ms(&self) -> i64 {
        self.latency_ms
    }

    /// Log lines, newest first.
    pub fn log(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    /// Number of log lines held.
    pub fn log_len(&self) -> usize {
        self.log.len()
    }

    /// Advance the simulated clock by `elapsed` seconds and produce one update.
    pub fn tick(&mut self, elapsed: f64) {
        self.clock_secs += elapsed.max(0.0);
        self.nodes += self.rng.range_i64(-2, 2);
        let (lo, hi) = HUD_LATENCY_RANGE_MS;
        self.latency_ms = (self.latency_ms + self.rng.range_i64(-5, 4)).clamp(lo, hi);

        let idx = self.rng.range_i64(0, HUD_MESSAGES.len() as i64 - 1) as usize;
        let line = format!("[{}] {}", clock_stamp(self.clock_secs), HUD_MESSAGES[idx]);
        self.log.push_front(line);
        self.log.truncate(self.capacity);
        tracing::trace!(nodes = self.nodes, latency = self.latency_ms, "hud tick");
    }
}

fn clock_stamp(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    format!(
        "{:02}:{:02}:{:02}",
        (total / 3600) % 24,
        (total / 60) % 60,
        total % 60
    )
}

/// Operations dashboard: the point-cloud globe plus a live HUD.
#[derive(Debug)]
pub struct GlobalOps {
    elements: ElementSet,
    root: ElementId,
    canvas: ElementId,
    nodes_text: ElementId,
    latency_text: ElementId,
    threat_text: ElementId,
    log_lines: Vec<ElementId>,
    hud: OpsHud,
    tick_secs: f64,
    since_tick: f64,
    globe: Option<MountedScene>,
    listeners: Vec<ListenerGuard>,
}

impl GlobalOps {
    /// Mount the HUD and try to acquire the globe renderer.
    ///
    /// An unavailable 3D context is not an error: the globe is skipped and the HUD still runs.
    pub fn mount(
        stage: &mut Stage,
        hub: &EventHub,
        config: &PageConfig,
        viewport: Viewport,
    ) -> StagecraftResult<Self> {
        let hud = OpsHud::new(config.seed ^ 0x0b5e_55ed, config.global_ops.log_capacity)?;
        let mut elements = ElementSet::new("global_ops");
        let root = elements.mount(stage, "root");
        let canvas = elements.mount(stage, "globe");
        let nodes_text = elements.mount_text(stage, "hud.nodes", "");
        let latency_text = elements.mount_text(stage, "hud.latency", "");
        let threat_text = elements.mount_text(stage, "hud.threat", HUD_THREAT_LEVEL);
        let log_lines = (0..config.global_ops.log_capacity)
            .map(|i| elements.mount_text(stage, &format!("hud.log{i}"), ""))
            .collect();

        let scene = SceneRef::Globe { tilt_lock: false };
        let surface = RenderSurface::from_viewport(viewport, config.accelerated_graphics);
        let globe = match MountedScene::mount(scene, &config.scene_params(), &surface) {
            Ok(globe) => Some(globe),
            Err(e) => {
                tracing::warn!(error = %e, "globe unavailable; operations section stays static");
                None
            }
        };

        let mut listeners = vec![
            hub.listen(ListenerKind::Interval, "global_ops"),
            hub.listen(ListenerKind::Resize, "global_ops"),
        ];
        if globe.is_some() {
            listeners.push(hub.listen(ListenerKind::Pointer, "global_ops"));
            listeners.push(hub.listen(ListenerKind::Frame, "global_ops"));
        }

        let this = Self {
            elements,
            root,
            canvas,
            nodes_text,
            latency_text,
            threat_text,
            log_lines,
            hud,
            tick_secs: config.global_ops.tick_secs,
            since_tick: 0.0,
            globe,
            listeners,
        };
        this.present(stage);
        Ok(this)
    }

    /// Telemetry state.
    pub fn hud(&self) -> &OpsHud {
        &self.hud
    }

    /// Mounted globe, if the 3D context was available.
    pub fn globe(&self) -> Option<&MountedScene> {
        self.globe.as_ref()
    }

    /// Element showing the active node count.
    pub fn nodes_text(&self) -> ElementId {
        self.nodes_text
    }

    /// Log line elements, newest first.
    pub fn log_lines(&self) -> &[ElementId] {
        &self.log_lines
    }

    fn present(&self, stage: &mut Stage) {
        stage.set_text(self.nodes_text, self.hud.nodes().to_string());
        stage.set_text(self.latency_text, format!("{}ms", self.hud.latency_ms()));
        let mut log = self.hud.log();
        for &line in &self.log_lines {
            stage.set_text(line, log.next().unwrap_or_default());
        }
    }
}

impl Section for GlobalOps {
    fn name(&self) -> &'static str {
        "global_ops"
    }

    fn layout(&mut self, top: f64, viewport: Viewport, stage: &mut Stage) -> f64 {
        let h = viewport.height;
        let w = viewport.width;
        stage.set_layout(self.root, band(top, h, viewport));
        stage.set_layout(self.canvas, band(top, h, viewport));
        let x = if w >= 768.0 { 48.0 } else { 16.0 };
        stage.set_layout(self.nodes_text, Rect::new(x, top + 120.0, x + 220.0, top + 160.0));
        stage.set_layout(self.latency_text, Rect::new(x, top + 170.0, x + 220.0, top + 210.0));
        stage.set_layout(self.threat_text, Rect::new(x, top + 220.0, x + 220.0, top + 260.0));
        let log_top = top + h - 48.0 - self.log_lines.len() as f64 * 20.0;
        for (i, &line) in self.log_lines.iter().enumerate() {
            let y = log_top + i as f64 * 20.0;
            stage.set_layout(line, Rect::new(w - x - 420.0, y, w - x, y + 20.0));
        }
        h
    }

    fn pointer(&mut self, event: PointerEvent) {
        if let Some(globe) = &mut self.globe {
            globe.pointer(event);
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        if let Some(globe) = &mut self.globe {
            globe.resize(viewport);
        }
    }

    fn advance(&mut self, dt: f64, stage: &mut Stage) {
        self.since_tick += dt.max(0.0);
        let mut ticked = false;
        while self.since_tick >= self.tick_secs {
            self.since_tick -= self.tick_secs;
            self.hud.tick(self.tick_secs);
            ticked = true;
        }
        if ticked {
            self.present(stage);
        }
    }

    fn render(&mut self, dt: f64) -> usize {
        self.globe.as_mut().map_or(0, |g| g.frame(dt).len())
    }

    fn unmount(&mut self, stage: &mut Stage) {
        self.globe = None;
        self.listeners.clear();
        self.elements.unmount_all(stage);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sections/global_ops.rs"]
mod tests;
