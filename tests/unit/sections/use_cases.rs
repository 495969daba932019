use super::*;
use crate::stage::PinState;

const VH: f64 = 800.0;
const TOP: f64 = 4000.0;

fn wide() -> Viewport {
    Viewport::new(1440.0, VH).unwrap()
}

fn sample(scroll_y: f64, viewport: Viewport, resized: bool) -> ScrollSample {
    ScrollSample {
        scroll_y,
        viewport,
        resized,
    }
}

fn mounted(viewport: Viewport) -> (Stage, EventHub, UseCases) {
    let mut stage = Stage::new();
    let hub = EventHub::new();
    let mut uc = UseCases::mount(&mut stage, &hub, &UseCasesConfig::default()).unwrap();
    uc.layout(TOP, viewport, &mut stage);
    uc.scroll(&sample(0.0, viewport, true), &mut stage);
    (stage, hub, uc)
}

#[test]
fn typer_shows_first_line_immediately_then_one_per_interval() {
    static LINES: [&str; 3] = ["a", "b", "c"];
    let mut t = LogTyper::complete(&LINES, 1.2);
    assert!(t.is_done());
    t.restart(&LINES);
    assert_eq!(t.shown(), ["a"]);
    assert!(!t.advance(1.0));
    assert!(t.advance(0.3));
    assert_eq!(t.shown(), ["a", "b"]);
    assert!(t.advance(5.0));
    assert!(t.is_done());
    assert!(!t.advance(5.0));
    assert_eq!(t.shown().len(), 3);
}

#[test]
fn starts_on_first_case_with_every_log_line() {
    let (stage, hub, uc) = mounted(wide());
    assert_eq!(uc.active(), 0);
    assert_eq!(uc.terminal(), USE_CASES[0].logs);
    assert_eq!(stage.get(uc.cards()[0], Property::Opacity), Some(1.0));
    assert_eq!(stage.get(uc.cards()[1], Property::Opacity), Some(INACTIVE_OPACITY));
    assert!(hub.is_listening("use_cases", ListenerKind::Interval));
}

#[test]
fn scrolling_switches_case_and_restarts_the_terminal() {
    let (mut stage, _hub, mut uc) = mounted(wide());

    // Case 1 centres once its top passes the middle of the viewport.
    uc.scroll(&sample(TOP + VH * 0.5 + 10.0, wide(), false), &mut stage);
    assert_eq!(uc.active(), 1);
    assert_eq!(uc.terminal(), [USE_CASES[1].logs[0]]);
    assert_eq!(stage.get(uc.cards()[1], Property::Opacity), Some(1.0));
    assert_eq!(stage.get(uc.cards()[0], Property::Opacity), Some(INACTIVE_OPACITY));

    uc.advance(1.2, &mut stage);
    assert_eq!(uc.terminal().len(), 2);

    // Scrolling back up re-enters case 0 from below.
    uc.scroll(&sample(TOP, wide(), false), &mut stage);
    assert_eq!(uc.active(), 0);
    assert_eq!(uc.terminal(), [USE_CASES[0].logs[0]]);
}

#[test]
fn terminal_pins_only_on_wide_viewports() {
    let (mut stage, _hub, mut uc) = mounted(wide());
    uc.scroll(&sample(TOP + VH, wide(), false), &mut stage);
    assert_eq!(
        stage.pin(uc.panel()),
        Some(PinState::Pinned { viewport_top: 0.0 })
    );
    assert_eq!(stage.pin(uc.root()), Some(PinState::Flow));

    let narrow = Viewport::new(600.0, VH).unwrap();
    uc.layout(TOP, narrow, &mut stage);
    uc.scroll(&sample(TOP + VH, narrow, true), &mut stage);
    assert_eq!(stage.pin(uc.panel()), Some(PinState::Flow));
    assert_eq!(uc.binder().progress(uc.pin_trigger()), Some(0.0));
}

#[test]
fn terminal_lines_stay_inside_the_pinned_panel() {
    let (mut stage, _hub, mut uc) = mounted(wide());
    let line = uc.lines[0];
    let offset = stage.layout(line).unwrap().y0 - stage.layout(uc.panel()).unwrap().y0;
    for scroll in [TOP + 50.0, TOP + VH, TOP + 1.5 * VH] {
        uc.scroll(&sample(scroll, wide(), false), &mut stage);
        assert_eq!(stage.viewport_top(uc.panel(), scroll), Some(0.0));
        assert_eq!(stage.viewport_top(line, scroll), Some(offset), "scroll {scroll}");
    }
}

#[test]
fn narrow_layout_stacks_panel_after_cards() {
    let mut stage = Stage::new();
    let hub = EventHub::new();
    let mut uc = UseCases::mount(&mut stage, &hub, &UseCasesConfig::default()).unwrap();
    let narrow = Viewport::new(600.0, VH).unwrap();
    let h = uc.layout(0.0, narrow, &mut stage);
    let last = stage.layout(*uc.cards().last().unwrap()).unwrap();
    let panel = stage.layout(uc.panel()).unwrap();
    assert!(panel.y0 >= last.y1);
    assert_eq!(h, panel.y1);
}

#[test]
fn unmount_releases_pin_listeners_and_elements() {
    let (mut stage, hub, mut uc) = mounted(wide());
    uc.unmount(&mut stage);
    assert!(stage.is_empty());
    assert_eq!(hub.total(), 0);
    assert!(uc.binder().is_empty());
}
