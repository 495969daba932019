use std::{
    io::{BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stagecraft", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved tween table of one section timeline as JSON.
    Timeline(TimelineArgs),
    /// Run the landing page headlessly and print one JSON frame report per line.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Timeline to dump.
    #[arg(value_enum)]
    section: TimelineChoice,

    /// Page config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Page config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Simulated seconds.
    #[arg(long, default_value_t = 12.0)]
    duration: f64,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1440.0)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Scroll keyframes `t:y` (seconds:pixels), comma separated, linearly interpolated.
    #[arg(long, default_value = "0:0")]
    scroll: String,

    /// Only print frames whose stage changed.
    #[arg(long)]
    changes_only: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TimelineChoice {
    Preloader,
    HeroIntro,
    HeroExit,
    HeroEntry,
    About,
    Services,
    Footer,
}

#[derive(serde::Serialize)]
struct TimelineDump<'a> {
    section: String,
    total_duration: f64,
    tweens: &'a [stagecraft::ResolvedTween],
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Timeline(args) => cmd_timeline(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_config(path: Option<&PathBuf>) -> anyhow::Result<stagecraft::PageConfig> {
    match path {
        Some(p) => stagecraft::PageConfig::from_path(p)
            .with_context(|| format!("load page config '{}'", p.display())),
        None => Ok(stagecraft::PageConfig::default()),
    }
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let mut config = read_config(args.config.as_ref())?;
    config.preloader = true;
    config.hero.intro = true;
    let viewport = stagecraft::Viewport::new(1440.0, 900.0)?;
    let page = stagecraft::LandingPage::mount(config, viewport).context("mount landing page")?;

    let hero = page.hero().controller();
    let timeline = match args.section {
        TimelineChoice::Preloader => page.preloader().map(|p| p.timeline()),
        TimelineChoice::HeroIntro => hero.intro(),
        TimelineChoice::HeroExit => Some(hero.exit()),
        TimelineChoice::HeroEntry => Some(hero.entry()),
        TimelineChoice::About => page.about().timeline(),
        TimelineChoice::Services => page.services().entrance_of(0),
        TimelineChoice::Footer => page.footer().timeline(),
    }
    .with_context(|| format!("timeline {:?} is not mounted", args.section))?;

    let dump = TimelineDump {
        section: format!("{:?}", args.section),
        total_duration: timeline.total_duration(),
        tweens: timeline.resolved().tweens(),
    };
    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &dump).context("write timeline JSON")?;
    println!();
    Ok(())
}

fn parse_scroll_script(s: &str) -> anyhow::Result<Vec<(f64, f64)>> {
    let mut keys = s
        .split(',')
        .filter(|k| !k.trim().is_empty())
        .map(|k| {
            let (t, y) = k
                .split_once(':')
                .with_context(|| format!("scroll keyframe '{k}' must be 't:y'"))?;
            let t: f64 = t.trim().parse().with_context(|| format!("keyframe time '{t}'"))?;
            let y: f64 = y.trim().parse().with_context(|| format!("keyframe offset '{y}'"))?;
            anyhow::ensure!(t.is_finite() && y.is_finite(), "keyframe '{k}' must be finite");
            Ok((t, y))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    anyhow::ensure!(!keys.is_empty(), "scroll script needs at least one keyframe");
    keys.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(keys)
}

fn scroll_at(keys: &[(f64, f64)], t: f64) -> f64 {
    let idx = keys.partition_point(|k| k.0 <= t);
    match (idx.checked_sub(1).map(|i| keys[i]), keys.get(idx)) {
        (Some((t0, y0)), Some(&(t1, y1))) if t1 > t0 => y0 + (y1 - y0) * (t - t0) / (t1 - t0),
        (Some((_, y)), _) => y,
        (None, Some(&(_, y))) => y,
        (None, None) => 0.0,
    }
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "fps must be > 0");
    anyhow::ensure!(
        args.duration.is_finite() && args.duration >= 0.0,
        "duration must be finite and >= 0"
    );
    let config = read_config(args.config.as_ref())?;
    let keys = parse_scroll_script(&args.scroll)?;
    let viewport = stagecraft::Viewport::new(args.width, args.height)?;
    let mut page = stagecraft::LandingPage::mount(config, viewport).context("mount landing page")?;

    let dt = 1.0 / f64::from(args.fps);
    let frames = (args.duration * f64::from(args.fps)).round() as u64;
    let mut out = BufWriter::new(std::io::stdout().lock());
    let mut printed = 0u64;
    for i in 0..frames {
        page.scroll_to(scroll_at(&keys, i as f64 * dt));
        let report = page.frame(dt)?;
        if args.changes_only && !report.changed {
            continue;
        }
        serde_json::to_writer(&mut out, &report).context("write frame report")?;
        writeln!(out).context("write frame report")?;
        printed += 1;
    }
    out.flush().context("flush frame reports")?;

    let stage = page.unmount();
    tracing::info!(frames, printed, leftover_elements = stage.len(), "simulation finished");
    Ok(())
}
