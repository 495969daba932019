//! Static copy and configuration tables for the landing page.

use crate::render::scene::SceneRef;

/// One hero slide.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HeroSlide {
    /// Stable id.
    pub id: &'static str,
    /// First title line.
    pub title_top: &'static str,
    /// Second, indented title line.
    pub title_bottom: &'static str,
    /// Pill tags under the title.
    pub tags: [&'static str; 3],
    /// Paragraph under the tags.
    pub description: &'static str,
    /// Background scene shown behind this slide.
    pub scene: SceneRef,
}

/// Hero content variants, in rotation order.
pub const HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide {
        id: "cloud-edge",
        title_top: "CLOUD",
        title_bottom: "& EDGE",
        tags: ["PUBLIC", "HYBRID", "ON-PREM"],
        description: "Norton-Gauss provides seamless cloud and edge solutions that empower your \
                      business with high-performance computing and intelligent data management.",
        scene: SceneRef::ParticleField { hue: 70.0 },
    },
    HeroSlide {
        id: "global-ops",
        title_top: "GLOBAL",
        title_bottom: "OPERATIONS",
        tags: ["NOC", "SOC", "AIOPS"],
        description: "Autonomous network and security operations that watch every node, on every \
                      continent, around the clock.",
        scene: SceneRef::Globe { tilt_lock: true },
    },
    HeroSlide {
        id: "ai-agents",
        title_top: "AI",
        title_bottom: "& AGENTS",
        tags: ["GENERATIVE", "AUTONOMOUS", "SECURE"],
        description: "Generative AI solutions that automate complex decision-making.",
        scene: SceneRef::ParticleField { hue: 190.0 },
    },
];

/// Call to action under the hero copy.
pub const HERO_CTA: &str = "KNOW MORE";

/// Pinned about-section phrases, shown one after another.
pub const ABOUT_PHRASES: [&str; 3] = [
    "We are Norton-Gauss",
    "We operate in industries where",
    "System Cannot fail",
];

/// Service card.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ServiceCard {
    /// Card heading.
    pub title: &'static str,
    /// One-line pitch.
    pub description: &'static str,
    /// Icon name.
    pub icon: &'static str,
    /// Grid columns spanned at desktop widths (of 3).
    pub col_span: u8,
    /// Entrance offset `(x, y)` the card slides in from.
    pub enter_from: (f64, f64),
}

/// Service cards in grid order.
pub const SERVICES: [ServiceCard; 5] = [
    ServiceCard {
        title: "Digital Strategy & Transformation",
        description: "Aligning technology with business goals for scalable growth.",
        icon: "network",
        col_span: 2,
        enter_from: (0.0, -100.0),
    },
    ServiceCard {
        title: "Automation & RPA",
        description: "Streamlining operations with intelligent process automation.",
        icon: "cpu",
        col_span: 1,
        enter_from: (100.0, 0.0),
    },
    ServiceCard {
        title: "Cloud & Edge Computing",
        description: "Resilient infrastructure for the modern distributed enterprise.",
        icon: "cloud",
        col_span: 1,
        enter_from: (-100.0, 0.0),
    },
    ServiceCard {
        title: "Observability & Monitoring",
        description: "Full-stack visibility to prevent downtime before it happens.",
        icon: "activity",
        col_span: 2,
        enter_from: (100.0, 0.0),
    },
    ServiceCard {
        title: "AI & Intelligent Agents",
        description: "Generative AI solutions that automate complex decision-making.",
        icon: "bot",
        col_span: 3,
        enter_from: (0.0, 100.0),
    },
];

/// Offset used for cards beyond the authored directions.
pub const SERVICE_FALLBACK_FROM: (f64, f64) = (0.0, 50.0);

/// Customer case study.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct UseCase {
    /// Display number.
    pub id: &'static str,
    /// Heading.
    pub title: &'static str,
    /// Industry tag.
    pub industry: &'static str,
    /// Problem statement.
    pub challenge: &'static str,
    /// What was deployed.
    pub solution: &'static str,
    /// Headline result.
    pub stat: &'static str,
    /// Icon name.
    pub icon: &'static str,
    /// Accent color, `0xRRGGBB`.
    pub accent: u32,
    /// Terminal lines typed out when the case becomes active.
    pub logs: [&'static str; 4],
}

/// Case studies in scroll order.
pub const USE_CASES: [UseCase; 3] = [
    UseCase {
        id: "01",
        title: "Global Telecom Network",
        industry: "Telecom",
        challenge: "Managing 50M+ active subscribers with <99.9% uptime.",
        solution: "Deployed autonomous NOC with predictive failure analysis.",
        stat: "40% Reduced MTTR",
        icon: "globe",
        accent: 0xd9ff00,
        logs: [
            "Analyzing traffic patterns...",
            "Node redundancy: ACTIVE",
            "Latency optimized: 12ms",
            "Subscriber load: STABLE",
        ],
    },
    UseCase {
        id: "02",
        title: "FinTech Security Ops",
        industry: "Finance",
        challenge: "Detecting fraudulent transactions in micro-seconds.",
        solution: "Real-time anomaly detection pipeline with edge inference.",
        stat: "$2B+ Assets Secured",
        icon: "lock",
        accent: 0x00ff9d,
        logs: [
            "Scanning transaction pool...",
            "Heuristic match: 99.4%",
            "Fraud vector BLOCKED",
            "Ledger sync: COMPLETE",
        ],
    },
    UseCase {
        id: "03",
        title: "Smart Mfg. Grid",
        industry: "Manufacturing",
        challenge: "Zero-tolerance for assembly line latency.",
        solution: "IoT sensor fusion with local edge processing clusters.",
        stat: "Zero Unplanned Downtime",
        icon: "cpu",
        accent: 0x00d9ff,
        logs: [
            "Sensor calibration: OK",
            "Assembly throughput: 100%",
            "Thermal load: NOMINAL",
            "Predictive maint. scheduled",
        ],
    },
];

/// Operations HUD starting values.
pub const HUD_INITIAL_NODES: i64 = 842;
/// Operations HUD starting latency in milliseconds.
pub const HUD_INITIAL_LATENCY_MS: i64 = 24;
/// Latency never leaves this range.
pub const HUD_LATENCY_RANGE_MS: (i64, i64) = (5, 60);
/// Threat level shown by the HUD.
pub const HUD_THREAT_LEVEL: &str = "LOW";

/// Log lines present before the first tick, newest first.
pub const HUD_BOOT_LOG: [&str; 3] = [
    "INITIALIZING SEQUENCE...",
    "CONNECTING TO SATELLITE LINK...",
    "ESTABLISHING SECURE HANDSHAKE...",
];

/// Messages the HUD picks from on every tick.
pub const HUD_MESSAGES: [&str; 8] = [
    "PACKET LOSS DETECTED: NODE EU-4",
    "REROUTING TRAFFIC -> ASIA-PACIFIC",
    "OPTIMIZING EDGE CACHE...",
    "SYNCHRONIZING DATABASE SHARDS...",
    "THREAT INTEL: CLEAN",
    "NEW INSTANCE PROVISIONED: SUPER-CLUSTER-7",
    "AUTO-SCALING ENABLED",
    "HEARTBEAT RECEIVED: TOKYO",
];

/// Preloader phrase, one word per line.
pub const PRELOADER_WORDS: [&str; 3] = ["Drive", "Disruptive", "Change"];
/// Line shown next to the logo after the reveal box.
pub const PRELOADER_TAGLINE: &str = "Norton-Gauss";

/// A navigation entry. Groups carry children and expand on hover or click.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct NavLink {
    /// Label.
    pub label: &'static str,
    /// Route.
    pub href: &'static str,
    /// Nested links, empty for plain links.
    pub children: &'static [NavLink],
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink {
        label,
        href,
        children: &[],
    }
}

/// Primary navigation.
pub const NAV_LINKS: [NavLink; 8] = [
    link("Home", "/"),
    link("Industries", "/industries"),
    NavLink {
        label: "Services",
        href: "/services",
        children: &[
            link("Digital Strategy", "/services/digital-strategy"),
            link("Cloud & Edge", "/services/cloud-edge"),
            link("Gen AI & Agents", "/services/gen-ai"),
            link("Observability", "/services/observability"),
        ],
    },
    NavLink {
        label: "Solutions",
        href: "/solutions",
        children: &[
            link("ObservOne", "/solutions/observone"),
            link("SalesHub", "/solutions/saleshub"),
            link("Automation Core", "/solutions/automation-core"),
            link("NOC/SOC AI", "/solutions/noc-soc-ai"),
        ],
    },
    link("Insights", "/insights"),
    link("About", "/about"),
    link("Careers", "/careers"),
    link("Contact", "/contact"),
];

/// Highlighted navigation button.
pub const NAV_CTA: NavLink = link("Book a Call", "/book-a-call");

/// Footer link column.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FooterColumn {
    /// Heading.
    pub title: &'static str,
    /// Entries.
    pub items: &'static [&'static str],
}

/// Footer columns, left to right.
pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        title: "Solutions",
        items: &["ObservOne", "SalesHub", "Automation Core", "NOC/SOC AI"],
    },
    FooterColumn {
        title: "Services",
        items: &["Digital Strategy", "Cloud & Edge", "Gen AI & Agents", "Observability"],
    },
    FooterColumn {
        title: "Company",
        items: &["About Us", "Careers", "Contact", "Partners"],
    },
];

/// Social links.
pub const FOOTER_SOCIALS: [&str; 3] = ["LinkedIn", "Twitter", "GitHub"];
