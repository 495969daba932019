//! Stagecraft drives the animation layer of a scroll-heavy landing page, headlessly and
//! deterministically.
//!
//! - Author timelines as [`TimelineSpec`]s and turn them into [`RunnableTimeline`]s with
//!   [`Scheduler::build`]
//! - Bind timelines to scroll position with a [`ScrollBinder`]
//! - Cycle hero slides through a [`SlideController`]
//! - Mount the whole [`LandingPage`] and step it frame by frame
//!
//! Every property write lands on a [`Stage`]; nothing here touches a real display.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod config;
pub(crate) mod content;
pub(crate) mod events;
pub(crate) mod nav;
pub(crate) mod page;
/// Scene renderers consumed by the hero and operations sections.
pub mod render;
pub(crate) mod scroll;
/// Landing-page sections.
pub mod sections;
pub(crate) mod slides;
pub(crate) mod stage;
pub(crate) mod timeline;

pub use crate::foundation::core::{ElementId, Point, Rect, Rgba8, Vec2, Viewport};
pub use crate::foundation::error::{StagecraftError, StagecraftResult};
pub use crate::foundation::math::{Damped, SplitMix64};

pub use crate::animation::ease::Ease;
pub use crate::animation::property::{Property, Tween, VisualProps};
pub use crate::config::{
    GlobalOpsConfig, GlobeConfig, HeroConfig, PageConfig, ParticlesConfig, UseCasesConfig,
};
pub use crate::content::{
    ABOUT_PHRASES, FOOTER_COLUMNS, HERO_SLIDES, HeroSlide, NAV_CTA, NAV_LINKS, NavLink, SERVICES,
    ServiceCard, USE_CASES, UseCase,
};
pub use crate::events::{EventHub, ListenerGuard, ListenerKind};
pub use crate::nav::NavMenu;
pub use crate::page::{FrameReport, LandingPage};
pub use crate::scroll::binder::{
    Driver, ScrollBinder, ScrollSample, TriggerEvent, TriggerId, TriggerNotice,
};
pub use crate::scroll::binding::{
    Action, Anchor, EndPoint, PinTarget, ScrollBinding, ScrollSpan, ToggleActions, TriggerPoint,
};
pub use crate::scroll::coalesce::ScrollCoalescer;
pub use crate::slides::controller::{
    AutoAdvance, RequestOutcome, SlideController, SlideEvent, SlidePhase,
};
pub use crate::stage::{Element, PinState, Stage, StageFingerprint, Surface};
pub use crate::timeline::resolve::{ResolvedTimeline, ResolvedTween};
pub use crate::timeline::runnable::{Direction, PlaybackEvent, RunnableTimeline, Scheduler};
pub use crate::timeline::spec::{
    AnimationStep, StartOffset, StepBuilder, Target, TimelineBuilder, TimelineSpec,
};
pub use crate::render::scene::{
    DrawOp, MountedScene, PointerEvent, RenderSurface, SceneParams, SceneRef, SceneRenderer,
    create_renderer,
};
pub use crate::sections::Section;
