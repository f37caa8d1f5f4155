//! Platform-free core of the Saffron Brew animation layer.
//!
//! Nothing in here touches the browser. The web crate plugs the DOM and the
//! GSAP globals in through the [`host::Backend`] traits; tests plug in an
//! in-memory page instead.

pub mod category;
pub mod config;
pub mod constants;
pub mod ease;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod host;
pub mod installers;
pub mod reveal;
pub mod tween;

pub use category::Category;
pub use config::EngineConfig;
pub use ease::Ease;
pub use engine::{AnimationEngine, InstallReport, Stage};
pub use error::MotionError;
pub use geometry::{PointerSample, Rect};
pub use host::{Backend, EventKind, Host, PointerHandler, Tweener, ViewportObserver};
pub use installers::navbar::NavState;
pub use reveal::{Reveal, RevealLatch, ScrollStart};
pub use tween::{Position, Prop, PropMap, Repeat, Timeline, TimelineStep, Tween, Value};
