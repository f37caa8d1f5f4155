//! Initialization sequencer.
//!
//! [`AnimationEngine`] owns the page handles and runs each effect installer
//! once, in a fixed order. Installers skip silently when their selectors
//! match nothing.

use crate::config::EngineConfig;
use crate::geometry::PointerSample;
use crate::host::{Backend, EventKind, Host, Tweener};
use crate::installers;
use crate::tween::Tween;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Everything an installed handler can reach. Handlers hold it through an
/// `Rc` for the page lifetime.
pub struct Stage<B: Backend> {
    pub host: B::Host,
    pub tweener: B::Tweener,
    pub observer: B::Observer,
    pub config: EngineConfig,
}

impl<B: Backend> Stage<B> {
    /// Issue a tween request.
    #[inline]
    pub(crate) fn to(&self, target: &B::Element, tween: Tween) {
        self.tweener.to(target, &tween);
    }

    /// Attach a pointer handler that can reach the stage.
    pub(crate) fn listen(
        self: &Rc<Self>,
        element: &B::Element,
        kind: EventKind,
        mut handler: impl FnMut(&Self, PointerSample) + 'static,
    ) {
        let stage = Rc::clone(self);
        self.host
            .listen(element, kind, Box::new(move |sample| handler(&stage, sample)));
    }
}

/// Number of elements each installer bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub loader: usize,
    pub hero: usize,
    pub navbar: usize,
    pub magnetic: usize,
    pub menu: usize,
    pub tilt: usize,
    pub reveals: usize,
}

impl InstallReport {
    pub fn total(&self) -> usize {
        self.loader + self.hero + self.navbar + self.magnetic + self.menu + self.tilt + self.reveals
    }
}

impl fmt::Display for InstallReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "loader={} hero={} navbar={} magnetic={} menu={} tilt={} reveals={}",
            self.loader, self.hero, self.navbar, self.magnetic, self.menu, self.tilt, self.reveals
        )
    }
}

pub struct AnimationEngine<B: Backend> {
    stage: Rc<Stage<B>>,
    started: Cell<bool>,
}

impl<B: Backend> AnimationEngine<B> {
    pub fn new(host: B::Host, tweener: B::Tweener, observer: B::Observer, config: EngineConfig) -> Self {
        Self {
            stage: Rc::new(Stage {
                host,
                tweener,
                observer,
                config,
            }),
            started: Cell::new(false),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.stage.config
    }

    pub fn stage(&self) -> &Rc<Stage<B>> {
        &self.stage
    }

    /// Run every installer once. Later calls do nothing and return `None`.
    pub fn start(&self) -> Option<InstallReport> {
        if self.started.replace(true) {
            log::warn!("[engine] start called twice; ignoring");
            return None;
        }
        let stage = &self.stage;
        let report = InstallReport {
            loader: installers::loader::install(stage),
            hero: installers::hero::install(stage),
            navbar: installers::navbar::install(stage),
            magnetic: installers::magnetic::install(stage),
            menu: installers::menu::install(stage),
            tilt: installers::tilt::install(stage),
            reveals: installers::global_reveal::install(stage),
        };
        log::info!("[engine] installed {}", report);
        Some(report)
    }
}

