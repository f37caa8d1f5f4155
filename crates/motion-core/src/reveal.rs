//! One-shot "rise and fade in" reveals keyed on viewport entry.

use crate::ease::Ease;
use crate::tween::{Prop, PropMap, Tween};
use std::cell::Cell;
use std::fmt;

/// Scroll position at which an observer fires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollStart {
    /// The element's top edge reaches this far down the viewport (percent).
    ElementTop { viewport_pct: f32 },
    /// The page has scrolled this many px.
    PageOffset(f32),
}

impl fmt::Display for ScrollStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrollStart::ElementTop { viewport_pct } => write!(f, "top {}%", viewport_pct),
            ScrollStart::PageOffset(px) => write!(f, "top {}", -px),
        }
    }
}

/// Remembers whether an element has been revealed this page load.
#[derive(Debug, Default)]
pub struct RevealLatch(Cell<bool>);

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// True exactly once; every later call returns false.
    pub fn fire(&self) -> bool {
        !self.0.replace(true)
    }

    pub fn has_fired(&self) -> bool {
        self.0.get()
    }
}

/// A reveal animation: the element starts `rise` px low and transparent,
/// and settles into place once it scrolls past `start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub rise: f32,
    pub duration: f32,
    pub ease: Ease,
    pub start: ScrollStart,
}

impl Reveal {
    /// Authored hidden state, applied immediately at install.
    pub fn initial(&self) -> PropMap {
        Tween::new()
            .prop(Prop::Y, self.rise)
            .prop(Prop::Opacity, 0.0)
            .props
    }

    /// Tween into the resting state.
    pub fn play(&self) -> Tween {
        Tween::new()
            .prop(Prop::Y, 0.0)
            .prop(Prop::Opacity, 1.0)
            .duration(self.duration)
            .ease(self.ease)
    }
}
