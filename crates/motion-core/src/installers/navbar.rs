//! Navbar: slide-in on load, compact styling once the page scrolls.

use crate::constants::{
    NAV_HEIGHT_SCROLLED_PX, NAV_HEIGHT_TOP_PX, NAV_INTRO_OFFSET_PX, NAV_SCROLL_THRESHOLD,
    NAV_STYLE_DURATION,
};
use crate::ease::Ease;
use crate::engine::Stage;
use crate::host::{Backend, Host, Tweener, ViewportObserver};
use crate::reveal::ScrollStart;
use crate::tween::{Prop, PropMap, Tween};
use std::rc::Rc;

pub const SELECTOR: &str = ".navbar";
pub const SCROLLED_CLASS: &str = "scrolled";

const BAR_BACKGROUND: &str = "rgba(255, 255, 255, 0.95)";

/// Visual state of the bar, derived from the scroll offset alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavState {
    Top,
    Scrolled,
}

impl NavState {
    pub fn for_scroll(offset: f32) -> Self {
        if offset > NAV_SCROLL_THRESHOLD {
            NavState::Scrolled
        } else {
            NavState::Top
        }
    }

    pub fn is_scrolled(self) -> bool {
        self == NavState::Scrolled
    }

    pub fn style(self) -> Tween {
        let bar = Tween::new()
            .style(Prop::BackgroundColor, BAR_BACKGROUND)
            .duration(NAV_STYLE_DURATION);
        match self {
            NavState::Top => bar
                .style(Prop::BackdropFilter, "none")
                .style(Prop::BoxShadow, "none")
                .style(Prop::Height, format!("{}px", NAV_HEIGHT_TOP_PX)),
            NavState::Scrolled => bar
                .style(Prop::BackdropFilter, "blur(10px)")
                .style(Prop::BoxShadow, "0 4px 30px rgba(0, 0, 0, 0.1)")
                .style(Prop::Height, format!("{}px", NAV_HEIGHT_SCROLLED_PX)),
        }
    }
}

pub fn intro_hidden() -> PropMap {
    Tween::new()
        .prop(Prop::Y, -NAV_INTRO_OFFSET_PX)
        .prop(Prop::Opacity, 0.0)
        .props
}

pub fn intro() -> Tween {
    Tween::new()
        .prop(Prop::Y, 0.0)
        .prop(Prop::Opacity, 1.0)
        .duration(1.0)
        .delay(0.5)
        .ease(Ease::Power3Out)
}

pub fn install<B: Backend>(stage: &Rc<Stage<B>>) -> usize {
    let Some(nav) = stage.host.query_all(SELECTOR).into_iter().next() else {
        return 0;
    };
    stage.tweener.set(&nav, &intro_hidden());
    stage.to(&nav, intro());

    // Re-asserted on every update, not only on state changes.
    let handle = Rc::clone(stage);
    stage.observer.on_scroll(
        ScrollStart::PageOffset(NAV_SCROLL_THRESHOLD),
        Box::new(move |offset| {
            let state = NavState::for_scroll(offset);
            handle.to(&nav, state.style());
            handle.host.set_class(&nav, SCROLLED_CLASS, state.is_scrolled());
        }),
    );
    1
}
