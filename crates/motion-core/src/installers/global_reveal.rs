//! Section titles, gallery tiles and info cards rise into place once as
//! they scroll into view.

use crate::constants::{REVEAL_RISE_PX, REVEAL_VIEWPORT_PCT};
use crate::ease::Ease;
use crate::engine::Stage;
use crate::host::{Backend, Host, Tweener, ViewportObserver};
use crate::reveal::{Reveal, RevealLatch, ScrollStart};
use std::rc::Rc;

pub const SELECTOR: &str = ".category-title, .gallery-item, .info-card";

pub const REVEAL: Reveal = Reveal {
    rise: REVEAL_RISE_PX,
    duration: 1.0,
    ease: Ease::Power3Out,
    start: ScrollStart::ElementTop {
        viewport_pct: REVEAL_VIEWPORT_PCT,
    },
};

pub fn install<B: Backend>(stage: &Rc<Stage<B>>) -> usize {
    let elements = stage.host.query_all(SELECTOR);
    for el in &elements {
        stage.tweener.set(el, &REVEAL.initial());
        let latch = RevealLatch::new();
        let (handle, target) = (Rc::clone(stage), el.clone());
        stage.observer.on_enter(
            el,
            REVEAL.start,
            Box::new(move || {
                if latch.fire() {
                    handle.to(&target, REVEAL.play());
                }
            }),
        );
    }
    log::debug!("[reveal] watching {} elements", elements.len());
    elements.len()
}
