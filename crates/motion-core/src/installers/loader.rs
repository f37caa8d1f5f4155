//! Page loader curtain: collapses once on load.

use crate::ease::Ease;
use crate::engine::Stage;
use crate::host::{Backend, Host};
use crate::tween::{Prop, Tween};
use std::rc::Rc;

pub const SELECTOR: &str = ".page-loader";

pub fn exit() -> Tween {
    Tween::new()
        .prop(Prop::ScaleY, 0.0)
        .duration(1.2)
        .ease(Ease::Power4InOut)
        .delay(0.2)
}

pub fn install<B: Backend>(stage: &Rc<Stage<B>>) -> usize {
    let Some(loader) = stage.host.query_all(SELECTOR).into_iter().next() else {
        return 0;
    };
    stage.to(&loader, exit());
    1
}
