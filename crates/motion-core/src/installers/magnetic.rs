//! Magnetic buttons: pulled toward the cursor, snapped back elastically.

use crate::config::EngineConfig;
use crate::ease::Ease;
use crate::engine::Stage;
use crate::geometry::{center_offset, PointerSample, Rect};
use crate::host::{Backend, EventKind, Host};
use crate::tween::{Prop, Tween};
use std::rc::Rc;

pub const SELECTOR: &str = ".btn-primary, .nav-links a";

pub fn attract(rect: &Rect, sample: PointerSample, config: &EngineConfig) -> Tween {
    let pull = center_offset(rect, sample) * config.magnetic_force;
    Tween::new()
        .prop(Prop::X, pull.x)
        .prop(Prop::Y, pull.y)
        .duration(0.3)
        .ease(config.cursor_ease)
}

pub fn release() -> Tween {
    Tween::new()
        .prop(Prop::X, 0.0)
        .prop(Prop::Y, 0.0)
        .duration(0.8)
        .ease(Ease::elastic_out(1.0, 0.3))
}

pub fn install<B: Backend>(stage: &Rc<Stage<B>>) -> usize {
    let buttons = stage.host.query_all(SELECTOR);
    for btn in &buttons {
        let target = btn.clone();
        stage.listen(btn, EventKind::Move, move |stage, sample| {
            let rect = stage.host.bounds(&target);
            stage.to(&target, attract(&rect, sample, &stage.config));
        });
        let target = btn.clone();
        stage.listen(btn, EventKind::Leave, move |stage, _| stage.to(&target, release()));
    }
    log::debug!("[magnetic] bound {} buttons", buttons.len());
    buttons.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BTN: Rect = Rect::new(0.0, 0.0, 120.0, 40.0);

    #[test]
    fn center_is_at_rest() {
        let t = attract(&BTN, PointerSample::new(60.0, 20.0), &EngineConfig::default());
        assert_eq!(t.num(Prop::X), Some(0.0));
        assert_eq!(t.num(Prop::Y), Some(0.0));
    }

    #[test]
    fn pull_scales_with_force() {
        let config = EngineConfig::default().with_magnetic_force(0.5).unwrap();
        let t = attract(&BTN, PointerSample::new(120.0, 0.0), &config);
        assert_eq!(t.num(Prop::X), Some(30.0));
        assert_eq!(t.num(Prop::Y), Some(-10.0));
        assert_eq!(t.ease, Some(config.cursor_ease));
    }

    #[test]
    fn release_is_slower_and_elastic() {
        let pull = attract(&BTN, PointerSample::new(0.0, 0.0), &EngineConfig::default());
        let back = release();
        assert!(back.duration > pull.duration);
        assert!(back.ease.is_some_and(|e| e.overshoots()));
    }
}
