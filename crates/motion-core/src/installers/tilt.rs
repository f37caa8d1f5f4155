//! Gallery and contact cards: 3D tilt with a glare highlight that follows
//! the cursor.

use crate::config::EngineConfig;
use crate::constants::{TILT_MAX_DEG, TILT_PERSPECTIVE};
use crate::ease::Ease;
use crate::engine::Stage;
use crate::geometry::{local_point, normalized_offset, PointerSample, Rect};
use crate::host::{Backend, EventKind, Host};
use crate::installers::LazySlot;
use crate::tween::{Prop, Tween};
use glam::Vec2;
use std::rc::Rc;

/// Menu items carry `.tilt-card` too but get their own handlers.
pub const SELECTOR: &str = ".tilt-card:not(.menu-item)";
pub const GLARE_CLASS: &str = "card-glare";

pub fn tilt(offset: Vec2, config: &EngineConfig) -> Tween {
    Tween::new()
        .prop(Prop::RotationY, offset.x * TILT_MAX_DEG)
        .prop(Prop::RotationX, -offset.y * TILT_MAX_DEG)
        .duration(0.5)
        .ease(config.cursor_ease)
        .prop(Prop::TransformPerspective, TILT_PERSPECTIVE)
}

/// Glare centered on the cursor, `local` being px from the card's corner.
pub fn glare(local: Vec2) -> Tween {
    Tween::new()
        .prop(Prop::Opacity, 0.6)
        .style(
            Prop::Background,
            format!(
                "radial-gradient(circle at {}px {}px, rgba(255,255,255,0.3) 0%, transparent 60%)",
                local.x, local.y
            ),
        )
        .duration(0.1)
}

pub fn settle() -> Tween {
    Tween::new()
        .prop(Prop::RotationY, 0.0)
        .prop(Prop::RotationX, 0.0)
        .duration(0.8)
        .ease(Ease::elastic_out(1.0, 0.5))
}

pub fn glare_fade() -> Tween {
    Tween::new().prop(Prop::Opacity, 0.0).duration(0.5)
}

fn on_move<B: Backend>(
    stage: &Stage<B>,
    card: &B::Element,
    glare_slot: &LazySlot<B::Element>,
    sample: PointerSample,
) {
    let rect: Rect = stage.host.bounds(card);
    stage.to(card, tilt(normalized_offset(&rect, sample), &stage.config));
    if let Some(el) = glare_slot.get_or_create(&stage.host, card) {
        stage.to(&el, glare(local_point(&rect, sample)));
    }
}

pub fn install<B: Backend>(stage: &Rc<Stage<B>>) -> usize {
    let cards = stage.host.query_all(SELECTOR);
    for card in &cards {
        let slot = Rc::new(LazySlot::new(GLARE_CLASS));

        let (target, glare_slot) = (card.clone(), Rc::clone(&slot));
        stage.listen(card, EventKind::Move, move |stage, sample| {
            on_move(stage, &target, &glare_slot, sample)
        });

        let target = card.clone();
        stage.listen(card, EventKind::Leave, move |stage, _| {
            stage.to(&target, settle());
            if let Some(el) = slot.existing() {
                stage.to(&el, glare_fade());
            }
        });
    }
    log::debug!("[tilt] bound {} cards", cards.len());
    cards.len()
}
