//! Hero section: staggered entrance timeline and pointer parallax.

use crate::config::EngineConfig;
use crate::constants::{HERO_PARALLAX_SPAN_DEG, HERO_PERSPECTIVE};
use crate::ease::Ease;
use crate::engine::Stage;
use crate::geometry::{viewport_offset, PointerSample};
use crate::host::{Backend, EventKind, Host, Tweener};
use crate::tween::{Position, Prop, PropMap, Repeat, Timeline, Tween};
use glam::Vec2;
use std::rc::Rc;

pub const SECTION: &str = ".hero";
pub const HEADLINE: &str = ".hero h1";
pub const BLURB: &str = ".hero p";
pub const BUTTONS: &str = ".hero .btn";
pub const CONTENT: &str = ".hero-content";

const SHIMMER: &str = "0 0 30px rgba(255, 153, 51, 0.6)";

/// Hidden states applied before the timeline runs: headline, blurb, buttons.
pub fn initial_states() -> [PropMap; 3] {
    [
        Tween::new()
            .prop(Prop::Y, 100.0)
            .prop(Prop::Opacity, 0.0)
            .prop(Prop::RotationX, 20.0)
            .props,
        Tween::new().prop(Prop::Y, 50.0).prop(Prop::Opacity, 0.0).props,
        Tween::new().prop(Prop::Y, 40.0).prop(Prop::Opacity, 0.0).props,
    ]
}

pub fn entrance<E: Clone>(headline: &[E], blurb: &[E], buttons: &[E]) -> Timeline<E> {
    Timeline::new(Some(Ease::Power3Out))
        .to(
            headline.to_vec(),
            Tween::new()
                .prop(Prop::Y, 0.0)
                .prop(Prop::Opacity, 1.0)
                .prop(Prop::RotationX, 0.0)
                .duration(1.4)
                .stagger(0.1),
            Position::After,
        )
        .to(
            headline.to_vec(),
            Tween::new()
                .style(Prop::TextShadow, SHIMMER)
                .repeat(Repeat::Count(1))
                .yoyo(true)
                .duration(0.5),
            Position::Overlap(0.8),
        )
        .to(
            blurb.to_vec(),
            Tween::new().prop(Prop::Y, 0.0).prop(Prop::Opacity, 1.0).duration(1.0),
            Position::Overlap(1.0),
        )
        .to(
            buttons.to_vec(),
            Tween::new().prop(Prop::Y, 0.0).prop(Prop::Opacity, 1.0).duration(0.8),
            Position::Overlap(0.8),
        )
}

/// Rotation of the hero content for a cursor anywhere in the viewport.
pub fn parallax(viewport: Vec2, sample: PointerSample, config: &EngineConfig) -> Tween {
    let swing = viewport_offset(viewport, sample) * HERO_PARALLAX_SPAN_DEG;
    Tween::new()
        .prop(Prop::RotationY, swing.x)
        .prop(Prop::RotationX, -swing.y)
        .duration(1.0)
        .ease(config.cursor_ease)
        .prop(Prop::TransformPerspective, HERO_PERSPECTIVE)
}

pub fn install<B: Backend>(stage: &Rc<Stage<B>>) -> usize {
    let Some(hero) = stage.host.query_all(SECTION).into_iter().next() else {
        return 0;
    };

    let headline = stage.host.query_all(HEADLINE);
    let blurb = stage.host.query_all(BLURB);
    let buttons = stage.host.query_all(BUTTONS);
    for (group, props) in [&headline, &blurb, &buttons].into_iter().zip(initial_states()) {
        for el in group {
            stage.tweener.set(el, &props);
        }
    }
    let timeline = entrance(&headline, &blurb, &buttons);
    if !timeline.is_empty() {
        stage.tweener.play(&timeline);
    }

    let content = stage.host.query_all(CONTENT);
    let parallax_targets = content.len();
    if !content.is_empty() {
        stage.listen(&hero, EventKind::Move, move |stage, sample| {
            let tween = parallax(stage.host.viewport(), sample, &stage.config);
            for el in &content {
                stage.tweener.to(el, &tween);
            }
        });
    }
    log::debug!(
        "[hero] entrance steps={} parallax targets={}",
        timeline.steps().len(),
        parallax_targets
    );
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_sequence_overlaps() {
        let tl = entrance(&["h1"], &["p"], &["a", "b"]);
        let starts = tl.start_times();
        assert_eq!(starts.len(), 4);
        assert_eq!(starts[0], 0.0);
        assert!((starts[1] - 0.6).abs() < 1e-6);
        // shimmer ends at 1.6, so the blurb starts a second earlier
        assert!((starts[2] - 0.6).abs() < 1e-6);
        assert!((starts[3] - 0.8).abs() < 1e-6);
        assert_eq!(tl.default_ease, Some(Ease::Power3Out));
    }

    #[test]
    fn missing_groups_drop_their_steps() {
        let tl = entrance::<&str>(&["h1"], &[], &[]);
        assert_eq!(tl.steps().len(), 2);
    }

    #[test]
    fn parallax_is_identity_at_viewport_center() {
        let t = parallax(
            Vec2::new(1200.0, 800.0),
            PointerSample::new(600.0, 400.0),
            &EngineConfig::default(),
        );
        assert_eq!(t.num(Prop::RotationY), Some(0.0));
        assert_eq!(t.num(Prop::RotationX), Some(0.0));
    }

    #[test]
    fn parallax_top_left_swings_twenty_degrees() {
        let t = parallax(
            Vec2::new(1200.0, 800.0),
            PointerSample::new(0.0, 0.0),
            &EngineConfig::default(),
        );
        assert_eq!(t.num(Prop::RotationY), Some(-20.0));
        assert_eq!(t.num(Prop::RotationX), Some(20.0));
        assert_eq!(t.num(Prop::TransformPerspective), Some(900.0));
    }
}
