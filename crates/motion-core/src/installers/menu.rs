//! Menu items: one hover personality per category.
//!
//! Each `.menu-item` is routed through [`installer`] on its `data-type`
//! tag. The handlers are independent; none of them keeps state between
//! events other than the lazily created steam overlay and the snack
//! reveal latch.

use crate::category::Category;
use crate::constants::{
    CHAI_HOVER_SCALE, COFFEE_TILT_DIVISOR, COLD_BREW_SHIFT_PX, DESSERT_ZOOM_SCALE, LIFT_PX,
    SNACK_REVEAL_VIEWPORT_PCT, SNACK_RISE_PX, TILT_PERSPECTIVE,
};
use crate::ease::Ease;
use crate::engine::Stage;
use crate::geometry::{center_offset, horizontal_fraction, PointerSample, Rect};
use crate::host::{Backend, EventKind, Host, Tweener, ViewportObserver};
use crate::installers::LazySlot;
use crate::reveal::{Reveal, RevealLatch, ScrollStart};
use crate::tween::{Prop, PropMap, Repeat, Tween};
use std::rc::Rc;

pub const SELECTOR: &str = ".menu-item";
pub const TYPE_ATTR: &str = "data-type";
pub const IMAGE: &str = ".item-image img";
pub const STEAM_CLASS: &str = "steam-effect";

const CHAI_GLOW: &str = "0 20px 50px rgba(255, 153, 51, 0.25)";
const CHAI_REST_SHADOW: &str = "0 10px 30px rgba(0,0,0,0.05)";

pub type Installer<B> = fn(&Rc<Stage<B>>, &<B as Backend>::Element);

/// Handler for each category. The match is the dispatch table.
pub fn installer<B: Backend>(category: Category) -> Installer<B> {
    match category {
        Category::Coffee => coffee::<B>,
        Category::Chai => chai::<B>,
        Category::ColdBrew => cold_brew::<B>,
        Category::Snack => snack::<B>,
        Category::Dessert => dessert::<B>,
        Category::Other => plain::<B>,
    }
}

/// 3D rendering context shared by every item.
pub fn render_setup() -> PropMap {
    Tween::new()
        .prop(Prop::TransformPerspective, TILT_PERSPECTIVE)
        .style(Prop::TransformStyle, "preserve-3d")
        .props
}

pub fn install<B: Backend>(stage: &Rc<Stage<B>>) -> usize {
    let items = stage.host.query_all(SELECTOR);
    let mut counts = [0usize; Category::ALL.len()];
    for item in &items {
        stage.tweener.set(item, &render_setup());
        let tag = stage.host.attribute(item, TYPE_ATTR);
        let category = Category::from_tag(tag.as_deref());
        installer::<B>(category)(stage, item);
        counts[category as usize] += 1;
    }
    if !items.is_empty() {
        log::debug!(
            "[menu] coffee={} chai={} cold-brew={} snack={} dessert={} other={}",
            counts[0],
            counts[1],
            counts[2],
            counts[3],
            counts[4],
            counts[5]
        );
    }
    items.len()
}

// ---------------- Coffee: soft tilt + rising steam ----------------

pub fn coffee_tilt(rect: &Rect, sample: PointerSample) -> Tween {
    let lean = center_offset(rect, sample) / COFFEE_TILT_DIVISOR;
    Tween::new()
        .prop(Prop::RotationY, lean.x)
        .prop(Prop::RotationX, -lean.y)
        .style(Prop::TransformOrigin, "center center")
        .duration(0.5)
        .ease(Ease::Power1Out)
}

pub fn steam_rise() -> Tween {
    Tween::new().prop(Prop::Opacity, 0.6).prop(Prop::Y, -20.0).duration(1.0)
}

pub fn coffee_settle() -> Tween {
    Tween::new()
        .prop(Prop::RotationY, 0.0)
        .prop(Prop::RotationX, 0.0)
        .duration(0.8)
        .ease(Ease::Power3Out)
}

pub fn steam_reset() -> Tween {
    Tween::new().prop(Prop::Opacity, 0.0).prop(Prop::Y, 0.0).duration(0.5)
}

fn coffee<B: Backend>(stage: &Rc<Stage<B>>, item: &B::Element) {
    let steam = Rc::new(LazySlot::new(STEAM_CLASS));

    let (target, slot) = (item.clone(), Rc::clone(&steam));
    stage.listen(item, EventKind::Move, move |stage, sample| {
        let rect = stage.host.bounds(&target);
        stage.to(&target, coffee_tilt(&rect, sample));
        if let Some(el) = slot.get_or_create(&stage.host, &target) {
            stage.to(&el, steam_rise());
        }
    });

    let target = item.clone();
    stage.listen(item, EventKind::Leave, move |stage, _| {
        stage.to(&target, coffee_settle());
        if let Some(el) = steam.existing() {
            stage.to(&el, steam_reset());
        }
    });
}

// ---------------- Chai: idle float + warm glow ----------------

/// Runs from mount until the page goes away; hover never touches it.
pub fn chai_float() -> Tween {
    Tween::new()
        .prop(Prop::Y, -10.0)
        .prop(Prop::Rotation, 2.0)
        .duration(3.0)
        .repeat(Repeat::Infinite)
        .yoyo(true)
        .ease(Ease::SineInOut)
}

pub fn chai_glow() -> Tween {
    Tween::new()
        .style(Prop::BoxShadow, CHAI_GLOW)
        .prop(Prop::Scale, CHAI_HOVER_SCALE)
        .duration(0.5)
}

pub fn chai_rest() -> Tween {
    Tween::new()
        .style(Prop::BoxShadow, CHAI_REST_SHADOW)
        .prop(Prop::Scale, 1.0)
        .duration(0.5)
}

fn chai<B: Backend>(stage: &Rc<Stage<B>>, item: &B::Element) {
    if let Some(img) = stage.host.query_within(item, IMAGE) {
        stage.to(&img, chai_float());
    }
    let target = item.clone();
    stage.listen(item, EventKind::Enter, move |stage, _| stage.to(&target, chai_glow()));
    let target = item.clone();
    stage.listen(item, EventKind::Leave, move |stage, _| stage.to(&target, chai_rest()));
}

// ---------------- Cold brew: image parallax ----------------

/// Image shift opposite to the cursor's horizontal position.
pub fn cold_brew_drift(rect: &Rect, sample: PointerSample) -> Tween {
    let fx = horizontal_fraction(rect, sample);
    Tween::new()
        .prop(Prop::X, (fx - 0.5) * -COLD_BREW_SHIFT_PX)
        .duration(0.8)
        .ease(Ease::Power2Out)
}

pub fn cold_brew_reset() -> Tween {
    Tween::new().prop(Prop::X, 0.0).duration(0.8)
}

fn cold_brew<B: Backend>(stage: &Rc<Stage<B>>, item: &B::Element) {
    // Nothing to move without an image.
    let Some(img) = stage.host.query_within(item, IMAGE) else {
        return;
    };
    let (target, image) = (item.clone(), img.clone());
    stage.listen(item, EventKind::Move, move |stage, sample| {
        let rect = stage.host.bounds(&target);
        stage.to(&image, cold_brew_drift(&rect, sample));
    });
    stage.listen(item, EventKind::Leave, move |stage, _| stage.to(&img, cold_brew_reset()));
}

// ---------------- Snack: elastic reveal + press bounce ----------------

pub const SNACK_REVEAL: Reveal = Reveal {
    rise: SNACK_RISE_PX,
    duration: 0.8,
    ease: Ease::elastic_out(1.0, 0.5),
    start: ScrollStart::ElementTop {
        viewport_pct: SNACK_REVEAL_VIEWPORT_PCT,
    },
};

pub fn snack_press() -> Tween {
    Tween::new().prop(Prop::Scale, 0.95).duration(0.1)
}

/// Overshoot past full size, then settle back to it.
pub fn snack_release() -> [Tween; 2] {
    [
        Tween::new()
            .prop(Prop::Scale, 1.02)
            .duration(0.4)
            .ease(Ease::elastic_out(1.0, 0.3)),
        Tween::new().prop(Prop::Scale, 1.0).delay(0.1).duration(0.2),
    ]
}

fn snack<B: Backend>(stage: &Rc<Stage<B>>, item: &B::Element) {
    stage.tweener.set(item, &SNACK_REVEAL.initial());
    let latch = RevealLatch::new();
    let (handle, target) = (Rc::clone(stage), item.clone());
    stage.observer.on_enter(
        item,
        SNACK_REVEAL.start,
        Box::new(move || {
            if latch.fire() {
                handle.to(&target, SNACK_REVEAL.play());
            }
        }),
    );

    let target = item.clone();
    stage.listen(item, EventKind::Down, move |stage, _| stage.to(&target, snack_press()));
    let target = item.clone();
    stage.listen(item, EventKind::Up, move |stage, _| {
        for tween in snack_release() {
            stage.to(&target, tween);
        }
    });
}

// ---------------- Dessert: slow zoom + bloom ----------------

pub fn dessert_zoom() -> Tween {
    Tween::new()
        .prop(Prop::Scale, DESSERT_ZOOM_SCALE)
        .duration(1.5)
        .ease(Ease::Power2InOut)
}

pub fn dessert_bloom() -> Tween {
    Tween::new().style(Prop::Filter, "brightness(1.1)").duration(0.5)
}

pub fn dessert_unzoom() -> Tween {
    Tween::new().prop(Prop::Scale, 1.0).duration(1.0)
}

pub fn dessert_unbloom() -> Tween {
    Tween::new().style(Prop::Filter, "brightness(1)").duration(0.5)
}

fn dessert<B: Backend>(stage: &Rc<Stage<B>>, item: &B::Element) {
    let image = stage.host.query_within(item, IMAGE);

    let (target, img) = (item.clone(), image.clone());
    stage.listen(item, EventKind::Enter, move |stage, _| {
        if let Some(img) = &img {
            stage.to(img, dessert_zoom());
        }
        stage.to(&target, dessert_bloom());
    });

    let target = item.clone();
    stage.listen(item, EventKind::Leave, move |stage, _| {
        if let Some(img) = &image {
            stage.to(img, dessert_unzoom());
        }
        stage.to(&target, dessert_unbloom());
    });
}

// ---------------- Everything else: simple lift ----------------

pub fn lift() -> Tween {
    Tween::new().prop(Prop::Y, -LIFT_PX).duration(0.3)
}

pub fn drop_back() -> Tween {
    Tween::new().prop(Prop::Y, 0.0).duration(0.3)
}

fn plain<B: Backend>(stage: &Rc<Stage<B>>, item: &B::Element) {
    let target = item.clone();
    stage.listen(item, EventKind::Enter, move |stage, _| stage.to(&target, lift()));
    let target = item.clone();
    stage.listen(item, EventKind::Leave, move |stage, _| stage.to(&target, drop_back()));
}
