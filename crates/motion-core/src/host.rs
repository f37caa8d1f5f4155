//! Seams between the effect layer and the page it runs on.
//!
//! [`Host`] is the document (queries, geometry, listeners, overlay slots),
//! [`Tweener`] issues tween requests and [`ViewportObserver`] reports scroll
//! thresholds. A [`Backend`] ties the three together over one element type.

use crate::geometry::{PointerSample, Rect};
use crate::reveal::ScrollStart;
use crate::tween::{PropMap, Timeline, Tween};
use glam::Vec2;

/// Pointer events the installers listen for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Move,
    Enter,
    Leave,
    Down,
    Up,
}

impl EventKind {
    pub const fn dom_name(self) -> &'static str {
        match self {
            EventKind::Move => "mousemove",
            EventKind::Enter => "mouseenter",
            EventKind::Leave => "mouseleave",
            EventKind::Down => "mousedown",
            EventKind::Up => "mouseup",
        }
    }
}

pub type PointerHandler = Box<dyn FnMut(PointerSample)>;

pub trait Host {
    type Element: Clone + 'static;

    /// Every element matching `selector`, in document order. An invalid or
    /// unmatched selector yields an empty list.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// First descendant of `parent` matching `selector`.
    fn query_within(&self, parent: &Self::Element, selector: &str) -> Option<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Current bounding box in viewport coordinates.
    fn bounds(&self, element: &Self::Element) -> Rect;

    /// Viewport size in px.
    fn viewport(&self) -> Vec2;

    /// A decorative child of `owner` carrying `class_name`. Returns the
    /// existing child when there is one, so repeated calls never stack
    /// duplicates.
    fn overlay_slot(&self, owner: &Self::Element, class_name: &str) -> Option<Self::Element>;

    fn set_class(&self, element: &Self::Element, class_name: &str, on: bool);

    /// Attach `handler` for the page lifetime. There is no removal.
    fn listen(&self, element: &Self::Element, kind: EventKind, handler: PointerHandler);
}

/// Tween requests. A newer request for a property on an element supersedes
/// any running one for that same property.
pub trait Tweener<E> {
    fn to(&self, target: &E, tween: &Tween);

    /// Jump straight to `props` with no interpolation.
    fn set(&self, target: &E, props: &PropMap);

    fn play(&self, timeline: &Timeline<E>);
}

pub trait ViewportObserver<E> {
    /// Call `callback` when `target` crosses `start` while scrolling down.
    fn on_enter(&self, target: &E, start: ScrollStart, callback: Box<dyn FnMut()>);

    /// Call `callback` with the current scroll offset on every scroll update
    /// past `start`.
    fn on_scroll(&self, start: ScrollStart, callback: Box<dyn FnMut(f32)>);
}

/// A concrete page: the document plus its animation engine.
pub trait Backend: 'static {
    type Element: Clone + 'static;
    type Host: Host<Element = Self::Element> + 'static;
    type Tweener: Tweener<Self::Element> + 'static;
    type Observer: ViewportObserver<Self::Element> + 'static;
}
