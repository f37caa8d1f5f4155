//! Pointer math: mapping a cursor sample onto an element's bounding box.

use glam::Vec2;

/// Bounding box in viewport (client) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Zero, negative or non-finite extent; nothing sensible can be derived.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite())
    }
}

/// One pointer event, in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub client_x: f32,
    pub client_y: f32,
}

impl PointerSample {
    pub const fn new(client_x: f32, client_y: f32) -> Self {
        Self { client_x, client_y }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.client_x, self.client_y)
    }
}

/// Cursor position relative to the box's top-left corner, in px.
#[inline]
pub fn local_point(rect: &Rect, sample: PointerSample) -> Vec2 {
    sample.position() - Vec2::new(rect.left, rect.top)
}

/// Cursor offset from the box center, in px.
#[inline]
pub fn center_offset(rect: &Rect, sample: PointerSample) -> Vec2 {
    sample.position() - rect.center()
}

/// Cursor offset from the center scaled so the box edges sit at ±1.
///
/// (0, 0) at the center, (-1, -1) at the top-left corner. Samples outside
/// the box are clamped; a degenerate box yields (0, 0).
pub fn normalized_offset(rect: &Rect, sample: PointerSample) -> Vec2 {
    if rect.is_degenerate() {
        return Vec2::ZERO;
    }
    let half = rect.size() * 0.5;
    (center_offset(rect, sample) / half).clamp(Vec2::splat(-1.0), Vec2::ONE)
}

/// Horizontal cursor position as a fraction of the box width, in \[0, 1\].
pub fn horizontal_fraction(rect: &Rect, sample: PointerSample) -> f32 {
    if rect.is_degenerate() {
        return 0.5;
    }
    (local_point(rect, sample).x / rect.width).clamp(0.0, 1.0)
}

/// Cursor offset from the viewport center as a fraction of the viewport,
/// each axis in \[-0.5, 0.5\].
pub fn viewport_offset(viewport: Vec2, sample: PointerSample) -> Vec2 {
    if !(viewport.x > 0.0 && viewport.y > 0.0) {
        return Vec2::ZERO;
    }
    (sample.position() / viewport - Vec2::splat(0.5)).clamp(Vec2::splat(-0.5), Vec2::splat(0.5))
}
