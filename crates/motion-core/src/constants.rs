// Tuning constants for the café page effects.
// Kept free of imports so host-side tests can include this file directly.

// Engine defaults
pub const DEFAULT_MAGNETIC_FORCE: f32 = 0.6; // share of the cursor offset a button follows
pub const MAGNETIC_FORCE_MAX: f32 = 2.0;

// Tween engine fallback when a request carries no duration (GSAP default)
pub const DEFAULT_TWEEN_DURATION: f32 = 0.5;

// Navbar scroll toggle
pub const NAV_SCROLL_THRESHOLD: f32 = 50.0; // px scrolled before the bar compacts
pub const NAV_HEIGHT_TOP_PX: f32 = 80.0;
pub const NAV_HEIGHT_SCROLLED_PX: f32 = 70.0;
pub const NAV_STYLE_DURATION: f32 = 0.4;
pub const NAV_INTRO_OFFSET_PX: f32 = 100.0;

// Pointer tilt
pub const TILT_MAX_DEG: f32 = 10.0; // card tilt at the bounding box edge
pub const TILT_PERSPECTIVE: f32 = 1000.0;
pub const HERO_PARALLAX_SPAN_DEG: f32 = 40.0; // full-viewport sweep of the hero rotation
pub const HERO_PERSPECTIVE: f32 = 900.0;
pub const COFFEE_TILT_DIVISOR: f32 = 20.0; // px of cursor offset per degree
pub const COLD_BREW_SHIFT_PX: f32 = 30.0; // image travel across the full card width

// Hover lifts
pub const LIFT_PX: f32 = 10.0;
pub const CHAI_HOVER_SCALE: f32 = 1.02;
pub const DESSERT_ZOOM_SCALE: f32 = 1.15;

// Scroll reveals
pub const REVEAL_VIEWPORT_PCT: f32 = 80.0;
pub const SNACK_REVEAL_VIEWPORT_PCT: f32 = 85.0;
pub const REVEAL_RISE_PX: f32 = 50.0;
pub const SNACK_RISE_PX: f32 = 100.0;
