//! Engine configuration, read once when the engine is built.

use crate::constants::{DEFAULT_MAGNETIC_FORCE, MAGNETIC_FORCE_MAX};
use crate::ease::Ease;
use crate::error::{MotionError, Result};

/// Attribute on the document root overriding [`EngineConfig::magnetic_force`].
pub const MAGNETIC_FORCE_ATTR: &str = "data-magnetic-force";
/// Attribute on the document root overriding [`EngineConfig::cursor_ease`].
pub const CURSOR_EASE_ATTR: &str = "data-cursor-ease";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    /// Share of the cursor's offset from center that a magnetic button follows.
    pub magnetic_force: f32,
    /// Ease for tweens that chase the cursor.
    pub cursor_ease: Ease,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            magnetic_force: DEFAULT_MAGNETIC_FORCE,
            cursor_ease: Ease::Power2Out,
        }
    }
}

impl EngineConfig {
    pub fn with_magnetic_force(mut self, force: f32) -> Result<Self> {
        if !force.is_finite() || !(0.0..=MAGNETIC_FORCE_MAX).contains(&force) {
            return Err(MotionError::InvalidForce(force));
        }
        self.magnetic_force = force;
        Ok(self)
    }

    pub fn with_cursor_ease(mut self, ease: Ease) -> Self {
        self.cursor_ease = ease;
        self
    }

    /// Build from optional string overrides (the page's root attributes).
    /// Bad values are logged and the default kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(MAGNETIC_FORCE_ATTR) {
            let parsed = raw
                .trim()
                .parse::<f32>()
                .map_err(|_| MotionError::InvalidConfig {
                    key: MAGNETIC_FORCE_ATTR,
                    value: raw.clone(),
                })
                .and_then(|force| config.with_magnetic_force(force));
            match parsed {
                Ok(c) => config = c,
                Err(e) => log::warn!("[config] {}", e),
            }
        }

        if let Some(raw) = lookup(CURSOR_EASE_ATTR) {
            match raw.parse::<Ease>() {
                Ok(ease) => config.cursor_ease = ease,
                Err(e) => log::warn!("[config] {}", e),
            }
        }

        config
    }
}
