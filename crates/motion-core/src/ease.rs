//! Easing curves understood by the tween engine.
//!
//! Each variant maps one-to-one onto a GSAP ease name. [`Ease::evaluate`]
//! mirrors the engine's curve so callers can reason about overshoot without
//! a browser.

use crate::error::MotionError;
use std::f32::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    /// Linear.
    None,
    Power1Out,
    Power2Out,
    Power2InOut,
    Power3Out,
    Power4InOut,
    SineInOut,
    /// Damped spring that overshoots its target before settling.
    ElasticOut { amplitude: f32, period: f32 },
}

impl Ease {
    /// GSAP's `elastic.out` without arguments.
    pub const ELASTIC_OUT: Ease = Ease::ElasticOut {
        amplitude: 1.0,
        period: 0.3,
    };

    pub const fn elastic_out(amplitude: f32, period: f32) -> Self {
        Ease::ElasticOut { amplitude, period }
    }

    /// Evaluate the curve at progress `t`. Input is clamped to \[0, 1\];
    /// the output starts at 0 and ends at 1 but may leave that range in
    /// between for elastic curves.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Ease::None => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power2InOut => in_out(t, 3),
            Ease::Power4InOut => in_out(t, 5),
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Ease::ElasticOut { amplitude, period } => {
                if t <= 0.0 || t >= 1.0 {
                    return t;
                }
                let a = amplitude.max(1.0);
                let p = period.max(f32::EPSILON);
                let shift = p / TAU * (1.0 / a).asin();
                a * 2f32.powf(-10.0 * t) * ((t - shift) * TAU / p).sin() + 1.0
            }
        }
    }

    /// True when the curve passes its end value before settling.
    pub fn overshoots(&self) -> bool {
        matches!(self, Ease::ElasticOut { .. })
    }
}

fn in_out(t: f32, power: i32) -> f32 {
    if t < 0.5 {
        2f32.powi(power - 1) * t.powi(power)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(power) / 2.0
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ease::None => f.write_str("none"),
            Ease::Power1Out => f.write_str("power1.out"),
            Ease::Power2Out => f.write_str("power2.out"),
            Ease::Power2InOut => f.write_str("power2.inOut"),
            Ease::Power3Out => f.write_str("power3.out"),
            Ease::Power4InOut => f.write_str("power4.inOut"),
            Ease::SineInOut => f.write_str("sine.inOut"),
            Ease::ElasticOut { amplitude, period } => {
                write!(f, "elastic.out({}, {})", amplitude, period)
            }
        }
    }
}

impl FromStr for Ease {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let ease = match name {
            "none" | "linear" => Ease::None,
            "power1.out" => Ease::Power1Out,
            "power2.out" => Ease::Power2Out,
            "power2.inOut" => Ease::Power2InOut,
            "power3.out" => Ease::Power3Out,
            "power4.inOut" => Ease::Power4InOut,
            "sine.inOut" => Ease::SineInOut,
            "elastic.out" | "elastic" => Ease::ELASTIC_OUT,
            _ => return parse_elastic(name).ok_or_else(|| MotionError::UnknownEase(s.to_string())),
        };
        Ok(ease)
    }
}

// "elastic.out(1, 0.5)"
fn parse_elastic(name: &str) -> Option<Ease> {
    let args = name.strip_prefix("elastic.out(")?.strip_suffix(')')?;
    let mut parts = args.split(',').map(|p| p.trim().parse::<f32>());
    let amplitude = parts.next()?.ok()?;
    let period = match parts.next() {
        Some(p) => p.ok()?,
        None => 0.3,
    };
    if parts.next().is_some() || !amplitude.is_finite() || !period.is_finite() || period <= 0.0 {
        return None;
    }
    Some(Ease::ElasticOut { amplitude, period })
}
