//! Tween and timeline requests handed to the animation engine.
//!
//! These are plain descriptions: issuing one is fire-and-forget, and the
//! engine owns all interpolation state from then on.

use crate::constants::DEFAULT_TWEEN_DURATION;
use crate::ease::Ease;
use smallvec::SmallVec;
use std::fmt;

/// Animatable properties, named the way the engine spells them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prop {
    X,
    Y,
    Rotation,
    RotationX,
    RotationY,
    Scale,
    ScaleY,
    Opacity,
    TransformPerspective,
    TransformOrigin,
    TransformStyle,
    BoxShadow,
    TextShadow,
    Filter,
    Background,
    BackgroundColor,
    BackdropFilter,
    Height,
}

impl Prop {
    pub const fn key(self) -> &'static str {
        match self {
            Prop::X => "x",
            Prop::Y => "y",
            Prop::Rotation => "rotation",
            Prop::RotationX => "rotationX",
            Prop::RotationY => "rotationY",
            Prop::Scale => "scale",
            Prop::ScaleY => "scaleY",
            Prop::Opacity => "opacity",
            Prop::TransformPerspective => "transformPerspective",
            Prop::TransformOrigin => "transformOrigin",
            Prop::TransformStyle => "transformStyle",
            Prop::BoxShadow => "boxShadow",
            Prop::TextShadow => "textShadow",
            Prop::Filter => "filter",
            Prop::Background => "background",
            Prop::BackgroundColor => "backgroundColor",
            Prop::BackdropFilter => "backdropFilter",
            Prop::Height => "height",
        }
    }
}

impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Num(f32),
    Text(String),
}

impl Value {
    pub fn as_num(&self) -> Option<f32> {
        match self {
            Value::Num(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Num(_) => None,
        }
    }
}

/// Ordered property map. Most requests touch one to three properties.
pub type PropMap = SmallVec<[(Prop, Value); 4]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Repeat {
    Count(u32),
    Infinite,
}

/// One tween request: move `props` toward their values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tween {
    pub props: PropMap,
    pub duration: Option<f32>,
    pub ease: Option<Ease>,
    pub delay: f32,
    pub stagger: f32,
    pub repeat: Option<Repeat>,
    pub yoyo: bool,
}

impl Tween {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a numeric property; a second call for the same property
    /// replaces the first.
    pub fn prop(self, prop: Prop, value: f32) -> Self {
        self.with(prop, Value::Num(value))
    }

    /// Set a property to a CSS string (shadows, filters, gradients).
    pub fn style(self, prop: Prop, value: impl Into<String>) -> Self {
        self.with(prop, Value::Text(value.into()))
    }

    fn with(mut self, prop: Prop, value: Value) -> Self {
        match self.props.iter_mut().find(|(p, _)| *p == prop) {
            Some(slot) => slot.1 = value,
            None => self.props.push((prop, value)),
        }
        self
    }

    pub fn duration(mut self, secs: f32) -> Self {
        self.duration = Some(secs);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    pub fn delay(mut self, secs: f32) -> Self {
        self.delay = secs;
        self
    }

    pub fn stagger(mut self, secs: f32) -> Self {
        self.stagger = secs;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = Some(repeat);
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    pub fn get(&self, prop: Prop) -> Option<&Value> {
        self.props.iter().find(|(p, _)| *p == prop).map(|(_, v)| v)
    }

    pub fn num(&self, prop: Prop) -> Option<f32> {
        self.get(prop).and_then(Value::as_num)
    }

    pub fn text(&self, prop: Prop) -> Option<&str> {
        self.get(prop).and_then(Value::as_text)
    }

    pub fn touches(&self, prop: Prop) -> bool {
        self.get(prop).is_some()
    }

    /// Playing time for one target, repeats included. Infinite loops report
    /// `f32::INFINITY`.
    pub fn active_duration(&self) -> f32 {
        let one = self.duration.unwrap_or(DEFAULT_TWEEN_DURATION);
        match self.repeat {
            None => one,
            Some(Repeat::Count(n)) => one * (n as f32 + 1.0),
            Some(Repeat::Infinite) => f32::INFINITY,
        }
    }
}

/// Where a timeline step starts relative to what came before it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// At the current end of the timeline.
    After,
    /// This many seconds before the current end.
    Overlap(f32),
}

impl Position {
    /// Engine position parameter, `None` for the default (append).
    pub fn label(&self) -> Option<String> {
        match self {
            Position::After => None,
            Position::Overlap(secs) => Some(format!("-={}", secs)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TimelineStep<E> {
    pub targets: Vec<E>,
    pub tween: Tween,
    pub position: Position,
}

impl<E> TimelineStep<E> {
    /// Span from this step's start until its last target finishes.
    pub fn span(&self) -> f32 {
        let fan_out = self.targets.len().saturating_sub(1) as f32 * self.tween.stagger;
        self.tween.delay + fan_out + self.tween.active_duration()
    }
}

/// Sequenced tweens sharing one clock.
#[derive(Clone, Debug)]
pub struct Timeline<E> {
    pub default_ease: Option<Ease>,
    steps: Vec<TimelineStep<E>>,
}

impl<E> Timeline<E> {
    pub fn new(default_ease: Option<Ease>) -> Self {
        Self {
            default_ease,
            steps: Vec::new(),
        }
    }

    /// Append a step. Steps without targets are dropped, matching the
    /// engine, which ignores tweens on empty selections.
    pub fn to(mut self, targets: Vec<E>, tween: Tween, position: Position) -> Self {
        if !targets.is_empty() {
            self.steps.push(TimelineStep {
                targets,
                tween,
                position,
            });
        }
        self
    }

    pub fn steps(&self) -> &[TimelineStep<E>] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Absolute start time of each step, in seconds from timeline start.
    pub fn start_times(&self) -> Vec<f32> {
        let mut end = 0.0_f32;
        self.steps
            .iter()
            .map(|step| {
                let start = match step.position {
                    Position::After => end,
                    Position::Overlap(secs) => (end - secs).max(0.0),
                };
                end = end.max(start + step.span());
                start
            })
            .collect()
    }

    /// Total running time.
    pub fn duration(&self) -> f32 {
        self.start_times()
            .iter()
            .zip(&self.steps)
            .map(|(start, step)| start + step.span())
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_props_replace_in_place() {
        let t = Tween::new().prop(Prop::X, 1.0).prop(Prop::Y, 2.0).prop(Prop::X, 3.0);
        assert_eq!(t.props.len(), 2);
        assert_eq!(t.num(Prop::X), Some(3.0));
        assert_eq!(t.props[0].0, Prop::X);
    }

    #[test]
    fn text_and_numbers_are_kept_apart() {
        let t = Tween::new().style(Prop::Filter, "brightness(1.1)").prop(Prop::Scale, 1.1);
        assert_eq!(t.text(Prop::Filter), Some("brightness(1.1)"));
        assert_eq!(t.num(Prop::Filter), None);
        assert_eq!(t.text(Prop::Scale), None);
    }

    #[test]
    fn active_duration_counts_repeats() {
        assert_eq!(Tween::new().active_duration(), DEFAULT_TWEEN_DURATION);
        let t = Tween::new().duration(0.5).repeat(Repeat::Count(1));
        assert_eq!(t.active_duration(), 1.0);
        let forever = Tween::new().duration(3.0).repeat(Repeat::Infinite);
        assert!(forever.active_duration().is_infinite());
    }

    #[test]
    fn overlap_positions_pull_steps_back() {
        let tl = Timeline::new(Some(Ease::Power3Out))
            .to(vec!['a'], Tween::new().duration(1.4), Position::After)
            .to(vec!['a'], Tween::new().duration(0.5), Position::Overlap(0.8))
            .to(vec!['b'], Tween::new().duration(1.0), Position::After);
        let starts = tl.start_times();
        assert_eq!(starts.len(), 3);
        assert_eq!(starts[0], 0.0);
        assert!((starts[1] - 0.6).abs() < 1e-6);
        assert!((starts[2] - 1.4).abs() < 1e-6);
        assert!((tl.duration() - 2.4).abs() < 1e-6);
    }

    #[test]
    fn overlap_never_starts_before_zero() {
        let tl = Timeline::new(None).to(vec![1], Tween::new().duration(0.2), Position::Overlap(5.0));
        assert_eq!(tl.start_times(), vec![0.0]);
    }

    #[test]
    fn stagger_extends_the_step() {
        let tl = Timeline::new(None).to(
            vec![1, 2, 3],
            Tween::new().duration(1.0).stagger(0.1),
            Position::After,
        );
        assert!((tl.duration() - 1.2).abs() < 1e-6);
    }

    #[test]
    fn empty_target_steps_are_dropped() {
        let tl: Timeline<u8> = Timeline::new(None).to(vec![], Tween::new(), Position::After);
        assert!(tl.is_empty());
    }

    #[test]
    fn position_labels_use_relative_syntax() {
        assert_eq!(Position::After.label(), None);
        assert_eq!(Position::Overlap(0.8).label().as_deref(), Some("-=0.8"));
    }
}
