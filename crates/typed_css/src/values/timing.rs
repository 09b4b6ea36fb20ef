use std::fmt;

use crate::keywords::StepPosition;
use crate::utils::num_to_string;

/// Easing of transitions and animations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TimingFunction {
  #[default]
  Ease,
  Linear,
  EaseIn,
  EaseOut,
  EaseInOut,
  StepStart,
  StepEnd,
  CubicBezier(f64, f64, f64, f64),
  Steps(i32, StepPosition),
  Frames(i32),
}

impl fmt::Display for TimingFunction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TimingFunction::Ease => f.write_str("ease"),
      TimingFunction::Linear => f.write_str("linear"),
      TimingFunction::EaseIn => f.write_str("ease-in"),
      TimingFunction::EaseOut => f.write_str("ease-out"),
      TimingFunction::EaseInOut => f.write_str("ease-in-out"),
      TimingFunction::StepStart => f.write_str("step-start"),
      TimingFunction::StepEnd => f.write_str("step-end"),
      TimingFunction::CubicBezier(a, b, c, d) => write!(
        f,
        "cubic-bezier({}, {}, {}, {})",
        num_to_string(*a),
        num_to_string(*b),
        num_to_string(*c),
        num_to_string(*d)
      ),
      TimingFunction::Steps(n, position) => write!(f, "steps({n}, {position})"),
      TimingFunction::Frames(n) => write!(f, "frames({n})"),
    }
  }
}

pub fn cubic_bezier(a: f64, b: f64, c: f64, d: f64) -> TimingFunction {
  TimingFunction::CubicBezier(a, b, c, d)
}

pub fn steps(count: i32, position: StepPosition) -> TimingFunction {
  TimingFunction::Steps(count, position)
}
