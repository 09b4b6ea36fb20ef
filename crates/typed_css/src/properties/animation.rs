use std::fmt;

use itertools::Itertools;

use crate::keywords::{AnimationDirection, AnimationFillMode, AnimationPlayState};
use crate::values::{Time, TimingFunction};
use crate::{AnimationHandle, Rule};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IterationCount {
  Infinite,
  Count(u32),
}

impl Default for IterationCount {
  fn default() -> Self {
    IterationCount::Count(1)
  }
}

impl fmt::Display for IterationCount {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      IterationCount::Infinite => f.write_str("infinite"),
      IterationCount::Count(n) => write!(f, "{n}"),
    }
  }
}

/// One layer of the `animation` shorthand, referencing a keyframes handle by name.
///
/// Encodes as `name duration timing-function delay iteration-count direction fill-mode
/// play-state`.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
  pub name: String,
  pub duration: Time,
  pub timing: TimingFunction,
  pub delay: Time,
  pub iteration_count: IterationCount,
  pub direction: AnimationDirection,
  pub fill_mode: AnimationFillMode,
  pub play_state: AnimationPlayState,
}

impl Animation {
  pub fn new(handle: &AnimationHandle) -> Self {
    Self {
      name: handle.name().to_string(),
      duration: Time::default(),
      timing: TimingFunction::default(),
      delay: Time::default(),
      iteration_count: IterationCount::default(),
      direction: AnimationDirection::Normal,
      fill_mode: AnimationFillMode::None,
      play_state: AnimationPlayState::Running,
    }
  }

  pub fn with_duration(mut self, duration: Time) -> Self {
    self.duration = duration;
    self
  }

  pub fn with_timing(mut self, timing: TimingFunction) -> Self {
    self.timing = timing;
    self
  }

  pub fn with_delay(mut self, delay: Time) -> Self {
    self.delay = delay;
    self
  }

  pub fn with_iteration_count(mut self, count: IterationCount) -> Self {
    self.iteration_count = count;
    self
  }

  pub fn with_direction(mut self, direction: AnimationDirection) -> Self {
    self.direction = direction;
    self
  }

  pub fn with_fill_mode(mut self, fill_mode: AnimationFillMode) -> Self {
    self.fill_mode = fill_mode;
    self
  }

  pub fn with_play_state(mut self, play_state: AnimationPlayState) -> Self {
    self.play_state = play_state;
    self
  }
}

impl fmt::Display for Animation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} {} {} {} {} {} {} {}",
      self.name,
      self.duration,
      self.timing,
      self.delay,
      self.iteration_count,
      self.direction,
      self.fill_mode,
      self.play_state
    )
  }
}

pub fn animation(value: Animation) -> Rule {
  Rule::declaration("animation", value)
}

pub fn animations(values: impl IntoIterator<Item = Animation>) -> Rule {
  let value = values.into_iter().join(", ");
  if value.is_empty() {
    Rule::declaration("animation", "none")
  } else {
    Rule::declaration("animation", value)
  }
}

pub fn animation_duration(value: Time) -> Rule {
  Rule::declaration("animationDuration", value)
}

pub fn animation_delay(value: Time) -> Rule {
  Rule::declaration("animationDelay", value)
}

pub fn animation_direction(value: AnimationDirection) -> Rule {
  Rule::declaration("animationDirection", value)
}

pub fn animation_fill_mode(value: AnimationFillMode) -> Rule {
  Rule::declaration("animationFillMode", value)
}

pub fn animation_iteration_count(value: IterationCount) -> Rule {
  Rule::declaration("animationIterationCount", value)
}

pub fn animation_play_state(value: AnimationPlayState) -> Rule {
  Rule::declaration("animationPlayState", value)
}

pub fn animation_timing_function(value: TimingFunction) -> Rule {
  Rule::declaration("animationTimingFunction", value)
}
