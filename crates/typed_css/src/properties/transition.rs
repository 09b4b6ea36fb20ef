use std::fmt;

use itertools::Itertools;

use crate::values::{Time, TimingFunction};
use crate::Rule;

/// One layer of the `transition` shorthand.
///
/// Encodes as `duration timing-function delay property`.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
  pub property: String,
  pub duration: Time,
  pub delay: Time,
  pub timing: TimingFunction,
}

impl Transition {
  pub fn new(property: impl Into<String>) -> Self {
    Self {
      property: property.into(),
      duration: Time::default(),
      delay: Time::default(),
      timing: TimingFunction::default(),
    }
  }

  pub fn with_duration(mut self, duration: Time) -> Self {
    self.duration = duration;
    self
  }

  pub fn with_delay(mut self, delay: Time) -> Self {
    self.delay = delay;
    self
  }

  pub fn with_timing(mut self, timing: TimingFunction) -> Self {
    self.timing = timing;
    self
  }
}

impl fmt::Display for Transition {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} {} {} {}",
      self.duration, self.timing, self.delay, self.property
    )
  }
}

pub fn transition(value: Transition) -> Rule {
  Rule::declaration("transition", value)
}

pub fn transitions(values: impl IntoIterator<Item = Transition>) -> Rule {
  let value = values.into_iter().join(", ");
  if value.is_empty() {
    Rule::declaration("transition", "none")
  } else {
    Rule::declaration("transition", value)
  }
}

pub fn transition_property(value: impl AsRef<str>) -> Rule {
  Rule::declaration("transitionProperty", value.as_ref())
}

pub fn transition_duration(value: Time) -> Rule {
  Rule::declaration("transitionDuration", value)
}

pub fn transition_delay(value: Time) -> Rule {
  Rule::declaration("transitionDelay", value)
}

pub fn transition_timing_function(value: TimingFunction) -> Rule {
  Rule::declaration("transitionTimingFunction", value)
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use serde_json::json;

  use super::*;
  use crate::flatten;
  use crate::values::{cubic_bezier, ms, s};

  #[test]
  fn test_transition_defaults() {
    let rule = transition(Transition::new("all"));
    assert_eq!(rule.as_declaration().unwrap().value, "0ms ease 0ms all");
  }

  #[test]
  fn test_transition_layers() {
    let rule = transitions([
      Transition::new("opacity").with_duration(ms(200)),
      Transition::new("transform")
        .with_duration(s(0.3))
        .with_delay(ms(50))
        .with_timing(cubic_bezier(0.4, 0.0, 0.2, 1.0)),
    ]);
    assert_eq!(
      rule.as_declaration().unwrap().value,
      "200ms ease 0ms opacity, 0.3s cubic-bezier(0.4, 0, 0.2, 1) 50ms transform"
    );
  }

  #[test]
  fn test_transition_longhands() {
    let style = flatten(&[
      transition_property("color"),
      transition_duration(ms(150)),
      transition_delay(s(1.0)),
      transition_timing_function(TimingFunction::EaseOut),
    ]);
    assert_eq!(
      style.to_json(),
      json!({
        "transitionProperty": "color",
        "transitionDuration": "150ms",
        "transitionDelay": "1s",
        "transitionTimingFunction": "ease-out"
      })
    );
  }
}
