use std::fmt;

use crate::utils::num_to_string;

/// Durations and delays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Time {
  Ms(i32),
  S(f64),
}

impl Default for Time {
  fn default() -> Self {
    Time::Ms(0)
  }
}

impl fmt::Display for Time {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Time::Ms(n) => write!(f, "{n}ms"),
      Time::S(n) => write!(f, "{}s", num_to_string(*n)),
    }
  }
}

pub fn ms(n: i32) -> Time {
  Time::Ms(n)
}

pub fn s(n: f64) -> Time {
  Time::S(n)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_time() {
    assert_eq!(ms(300).to_string(), "300ms");
    assert_eq!(Time::default().to_string(), "0ms");
    assert_eq!(s(1.5).to_string(), "1.5s");
  }
}
