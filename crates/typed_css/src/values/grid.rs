use std::fmt;

use crate::utils::num_to_string;
use crate::values::Length;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepeatCount {
  Count(u32),
  AutoFill,
  AutoFit,
}

impl fmt::Display for RepeatCount {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RepeatCount::Count(n) => write!(f, "{n}"),
      RepeatCount::AutoFill => f.write_str("auto-fill"),
      RepeatCount::AutoFit => f.write_str("auto-fit"),
    }
  }
}

/// A track size in `grid-template-*` and `grid-auto-*`.
#[derive(Clone, Debug, PartialEq)]
pub enum GridLength {
  Length(Length),
  Fr(f64),
  Repeat(RepeatCount, Box<GridLength>),
  MinMax(Box<GridLength>, Box<GridLength>),
  Auto,
  MinContent,
  MaxContent,
}

impl fmt::Display for GridLength {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GridLength::Length(length) => write!(f, "{length}"),
      GridLength::Fr(n) => write!(f, "{}fr", num_to_string(*n)),
      GridLength::Repeat(count, track) => write!(f, "repeat({count}, {track})"),
      GridLength::MinMax(min, max) => write!(f, "minmax({min}, {max})"),
      GridLength::Auto => f.write_str("auto"),
      GridLength::MinContent => f.write_str("min-content"),
      GridLength::MaxContent => f.write_str("max-content"),
    }
  }
}

impl From<Length> for GridLength {
  fn from(length: Length) -> Self {
    GridLength::Length(length)
  }
}

pub fn fr(n: f64) -> GridLength {
  GridLength::Fr(n)
}

pub fn repeat(count: RepeatCount, track: impl Into<GridLength>) -> GridLength {
  GridLength::Repeat(count, Box::new(track.into()))
}

pub fn minmax(min: impl Into<GridLength>, max: impl Into<GridLength>) -> GridLength {
  GridLength::MinMax(Box::new(min.into()), Box::new(max.into()))
}
