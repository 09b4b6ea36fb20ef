use std::fmt;

use itertools::Itertools;

use crate::values::{Angle, Color, Length};

/// A color at a position along the gradient line, encoded as `<color> <position>`.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorStop {
  pub position: Length,
  pub color: Color,
}

impl fmt::Display for ColorStop {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.color, self.position)
  }
}

impl From<(Length, Color)> for ColorStop {
  fn from((position, color): (Length, Color)) -> Self {
    ColorStop { position, color }
  }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Gradient {
  Linear(Angle, Vec<ColorStop>),
  RepeatingLinear(Angle, Vec<ColorStop>),
  Radial(Vec<ColorStop>),
  RepeatingRadial(Vec<ColorStop>),
}

impl fmt::Display for Gradient {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Gradient::Linear(angle, stops) => {
        write!(f, "linear-gradient({angle}, {})", stops.iter().join(", "))
      }
      Gradient::RepeatingLinear(angle, stops) => write!(
        f,
        "repeating-linear-gradient({angle}, {})",
        stops.iter().join(", ")
      ),
      Gradient::Radial(stops) => write!(f, "radial-gradient({})", stops.iter().join(", ")),
      Gradient::RepeatingRadial(stops) => write!(
        f,
        "repeating-radial-gradient({})",
        stops.iter().join(", ")
      ),
    }
  }
}

fn collect_stops(stops: impl IntoIterator<Item = (Length, Color)>) -> Vec<ColorStop> {
  stops.into_iter().map(ColorStop::from).collect()
}

pub fn linear_gradient(angle: Angle, stops: impl IntoIterator<Item = (Length, Color)>) -> Gradient {
  Gradient::Linear(angle, collect_stops(stops))
}

pub fn repeating_linear_gradient(
  angle: Angle,
  stops: impl IntoIterator<Item = (Length, Color)>,
) -> Gradient {
  Gradient::RepeatingLinear(angle, collect_stops(stops))
}

pub fn radial_gradient(stops: impl IntoIterator<Item = (Length, Color)>) -> Gradient {
  Gradient::Radial(collect_stops(stops))
}

pub fn repeating_radial_gradient(stops: impl IntoIterator<Item = (Length, Color)>) -> Gradient {
  Gradient::RepeatingRadial(collect_stops(stops))
}
