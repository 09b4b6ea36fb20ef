use std::fmt;

use crate::utils::num_to_string;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Angle {
  Deg(f64),
  Rad(f64),
  Grad(f64),
  Turn(f64),
}

impl fmt::Display for Angle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Angle::Deg(n) => write!(f, "{}deg", num_to_string(*n)),
      Angle::Rad(n) => write!(f, "{}rad", num_to_string(*n)),
      Angle::Grad(n) => write!(f, "{}grad", num_to_string(*n)),
      Angle::Turn(n) => write!(f, "{}turn", num_to_string(*n)),
    }
  }
}

pub fn deg(n: f64) -> Angle {
  Angle::Deg(n)
}

pub fn rad(n: f64) -> Angle {
  Angle::Rad(n)
}

pub fn grad(n: f64) -> Angle {
  Angle::Grad(n)
}

pub fn turn(n: f64) -> Angle {
  Angle::Turn(n)
}
