use std::fmt;

use crate::utils::num_to_string;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CalcOp {
  Add,
  Sub,
}

impl CalcOp {
  fn as_str(&self) -> &'static str {
    match self {
      CalcOp::Add => "+",
      CalcOp::Sub => "-",
    }
  }
}

/// A CSS `<length>` or `<percentage>`, including nested `calc()` expressions.
#[derive(Clone, Debug, PartialEq)]
pub enum Length {
  Zero,
  Auto,
  Px(i32),
  PxFloat(f64),
  Percent(f64),
  Em(f64),
  Rem(f64),
  Ex(f64),
  Ch(f64),
  Vh(f64),
  Vw(f64),
  Vmin(f64),
  Vmax(f64),
  Pt(i32),
  Calc(CalcOp, Box<Length>, Box<Length>),
}

impl fmt::Display for Length {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Length::Zero => f.write_str("0"),
      Length::Auto => f.write_str("auto"),
      Length::Px(n) => write!(f, "{n}px"),
      Length::PxFloat(n) => write!(f, "{}px", num_to_string(*n)),
      Length::Percent(n) => write!(f, "{}%", num_to_string(*n)),
      Length::Em(n) => write!(f, "{}em", num_to_string(*n)),
      Length::Rem(n) => write!(f, "{}rem", num_to_string(*n)),
      Length::Ex(n) => write!(f, "{}ex", num_to_string(*n)),
      Length::Ch(n) => write!(f, "{}ch", num_to_string(*n)),
      Length::Vh(n) => write!(f, "{}vh", num_to_string(*n)),
      Length::Vw(n) => write!(f, "{}vw", num_to_string(*n)),
      Length::Vmin(n) => write!(f, "{}vmin", num_to_string(*n)),
      Length::Vmax(n) => write!(f, "{}vmax", num_to_string(*n)),
      Length::Pt(n) => write!(f, "{n}pt"),
      Length::Calc(op, a, b) => write!(f, "calc({a} {} {b})", op.as_str()),
    }
  }
}

pub fn zero() -> Length {
  Length::Zero
}

pub fn auto() -> Length {
  Length::Auto
}

pub fn px(n: i32) -> Length {
  Length::Px(n)
}

pub fn px_float(n: f64) -> Length {
  Length::PxFloat(n)
}

pub fn pct(n: f64) -> Length {
  Length::Percent(n)
}

pub fn em(n: f64) -> Length {
  Length::Em(n)
}

pub fn rem(n: f64) -> Length {
  Length::Rem(n)
}

pub fn ex(n: f64) -> Length {
  Length::Ex(n)
}

pub fn ch(n: f64) -> Length {
  Length::Ch(n)
}

pub fn vh(n: f64) -> Length {
  Length::Vh(n)
}

pub fn vw(n: f64) -> Length {
  Length::Vw(n)
}

pub fn vmin(n: f64) -> Length {
  Length::Vmin(n)
}

pub fn vmax(n: f64) -> Length {
  Length::Vmax(n)
}

pub fn pt(n: i32) -> Length {
  Length::Pt(n)
}

/// Builds `calc(a <op> b)`. Operands are kept as written, no simplification happens.
pub fn calc(op: CalcOp, a: Length, b: Length) -> Length {
  Length::Calc(op, Box::new(a), Box::new(b))
}

pub fn calc_add(a: Length, b: Length) -> Length {
  calc(CalcOp::Add, a, b)
}

pub fn calc_sub(a: Length, b: Length) -> Length {
  calc(CalcOp::Sub, a, b)
}
