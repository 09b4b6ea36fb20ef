use std::fmt;
use std::str::FromStr;

use crate::utils::num_to_string;
use crate::values::{Angle, NamedColor};
use crate::CssError;

/// Alpha channel. Serialized in the form it was supplied, never converted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Alpha {
  Num(f64),
  Percent(f64),
}

impl fmt::Display for Alpha {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Alpha::Num(n) => f.write_str(&num_to_string(*n)),
      Alpha::Percent(n) => write!(f, "{}%", num_to_string(*n)),
    }
  }
}

impl From<f64> for Alpha {
  fn from(n: f64) -> Self {
    Alpha::Num(n)
  }
}

/// Hue of `hsl()`/`hsla()`, either a bare number or an angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hue {
  Num(f64),
  Angle(Angle),
}

impl fmt::Display for Hue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Hue::Num(n) => f.write_str(&num_to_string(*n)),
      Hue::Angle(angle) => write!(f, "{angle}"),
    }
  }
}

impl From<f64> for Hue {
  fn from(n: f64) -> Self {
    Hue::Num(n)
  }
}

impl From<Angle> for Hue {
  fn from(angle: Angle) -> Self {
    Hue::Angle(angle)
  }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Color {
  Rgb(u8, u8, u8),
  Rgba(u8, u8, u8, Alpha),
  /// Hue, saturation percent, lightness percent.
  Hsl(Hue, f64, f64),
  Hsla(Hue, f64, f64, Alpha),
  /// Hex digits without the leading `#`. Not validated.
  Hex(String),
  Named(NamedColor),
  Transparent,
  CurrentColor,
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Color::Rgb(r, g, b) => write!(f, "rgb({r}, {g}, {b})"),
      Color::Rgba(r, g, b, a) => write!(f, "rgba({r}, {g}, {b}, {a})"),
      Color::Hsl(h, s, l) => write!(
        f,
        "hsl({h}, {}%, {}%)",
        num_to_string(*s),
        num_to_string(*l)
      ),
      Color::Hsla(h, s, l, a) => write!(
        f,
        "hsla({h}, {}%, {}%, {a})",
        num_to_string(*s),
        num_to_string(*l)
      ),
      Color::Hex(digits) => write!(f, "#{digits}"),
      Color::Named(named) => f.write_str(named.literal()),
      Color::Transparent => f.write_str("transparent"),
      Color::CurrentColor => f.write_str("currentColor"),
    }
  }
}

impl From<NamedColor> for Color {
  fn from(named: NamedColor) -> Self {
    Color::Named(named)
  }
}

impl FromStr for Color {
  type Err = CssError;

  /// Resolves `transparent`, `currentColor` and the named color catalogue.
  fn from_str(name: &str) -> Result<Self, Self::Err> {
    if name.eq_ignore_ascii_case("transparent") {
      return Ok(Color::Transparent);
    }
    if name.eq_ignore_ascii_case("currentcolor") {
      return Ok(Color::CurrentColor);
    }
    name.parse::<NamedColor>().map(Color::Named)
  }
}

pub fn rgb(r: u8, g: u8, b: u8) -> Color {
  Color::Rgb(r, g, b)
}

pub fn rgba(r: u8, g: u8, b: u8, alpha: impl Into<Alpha>) -> Color {
  Color::Rgba(r, g, b, alpha.into())
}

pub fn hsl(hue: impl Into<Hue>, saturation: f64, lightness: f64) -> Color {
  Color::Hsl(hue.into(), saturation, lightness)
}

pub fn hsla(
  hue: impl Into<Hue>,
  saturation: f64,
  lightness: f64,
  alpha: impl Into<Alpha>,
) -> Color {
  Color::Hsla(hue.into(), saturation, lightness, alpha.into())
}

pub fn hex(digits: impl Into<String>) -> Color {
  Color::Hex(digits.into())
}

pub fn named(color: NamedColor) -> Color {
  Color::Named(color)
}

pub fn transparent() -> Color {
  Color::Transparent
}

pub fn current_color() -> Color {
  Color::CurrentColor
}
