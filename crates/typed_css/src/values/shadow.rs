use std::fmt;

use crate::values::{Color, Length};

/// A single `box-shadow` layer.
///
/// Encodes as `x y blur spread color`, followed by `inset` only when set. Blur and spread
/// default to `0`.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxShadow {
  pub x: Length,
  pub y: Length,
  pub blur: Length,
  pub spread: Length,
  pub inset: bool,
  pub color: Color,
}

impl BoxShadow {
  pub fn new(x: Length, y: Length, color: Color) -> Self {
    Self {
      x,
      y,
      blur: Length::Zero,
      spread: Length::Zero,
      inset: false,
      color,
    }
  }

  pub fn with_blur(mut self, blur: Length) -> Self {
    self.blur = blur;
    self
  }

  pub fn with_spread(mut self, spread: Length) -> Self {
    self.spread = spread;
    self
  }

  pub fn with_inset(mut self, inset: bool) -> Self {
    self.inset = inset;
    self
  }
}

impl fmt::Display for BoxShadow {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} {} {} {} {}",
      self.x, self.y, self.blur, self.spread, self.color
    )?;
    if self.inset {
      f.write_str(" inset")?;
    }
    Ok(())
  }
}

/// Builds a box shadow from every component at once.
pub fn shadow(
  x: Length,
  y: Length,
  blur: Length,
  spread: Length,
  inset: bool,
  color: Color,
) -> BoxShadow {
  BoxShadow {
    x,
    y,
    blur,
    spread,
    inset,
    color,
  }
}

/// A single `text-shadow` layer: `x y blur color`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextShadow {
  pub x: Length,
  pub y: Length,
  pub blur: Length,
  pub color: Color,
}

impl TextShadow {
  pub fn new(x: Length, y: Length, color: Color) -> Self {
    Self {
      x,
      y,
      blur: Length::Zero,
      color,
    }
  }

  pub fn with_blur(mut self, blur: Length) -> Self {
    self.blur = blur;
    self
  }
}

impl fmt::Display for TextShadow {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {} {} {}", self.x, self.y, self.blur, self.color)
  }
}
