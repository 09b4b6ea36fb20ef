use std::fmt;

use crate::keywords::{BackgroundAttachment, BackgroundBox, BackgroundRepeat};
use crate::values::{Color, Gradient, Length};
use crate::Rule;

/// An image layer: `url(...)`, a gradient or `none`.
#[derive(Clone, Debug, PartialEq)]
pub enum BackgroundImage {
  Url(String),
  Gradient(Gradient),
  None,
}

impl fmt::Display for BackgroundImage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BackgroundImage::Url(url) => write!(f, "url({url})"),
      BackgroundImage::Gradient(gradient) => write!(f, "{gradient}"),
      BackgroundImage::None => f.write_str("none"),
    }
  }
}

impl From<Gradient> for BackgroundImage {
  fn from(gradient: Gradient) -> Self {
    BackgroundImage::Gradient(gradient)
  }
}

/// Values accepted by the `background` shorthand.
#[derive(Clone, Debug, PartialEq)]
pub enum Background {
  Color(Color),
  Image(BackgroundImage),
}

impl fmt::Display for Background {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Background::Color(color) => write!(f, "{color}"),
      Background::Image(image) => write!(f, "{image}"),
    }
  }
}

impl From<Color> for Background {
  fn from(color: Color) -> Self {
    Background::Color(color)
  }
}

impl From<Gradient> for Background {
  fn from(gradient: Gradient) -> Self {
    Background::Image(BackgroundImage::Gradient(gradient))
  }
}

impl From<BackgroundImage> for Background {
  fn from(image: BackgroundImage) -> Self {
    Background::Image(image)
  }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BackgroundSize {
  Cover,
  Contain,
  Size(Length, Length),
}

impl fmt::Display for BackgroundSize {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BackgroundSize::Cover => f.write_str("cover"),
      BackgroundSize::Contain => f.write_str("contain"),
      BackgroundSize::Size(x, y) => write!(f, "{x} {y}"),
    }
  }
}

pub fn url(location: impl Into<String>) -> BackgroundImage {
  BackgroundImage::Url(location.into())
}

pub fn background(value: impl Into<Background>) -> Rule {
  let value: Background = value.into();
  Rule::declaration("background", value)
}

/// Full `background` shorthand: `<color> <image> <repeat> <x> <y>`.
pub fn background_shorthand(
  color: Color,
  image: impl Into<BackgroundImage>,
  repeat: BackgroundRepeat,
  position: (Length, Length),
) -> Rule {
  let image: BackgroundImage = image.into();
  let (x, y) = position;
  Rule::declaration("background", format!("{color} {image} {repeat} {x} {y}"))
}

pub fn background_color(value: Color) -> Rule {
  Rule::declaration("backgroundColor", value)
}

pub fn background_image(value: impl Into<BackgroundImage>) -> Rule {
  let value: BackgroundImage = value.into();
  Rule::declaration("backgroundImage", value)
}

pub fn background_repeat(value: BackgroundRepeat) -> Rule {
  Rule::declaration("backgroundRepeat", value)
}

pub fn background_position(x: Length, y: Length) -> Rule {
  Rule::declaration("backgroundPosition", format!("{x} {y}"))
}

pub fn background_size(value: BackgroundSize) -> Rule {
  Rule::declaration("backgroundSize", value)
}

pub fn background_attachment(value: BackgroundAttachment) -> Rule {
  Rule::declaration("backgroundAttachment", value)
}

pub fn background_clip(value: BackgroundBox) -> Rule {
  Rule::declaration("backgroundClip", value)
}

pub fn background_origin(value: BackgroundBox) -> Rule {
  Rule::declaration("background-origin", value)
}
