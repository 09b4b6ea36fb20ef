use std::fmt;

use crate::utils::num_to_string;
use crate::values::{Angle, Length};

#[derive(Clone, Debug, PartialEq)]
pub enum Transform {
  Translate(Length, Length),
  Translate3d(Length, Length, Length),
  TranslateX(Length),
  TranslateY(Length),
  TranslateZ(Length),
  Scale(f64, f64),
  Scale3d(f64, f64, f64),
  ScaleX(f64),
  ScaleY(f64),
  ScaleZ(f64),
  Rotate(Angle),
  Rotate3d(f64, f64, f64, Angle),
  RotateX(Angle),
  RotateY(Angle),
  RotateZ(Angle),
  Skew(Angle, Angle),
  SkewX(Angle),
  SkewY(Angle),
  Perspective(i32),
}

impl fmt::Display for Transform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let n = |v: &f64| num_to_string(*v);
    match self {
      Transform::Translate(x, y) => write!(f, "translate({x}, {y})"),
      Transform::Translate3d(x, y, z) => write!(f, "translate3d({x}, {y}, {z})"),
      Transform::TranslateX(x) => write!(f, "translateX({x})"),
      Transform::TranslateY(y) => write!(f, "translateY({y})"),
      Transform::TranslateZ(z) => write!(f, "translateZ({z})"),
      Transform::Scale(x, y) => write!(f, "scale({}, {})", n(x), n(y)),
      Transform::Scale3d(x, y, z) => write!(f, "scale3d({}, {}, {})", n(x), n(y), n(z)),
      Transform::ScaleX(x) => write!(f, "scaleX({})", n(x)),
      Transform::ScaleY(y) => write!(f, "scaleY({})", n(y)),
      Transform::ScaleZ(z) => write!(f, "scaleZ({})", n(z)),
      Transform::Rotate(a) => write!(f, "rotate({a})"),
      Transform::Rotate3d(x, y, z, a) => {
        write!(f, "rotate3d({}, {}, {}, {a})", n(x), n(y), n(z))
      }
      Transform::RotateX(a) => write!(f, "rotateX({a})"),
      Transform::RotateY(a) => write!(f, "rotateY({a})"),
      Transform::RotateZ(a) => write!(f, "rotateZ({a})"),
      Transform::Skew(x, y) => write!(f, "skew({x}, {y})"),
      Transform::SkewX(a) => write!(f, "skewX({a})"),
      Transform::SkewY(a) => write!(f, "skewY({a})"),
      Transform::Perspective(d) => write!(f, "perspective({d})"),
    }
  }
}

impl Transform {
  pub fn translate(x: Length, y: Length) -> Self {
    Transform::Translate(x, y)
  }

  pub fn translate3d(x: Length, y: Length, z: Length) -> Self {
    Transform::Translate3d(x, y, z)
  }

  pub fn translate_x(x: Length) -> Self {
    Transform::TranslateX(x)
  }

  pub fn translate_y(y: Length) -> Self {
    Transform::TranslateY(y)
  }

  pub fn translate_z(z: Length) -> Self {
    Transform::TranslateZ(z)
  }

  pub fn scale(x: f64, y: f64) -> Self {
    Transform::Scale(x, y)
  }

  pub fn scale3d(x: f64, y: f64, z: f64) -> Self {
    Transform::Scale3d(x, y, z)
  }

  pub fn scale_x(x: f64) -> Self {
    Transform::ScaleX(x)
  }

  pub fn scale_y(y: f64) -> Self {
    Transform::ScaleY(y)
  }

  pub fn scale_z(z: f64) -> Self {
    Transform::ScaleZ(z)
  }

  pub fn rotate(angle: Angle) -> Self {
    Transform::Rotate(angle)
  }

  pub fn rotate3d(x: f64, y: f64, z: f64, angle: Angle) -> Self {
    Transform::Rotate3d(x, y, z, angle)
  }

  pub fn rotate_x(angle: Angle) -> Self {
    Transform::RotateX(angle)
  }

  pub fn rotate_y(angle: Angle) -> Self {
    Transform::RotateY(angle)
  }

  pub fn rotate_z(angle: Angle) -> Self {
    Transform::RotateZ(angle)
  }

  pub fn skew(x: Angle, y: Angle) -> Self {
    Transform::Skew(x, y)
  }

  pub fn skew_x(angle: Angle) -> Self {
    Transform::SkewX(angle)
  }

  pub fn skew_y(angle: Angle) -> Self {
    Transform::SkewY(angle)
  }

  pub fn perspective(distance: i32) -> Self {
    Transform::Perspective(distance)
  }
}
