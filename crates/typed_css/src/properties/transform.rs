use itertools::Itertools;

use crate::keywords::BackfaceVisibility;
use crate::values::{Length, Transform};
use crate::Rule;

pub fn transform(value: Transform) -> Rule {
  Rule::declaration("transform", value)
}

/// Several transform functions applied in order. An empty list renders `none`.
pub fn transforms(values: impl IntoIterator<Item = Transform>) -> Rule {
  let value = values.into_iter().join(" ");
  if value.is_empty() {
    Rule::declaration("transform", "none")
  } else {
    Rule::declaration("transform", value)
  }
}

pub fn transform_origin(x: Length, y: Length) -> Rule {
  Rule::declaration("transformOrigin", format!("{x} {y}"))
}

pub fn perspective(value: Length) -> Rule {
  Rule::declaration("perspective", value)
}

pub fn backface_visibility(value: BackfaceVisibility) -> Rule {
  Rule::declaration("backfaceVisibility", value)
}
