use itertools::Itertools;

use crate::values::{BoxShadow, TextShadow};
use crate::Rule;

pub fn box_shadow(value: BoxShadow) -> Rule {
  Rule::declaration("boxShadow", value)
}

/// Several shadow layers, comma separated. An empty list renders `none`.
pub fn box_shadows(values: impl IntoIterator<Item = BoxShadow>) -> Rule {
  Rule::declaration("boxShadow", layers(values))
}

pub fn text_shadow(value: TextShadow) -> Rule {
  Rule::declaration("textShadow", value)
}

pub fn text_shadows(values: impl IntoIterator<Item = TextShadow>) -> Rule {
  Rule::declaration("textShadow", layers(values))
}

fn layers<T: std::fmt::Display>(values: impl IntoIterator<Item = T>) -> String {
  let joined = values.into_iter().join(", ");
  if joined.is_empty() {
    "none".to_string()
  } else {
    joined
  }
}
