//! The flattened output and the pass that produces it.

use indexmap::IndexMap;
use serde::Serialize;

use crate::rule::{Frame, KeyframesRef, Rule, ANIMATION_NAME};
use crate::StyleConfig;

/// A value in a style object: an encoded string or a nested block.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
  String(String),
  Object(StyleObject),
}

impl StyleValue {
  pub fn as_str(&self) -> Option<&str> {
    match self {
      StyleValue::String(value) => Some(value),
      StyleValue::Object(_) => None,
    }
  }

  pub fn as_object(&self) -> Option<&StyleObject> {
    match self {
      StyleValue::String(_) => None,
      StyleValue::Object(object) => Some(object),
    }
  }
}

impl From<String> for StyleValue {
  fn from(value: String) -> Self {
    StyleValue::String(value)
  }
}

impl From<&str> for StyleValue {
  fn from(value: &str) -> Self {
    StyleValue::String(value.to_string())
  }
}

impl From<StyleObject> for StyleValue {
  fn from(object: StyleObject) -> Self {
    StyleValue::Object(object)
  }
}

/// Insertion-ordered, string-keyed style object.
///
/// Setting an existing key replaces its value but keeps the position where the key was first
/// set, the same way an object literal spread behaves.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleObject {
  entries: IndexMap<String, StyleValue>,
}

impl StyleObject {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
    let key = key.into();
    if let Some(previous) = self.entries.insert(key.clone(), value.into()) {
      tracing::trace!(key = %key, ?previous, "Overwriting style entry");
    }
  }

  pub fn get(&self, key: &str) -> Option<&StyleValue> {
    self.entries.get(key)
  }

  pub fn get_str(&self, key: &str) -> Option<&str> {
    self.get(key).and_then(StyleValue::as_str)
  }

  pub fn get_object(&self, key: &str) -> Option<&StyleObject> {
    self.get(key).and_then(StyleValue::as_object)
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.entries.keys().map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
    self.entries.iter().map(|(k, v)| (k.as_str(), v))
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn to_json(&self) -> serde_json::Value {
    serde_json::Value::Object(
      self
        .iter()
        .map(|(key, value)| {
          let value = match value {
            StyleValue::String(s) => serde_json::Value::String(s.clone()),
            StyleValue::Object(object) => object.to_json(),
          };
          (key.to_string(), value)
        })
        .collect(),
    )
  }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleObject {
  fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
    let mut object = StyleObject::new();
    for (key, value) in iter {
      object.set(key, value);
    }
    object
  }
}

/// Flatten a rule list with the default configuration.
pub fn flatten(rules: &[Rule]) -> StyleObject {
  flatten_with(rules, &StyleConfig::default())
}

/// Flatten a rule list into a style object in one depth-first pass.
///
/// Declarations overwrite earlier keys of the same name. Selectors and keyframe blocks replace
/// any earlier nested object under the same key as a whole; nested objects are never merged.
pub fn flatten_with(rules: &[Rule], config: &StyleConfig) -> StyleObject {
  let mut object = StyleObject::new();
  flatten_into(&mut object, rules, config);
  object
}

fn flatten_into(object: &mut StyleObject, rules: &[Rule], config: &StyleConfig) {
  for rule in rules {
    match rule {
      Rule::Declaration(declaration) => {
        object.set(
          config.key_case.apply(&declaration.property),
          declaration.value.as_str(),
        );
      }
      Rule::Selector(selector) => {
        object.set(selector.text.as_str(), flatten_with(&selector.rules, config));
      }
      Rule::Keyframes(keyframes) => {
        object.set(
          config.key_case.apply(ANIMATION_NAME),
          flatten_frames(keyframes, config),
        );
      }
    }
  }
}

pub(crate) fn flatten_frames(keyframes: &KeyframesRef, config: &StyleConfig) -> StyleObject {
  keyframes
    .frames
    .iter()
    .map(|frame: &Frame| (frame.label(), flatten_with(&frame.rules, config)))
    .collect()
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use serde_json::json;

  use super::*;
  use crate::config::KeyCase;
  use crate::rule::Frame;

  fn decl(property: &str, value: &str) -> Rule {
    Rule::declaration(property, value)
  }

  #[test]
  fn test_flat_declarations_keep_input_order() {
    let style = flatten(&[decl("color", "red"), decl("zIndex", "1"), decl("opacity", "0.5")]);
    assert_eq!(style.keys().collect::<Vec<_>>(), vec!["color", "zIndex", "opacity"]);
    assert_eq!(
      style.to_json(),
      json!({ "color": "red", "zIndex": "1", "opacity": "0.5" })
    );
  }

  #[test]
  fn test_last_write_wins() {
    let style = flatten(&[decl("color", "red"), decl("margin", "0"), decl("color", "blue")]);
    assert_eq!(style.to_json(), json!({ "color": "blue", "margin": "0" }));
    assert_eq!(style.keys().collect::<Vec<_>>(), vec!["color", "margin"]);
  }

  #[test]
  fn test_repeated_selector_replaces() {
    let style = flatten(&[
      Rule::selector(":hover", vec![decl("color", "red")]),
      Rule::selector(":hover", vec![decl("background", "blue")]),
    ]);
    assert_eq!(style.to_json(), json!({ ":hover": { "background": "blue" } }));
  }

  #[test]
  fn test_nested_selectors() {
    let style = flatten(&[Rule::selector(
      "@media (min-width: 700px)",
      vec![Rule::selector(":hover", vec![decl("color", "red")])],
    )]);
    assert_eq!(
      style.to_json(),
      json!({ "@media (min-width: 700px)": { ":hover": { "color": "red" } } })
    );
  }

  #[test]
  fn test_keyframes_flatten_under_animation_name() {
    let keyframes = KeyframesRef {
      frames: vec![
        Frame {
          percentage: 0,
          rules: vec![decl("opacity", "0")],
        },
        Frame {
          percentage: 100,
          rules: vec![decl("opacity", "1")],
        },
      ],
    };
    let style = flatten(&[Rule::Keyframes(keyframes)]);
    assert_eq!(
      style.to_json(),
      json!({ "animationName": { "0%": { "opacity": "0" }, "100%": { "opacity": "1" } } })
    );
  }

  #[test]
  fn test_key_case_applies_to_declarations_only() {
    let rules = vec![
      decl("user-select", "none"),
      decl("backgroundColor", "red"),
      Rule::selector(":first-child", vec![decl("pointer-events", "none")]),
    ];
    let camel = flatten_with(
      &rules,
      &StyleConfig {
        key_case: KeyCase::Camel,
        ..Default::default()
      },
    );
    assert_eq!(
      camel.to_json(),
      json!({
        "userSelect": "none",
        "backgroundColor": "red",
        ":first-child": { "pointerEvents": "none" }
      })
    );

    let kebab = flatten_with(
      &rules,
      &StyleConfig {
        key_case: KeyCase::Kebab,
        ..Default::default()
      },
    );
    assert_eq!(
      kebab.to_json(),
      json!({
        "user-select": "none",
        "background-color": "red",
        ":first-child": { "pointer-events": "none" }
      })
    );
  }

  #[test]
  fn test_key_case_vendor_prefixes() {
    let kebab = flatten_with(
      &[decl("WebkitLineClamp", "3"), decl("msTransform", "none")],
      &StyleConfig {
        key_case: KeyCase::Kebab,
        ..Default::default()
      },
    );
    assert_eq!(
      kebab.keys().collect::<Vec<_>>(),
      vec!["-webkit-line-clamp", "-ms-transform"]
    );

    let camel = flatten_with(
      &[decl("-webkit-line-clamp", "3"), decl("-ms-transform", "none")],
      &StyleConfig {
        key_case: KeyCase::Camel,
        ..Default::default()
      },
    );
    assert_eq!(
      camel.keys().collect::<Vec<_>>(),
      vec!["WebkitLineClamp", "msTransform"]
    );
  }

  #[test]
  fn test_serialize_matches_to_json() {
    let style = flatten(&[
      decl("color", "red"),
      Rule::selector(":focus", vec![decl("outline", "none")]),
    ]);
    assert_eq!(serde_json::to_value(&style).unwrap(), style.to_json());
    assert_eq!(
      serde_json::to_string(&style).unwrap(),
      r#"{"color":"red",":focus":{"outline":"none"}}"#
    );
  }

  #[test]
  fn test_empty_rule_list() {
    let style = flatten(&[]);
    assert!(style.is_empty());
    assert_eq!(style.to_json(), json!({}));
  }
}
