//! Nested selectors and at-rules.
//!
//! Selector text is emitted exactly as given and becomes the key of a nested map when
//! flattened. Helpers below cover the common pseudo-classes and combinators.

use crate::Rule;

pub fn selector(text: impl Into<String>, rules: Vec<Rule>) -> Rule {
  Rule::selector(text, rules)
}

/// `@media <query>`. Nested media rules flatten into nested maps.
pub fn media(query: impl AsRef<str>, rules: Vec<Rule>) -> Rule {
  Rule::selector(format!("@media {}", query.as_ref()), rules)
}

macro_rules! pseudo {
  ($($(#[$meta:meta])* $name:ident => $text:literal),+ $(,)?) => {
    $(
      $(#[$meta])*
      pub fn $name(rules: Vec<Rule>) -> Rule {
        Rule::selector($text, rules)
      }
    )+
  };
}

pseudo! {
  hover => ":hover",
  focus => ":focus",
  active => ":active",
  visited => ":visited",
  disabled => ":disabled",
  required => ":required",
  read_only => ":read-only",
  checked => ":checked",
  focus_within => ":focus-within",
  first_child => ":first-child",
  last_child => ":last-child",
  first_of_type => ":first-of-type",
  last_of_type => ":last-of-type",
  only_child => ":only-child",
  before => ":before",
  after => ":after",
  placeholder => "::placeholder",
  selection => "::selection",
  /// Direct children: `& > *`.
  children => "& > *",
  /// Following siblings: `& ~ *`.
  siblings => "& ~ *",
}

/// `:nth-child(<n>)`. The argument is emitted verbatim, so `"2n+1"` and `"odd"` both work.
pub fn nth_child(n: impl std::fmt::Display, rules: Vec<Rule>) -> Rule {
  Rule::selector(format!(":nth-child({n})"), rules)
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use serde_json::json;

  use super::*;
  use crate::{color, flatten, opacity, values::NamedColor, Color};

  #[test]
  fn test_pseudo_selector_text() {
    let cases = [
      (hover(vec![]), ":hover"),
      (read_only(vec![]), ":read-only"),
      (focus_within(vec![]), ":focus-within"),
      (placeholder(vec![]), "::placeholder"),
      (children(vec![]), "& > *"),
      (siblings(vec![]), "& ~ *"),
      (nth_child(3, vec![]), ":nth-child(3)"),
      (nth_child("2n+1", vec![]), ":nth-child(2n+1)"),
    ];
    for (rule, expected) in cases {
      match rule {
        Rule::Selector(selector) => assert_eq!(selector.text, expected),
        other => panic!("expected selector, got {other:?}"),
      }
    }
  }

  #[test]
  fn test_media_nesting() {
    let style = flatten(&[media(
      "(min-width: 30em)",
      vec![media(
        "(min-height: 40em)",
        vec![color(Color::from(NamedColor::Red))],
      )],
    )]);
    assert_eq!(
      style.to_json(),
      json!({
        "@media (min-width: 30em)": {
          "@media (min-height: 40em)": { "color": "#ff0000" }
        }
      })
    );
  }

  #[test]
  fn test_nested_selectors() {
    let style = flatten(&[
      opacity(0.8),
      selector("& .icon", vec![hover(vec![opacity(1.0)])]),
    ]);
    assert_eq!(
      style.to_json(),
      json!({
        "opacity": "0.8",
        "& .icon": { ":hover": { "opacity": "1" } }
      })
    );
  }
}
