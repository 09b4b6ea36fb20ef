use crate::rule::{Declaration, Frame, KeyframesRef, Selector};
use crate::Rule;

/// Unvalidated declaration. Both property and value are emitted exactly as given.
pub fn raw(property: impl Into<String>, value: impl Into<String>) -> Rule {
  Rule::Declaration(Declaration {
    property: property.into(),
    value: value.into(),
  })
}

/// Marks a declaration `!important`. Selectors and keyframes are rewritten recursively.
pub fn important(rule: Rule) -> Rule {
  match rule {
    Rule::Declaration(Declaration { property, value }) => Rule::Declaration(Declaration {
      property,
      value: format!("{value} !important"),
    }),
    Rule::Selector(Selector { text, rules }) => Rule::Selector(Selector {
      text,
      rules: rules.into_iter().map(important).collect(),
    }),
    Rule::Keyframes(KeyframesRef { frames }) => Rule::Keyframes(KeyframesRef {
      frames: frames
        .into_iter()
        .map(|frame| Frame {
          percentage: frame.percentage,
          rules: frame.rules.into_iter().map(important).collect(),
        })
        .collect(),
    }),
  }
}

/// Debug label picked up by CSS-in-JS runtimes when naming generated classes.
pub fn label(name: impl Into<String>) -> Rule {
  raw("label", name)
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use serde_json::json;

  use super::*;
  use crate::{flatten, hover, opacity};

  #[test]
  fn test_raw_passes_through() {
    let style = flatten(&[raw("WebkitLineClamp", "3"), raw("gap", "not a length")]);
    assert_eq!(
      style.to_json(),
      json!({ "WebkitLineClamp": "3", "gap": "not a length" })
    );
  }

  #[test]
  fn test_important_recurses_into_selectors() {
    let rule = important(Rule::selector(
      ".card",
      vec![opacity(0.5), hover(vec![opacity(1.0)])],
    ));
    assert_eq!(
      flatten(&[rule]).to_json(),
      json!({
        ".card": {
          "opacity": "0.5 !important",
          ":hover": { "opacity": "1 !important" }
        }
      })
    );
  }

  #[test]
  fn test_important_keyframes() {
    let rule = important(Rule::Keyframes(KeyframesRef {
      frames: vec![Frame {
        percentage: 0,
        rules: vec![opacity(0.0)],
      }],
    }));
    assert_eq!(
      flatten(&[rule]).to_json(),
      json!({ "animationName": { "0%": { "opacity": "0 !important" } } })
    );
  }

  #[test]
  fn test_label() {
    assert_eq!(flatten(&[label("button")]).to_json(), json!({ "label": "button" }));
  }
}
