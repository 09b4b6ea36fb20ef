use crate::keywords::{
  AlignContent, AlignItems, AlignSelf, FlexDirection, FlexWrap, JustifyContent,
};
use crate::utils::num_to_string;
use crate::values::Length;
use crate::Rule;

/// Single-number `flex`, e.g. `flex: 1`.
pub fn flex(value: f64) -> Rule {
  Rule::declaration("flex", num_to_string(value))
}

/// `flex: <grow> <shrink> <basis>`.
pub fn flex3(grow: f64, shrink: f64, basis: Length) -> Rule {
  Rule::declaration(
    "flex",
    format!("{} {} {basis}", num_to_string(grow), num_to_string(shrink)),
  )
}

pub fn flex_grow(value: f64) -> Rule {
  Rule::declaration("flexGrow", num_to_string(value))
}

pub fn flex_shrink(value: f64) -> Rule {
  Rule::declaration("flexShrink", num_to_string(value))
}

pub fn flex_basis(value: Length) -> Rule {
  Rule::declaration("flexBasis", value)
}

pub fn flex_direction(value: FlexDirection) -> Rule {
  Rule::declaration("flexDirection", value)
}

pub fn flex_wrap(value: FlexWrap) -> Rule {
  Rule::declaration("flexWrap", value)
}

pub fn align_items(value: AlignItems) -> Rule {
  Rule::declaration("alignItems", value)
}

pub fn align_self(value: AlignSelf) -> Rule {
  Rule::declaration("alignSelf", value)
}

pub fn align_content(value: AlignContent) -> Rule {
  Rule::declaration("alignContent", value)
}

pub fn justify_content(value: JustifyContent) -> Rule {
  Rule::declaration("justifyContent", value)
}

pub fn order(value: i32) -> Rule {
  Rule::declaration("order", value)
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use serde_json::json;

  use super::*;
  use crate::flatten;
  use crate::values::{auto, pct};

  #[test]
  fn test_flex_container() {
    let style = flatten(&[
      flex_direction(FlexDirection::Column),
      flex_wrap(FlexWrap::Wrap),
      align_items(AlignItems::Center),
      justify_content(JustifyContent::SpaceBetween),
      align_content(AlignContent::Stretch),
    ]);
    assert_eq!(
      style.to_json(),
      json!({
        "flexDirection": "column",
        "flexWrap": "wrap",
        "alignItems": "center",
        "justifyContent": "space-between",
        "alignContent": "stretch"
      })
    );
  }

  #[test]
  fn test_flex_item() {
    let style = flatten(&[
      flex(1.0),
      flex_grow(2.0),
      flex_shrink(0.5),
      flex_basis(pct(25.0)),
      align_self(AlignSelf::FlexEnd),
      order(-1),
    ]);
    assert_eq!(
      style.to_json(),
      json!({
        "flex": "1",
        "flexGrow": "2",
        "flexShrink": "0.5",
        "flexBasis": "25%",
        "alignSelf": "flex-end",
        "order": "-1"
      })
    );
  }

  #[test]
  fn test_flex_shorthand() {
    let rule = flex3(1.0, 0.0, auto());
    assert_eq!(rule.as_declaration().unwrap().value, "1 0 auto");
  }
}
