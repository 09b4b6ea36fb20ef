use std::fmt;

use crate::keywords::{
  Cursor, FontStyle, ListStyleType, PointerEvents, TextAlign, TextDecoration, TextTransform,
  UserSelect, WhiteSpace, WordBreak,
};
use crate::utils::num_to_string;
use crate::values::{Color, Length};
use crate::Rule;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
  Normal,
  Bold,
  Bolder,
  Lighter,
  Num(u16),
}

impl fmt::Display for FontWeight {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FontWeight::Normal => f.write_str("normal"),
      FontWeight::Bold => f.write_str("bold"),
      FontWeight::Bolder => f.write_str("bolder"),
      FontWeight::Lighter => f.write_str("lighter"),
      FontWeight::Num(n) => write!(f, "{n}"),
    }
  }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LineHeight {
  Normal,
  /// Unitless multiplier of the font size.
  Abs(f64),
  Length(Length),
}

impl fmt::Display for LineHeight {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      LineHeight::Normal => f.write_str("normal"),
      LineHeight::Abs(n) => f.write_str(&num_to_string(*n)),
      LineHeight::Length(length) => write!(f, "{length}"),
    }
  }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LetterSpacing {
  Normal,
  Length(Length),
}

impl fmt::Display for LetterSpacing {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      LetterSpacing::Normal => f.write_str("normal"),
      LetterSpacing::Length(length) => write!(f, "{length}"),
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextOverflow {
  Clip,
  Ellipsis,
  /// Rendered verbatim, quoting is up to the caller.
  String(String),
}

impl fmt::Display for TextOverflow {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TextOverflow::Clip => f.write_str("clip"),
      TextOverflow::Ellipsis => f.write_str("ellipsis"),
      TextOverflow::String(s) => f.write_str(s),
    }
  }
}

pub fn color(value: Color) -> Rule {
  Rule::declaration("color", value)
}

/// Font stack, passed through as written.
pub fn font_family(value: impl AsRef<str>) -> Rule {
  Rule::declaration("fontFamily", value.as_ref())
}

pub fn font_size(value: Length) -> Rule {
  Rule::declaration("fontSize", value)
}

pub fn font_weight(value: FontWeight) -> Rule {
  Rule::declaration("fontWeight", value)
}

pub fn font_style(value: FontStyle) -> Rule {
  Rule::declaration("fontStyle", value)
}

pub fn line_height(value: LineHeight) -> Rule {
  Rule::declaration("lineHeight", value)
}

pub fn letter_spacing(value: LetterSpacing) -> Rule {
  Rule::declaration("letterSpacing", value)
}

pub fn text_align(value: TextAlign) -> Rule {
  Rule::declaration("textAlign", value)
}

pub fn text_decoration(value: TextDecoration) -> Rule {
  Rule::declaration("textDecoration", value)
}

pub fn text_transform(value: TextTransform) -> Rule {
  Rule::declaration("textTransform", value)
}

pub fn text_overflow(value: TextOverflow) -> Rule {
  Rule::declaration("textOverflow", value)
}

pub fn white_space(value: WhiteSpace) -> Rule {
  Rule::declaration("whiteSpace", value)
}

pub fn word_break(value: WordBreak) -> Rule {
  Rule::declaration("wordBreak", value)
}

/// `content` is passed through unquoted; an empty string is a valid value.
pub fn content(value: impl AsRef<str>) -> Rule {
  Rule::declaration("content", value.as_ref())
}

pub fn cursor(value: Cursor) -> Rule {
  Rule::declaration("cursor", value)
}

pub fn user_select(value: UserSelect) -> Rule {
  Rule::declaration("user-select", value)
}

pub fn pointer_events(value: PointerEvents) -> Rule {
  Rule::declaration("pointer-events", value)
}

pub fn list_style_type(value: ListStyleType) -> Rule {
  Rule::declaration("listStyleType", value)
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use serde_json::json;

  use super::*;
  use crate::flatten;
  use crate::values::{em, hsl, px};

  #[test]
  fn test_font_properties() {
    let style = flatten(&[
      color(hsl(210.0, 40.0, 20.0)),
      font_family("\"Helvetica Neue\", Arial, sans-serif"),
      font_size(em(1.25)),
      font_weight(FontWeight::Num(600)),
      font_style(FontStyle::Italic),
      line_height(LineHeight::Abs(1.5)),
      letter_spacing(LetterSpacing::Length(px(1))),
    ]);
    assert_eq!(
      style.to_json(),
      json!({
        "color": "hsl(210, 40%, 20%)",
        "fontFamily": "\"Helvetica Neue\", Arial, sans-serif",
        "fontSize": "1.25em",
        "fontWeight": "600",
        "fontStyle": "italic",
        "lineHeight": "1.5",
        "letterSpacing": "1px"
      })
    );
  }

  #[test]
  fn test_text_properties() {
    let style = flatten(&[
      text_align(TextAlign::Center),
      text_decoration(TextDecoration::LineThrough),
      text_transform(TextTransform::Uppercase),
      text_overflow(TextOverflow::Ellipsis),
      white_space(WhiteSpace::Nowrap),
      word_break(WordBreak::BreakAll),
      content(""),
    ]);
    assert_eq!(
      style.to_json(),
      json!({
        "textAlign": "center",
        "textDecoration": "line-through",
        "textTransform": "uppercase",
        "textOverflow": "ellipsis",
        "whiteSpace": "nowrap",
        "wordBreak": "break-all",
        "content": ""
      })
    );
  }

  #[test]
  fn test_interaction_properties_keep_kebab_keys() {
    let style = flatten(&[
      cursor(Cursor::NotAllowed),
      user_select(UserSelect::None),
      pointer_events(PointerEvents::None),
    ]);
    assert_eq!(
      style.keys().collect::<Vec<_>>(),
      vec!["cursor", "user-select", "pointer-events"]
    );
    assert_eq!(style.get_str("cursor"), Some("not-allowed"));
  }
}
