use std::fmt::Display;

/// Property name that keyframe references are stored under.
pub const ANIMATION_NAME: &str = "animationName";

/// A node of the rule tree.
///
/// Rule lists are built bottom-up by the property and selector constructors and are
/// immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub enum Rule {
  Declaration(Declaration),
  Selector(Selector),
  Keyframes(KeyframesRef),
}

/// A property/value pair whose value is already encoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
  pub property: String,
  pub value: String,
}

/// Nested rules under a selector or at-rule prefix.
#[derive(Clone, Debug, PartialEq)]
pub struct Selector {
  pub text: String,
  pub rules: Vec<Rule>,
}

/// Frames of an animation body attached to [`ANIMATION_NAME`].
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframesRef {
  pub frames: Vec<Frame>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
  /// 0 through 100.
  pub percentage: u8,
  pub rules: Vec<Rule>,
}

impl Frame {
  /// Key of this frame in a style object, e.g. `60%`.
  pub fn label(&self) -> String {
    format!("{}%", self.percentage)
  }
}

impl Rule {
  pub fn declaration(property: impl Into<String>, value: impl Display) -> Self {
    Rule::Declaration(Declaration {
      property: property.into(),
      value: value.to_string(),
    })
  }

  pub fn selector(text: impl Into<String>, rules: Vec<Rule>) -> Self {
    Rule::Selector(Selector {
      text: text.into(),
      rules,
    })
  }

  pub fn as_declaration(&self) -> Option<&Declaration> {
    match self {
      Rule::Declaration(declaration) => Some(declaration),
      Rule::Selector(_) | Rule::Keyframes(_) => None,
    }
  }
}

impl From<Declaration> for Rule {
  fn from(declaration: Declaration) -> Self {
    Rule::Declaration(declaration)
  }
}

impl From<Selector> for Rule {
  fn from(selector: Selector) -> Self {
    Rule::Selector(selector)
  }
}

impl From<KeyframesRef> for Rule {
  fn from(keyframes: KeyframesRef) -> Self {
    Rule::Keyframes(keyframes)
  }
}
