use thiserror::Error;

pub type CssResult<T> = std::result::Result<T, CssError>;

/// Failures raised while constructing typed CSS values from untyped input.
///
/// The typed constructors cannot fail; these are only produced by the string-facing
/// entry points (`FromStr` impls, [`crate::keyframes`], [`crate::StyleConfig::from_json`]).
#[derive(Debug, Error)]
pub enum CssError {
  #[error("Unknown named color: {0}")]
  UnknownNamedColor(String),

  #[error("Unknown {kind} keyword: {keyword}")]
  UnknownKeyword {
    kind: &'static str,
    keyword: String,
  },

  #[error("Keyframe percentage {0} is outside of 0..=100")]
  KeyframeOutOfRange(u32),

  #[error("Invalid style config: {0}")]
  Config(#[from] serde_json::Error),
}
