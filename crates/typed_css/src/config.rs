use serde::{Deserialize, Serialize};

use crate::utils::{to_camel_case, to_kebab_case};
use crate::CssResult;

/// Spelling of property keys in flattened style objects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyCase {
  /// Keys exactly as the constructors emit them: camelCase, except for the handful of
  /// properties historically emitted in kebab-case (`float`, `clear`, `user-select`,
  /// `pointer-events`, `background-origin`).
  #[default]
  Legacy,
  Camel,
  Kebab,
}

impl KeyCase {
  pub fn apply(&self, property: &str) -> String {
    match self {
      KeyCase::Legacy => property.to_string(),
      KeyCase::Camel => to_camel_case(property),
      KeyCase::Kebab => to_kebab_case(property),
    }
  }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleConfig {
  ///
  /// Convention used for declaration keys when flattening.
  ///
  /// Defaults to `KeyCase::Legacy`
  ///
  pub key_case: KeyCase,
  ///
  /// Prefix for generated animation names. When unset, names that would start with a
  /// digit are prefixed with `k`.
  ///
  /// Defaults to `None`
  ///
  pub animation_name_prefix: Option<String>,
}

impl StyleConfig {
  pub fn from_json(source: &str) -> CssResult<Self> {
    let config: StyleConfig = serde_json::from_str(source)?;
    tracing::debug!(?config, "Loaded style config");
    Ok(config)
  }
}
