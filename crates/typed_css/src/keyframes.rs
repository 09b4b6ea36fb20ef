use crate::hash::hash;
use crate::rule::{Frame, KeyframesRef, Rule, ANIMATION_NAME};
use crate::style::{flatten_frames, StyleObject, StyleValue};
use crate::utils::to_kebab_case;
use crate::{CssError, CssResult, StyleConfig};

/// A named set of keyframes.
///
/// The name is derived from the frame contents, so building the same frames twice yields the
/// same handle. It is stored on the handle and read back directly by [`animation_name`] and
/// the `animation` shorthand.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationHandle {
  name: String,
  keyframes: KeyframesRef,
  body: String,
}

impl AnimationHandle {
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn keyframes(&self) -> &KeyframesRef {
    &self.keyframes
  }

  /// The frames as an inline rule, flattened under `animationName`.
  pub fn rule(&self) -> Rule {
    Rule::Keyframes(self.keyframes.clone())
  }

  /// The `@keyframes` at-rule for consumers that inject the body themselves.
  pub fn to_css(&self) -> String {
    let mut out = String::with_capacity(11 + self.name.len() + self.body.len() + 2);
    out.push_str("@keyframes ");
    out.push_str(&self.name);
    out.push('{');
    out.push_str(&self.body);
    out.push('}');
    out
  }
}

/// Build an animation from `(percentage, rules)` frames with the default configuration.
///
/// Percentages must be within 0..=100; `from`/`to` are spelled `0` and `100`.
pub fn keyframes<I>(frames: I) -> CssResult<AnimationHandle>
where
  I: IntoIterator<Item = (u32, Vec<Rule>)>,
{
  keyframes_with(frames, &StyleConfig::default())
}

pub fn keyframes_with<I>(frames: I, config: &StyleConfig) -> CssResult<AnimationHandle>
where
  I: IntoIterator<Item = (u32, Vec<Rule>)>,
{
  let frames = frames
    .into_iter()
    .map(|(percentage, rules)| -> CssResult<Frame> {
      let percentage = u8::try_from(percentage)
        .ok()
        .filter(|p| *p <= 100)
        .ok_or(CssError::KeyframeOutOfRange(percentage))?;
      Ok(Frame { percentage, rules })
    })
    .collect::<CssResult<Vec<_>>>()?;

  let keyframes = KeyframesRef { frames };
  let body = keyframes_body(&keyframes);
  let name = animation_identifier(&body, config.animation_name_prefix.as_deref());
  tracing::debug!(name = %name, frames = keyframes.frames.len(), "Generated keyframes");

  Ok(AnimationHandle {
    name,
    keyframes,
    body,
  })
}

/// Only the frames of an animation: `{ "0%": {...}, "100%": {...} }`.
pub fn animation_body(handle: &AnimationHandle) -> StyleObject {
  flatten_frames(&handle.keyframes, &StyleConfig::default())
}

/// `animationName: <identifier>` for a handle.
pub fn animation_name(handle: &AnimationHandle) -> Rule {
  Rule::declaration(ANIMATION_NAME, handle.name())
}

fn animation_identifier(body: &str, prefix: Option<&str>) -> String {
  let digest = hash(body);
  match prefix {
    Some(prefix) => format!("{prefix}{digest}"),
    // Identifiers cannot start with a digit.
    None if digest.as_bytes().first().is_some_and(|b| b.is_ascii_digit()) => {
      format!("k{digest}")
    }
    None => digest,
  }
}

// Canonical frame text: `0%{opacity:0}100%{opacity:1}`, from the flattened frames so that
// overwritten declarations do not leak into the name.
fn keyframes_body(keyframes: &KeyframesRef) -> String {
  let mut out = String::new();
  for (label, value) in flatten_frames(keyframes, &StyleConfig::default()).iter() {
    write_block(&mut out, label, value);
  }
  out
}

fn write_block(out: &mut String, key: &str, value: &StyleValue) {
  match value {
    StyleValue::String(v) => {
      out.push_str(&to_kebab_case(key));
      out.push(':');
      out.push_str(v);
      out.push(';');
    }
    StyleValue::Object(object) => {
      out.push_str(key);
      out.push('{');
      for (k, v) in object.iter() {
        write_block(out, k, v);
      }
      if out.ends_with(';') {
        out.pop();
      }
      out.push('}');
    }
  }
}
