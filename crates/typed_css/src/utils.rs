/// Render a number the way CSS expects it: integral values without a decimal point,
/// everything else with the shortest representation that round-trips.
pub fn num_to_string(n: f64) -> String {
  if n.is_finite() && n.abs() < 1e15 && n.fract() == 0.0 {
    (n as i64).to_string()
  } else {
    n.to_string()
  }
}

/// `backgroundColor` -> `background-color`, `WebkitLineClamp` -> `-webkit-line-clamp`.
/// Custom properties are left alone.
pub fn to_kebab_case(s: &str) -> String {
  if s.starts_with("--") {
    return s.to_string();
  }
  let mut out = String::with_capacity(s.len() + 4);
  // `msTransform` is the one vendor prefix spelled lowercase in camelCase.
  if s
    .strip_prefix("ms")
    .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()))
  {
    out.push('-');
  }
  for ch in s.chars() {
    if ch.is_uppercase() {
      out.push('-');
      for lc in ch.to_lowercase() {
        out.push(lc);
      }
    } else {
      out.push(ch);
    }
  }
  out
}

/// `user-select` -> `userSelect`, `-webkit-line-clamp` -> `WebkitLineClamp`,
/// `-ms-transform` -> `msTransform`. Custom properties are left alone.
pub fn to_camel_case(input: &str) -> String {
  if input.starts_with("--") || !input.contains('-') {
    return input.to_string();
  }

  let (mut capitalize_next, input) = match input.strip_prefix('-') {
    Some(rest) => (!rest.starts_with("ms-"), rest),
    None => (false, input),
  };

  let mut result = String::with_capacity(input.len());
  for ch in input.chars() {
    match ch {
      '-' => capitalize_next = !result.is_empty(),
      _ => {
        if capitalize_next {
          for upper in ch.to_uppercase() {
            result.push(upper);
          }
          capitalize_next = false;
        } else {
          result.push(ch);
        }
      }
    }
  }
  result
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_num_to_string() {
    assert_eq!(num_to_string(1.0), "1");
    assert_eq!(num_to_string(-0.0), "0");
    assert_eq!(num_to_string(0.25), "0.25");
    assert_eq!(num_to_string(-1.5), "-1.5");
    assert_eq!(num_to_string(45.0), "45");
  }

  #[test]
  fn test_num_to_string_keeps_tiny_fractions() {
    assert_eq!(num_to_string(1e-17), "0.00000000000000001");
    assert_eq!(num_to_string(-1e-17), "-0.00000000000000001");
    assert_eq!(num_to_string(-0.0), "0");
    assert_eq!(num_to_string(1e15), "1000000000000000");
  }

  #[test]
  fn test_case_conversion() {
    assert_eq!(to_kebab_case("backgroundColor"), "background-color");
    assert_eq!(to_kebab_case("float"), "float");
    assert_eq!(to_kebab_case("--brandColor"), "--brandColor");
    assert_eq!(to_camel_case("user-select"), "userSelect");
    assert_eq!(to_camel_case("pointer-events"), "pointerEvents");
    assert_eq!(to_camel_case("animationName"), "animationName");
    assert_eq!(to_camel_case("--brand-color"), "--brand-color");
  }

  #[test]
  fn test_vendor_prefixes() {
    assert_eq!(to_kebab_case("WebkitLineClamp"), "-webkit-line-clamp");
    assert_eq!(to_kebab_case("MozAppearance"), "-moz-appearance");
    assert_eq!(to_kebab_case("msTransform"), "-ms-transform");
    assert_eq!(to_kebab_case("msx"), "msx");
    assert_eq!(to_camel_case("-webkit-line-clamp"), "WebkitLineClamp");
    assert_eq!(to_camel_case("-moz-appearance"), "MozAppearance");
    assert_eq!(to_camel_case("-ms-transform"), "msTransform");

    for key in ["WebkitLineClamp", "msTransform", "backgroundColor"] {
      assert_eq!(to_camel_case(&to_kebab_case(key)), key);
    }
  }
}
