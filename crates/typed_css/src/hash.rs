use std::hash::Hasher;

/// Hash `input` with xxh3 and return it base36 encoded.
pub fn hash(input: &str) -> String {
  let mut hasher = xxhash_rust::xxh3::Xxh3Builder::new().build();
  hasher.write(input.as_bytes());
  to_base36(hasher.finish())
}

fn to_base36(mut value: u64) -> String {
  const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

  if value == 0 {
    return "0".to_string();
  }

  let mut out = Vec::with_capacity(13);
  while value > 0 {
    out.push(DIGITS[(value % 36) as usize] as char);
    value /= 36;
  }
  out.iter().rev().collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn base36_encodes_known_values() {
    assert_eq!(to_base36(0), "0");
    assert_eq!(to_base36(35), "z");
    assert_eq!(to_base36(36), "10");
    assert_eq!(to_base36(u64::MAX), "3w5e11264sgsf");
  }

  #[test]
  fn hash_is_stable_and_content_sensitive() {
    assert_eq!(hash("0%{opacity:0}"), hash("0%{opacity:0}"));
    assert_ne!(hash("0%{opacity:0}"), hash("0%{opacity:1}"));
    assert!(hash("").chars().all(|c| c.is_ascii_alphanumeric()));
  }
}
