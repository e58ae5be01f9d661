/// Length in bytes of the longest prefix shared by `a` and `b`.
///
/// Compares char by char, so the returned length always lies on a char
/// boundary of both strings.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
  a.chars()
    .zip(b.chars())
    .take_while(|(x, y)| x == y)
    .map(|(x, _)| x.len_utf8())
    .sum()
}

/// The longest prefix shared by `a` and `b`.
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
  &a[..common_prefix_len(a, b)]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn disjoint() {
    assert_eq!(common_prefix("cat", "dog"), "");
  }

  #[test]
  fn shared_stem() {
    assert_eq!(common_prefix("national", "nation"), "nation");
    assert_eq!(common_prefix("nation", "national"), "nation");
  }

  #[test]
  fn identical() {
    assert_eq!(common_prefix("cart", "cart"), "cart");
  }

  #[test]
  fn either_empty() {
    assert_eq!(common_prefix("", "anything"), "");
    assert_eq!(common_prefix("anything", ""), "");
  }
}
