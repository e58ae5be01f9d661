use std::{error, fmt};

/// Failures surfaced while building or reading a packed dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// A word handed to the builder holds a character the packed alphabet
  /// cannot carry.
  InvalidInput { word: String, found: char },
  /// The packed text is unreadable at the given byte offset.
  Malformed { offset: usize },
  /// A child reference points outside the node table, or back into the
  /// path that led to it.
  BadReference { node: usize, target: i64 },
  /// No value is stored under the given key.
  NotFound(String),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::InvalidInput { word, found } => {
        write!(f, "`{found}` in {word:?} is outside the packed alphabet")
      }
      Error::Malformed { offset } => {
        write!(f, "packed text is unreadable at byte {offset}")
      }
      Error::BadReference { node, target } => {
        write!(f, "node {node} references nonexistent node {target}")
      }
      Error::NotFound(key) => write!(f, "no value stored under {key:?}"),
    }
  }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages_name_the_culprit() {
    let err = Error::InvalidInput {
      word: "a;b".into(),
      found: ';',
    };
    assert!(err.to_string().contains("`;`"));

    let err = Error::NotFound("cat".into());
    assert!(err.to_string().contains("\"cat\""));
  }
}
