/*!
A thin key=value layer over the word dictionary.

A pair is stored as the single word `key SEP value`, so the whole
machinery below it — freezing, canonicalization, packing — is untouched.
Looking a key up walks to `key SEP` and takes the completion's tail.
Keys may not contain the separator; values may (everything after the
first separator is the value).
*/

use crate::{alphabet, error::Error, trie::Trie, unpack::PackedTrie};

/// The separator splitting a key from its value inside one word.
pub const DEFAULT_SEP: char = '_';

/// Builds a packed key=value dictionary.
pub struct Pairs {
  trie: Trie,
  sep: char,
}

impl Pairs {
  pub fn empty() -> Pairs {
    Pairs::default()
  }

  /// A builder splitting keys from values on `sep`, which must belong
  /// to the packed alphabet.
  pub fn with_separator(sep: char) -> Result<Pairs, Error> {
    if !alphabet::contains(sep) {
      return Err(Error::InvalidInput {
        word: sep.to_string(),
        found: sep,
      });
    }
    Ok(Pairs {
      trie: Trie::empty(),
      sep,
    })
  }

  /// Stores `value` under `key`. The key may not contain the
  /// separator.
  pub fn insert(&mut self, key: &str, value: &str) -> Result<(), Error> {
    if key.contains(self.sep) {
      return Err(Error::InvalidInput {
        word: key.into(),
        found: self.sep,
      });
    }
    self.trie.insert(&format!("{key}{}{value}", self.sep))
  }

  pub fn pack(self) -> String {
    self.trie.pack()
  }
}

impl Default for Pairs {
  fn default() -> Self {
    Pairs {
      trie: Trie::empty(),
      sep: DEFAULT_SEP,
    }
  }
}

/// Reads values back out of a packed key=value dictionary.
pub struct PackedPairs {
  trie: PackedTrie,
  sep: char,
}

impl PackedPairs {
  pub fn new(text: impl Into<String>) -> Result<PackedPairs, Error> {
    Ok(PackedPairs {
      trie: PackedTrie::new(text)?,
      sep: DEFAULT_SEP,
    })
  }

  /// A reader splitting on `sep` instead of [`DEFAULT_SEP`]; it must
  /// match the separator the dictionary was built with.
  pub fn with_separator(text: impl Into<String>, sep: char) -> Result<PackedPairs, Error> {
    if !alphabet::contains(sep) {
      return Err(Error::InvalidInput {
        word: sep.to_string(),
        found: sep,
      });
    }
    Ok(PackedPairs {
      trie: PackedTrie::new(text)?,
      sep,
    })
  }

  /// The value stored under `key`.
  ///
  /// A key stored several times keeps all its values; the
  /// lexicographically smallest one wins. An absent key is
  /// [`Error::NotFound`].
  pub fn lookup(&self, key: &str) -> Result<String, Error> {
    let mut probe = String::with_capacity(key.len() + 1);
    probe.push_str(key);
    probe.push(self.sep);

    let mut hits = self.trie.completions(&probe)?;
    hits.sort();
    match hits.into_iter().next() {
      Some(word) => Ok(word[probe.len()..].to_owned()),
      None => Err(Error::NotFound(key.into())),
    }
  }

  /// Every `(key, value)` pair in the dictionary.
  pub fn entries(&self) -> Result<Vec<(String, String)>, Error> {
    let words = self.trie.words()?;
    Ok(
      words
        .iter()
        .filter_map(|word| word.split_once(self.sep))
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect(),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn packed_animals() -> PackedPairs {
    let mut pairs = Pairs::empty();
    pairs.insert("cat", "feline").unwrap();
    pairs.insert("dog", "canine").unwrap();
    pairs.insert("cow", "bovine").unwrap();
    PackedPairs::new(pairs.pack()).unwrap()
  }

  #[test]
  fn stored_values_come_back() {
    let dict = packed_animals();
    assert_eq!(dict.lookup("cat"), Ok("feline".to_owned()));
    assert_eq!(dict.lookup("dog"), Ok("canine".to_owned()));
    assert_eq!(dict.lookup("cow"), Ok("bovine".to_owned()));
  }

  #[test]
  fn absent_keys_are_not_found() {
    let dict = packed_animals();
    assert_eq!(dict.lookup("cab"), Err(Error::NotFound("cab".into())));
    // a key is not a value, and a prefix of a key is not a key
    assert_eq!(dict.lookup("feline"), Err(Error::NotFound("feline".into())));
    assert_eq!(dict.lookup("ca"), Err(Error::NotFound("ca".into())));
  }

  #[test]
  fn keys_may_not_carry_the_separator() {
    let mut pairs = Pairs::empty();
    assert!(pairs.insert("bad_key", "v").is_err());
    assert!(pairs.insert("goodkey", "with_sep_value").is_ok());
  }

  #[test]
  fn separators_come_from_the_alphabet() {
    assert!(Pairs::with_separator('|').is_err());
    assert!(Pairs::with_separator('-').is_ok());
  }

  #[test]
  fn a_custom_separator_round_trips() {
    let mut pairs = Pairs::with_separator('-').unwrap();
    pairs.insert("under_score", "kept").unwrap();
    let dict = PackedPairs::with_separator(pairs.pack(), '-').unwrap();
    assert_eq!(dict.lookup("under_score"), Ok("kept".to_owned()));
  }

  #[test]
  fn entries_list_every_pair() {
    let dict = packed_animals();
    let mut entries = dict.entries().unwrap();
    entries.sort();
    assert_eq!(
      entries,
      [
        ("cat".to_owned(), "feline".to_owned()),
        ("cow".to_owned(), "bovine".to_owned()),
        ("dog".to_owned(), "canine".to_owned()),
      ]
    );
  }

  #[test]
  fn twice_stored_keys_yield_the_smallest_value() {
    let mut pairs = Pairs::empty();
    pairs.insert("cat", "feline").unwrap();
    pairs.insert("cat", "chat").unwrap();
    let dict = PackedPairs::new(pairs.pack()).unwrap();
    assert_eq!(dict.lookup("cat"), Ok("chat".to_owned()));
  }
}
