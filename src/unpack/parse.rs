use nom::{
  branch::alt,
  bytes::complete::take_while1,
  character::complete::char,
  combinator::map,
  sequence::preceded,
  IResult,
};

use crate::alphabet::{self, codec, END_MARK, REF_MARK};

/// One entry of a node body: a tip, or a labelled edge to a child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Entry<'a> {
  Tip(&'a str),
  Branch { label: &'a str, delta: i64 },
}

fn label(input: &str) -> IResult<&str, &str> {
  take_while1(alphabet::contains)(input)
}

/// A self-delimiting reference, unfolded back to a signed distance.
fn delta(input: &str) -> IResult<&str, i64> {
  match codec::decode(input) {
    Some((n, used)) => Ok((&input[used..], codec::unfold(n))),
    None => Err(nom::Err::Error(nom::error::Error::new(
      input,
      nom::error::ErrorKind::Digit,
    ))),
  }
}

/// A single entry: a label closed by either the end mark or a child
/// reference.
pub(crate) fn entry(input: &str) -> IResult<&str, Entry<'_>> {
  let (input, label) = label(input)?;
  let (input, to) = alt((
    map(char(END_MARK), |_| None),
    map(preceded(char(REF_MARK), delta), Some),
  ))(input)?;
  Ok((input, match to {
    None => Entry::Tip(label),
    Some(delta) => Entry::Branch { label, delta },
  }))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tips_close_with_the_end_mark() {
    assert_eq!(entry("t!"), Ok(("", Entry::Tip("t"))));
    assert_eq!(entry("t!r:2"), Ok(("r:2", Entry::Tip("t"))));
  }

  #[test]
  fn branches_carry_a_distance() {
    assert_eq!(
      entry("ca:2"),
      Ok(("", Entry::Branch { label: "ca", delta: 1 }))
    );
    // odd codes are backward distances
    assert_eq!(
      entry("1:1"),
      Ok(("", Entry::Branch { label: "1", delta: -1 }))
    );
  }

  #[test]
  fn references_end_where_the_next_label_begins() {
    let (rest, first) = entry("a:2b:4").unwrap();
    assert_eq!(first, Entry::Branch { label: "a", delta: 1 });
    assert_eq!(rest, "b:4");
  }

  #[test]
  fn truncated_references_fail() {
    assert!(entry("a:").is_err());
    // a dangling continuation digit is not a number
    assert!(entry("a:z").is_err());
  }

  #[test]
  fn bare_labels_fail() {
    // an entry must say what its label is: tip or edge
    assert!(entry("abc").is_err());
    assert!(entry("").is_err());
  }
}
