/*!
Self-delimiting numbers over the shared alphabet.

A reference number is written big-endian with 5-bit digits: characters
whose [`value`](super::value) is [`SPLIT`] or above continue the number
(carrying `value - SPLIT`), a character below [`SPLIT`] closes it. No
code is a prefix of another, so a number can sit directly against the
label of the next entry.

Reference distances are signed (a shared child can be numbered before a
later parent that points at it), so they are folded into the
non-negative space first: forward distances take the even codes,
backward ones the odd codes.
*/

use super::{digit, value};

/// Digits with a value of `SPLIT` or above continue a number; lower
/// values close it.
pub(crate) const SPLIT: u8 = 32;

const BASE: u64 = SPLIT as u64;

/// Writes `n` as a self-delimiting string of alphabet digits.
pub(crate) fn encode(mut n: u64) -> String {
  let mut digits = vec![digit((n % BASE) as u8)];
  n /= BASE;
  while n > 0 {
    digits.push(digit((n % BASE) as u8 + SPLIT));
    n /= BASE;
  }
  digits.into_iter().rev().collect()
}

/// Reads one number off the front of `input`, returning it along with
/// the number of bytes consumed. `None` means the input ran out, held a
/// non-digit, or overflowed.
pub(crate) fn decode(input: &str) -> Option<(u64, usize)> {
  let mut n: u64 = 0;
  for (i, c) in input.char_indices() {
    let v = u64::from(value(c)?);
    if v >= BASE {
      n = n.checked_mul(BASE)?.checked_add(v - BASE)?;
    } else {
      n = n.checked_mul(BASE)?.checked_add(v)?;
      return Some((n, i + c.len_utf8()));
    }
  }
  None
}

/// Folds a signed distance onto the non-negative line.
pub(crate) fn fold(d: i64) -> u64 {
  if d >= 0 {
    d as u64 * 2
  } else {
    (-d as u64) * 2 - 1
  }
}

/// Undoes [`fold`].
pub(crate) fn unfold(n: u64) -> i64 {
  if n % 2 == 0 {
    (n / 2) as i64
  } else {
    -(((n + 1) / 2) as i64)
  }
}

/// A signed reference distance, encoded.
pub(crate) fn encode_delta(d: i64) -> String {
  encode(fold(d))
}
