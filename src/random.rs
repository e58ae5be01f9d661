/*!
Random dictionary words, for sampled tests.

Real word lists are short, lowercase and share prefixes heavily; the
sampler here leans the same way, drawing characters from a narrow
leading span of the alphabet and lengths from a geometric-ish
distribution.
*/

use rand::distributions::{Distribution, Standard};

/// A plausible dictionary word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample(pub String);

impl Sample {
  /// A word of up to `max_len` characters drawn from the first `span`
  /// lowercase letters.
  pub fn random<R: rand::Rng + ?Sized>(rng: &mut R, span: usize, max_len: usize) -> Sample {
    const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
    let span = span.clamp(1, LETTERS.len());
    let geo_len = rng.gen::<f64>().log(0.7).floor() as usize;
    let len = geo_len.saturating_add(1).min(max_len);
    Sample(
      (0..len)
        .map(|_| LETTERS[rng.gen_range(0..span)] as char)
        .collect(),
    )
  }
}

impl Distribution<Sample> for Standard {
  fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Sample {
    Sample::random(rng, 6, 12)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::thread_rng;

  #[test]
  fn samples_stay_in_bounds() {
    let mut rng = thread_rng();
    for _ in 0..1000 {
      let Sample(word) = Sample::random(&mut rng, 4, 8);
      assert!(!word.is_empty() && word.len() <= 8);
      assert!(word.chars().all(|c| ('a'..='d').contains(&c)));
    }
  }
}
