/*!
Packs a word list into one compact printable string and answers
membership queries straight off the packed text.

# Pipeline

Words stream into a [`Trie`]. As consecutive insertions diverge, the
branches left behind freeze and structurally identical ones merge into
shared nodes; packing then counts incoming edges, fuses single-successor
chains into long labels, numbers the surviving nodes in pre-order and
writes each one out over a 64-character printable alphabet. The result
embeds anywhere text does.

A [`PackedTrie`] walks that string directly — no decoding into memory —
to answer `is_word`, list completions, or enumerate the dictionary.
[`Pairs`]/[`PackedPairs`] layer key=value storage on top by packing
`key separator value` words.

# Example

```
use packtrie::{PackedTrie, Trie};

let mut trie = Trie::empty();
trie.insert_all(["cat", "car", "cart"]).unwrap();
let packed = trie.pack();

let dict = PackedTrie::new(packed).unwrap();
assert!(dict.is_word("cart").unwrap());
assert!(!dict.is_word("ca").unwrap());
```
*/

pub mod alphabet;
mod dawg;
mod error;
mod pack;
pub mod pairs;
mod prefix;
pub mod random;
mod trie;
mod unpack;

pub use error::Error;
pub use pairs::{PackedPairs, Pairs};
pub use prefix::{common_prefix, common_prefix_len};
pub use trie::Trie;
pub use unpack::PackedTrie;
