/*!
The mutable dictionary builder.

# Shape

Words descend from the root one edge at a time. While a branch is still
reachable by future insertions it stays mutable; as soon as the next
word diverges from the previous one, the part of the previous word's
path the new word can no longer touch is frozen and handed to the
canonicalizer, which merges it with any structurally identical branch
seen before.

Sorted input therefore freezes almost everything on the fly; unsorted
input is still correct, since whatever stays unfrozen is canonicalized
in one final pass when the dictionary is packed, and an insertion that
runs into an already-frozen node continues in a thawed copy of it.
*/

pub(crate) mod node;

use std::fmt::Display;

use crate::{alphabet, dawg::Dawg, error::Error, prefix::common_prefix_len};
use node::{Edge, NodeRef};

/// Accumulates words into a trie, merging repeated suffixes into shared
/// nodes as branches freeze.
pub struct Trie {
  pub(crate) root: NodeRef,
  pub(crate) dawg: Dawg,
  last: Option<String>,
}

/*
@note a trie is a collection:
> empty, insert, insert_all, has, len, is_empty
*/
impl Trie {
  pub fn empty() -> Trie {
    Trie {
      root: NodeRef::new(),
      dawg: Dawg::new(),
      last: None,
    }
  }

  /// Adds `word` to the dictionary; repeats are dropped silently.
  ///
  /// Any character outside [`alphabet::ALPHABET`] is rejected before
  /// the trie changes.
  pub fn insert(&mut self, word: &str) -> Result<(), Error> {
    if let Some(found) = word.chars().find(|&c| !alphabet::contains(c)) {
      return Err(Error::InvalidInput {
        word: word.into(),
        found,
      });
    }

    self.freeze_passed(word);
    if word.is_empty() {
      self.root.set_end(true);
    } else {
      descend(&self.root, word);
    }
    self.last = Some(word.to_owned());
    Ok(())
  }

  pub fn insert_all<I>(&mut self, words: I) -> Result<(), Error>
  where
    I: IntoIterator,
    I::Item: AsRef<str>,
  {
    for word in words {
      self.insert(word.as_ref())?;
    }
    Ok(())
  }

  /// Whether `word` has been inserted, answered from the mutable trie.
  pub fn has(&self, word: &str) -> bool {
    has_suffix(&self.root, word)
  }

  /// How many distinct words the trie holds.
  pub fn len(&self) -> usize {
    count_words(&self.root)
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Freezes the branch of the previously inserted word that `word`
  /// can no longer reach and hands it to the canonicalizer.
  fn freeze_passed(&mut self, word: &str) {
    let Some(last) = self.last.take() else { return };
    let shared = common_prefix_len(word, &last);

    let mut node = self.root.clone();
    let mut consumed = 0;
    while consumed < last.len() {
      let rest = &last[consumed..];
      let Some(first) = rest.chars().next() else { return };
      let Some(edge) = node.edge(first) else { return };
      if consumed + edge.label.len() > shared {
        // the whole child subtree is off the new word's path
        let frozen = self.dawg.canonicalize(&edge.to);
        node.set_edge_target(first, frozen);
        return;
      }
      consumed += edge.label.len();
      node = edge.to;
    }
  }
}

impl Default for Trie {
  fn default() -> Self {
    Self::empty()
  }
}

/// Walks `rest` into `node`, growing the trie as needed. `rest` is
/// nonempty and `node` is unfrozen.
fn descend(node: &NodeRef, rest: &str) {
  let first = rest.chars().next().expect("descend needs a nonempty suffix");

  if let Some(edge) = node.edge(first) {
    let split = common_prefix_len(&edge.label, rest);
    if split == edge.label.len() {
      // label fully matched: the word continues in the child
      let child = thaw_edge(node, first, &edge);
      let tail = &rest[split..];
      if tail.is_empty() {
        child.set_end(true)
      } else {
        descend(&child, tail)
      }
    } else {
      // strict shared prefix: break the edge at the divergence
      let mid = NodeRef::new();
      mid.insert_edge(Edge {
        label: edge.label[split..].to_owned(),
        to: edge.to.clone(),
      });
      let tail = &rest[split..];
      if tail.is_empty() {
        mid.set_end(true)
      } else {
        graft(&mid, tail)
      }
      node.insert_edge(Edge {
        label: edge.label[..split].to_owned(),
        to: mid,
      });
    }
  } else if rest.len() == 1 {
    node.add_tip(first);
  } else if node.has_tip(first) {
    // a longer word runs through the tip: promote it to a real child
    node.take_tip(first);
    let mid = NodeRef::new();
    mid.set_end(true);
    graft(&mid, &rest[1..]);
    node.insert_edge(Edge {
      label: first.to_string(),
      to: mid,
    });
  } else {
    graft(node, rest);
  }
}

/// Adds a fresh suffix below `node`; nothing there conflicts with it.
fn graft(node: &NodeRef, rest: &str) {
  match rest.chars().next() {
    None => node.set_end(true),
    Some(first) if rest.len() == 1 => node.add_tip(first),
    Some(first) => {
      let child = NodeRef::new();
      graft(&child, &rest[1..]);
      node.insert_edge(Edge {
        label: first.to_string(),
        to: child,
      });
    }
  }
}

/// The child on `edge`, replaced by a mutable copy first if the edge
/// points at a frozen node.
fn thaw_edge(node: &NodeRef, first: char, edge: &Edge) -> NodeRef {
  if edge.to.id().is_none() {
    return edge.to.clone();
  }
  let copy = edge.to.thawed();
  node.set_edge_target(first, copy.clone());
  copy
}

fn has_suffix(node: &NodeRef, rest: &str) -> bool {
  let Some(first) = rest.chars().next() else {
    return node.end();
  };
  if rest.len() == 1 && node.has_tip(first) {
    return true;
  }
  match node.edge(first) {
    Some(edge) if rest.starts_with(edge.label.as_str()) => {
      has_suffix(&edge.to, &rest[edge.label.len()..])
    }
    _ => false,
  }
}

fn count_words(node: &NodeRef) -> usize {
  let mut count = usize::from(node.end()) + node.tip_count();
  for (_, edge) in node.edges_cloned() {
    count += count_words(&edge.to);
  }
  count
}

/*
@note a trie should have some debugging tools:
> Display
*/
impl Trie {
  fn branches(node: &NodeRef) -> String {
    let mut child_strs: Vec<String> = vec![];

    for c in node.tips() {
      child_strs.push(format!("├─╸{c}\n"));
    }
    for (_, edge) in node.edges_cloned() {
      let marker = if edge.to.end() { '╸' } else { '╴' };
      if edge.to.is_leaf() {
        child_strs.push(format!("├─{marker}{}\n", edge.label));
      } else {
        let s = format!("├┬{marker}{}\n{}", edge.label, Self::branches(&edge.to));
        child_strs.push(s.replace('\n', "\n│") + "\n");
      }
    }

    // remove prefix characters from the last branch
    if let Some(last) = child_strs.last_mut() {
      *last = last.replacen('├', "└", 1);
      *last = last.replace("\n│", "\n ");
    }

    String::from_iter(child_strs).trim_end().to_owned()
  }
}

impl Display for Trie {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(
      f,
      "Trie with {} words:\n{}",
      self.len(),
      Self::branches(&self.root)
    )
  }
}
