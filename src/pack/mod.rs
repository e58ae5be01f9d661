/*!
Lays the word graph out as one printable string.

Nodes are numbered by a pre-order walk (root first, children in label
order, shared nodes numbered on first sight) and emitted in that order,
separated by [`NODE_SEP`](crate::alphabet::NODE_SEP). A node's body is
its own end flag, its tips, then its edges; every edge closes with the
signed distance to its child's number, written as a self-delimiting
reference.
*/

use log::debug;

use crate::alphabet::{codec, END_MARK, NODE_SEP, REF_MARK};
use crate::trie::node::NodeRef;
use crate::trie::Trie;

impl Trie {
  /// Minimises the graph and serializes it. Consumes the builder: the
  /// packed string is the only artifact that survives.
  pub fn pack(mut self) -> String {
    self.optimize();

    let epoch = self.dawg.next_epoch();
    let mut nodes = vec![];
    number(&self.root, epoch, &mut nodes);

    let mut packed = String::new();
    for (i, node) in nodes.iter().enumerate() {
      if i > 0 {
        packed.push(NODE_SEP);
      }
      unparse_node(node, &mut packed);
    }
    debug!("packed {} nodes into {} bytes", nodes.len(), packed.len());
    packed
  }
}

/// Pre-order walk; every node is numbered and listed on first sight.
fn number(node: &NodeRef, epoch: u64, nodes: &mut Vec<NodeRef>) {
  node.mark(epoch);
  node.set_order(nodes.len() as u32);
  nodes.push(node.clone());
  for (_, edge) in node.edges_cloned() {
    if edge.to.seen() != epoch {
      number(&edge.to, epoch, nodes);
    }
  }
}

/// One node's entries: its own end flag, tips, then labelled edges.
fn unparse_node(node: &NodeRef, out: &mut String) {
  if node.end() {
    out.push(END_MARK);
  }
  for c in node.tips() {
    out.push(c);
    out.push(END_MARK);
  }
  for (_, edge) in node.edges_cloned() {
    let delta = i64::from(edge.to.order()) - i64::from(node.order());
    out.push_str(&edge.label);
    out.push(REF_MARK);
    out.push_str(&codec::encode_delta(delta));
  }
}

#[cfg(test)]
mod tests {
  use crate::Trie;

  fn packed(words: &[&str]) -> String {
    let mut trie = Trie::empty();
    trie.insert_all(words).unwrap();
    trie.pack()
  }

  #[test]
  fn fork_after_a_shared_stem() {
    // "cat"/"car"/"cart" fork after "ca": a tip "t" and a terminal
    // child "r" that carries its own tip "t"
    assert_eq!(packed(&["cat", "car", "cart"]), "ca:2;t!r:2;!t!");
  }

  #[test]
  fn nested_prefix_words_chain() {
    assert_eq!(packed(&["a", "ab", "abc"]), "a:2;!b:2;!c!");
  }

  #[test]
  fn chain_collapse_fuses_shared_stems() {
    // "is" survives as a fused label under "national"
    assert_eq!(
      packed(&["nation", "national", "nationalism", "nationalist"]),
      "nation:2;!al:2;!is:2;m!t!"
    );
  }

  #[test]
  fn identical_subtrees_are_emitted_once() {
    // both of the root's edges land on the same node
    assert_eq!(packed(&["ab", "ac", "bb", "bc"]), "a:2b:2;b!c!");
  }

  #[test]
  fn the_empty_word_is_a_bare_flag() {
    assert_eq!(packed(&[""]), "!");
  }

  #[test]
  fn an_empty_dictionary_packs_to_nothing() {
    assert_eq!(packed(&[]), "");
  }

  #[test]
  fn repeats_change_nothing() {
    assert_eq!(packed(&["foo", "foo", "foo"]), packed(&["foo"]));
  }

  #[test]
  fn insertion_order_changes_nothing() {
    let sorted = packed(&["nation", "national", "nationalism", "nationalist"]);
    let shuffled = packed(&["nationalist", "nation", "nationalism", "national"]);
    assert_eq!(sorted, shuffled);

    let sorted = packed(&["ab", "ac", "bb", "bc"]);
    let shuffled = packed(&["bc", "ab", "bb", "ac"]);
    assert_eq!(sorted, shuffled);
  }

  #[test]
  fn backward_references_reach_early_nodes() {
    // the "12" suffix under "b" was already numbered inside the "a"
    // branch, so the later parent points backwards (odd code "1")
    assert_eq!(packed(&["a12", "b12", "bq"]), "a1:2b:4;2!;q!1:1");
  }
}
