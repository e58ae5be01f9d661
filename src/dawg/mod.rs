/*!
Merges frozen trie branches into a shared word graph and minimises it.

# Merging

Two nodes describe the same suffix language exactly when their
signatures match: the end flag plus every tip and every
`label → canonical child id` pair, in label order. The registry maps
signatures to previously frozen nodes, so freezing a branch replaces
each of its subtrees with the first structurally identical subtree ever
seen. The registry holds its nodes weakly; a branch abandoned by a
thawing insertion simply drops out once nothing points at it.

# Minimising

After the final freeze the optimizer counts incoming edges, then fuses
every edge whose child is a singleton, one node at a time from the
leaves up, so a run of single-successor nodes ends as one long label on
its first parent.
*/

use log::debug;
use weak_table::WeakValueHashMap;

use crate::trie::node::{Edge, NodeRef, WeakNodeRef};
use crate::trie::Trie;

/// Owner-scoped state for freezing nodes: the signature registry, the
/// id counter and the traversal epoch.
pub(crate) struct Dawg {
  registry: WeakValueHashMap<String, WeakNodeRef>,
  next_id: u32,
  epoch: u64,
}

impl Dawg {
  pub fn new() -> Self {
    Dawg {
      registry: WeakValueHashMap::new(),
      next_id: 0,
      epoch: 0,
    }
  }

  /// Returns a frozen node structurally equal to `node`, shared with
  /// any previously frozen twin. Pure: an already-frozen node comes
  /// back untouched.
  pub fn canonicalize(&mut self, node: &NodeRef) -> NodeRef {
    if node.id().is_some() {
      return node.clone();
    }

    for (first, edge) in node.edges_cloned() {
      let frozen = self.canonicalize(&edge.to);
      if !frozen.ptr_eq(&edge.to) {
        node.set_edge_target(first, frozen);
      }
    }

    let sig = node.signature();
    if let Some(twin) = self.registry.get(&sig) {
      return twin;
    }
    node.freeze(self.next_id);
    self.next_id += 1;
    self.registry.insert(sig, node.clone());
    node.clone()
  }

  /// A fresh stamp for one traversal; nothing needs resetting between
  /// passes.
  pub fn next_epoch(&mut self) -> u64 {
    self.epoch += 1;
    self.epoch
  }

  /// Counts how many edges arrive at each reachable node. The root
  /// counts its own arrival, so every reachable node ends at 1 or more.
  pub fn count_degree(&mut self, root: &NodeRef) {
    let epoch = self.next_epoch();
    arrive(root, epoch);
  }

  /// Hoists lone edges into their parents so single-successor runs
  /// become one long label.
  pub fn collapse_chains(&mut self, root: &NodeRef) {
    let epoch = self.next_epoch();
    fuse(root, epoch);
  }
}

impl Default for Dawg {
  fn default() -> Self {
    Self::new()
  }
}

fn arrive(node: &NodeRef, epoch: u64) {
  if node.seen() == epoch {
    node.bump_refs();
    return;
  }
  node.mark(epoch);
  node.set_refs(1);
  for (_, edge) in node.edges_cloned() {
    arrive(&edge.to, epoch);
  }
}

/// Post-order fusion. A child is fused away when its whole shape is one
/// edge AND either this parent is its only one, or its label is a
/// single character (re-emitting one character at several parents costs
/// no more than the edge it replaces).
fn fuse(node: &NodeRef, epoch: u64) {
  node.mark(epoch);
  for (_, edge) in node.edges_cloned() {
    if edge.to.seen() != epoch {
      fuse(&edge.to, epoch);
    }
    if let Some(inner) = edge.to.lone_edge() {
      if edge.to.refs() == 1 || inner.label.len() == 1 {
        node.insert_edge(Edge {
          label: format!("{}{}", edge.label, inner.label),
          to: inner.to,
        });
      }
    }
  }
  // surviving singletons keep a note of their single label
  if let Some(lone) = node.lone_edge() {
    node.set_chain(lone.label);
  }
}

impl Trie {
  /// Finishes any unfrozen branches and minimises the graph. Runs once,
  /// from `pack`; rerunning is harmless.
  pub(crate) fn optimize(&mut self) {
    self.root = self.dawg.canonicalize(&self.root);
    self.dawg.count_degree(&self.root);
    self.dawg.collapse_chains(&self.root);
    debug!("canonicalized into {} frozen nodes", self.dawg.next_id);
  }
}
