//! Hash-consed node storage: at most one physical node per equivalence
//! class (§3, "Canonical identity"). Storage is a plain growable array
//! rather than a concurrent arena — the engine's resource model (§5) is
//! explicitly single-threaded, so the upstream project's lock-free
//! building blocks (`dashmap`, `boxcar`) have no work to do here; a
//! `HashMap` with the `fxhash` hasher plays the same "reverse lookup for
//! dedup" role at a fraction of the complexity.
use fxhash::FxHashMap;
use log::trace;

use crate::node::{Node, NodeId};

#[derive(Debug, Default)]
pub struct NodeStore {
  nodes: Vec<Node>,
  index: FxHashMap<Node, NodeId>,
  live: FxHashMap<NodeId, ()>,
}

impl NodeStore {
  pub fn new()->Self { Self::default() }

  /// the canonical node for `node`: an existing match if one is live,
  /// otherwise a freshly inserted one. Returns whether it was new.
  pub fn insert_node(&mut self, node: Node)->(NodeId, bool) {
    if let Some(&id) = self.index.get(&node) {
      if self.live.contains_key(&id) {
        trace!("hash-cons hit for {node:?} -> {id:?}");
        return (id, false);
      }
    }
    let id = NodeId(self.nodes.len() as u32);
    self.nodes.push(node);
    self.index.insert(node, id);
    self.live.insert(id, ());
    trace!("hash-cons miss, inserted {node:?} -> {id:?}");
    (id, true)
  }

  pub fn get(&self, id: NodeId)->Node { self.nodes[id.idx()] }

  pub fn is_live(&self, id: NodeId)->bool { self.live.contains_key(&id) }

  /// every currently-live node id, in no particular order.
  pub fn live_ids(&self)->Vec<NodeId> { self.live.keys().copied().collect() }

  pub fn len(&self)->usize { self.live.len() }

  pub fn is_empty(&self)->bool { self.live.is_empty() }

  /// narrow the live set to exactly `keep`, pruning hash-cons entries
  /// for anything dropped. Retained nodes keep their `NodeId` — this is
  /// what lets `trim` leave external handles valid (§5).
  pub fn retain(&mut self, keep: &FxHashMap<NodeId, ()>) {
    self.index.retain(|_, id| keep.contains_key(id));
    self.live = keep.clone();
  }

  /// rewrite one child slot of an existing inner node in place, keeping
  /// its `NodeId` stable and refreshing the hash-cons index so the
  /// filled-in shape dedups correctly from now on. Used by
  /// `make_complete` to plug holes with the sink terminal.
  pub fn fill_hole(&mut self, id: NodeId, slot: ChildSlot, child: NodeId) {
    let old = self.nodes[id.idx()];
    let Node::Inner{var, low, high} = old else {
      panic!("fill_hole called on a terminal node {id:?}") };
    let new_node = match slot {
      ChildSlot::Low => Node::Inner{var, low: Some(child), high},
      ChildSlot::High => Node::Inner{var, low, high: Some(child)},
    };
    self.index.remove(&old);
    self.nodes[id.idx()] = new_node;
    self.index.insert(new_node, id);
  }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChildSlot { Low, High }
