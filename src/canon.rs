//! The canonicalization pipeline (§4.3-§4.5): `trim`, then
//! `remove_redundant_tests`, then `make_complete`, run in that order
//! over a diagram that may have accumulated holes and dead nodes during
//! a batch of insertions.
use fxhash::FxHashMap;

use crate::diagram::{MtBdd, SINK};
use crate::node::{Node, NodeId};
use crate::store::{ChildSlot, NodeStore};

impl MtBdd {
  /// reachability GC: drop every node not reachable from some root.
  /// Preserves the `NodeId` of everything kept.
  pub fn trim(&mut self) {
    let mut live: FxHashMap<NodeId, ()> = FxHashMap::default();
    let mut stack: Vec<NodeId> = self.roots.values().copied().collect();
    while let Some(id) = stack.pop() {
      if live.insert(id, ()).is_some() { continue; }
      if let Node::Inner{low, high, ..} = self.store.get(id) {
        if let Some(l) = low { stack.push(l); }
        if let Some(h) = high { stack.push(h); }
      }
    }
    self.store.retain(&live);
  }

  /// bottom-up collapse of any inner node whose low and high children
  /// are the same node (a redundant test). Rebuilds the node store from
  /// scratch, so every live `NodeId` may change — this is the one
  /// canonicalizer callers must treat as handle-invalidating.
  pub fn remove_redundant_tests(&mut self) {
    let mut new_store = NodeStore::new();
    let mut memo: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let root_ids: Vec<(u64, NodeId)> = self.roots.iter().map(|(&name, &id)| (name, id)).collect();
    for &(_, id) in &root_ids {
      rebuild(&self.store, &mut new_store, &mut memo, id);
    }
    for (name, id) in root_ids {
      self.roots.insert(name, memo[&id]);
    }
    self.store = new_store;
  }

  /// fill every hole with a terminal carrying `sink_value`, so the
  /// diagram becomes total. When `root_orphan_terminals` is set, every
  /// live terminal value not already reachable as a root is also
  /// promoted to a root under its own value, so exporters can recover
  /// every terminal a path could end on.
  ///
  /// `sink_value` defaults to the reserved [`SINK`] constant for
  /// diagrams with no further use for their root-name space, but an
  /// adapter bridging to `to_flat`'s contiguous-root-name contract must
  /// instead pass the next unused state id (see `SPEC_FULL.md` §4.5):
  /// `SINK` itself is never contiguous with an automaton's own numbering.
  ///
  /// Per the resolved ambiguity in the originating design notes: the
  /// sink terminal itself is promoted to a root exactly when this call
  /// actually changed something — a hole was filled, or an orphan
  /// terminal was rooted — not merely because a hole existed; an
  /// already-total diagram with no orphans is left untouched.
  pub fn make_complete(&mut self, sink_value: u64, root_orphan_terminals: bool) {
    // lazy: only the first hole or root-completion triggers T_sink's creation.
    let mut sink: Option<NodeId> = None;
    let mut filled_hole = false;
    for id in self.store.live_ids() {
      if let Node::Inner{low, high, ..} = self.store.get(id) {
        if low.is_none() {
          if sink.is_none() { sink = Some(self.create_terminal(sink_value)); }
          self.store.fill_hole(id, ChildSlot::Low, sink.unwrap());
          filled_hole = true;
        }
        if high.is_none() {
          if sink.is_none() { sink = Some(self.create_terminal(sink_value)); }
          self.store.fill_hole(id, ChildSlot::High, sink.unwrap());
          filled_hole = true;
        }
      }
    }
    let mut added_root = false;
    if root_orphan_terminals {
      let already_rooted: FxHashMap<NodeId, ()> =
        self.roots.values().map(|&id| (id, ())).collect();
      for id in self.store.live_ids() {
        if let Node::Terminal{value} = self.store.get(id) {
          if value != sink_value && !already_rooted.contains_key(&id) && !self.roots.contains_key(&value) {
            self.promote_to_root(id, value);
            added_root = true;
          }
        }
      }
    }
    if (filled_hole || added_root) && self.get_root(sink_value).is_none() {
      let sink = sink.unwrap_or_else(|| self.create_terminal(sink_value));
      self.promote_to_root(sink, sink_value);
    }
  }
}

fn rebuild(old: &NodeStore, new: &mut NodeStore, memo: &mut FxHashMap<NodeId, NodeId>, id: NodeId)
-> NodeId {
  if let Some(&done) = memo.get(&id) { return done; }
  let result = match old.get(id) {
    Node::Terminal{value} => new.insert_node(Node::Terminal{value}).0,
    Node::Inner{var, low, high} => {
      let low2 = low.map(|l| rebuild(old, new, memo, l));
      let high2 = high.map(|h| rebuild(old, new, memo, h));
      if low2.is_some() && low2 == high2 {
        low2.unwrap()
      } else {
        new.insert_node(Node::Inner{var, low: low2, high: high2}).0
      }
    }
  };
  memo.insert(id, result);
  result
}
