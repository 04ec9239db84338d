//! The flat-table bridge (§4.5): bidirectional translation between this
//! diagram and an external ("foreign") BDD manager that is addressed only
//! through opaque pointers — this engine never reads the foreign
//! manager's own node representation, only the bottom-up flat tables it
//! exports and the new pointers its constructors hand back.
use fxhash::FxHashMap;

use crate::diagram::MtBdd;
use crate::error::{EngineError, InternalError, RootError, ShapeError};
use crate::node::{Node, NodeId};

/// one row of a flat table. Entries are listed bottom-up: every
/// `Inner`'s `low`/`high` indices refer to earlier rows, so building the
/// table in order never needs a forward reference.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FlatEntry {
  Terminal(u64),
  Inner { var: u32, low: usize, high: usize },
}

/// the external collaborator this engine exchanges diagrams with,
/// addressed only through its own opaque `Ptr` — this side never reads
/// a foreign node directly. Two reserved interfaces (§4.5): exporting
/// the subgraph rooted at a foreign pointer into a self-contained,
/// bottom-up flat table, and reconstructing a foreign leaf or inner node
/// from already-materialized foreign pointers.
pub trait ForeignManager {
  /// an opaque handle into the foreign manager's own node representation.
  type Ptr: Copy + Eq;

  fn num_vars(&self)->u32;

  /// the subgraph rooted at `root`, as a self-contained flat table
  /// (bottom-up ordered, positions local to this table; `root` is the
  /// last entry).
  fn export_subgraph(&self, root: Self::Ptr)->Vec<FlatEntry>;

  /// construct a foreign leaf carrying `value`, returning its pointer.
  fn make_leaf(&mut self, value: u64)->Self::Ptr;

  /// construct a foreign inner node testing `var`, from the already-
  /// materialized pointers of its children, returning its pointer.
  fn make_inner(&mut self, var: u32, low: Self::Ptr, high: Self::Ptr)->Self::Ptr;
}

impl MtBdd {
  /// rebuild a diagram from a foreign manager's roots. Exports each
  /// root's subgraph separately, then concatenates the per-root tables
  /// into one global position space, renumbering each table's internal
  /// `low`/`high` indices by its offset in the concatenation (§4.5 step
  /// 1). Roots are bound under names `0..R` in the order `roots_in`
  /// gives them. The result is not required to be reduced — run the
  /// canonicalization pipeline afterward if that's needed.
  pub fn new_from_flat<M: ForeignManager>(num_vars: u32, foreign: &M, roots_in: &[M::Ptr])
  -> Result<MtBdd, EngineError> {
    let mut diagram = MtBdd::new(num_vars);
    let mut combined: Vec<FlatEntry> = Vec::new();
    let mut root_positions: Vec<usize> = Vec::with_capacity(roots_in.len());
    for &root in roots_in {
      let table = foreign.export_subgraph(root);
      let offset = combined.len();
      for entry in &table {
        combined.push(match *entry {
          FlatEntry::Terminal(value) => FlatEntry::Terminal(value),
          FlatEntry::Inner{var, low, high} =>
            FlatEntry::Inner{var, low: low + offset, high: high + offset},
        });
      }
      // bottom-up contract: nothing in a self-contained per-root table
      // can be a child of anything but the root, so the root is the
      // table's last (highest-position) entry.
      root_positions.push(offset + table.len() - 1);
    }

    let mut built: Vec<Option<NodeId>> = vec![None; combined.len()];
    let forward_ref = || InternalError::InvariantViolation(
      "flat table entry referenced a child that has not been built yet".into());
    for (i, entry) in combined.iter().enumerate() {
      let id = match *entry {
        FlatEntry::Terminal(value) => diagram.create_terminal(value),
        FlatEntry::Inner{var, low, high} => {
          let low_id = built.get(low).copied().flatten().ok_or_else(forward_ref)?;
          let high_id = built.get(high).copied().flatten().ok_or_else(forward_ref)?;
          diagram.create_node(var, Some(low_id), Some(high_id))?
        }
      };
      built[i] = Some(id);
    }
    for (name, &pos) in root_positions.iter().enumerate() {
      let id = built.get(pos).copied().flatten().ok_or_else(forward_ref)?;
      diagram.promote_to_root(id, name as u64);
    }
    Ok(diagram)
  }

  /// export this diagram into a foreign manager, driving its
  /// `make_leaf`/`make_inner` constructors bottom-up, memoized by
  /// `NodeId`. Requires root names to be the contiguous range `0..R`,
  /// and the diagram to be complete (no holes) — run `make_complete`
  /// first. Returns the foreign pointer for each root, indexed by root
  /// name.
  pub fn to_flat<M: ForeignManager>(&self, foreign: &mut M)->Result<Vec<M::Ptr>, EngineError> {
    let num_roots = self.roots.len() as u64;
    for expected in 0..num_roots {
      if !self.roots.contains_key(&expected) {
        return Err(RootError::NonContiguousRoots(expected).into());
      }
    }
    let mut memo: FxHashMap<NodeId, M::Ptr> = FxHashMap::default();
    let mut roots_out = Vec::with_capacity(num_roots as usize);
    for name in 0..num_roots {
      let id = self.get_root(name).expect("checked contiguous above");
      roots_out.push(materialize(self, foreign, id, &mut memo)?);
    }
    Ok(roots_out)
  }
}

fn materialize<M: ForeignManager>(
  d: &MtBdd, foreign: &mut M, id: NodeId, memo: &mut FxHashMap<NodeId, M::Ptr>,
) -> Result<M::Ptr, ShapeError> {
  if let Some(&ptr) = memo.get(&id) { return Ok(ptr); }
  let ptr = match d.node(id) {
    Node::Terminal{value} => foreign.make_leaf(value),
    Node::Inner{var, low, high} => {
      let low = low.ok_or(ShapeError::IncompleteNode(id))?;
      let high = high.ok_or(ShapeError::IncompleteNode(id))?;
      let low_ptr = materialize(d, foreign, low, memo)?;
      let high_ptr = materialize(d, foreign, high, memo)?;
      foreign.make_inner(var.get(), low_ptr, high_ptr)
    }
  };
  memo.insert(id, ptr);
  Ok(ptr)
}

#[cfg(test)]
mod tests {
  use super::*;

  /// a stand-in for an external manager: its own append-only node
  /// table, addressed by position, exactly like a real flat-table-backed
  /// foreign BDD manager would be. `Ptr` is a position into *its own*
  /// table, not this crate's `FlatEntry` positions — `MtBdd` never reads
  /// `nodes` directly, only the trait's methods, so this genuinely
  /// exercises crossing into an opaque foreign representation.
  struct RecordingManager {
    num_vars: u32,
    nodes: Vec<FlatEntry>,
  }

  impl RecordingManager {
    fn new(num_vars: u32)->Self { RecordingManager { num_vars, nodes: Vec::new() } }
  }

  impl ForeignManager for RecordingManager {
    type Ptr = usize;

    fn num_vars(&self)->u32 { self.num_vars }

    fn export_subgraph(&self, root: usize)->Vec<FlatEntry> {
      let mut out = Vec::new();
      let mut memo: FxHashMap<usize, usize> = FxHashMap::default();
      export_rec(&self.nodes, root, &mut out, &mut memo);
      out
    }

    fn make_leaf(&mut self, value: u64)->usize {
      let pos = self.nodes.len();
      self.nodes.push(FlatEntry::Terminal(value));
      pos
    }

    fn make_inner(&mut self, var: u32, low: usize, high: usize)->usize {
      let pos = self.nodes.len();
      self.nodes.push(FlatEntry::Inner{var, low, high});
      pos
    }
  }

  fn export_rec(nodes: &[FlatEntry], id: usize, out: &mut Vec<FlatEntry>, memo: &mut FxHashMap<usize, usize>)
  -> usize {
    if let Some(&pos) = memo.get(&id) { return pos; }
    let entry = match nodes[id] {
      FlatEntry::Terminal(value) => FlatEntry::Terminal(value),
      FlatEntry::Inner{var, low, high} => {
        let low_pos = export_rec(nodes, low, out, memo);
        let high_pos = export_rec(nodes, high, out, memo);
        FlatEntry::Inner{var, low: low_pos, high: high_pos}
      }
    };
    let pos = out.len();
    out.push(entry);
    memo.insert(id, pos);
    pos
  }

  #[test] fn export_then_import_round_trips_a_small_diagram() {
    let mut d = MtBdd::new(2);
    let t0 = d.create_terminal(0);
    let t1 = d.create_terminal(1);
    let x1 = d.create_node(1, Some(t0), Some(t1)).unwrap();
    let x0 = d.create_node(0, Some(x1), Some(x1)).unwrap();
    d.promote_to_root(x0, 0);

    let mut foreign = RecordingManager::new(2);
    let roots = d.to_flat(&mut foreign).unwrap();
    assert_eq!(foreign.nodes.len(), 3); // t0, t1, x1 shared; x0 shares x1's shape too

    let reimported = MtBdd::new_from_flat(2, &foreign, &roots).unwrap();
    let original_paths: Vec<_> = d.all_paths_from(d.get_root(0).unwrap()).collect();
    let reimported_paths: Vec<_> = reimported.all_paths_from(reimported.get_root(0).unwrap()).collect();
    assert_eq!(original_paths, reimported_paths);
  }

  #[test] fn to_flat_rejects_non_contiguous_roots() {
    let mut d = MtBdd::new(1);
    let t = d.create_terminal(1);
    d.promote_to_root(t, 5); // name 0 is missing
    let mut foreign = RecordingManager::new(1);
    let err = d.to_flat(&mut foreign).unwrap_err();
    assert!(matches!(err, EngineError::Root(RootError::NonContiguousRoots(0))));
  }

  #[test] fn to_flat_rejects_incomplete_diagrams() {
    let mut d = MtBdd::new(1);
    d.create_root(0).unwrap(); // a hole on both sides
    let mut foreign = RecordingManager::new(1);
    let err = d.to_flat(&mut foreign).unwrap_err();
    assert!(matches!(err, EngineError::Shape(ShapeError::IncompleteNode(_))));
  }

  #[test] fn multiple_roots_share_one_flat_table() {
    let mut d = MtBdd::new(1);
    let t0 = d.create_terminal(0);
    let t1 = d.create_terminal(1);
    d.promote_to_root(t0, 0);
    d.promote_to_root(t1, 1);
    let mut foreign = RecordingManager::new(1);
    let roots = d.to_flat(&mut foreign).unwrap();
    assert_eq!(foreign.nodes.len(), 2);
    assert_eq!(roots.len(), 2);
  }

  #[test] fn import_renumbers_each_roots_table_independently() {
    // two roots exported separately, each its own single-terminal table;
    // new_from_flat must offset the second table's (empty, here) indices
    // by the first table's length rather than colliding positions.
    let mut foreign = RecordingManager::new(1);
    let r0 = foreign.make_leaf(10);
    let r1 = foreign.make_leaf(20);
    let diagram = MtBdd::new_from_flat(1, &foreign, &[r0, r1]).unwrap();
    assert_eq!(diagram.node(diagram.get_root(0).unwrap()), Node::Terminal{value: 10});
    assert_eq!(diagram.node(diagram.get_root(1).unwrap()), Node::Terminal{value: 20});
  }
}
