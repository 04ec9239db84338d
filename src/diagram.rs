//! The diagram manager: owns the node store and the root-name index,
//! and exposes the construction primitives adapters build paths with.
use fxhash::FxHashMap;
use log::debug;

use crate::error::{EngineError, RootError, ShapeError};
use crate::node::{Node, NodeId};
use crate::store::NodeStore;
use crate::vid::VarIndex;

/// The reserved terminal value `make_complete` uses for "no transition".
/// Drawn from the high end of the value space so it cannot collide with
/// an ordinary, small state identifier.
pub const SINK: u64 = u64::MAX - 1;

/// A shared, hash-consed multi-terminal ROBDD: a fixed variable count,
/// a node store, and a root-name index. See `SPEC_FULL.md` §3 for the
/// full data model and its invariants.
#[derive(Debug)]
pub struct MtBdd {
  num_vars: u32,
  pub(crate) store: NodeStore,
  pub(crate) roots: FxHashMap<u64, NodeId>,
}

impl MtBdd {
  /// an empty diagram over `num_vars` Boolean variables.
  pub fn new(num_vars: u32)->Self {
    MtBdd { num_vars, store: NodeStore::new(), roots: FxHashMap::default() }}

  pub fn num_vars(&self)->u32 { self.num_vars }

  pub fn node(&self, id: NodeId)->Node { self.store.get(id) }

  pub fn node_count(&self)->usize { self.store.len() }

  // -- construction primitives (§4.1) --------------------------------

  /// the canonical inner node for `(var, low, high)`. `low`/`high` may
  /// each be absent (a "hole"); a present child's variable index must
  /// exceed `var`.
  pub fn create_node(&mut self, var: u32, low: Option<NodeId>, high: Option<NodeId>)
  -> Result<NodeId, ShapeError> {
    if var >= self.num_vars { return Err(ShapeError::VarOutOfRange(var, self.num_vars)); }
    let var_ix = VarIndex::var(var);
    for child in [low, high].into_iter().flatten() {
      let child_var = self.store.get(child).var_index();
      if child_var <= var_ix {
        let child_repr = if child_var.is_terminal() { self.num_vars } else { child_var.get() };
        return Err(ShapeError::ChildOrderViolation { parent: var, child: child_repr });
      }
    }
    let (id, is_new) = self.store.insert_node(Node::Inner{var: var_ix, low, high});
    if is_new { debug!("created inner node {id:?} at variable {var}"); }
    Ok(id)
  }

  /// the canonical terminal for `value`.
  pub fn create_terminal(&mut self, value: u64)->NodeId {
    let (id, is_new) = self.store.insert_node(Node::Terminal{value});
    if is_new { debug!("created terminal {id:?} = {value}"); }
    id
  }

  /// insert a preconstructed node (used by the flat-table bridge on
  /// import, where nodes arrive already shaped). Returns whether it was
  /// new to the store.
  pub fn insert_node(&mut self, node: Node)->(NodeId, bool) { self.store.insert_node(node) }

  /// a fresh root named `name`: an inner node at variable 0 with both
  /// children absent. Fails if `name` is already bound, or if the
  /// diagram has no variable 0 to branch on (`V == 0`; such diagrams
  /// must be rooted directly at a terminal via `promote_to_root`).
  pub fn create_root(&mut self, name: u64)->Result<NodeId, EngineError> {
    if self.roots.contains_key(&name) { return Err(RootError::DuplicateRoot(name).into()); }
    if self.num_vars == 0 { return Err(ShapeError::NoVariableToRoot.into()); }
    let id = self.create_node(0, None, None)?;
    self.roots.insert(name, id);
    debug!("root {name} created at {id:?}");
    Ok(id)
  }

  /// bind `node` to `name`, replacing any prior binding.
  pub fn promote_to_root(&mut self, node: NodeId, name: u64) {
    self.roots.insert(name, node);
  }

  pub fn get_root(&self, name: u64)->Option<NodeId> { self.roots.get(&name).copied() }

  pub fn root_names(&self)->Vec<u64> { self.roots.keys().copied().collect() }
}
