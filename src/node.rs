//! The two node variants a diagram is built from, and the opaque handle
//! (`NodeId`) a caller holds to refer to one.
use crate::vid::VarIndex;
use std::fmt;

/// Opaque, stable handle to a canonical node. Valid for the lifetime of
/// the diagram that produced it, except across a call to
/// `remove_redundant_tests` (see the crate's concurrency/resource notes).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl fmt::Debug for NodeId {
  fn fmt(&self, f:&mut fmt::Formatter)->fmt::Result { write!(f, "#{}", self.0) }}

impl fmt::Display for NodeId {
  fn fmt(&self, f:&mut fmt::Formatter)->fmt::Result { fmt::Debug::fmt(self, f) }}

impl NodeId {
  pub(crate) fn idx(self)->usize { self.0 as usize }}

/// A node is either an inner (branching) node or a terminal.
///
/// An inner node's `low`/`high` slot is `None` while the diagram is
/// under construction (a "hole"); `make_complete` is responsible for
/// filling every hole with the sink terminal before the diagram is
/// considered total.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Node {
  Inner { var: VarIndex, low: Option<NodeId>, high: Option<NodeId> },
  Terminal { value: u64 },
}

impl Node {
  pub fn is_terminal(&self)->bool { matches!(self, Node::Terminal{..}) }
  pub fn is_inner(&self)->bool { matches!(self, Node::Inner{..}) }

  /// the node's variable index, or `TERMINAL` for a terminal node.
  pub fn var_index(&self)->VarIndex {
    match self {
      Node::Inner{var, ..} => *var,
      Node::Terminal{..} => VarIndex::terminal() }}}
