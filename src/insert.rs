//! Path insertion (§4.2): add a single `(bits, value)` path under a
//! named root, preserving sharing with whatever else is already there.
use log::trace;

use crate::bits::BitString;
use crate::diagram::MtBdd;
use crate::error::{EngineError, InternalError, RootError, ShapeError};
use crate::node::{Node, NodeId};

impl MtBdd {
  /// augment the diagram so that the walk from `root_name` following
  /// `bits[0], bits[1], …, bits[V-1]` (low on 0, high on 1) terminates
  /// at a terminal with value `terminal_value`. `root_name` must
  /// already be bound (via `create_root` or `promote_to_root`).
  ///
  /// Idempotent: inserting the same `(bits, value)` twice is a no-op,
  /// by hash-consing. The result may be non-reduced and is not expected
  /// to be — canonicalization is the caller's responsibility, run once
  /// after a whole batch of insertions.
  pub fn insert_bit_string(&mut self, root_name: u64, bits: &BitString, terminal_value: u64)
  -> Result<(), EngineError> {
    let v = self.num_vars();
    if bits.len() as u32 != v { return Err(ShapeError::LengthMismatch{ expected: v, actual: bits.len() }.into()); }
    let root = self.get_root(root_name).ok_or(RootError::UnknownRoot(root_name))?;
    let new_root = self.insert_rec(Some(root), 0, bits, terminal_value)?;
    self.promote_to_root(new_root, root_name);
    Ok(())
  }

  fn insert_rec(&mut self, node: Option<NodeId>, v: u32, bits: &BitString, value: u64)
  -> Result<NodeId, EngineError> {
    if v == self.num_vars() { return Ok(self.create_terminal(value)); }
    let bit = bits.get(v as usize);
    match node {
      None => {
        let child = self.insert_rec(None, v + 1, bits, value)?;
        let (low, high) = if bit { (None, Some(child)) } else { (Some(child), None) };
        Ok(self.create_node(v, low, high)?)
      }
      Some(id) => {
        let Node::Inner{low, high, ..} = self.node(id) else {
          return Err(InternalError::InvariantViolation(
            format!("insert_bit_string reached a terminal {id:?} before variable {v}")).into());
        };
        if cfg!(debug_assertions) {
          if let Node::Inner{var, ..} = self.node(id) {
            if var.get() != v {
              return Err(InternalError::InvariantViolation(format!(
                "node {id:?} branches on variable {} but insertion expected variable {v}; \
                 insert_bit_string requires running before remove_redundant_tests", var.get())).into());
            }
          }
        }
        let (old_low, old_high) = (low, high);
        let updated = if bit {
          self.insert_rec(high, v + 1, bits, value)?
        } else {
          self.insert_rec(low, v + 1, bits, value)?
        };
        let (new_low, new_high) = if bit { (old_low, Some(updated)) } else { (Some(updated), old_high) };
        if new_low == old_low && new_high == old_high {
          trace!("insert at {id:?} (var {v}) changed nothing, preserving sharing");
          Ok(id)
        } else {
          Ok(self.create_node(v, new_low, new_high)?)
        }
      }
    }
  }
}
