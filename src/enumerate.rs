//! Don't-care path enumeration (§4.6): every input assignment reachable
//! from a root, paired with the terminal value it lands on.
use crate::bits::BitString;
use crate::diagram::{MtBdd, SINK};
use crate::node::{Node, NodeId};

/// Iterator over every `(assignment, value)` pair reachable from a root,
/// in ascending bit-string order. Variables the path never tests expand
/// to both `0` and `1`, so the count of paths from a diagram with `V`
/// variables is always exactly `2^V`, reduced or not.
pub struct AllPaths {
  paths: std::vec::IntoIter<(BitString, u64)>,
}

impl Iterator for AllPaths {
  type Item = (BitString, u64);
  fn next(&mut self)->Option<Self::Item> { self.paths.next() }
}

impl MtBdd {
  /// enumerate every path from `root`, don't-cares expanded. An absent
  /// child encountered mid-walk (a hole left by a diagram that hasn't
  /// been through `make_complete`) is treated as an implicit `SINK` for
  /// every variable below it, rather than rejected.
  pub fn all_paths_from(&self, root: NodeId)->AllPaths {
    let mut out = Vec::new();
    let mut partial = Vec::with_capacity(self.num_vars() as usize);
    self.collect_paths(Some(root), 0, &mut partial, &mut out);
    AllPaths { paths: out.into_iter() }
  }

  fn collect_paths(&self, node: Option<NodeId>, v: u32, partial: &mut Vec<bool>, out: &mut Vec<(BitString, u64)>) {
    if v == self.num_vars() {
      let value = match node {
        Some(id) => match self.node(id) {
          Node::Terminal{value} => value,
          Node::Inner{..} => unreachable!("inner node surviving to full depth {v}"),
        },
        None => SINK,
      };
      out.push((BitString::from_bools(partial), value));
      return;
    }
    let tests_here = match node.map(|id| self.node(id)) {
      Some(Node::Inner{var, ..}) => var.get() == v,
      _ => false,
    };
    if tests_here {
      let Node::Inner{low, high, ..} = self.node(node.unwrap()) else { unreachable!() };
      partial.push(false);
      self.collect_paths(low, v + 1, partial, out);
      partial.pop();
      partial.push(true);
      self.collect_paths(high, v + 1, partial, out);
      partial.pop();
    } else {
      // don't-care: variable v is untested on this path (either the walk
      // hasn't reached a real node yet, or the node we're at branches on
      // some later variable, or terminated early as a hole).
      partial.push(false);
      self.collect_paths(node, v + 1, partial, out);
      partial.pop();
      partial.push(true);
      self.collect_paths(node, v + 1, partial, out);
      partial.pop();
    }
  }
}
