//! Graphviz export, for eyeballing a diagram while developing against it.
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use crate::diagram::MtBdd;
use crate::node::{Node, NodeId};

impl MtBdd {
  /// render every node reachable from any root as a Graphviz `digraph`,
  /// in a deterministic order (by variable, then by `NodeId`) so the
  /// output is stable across runs for otherwise-identical diagrams.
  pub fn print_as_dot(&self)->String {
    let mut ids: Vec<NodeId> = self.store.live_ids();
    ids.sort_by_key(|&id| (self.node(id).var_index(), id));

    let mut out = String::new();
    let _ = writeln!(out, "digraph mtbdd {{");
    let _ = writeln!(out, "  rankdir=TB;");

    for &id in &ids {
      match self.node(id) {
        Node::Terminal{value} => {
          let _ = writeln!(out, "  {id:?} [shape=box,label=\"{value}\"];");
        }
        Node::Inner{var, low, high} => {
          let _ = writeln!(out, "  {id:?} [shape=circle,label=\"{var}\"];");
          if let Some(l) = low { let _ = writeln!(out, "  {id:?} -> {l:?} [style=dashed,label=\"0\"];"); }
          if let Some(h) = high { let _ = writeln!(out, "  {id:?} -> {h:?} [label=\"1\"];"); }
        }
      }
    }

    let mut names: Vec<u64> = self.root_names();
    names.sort_unstable();
    for name in names {
      let id = self.get_root(name).unwrap();
      let _ = writeln!(out, "  root_{name} [shape=plaintext,label=\"root {name}\"];");
      let _ = writeln!(out, "  root_{name} -> {id:?};");
    }

    let _ = writeln!(out, "}}");
    out
  }

  pub fn save_as_dot(&self, path: impl AsRef<Path>)->io::Result<()> {
    fs::write(path, self.print_as_dot())
  }
}
