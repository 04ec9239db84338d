//! The engine's error taxonomy. Every public operation that can fail
//! validates its inputs before touching the node store, so a failed call
//! leaves the diagram unchanged.
use thiserror::Error;

/// Malformed shapes: wrong-length bit strings, out-of-range variable
/// indices, ordering violations, or holes where totality was required.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
  #[error("bit string has {actual} bits but the diagram has {expected} variables")]
  LengthMismatch { expected: u32, actual: usize },

  #[error("variable index {0} is out of range for a diagram with {1} variables")]
  VarOutOfRange(u32, u32),

  #[error("child variable index {child} does not exceed parent variable index {parent}")]
  ChildOrderViolation { parent: u32, child: u32 },

  #[error("diagram has zero variables; create_root needs a variable to branch on")]
  NoVariableToRoot,

  #[error("node {0:?} has a hole (absent child) where a complete diagram was required")]
  IncompleteNode(crate::node::NodeId),
}

/// Problems with root names: duplicates, missing lookups, or a
/// non-contiguous numbering where one is required.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RootError {
  #[error("root name {0} already exists")]
  DuplicateRoot(u64),

  #[error("root names must be the contiguous range 0..R for export; {0} is missing")]
  NonContiguousRoots(u64),

  #[error("no root registered under name {0}")]
  UnknownRoot(u64),
}

/// Adapter-boundary failure: a symbol outside the encoder's dictionary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
  #[error("symbol {0:?} is not present in the encoder's dictionary")]
  UnknownSymbol(String),
}

/// An invariant the engine itself is responsible for upholding was
/// found violated at run time. These are only checked in debug builds;
/// seeing one means a bug in the engine, not in the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InternalError {
  #[error("hash-consing invariant violated: {0}")]
  InvariantViolation(String),
}

/// Unifies the four error kinds for ergonomic `?`-based propagation
/// across the crate's public API.
#[derive(Debug, Error)]
pub enum EngineError {
  #[error(transparent)]
  Shape(#[from] ShapeError),
  #[error(transparent)]
  Root(#[from] RootError),
  #[error(transparent)]
  Encoding(#[from] EncodingError),
  #[error(transparent)]
  Internal(#[from] InternalError),
}
