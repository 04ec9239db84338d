//! A hash-consed, canonical multi-terminal ROBDD engine.
//!
//! Builds up shared decision diagrams one bit-string path at a time,
//! canonicalizes them (`trim`, `remove_redundant_tests`, `make_complete`),
//! and bridges them to an external BDD manager's flat node table so two
//! different automata backends can exchange diagrams without either one
//! seeing the other's internal representation.

#![allow(clippy::many_single_char_names)]

pub mod adapter;
pub mod bits;
pub mod canon;
pub mod diagram;
pub mod dot;
pub mod enumerate;
pub mod error;
pub mod flat;
pub mod insert;
pub mod node;
pub mod store;
pub mod vid;

pub use bits::BitString;
pub use diagram::{MtBdd, SINK};
pub use error::{EncodingError, EngineError, InternalError, RootError, ShapeError};
pub use flat::{FlatEntry, ForeignManager};
pub use node::{Node, NodeId};
pub use vid::VarIndex;
