//! Adapter boundary traits (§4.7): the shape a caller's automaton
//! representation must fit to drive `insert_bit_string` over this
//! engine. No concrete automaton is implemented here — that lives on
//! the caller's side of the boundary, in whichever backend it bridges.
use crate::bits::BitString;
use crate::error::EncodingError;

/// maps an alphabet symbol to the bits that distinguish it from every
/// other symbol. The width is fixed for a given encoder (enough bits to
/// tell every symbol apart) and must match the diagram's variable count
/// for the slice of variables this encoder owns.
pub trait SymbolEncoder {
  /// bits wide enough to distinguish every symbol this encoder knows.
  fn width(&self)->u32;
  fn encode(&self, symbol: &str)->Result<BitString, EncodingError>;
  fn decode(&self, bits: &BitString)->Result<String, EncodingError>;
}

/// maps a nondeterministic choice (e.g. which of several successor
/// states to take) to bits the same way `SymbolEncoder` maps alphabet
/// symbols. Kept as a distinct trait from `SymbolEncoder` because the
/// two dictionaries usually have unrelated sizes and lifetimes.
pub trait NondetChoiceEncoder {
  fn width(&self)->u32;
  fn encode(&self, choice: usize)->Result<BitString, EncodingError>;
  fn decode(&self, bits: &BitString)->Result<usize, EncodingError>;
}

/// one (symbol bits, choice bits, source state, target state) transition
/// out of a foreign automaton, in the caller's own numbering.
pub struct Transition {
  pub symbol_bits: BitString,
  pub choice_bits: BitString,
  pub source: u64,
  pub target: u64,
}

/// the foreign automaton's side of the bridge: something that can be
/// walked transition by transition so an adapter can insert one path per
/// transition into the diagram.
pub trait TransitionIterator {
  fn next_transition(&mut self)->Option<Transition>;
}

/// renumbers foreign state identifiers into the dense root-name space
/// `0..R` this engine's flat-table export requires (§4.7). A given
/// foreign id always maps to the same root name for the lifetime of the
/// remap.
pub trait StateRemap {
  fn remap(&mut self, foreign_state: u64)->u64;
  fn state_count(&self)->u64;
}
