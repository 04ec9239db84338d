//! Variable indices (the decision positions a diagram branches on).
use std::cmp::Ordering;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Inner { Var(u32), Terminal }

/// A Boolean decision position in `[0, V)`, plus the sentinel `TERMINAL`
/// that every terminal node is considered to branch "above" (`TERMINAL`
/// sorts as +infinity, so any real variable index sits below it).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarIndex(Inner);

impl Default for VarIndex { fn default()->Self { VarIndex(Inner::Terminal) }}

impl VarIndex {
  /// construct the variable index `v`.
  pub const fn var(v:u32)->VarIndex { VarIndex(Inner::Var(v)) }

  /// the `TERMINAL` sentinel (sorts above every real variable).
  pub const fn terminal()->VarIndex { VarIndex(Inner::Terminal) }

  pub fn is_terminal(&self)->bool { matches!(self.0, Inner::Terminal) }

  /// the underlying `u32`. panics if called on `TERMINAL`.
  pub fn get(&self)->u32 {
    match self.0 {
      Inner::Var(v) => v,
      Inner::Terminal => panic!("VarIndex::get() called on TERMINAL") }}}

impl fmt::Debug for VarIndex {
  fn fmt(&self, f:&mut fmt::Formatter)->fmt::Result {
    match self.0 {
      Inner::Var(v) => write!(f, "x{v}"),
      Inner::Terminal => write!(f, "TERMINAL") }}}

impl fmt::Display for VarIndex {
  fn fmt(&self, f:&mut fmt::Formatter)->fmt::Result { fmt::Debug::fmt(self, f) }}

/// `TERMINAL` sorts above every real variable index (+infinity), matching
/// the ordering invariant: `child.var_index > node.var_index`.
impl Ord for VarIndex {
  fn cmp(&self, other:&Self)->Ordering {
    match (self.0, other.0) {
      (Inner::Terminal, Inner::Terminal) => Ordering::Equal,
      (Inner::Terminal, _) => Ordering::Greater,
      (_, Inner::Terminal) => Ordering::Less,
      (Inner::Var(a), Inner::Var(b)) => a.cmp(&b) }}}

impl PartialOrd for VarIndex {
  fn partial_cmp(&self, other:&Self)->Option<Ordering> { Some(self.cmp(other)) }}
