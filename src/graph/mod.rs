//! The symbol graph — relationship derivation, indices, and queries.
//!
//! # Module structure
//!
//! - [`relationship`](self) — [`SymbolId`], [`Predicate`], [`Relationship`]
//! - [`graph`](self) — [`SymbolGraph`] construction (the single derivation
//!   pass over the merged symbol universe)
//! - [`query`](self) — the read-only query surface consumed by renderers

#[allow(clippy::module_inception)]
mod graph;
mod query;
mod relationship;

pub use graph::SymbolGraph;
pub use query::ConstrainedMembers;
pub use relationship::{Predicate, Relationship, SymbolId};
