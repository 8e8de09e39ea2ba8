//! Symbols — declaration occurrences with identity, context, and visibility.
//!
//! # Module structure
//!
//! - [`symbol`](self) — [`Symbol`], [`ContextElement`], [`Documentation`]
//! - [`unit`] — [`SourceUnit`] and the explicit-stack [`SourceUnitBuilder`]
//!   the parsing collaborator drives
//! - [`visibility`] — the single visibility resolver

#[allow(clippy::module_inception)]
mod symbol;
mod unit;
mod visibility;

#[cfg(test)]
mod tests;

pub use symbol::{ContextElement, Documentation, Symbol, SymbolError};
pub use unit::{SourceUnit, SourceUnitBuilder};
pub use visibility::resolve as resolve_visibility;
