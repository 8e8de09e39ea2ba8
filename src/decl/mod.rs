//! Declaration model — the typed records produced by the upstream parser.
//!
//! - [`Declaration`] — tagged variant over declaration kinds with accessor
//!   methods shared across variants
//! - [`Modifier`], [`Attribute`] — declaration adornments
//! - [`GenericParameter`], [`GenericRequirement`] — generics clauses
//! - [`Extension`] — "reopen type X" records
//! - [`ConditionalCompilationBlock`], [`CompilationCondition`] — conditional
//!   compilation branches

mod conditional;
mod declaration;
mod extension;
mod generics;
mod modifier;

pub use conditional::{Branch, CompilationCondition, ConditionalCompilationBlock};
pub use declaration::{Declaration, DeclarationKind};
pub use extension::Extension;
pub use generics::{GenericParameter, GenericRequirement, Relation};
pub use modifier::{Attribute, Modifier};
