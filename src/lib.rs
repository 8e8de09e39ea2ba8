//! # docsym-base
//!
//! Core library for building and querying documentation symbol graphs from
//! parsed declarations.
//!
//! An external parser walks each source unit and feeds typed declaration
//! records into a [`symbol::SourceUnitBuilder`]. The finalized units are merged
//! into a [`graph::SymbolGraph`], which derives the relationship edges
//! (membership, inheritance, conformance, protocol requirements, default
//! implementations) and answers the queries a documentation renderer needs.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! report    → documentation-coverage reporting
//!   ↓
//! graph     → SymbolGraph: relationship derivation, indices, queries
//!   ↓
//! symbol    → Symbol, context chains, source-unit builder, visibility
//!   ↓
//! decl      → Declaration model, extensions, conditional compilation
//!   ↓
//! base      → Primitives (Identifier, SourceRange, Visibility)
//! ```

// ============================================================================
// MODULES (dependency order: base → decl → symbol → graph → report)
// ============================================================================

/// Foundation types: Identifier, SourceLocation/SourceRange, Visibility
pub mod base;

/// Declaration model: declaration variants, extensions, conditional compilation
pub mod decl;

/// Symbols: context chains, source-unit builder, visibility resolution
pub mod symbol;

/// Symbol graph: relationship derivation and queries
pub mod graph;

/// Documentation-coverage reporting
pub mod report;

// Re-export foundation types
pub use base::{Identifier, SourceLocation, SourceRange, Visibility};

// Re-export the declaration model
pub use decl::{
    Attribute, Branch, CompilationCondition, ConditionalCompilationBlock, Declaration,
    DeclarationKind, Extension, GenericParameter, GenericRequirement, Modifier, Relation,
};

// Re-export symbol construction types
pub use symbol::{
    ContextElement, Documentation, SourceUnit, SourceUnitBuilder, Symbol, SymbolError,
};

// Re-export the graph
pub use graph::{ConstrainedMembers, Predicate, Relationship, SymbolGraph, SymbolId};
