//! Relationship edges between symbols.

use std::fmt;

/// Arena index of a symbol in a [`crate::graph::SymbolGraph`].
/// Uses u32 for compact storage (supports ~4 billion symbols).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Create a new SymbolId from an index
    pub fn new(index: usize) -> Self {
        debug_assert!(
            index <= u32::MAX as usize,
            "symbol arena index {index} overflows u32"
        );
        Self(index as u32)
    }

    /// Get the index into the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The kind of a directed relationship edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Predicate {
    /// Subject is a member of the object type.
    MemberOf,
    /// Subject conforms to (or references) the object protocol.
    ConformsTo,
    /// Subject class inherits from the object class.
    InheritsFrom,
    /// Subject, declared in a protocol extension, is a default
    /// implementation for the object protocol.
    DefaultImplementationOf,
    /// Subject is a requirement of the object protocol.
    RequirementOf,
    /// Subject is an optional requirement of the object protocol.
    OptionalRequirementOf,
}

impl Predicate {
    pub fn as_str(self) -> &'static str {
        match self {
            Predicate::MemberOf => "memberOf",
            Predicate::ConformsTo => "conformsTo",
            Predicate::InheritsFrom => "inheritsFrom",
            Predicate::DefaultImplementationOf => "defaultImplementationOf",
            Predicate::RequirementOf => "requirementOf",
            Predicate::OptionalRequirementOf => "optionalRequirementOf",
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A directed, predicated edge between two symbols.
///
/// Edges are deduplicated structurally during graph construction and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Relationship {
    pub subject: SymbolId,
    pub predicate: Predicate,
    pub object: SymbolId,
}

impl Relationship {
    pub fn new(subject: SymbolId, predicate: Predicate, object: SymbolId) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}
