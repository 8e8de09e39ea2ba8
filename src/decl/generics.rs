//! Generic parameter and requirement clauses.

use std::fmt;

/// A generic parameter such as `T` or `Element: Hashable`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenericParameter {
    pub name: String,
    pub constraint: Option<String>,
}

impl GenericParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: None,
        }
    }

    pub fn constrained(name: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: Some(constraint.into()),
        }
    }
}

impl fmt::Display for GenericParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.constraint {
            Some(constraint) => write!(f, "{}: {}", self.name, constraint),
            None => write!(f, "{}", self.name),
        }
    }
}

/// The relation of a `where`-clause requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `T: Protocol`
    Conformance,
    /// `T == Type`
    SameType,
}

impl Relation {
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::Conformance => ":",
            Relation::SameType => "==",
        }
    }
}

/// A single `where`-clause requirement, e.g. `Element: Equatable` or
/// `Key == String`.
///
/// Requirement satisfiability is never evaluated; requirement lists only gate
/// whether an extension's contributions merge unconditionally or are surfaced
/// as generically constrained members.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenericRequirement {
    pub left: String,
    pub relation: Relation,
    pub right: String,
}

impl GenericRequirement {
    pub fn new(left: impl Into<String>, relation: Relation, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            relation,
            right: right.into(),
        }
    }
}

impl fmt::Display for GenericRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.relation.as_str(), self.right)
    }
}
