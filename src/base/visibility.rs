//! Three-way access classification for symbols.

use std::fmt;

/// Effective visibility of a symbol, after modifier inheritance through
/// extensions and enclosing containers has been applied.
///
/// Computed by a single resolver ([`crate::symbol::resolve_visibility`]) with
/// explicit precedence rules, so the three variants are mutually exclusive by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Internal,
    Private,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }

    pub fn is_internal(self) -> bool {
        matches!(self, Visibility::Internal)
    }

    pub fn is_private(self) -> bool {
        matches!(self, Visibility::Private)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Visibility::Public => "public",
            Visibility::Internal => "internal",
            Visibility::Private => "private",
        };
        write!(f, "{text}")
    }
}
