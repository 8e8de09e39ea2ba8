//! Extension records — "reopen type X" scopes.

use super::generics::GenericRequirement;
use super::modifier::Modifier;

/// An extension adds members and conformances to a type it does not declare.
///
/// `extended_type` is the type reference as written, possibly a short
/// unqualified name; resolution against known symbols uses suffix matching on
/// [`crate::base::Identifier`]. An extension with a non-empty
/// `generic_requirements` list is *conditional*: its contributions are
/// excluded from unconditional inheritance/membership merging and surfaced
/// separately as generically constrained members. Whether the requirements are
/// actually satisfiable is never evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Extension {
    pub extended_type: String,
    pub modifiers: Vec<Modifier>,
    pub inheritance: Vec<String>,
    pub generic_requirements: Vec<GenericRequirement>,
}

impl Extension {
    pub fn new(extended_type: impl Into<String>) -> Self {
        Self {
            extended_type: extended_type.into(),
            modifiers: Vec::new(),
            inheritance: Vec::new(),
            generic_requirements: Vec::new(),
        }
    }

    pub fn is_conditional(&self) -> bool {
        !self.generic_requirements.is_empty()
    }

    /// True if any modifier has the given name.
    pub fn has_modifier(&self, name: &str) -> bool {
        self.modifiers.iter().any(|m| m.name == name)
    }
}
