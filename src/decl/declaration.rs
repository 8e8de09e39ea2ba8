//! The tagged declaration variant and its shared accessors.

use std::fmt;

use super::generics::{GenericParameter, GenericRequirement};
use super::modifier::{Attribute, Modifier};

/// One parsed language construct, as delivered by the upstream parser.
///
/// Type-like variants (`Class`, `Structure`, `Enumeration`, `Protocol`) carry
/// an `inheritance` list of raw type-name references; entries may be compound
/// (`"Codable & Equatable"`) and are split during relationship derivation.
///
/// `Unknown` is a synthetic placeholder used for referenced types that cannot
/// be resolved to any parsed declaration. It has no modifiers and is always
/// treated as public.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Class {
        name: String,
        attributes: Vec<Attribute>,
        modifiers: Vec<Modifier>,
        inheritance: Vec<String>,
        generic_parameters: Vec<GenericParameter>,
        generic_requirements: Vec<GenericRequirement>,
    },
    Structure {
        name: String,
        attributes: Vec<Attribute>,
        modifiers: Vec<Modifier>,
        inheritance: Vec<String>,
        generic_parameters: Vec<GenericParameter>,
        generic_requirements: Vec<GenericRequirement>,
    },
    Enumeration {
        name: String,
        attributes: Vec<Attribute>,
        modifiers: Vec<Modifier>,
        inheritance: Vec<String>,
        generic_parameters: Vec<GenericParameter>,
        generic_requirements: Vec<GenericRequirement>,
    },
    EnumerationCase {
        name: String,
        attributes: Vec<Attribute>,
        modifiers: Vec<Modifier>,
    },
    Protocol {
        name: String,
        attributes: Vec<Attribute>,
        modifiers: Vec<Modifier>,
        inheritance: Vec<String>,
    },
    Function {
        name: String,
        attributes: Vec<Attribute>,
        modifiers: Vec<Modifier>,
        generic_parameters: Vec<GenericParameter>,
        generic_requirements: Vec<GenericRequirement>,
    },
    Initializer {
        name: String,
        attributes: Vec<Attribute>,
        modifiers: Vec<Modifier>,
        generic_parameters: Vec<GenericParameter>,
        generic_requirements: Vec<GenericRequirement>,
    },
    Subscript {
        name: String,
        attributes: Vec<Attribute>,
        modifiers: Vec<Modifier>,
        generic_parameters: Vec<GenericParameter>,
        generic_requirements: Vec<GenericRequirement>,
    },
    Variable {
        name: String,
        attributes: Vec<Attribute>,
        modifiers: Vec<Modifier>,
    },
    Typealias {
        name: String,
        attributes: Vec<Attribute>,
        modifiers: Vec<Modifier>,
    },
    Operator {
        name: String,
        attributes: Vec<Attribute>,
        modifiers: Vec<Modifier>,
    },
    PrecedenceGroup {
        name: String,
        attributes: Vec<Attribute>,
        modifiers: Vec<Modifier>,
    },
    AssociatedType {
        name: String,
        attributes: Vec<Attribute>,
        modifiers: Vec<Modifier>,
    },
    Unknown {
        name: String,
    },
}

impl Declaration {
    /// Returns the declared name.
    pub fn name(&self) -> &str {
        match self {
            Declaration::Class { name, .. }
            | Declaration::Structure { name, .. }
            | Declaration::Enumeration { name, .. }
            | Declaration::EnumerationCase { name, .. }
            | Declaration::Protocol { name, .. }
            | Declaration::Function { name, .. }
            | Declaration::Initializer { name, .. }
            | Declaration::Subscript { name, .. }
            | Declaration::Variable { name, .. }
            | Declaration::Typealias { name, .. }
            | Declaration::Operator { name, .. }
            | Declaration::PrecedenceGroup { name, .. }
            | Declaration::AssociatedType { name, .. }
            | Declaration::Unknown { name } => name,
        }
    }

    /// Returns the declaration's attributes. `Unknown` has none.
    pub fn attributes(&self) -> &[Attribute] {
        match self {
            Declaration::Class { attributes, .. }
            | Declaration::Structure { attributes, .. }
            | Declaration::Enumeration { attributes, .. }
            | Declaration::EnumerationCase { attributes, .. }
            | Declaration::Protocol { attributes, .. }
            | Declaration::Function { attributes, .. }
            | Declaration::Initializer { attributes, .. }
            | Declaration::Subscript { attributes, .. }
            | Declaration::Variable { attributes, .. }
            | Declaration::Typealias { attributes, .. }
            | Declaration::Operator { attributes, .. }
            | Declaration::PrecedenceGroup { attributes, .. }
            | Declaration::AssociatedType { attributes, .. } => attributes,
            Declaration::Unknown { .. } => &[],
        }
    }

    /// Returns the declaration's own modifiers. `Unknown` has none.
    pub fn modifiers(&self) -> &[Modifier] {
        match self {
            Declaration::Class { modifiers, .. }
            | Declaration::Structure { modifiers, .. }
            | Declaration::Enumeration { modifiers, .. }
            | Declaration::EnumerationCase { modifiers, .. }
            | Declaration::Protocol { modifiers, .. }
            | Declaration::Function { modifiers, .. }
            | Declaration::Initializer { modifiers, .. }
            | Declaration::Subscript { modifiers, .. }
            | Declaration::Variable { modifiers, .. }
            | Declaration::Typealias { modifiers, .. }
            | Declaration::Operator { modifiers, .. }
            | Declaration::PrecedenceGroup { modifiers, .. }
            | Declaration::AssociatedType { modifiers, .. } => modifiers,
            Declaration::Unknown { .. } => &[],
        }
    }

    /// Raw inherited/conformed type-name references, for variants that
    /// support an inheritance clause. Entries may be compound (`A & B`).
    pub fn inheritance(&self) -> &[String] {
        match self {
            Declaration::Class { inheritance, .. }
            | Declaration::Structure { inheritance, .. }
            | Declaration::Enumeration { inheritance, .. }
            | Declaration::Protocol { inheritance, .. } => inheritance,
            _ => &[],
        }
    }

    pub fn generic_parameters(&self) -> &[GenericParameter] {
        match self {
            Declaration::Class {
                generic_parameters, ..
            }
            | Declaration::Structure {
                generic_parameters, ..
            }
            | Declaration::Enumeration {
                generic_parameters, ..
            }
            | Declaration::Function {
                generic_parameters, ..
            }
            | Declaration::Initializer {
                generic_parameters, ..
            }
            | Declaration::Subscript {
                generic_parameters, ..
            } => generic_parameters,
            _ => &[],
        }
    }

    pub fn generic_requirements(&self) -> &[GenericRequirement] {
        match self {
            Declaration::Class {
                generic_requirements,
                ..
            }
            | Declaration::Structure {
                generic_requirements,
                ..
            }
            | Declaration::Enumeration {
                generic_requirements,
                ..
            }
            | Declaration::Function {
                generic_requirements,
                ..
            }
            | Declaration::Initializer {
                generic_requirements,
                ..
            }
            | Declaration::Subscript {
                generic_requirements,
                ..
            } => generic_requirements,
            _ => &[],
        }
    }

    /// Returns the fieldless kind discriminant.
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::Class { .. } => DeclarationKind::Class,
            Declaration::Structure { .. } => DeclarationKind::Structure,
            Declaration::Enumeration { .. } => DeclarationKind::Enumeration,
            Declaration::EnumerationCase { .. } => DeclarationKind::EnumerationCase,
            Declaration::Protocol { .. } => DeclarationKind::Protocol,
            Declaration::Function { .. } => DeclarationKind::Function,
            Declaration::Initializer { .. } => DeclarationKind::Initializer,
            Declaration::Subscript { .. } => DeclarationKind::Subscript,
            Declaration::Variable { .. } => DeclarationKind::Variable,
            Declaration::Typealias { .. } => DeclarationKind::Typealias,
            Declaration::Operator { .. } => DeclarationKind::Operator,
            Declaration::PrecedenceGroup { .. } => DeclarationKind::PrecedenceGroup,
            Declaration::AssociatedType { .. } => DeclarationKind::AssociatedType,
            Declaration::Unknown { .. } => DeclarationKind::Unknown,
        }
    }

    /// True for declarations that introduce a type scope members and
    /// extensions can attach to.
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            Declaration::Class { .. }
                | Declaration::Structure { .. }
                | Declaration::Enumeration { .. }
                | Declaration::Protocol { .. }
        )
    }

    /// True for variants that carry an inheritance clause.
    pub fn supports_inheritance(&self) -> bool {
        matches!(
            self,
            Declaration::Class { .. }
                | Declaration::Structure { .. }
                | Declaration::Enumeration { .. }
                | Declaration::Protocol { .. }
        )
    }

    /// True if any modifier has the given name, regardless of detail.
    pub fn has_modifier(&self, name: &str) -> bool {
        self.modifiers().iter().any(|m| m.name == name)
    }

    /// True if a modifier has the given name and no detail. Scoped modifiers
    /// such as `private(set)` restrict one accessor only and do not count.
    pub fn has_modifier_detailless(&self, name: &str) -> bool {
        self.modifiers()
            .iter()
            .any(|m| m.name == name && m.detail.is_none())
    }
}

/// Fieldless mirror of [`Declaration`], used for reporting and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    Structure,
    Enumeration,
    EnumerationCase,
    Protocol,
    Function,
    Initializer,
    Subscript,
    Variable,
    Typealias,
    Operator,
    PrecedenceGroup,
    AssociatedType,
    Unknown,
}

impl DeclarationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Structure => "structure",
            DeclarationKind::Enumeration => "enumeration",
            DeclarationKind::EnumerationCase => "enumeration case",
            DeclarationKind::Protocol => "protocol",
            DeclarationKind::Function => "function",
            DeclarationKind::Initializer => "initializer",
            DeclarationKind::Subscript => "subscript",
            DeclarationKind::Variable => "variable",
            DeclarationKind::Typealias => "typealias",
            DeclarationKind::Operator => "operator",
            DeclarationKind::PrecedenceGroup => "precedence group",
            DeclarationKind::AssociatedType => "associated type",
            DeclarationKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
