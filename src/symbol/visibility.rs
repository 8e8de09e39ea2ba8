//! Effective-visibility resolution.
//!
//! One resolver with explicit precedence, so the three classifications are
//! mutually exclusive by construction. Multi-level modifier inheritance is
//! covered: a public extension publishes its detail-unrestricted members, enum
//! cases take their enumeration's access, and protocol requirements take their
//! protocol's access.

use crate::base::Visibility;
use crate::decl::{Declaration, Extension};

use super::symbol::{ContextElement, Symbol};

const NARROWING: [&str; 3] = ["internal", "fileprivate", "private"];

/// Resolve the effective visibility of a symbol.
///
/// Precedence, first match wins:
/// 1. `Unknown` and `Operator` declarations are public.
/// 2. An own `public`/`open` modifier.
/// 3. An own detail-less `private`/`fileprivate` modifier. Scoped modifiers
///    (`private(set)`) restrict one accessor and do not demote the symbol.
/// 4. The nearest enclosing extension's access, unless the declaration
///    explicitly narrows it.
/// 5. For enum cases and protocol requirements, the enclosing container's
///    resolved access.
/// 6. Internal.
pub fn resolve(symbol: &Symbol) -> Visibility {
    let declaration = symbol.declaration();

    if matches!(
        declaration,
        Declaration::Unknown { .. } | Declaration::Operator { .. }
    ) {
        return Visibility::Public;
    }

    if declaration.has_modifier("public") || declaration.has_modifier("open") {
        return Visibility::Public;
    }

    if declaration.has_modifier_detailless("private")
        || declaration.has_modifier_detailless("fileprivate")
    {
        return Visibility::Private;
    }

    match symbol.enclosing_scope() {
        Some(ContextElement::Extension(extension)) => {
            from_extension(declaration, extension)
        }
        Some(ContextElement::Symbol(container)) => {
            if inherits_container_access(declaration, container.declaration()) {
                container.visibility()
            } else {
                Visibility::Internal
            }
        }
        _ => Visibility::Internal,
    }
}

/// A member of `public extension T { ... }` is public unless its own
/// modifiers narrow access; a member of a `private`/`fileprivate` extension is
/// private (a widening own modifier was already handled by the caller).
fn from_extension(declaration: &Declaration, extension: &Extension) -> Visibility {
    if extension.has_modifier("public") || extension.has_modifier("open") {
        let narrowed = NARROWING
            .iter()
            .any(|name| declaration.has_modifier_detailless(name));
        if !narrowed {
            return Visibility::Public;
        }
        return Visibility::Internal;
    }
    if extension.has_modifier("private") || extension.has_modifier("fileprivate") {
        return Visibility::Private;
    }
    Visibility::Internal
}

/// Enum cases take the enumeration's access; protocol function and variable
/// requirements take the protocol's access.
fn inherits_container_access(declaration: &Declaration, container: &Declaration) -> bool {
    match container {
        Declaration::Enumeration { .. } => {
            matches!(declaration, Declaration::EnumerationCase { .. })
        }
        Declaration::Protocol { .. } => matches!(
            declaration,
            Declaration::Function { .. } | Declaration::Variable { .. }
        ),
        _ => false,
    }
}
