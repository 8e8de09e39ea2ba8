//! One declaration occurrence in a specific nesting context.

use std::cmp::Ordering;
use std::sync::Arc;

use thiserror::Error;

use crate::base::{Identifier, SourceRange, Visibility};
use crate::decl::{CompilationCondition, Declaration, DeclarationKind, Extension};

/// Parsed documentation text attached to a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Documentation {
    pub text: String,
}

impl Documentation {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One element of a symbol's enclosing context chain, outermost first.
///
/// Chains are built outside-in during the producer's pre-order walk, so an
/// element always references an ancestor finished before the current symbol —
/// `Arc` sharing cannot form cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum ContextElement {
    Symbol(Arc<Symbol>),
    Extension(Arc<Extension>),
    Condition(Arc<CompilationCondition>),
}

/// Error raised at the symbol-construction boundary.
///
/// A single malformed declaration record fails its own construction only; the
/// caller skips the record and continues with the rest of the source unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    #[error("declaration record for a {kind} is missing a name")]
    MissingName { kind: DeclarationKind },
}

/// One occurrence of a [`Declaration`] with its nesting context, identity,
/// documentation, and source coordinates.
///
/// Equality is fully structural — declaration, context chain (element-wise),
/// documentation, and source range. Two otherwise-identical occurrences at
/// different source locations are distinct symbols; occurrences in different
/// conditional-compilation branches share an [`Identifier`] but differ in
/// context.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    declaration: Declaration,
    context: Vec<ContextElement>,
    documentation: Option<Documentation>,
    source_range: Option<SourceRange>,
    id: Identifier,
}

impl Symbol {
    /// Build a symbol from a declaration record. Fails for a blank-named
    /// declaration; everything else is derived here, including the identifier
    /// from the enclosing context.
    pub fn new(
        declaration: Declaration,
        context: Vec<ContextElement>,
        documentation: Option<Documentation>,
        source_range: Option<SourceRange>,
    ) -> Result<Self, SymbolError> {
        if declaration.name().trim().is_empty() {
            return Err(SymbolError::MissingName {
                kind: declaration.kind(),
            });
        }
        let id = Self::derive_id(&declaration, &context);
        Ok(Self {
            declaration,
            context,
            documentation,
            source_range,
            id,
        })
    }

    /// Placeholder for a referenced type with no resolvable declaration:
    /// empty context, no documentation, no source range, always public.
    pub(crate) fn placeholder(name: &str) -> Self {
        let id = Identifier::from_reference(name);
        Self {
            declaration: Declaration::Unknown {
                name: id.name().to_string(),
            },
            context: Vec::new(),
            documentation: None,
            source_range: None,
            id,
        }
    }

    fn derive_id(declaration: &Declaration, context: &[ContextElement]) -> Identifier {
        let mut components = Vec::new();
        for element in context {
            match element {
                ContextElement::Symbol(symbol) => {
                    components.push(symbol.name().to_string());
                }
                ContextElement::Extension(extension) => {
                    // A qualified extended type ("C.E") contributes each
                    // component so member ids stay dotted paths.
                    components.extend(
                        extension
                            .extended_type
                            .split('.')
                            .map(|part| part.trim().to_string()),
                    );
                }
                ContextElement::Condition(_) => {}
            }
        }
        Identifier::new(components, declaration.name())
    }

    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    pub fn name(&self) -> &str {
        self.declaration.name()
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    pub fn context(&self) -> &[ContextElement] {
        &self.context
    }

    pub fn documentation(&self) -> Option<&Documentation> {
        self.documentation.as_ref()
    }

    pub fn source_range(&self) -> Option<&SourceRange> {
        self.source_range.as_ref()
    }

    /// True when non-empty documentation is attached.
    pub fn is_documented(&self) -> bool {
        self.documentation
            .as_ref()
            .is_some_and(|doc| !doc.is_empty())
    }

    /// Effective visibility; see [`crate::symbol::resolve_visibility`].
    pub fn visibility(&self) -> Visibility {
        super::visibility::resolve(self)
    }

    /// The nearest enclosing context element that is a symbol or an
    /// extension. Conditional-compilation layers are transparent.
    pub fn enclosing_scope(&self) -> Option<&ContextElement> {
        self.context
            .iter()
            .rev()
            .find(|element| !matches!(element, ContextElement::Condition(_)))
    }

    /// The nearest enclosing symbol, skipping extensions and conditions.
    pub fn enclosing_symbol(&self) -> Option<&Arc<Symbol>> {
        self.context.iter().rev().find_map(|element| match element {
            ContextElement::Symbol(symbol) => Some(symbol),
            _ => None,
        })
    }

    /// Conditional-compilation conditions in effect for this occurrence,
    /// outermost first.
    pub fn conditions(&self) -> Vec<&Arc<CompilationCondition>> {
        self.context
            .iter()
            .filter_map(|element| match element {
                ContextElement::Condition(condition) => Some(condition),
                _ => None,
            })
            .collect()
    }

    /// The global presentation ordering: by source range when both sides have
    /// one (file path, then start position), otherwise lexicographic by name.
    /// Every collection-returning query sorts with this single key.
    pub fn display_order(&self, other: &Self) -> Ordering {
        match (&self.source_range, &other.source_range) {
            (Some(a), Some(b)) => a.cmp(b).then_with(|| self.name().cmp(other.name())),
            _ => self.name().cmp(other.name()),
        }
    }
}
