//! Source units and the explicit-stack builder the parser drives.
//!
//! The upstream parser walks a source unit's declarations in pre-order and
//! mirrors its nesting onto a [`SourceUnitBuilder`]: `open_*` on entering a
//! scope, `close_*` on leaving it, [`SourceUnitBuilder::leaf`] for
//! declarations without a body. The builder snapshots the current stack as
//! each symbol's context chain, so chains stay flat, outside-in lists with no
//! back-references into descendants.
//!
//! Units are independent of one another; callers may build them in parallel
//! and hand the finished collection to [`crate::graph::SymbolGraph`].

use std::sync::Arc;

use tracing::trace;

use crate::base::SourceRange;
use crate::decl::{CompilationCondition, Declaration, Extension};

use super::symbol::{ContextElement, Documentation, Symbol, SymbolError};

/// The finalized output of one source unit: every symbol in declaration
/// order, plus every extension opened in the unit.
#[derive(Debug, Clone, Default)]
pub struct SourceUnit {
    pub symbols: Vec<Arc<Symbol>>,
    pub extensions: Vec<Arc<Extension>>,
}

/// Builds one [`SourceUnit`] from a pre-order declaration walk.
#[derive(Debug, Default)]
pub struct SourceUnitBuilder {
    symbols: Vec<Arc<Symbol>>,
    extensions: Vec<Arc<Extension>>,
    stack: Vec<ContextElement>,
}

impl SourceUnitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration at the current nesting without entering it.
    ///
    /// Fails only for a malformed record (blank name); the caller skips that
    /// record and continues — one bad declaration never aborts the unit.
    pub fn leaf(
        &mut self,
        declaration: Declaration,
        documentation: Option<Documentation>,
        source_range: Option<SourceRange>,
    ) -> Result<Arc<Symbol>, SymbolError> {
        let symbol = Arc::new(Symbol::new(
            declaration,
            self.stack.clone(),
            documentation,
            source_range,
        )?);
        trace!("[UNIT] symbol recorded: {}", symbol.id());
        self.symbols.push(symbol.clone());
        Ok(symbol)
    }

    /// Record a declaration and enter its scope; subsequent records nest
    /// inside it until [`close_symbol`](Self::close_symbol).
    pub fn open_symbol(
        &mut self,
        declaration: Declaration,
        documentation: Option<Documentation>,
        source_range: Option<SourceRange>,
    ) -> Result<Arc<Symbol>, SymbolError> {
        let symbol = self.leaf(declaration, documentation, source_range)?;
        self.stack.push(ContextElement::Symbol(symbol.clone()));
        Ok(symbol)
    }

    pub fn close_symbol(&mut self) {
        let popped = self.stack.pop();
        debug_assert!(
            matches!(popped, Some(ContextElement::Symbol(_))),
            "close_symbol does not match the open context element"
        );
    }

    /// Enter an extension scope. The extension is recorded for the graph's
    /// merge pass even if the walk adds no members to it.
    pub fn open_extension(&mut self, extension: Extension) -> Arc<Extension> {
        let extension = Arc::new(extension);
        trace!("[UNIT] extension opened: {}", extension.extended_type);
        self.extensions.push(extension.clone());
        self.stack.push(ContextElement::Extension(extension.clone()));
        extension
    }

    pub fn close_extension(&mut self) {
        let popped = self.stack.pop();
        debug_assert!(
            matches!(popped, Some(ContextElement::Extension(_))),
            "close_extension does not match the open context element"
        );
    }

    /// Enter one branch of a conditional-compilation block.
    pub fn open_condition(&mut self, condition: CompilationCondition) {
        self.stack
            .push(ContextElement::Condition(Arc::new(condition)));
    }

    pub fn close_condition(&mut self) {
        let popped = self.stack.pop();
        debug_assert!(
            matches!(popped, Some(ContextElement::Condition(_))),
            "close_condition does not match the open context element"
        );
    }

    /// Current nesting depth, for producer-side sanity checks.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn finish(self) -> SourceUnit {
        debug_assert!(
            self.stack.is_empty(),
            "source unit finished with {} unclosed context elements",
            self.stack.len()
        );
        trace!(
            "[UNIT] finished: {} symbols, {} extensions",
            self.symbols.len(),
            self.extensions.len()
        );
        SourceUnit {
            symbols: self.symbols,
            extensions: self.extensions,
        }
    }
}
