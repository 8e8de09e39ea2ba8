//! Conditional-compilation records.
//!
//! A block owns an ordered list of mutually exclusive branches; the trailing
//! branch may be an unconditional `else`, encoded as `condition == None`. A
//! [`CompilationCondition`] marks one branch of one block in a symbol's
//! context chain, so redeclarations under different build flags keep distinct
//! occurrences that share an identifier.

use std::sync::Arc;

/// One branch of a conditional-compilation block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Branch {
    /// The branch's boolean condition as written; `None` for a trailing
    /// `else` branch.
    pub condition: Option<String>,
}

impl Branch {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: Some(condition.into()),
        }
    }

    pub fn fallback() -> Self {
        Self { condition: None }
    }
}

/// An ordered list of mutually exclusive conditional branches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConditionalCompilationBlock {
    pub branches: Vec<Branch>,
}

impl ConditionalCompilationBlock {
    pub fn new(branches: Vec<Branch>) -> Self {
        Self { branches }
    }
}

/// A context-chain element selecting one branch of a block.
///
/// The branch is referenced by index rather than back-reference; the
/// constructor asserts the index is in range (invariant violations here are
/// programmer errors in the producing walk, not recoverable input errors).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompilationCondition {
    block: Arc<ConditionalCompilationBlock>,
    branch_index: usize,
}

impl CompilationCondition {
    pub fn new(block: Arc<ConditionalCompilationBlock>, branch_index: usize) -> Self {
        assert!(
            branch_index < block.branches.len(),
            "branch index {branch_index} out of range for block with {} branches",
            block.branches.len()
        );
        Self {
            block,
            branch_index,
        }
    }

    pub fn block(&self) -> &ConditionalCompilationBlock {
        &self.block
    }

    pub fn branch_index(&self) -> usize {
        self.branch_index
    }

    pub fn branch(&self) -> &Branch {
        &self.block.branches[self.branch_index]
    }
}
