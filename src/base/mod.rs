//! Foundation types for the docsym library.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Identifier`] - Dotted path-based symbol identity
//! - [`SourceLocation`], [`SourceRange`] - Line/column source coordinates
//! - [`Visibility`] - Three-way access classification
//!
//! This module has NO dependencies on other docsym modules.

mod ident;
mod source;
mod visibility;

pub use ident::Identifier;
pub use source::{SourceLocation, SourceRange};
pub use visibility::Visibility;
