//! Dotted, path-based symbol identity.
//!
//! An [`Identifier`] is the stable cross-file identity of a declaration: the
//! names of its enclosing scopes plus its own name, rendered as a dotted path
//! (`"Container.Nested.member"`). Two identifiers are equal exactly when their
//! dotted descriptions match.

use std::fmt;

/// Stable, hashable identity for a declaration occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// Names of the enclosing scopes, outermost first. Components never
    /// contain `.`, so field equality coincides with description equality.
    path_components: Vec<String>,
    /// The declaration's own name.
    name: String,
}

impl Identifier {
    pub fn new(path_components: Vec<String>, name: impl Into<String>) -> Self {
        Self {
            path_components,
            name: name.into(),
        }
    }

    /// Build an identifier from a dotted reference string such as
    /// `"Container.Nested"`. Components are whitespace-trimmed.
    pub fn from_reference(reference: &str) -> Self {
        let mut components: Vec<String> = reference
            .split('.')
            .map(|part| part.trim().to_string())
            .collect();
        // split always yields at least one element
        let name = components.pop().unwrap_or_default();
        Self {
            path_components: components,
            name,
        }
    }

    pub fn path_components(&self) -> &[String] {
        &self.path_components
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total number of components, including the name itself.
    pub fn component_count(&self) -> usize {
        self.path_components.len() + 1
    }

    /// Suffix match against a dotted reference string.
    ///
    /// The reference's components must equal this identifier's trailing
    /// components. This is how an extension declared with a short, unqualified
    /// type name (`"E"`) resolves against a fully qualified nested type
    /// (`"C.E"`).
    pub fn matches(&self, reference: &str) -> bool {
        let needle: Vec<&str> = reference.split('.').map(str::trim).collect();
        if needle.is_empty() || needle.len() > self.component_count() {
            return false;
        }
        let haystack = self
            .path_components
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.name.as_str()));
        needle
            .iter()
            .rev()
            .zip(haystack.rev())
            .all(|(a, b)| *a == b)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for component in &self.path_components {
            write!(f, "{component}.")?;
        }
        write!(f, "{}", self.name)
    }
}
