//! Declaration modifiers and attributes.

use std::fmt;

/// A declaration modifier such as `public`, `static`, or `private(set)`.
///
/// The optional `detail` carries the parenthesized argument of scoped
/// modifiers (`set` in `private(set)`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Modifier {
    pub name: String,
    pub detail: Option<String>,
}

impl Modifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: None,
        }
    }

    pub fn with_detail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: Some(detail.into()),
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{}({})", self.name, detail),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A declaration attribute such as `@discardableResult` or
/// `@available(iOS 13, *)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub name: String,
    pub arguments: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: None,
        }
    }

    pub fn with_arguments(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Some(arguments.into()),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.arguments {
            Some(arguments) => write!(f, "@{}({})", self.name, arguments),
            None => write!(f, "@{}", self.name),
        }
    }
}
