//! Aggregation container for every error found in a render tree.

use std::{error::Error, fmt};

use super::RenderError;

/// Collection of [`RenderError`]s gathered from one render tree.
///
/// The order matches a depth-first, pre-order walk of the tree, so errors
/// appear in the order their fields were declared.
///
/// # Examples
///
/// ```
/// use syslog_render::{AggregatedErrors, RenderError};
///
/// let errors = AggregatedErrors::new(vec![
///     RenderError::Naming { field: "tag".into() },
///     RenderError::unsupported("()"),
/// ]);
/// assert_eq!(errors.len(), 2);
/// assert!(errors.to_string().starts_with("1: "));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AggregatedErrors(Vec<RenderError>);

impl AggregatedErrors {
    /// Create a new aggregation from a vector of errors.
    #[must_use]
    pub const fn new(errors: Vec<RenderError>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> std::slice::Iter<'_, RenderError> {
        self.0.iter()
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no errors were collected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}

impl From<Vec<RenderError>> for AggregatedErrors {
    fn from(errors: Vec<RenderError>) -> Self {
        Self::new(errors)
    }
}

impl<'a> IntoIterator for &'a AggregatedErrors {
    type Item = &'a RenderError;
    type IntoIter = std::slice::Iter<'a, RenderError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for AggregatedErrors {
    type Item = RenderError;
    type IntoIter = std::vec::IntoIter<RenderError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
