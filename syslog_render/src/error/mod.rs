//! Error taxonomy for the renderer.
//!
//! Render failures never abort a traversal. Each one is captured as a
//! [`RenderError`] inside a [`crate::RenderNode::Error`] node at the point it
//! occurred, and the emission stage later gathers them into
//! [`AggregatedErrors`].

mod aggregate;
#[cfg(test)]
mod tests;

pub use aggregate::AggregatedErrors;

use thiserror::Error;

/// Failures that can be embedded in a render tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RenderError {
    /// The secret resolver could not produce a value.
    #[error("failed to resolve secret {secret}: {reason}")]
    SecretResolution {
        /// Non-sensitive description of the reference, such as `name/key`.
        secret: String,
        /// Reason reported by the resolver.
        reason: String,
    },

    /// The value belongs to a category the target syntax cannot express.
    #[error("cannot render value of type {type_name}")]
    UnsupportedType {
        /// Rust type name of the offending value.
        type_name: String,
    },

    /// A field carries a position specifier that is not a small integer.
    #[error("invalid position specifier {spec:?} on field `{field}`: {reason}")]
    InvalidFieldMetadata {
        /// Identifier of the field.
        field: String,
        /// The raw specifier as written in the field metadata.
        spec: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A mapping entry whose key is not string-typed.
    #[error("cannot render map entry with key type {key_type}")]
    NonStringMapKey {
        /// Rust type name of the key.
        key_type: String,
    },

    /// A field declares an explicit name override that is empty.
    #[error("explicit name override for field `{field}` is empty")]
    Naming {
        /// Identifier of the field.
        field: String,
    },

    /// A match expression that the filter translator cannot express.
    #[error("invalid filter expression: {reason}")]
    InvalidFilter {
        /// Description of the malformed part.
        reason: String,
    },

    /// A NaN or infinite float, which has no literal form in the output.
    #[error("cannot write non-finite number {value}")]
    NonFiniteNumber {
        /// The value as Rust displays it, such as `NaN` or `inf`.
        value: String,
    },
}

impl RenderError {
    /// Builds [`RenderError::UnsupportedType`] for the given type name.
    #[must_use]
    pub fn unsupported(type_name: &str) -> Self {
        Self::UnsupportedType {
            type_name: type_name.to_owned(),
        }
    }

    /// Builds [`RenderError::NonStringMapKey`] for the given key type name.
    #[must_use]
    pub fn non_string_key(key_type: &str) -> Self {
        Self::NonStringMapKey {
            key_type: key_type.to_owned(),
        }
    }

    /// Builds [`RenderError::InvalidFilter`].
    #[must_use]
    pub fn invalid_filter(reason: impl Into<String>) -> Self {
        Self::InvalidFilter {
            reason: reason.into(),
        }
    }
}
