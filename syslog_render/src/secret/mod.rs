//! Secret references and the resolver capability.
//!
//! A [`SecretRef`] is an opaque placeholder for a credential. The renderer
//! never inspects it; it hands the reference to a [`SecretResolver`] and
//! embeds the returned plaintext as a literal. Nothing else keeps the
//! plaintext.

mod store;
#[cfg(test)]
mod tests;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Render, ValueKind};

pub use store::{MountedSecret, SecretStore};

/// Name and key of an entry in an external secret store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SecretKeySelector {
    /// Name of the secret object.
    pub name: String,
    /// Key within the secret object.
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeySource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    secret_key_ref: Option<SecretKeySelector>,
}

/// Opaque reference to a credential, resolved only at render time.
///
/// Deserializes from the `value`, `valueFrom.secretKeyRef`, or
/// `mountFrom.secretKeyRef` shape:
///
/// ```
/// use syslog_render::{SecretRef, SecretSource};
///
/// let secret: SecretRef = serde_json::from_str(
///     r#"{"valueFrom": {"secretKeyRef": {"name": "loki", "key": "token"}}}"#,
/// )?;
/// assert!(matches!(secret.source(), SecretSource::Key(sel) if sel.name == "loki"));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value_from: Option<KeySource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mount_from: Option<KeySource>,
}

/// Where a [`SecretRef`] points, in resolution precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource<'a> {
    /// The reference carries its value inline.
    Inline(&'a str),
    /// The value lives in an external store.
    Key(&'a SecretKeySelector),
    /// The value is mounted as a file and referenced by path.
    Mount(&'a SecretKeySelector),
    /// The reference points nowhere.
    Missing,
}

impl SecretRef {
    /// A reference carrying its value inline.
    #[must_use]
    pub fn inline(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// A reference to `key` within the secret object `name`.
    #[must_use]
    pub fn from_secret(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            value_from: Some(KeySource::selecting(name, key)),
            ..Self::default()
        }
    }

    /// A reference to a secret that is mounted into the daemon's filesystem.
    #[must_use]
    pub fn mounted(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            mount_from: Some(KeySource::selecting(name, key)),
            ..Self::default()
        }
    }

    /// The source a resolver should consult.
    #[must_use]
    pub fn source(&self) -> SecretSource<'_> {
        if let Some(value) = self.value.as_deref() {
            return SecretSource::Inline(value);
        }
        if let Some(selector) = selector_of(self.value_from.as_ref()) {
            return SecretSource::Key(selector);
        }
        selector_of(self.mount_from.as_ref()).map_or(SecretSource::Missing, SecretSource::Mount)
    }

    /// Non-sensitive description of the reference for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.source() {
            SecretSource::Inline(_) => "<inline>".to_owned(),
            SecretSource::Key(sel) => format!("{}/{}", sel.name, sel.key),
            SecretSource::Mount(sel) => format!("mounted {}/{}", sel.name, sel.key),
            SecretSource::Missing => "<empty reference>".to_owned(),
        }
    }
}

fn selector_of(source: Option<&KeySource>) -> Option<&SecretKeySelector> {
    source.and_then(|src| src.secret_key_ref.as_ref())
}

impl KeySource {
    fn selecting(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            secret_key_ref: Some(SecretKeySelector {
                name: name.into(),
                key: key.into(),
            }),
        }
    }
}

impl fmt::Debug for SecretRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SecretRef").field(&self.describe()).finish()
    }
}

impl Render for SecretRef {
    fn kind(&self) -> ValueKind<'_> {
        ValueKind::Secret(self)
    }
}

/// Reasons a secret could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SecretError {
    /// The reference has no value and no source.
    #[error("secret reference has no value, valueFrom or mountFrom")]
    MissingReference,

    /// The store holds no entry for the selector.
    #[error("secret {name}/{key} not found")]
    NotFound {
        /// Name of the secret object.
        name: String,
        /// Key within the secret object.
        key: String,
    },

    /// The resolver cannot mount files.
    #[error("cannot mount secret {name}/{key}: no mount directory configured")]
    MountUnavailable {
        /// Name of the secret object.
        name: String,
        /// Key within the secret object.
        key: String,
    },

    /// Failure reported by a backing store.
    #[error("{0}")]
    Backend(String),
}

impl SecretError {
    pub(crate) fn not_found(selector: &SecretKeySelector) -> Self {
        Self::NotFound {
            name: selector.name.clone(),
            key: selector.key.clone(),
        }
    }
}

/// Resolves secret references to plaintext.
///
/// Implementations may block (for example on a network lookup); bounding
/// that latency is the implementation's job. Closures work directly:
///
/// ```
/// use syslog_render::{SecretError, SecretRef, SecretResolver};
///
/// let resolver = |_: &SecretRef| -> Result<String, SecretError> { Ok("s3cr3t".into()) };
/// assert_eq!(resolver.resolve(&SecretRef::from_secret("loki", "token")), Ok("s3cr3t".into()));
/// ```
pub trait SecretResolver {
    /// Produces the plaintext for `secret`.
    ///
    /// # Errors
    ///
    /// Returns a [`SecretError`] when the reference cannot be resolved.
    fn resolve(&self, secret: &SecretRef) -> Result<String, SecretError>;
}

impl<F> SecretResolver for F
where
    F: Fn(&SecretRef) -> Result<String, SecretError>,
{
    fn resolve(&self, secret: &SecretRef) -> Result<String, SecretError> {
        self(secret)
    }
}
