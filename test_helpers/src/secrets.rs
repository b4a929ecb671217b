//! Secret resolvers for exercising failure and call-count behaviour.

use parking_lot::Mutex;
use syslog_render::{SecretError, SecretRef, SecretResolver, SecretStore};

/// Wraps a [`SecretStore`] and records every reference it is asked about.
///
/// Only the non-sensitive [`SecretRef::describe`] form is kept.
///
/// # Examples
///
/// ```
/// use syslog_render::{SecretRef, SecretResolver, SecretStore};
/// use syslog_render_test_helpers::secrets::RecordingResolver;
///
/// let resolver = RecordingResolver::new(SecretStore::new().with_secret("a", "b", "c"));
/// assert!(resolver.resolve(&SecretRef::from_secret("a", "b")).is_ok());
/// assert_eq!(resolver.requests(), ["a/b"]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingResolver {
    store: SecretStore,
    requests: Mutex<Vec<String>>,
}

impl RecordingResolver {
    /// Records lookups answered by `store`.
    #[must_use]
    pub fn new(store: SecretStore) -> Self {
        Self {
            store,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Descriptions of every reference resolved so far, in call order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    /// Number of resolve calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.requests.lock().len()
    }

    /// The wrapped store.
    #[must_use]
    pub const fn store(&self) -> &SecretStore {
        &self.store
    }
}

impl SecretResolver for RecordingResolver {
    fn resolve(&self, secret: &SecretRef) -> Result<String, SecretError> {
        self.requests.lock().push(secret.describe());
        self.store.resolve(secret)
    }
}

/// Resolver that fails every lookup with a backend error.
#[derive(Debug, Clone)]
pub struct FailingResolver {
    reason: String,
}

impl FailingResolver {
    /// Fails with `reason`.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl SecretResolver for FailingResolver {
    fn resolve(&self, _secret: &SecretRef) -> Result<String, SecretError> {
        Err(SecretError::Backend(self.reason.clone()))
    }
}
