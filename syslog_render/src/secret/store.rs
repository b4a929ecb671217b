//! In-memory secret resolver with file-mount support.

use std::collections::BTreeMap;
use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use parking_lot::Mutex;

use super::{SecretError, SecretKeySelector, SecretRef, SecretResolver, SecretSource};

/// A secret the store promised to mount, for the caller to provision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedSecret {
    /// Secret object and key being mounted.
    pub selector: SecretKeySelector,
    /// Path the rendered configuration refers to.
    pub path: Utf8PathBuf,
}

/// Resolver backed by an in-memory table.
///
/// - inline values resolve to themselves;
/// - `valueFrom` references are looked up in the table;
/// - `mountFrom` references resolve to `<mount_dir>/<name>-<key>` and are
///   recorded in [`SecretStore::mounts`] so the caller can provision the
///   file. The plaintext of a mounted secret is never read.
///
/// # Examples
///
/// ```
/// use syslog_render::{SecretRef, SecretResolver, SecretStore};
///
/// let store = SecretStore::new()
///     .with_secret("loki", "token", "s3cr3t")
///     .with_mount_dir("/etc/syslog-ng/secret");
///
/// assert_eq!(store.resolve(&SecretRef::from_secret("loki", "token")), Ok("s3cr3t".into()));
/// assert_eq!(
///     store.resolve(&SecretRef::mounted("tls", "ca.crt")),
///     Ok("/etc/syslog-ng/secret/tls-ca.crt".into()),
/// );
/// assert_eq!(store.mounts().len(), 1);
/// ```
#[derive(Default)]
pub struct SecretStore {
    secrets: BTreeMap<SecretKeySelector, String>,
    mount_dir: Option<Utf8PathBuf>,
    mounts: Mutex<Vec<MountedSecret>>,
}

impl SecretStore {
    /// An empty store without a mount directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` under `name`/`key`.
    #[must_use]
    pub fn with_secret(
        mut self,
        name: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.insert(name, key, value);
        self
    }

    /// Enables `mountFrom` references, rooted at `dir`.
    #[must_use]
    pub fn with_mount_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.mount_dir = Some(dir.into());
        self
    }

    /// Adds or replaces `value` under `name`/`key`.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        let selector = SecretKeySelector {
            name: name.into(),
            key: key.into(),
        };
        self.secrets.insert(selector, value.into());
    }

    /// Secrets mounted so far, in first-use order.
    #[must_use]
    pub fn mounts(&self) -> Vec<MountedSecret> {
        self.mounts.lock().clone()
    }

    fn mount(&self, dir: &Utf8Path, selector: &SecretKeySelector) -> Utf8PathBuf {
        let path = dir.join(format!("{}-{}", selector.name, selector.key));
        let mut mounts = self.mounts.lock();
        if !mounts.iter().any(|mounted| &mounted.selector == selector) {
            mounts.push(MountedSecret {
                selector: selector.clone(),
                path: path.clone(),
            });
        }
        path
    }
}

impl SecretResolver for SecretStore {
    fn resolve(&self, secret: &SecretRef) -> Result<String, SecretError> {
        match secret.source() {
            SecretSource::Inline(value) => Ok(value.to_owned()),
            SecretSource::Key(selector) => self
                .secrets
                .get(selector)
                .cloned()
                .ok_or_else(|| SecretError::not_found(selector)),
            SecretSource::Mount(selector) => self
                .mount_dir
                .as_deref()
                .map(|dir| self.mount(dir, selector).into_string())
                .ok_or_else(|| SecretError::MountUnavailable {
                    name: selector.name.clone(),
                    key: selector.key.clone(),
                }),
            SecretSource::Missing => Err(SecretError::MissingReference),
        }
    }
}

impl fmt::Debug for SecretStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretStore")
            .field("keys", &self.secrets.keys().collect::<Vec<_>>())
            .field("mount_dir", &self.mount_dir)
            .finish_non_exhaustive()
    }
}
