//! Unit tests for secret references and the in-memory store.

use anyhow::{Result, ensure};
use rstest::{fixture, rstest};

use super::*;

#[fixture]
fn store() -> SecretStore {
    SecretStore::new()
        .with_secret("loki", "token", "s3cr3t")
        .with_mount_dir("/etc/syslog-ng/secret")
}

#[rstest]
#[case::inline(SecretRef::inline("plain"), Ok("plain".to_owned()))]
#[case::stored(SecretRef::from_secret("loki", "token"), Ok("s3cr3t".to_owned()))]
#[case::missing_key(
    SecretRef::from_secret("loki", "password"),
    Err(SecretError::NotFound { name: "loki".into(), key: "password".into() })
)]
#[case::empty(SecretRef::default(), Err(SecretError::MissingReference))]
fn store_resolves_sources(
    store: SecretStore,
    #[case] secret: SecretRef,
    #[case] expected: Result<String, SecretError>,
) {
    assert_eq!(store.resolve(&secret), expected);
}

#[rstest]
fn mounts_are_recorded_once(store: SecretStore) -> Result<()> {
    let secret = SecretRef::mounted("tls", "ca.crt");
    let first = store.resolve(&secret)?;
    let second = store.resolve(&secret)?;
    ensure!(first == "/etc/syslog-ng/secret/tls-ca.crt", "unexpected path {first}");
    ensure!(first == second, "paths differ: {first} != {second}");
    let mounts = store.mounts();
    ensure!(mounts.len() == 1, "expected one mount, got {}", mounts.len());
    Ok(())
}

#[rstest]
fn mounting_requires_directory() {
    let store = SecretStore::new();
    assert_eq!(
        store.resolve(&SecretRef::mounted("tls", "ca.crt")),
        Err(SecretError::MountUnavailable {
            name: "tls".into(),
            key: "ca.crt".into()
        })
    );
}

#[rstest]
fn debug_output_hides_plaintext(store: SecretStore) {
    let inline = SecretRef::inline("hunter2");
    assert!(!format!("{inline:?}").contains("hunter2"));
    assert!(!format!("{store:?}").contains("s3cr3t"));
}

#[rstest]
fn deserializes_key_reference() -> Result<()> {
    let secret: SecretRef = serde_json::from_str(
        r#"{"valueFrom": {"secretKeyRef": {"name": "loggly", "key": "token"}}}"#,
    )?;
    ensure!(
        secret == SecretRef::from_secret("loggly", "token"),
        "unexpected reference {secret:?}"
    );
    ensure!(secret.describe() == "loggly/token", "bad description");
    Ok(())
}

#[rstest]
fn inline_value_takes_precedence() -> Result<()> {
    let secret: SecretRef = serde_json::from_str(
        r#"{"value": "x", "mountFrom": {"secretKeyRef": {"name": "n", "key": "k"}}}"#,
    )?;
    ensure!(
        secret.source() == SecretSource::Inline("x"),
        "inline value should win"
    );
    Ok(())
}
