//! Unit tests for error formatting and aggregation.

use rstest::rstest;

use super::{AggregatedErrors, RenderError};

#[rstest]
#[case::secret(
    RenderError::SecretResolution { secret: "loki/token".into(), reason: "not found".into() },
    "failed to resolve secret loki/token: not found"
)]
#[case::unsupported(RenderError::unsupported("()"), "cannot render value of type ()")]
#[case::map_key(RenderError::non_string_key("u8"), "cannot render map entry with key type u8")]
#[case::metadata(
    RenderError::InvalidFieldMetadata {
        field: "tag".into(),
        spec: "first".into(),
        reason: "invalid digit found in string".into(),
    },
    "invalid position specifier \"first\" on field `tag`: invalid digit found in string"
)]
#[case::naming(
    RenderError::Naming { field: "url".into() },
    "explicit name override for field `url` is empty"
)]
#[case::non_finite(
    RenderError::NonFiniteNumber { value: "NaN".into() },
    "cannot write non-finite number NaN"
)]
fn formats_errors(#[case] err: RenderError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[rstest]
fn aggregate_enumerates_entries() {
    let errors = AggregatedErrors::new(vec![
        RenderError::unsupported("()"),
        RenderError::non_string_key("i32"),
    ]);
    assert_eq!(
        errors.to_string(),
        "1: cannot render value of type ()\n2: cannot render map entry with key type i32"
    );
}

#[rstest]
fn empty_aggregate_renders_nothing() {
    let errors = AggregatedErrors::default();
    assert!(errors.is_empty());
    assert_eq!(errors.to_string(), "");
}
