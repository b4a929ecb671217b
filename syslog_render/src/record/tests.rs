//! Unit tests for field classification and introspection.

use std::sync::LazyLock;

use rstest::rstest;

use super::*;

static LOGGLY_FIELDS: LazyLock<[FieldMeta; 3]> = LazyLock::new(|| {
    [
        FieldMeta::from_tag("Host", "pos=0"),
        FieldMeta::from_tag("Tag", "omitempty"),
        FieldMeta::from_tag("TimeReopen", ""),
    ]
});

struct Loggly {
    host: String,
    tag: String,
    time_reopen: u32,
}

impl Record for Loggly {
    fn type_name(&self) -> &'static str {
        "Loggly"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let [host, tag, time_reopen] = &*LOGGLY_FIELDS;
        vec![
            Field::new(host, &self.host),
            Field::new(tag, &self.tag),
            Field::new(time_reopen, &self.time_reopen),
        ]
    }
}

#[rstest]
#[case::positional(FieldMeta::new("host", None, Some(2), false), FieldClass::Positional(2))]
#[case::negative(FieldMeta::from_tag("Host", "pos=-1"), FieldClass::Positional(-1))]
#[case::converted(FieldMeta::keyword("TimeReopen"), FieldClass::Option("time-reopen".into()))]
#[case::override_verbatim(
    FieldMeta::new("url", Some("URL_override"), None, false),
    FieldClass::Option("URL_override".into())
)]
#[case::empty_override(
    FieldMeta::from_tag("Url", "name="),
    FieldClass::Invalid(RenderError::Naming { field: "Url".into() })
)]
fn classifies_fields(#[case] meta: FieldMeta, #[case] expected: FieldClass) {
    assert_eq!(meta.classify(), expected);
}

#[rstest]
#[case("first")]
#[case("300")]
#[case("1.5")]
fn invalid_positions_classify_as_errors(#[case] spec: &str) {
    let meta = FieldMeta::from_tag("Host", &format!("pos={spec}"));
    match meta.classify() {
        FieldClass::Invalid(RenderError::InvalidFieldMetadata {
            field,
            spec: found,
            ..
        }) => {
            assert_eq!(field, "Host");
            assert_eq!(found, spec);
        }
        other => panic!("expected invalid metadata, got {other:?}"),
    }
}

#[rstest]
fn key_ignores_position() {
    let meta = FieldMeta::new("disk_buffer", None, Some(0), false);
    assert_eq!(meta.key(), Ok("disk-buffer".to_owned()));
}

#[rstest]
fn introspection_drops_empty_omittable_fields() {
    let record = Loggly {
        host: "logs-01.loggly.com".into(),
        tag: String::new(),
        time_reopen: 0,
    };
    let fields = fields_of(&record);
    let idents: Vec<&str> = fields.iter().map(|field| field.ident).collect();
    assert_eq!(idents, ["Host", "TimeReopen"]);
    assert!(matches!(
        fields.first().map(|field| &field.class),
        Some(FieldClass::Positional(0))
    ));
}

#[rstest]
fn introspection_keeps_set_omittable_fields() {
    let record = Loggly {
        host: "logs-01.loggly.com".into(),
        tag: "web".into(),
        time_reopen: 60,
    };
    let classes: Vec<FieldClass> = fields_of(&record)
        .into_iter()
        .map(|field| field.class)
        .collect();
    assert_eq!(
        classes,
        [
            FieldClass::Positional(0),
            FieldClass::Option("tag".into()),
            FieldClass::Option("time-reopen".into()),
        ]
    );
}
