//! Unit tests for value categorisation.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::time::Duration;

use rstest::rstest;

use super::*;

fn scalar_of(value: &dyn Render) -> Option<Scalar> {
    match value.kind() {
        ValueKind::Scalar(scalar) => Some(scalar),
        _ => None,
    }
}

#[rstest]
#[case::u8(&7_u8, Scalar::U8(7))]
#[case::i16(&-7_i16, Scalar::I16(-7))]
#[case::usize(&7_usize, Scalar::Usize(7))]
#[case::f32(&0.5_f32, Scalar::F32(0.5))]
#[case::text(&"tag", Scalar::Str("tag".to_owned()))]
#[case::character(&'x', Scalar::Str("x".to_owned()))]
#[case::flag(&true, Scalar::Bool(true))]
#[case::whole_seconds(&Duration::from_secs(60), Scalar::U64(60))]
#[case::fractional(&Duration::from_millis(1500), Scalar::F64(1.5))]
#[case::boxed(&Box::new(3_i32), Scalar::I32(3))]
#[case::shared(&Rc::new(String::from("x")), Scalar::Str("x".to_owned()))]
fn scalars_keep_their_width(#[case] value: &dyn Render, #[case] expected: Scalar) {
    assert_eq!(scalar_of(value), Some(expected));
}

#[rstest]
fn option_is_an_indirection() {
    assert!(matches!(None::<u8>.kind(), ValueKind::Indirect(None)));
    let inner = match Some(4_u8).kind() {
        ValueKind::Indirect(Some(inner)) => scalar_of(inner),
        _ => None,
    };
    assert_eq!(inner, Some(Scalar::U8(4)));
}

#[rstest]
fn sequences_keep_element_order() {
    let items = vec![3_u16, 1, 2];
    let ValueKind::Sequence(elements) = items.kind() else {
        panic!("expected a sequence");
    };
    let scalars: Vec<_> = elements.into_iter().filter_map(scalar_of).collect();
    assert_eq!(scalars, vec![Scalar::U16(3), Scalar::U16(1), Scalar::U16(2)]);
}

#[rstest]
fn string_keys_are_borrowed() {
    let map = BTreeMap::from([("port".to_owned(), 514_u16)]);
    let ValueKind::Mapping(entries) = map.kind() else {
        panic!("expected a mapping");
    };
    let keys: Vec<_> = entries.into_iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec![MapKey::Str("port".into())]);
}

#[rstest]
fn non_string_keys_report_their_type() {
    let map = HashMap::from([(1_u8, "one")]);
    let ValueKind::Mapping(entries) = map.kind() else {
        panic!("expected a mapping");
    };
    let keys: Vec<_> = entries.into_iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec![MapKey::Other("u8")]);
}

#[rstest]
fn string_keys_sort_before_others() {
    let mut keys = vec![
        MapKey::Other("u8"),
        MapKey::Str("b".into()),
        MapKey::Str("a".into()),
    ];
    keys.sort();
    assert_eq!(
        keys,
        vec![MapKey::Str("a".into()), MapKey::Str("b".into()), MapKey::Other("u8")]
    );
}

#[rstest]
#[case::zero(&0_u32, true)]
#[case::non_zero(&1_u32, false)]
#[case::zero_float(&0.0_f32, true)]
#[case::negative_zero_float(&-0.0_f64, true)]
#[case::fractional_float(&0.25_f64, false)]
#[case::empty_text(&"", true)]
#[case::empty_list(&Vec::<u8>::new(), true)]
#[case::none(&None::<String>, true)]
#[case::some_empty(&Some(String::new()), false)]
#[case::false_flag(&false, true)]
#[case::zero_duration(&Duration::ZERO, true)]
#[case::empty_array(&[0_u8; 0], true)]
fn emptiness(#[case] value: &dyn Render, #[case] expected: bool) {
    assert_eq!(value.is_empty_value(), expected);
}

#[cfg(feature = "serde_json")]
#[rstest]
#[case(serde_json::json!(-3), Scalar::I64(-3))]
#[case(serde_json::json!(u64::MAX), Scalar::U64(u64::MAX))]
#[case(serde_json::json!(2.5), Scalar::F64(2.5))]
#[case(serde_json::json!("x"), Scalar::Str("x".to_owned()))]
fn json_scalars(#[case] value: serde_json::Value, #[case] expected: Scalar) {
    assert_eq!(scalar_of(&value), Some(expected));
}

#[cfg(feature = "serde_json")]
#[rstest]
#[case(serde_json::json!(-0.0), true)]
#[case(serde_json::json!(0), true)]
#[case(serde_json::json!(0.5), false)]
fn json_zero_numbers_are_empty(#[case] value: serde_json::Value, #[case] expected: bool) {
    assert_eq!(value.is_empty_value(), expected);
}

#[cfg(feature = "toml")]
#[rstest]
fn toml_negative_zero_is_empty() {
    assert!(toml::Value::Float(-0.0).is_empty_value());
}

#[cfg(feature = "serde_json")]
#[rstest]
fn json_null_is_nil() {
    assert!(matches!(serde_json::Value::Null.kind(), ValueKind::Indirect(None)));
}

#[cfg(feature = "toml")]
#[rstest]
fn toml_tables_are_mappings() {
    let table: toml::Table = toml::from_str("port = 514").expect("table should parse");
    let value = toml::Value::Table(table);
    let ValueKind::Mapping(entries) = value.kind() else {
        panic!("expected a mapping");
    };
    let rendered: Vec<_> = entries
        .into_iter()
        .map(|(key, entry)| (key, scalar_of(entry)))
        .collect();
    assert_eq!(rendered, vec![(MapKey::Str("port".into()), Some(Scalar::I64(514)))]);
}
