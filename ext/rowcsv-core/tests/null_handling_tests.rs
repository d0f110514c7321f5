use ordered_float::OrderedFloat;
use rowcsv_core::*;

#[test]
fn test_null_field_value_is_rejected() {
    let record = vec![
        FieldValue::Float64(OrderedFloat(1.0)),
        FieldValue::Null,
        FieldValue::Int32(3),
    ];

    let err = convert(Some(&record)).unwrap_err();
    assert_eq!(err, ConversionError::non_numeric(1, NULL_TEXT));
}

#[test]
fn test_none_field_is_rejected() {
    let record: Vec<Option<f64>> = vec![None];
    let err = convert(Some(&record)).unwrap_err();
    assert_eq!(err.position(), Some(0));
    assert_eq!(err.raw_text(), Some("null"));
}

#[test]
fn test_literal_null_text_matches_null_field() {
    let from_text = convert(Some(&["null"])).unwrap_err();
    let from_null = convert(Some(&[Option::<&str>::None])).unwrap_err();
    assert_eq!(from_text, from_null);
}

#[test]
fn test_all_present_optional_fields() {
    let record = vec![Some("4"), Some("5.5")];
    assert_eq!(convert(Some(&record)).unwrap(), "4.0,5.5");
}

#[test]
fn test_null_never_becomes_zero() {
    let record = vec![Some(0.0_f64), None];
    assert!(convert(Some(&record)).is_err());
}
