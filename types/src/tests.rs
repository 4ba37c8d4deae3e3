use async_graphql::{ScalarType, Value};
use validator::Validate;

use crate::{CharacterCreateInput, DateTime, PlaceCreateInput, not_blank};

#[test]
fn test_datetime_parses_rfc3339_with_offset() {
    let parsed = <DateTime as ScalarType>::parse(Value::String("1998-11-21T10:00:00+09:00".to_string()))
        .expect("valid RFC 3339 timestamp");

    // Normalized to UTC on the way in
    assert_eq!(
        parsed.to_value(),
        Value::String("1998-11-21T01:00:00+00:00".to_string())
    );
}

#[test]
fn test_datetime_rejects_non_timestamps() {
    assert!(<DateTime as ScalarType>::parse(Value::String("yesterday".to_string())).is_err());
    assert!(<DateTime as ScalarType>::parse(Value::String("1998-11-21".to_string())).is_err());
    assert!(<DateTime as ScalarType>::parse(Value::Number(1998.into())).is_err());
    assert!(<DateTime as ScalarType>::parse(Value::Null).is_err());
}

#[test]
fn test_not_blank() {
    assert!(not_blank("Link").is_ok());
    assert!(not_blank(" a ").is_ok());
    assert!(not_blank("").is_err());
    assert!(not_blank(" \t\n").is_err());
}

#[test]
fn test_character_input_reports_every_blank_field() {
    let input = CharacterCreateInput {
        name: "".to_string(),
        description: "   ".to_string(),
        gender: None,
        race: None,
    };

    let errors = input.validate().expect_err("blank fields must be rejected");
    let fields = errors.field_errors();

    assert!(fields.contains_key("name"));
    assert!(fields.contains_key("description"));
}

#[test]
fn test_optional_character_fields_are_not_validated() {
    let input = CharacterCreateInput {
        name: "Zelda".to_string(),
        description: "Princess of Hyrule".to_string(),
        gender: Some("".to_string()),
        race: None,
    };

    assert!(input.validate().is_ok());
}

#[test]
fn test_place_input_validation() {
    let valid = PlaceCreateInput {
        name: "Hyrule".to_string(),
        description: "A kingdom".to_string(),
    };
    assert!(valid.validate().is_ok());

    let blank = PlaceCreateInput {
        name: "Hyrule".to_string(),
        description: " ".to_string(),
    };
    let errors = blank.validate().expect_err("blank description must be rejected");
    assert_eq!(errors.field_errors().len(), 1);
}
