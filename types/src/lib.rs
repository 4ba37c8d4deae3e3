//! GraphQL type definitions for the Hyrule catalog API
//!
//! This crate contains pure GraphQL type definitions that can be reused
//! by clients without depending on the full API server implementation.

use async_graphql::{InputObject, InputValueError, Scalar, ScalarType, SimpleObject, Value};
use chrono::Utc;
use validator::{Validate, ValidationError};

/// Timestamp scalar in RFC 3339 format
///
/// Declared as part of the public schema for clients that share type definitions,
/// even though no catalog operation currently returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTime(pub chrono::DateTime<Utc>);

#[Scalar(name = "DateTime")]
impl ScalarType for DateTime {
    fn parse(value: Value) -> async_graphql::InputValueResult<Self> {
        match value {
            Value::String(s) => chrono::DateTime::parse_from_rfc3339(&s)
                .map(|dt| DateTime(dt.with_timezone(&Utc)))
                .map_err(|e| InputValueError::custom(format!("Invalid DateTime '{s}': {e}"))),
            _ => Err(InputValueError::custom("DateTime must be an RFC 3339 string")),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.to_rfc3339())
    }
}

/// Playable or non-playable character of the catalog
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Character {
    /// Unique identifier assigned by the store
    pub id: i32,
    /// Display name of the character
    pub name: String,
    /// Free-form description
    pub description: String,
    pub gender: Option<String>,
    pub race: Option<String>,
}

/// Location of the game world
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "Places")]
pub struct Place {
    /// Unique identifier assigned by the store
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Boss encounter, read-only through the API
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "Bosses")]
pub struct Boss {
    /// Unique identifier assigned by the store
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Input for creating a character or replacing all of its fields
#[derive(InputObject, Validate, Clone, Debug)]
pub struct CharacterCreateInput {
    /// Display name, must contain a non-whitespace character
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    /// Description, must contain a non-whitespace character
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    pub gender: Option<String>,
    pub race: Option<String>,
}

/// Input for creating a place
#[derive(InputObject, Validate, Clone, Debug)]
pub struct PlaceCreateInput {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
}

/// Rejects empty strings and strings made only of whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests;
