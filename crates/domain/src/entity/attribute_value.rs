//! Typed attribute values attached to entities.

use serde::{Deserialize, Serialize};

/// A single typed attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Json(serde_json::Value),
}

impl AttributeValue {
    /// View the value as a string slice, if it is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// View the value as an unsigned bitfield, if it is a non-negative
    /// integer that fits in 32 bits.
    #[must_use]
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Int(value) => u32::try_from(*value).ok(),
            _ => None,
        }
    }

    /// View the value as a list of strings, if it is a JSON array.
    ///
    /// Elements that are not strings are skipped.
    #[must_use]
    pub fn as_str_list(&self) -> Option<Vec<&str>> {
        match self {
            Self::Json(serde_json::Value::Array(items)) => Some(
                items
                    .iter()
                    .filter_map(serde_json::Value::as_str)
                    .collect(),
            ),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&[&str]> for AttributeValue {
    fn from(values: &[&str]) -> Self {
        Self::Json(serde_json::Value::Array(
            values
                .iter()
                .map(|value| serde_json::Value::String((*value).to_string()))
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_string_variant_as_plain_string() {
        let val = AttributeValue::from("temperature");
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, "\"temperature\"");
    }

    #[test]
    fn should_serialize_int_variant_as_number() {
        let val = AttributeValue::Int(42);
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn should_deserialize_json_array_as_json_variant() {
        let json = r#"["brightness", "color_temp"]"#;
        let val: AttributeValue = serde_json::from_str(json).unwrap();
        assert_eq!(val.as_str_list(), Some(vec!["brightness", "color_temp"]));
    }

    #[test]
    fn should_read_integer_as_bitfield() {
        assert_eq!(AttributeValue::Int(15).as_u32(), Some(15));
        assert_eq!(AttributeValue::Int(-1).as_u32(), None);
        assert_eq!(AttributeValue::Bool(true).as_u32(), None);
    }

    #[test]
    fn should_skip_non_string_elements_in_lists() {
        let val: AttributeValue = serde_json::from_str(r#"["xy", 3, null]"#).unwrap();
        assert_eq!(val.as_str_list(), Some(vec!["xy"]));
    }

    #[test]
    fn should_return_none_for_mismatched_views() {
        assert_eq!(AttributeValue::Int(42).as_str(), None);
        assert_eq!(AttributeValue::from("on").as_str_list(), None);
    }
}
