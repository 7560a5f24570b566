//! JSON codec for the dynamic row model.
//!
//! One row travels as one UTF-8 JSON object: keys are column names, values are
//! the JSON projections of the row's scalars. Dates and timestamps have no
//! native JSON representation and are coerced to formatted strings on encode;
//! on decode they come back as strings, which is the lossy half of the
//! coercion contract.

use crate::tablestream::serialization::{SerializationError, Serializer};
use crate::tablestream::table::{FieldValue, Row};

/// Convert a JSON value into a table scalar
///
/// Whole numbers become `Integer`, all other numbers `Float`. Numbers outside
/// the `i64`/`f64` range fall back to their string rendering. Arrays and
/// objects are not part of the flat row model and are rejected.
pub fn json_to_field_value(
    json_value: &serde_json::Value,
) -> Result<FieldValue, SerializationError> {
    match json_value {
        serde_json::Value::String(s) => Ok(FieldValue::String(s.clone())),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(FieldValue::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(FieldValue::Float(f))
            } else {
                Ok(FieldValue::String(n.to_string()))
            }
        }
        serde_json::Value::Bool(b) => Ok(FieldValue::Boolean(*b)),
        serde_json::Value::Null => Ok(FieldValue::Null),
        serde_json::Value::Array(_) => Err(SerializationError::unsupported_type(
            "JSON arrays are not flat row scalars",
        )),
        serde_json::Value::Object(_) => Err(SerializationError::unsupported_type(
            "nested JSON objects are not flat row scalars",
        )),
    }
}

/// Convert a table scalar into a JSON value
pub fn field_value_to_json(
    field_value: &FieldValue,
) -> Result<serde_json::Value, SerializationError> {
    match field_value {
        FieldValue::String(s) => Ok(serde_json::Value::String(s.clone())),
        FieldValue::Integer(i) => Ok(serde_json::Value::Number(serde_json::Number::from(*i))),
        FieldValue::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .ok_or_else(|| {
                SerializationError::serialization_failed(format!(
                    "non-finite float cannot be JSON-encoded: {}",
                    f
                ))
            }),
        FieldValue::Boolean(b) => Ok(serde_json::Value::Bool(*b)),
        FieldValue::Null => Ok(serde_json::Value::Null),
        FieldValue::Date(d) => Ok(serde_json::Value::String(d.format("%Y-%m-%d").to_string())),
        FieldValue::Timestamp(ts) => Ok(serde_json::Value::String(
            ts.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
        )),
    }
}

/// Serializer mapping one [`Row`] to one JSON object payload
#[derive(Clone, Default)]
pub struct JsonRowSerializer;

impl Serializer<Row> for JsonRowSerializer {
    fn serialize(&self, row: &Row) -> Result<Vec<u8>, SerializationError> {
        let mut object = serde_json::Map::with_capacity(row.field_count());
        for (name, value) in row.fields() {
            object.insert(name.clone(), field_value_to_json(value)?);
        }

        serde_json::to_vec(&serde_json::Value::Object(object)).map_err(|e| {
            SerializationError::serialization_failed(format!("JSON encoding failed: {}", e))
        })
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<Row, SerializationError> {
        let value: serde_json::Value = serde_json::from_slice(bytes).map_err(|e| {
            SerializationError::deserialization_failed(format!("JSON decoding failed: {}", e))
        })?;

        match value {
            serde_json::Value::Object(object) => {
                let mut row = Row::new();
                for (name, json_value) in &object {
                    row.set_field(name, json_to_field_value(json_value)?);
                }
                Ok(row)
            }
            other => Err(SerializationError::deserialization_failed(format!(
                "expected a JSON object payload, got: {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_row_round_trips_through_json() {
        let row = Row::new()
            .with_field("name", FieldValue::String("Pikachu".to_string()))
            .with_field("type", FieldValue::String("Electric".to_string()))
            .with_field("hp", FieldValue::Integer(35))
            .with_field("ratio", FieldValue::Float(0.5))
            .with_field("legendary", FieldValue::Boolean(false))
            .with_field("notes", FieldValue::Null);

        let serializer = JsonRowSerializer;
        let bytes = serializer.serialize(&row).unwrap();
        let decoded = serializer.deserialize(&bytes).unwrap();

        assert_eq!(decoded, row);
    }

    #[test]
    fn test_payload_is_a_json_object_with_column_keys() {
        let row = Row::new()
            .with_field("name", FieldValue::String("Pikachu".to_string()))
            .with_field("hp", FieldValue::Integer(35));

        let bytes = JsonRowSerializer.serialize(&row).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["name"], serde_json::json!("Pikachu"));
        assert_eq!(value["hp"], serde_json::json!(35));
    }

    #[test]
    fn test_whole_numbers_decode_as_integers() {
        let decoded = JsonRowSerializer.deserialize(br#"{"count": 3, "share": 2.5}"#).unwrap();
        assert_eq!(decoded.get("count"), Some(&FieldValue::Integer(3)));
        assert_eq!(decoded.get("share"), Some(&FieldValue::Float(2.5)));
    }

    #[test]
    fn test_date_and_timestamp_coerce_to_strings() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let ts = date.and_hms_milli_opt(9, 30, 0, 250).unwrap();
        let row = Row::new()
            .with_field("day", FieldValue::Date(date))
            .with_field("at", FieldValue::Timestamp(ts));

        let bytes = JsonRowSerializer.serialize(&row).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["day"], serde_json::json!("2024-03-15"));
        assert_eq!(value["at"], serde_json::json!("2024-03-15 09:30:00.250"));
    }

    #[test]
    fn test_non_finite_float_fails_encoding() {
        let row = Row::new().with_field("bad", FieldValue::Float(f64::NAN));
        let result = JsonRowSerializer.serialize(&row);
        assert!(matches!(
            result,
            Err(SerializationError::SerializationFailed(_))
        ));
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        let result = JsonRowSerializer.deserialize(b"[1, 2, 3]");
        match result {
            Err(SerializationError::DeserializationFailed(msg)) => {
                assert!(msg.contains("array"));
            }
            other => panic!("expected deserialization failure, got: {:?}", other),
        }
    }

    #[test]
    fn test_nested_values_are_rejected() {
        let result = JsonRowSerializer.deserialize(br#"{"inner": {"a": 1}}"#);
        assert!(matches!(
            result,
            Err(SerializationError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let result = JsonRowSerializer.deserialize(b"{not json");
        assert!(matches!(
            result,
            Err(SerializationError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn test_integer_beyond_i64_range_decodes_as_float() {
        let decoded = JsonRowSerializer
            .deserialize(br#"{"big": 18446744073709551615}"#)
            .unwrap();
        match decoded.get("big") {
            Some(FieldValue::Float(f)) => assert!(*f > 9.2e18),
            other => panic!("expected float fallback, got: {:?}", other),
        }
    }
}
