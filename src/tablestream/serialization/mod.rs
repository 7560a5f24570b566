//! Serialization seam between the tabular model and Kafka message payloads.
//!
//! The producer and consumer wrappers are payload-agnostic: they move bytes and
//! delegate encoding to a [`Serializer`]. Two implementations live here:
//! [`JsonSerializer`] for any serde type and [`JsonRowSerializer`] for the
//! dynamic [`crate::Row`] model the facade ships over the wire.

pub mod error;
pub mod json;

pub use error::SerializationError;
pub use json::{field_value_to_json, json_to_field_value, JsonRowSerializer};

use serde::{Deserialize, Serialize};

/// Trait for serializers that convert between payload values and bytes
pub trait Serializer<T> {
    /// Serialize a value to bytes
    fn serialize(&self, value: &T) -> Result<Vec<u8>, SerializationError>;

    /// Deserialize bytes to a value
    fn deserialize(&self, bytes: &[u8]) -> Result<T, SerializationError>;
}

/// Serialize a struct to JSON bytes
pub fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    serde_json::to_vec(value).map_err(|e| {
        SerializationError::serialization_failed(format!("JSON encoding failed: {}", e))
    })
}

/// Deserialize JSON bytes to a struct
pub fn from_json<T: for<'de> Deserialize<'de>>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(|e| {
        SerializationError::deserialization_failed(format!("JSON decoding failed: {}", e))
    })
}

/// JSON serializer for any serde-representable payload
#[derive(Clone, Default)]
pub struct JsonSerializer;

impl<T> Serializer<T> for JsonSerializer
where
    T: Serialize + for<'de> Deserialize<'de>,
{
    fn serialize(&self, value: &T) -> Result<Vec<u8>, SerializationError> {
        to_json(value)
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<T, SerializationError> {
        from_json(bytes)
    }
}
