/*!
# Error Types for the Topic Facade

Centralized error handling for the four topic operations. Every failure the
crate can surface falls into one of two kinds: the broker (or the client
library speaking to it) rejected an operation, or a row could not be encoded
or decoded as JSON.
*/

use crate::tablestream::serialization::SerializationError;
use rdkafka::error::KafkaError;
use thiserror::Error;

/// Error type covering every fallible operation on [`crate::TopicApi`]
#[derive(Debug, Error)]
pub enum TopicApiError {
    /// Any failure surfaced by the broker connection or a metadata operation
    #[error("Broker operation failed: {0}")]
    Broker(#[from] KafkaError),

    /// A row or message could not be encoded or decoded as JSON
    #[error("Serialization failed: {0}")]
    Serialization(#[from] SerializationError),
}

/// Convenience result type for topic facade operations
pub type TopicApiResult<T> = Result<T, TopicApiError>;

impl TopicApiError {
    /// True when the failure originated at the broker or transport layer
    pub fn is_broker(&self) -> bool {
        matches!(self, TopicApiError::Broker(_))
    }

    /// True when the failure was a JSON encode/decode problem
    pub fn is_serialization(&self) -> bool {
        matches!(self, TopicApiError::Serialization(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_predicates() {
        let broker = TopicApiError::Broker(KafkaError::Canceled);
        assert!(broker.is_broker());
        assert!(!broker.is_serialization());

        let ser = TopicApiError::Serialization(SerializationError::serialization_failed(
            "bad row",
        ));
        assert!(ser.is_serialization());
        assert!(!ser.is_broker());
    }

    #[test]
    fn test_error_display_includes_cause() {
        let err = TopicApiError::Serialization(SerializationError::deserialization_failed(
            "not a JSON object",
        ));
        let rendered = err.to_string();
        assert!(rendered.contains("Serialization failed"));
        assert!(rendered.contains("not a JSON object"));
    }
}
