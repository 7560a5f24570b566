//! Error types for serialization

/// Serialization error type
#[derive(Debug, Clone, PartialEq)]
pub enum SerializationError {
    SerializationFailed(String),
    DeserializationFailed(String),
    UnsupportedType(String),
}

impl SerializationError {
    pub fn serialization_failed(msg: impl Into<String>) -> Self {
        SerializationError::SerializationFailed(msg.into())
    }

    pub fn deserialization_failed(msg: impl Into<String>) -> Self {
        SerializationError::DeserializationFailed(msg.into())
    }

    pub fn unsupported_type(msg: impl Into<String>) -> Self {
        SerializationError::UnsupportedType(msg.into())
    }
}

impl std::fmt::Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerializationError::SerializationFailed(msg) => {
                write!(f, "Serialization failed: {}", msg)
            }
            SerializationError::DeserializationFailed(msg) => {
                write!(f, "Deserialization failed: {}", msg)
            }
            SerializationError::UnsupportedType(msg) => {
                write!(f, "Unsupported type: {}", msg)
            }
        }
    }
}

impl std::error::Error for SerializationError {}
