pub mod error;
pub mod kafka;
pub mod serialization;
pub mod table;
pub mod topic_api;

// Re-export the facade types
pub use error::{TopicApiError, TopicApiResult};
pub use table::{FieldValue, Row, Table};
pub use topic_api::{TopicApi, TopicApiConfig};
