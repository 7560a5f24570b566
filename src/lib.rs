//! # tablestream
//!
//! A thin, typed facade over Apache Kafka for working with tabular data: create a
//! topic, publish a table row-by-row as JSON records, read the records back into a
//! table, and delete the topic. All broker-side concerns (metadata management,
//! delivery acknowledgment, consumer group coordination, offset tracking) are
//! delegated to `rdkafka`.
//!
//! ## Features
//!
//! - **Four-operation façade**: `create_topic`, `write_data`, `read_data`,
//!   `delete_topic` on a single [`TopicApi`] handle
//! - **Tabular model**: [`Table`], [`Row`] and [`FieldValue`] with JSON-native
//!   scalars plus date/timestamp coercion
//! - **Typed clients**: producer and consumer wrappers generic over a
//!   [`Serializer`] seam
//! - **Asynchronous I/O**: built on `rdkafka` & `tokio`; operations await every
//!   acknowledgment before returning
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tablestream::{FieldValue, Row, Table, TopicApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = TopicApi::new("localhost:9092")?;
//!
//!     api.create_topic("Pokemon").await?;
//!
//!     let mut table = Table::new();
//!     table.push_row(
//!         Row::new()
//!             .with_field("name", FieldValue::String("Pikachu".to_string()))
//!             .with_field("type", FieldValue::String("Electric".to_string())),
//!     );
//!     api.write_data("Pokemon", &table).await?;
//!
//!     let read_back = api.read_data("Pokemon").await?;
//!     println!("{}", read_back);
//!
//!     api.delete_topic("Pokemon").await?;
//!     Ok(())
//! }
//! ```

pub mod tablestream;

// Re-export the main API at crate root for easy access
pub use tablestream::error::{TopicApiError, TopicApiResult};
pub use tablestream::kafka::{
    // Clients
    TopicAdmin,
    TopicConsumer,
    TopicProducer,

    // Configuration
    AckMode,
    ClientConfigBuilder,
    CommonKafkaConfig,
    CompressionType,
    ConsumerConfig,
    OffsetReset,
    ProducerConfig,
};
pub use tablestream::serialization::{
    JsonRowSerializer, JsonSerializer, SerializationError, Serializer,
};
pub use tablestream::table::{FieldValue, Row, Table};
pub use tablestream::topic_api::{TopicApi, TopicApiConfig};
