//! Kafka client wrappers: admin, producer and consumer plus their
//! configuration types. All three funnel their librdkafka properties through
//! [`ClientConfigBuilder`].

pub mod admin;
pub mod client_config_builder;
pub mod common_config;
pub mod consumer;
pub mod consumer_config;
pub mod producer;
pub mod producer_config;

pub use admin::{TopicAdmin, ADMIN_CLIENT_ID};
pub use client_config_builder::ClientConfigBuilder;
pub use common_config::CommonKafkaConfig;
pub use consumer::TopicConsumer;
pub use consumer_config::{ConsumerConfig, OffsetReset};
pub use producer::TopicProducer;
pub use producer_config::{AckMode, CompressionType, ProducerConfig};
