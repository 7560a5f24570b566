//! The four-operation topic facade.
//!
//! [`TopicApi`] is constructed once per broker and exposes `create_topic`,
//! `write_data`, `read_data` and `delete_topic`. The admin handle lives as
//! long as the facade; every write or read opens its own short-lived producer
//! or consumer. Each operation logs one confirmation line at info level after
//! it completes.

use log::info;
use std::time::Duration;

use crate::tablestream::error::TopicApiResult;
use crate::tablestream::kafka::admin::ADMIN_CLIENT_ID;
use crate::tablestream::kafka::{
    CommonKafkaConfig, ConsumerConfig, ProducerConfig, TopicAdmin, TopicConsumer, TopicProducer,
};
use crate::tablestream::serialization::JsonRowSerializer;
use crate::tablestream::table::{Row, Table};

/// Consumer group the read path joins when none is configured
pub const DEFAULT_CONSUMER_GROUP: &str = "topic-api-consumer-group";

/// Partition count for topics created through the facade
pub const DEFAULT_PARTITIONS: i32 = 1;

/// Replication factor for topics created through the facade
pub const DEFAULT_REPLICATION_FACTOR: i32 = 1;

/// Facade-level configuration
///
/// The group id is fixed at construction and never varies per call; reading
/// with a fresh group means building a new facade (or config) around it.
#[derive(Debug, Clone)]
pub struct TopicApiConfig {
    /// Kafka broker list
    pub brokers: String,
    /// Consumer group joined by `read_data`
    pub group_id: String,
    /// Idle wait after which the read loop treats the topic as exhausted
    pub read_idle_timeout: Duration,
    /// Upper bound on draining the producer queue after a write
    pub flush_timeout: Duration,
}

impl Default for TopicApiConfig {
    fn default() -> Self {
        Self {
            brokers: "localhost:9092".to_string(),
            group_id: DEFAULT_CONSUMER_GROUP.to_string(),
            read_idle_timeout: Duration::from_secs(5),
            flush_timeout: Duration::from_secs(5),
        }
    }
}

impl TopicApiConfig {
    /// Create a configuration for the given broker list
    pub fn new(brokers: impl Into<String>) -> Self {
        Self {
            brokers: brokers.into(),
            ..Default::default()
        }
    }

    /// Set the consumer group for the read path
    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = group_id.into();
        self
    }

    /// Set the read-path idle timeout
    pub fn read_idle_timeout(mut self, timeout: Duration) -> Self {
        self.read_idle_timeout = timeout;
        self
    }

    /// Set the write-path flush timeout
    pub fn flush_timeout(mut self, timeout: Duration) -> Self {
        self.flush_timeout = timeout;
        self
    }
}

/// Thin facade over a Kafka broker for tabular JSON topics
///
/// # Example
///
/// ```rust,no_run
/// use tablestream::{FieldValue, Row, Table, TopicApi};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = TopicApi::new("localhost:9092")?;
///
///     api.create_topic("Pokemon").await?;
///
///     let table = Table::from_rows(vec![Row::new()
///         .with_field("name", FieldValue::String("Pikachu".to_string()))
///         .with_field("type", FieldValue::String("Electric".to_string()))]);
///     api.write_data("Pokemon", &table).await?;
///
///     let read_back = api.read_data("Pokemon").await?;
///     assert_eq!(read_back.num_rows(), 1);
///
///     api.delete_topic("Pokemon").await?;
///     Ok(())
/// }
/// ```
pub struct TopicApi {
    config: TopicApiConfig,
    admin: TopicAdmin,
}

impl TopicApi {
    /// Create a facade against the given broker list
    pub fn new(brokers: impl Into<String>) -> TopicApiResult<Self> {
        Self::with_config(TopicApiConfig::new(brokers))
    }

    /// Create a facade from an explicit configuration
    pub fn with_config(config: TopicApiConfig) -> TopicApiResult<Self> {
        let admin = TopicAdmin::with_config(
            CommonKafkaConfig::new(&config.brokers).client_id(ADMIN_CLIENT_ID),
        )?;

        Ok(TopicApi { config, admin })
    }

    /// Broker list this facade talks to
    pub fn brokers(&self) -> &str {
        &self.config.brokers
    }

    /// The admin handle, for existence checks and manual topic management
    pub fn admin(&self) -> &TopicAdmin {
        &self.admin
    }

    /// Create a single-partition, replication-factor-1 topic
    ///
    /// Fails when the broker rejects the request, including when the topic
    /// already exists.
    pub async fn create_topic(&self, topic_name: &str) -> TopicApiResult<()> {
        self.admin
            .create_topic(topic_name, DEFAULT_PARTITIONS, DEFAULT_REPLICATION_FACTOR)
            .await?;

        info!("Topic '{}' created.", topic_name);
        Ok(())
    }

    /// Publish a table to the named topic, one JSON record per row
    ///
    /// Every row is an independent send; the call returns only after each
    /// delivery is acknowledged and the producer queue is flushed.
    pub async fn write_data(&self, topic_name: &str, table: &Table) -> TopicApiResult<()> {
        let producer: TopicProducer<Row, _> = TopicProducer::with_config(
            ProducerConfig::new(&self.config.brokers, topic_name),
            JsonRowSerializer,
        )?;

        for row in table {
            producer.send(row).await?;
        }
        producer.flush(self.config.flush_timeout)?;

        info!("Data written to topic '{}'.", topic_name);
        Ok(())
    }

    /// Read the named topic from the earliest offset into a table
    ///
    /// The consumer joins the configured group with auto-commit disabled and
    /// polls until it stays idle for the configured timeout. No offsets are
    /// committed, so a later read with the same group sees the same records.
    pub async fn read_data(&self, topic_name: &str) -> TopicApiResult<Table> {
        let consumer: TopicConsumer<Row, _> = TopicConsumer::with_config(
            ConsumerConfig::new(&self.config.brokers, &self.config.group_id),
            JsonRowSerializer,
        )?;
        consumer.subscribe(&[topic_name])?;

        let mut table = Table::new();
        while let Some(row) = consumer.poll(self.config.read_idle_timeout).await? {
            table.push_row(row);
        }

        info!("Data read from topic '{}'.", topic_name);
        Ok(table)
    }

    /// Delete the named topic
    ///
    /// Fails when the topic does not exist or the broker refuses deletion.
    pub async fn delete_topic(&self, topic_name: &str) -> TopicApiResult<()> {
        self.admin.delete_topic(topic_name).await?;

        info!("Topic '{}' deleted.", topic_name);
        Ok(())
    }
}
