//! Admin client for Kafka topic management
//!
//! Wraps the rdkafka admin client for topic creation, deletion and existence
//! checks. Per-topic rejections from the broker (duplicate creation, deleting
//! an unknown topic) are surfaced as errors, never swallowed.

use log::{debug, error};
use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use rdkafka::error::KafkaError;
use std::time::Duration;

use crate::tablestream::error::TopicApiResult;
use crate::tablestream::kafka::client_config_builder::ClientConfigBuilder;
use crate::tablestream::kafka::common_config::CommonKafkaConfig;

/// Client ID reported to the broker by the admin connection
pub const ADMIN_CLIENT_ID: &str = "topic-api";

const ADMIN_OP_TIMEOUT: Duration = Duration::from_secs(30);
const METADATA_TIMEOUT: Duration = Duration::from_secs(10);

/// Admin client for managing Kafka topics
pub struct TopicAdmin {
    admin: AdminClient<DefaultClientContext>,
}

impl TopicAdmin {
    /// Create a new admin client against the given broker list
    pub fn new(brokers: &str) -> TopicApiResult<Self> {
        Self::with_config(CommonKafkaConfig::new(brokers).client_id(ADMIN_CLIENT_ID))
    }

    /// Create a new admin client from shared configuration
    pub fn with_config(common: CommonKafkaConfig) -> TopicApiResult<Self> {
        let admin: AdminClient<DefaultClientContext> =
            ClientConfigBuilder::from_common(&common).build().create()?;

        debug!("Admin client connected to brokers: {}", common.brokers);
        Ok(Self { admin })
    }

    /// Request creation of a topic with the given layout
    ///
    /// Any per-topic rejection, including an already existing topic, is an
    /// error; the broker's verdict is authoritative.
    pub async fn create_topic(
        &self,
        topic_name: &str,
        partitions: i32,
        replication_factor: i32,
    ) -> TopicApiResult<()> {
        let new_topic = NewTopic::new(
            topic_name,
            partitions,
            TopicReplication::Fixed(replication_factor),
        );

        let admin_opts = AdminOptions::new()
            .operation_timeout(Some(ADMIN_OP_TIMEOUT))
            .request_timeout(Some(ADMIN_OP_TIMEOUT));

        let results = self.admin.create_topics(&[new_topic], &admin_opts).await?;

        for result in results {
            match result {
                Ok(topic) => {
                    debug!("Created topic '{}' with {} partitions", topic, partitions);
                }
                Err((topic, code)) => {
                    error!("Broker rejected creation of topic '{}': {}", topic, code);
                    return Err(KafkaError::AdminOp(code).into());
                }
            }
        }

        Ok(())
    }

    /// Request deletion of a topic
    ///
    /// Deleting a topic the broker does not know is an error.
    pub async fn delete_topic(&self, topic_name: &str) -> TopicApiResult<()> {
        let admin_opts = AdminOptions::new()
            .operation_timeout(Some(ADMIN_OP_TIMEOUT))
            .request_timeout(Some(ADMIN_OP_TIMEOUT));

        let results = self.admin.delete_topics(&[topic_name], &admin_opts).await?;

        for result in results {
            match result {
                Ok(topic) => {
                    debug!("Deleted topic '{}'", topic);
                }
                Err((topic, code)) => {
                    error!("Broker rejected deletion of topic '{}': {}", topic, code);
                    return Err(KafkaError::AdminOp(code).into());
                }
            }
        }

        Ok(())
    }

    /// Check whether the broker knows a topic
    ///
    /// An unknown topic can still appear in the metadata response as an error
    /// entry with no partitions, so presence alone is not enough.
    pub async fn topic_exists(&self, topic_name: &str) -> TopicApiResult<bool> {
        let metadata = self
            .admin
            .inner()
            .fetch_metadata(Some(topic_name), METADATA_TIMEOUT)?;

        Ok(metadata
            .topics()
            .iter()
            .any(|topic| topic.name() == topic_name && !topic.partitions().is_empty()))
    }
}
