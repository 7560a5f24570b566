//! Typed consumer with bounded polling.

use futures::StreamExt;
use log::{debug, error};
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::message::Message;
use std::marker::PhantomData;
use std::time::Duration;
use tokio::time;

use crate::tablestream::error::TopicApiResult;
use crate::tablestream::kafka::client_config_builder::ClientConfigBuilder;
use crate::tablestream::kafka::consumer_config::ConsumerConfig;
use crate::tablestream::serialization::{SerializationError, Serializer};

/// A wrapper around rdkafka's StreamConsumer that deserializes one payload type
///
/// `poll` reports idle deadlines as `Ok(None)` rather than an error: on the
/// read path an uneventful wait is the natural end of iteration, not a
/// failure.
pub struct TopicConsumer<T, S: Serializer<T>> {
    consumer: StreamConsumer,
    serializer: S,
    _marker: PhantomData<T>,
}

impl<T, S: Serializer<T>> TopicConsumer<T, S> {
    /// Create a consumer with default configuration
    pub fn new(brokers: &str, group_id: &str, serializer: S) -> TopicApiResult<Self> {
        Self::with_config(ConsumerConfig::new(brokers, group_id), serializer)
    }

    /// Create a consumer from an explicit configuration
    pub fn with_config(config: ConsumerConfig, serializer: S) -> TopicApiResult<Self> {
        let mut client_config = ClientConfigBuilder::from_common(&config.common).build();

        client_config
            .set("group.id", &config.group_id)
            .set("auto.offset.reset", config.auto_offset_reset.as_str())
            .set("enable.auto.commit", config.enable_auto_commit.to_string())
            .set(
                "auto.commit.interval.ms",
                config.auto_commit_interval.as_millis().to_string(),
            )
            .set(
                "session.timeout.ms",
                config.session_timeout.as_millis().to_string(),
            )
            .set(
                "heartbeat.interval.ms",
                config.heartbeat_interval.as_millis().to_string(),
            );

        let consumer: StreamConsumer = client_config.create()?;

        debug!(
            "Created consumer in group '{}' on {}",
            config.group_id, config.common.brokers
        );

        Ok(TopicConsumer {
            consumer,
            serializer,
            _marker: PhantomData,
        })
    }

    /// Subscribe to the given topics
    pub fn subscribe(&self, topics: &[&str]) -> TopicApiResult<()> {
        self.consumer.subscribe(topics)?;
        debug!("Subscribed to topics: {:?}", topics);
        Ok(())
    }

    /// Await the next message, bounded by `timeout`
    ///
    /// Returns `Ok(Some(value))` for a decoded message and `Ok(None)` when the
    /// consumer stayed idle for the whole timeout. Broker failures and
    /// undecodable payloads are errors.
    pub async fn poll(&self, timeout: Duration) -> TopicApiResult<Option<T>> {
        let mut stream = self.consumer.stream();

        match time::timeout(timeout, stream.next()).await {
            Ok(Some(Ok(msg))) => {
                let payload = msg.payload().ok_or_else(|| {
                    SerializationError::deserialization_failed(format!(
                        "message at topic '{}' partition {} offset {} has no payload",
                        msg.topic(),
                        msg.partition(),
                        msg.offset()
                    ))
                })?;

                match self.serializer.deserialize(payload) {
                    Ok(value) => {
                        debug!(
                            "Message received from topic '{}' partition {} offset {} ({} bytes)",
                            msg.topic(),
                            msg.partition(),
                            msg.offset(),
                            payload.len()
                        );
                        Ok(Some(value))
                    }
                    Err(e) => {
                        error!(
                            "Failed to deserialize message from topic '{}' partition {} offset {}: {}",
                            msg.topic(),
                            msg.partition(),
                            msg.offset(),
                            e
                        );
                        Err(e.into())
                    }
                }
            }
            Ok(Some(Err(e))) => {
                error!("Consumer error while polling: {}", e);
                Err(e.into())
            }
            Ok(None) => {
                debug!("Consumer stream closed");
                Ok(None)
            }
            Err(_elapsed) => {
                debug!("No message within {:?}, consumer is idle", timeout);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tablestream::serialization::JsonRowSerializer;
    use crate::tablestream::table::Row;

    #[tokio::test]
    async fn test_consumer_construction_is_lazy() {
        let consumer: TopicApiResult<TopicConsumer<Row, _>> =
            TopicConsumer::new("localhost:9092", "unit-test-group", JsonRowSerializer);
        assert!(consumer.is_ok());
    }
}
