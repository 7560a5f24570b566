//! Typed producer bound to a single topic.

use log::{debug, error};
use rdkafka::producer::future_producer::Delivery;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::util::Timeout;
use std::marker::PhantomData;
use std::time::Duration;

use crate::tablestream::error::TopicApiResult;
use crate::tablestream::kafka::client_config_builder::ClientConfigBuilder;
use crate::tablestream::kafka::producer_config::ProducerConfig;
use crate::tablestream::serialization::Serializer;

/// A wrapper around rdkafka's FutureProducer that serializes one payload type
/// and publishes to one topic
///
/// Records are sent without a key; the topics this crate manages have a single
/// partition, so keyed partitioning buys nothing.
pub struct TopicProducer<T, S: Serializer<T>> {
    producer: FutureProducer,
    topic: String,
    delivery_timeout: Duration,
    serializer: S,
    _marker: PhantomData<T>,
}

impl<T, S: Serializer<T>> TopicProducer<T, S> {
    /// Create a producer with default configuration
    pub fn new(brokers: &str, topic: &str, serializer: S) -> TopicApiResult<Self> {
        Self::with_config(ProducerConfig::new(brokers, topic), serializer)
    }

    /// Create a producer from an explicit configuration
    pub fn with_config(config: ProducerConfig, serializer: S) -> TopicApiResult<Self> {
        let mut client_config = ClientConfigBuilder::from_common(&config.common).build();

        client_config
            .set(
                "message.timeout.ms",
                config.message_timeout.as_millis().to_string(),
            )
            .set("linger.ms", config.linger.as_millis().to_string())
            .set("compression.type", config.compression_type.as_str())
            .set("acks", config.acks.as_str());

        let producer: FutureProducer = client_config.create()?;

        debug!(
            "Created producer for topic '{}' on {}",
            config.topic, config.common.brokers
        );

        Ok(TopicProducer {
            producer,
            topic: config.topic,
            delivery_timeout: config.delivery_timeout,
            serializer,
            _marker: PhantomData,
        })
    }

    /// Serialize one value and publish it, awaiting the delivery report
    pub async fn send(&self, value: &T) -> TopicApiResult<Delivery> {
        let payload = self.serializer.serialize(value)?;

        let record: FutureRecord<'_, (), Vec<u8>> =
            FutureRecord::to(&self.topic).payload(&payload);

        match self
            .producer
            .send(record, Timeout::After(self.delivery_timeout))
            .await
        {
            Ok(delivery) => {
                debug!(
                    "Message sent to topic '{}' partition {} offset {}",
                    self.topic, delivery.partition, delivery.offset
                );
                Ok(delivery)
            }
            Err((err, _owned_message)) => {
                error!("Failed to send message to topic '{}': {}", self.topic, err);
                Err(err.into())
            }
        }
    }

    /// Flush any queued messages, waiting up to `timeout`
    pub fn flush(&self, timeout: Duration) -> TopicApiResult<()> {
        self.producer.flush(Timeout::After(timeout))?;
        Ok(())
    }

    /// Topic this producer publishes to
    pub fn topic(&self) -> &str {
        &self.topic
    }
}
