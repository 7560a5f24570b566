//! Error-path coverage that runs without a broker.

mod common;

use rdkafka::error::KafkaError;
use rdkafka::types::RDKafkaErrorCode;
use tablestream::{
    FieldValue, Row, SerializationError, Serializer, TopicApiError, TopicProducer,
};

/// Serializer that fails on purpose, for driving the error paths
struct FailingSerializer;

impl Serializer<Row> for FailingSerializer {
    fn serialize(&self, _value: &Row) -> Result<Vec<u8>, SerializationError> {
        Err(SerializationError::serialization_failed(
            "intentional failure for testing",
        ))
    }

    fn deserialize(&self, _bytes: &[u8]) -> Result<Row, SerializationError> {
        Err(SerializationError::deserialization_failed(
            "intentional failure for testing",
        ))
    }
}

#[tokio::test]
async fn test_send_surfaces_serializer_failure_before_any_broker_work() {
    common::init_logger();

    // Construction and the failing serialize never touch the network, so no
    // broker is needed here.
    let producer: TopicProducer<Row, FailingSerializer> =
        TopicProducer::new(common::BROKERS, "error-handling-topic", FailingSerializer)
            .expect("producer construction should not require a broker");

    let row = Row::new().with_field("name", FieldValue::String("Pikachu".to_string()));
    let result = producer.send(&row).await;

    match result {
        Err(err) => {
            assert!(err.is_serialization());
            assert!(!err.is_broker());
            assert!(err.to_string().contains("intentional failure"));
        }
        Ok(_) => panic!("send with a failing serializer must not succeed"),
    }
}

#[test]
fn test_per_topic_admin_rejection_is_a_broker_error() {
    let err: TopicApiError = KafkaError::AdminOp(RDKafkaErrorCode::TopicAlreadyExists).into();

    assert!(err.is_broker());
    assert!(!err.is_serialization());
    assert!(err.to_string().contains("Broker operation failed"));
}

#[test]
fn test_unknown_topic_rejection_is_a_broker_error() {
    let err: TopicApiError =
        KafkaError::AdminOp(RDKafkaErrorCode::UnknownTopicOrPartition).into();

    assert!(err.is_broker());
}

#[test]
fn test_serialization_detail_propagates_into_the_facade_error() {
    let err: TopicApiError =
        SerializationError::deserialization_failed("expected a JSON object payload").into();

    assert!(err.is_serialization());
    assert!(err.to_string().contains("expected a JSON object payload"));
}
