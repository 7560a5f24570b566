//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::net::TcpStream;
use uuid::Uuid;

pub const BROKERS: &str = "localhost:9092";

/// Check whether a Kafka broker is reachable on the default port
///
/// Broker-dependent tests return early when nothing is listening, so the
/// suite stays green on machines without a local Kafka.
pub fn is_kafka_running() -> bool {
    TcpStream::connect(BROKERS).is_ok()
}

/// Initialize env_logger once per test binary
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Unique topic name so concurrent or repeated runs never collide
pub fn generate_topic(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

/// Unique consumer group id for a fresh read of a topic
pub fn generate_group_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}
