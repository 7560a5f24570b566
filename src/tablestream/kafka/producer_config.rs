use super::common_config::CommonKafkaConfig;
use std::time::Duration;

/// Configuration for a topic-bound producer
///
/// Rows are published one record at a time, so batching stays off by default
/// (linger 0) and every record waits for full acknowledgment (acks all).
#[derive(Debug, Clone)]
pub struct ProducerConfig {
    /// Common configuration shared with the other clients
    pub common: CommonKafkaConfig,
    /// Topic this producer publishes to
    pub topic: String,
    /// Message timeout enforced by the client library
    pub message_timeout: Duration,
    /// Upper bound on waiting for one delivery report
    pub delivery_timeout: Duration,
    /// Linger time before sending
    pub linger: Duration,
    /// Compression type
    pub compression_type: CompressionType,
    /// Ack mode
    pub acks: AckMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionType {
    None,
    Gzip,
    Snappy,
    Lz4,
    Zstd,
}

impl CompressionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompressionType::None => "none",
            CompressionType::Gzip => "gzip",
            CompressionType::Snappy => "snappy",
            CompressionType::Lz4 => "lz4",
            CompressionType::Zstd => "zstd",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckMode {
    /// No acknowledgment required
    None,
    /// Leader acknowledgment only
    Leader,
    /// All in-sync replicas must acknowledge
    All,
}

impl AckMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AckMode::None => "0",
            AckMode::Leader => "1",
            AckMode::All => "all",
        }
    }
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            common: CommonKafkaConfig::default(),
            topic: "default-topic".to_string(),
            message_timeout: Duration::from_secs(30),
            delivery_timeout: Duration::from_secs(120),
            linger: Duration::from_millis(0),
            compression_type: CompressionType::None,
            acks: AckMode::All,
        }
    }
}

impl ProducerConfig {
    /// Create a new config with brokers and topic
    pub fn new(brokers: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            common: CommonKafkaConfig::new(brokers),
            topic: topic.into(),
            ..Default::default()
        }
    }

    /// Set client ID
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.common = self.common.client_id(client_id);
        self
    }

    /// Set message timeout
    pub fn message_timeout(mut self, timeout: Duration) -> Self {
        self.message_timeout = timeout;
        self
    }

    /// Set delivery report wait bound
    pub fn delivery_timeout(mut self, timeout: Duration) -> Self {
        self.delivery_timeout = timeout;
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.common = self.common.request_timeout(timeout);
        self
    }

    /// Set linger time
    pub fn linger(mut self, linger: Duration) -> Self {
        self.linger = linger;
        self
    }

    /// Set compression type
    pub fn compression(mut self, compression: CompressionType) -> Self {
        self.compression_type = compression;
        self
    }

    /// Set acknowledgment mode
    pub fn acks(mut self, acks: AckMode) -> Self {
        self.acks = acks;
        self
    }

    /// Add custom configuration property
    pub fn custom_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.common = self.common.custom_property(key, value);
        self
    }
}
