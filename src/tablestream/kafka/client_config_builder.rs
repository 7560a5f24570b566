use super::common_config::CommonKafkaConfig;
use rdkafka::config::ClientConfig;
use std::collections::HashMap;
use std::time::Duration;

/// Shared utility for building Kafka client configurations
///
/// The admin, producer and consumer all funnel through this builder, so
/// librdkafka property names live in one place.
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new client config builder
    pub fn new() -> Self {
        Self {
            config: ClientConfig::new(),
        }
    }

    /// Start from the shared configuration fields
    pub fn from_common(common: &CommonKafkaConfig) -> Self {
        Self::new()
            .bootstrap_servers(&common.brokers)
            .client_id(common.client_id.as_deref())
            .request_timeout(common.request_timeout)
            .retry_backoff(common.retry_backoff)
            .custom_properties(&common.custom_config)
    }

    /// Set bootstrap servers (brokers)
    pub fn bootstrap_servers(mut self, brokers: &str) -> Self {
        self.config.set("bootstrap.servers", brokers);
        self
    }

    /// Set client ID if provided
    pub fn client_id(mut self, client_id: Option<&str>) -> Self {
        if let Some(id) = client_id {
            self.config.set("client.id", id);
        }
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config
            .set("request.timeout.ms", timeout.as_millis().to_string());
        self
    }

    /// Set retry backoff
    pub fn retry_backoff(mut self, backoff: Duration) -> Self {
        self.config
            .set("retry.backoff.ms", backoff.as_millis().to_string());
        self
    }

    /// Add custom configuration properties
    pub fn custom_properties(mut self, custom_config: &HashMap<String, String>) -> Self {
        for (key, value) in custom_config {
            self.config.set(key, value);
        }
        self
    }

    /// Add a single custom property
    pub fn custom_property(mut self, key: &str, value: &str) -> Self {
        self.config.set(key, value);
        self
    }

    /// Build the final ClientConfig
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_properties() {
        let config = ClientConfigBuilder::new()
            .bootstrap_servers("localhost:9092")
            .client_id(Some("test-client"))
            .request_timeout(Duration::from_secs(30))
            .retry_backoff(Duration::from_millis(100))
            .custom_property("security.protocol", "SSL")
            .build();

        assert_eq!(config.get("bootstrap.servers"), Some("localhost:9092"));
        assert_eq!(config.get("client.id"), Some("test-client"));
        assert_eq!(config.get("request.timeout.ms"), Some("30000"));
        assert_eq!(config.get("retry.backoff.ms"), Some("100"));
        assert_eq!(config.get("security.protocol"), Some("SSL"));
    }

    #[test]
    fn test_builder_skips_absent_client_id() {
        let config = ClientConfigBuilder::new()
            .bootstrap_servers("localhost:9092")
            .client_id(None)
            .build();

        assert_eq!(config.get("client.id"), None);
    }

    #[test]
    fn test_builder_from_common() {
        let common = CommonKafkaConfig::new("broker1:9092")
            .client_id("topic-api")
            .custom_property("socket.timeout.ms", "10000");

        let config = ClientConfigBuilder::from_common(&common).build();

        assert_eq!(config.get("bootstrap.servers"), Some("broker1:9092"));
        assert_eq!(config.get("client.id"), Some("topic-api"));
        assert_eq!(config.get("socket.timeout.ms"), Some("10000"));
    }
}
