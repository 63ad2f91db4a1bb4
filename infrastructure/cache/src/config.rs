use std::time::Duration;

use business::domain::errors::StoreError;

const DEFAULT_CONNECT_RETRIES: usize = 5;
const DEFAULT_RETRY_FACTOR_MS: u64 = 100;

/// Connection settings for the Redis cart store.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub url: String,
    /// Retries after the first failed connection attempt.
    pub connect_retries: usize,
    /// Base delay of the exponential backoff between connection attempts.
    pub retry_factor_ms: u64,
    pub connection_timeout: Duration,
    pub response_timeout: Duration,
}

impl CacheConfig {
    /// Builds a configuration from a `host:port` address or a `redis://` URL.
    pub fn from_address(address: &str) -> Result<Self, StoreError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(StoreError::configuration_invalid(
                "redis address must not be empty",
            ));
        }

        let url = if address.contains("://") {
            address.to_string()
        } else {
            format!("redis://{}", address)
        };

        // Rejects malformed URLs before any connection is attempted
        redis::Client::open(url.as_str())
            .map_err(|e| StoreError::configuration_invalid(format!("redis address: {}", e)))?;

        Ok(Self {
            url,
            connect_retries: DEFAULT_CONNECT_RETRIES,
            retry_factor_ms: DEFAULT_RETRY_FACTOR_MS,
            connection_timeout: Duration::from_secs(5),
            response_timeout: Duration::from_secs(5),
        })
    }
}
