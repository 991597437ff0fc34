//! Key-value store handle and liveness probe.

pub mod client;
pub mod mock;

pub use client::RedisStore;
pub use mock::MockStore;

use crate::config::Config;
use crate::error::{ProbeError, Result};

/// Handle to the key-value store backing the health report.
///
/// Dispatches to a real Redis client in production and to an in-memory
/// mock in tests. Cloning is cheap; clones share the same underlying
/// connection state.
#[derive(Debug, Clone)]
pub enum StoreHandle {
    /// Real Redis connection.
    Redis(RedisStore),
    /// In-memory mock for tests.
    Mock(MockStore),
}

impl StoreHandle {
    /// Build a handle from the configured Redis URL.
    ///
    /// Only parses the URL; no connection is made until the first probe,
    /// so the service starts even when the store is down.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::Redis(RedisStore::new(config)?))
    }

    /// Wrap a mock store.
    pub fn mock(store: MockStore) -> Self {
        Self::Mock(store)
    }

    /// Probe the store for liveness with a single PING round-trip.
    pub async fn ping(&self) -> Result<(), ProbeError> {
        match self {
            Self::Redis(store) => store.ping().await,
            Self::Mock(store) => store.ping().await,
        }
    }

    /// The store URL with any password redacted, safe for logs.
    pub fn redacted_url(&self) -> String {
        match self {
            Self::Redis(store) => store.redacted_url(),
            Self::Mock(_) => "mock://".to_string(),
        }
    }
}
