//! Mock store for testing without a Redis instance.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::error::ProbeError;

/// In-memory stand-in for the Redis store.
///
/// Reachability can be flipped at runtime to drive the health report
/// through both of its states, and every probe is counted so tests can
/// assert that nothing caches the result.
#[derive(Debug, Clone)]
pub struct MockStore {
    reachable: Arc<AtomicBool>,
    latency_ms: u64,
    probes: Arc<AtomicU64>,
}

impl MockStore {
    /// A mock store that answers every probe.
    pub fn healthy() -> Self {
        Self {
            reachable: Arc::new(AtomicBool::new(true)),
            latency_ms: 0,
            probes: Arc::new(AtomicU64::new(0)),
        }
    }

    /// A mock store that fails every probe.
    pub fn unreachable() -> Self {
        let store = Self::healthy();
        store.set_reachable(false);
        store
    }

    /// Add simulated probe latency.
    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Flip reachability at runtime; clones observe the change.
    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }

    /// How many probes have been issued against this store.
    pub fn probe_count(&self) -> u64 {
        self.probes.load(Ordering::SeqCst)
    }

    /// Probe the mock, honoring the configured latency and reachability.
    pub async fn ping(&self) -> Result<(), ProbeError> {
        self.probes.fetch_add(1, Ordering::SeqCst);

        if self.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.latency_ms)).await;
        }

        if self.reachable.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(ProbeError::Unreachable(redis::RedisError::from((
                redis::ErrorKind::IoError,
                "mock store unreachable",
            ))))
        }
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::healthy()
    }
}
