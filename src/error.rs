//! Unified error types for the status service.

use thiserror::Error;

/// Unified error type for the status service.
///
/// Every variant here is fatal at startup or surfaced by the CLI; nothing
/// in this enum escapes a request handler as an HTTP error.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// The configured store URL could not be parsed.
    #[error("invalid redis url: {0}")]
    InvalidRedisUrl(#[source] redis::RedisError),

    /// Store probe error.
    #[error("probe error: {0}")]
    Probe(#[from] ProbeError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Liveness probe failures against the key-value store.
///
/// Every variant maps to `disconnected` in the health report; the health
/// endpoint catches these locally and never converts them into a non-200
/// response.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The store could not be reached or the command failed.
    #[error("store unreachable: {0}")]
    Unreachable(#[from] redis::RedisError),

    /// The probe did not complete within its configured bound.
    #[error("probe timed out after {timeout_ms}ms")]
    Timeout {
        /// The configured bound in milliseconds.
        timeout_ms: u64,
    },

    /// The store answered the ping with something other than PONG.
    #[error("unexpected ping reply: {0}")]
    UnexpectedReply(String),
}

/// Convenient Result type alias.
///
/// Defaults to [`ServiceError`]; store internals override the error
/// parameter with [`ProbeError`] where a probe failure is recoverable.
pub type Result<T, E = ServiceError> = std::result::Result<T, E>;
