//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Store Configuration ===
    /// Redis connection URL.
    #[serde(default = "default_redis_url")]
    pub redis_url: String,

    /// Upper bound for a single liveness probe, in milliseconds.
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,

    // === Server Configuration ===
    /// HTTP server port for the status endpoints.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_probe_timeout_ms() -> u64 {
    2000
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.redis_url.is_empty() {
            return Err("REDIS_URL must not be empty".to_string());
        }

        let parsed = url::Url::parse(&self.redis_url)
            .map_err(|e| format!("REDIS_URL is not a valid URL: {e}"))?;

        match parsed.scheme() {
            "redis" | "rediss" | "redis+unix" | "unix" => {}
            other => {
                return Err(format!("REDIS_URL has unsupported scheme '{other}'"));
            }
        }

        if self.probe_timeout_ms == 0 {
            return Err("PROBE_TIMEOUT_MS must be greater than zero".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_config() -> Config {
        Config {
            redis_url: default_redis_url(),
            probe_timeout_ms: default_probe_timeout_ms(),
            port: default_port(),
            rust_log: default_log_level(),
        }
    }

    #[test]
    fn default_values_are_sensible() {
        assert_eq!(default_redis_url(), "redis://localhost:6379");
        assert_eq!(default_probe_timeout_ms(), 2000);
        assert_eq!(default_port(), 8080);
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_url() {
        let config = Config {
            redis_url: "".to_string(),
            ..test_config()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_redis_scheme() {
        let config = Config {
            redis_url: "http://localhost:6379".to_string(),
            ..test_config()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_tls_scheme() {
        let config = Config {
            redis_url: "rediss://cache.internal:6380".to_string(),
            ..test_config()
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_probe_timeout() {
        let config = Config {
            probe_timeout_ms: 0,
            ..test_config()
        };

        assert!(config.validate().is_err());
    }
}
