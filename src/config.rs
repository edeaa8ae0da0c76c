// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Configuration is validated eagerly and failures are treated as
//! deployment errors rather than recoverable runtime conditions.

use anyhow::Result;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads a required environment variable.
///
/// # Behavior
/// - Fails fast if the variable is missing
/// - Produces a clear, human-readable error message
/// - Intended for startup-time configuration validation
///
/// Missing configuration is treated as a deployment error,
/// not a recoverable runtime condition.
macro_rules! required_env {
    // ---
    ($key:literal) => {
        std::env::var($key)
            .map_err(|_| anyhow::anyhow!(concat!("Missing required configuration: ", $key)))?
    };
}

/// Reads an optional environment variable and attempts to parse it.
///
/// If the variable is missing or cannot be parsed, the provided
/// default value is used. This macro is appropriate for non-critical
/// tuning parameters where fallback behavior is acceptable.
macro_rules! optional_env_parse {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        std::env::var($key)
            .ok()
            .and_then(|v| v.parse::<$ty>().ok())
            .unwrap_or($default)
    };
}

#[cfg(test)]
/// Asserts that a configuration constructor fails due to a missing
/// required environment variable.
///
/// This macro is intended for config unit tests only and enforces
/// consistent error messages across failure cases.
macro_rules! assert_missing_config {
    // ---
    ($expr:expr, $key:literal) => {{
        let err = $expr.expect_err("expected configuration error");
        assert!(
            err.to_string()
                .contains(concat!("Missing required configuration: ", $key)),
            "unexpected error: {err}"
        );
    }};
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
/// All required configuration is validated eagerly during initialization.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: server::ServerConfig,
    pub store: store::StoreConfig,
    pub reset: reset::ResetConfig,
}

impl AppConfig {
    /// Loads and validates all application configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if any required configuration is missing or invalid.
    /// This function is intended to be called exactly once at startup.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            server: server::ServerConfig::from_env()?,
            store: store::StoreConfig::from_env()?,
            reset: reset::ResetConfig::from_env()?,
        })
    }
}

// ============================================================
// Server configuration
// ============================================================

mod server {
    // ---
    use super::*;

    /// HTTP server configuration.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        /// Bind endpoint for the HTTP listener. Defaults to 127.0.0.1:8080.
        pub bind_addr: String,

        /// When true, 500 responses carry the underlying store error text the
        /// way the service historically leaked it. Off by default: callers
        /// get the generic per-operation message and the detail goes to the
        /// server log only.
        pub expose_store_errors: bool,
    }

    impl ServerConfig {
        /// Builds a [`ServerConfig`] from environment variables.
        pub fn from_env() -> Result<Self> {
            // ---
            let bind_addr =
                optional_env_parse!("GAME_STATS_BIND_ADDR", String, "127.0.0.1:8080".to_string());
            let expose_store_errors =
                optional_env_parse!("GAME_STATS_EXPOSE_STORE_ERRORS", bool, false);

            Ok(Self {
                bind_addr,
                expose_store_errors,
            })
        }
    }
}
pub use server::ServerConfig;

// ============================================================
// Counter store configuration
// ============================================================

mod store {
    // ---
    use super::*;

    /// Which counter-store backend to run against.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum StoreKind {
        /// Redis hashes, the production backend.
        Redis,
        /// Process-local maps, for development and hermetic tests.
        Memory,
    }

    /// Counter-store configuration.
    ///
    /// The Redis URL is only required when the Redis backend is selected.
    #[derive(Debug, Clone)]
    pub struct StoreConfig {
        pub kind: StoreKind,

        /// Redis connection string; `None` for the in-memory backend.
        pub redis_url: Option<String>,
    }

    impl StoreConfig {
        /// Builds a [`StoreConfig`] from environment variables.
        ///
        /// # Errors
        /// Returns an error for an unsupported `GAME_STATS_STORE` value, or
        /// when the Redis backend is selected without a URL.
        pub fn from_env() -> Result<Self> {
            // ---
            let kind = optional_env_parse!("GAME_STATS_STORE", String, "redis".to_string());

            match kind.as_str() {
                "redis" => Ok(Self {
                    kind: StoreKind::Redis,
                    redis_url: Some(required_env!("GAME_STATS_REDIS_URL")),
                }),
                "memory" => Ok(Self {
                    kind: StoreKind::Memory,
                    redis_url: None,
                }),
                other => Err(anyhow::anyhow!(
                    "Unsupported GAME_STATS_STORE value: {other} (expected \"redis\" or \"memory\")"
                )),
            }
        }
    }
}
pub use store::{StoreConfig, StoreKind};

// ============================================================
// Reset job configuration
// ============================================================

mod reset {
    // ---
    use super::*;

    /// Daily reset job configuration.
    ///
    /// The schedule itself is fixed at 00:00 UTC; deployments that trigger
    /// the reset externally disable the in-process task.
    #[derive(Debug, Clone)]
    pub struct ResetConfig {
        /// Whether the in-process daily scheduler runs. Defaults to true.
        pub enabled: bool,
    }

    impl ResetConfig {
        /// Builds a [`ResetConfig`] from environment variables.
        pub fn from_env() -> Result<Self> {
            // ---
            let enabled = optional_env_parse!("GAME_STATS_RESET_ENABLED", bool, true);

            Ok(Self { enabled })
        }
    }
}
pub use reset::ResetConfig;

// ============================================================
// Tests
// ============================================================
