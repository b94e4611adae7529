//! Configuration Module
//!
//! Loads the gateway configuration from environment variables once at startup.
//! The resulting [`Config`] is read-only for the lifetime of the process and is
//! handed to the handlers explicitly through [`crate::api::AppState`].

use std::env;
use std::fmt;

use thiserror::Error;

/// Default name of the remote procedure that purges expired records.
pub const DEFAULT_PURGE_FUNCTION: &str = "cleanup_expired_data";

// == Config Error Enum ==
/// Errors raised while reading configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Gateway configuration parameters.
///
/// Secrets are redacted from the `Debug` output.
#[derive(Clone)]
pub struct Config {
    /// Expected value of the `X-Cleanup-Key` header
    pub cleanup_secret: String,
    /// Base URL of the hosted data store
    pub store_url: String,
    /// Service credential used to call the data store
    pub service_key: String,
    /// Name of the purge remote procedure
    pub purge_function: String,
    /// HTTP server port
    pub server_port: u16,
    /// Per-call timeout for the purge RPC, in seconds
    pub store_timeout: u64,
    /// Interval for the in-process purge schedule; `None` disables it
    pub purge_interval: Option<u64>,
}

impl Config {
    /// Creates a Config with the required values and defaults for the rest.
    pub fn new(
        cleanup_secret: impl Into<String>,
        store_url: impl Into<String>,
        service_key: impl Into<String>,
    ) -> Self {
        Self {
            cleanup_secret: cleanup_secret.into(),
            store_url: store_url.into(),
            service_key: service_key.into(),
            purge_function: DEFAULT_PURGE_FUNCTION.to_string(),
            server_port: 3000,
            store_timeout: 30,
            purge_interval: None,
        }
    }

    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CLEANUP_SECRET_KEY` - Expected trigger secret (required)
    /// - `SUPABASE_URL` - Data store base URL (required)
    /// - `SUPABASE_SERVICE_ROLE_KEY` - Data store service key (required)
    /// - `PURGE_FUNCTION` - RPC name (default: `cleanup_expired_data`)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `STORE_TIMEOUT_SECS` - RPC timeout in seconds (default: 30)
    /// - `PURGE_INTERVAL_SECS` - In-process schedule interval (default: off)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let mut config = Self::new(
            required("CLEANUP_SECRET_KEY")?,
            required("SUPABASE_URL")?,
            required("SUPABASE_SERVICE_ROLE_KEY")?,
        );

        if let Some(function) = lookup("PURGE_FUNCTION").filter(|v| !v.is_empty()) {
            config.purge_function = function;
        }
        if let Some(port) = parse_var(&lookup, "SERVER_PORT")? {
            config.server_port = port;
        }
        if let Some(timeout) = parse_var(&lookup, "STORE_TIMEOUT_SECS")? {
            config.store_timeout = timeout;
        }
        config.purge_interval = parse_var::<u64, _>(&lookup, "PURGE_INTERVAL_SECS")?
            .filter(|secs| *secs > 0);

        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) if value.is_empty() => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("cleanup_secret", &"<redacted>")
            .field("store_url", &self.store_url)
            .field("service_key", &"<redacted>")
            .field("purge_function", &self.purge_function)
            .field("server_port", &self.server_port)
            .field("store_timeout", &self.store_timeout)
            .field("purge_interval", &self.purge_interval)
            .finish()
    }
}
