//! Server configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional TOML
//! file, then `TUNEFEED_` environment variables (`__` separates nested keys,
//! e.g. `TUNEFEED_CASSANDRA__KEYSPACE`).

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;
use tunefeed_core::{Consistency, Result, TunefeedError};

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "TUNEFEED_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "tunefeed.toml";

static KEYSPACE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]{0,47}$").expect("keyspace pattern is valid"));

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub cassandra: CassandraConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Cassandra,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CassandraConfig {
    pub nodes: Vec<String>,
    pub keyspace: String,
    pub write_consistency: Consistency,
    /// Single-timeline reads only; listing uses the session default
    pub read_consistency: Consistency,
    pub connection_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Used when `RUST_LOG` is not set
    pub filter: String,
}

impl AppConfig {
    /// Load from the file named by `TUNEFEED_CONFIG` (default `tunefeed.toml`,
    /// optional) and the process environment
    pub fn load() -> Result<Self> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let builder = Self::defaults()?
            .add_source(File::new(&path, FileFormat::Toml).required(false))
            .add_source(Self::environment());

        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Config::builder()
            .set_default("server.bind_address", "127.0.0.1:8080")
            .and_then(|b| b.set_default("server.request_timeout_secs", 10_i64))
            .and_then(|b| b.set_default("storage.backend", "cassandra"))
            .and_then(|b| b.set_default("cassandra.nodes", vec!["localhost:9042"]))
            .and_then(|b| b.set_default("cassandra.keyspace", "example"))
            .and_then(|b| {
                b.set_default(
                    "cassandra.write_consistency",
                    Consistency::DEFAULT_WRITE.to_string(),
                )
            })
            .and_then(|b| {
                b.set_default(
                    "cassandra.read_consistency",
                    Consistency::DEFAULT_READ.to_string(),
                )
            })
            .and_then(|b| b.set_default("cassandra.connection_timeout_secs", 5_i64))
            .and_then(|b| b.set_default("cassandra.request_timeout_secs", 5_i64))
            .and_then(|b| b.set_default("log.filter", "info"))
            .map_err(|e| TunefeedError::Config(e.to_string()))
    }

    fn environment() -> Environment {
        Environment::with_prefix("TUNEFEED")
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("cassandra.nodes")
            .try_parsing(true)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config: AppConfig = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| TunefeedError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;

        if self.server.request_timeout_secs == 0 {
            return Err(TunefeedError::Config(
                "server.request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.storage.backend == StorageBackend::Cassandra {
            self.cassandra.validate()?;
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server.bind_address.parse().map_err(|e| {
            TunefeedError::Config(format!(
                "invalid server.bind_address {:?}: {}",
                self.server.bind_address, e
            ))
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_secs)
    }
}

impl CassandraConfig {
    fn validate(&self) -> Result<()> {
        if self.nodes.is_empty() || self.nodes.iter().any(|n| n.trim().is_empty()) {
            return Err(TunefeedError::Config(
                "cassandra.nodes must list at least one host:port".to_string(),
            ));
        }

        if !KEYSPACE_NAME.is_match(&self.keyspace) {
            return Err(TunefeedError::Config(format!(
                "invalid cassandra.keyspace {:?}",
                self.keyspace
            )));
        }

        if self.connection_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err(TunefeedError::Config(
                "cassandra timeouts must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
