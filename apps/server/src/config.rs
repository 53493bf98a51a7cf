//! Static server configuration
//!
//! Values are layered, later sources overriding earlier ones:
//! 1. built-in defaults
//! 2. a configuration file (`config.toml`/`config.yaml`/`config.json` in the
//!    working directory, or an explicit path)
//! 3. environment variables prefixed `CLINIC__`, using `__` between sections,
//!    e.g. `CLINIC__SERVER__PORT=9090` or `CLINIC__STORAGE__IDS__PATIENTS=1`
//!
//! A `.env` file is loaded into the process environment first, if present.

use serde::Deserialize;
use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::Path;
use validator::Validate;

const FILE_ROTATIONS: &[&str] = &["daily", "hourly", "minutely", "never"];

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    #[validate(nested)]
    pub server: ServerConfig,

    #[validate(nested)]
    pub logging: LoggingConfig,

    #[validate(nested)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    #[validate(length(min = 1))]
    pub host: String,

    #[validate(range(min = 1))]
    pub port: u16,

    /// Allowed CORS origins; empty disables CORS headers
    pub cors_origins: Vec<String>,

    #[validate(range(min = 1024))]
    pub max_request_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: Vec::new(),
            max_request_body_size: 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level when `RUST_LOG` is unset
    #[validate(length(min = 1))]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,

    pub file_enabled: bool,
    pub file_directory: String,
    pub file_prefix: String,

    /// One of `daily`, `hourly`, `minutely`, `never`
    pub file_rotation: String,

    #[validate(length(min = 1))]
    pub service_name: String,

    /// Defaults to the crate version
    pub service_version: Option<String>,

    pub deployment_environment: String,

    pub opentelemetry_enabled: bool,
    pub otlp_endpoint: String,

    #[validate(range(min = 1))]
    pub otlp_timeout_seconds: u64,

    #[validate(range(min = 0.0, max = 1.0))]
    pub trace_sample_ratio: f64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file_enabled: false,
            file_directory: "logs".to_string(),
            file_prefix: "clinic".to_string(),
            file_rotation: "daily".to_string(),
            service_name: "clinic-server".to_string(),
            service_version: None,
            deployment_environment: "development".to_string(),
            opentelemetry_enabled: false,
            otlp_endpoint: "http://localhost:4317".to_string(),
            otlp_timeout_seconds: 10,
            trace_sample_ratio: 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct StorageConfig {
    /// Populate each collection with a few sample records at startup
    pub seed_sample_data: bool,

    #[validate(nested)]
    pub ids: FirstIds,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            ids: FirstIds::default(),
        }
    }
}

/// First identifier handed out by each repository's allocator
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct FirstIds {
    #[validate(range(min = 1))]
    pub persons: u64,
    #[validate(range(min = 1))]
    pub patients: u64,
    #[validate(range(min = 1))]
    pub doctors: u64,
    #[validate(range(min = 1))]
    pub appointments: u64,
    #[validate(range(min = 1))]
    pub billings: u64,
    #[validate(range(min = 1))]
    pub medical_records: u64,
    #[validate(range(min = 1))]
    pub prescriptions: u64,
}

impl Default for FirstIds {
    fn default() -> Self {
        Self {
            persons: 1,
            patients: 1000,
            doctors: 1,
            appointments: 1,
            billings: 1,
            medical_records: 1,
            prescriptions: 1,
        }
    }
}

impl Config {
    /// Load configuration from `config.*` in the working directory and the
    /// environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading the file at `path` instead of the default
    /// lookup when given. An explicit file must exist.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let builder = config::Config::builder();
        let builder = match path {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name("config").required(false)),
        };

        builder
            .add_source(
                config::Environment::with_prefix("CLINIC")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Check semantic constraints that deserialization cannot express
    pub fn validate(&self) -> Result<(), String> {
        Validate::validate(self).map_err(|e| e.to_string())?;

        if !FILE_ROTATIONS.contains(&self.logging.file_rotation.as_str()) {
            return Err(format!(
                "logging.file_rotation must be one of {}, got '{}'",
                FILE_ROTATIONS.join(", "),
                self.logging.file_rotation
            ));
        }

        if self.logging.file_enabled && self.logging.file_directory.trim().is_empty() {
            return Err("logging.file_directory is required when file logging is enabled".into());
        }

        Ok(())
    }

    /// Resolve the listen address from `server.host` and `server.port`
    pub fn socket_addr(&self) -> io::Result<SocketAddr> {
        (self.server.host.as_str(), self.server.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("no address found for host '{}'", self.server.host),
                )
            })
    }
}
