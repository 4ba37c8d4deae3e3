//! Configuration for the Hyrule catalog API server

use std::{
    net::{Ipv4Addr, SocketAddr},
    path::Path,
};

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::ConfigError;

/// API server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, smart_default::SmartDefault, Validate)]
pub struct ApiConfig {
    /// Address to bind the server to
    #[default(_code = "default_bind_address()")]
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// Enable GraphQL playground on `GET /graphql`
    #[serde(default)]
    pub playground_enabled: bool,

    /// Catalog database settings
    #[serde(default)]
    #[validate(nested)]
    pub database: DatabaseConfig,

    /// CORS allowed origins, or "*" for permissive
    #[default(_code = "default_cors_allowed_origins()")]
    #[serde(default = "default_cors_allowed_origins")]
    #[validate(length(min = 1))]
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, smart_default::SmartDefault, Validate)]
pub struct DatabaseConfig {
    /// Connection URL, SQLite or PostgreSQL
    #[default(_code = "default_database_url()")]
    #[serde(default = "default_database_url")]
    #[validate(length(min = 1))]
    pub url: String,

    #[default(10)]
    #[serde(default = "default_max_connections")]
    #[validate(range(min = 1))]
    pub max_connections: u32,
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, 4000))
}

fn default_database_url() -> String {
    "sqlite://data/hyrule.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_cors_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:3000".to_string(),
    ]
}

impl ApiConfig {
    /// Reads the YAML configuration file at `path`.
    ///
    /// Missing keys fall back to their defaults. The result is not validated yet.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path).map_err(ConfigError::Read)?;
        serde_yaml::from_reader(file).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Applies the process-level overrides on top of the loaded configuration.
    pub fn with_overrides(mut self, port: Option<u16>, database_url: Option<String>) -> Self {
        if let Some(port) = port {
            self.bind_address.set_port(port);
        }
        if let Some(url) = database_url {
            self.database.url = url;
        }
        self
    }

    /// Loads the configuration file (or the defaults), applies the overrides and validates.
    pub fn resolve(path: Option<&Path>, port: Option<u16>, database_url: Option<String>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                tracing::warn!("no configuration file specified; using default configuration");
                Self::default()
            }
        }
        .with_overrides(port, database_url);

        config.validate().map_err(ConfigError::Validation)?;
        Ok(config)
    }
}
