//! Environment-driven server configuration.

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Address the server binds when `CLIENTES_HOST` is unset.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port the server binds when `CLIENTES_PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CLIENTES_HOST inválido: {0}")]
    InvalidHost(String),

    #[error("CLIENTES_PORT inválido: {0}")]
    InvalidPort(String),
}

/// Server configuration read from the environment.
///
/// - `CLIENTES_HOST` / `CLIENTES_PORT` - bind address
/// - `CLIENTES_FILE` - path of the JSON document; when unset the store
///   is in-memory and nothing survives a restart
/// - `VIACEP_BASE_URL` - override of the CEP service base URL, mainly
///   for pointing the server at a local stub
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: IpAddr,
    pub port: u16,
    pub file: Option<PathBuf>,
    pub viacep_base_url: Option<String>,
}

impl ApiConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host_raw = env::var("CLIENTES_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let host = host_raw
            .parse()
            .map_err(|_| ConfigError::InvalidHost(host_raw.clone()))?;

        let port = match env::var("CLIENTES_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            port,
            file: env::var("CLIENTES_FILE").ok().map(PathBuf::from),
            viacep_base_url: env::var("VIACEP_BASE_URL").ok(),
        })
    }

    /// The socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.parse().unwrap_or(IpAddr::from([127, 0, 0, 1])),
            port: DEFAULT_PORT,
            file: None,
            viacep_base_url: None,
        }
    }
}
