//! Server settings sourced from the environment.

use std::env;
use std::net::SocketAddr;

/// Environment variable naming the listen address.
const BIND_ADDR_VAR: &str = "SIPY_BIND_ADDR";

/// Default listen address when the environment does not override it.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Settings needed to construct the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,
}

impl ServerSettings {
    /// Read settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error when `SIPY_BIND_ADDR` is set but does not parse as a
    /// socket address.
    pub fn from_env() -> std::io::Result<Self> {
        let raw = env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = raw.parse().map_err(|e| {
            std::io::Error::other(format!("invalid {BIND_ADDR_VAR} value {raw:?}: {e}"))
        })?;
        Ok(Self { bind_addr })
    }
}
