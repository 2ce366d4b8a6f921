//! Host configuration parsed from environment variables.
//!
//! Only the listen address lives here. Leptos reads its own `LEPTOS_*`
//! variables (site root, output name) through `get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Errors produced while reading host configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is not a valid TCP port number.
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),

    /// `BIND_ADDR` is not an IP address.
    #[error("invalid BIND_ADDR: {0:?}")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub bind: SocketAddr,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = std::env::var("BIND_ADDR").ok();
        let port = std::env::var("PORT").ok();
        Self::from_values(bind_addr.as_deref(), port.as_deref())
    }

    fn from_values(bind_addr: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let ip = parse_bind_addr(bind_addr)?;
        let port = parse_port(port)?;
        Ok(Self { bind: SocketAddr::new(ip, port) })
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let raw = raw.map_or(DEFAULT_BIND_ADDR, str::trim);
    raw.parse::<IpAddr>()
        .map_err(|_| ConfigError::InvalidBindAddr(raw.to_owned()))
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}
