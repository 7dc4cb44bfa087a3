//! Server configuration read from the environment.

use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding the widget HTML; searched for from the working directory when unset.
    pub assets_dir: Option<PathBuf>,
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            assets_dir: None,
            log_json: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source, falling back to
    /// the defaults for anything missing or unparsable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("STOREFRONT_HOST")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.host),
            port: lookup("STOREFRONT_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            assets_dir: lookup("STOREFRONT_ASSETS_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            log_json: lookup("STOREFRONT_LOG_JSON")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.log_json),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}
