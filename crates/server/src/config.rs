//! Environment-derived server configuration.

use std::net::{IpAddr, Ipv4Addr};

use tracing::warn;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Read `HOST` and `BACKEND_PORT` (falling back to `PORT`) from the
    /// environment. Malformed values are logged and replaced by defaults.
    pub fn from_env() -> Self {
        let host = match std::env::var("HOST") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "unparseable HOST, using {DEFAULT_HOST}");
                DEFAULT_HOST
            }),
            Err(_) => DEFAULT_HOST,
        };

        let port = ["BACKEND_PORT", "PORT"]
            .into_iter()
            .find_map(|key| {
                let raw = std::env::var(key).ok()?;
                match raw.parse::<u16>() {
                    Ok(port) => Some(port),
                    Err(_) => {
                        warn!(key, value = %raw, "unparseable port variable, ignoring");
                        None
                    }
                }
            })
            .unwrap_or(DEFAULT_PORT);

        Self { host, port }
    }
}
