use std::net::SocketAddr;

use crate::limits::{MAX_BOOKINGS, MAX_CLASSES};

/// Runtime settings, read once from `CLASSBOOK_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: String,
    pub port: u16,
    pub metrics_port: Option<u16>,
    pub max_classes: usize,
    pub max_bookings: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".into(),
            port: 9000,
            metrics_port: None,
            max_classes: MAX_CLASSES,
            max_bookings: MAX_BOOKINGS,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind: lookup("CLASSBOOK_BIND").unwrap_or(defaults.bind),
            port: lookup("CLASSBOOK_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            metrics_port: lookup("CLASSBOOK_METRICS_PORT").and_then(|s| s.parse().ok()),
            max_classes: lookup("CLASSBOOK_MAX_CLASSES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_classes),
            max_bookings: lookup("CLASSBOOK_MAX_BOOKINGS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_bookings),
        }
    }

    pub fn addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.bind, self.port).parse()
    }
}
