use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 5000;

/// Deployment environment. Only `development` mounts the API docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            _ => Environment::Production,
        }
    }

    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (the process env in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            host: match lookup("HOST") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .context("HOST must be an IPv4 or IPv6 address")?,
                None => DEFAULT_HOST,
            },
            port: match lookup("PORT") {
                Some(raw) => raw.trim().parse().context("PORT must be a valid number")?,
                None => DEFAULT_PORT,
            },
            environment: lookup("APP_ENV")
                .map(|raw| Environment::parse(&raw))
                .unwrap_or(Environment::Production),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            environment: Environment::Production,
        }
    }
}
