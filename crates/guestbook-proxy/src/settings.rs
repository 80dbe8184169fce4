use std::net::SocketAddr;
use std::time::Duration;

pub const UPSTREAM_URL_VAR: &str = "GUESTBOOK_UPSTREAM_URL";
pub const ADDR_VAR: &str = "GUESTBOOK_PROXY_ADDR";
pub const TIMEOUT_VAR: &str = "GUESTBOOK_PROXY_TIMEOUT_SECS";

const DEFAULT_ADDR: &str = "127.0.0.1:8787";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxySettings {
    pub upstream_url: String,
    pub addr: SocketAddr,
    pub timeout: Duration,
}

impl ProxySettings {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let upstream_url = lookup(UPSTREAM_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| eyre::eyre!("{UPSTREAM_URL_VAR} must be set"))?;

        let addr = lookup(ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| eyre::eyre!("invalid {ADDR_VAR}: {e}"))?;

        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| eyre::eyre!("invalid {TIMEOUT_VAR}: {e}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            upstream_url,
            addr,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
