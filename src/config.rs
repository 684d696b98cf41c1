use figment::{Figment, providers::Env};
use serde::Deserialize;
use std::sync::LazyLock;

/// Process configuration, loaded once from `GATEWAY_*` environment
/// variables. Every field has a default so a bare environment still boots;
/// an empty `api_token` leaves protected routes answering 500 until the
/// deployment is fixed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shared bearer secret for protected routes (`GATEWAY_API_TOKEN`).
    pub api_token: String,
    /// SQLite connection URL (`GATEWAY_DATABASE_URL`).
    pub database_url: String,
    /// Listen address for the HTTP server (`GATEWAY_LISTEN_ADDR`).
    pub listen_addr: String,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub loglevel: String,
    /// Worker threads for the tokio runtime (`GATEWAY_WORKER_THREADS`).
    pub worker_threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            database_url: "sqlite:gateway.db".to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
            loglevel: "info".to_string(),
            worker_threads: 2,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new().merge(Env::prefixed("GATEWAY_")).extract()
    }
}

pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::load().expect("invalid GATEWAY_* configuration"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_field() {
        let cfg = Config::default();
        assert!(cfg.api_token.is_empty());
        assert_eq!(cfg.listen_addr, "0.0.0.0:8080");
        assert_eq!(cfg.worker_threads, 2);
    }
}
