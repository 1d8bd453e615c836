use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// "text" or "json"
    pub log_format: String,
    pub body_limit_bytes: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
                log_format: "text".to_string(),
                body_limit_bytes: 64 * 1024,
            },
            metrics: MetricsConfig {
                enabled: true,
                endpoint: "/metrics".to_string(),
            },
        }
    }
}

/// Load configuration from defaults, the optional TOML file at `path` and
/// `INFRA_COST__*` environment variables, in increasing precedence
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let defaults = Config::default();

    let config = config::Config::builder()
        .set_default("server.host", defaults.server.host)?
        .set_default("server.port", defaults.server.port as i64)?
        .set_default("server.log_format", defaults.server.log_format)?
        .set_default("server.body_limit_bytes", defaults.server.body_limit_bytes as i64)?
        .set_default("metrics.enabled", defaults.metrics.enabled)?
        .set_default("metrics.endpoint", defaults.metrics.endpoint)?
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("INFRA_COST")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.host.parse::<IpAddr>().is_err() {
        anyhow::bail!("Server host '{}' is not a valid IP address", cfg.server.host);
    }

    if cfg.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    if cfg.server.body_limit_bytes == 0 {
        anyhow::bail!("Request body limit must be greater than 0");
    }

    match cfg.server.log_format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Invalid log format '{}', expected 'text' or 'json'", other),
    }

    if cfg.metrics.enabled && !cfg.metrics.endpoint.starts_with('/') {
        anyhow::bail!(
            "Metrics endpoint '{}' must start with '/'",
            cfg.metrics.endpoint
        );
    }

    Ok(())
}
