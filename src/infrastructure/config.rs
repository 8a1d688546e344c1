// Configuration loading - server settings and the dashboard seed
use crate::infrastructure::seed::{default_seed, SeedConfig};
use anyhow::Context;
use serde::Deserialize;
use std::net::SocketAddr;

const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default = "default_seed")]
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.bind
            .parse()
            .with_context(|| format!("Invalid server.bind address `{}`", self.bind))
    }
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

/// Loads `config/dashboard.*` when present, overlaid by environment variables
/// such as `DASHBOARD_SERVER__BIND`.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
