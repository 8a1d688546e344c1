// Tracing subscriber setup
use tracing_subscriber::{fmt, EnvFilter};

const LOG_ENV: &str = "DASHBOARD_LOG";

/// Reads filter directives from `DASHBOARD_LOG`, defaulting to `info`.
pub fn init() {
    fmt().with_env_filter(env_filter()).init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}
