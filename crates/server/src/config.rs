use shared_types::{AppConfig, BackendConfig, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `.env` and `config.toml`, apply environment overrides and store the
/// result globally. Safe to call multiple times; only the first call has
/// effect.
///
/// A missing or unparseable file falls back to defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();

        let mut config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                tracing::warn!(path = CONFIG_PATH, error = %e, "config file not found, using defaults");
                AppConfig::default()
            }
        };
        apply_env_overrides(&mut config.backend, |key| std::env::var(key).ok());
        tracing::info!(
            backend = %config.backend.base_url,
            timeout_secs = config.backend.timeout_secs,
            telemetry = config.features.telemetry,
            "configuration loaded"
        );
        config
    })
}

/// Loaded configuration; reads it on first use.
pub fn config() -> &'static AppConfig {
    load_config()
}

pub fn feature_flags() -> &'static FeatureFlags {
    &config().features
}

fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "failed to parse config, using defaults");
        AppConfig::default()
    })
}

/// `PANEL_BACKEND_URL` and `PANEL_BACKEND_TIMEOUT_SECS` win over the file.
fn apply_env_overrides(backend: &mut BackendConfig, var: impl Fn(&str) -> Option<String>) {
    if let Some(url) = var("PANEL_BACKEND_URL").filter(|u| !u.is_empty()) {
        backend.base_url = url;
    }
    if let Some(secs) = var("PANEL_BACKEND_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
        backend.timeout_secs = secs;
    }
}

/// Largest accepted request body, from `MAX_UPLOAD_BYTES` (default 10 MB).
pub fn max_upload_bytes() -> usize {
    std::env::var("MAX_UPLOAD_BYTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10 * 1024 * 1024)
}
