use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding `backend.url`.
const API_URL_VAR: &str = "API_URL";

/// Read `.env` and `config.toml`, apply the `API_URL` override, and store the
/// result in the global `OnceLock`. Only the first call has effect.
///
/// If the file is missing or unparseable, defaults are used.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let config = parse_config(std::fs::read_to_string(CONFIG_PATH).ok().as_deref())
            .with_backend_url(std::env::var(API_URL_VAR).ok());
        tracing::info!(
            backend = %config.backend.url,
            timeout_secs = config.backend.timeout_secs,
            features = ?config.features,
            "Configuration loaded"
        );
        config
    })
}

/// Parse config file contents, falling back to defaults on absence or error.
pub fn parse_config(contents: Option<&str>) -> AppConfig {
    match contents {
        Some(contents) => toml::from_str(contents).unwrap_or_else(|e| {
            tracing::warn!(path = CONFIG_PATH, error = %e, "Failed to parse config, using defaults");
            AppConfig::default()
        }),
        None => {
            tracing::warn!(path = CONFIG_PATH, "Config file not found, using defaults");
            AppConfig::default()
        }
    }
}

/// Get the loaded configuration, loading it on first use.
pub fn config() -> &'static AppConfig {
    load_config()
}
