use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration build error: {0}")]
    Build(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    /// Base URL of the admin frontend; the stats and support cross-links on
    /// the dashboard are built relative to it.
    pub frontend_url: String,
    pub admin_token_secret: String,
}

/// Load application configuration from `config.yaml` + environment overrides.
///
/// Environment variable override convention (current): any var matching the key path
/// separated by double underscores will override the file value. A future iteration
/// may introduce a prefix (e.g. `APP__`).
///
/// Returns a `ConfigError` instead of panicking so the caller can decide how to fail.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    use config::{Config, Environment, File};
    let cfg = Config::builder()
        .add_source(File::with_name("config.yaml"))
        .add_source(Environment::default().separator("__"))
        .build()?;

    let app: AppConfig = cfg.try_deserialize()?;
    validate(&app)?;
    Ok(app)
}

/// Sanity checks applied after deserialization.
pub fn validate(app: &AppConfig) -> Result<(), ConfigError> {
    if app.admin_token_secret.len() < 32 {
        return Err(ConfigError::Validation(
            "admin_token_secret must be at least 32 characters".into(),
        ));
    }
    if !app.frontend_url.starts_with("http") {
        return Err(ConfigError::Validation(
            "frontend_url must be an absolute http(s) URL".into(),
        ));
    }
    Ok(())
}

/// Convenience helper for binaries wanting the old panic-on-error behaviour.
pub fn load_config_or_panic() -> AppConfig {
    match load_config() {
        Ok(c) => c,
        Err(e) => panic!("Failed to load configuration: {e}"),
    }
}
