use config::Config;
use remote_activity_dashboard::config::{AppConfig, ConfigError, validate};

fn config_from_yaml(yaml_content: &str) -> AppConfig {
    Config::builder()
        .add_source(config::File::from_str(
            yaml_content,
            config::FileFormat::Yaml,
        ))
        .build()
        .expect("Failed to build config")
        .try_deserialize()
        .expect("Failed to deserialize app config")
}

#[test]
fn test_app_config_deserialization() {
    let app_config = config_from_yaml(
        r#"
database_url: "postgres://localhost/dashboard"
frontend_url: "https://admin.example.com"
admin_token_secret: "0123456789abcdef0123456789abcdef"
"#,
    );
    assert_eq!(app_config.database_url, "postgres://localhost/dashboard");
    assert_eq!(app_config.frontend_url, "https://admin.example.com");
    assert_eq!(
        app_config.admin_token_secret,
        "0123456789abcdef0123456789abcdef"
    );
}

#[test]
fn test_config_with_environment_variables() {
    let yaml_content = r#"
database_url: "postgres://file/dashboard"
frontend_url: "https://file.example.com"
admin_token_secret: "file_secret_file_secret_file_sec"
"#;

    unsafe {
        std::env::set_var("APP__DATABASE_URL", "postgres://env/dashboard");

        let config = Config::builder()
            .add_source(config::File::from_str(
                yaml_content,
                config::FileFormat::Yaml,
            ))
            .add_source(config::Environment::default().prefix("APP").separator("__"))
            .build()
            .expect("Failed to build config");

        let app_config: AppConfig = config.try_deserialize().expect("Failed to deserialize");

        // Environment variables should override file values
        assert_eq!(app_config.database_url, "postgres://env/dashboard");
        // Non-overridden values should come from file
        assert_eq!(app_config.frontend_url, "https://file.example.com");

        std::env::remove_var("APP__DATABASE_URL");
    }
}

#[test]
fn test_validation_accepts_a_complete_config() {
    let app_config = config_from_yaml(
        r#"
database_url: "sqlite::memory:"
frontend_url: "https://admin.example.com"
admin_token_secret: "0123456789abcdef0123456789abcdef"
"#,
    );
    assert!(validate(&app_config).is_ok());
}

#[test]
fn test_validation_rejects_short_admin_token() {
    let app_config = config_from_yaml(
        r#"
database_url: "sqlite::memory:"
frontend_url: "https://admin.example.com"
admin_token_secret: "too-short"
"#,
    );
    assert!(matches!(
        validate(&app_config),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_validation_rejects_relative_frontend_url() {
    let app_config = config_from_yaml(
        r#"
database_url: "sqlite::memory:"
frontend_url: "/activity"
admin_token_secret: "0123456789abcdef0123456789abcdef"
"#,
    );
    assert!(matches!(
        validate(&app_config),
        Err(ConfigError::Validation(_))
    ));
}
