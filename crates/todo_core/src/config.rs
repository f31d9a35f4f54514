use serde::{Deserialize, Serialize};

/// Connection settings for the remote todo API.
///
/// Loaded from `config.toml` in the working directory, then overridden by the
/// `BASE_ADDRESS` and `SCOPE` environment variables when they are set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root URL of the remote todo API, without the `/api/todo` suffix
    pub base_address: String,
    /// Authorization scope requested when acquiring a bearer token
    pub scope: String,
}

const CONFIG_FILE_PATH: &str = "config.toml";

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config {
            base_address: String::new(),
            scope: String::new(),
        };

        if std::path::Path::new(CONFIG_FILE_PATH).exists() {
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                if let Ok(file_config) = toml::from_str::<Config>(&content) {
                    config = file_config;
                }
            }
        }

        if let Ok(base_address) = std::env::var("BASE_ADDRESS") {
            config.base_address = base_address;
        }
        if let Ok(scope) = std::env::var("SCOPE") {
            config.scope = scope;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_toml_settings() {
        let content = r#"
            base_address = "https://todoapi.example.com"
            scope = "api://todo-api/.default"
        "#;

        let config: Config = toml::from_str(content).unwrap();

        assert_eq!(config.base_address, "https://todoapi.example.com");
        assert_eq!(config.scope, "api://todo-api/.default");
    }

    #[test]
    fn rejects_toml_with_missing_fields() {
        assert!(toml::from_str::<Config>("base_address = \"x\"").is_err());
    }
}
