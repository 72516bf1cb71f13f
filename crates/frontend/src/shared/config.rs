use contracts::usecases::u501_cnpj_lookup::DEFAULT_REGISTRY_BASE;
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiConfig {
    /// Базовый URL бэкенда; пусто = origin страницы
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RegistryConfig {
    #[serde(default = "default_registry_base")]
    pub base_url: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: default_registry_base(),
        }
    }
}

fn default_registry_base() -> String {
    DEFAULT_REGISTRY_BASE.to_string()
}

/// Configuration embedded in the binary at build time
const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match parse_config(EMBEDDED_CONFIG) {
    Ok(config) => config,
    Err(e) => {
        log::warn!("config.toml is invalid, using defaults: {}", e);
        AppConfig::default()
    }
});

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Загруженная конфигурация (разбирается один раз)
pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = parse_config(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.registry.base_url, "https://brasilapi.com.br");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.registry.base_url, DEFAULT_REGISTRY_BASE);

        let config = parse_config("[api]\nbase_url = \"http://127.0.0.1:5000\"\n").unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.registry.base_url, DEFAULT_REGISTRY_BASE);
    }

    #[test]
    fn test_invalid_config() {
        assert!(parse_config("[api\nbase_url = 1").is_err());
    }
}
