//! Configuração do cliente Webflow
//!
//! Ordem de carga (a última fonte vence):
//! 1. `.env` via dotenvy, se existir
//! 2. arquivo opcional `config/webflow` (toml, yaml, json...)
//! 3. variáveis de ambiente com prefixo `WEBFLOW_` (ex: `WEBFLOW_API_KEY`)

use crate::error::Result;
use crate::routes::Route;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://api.webflow.com";
pub const DEFAULT_API_VERSION: &str = "1.0.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Clone, Serialize, Deserialize)]
pub struct Settings {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Rotas extras ou que sobrescrevem as padrão
    #[serde(default)]
    pub routes: BTreeMap<String, Route>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

impl Settings {
    /// Carrega `.env`, `config/webflow` e variáveis `WEBFLOW_*`
    pub fn new() -> Result<Self> {
        if dotenvy::dotenv().is_err() {
            tracing::debug!("Arquivo .env não encontrado - usando variáveis de ambiente do sistema");
        }

        let config = Config::builder()
            .add_source(File::with_name("config/webflow").required(false))
            .add_source(Environment::with_prefix("WEBFLOW"))
            .build()?;

        Self::from_config(config)
    }

    /// Desserializa a partir de um [`Config`] já montado
    pub fn from_config(config: Config) -> Result<Self> {
        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }
}

// api_key nunca aparece em logs
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("routes", &self.routes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WebflowError;
    use crate::request::HttpMethod;
    use config::FileFormat;

    #[test]
    fn test_defaults_applied() {
        let config = Config::builder()
            .set_override("api_key", "secret-token")
            .unwrap()
            .build()
            .unwrap();

        let settings = Settings::from_config(config).unwrap();
        assert_eq!(settings.api_key, "secret-token");
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.api_version, DEFAULT_API_VERSION);
        assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(settings.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
        assert!(settings.routes.is_empty());
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let config = Config::builder().build().unwrap();
        assert!(matches!(
            Settings::from_config(config),
            Err(WebflowError::Config(_))
        ));
    }

    #[test]
    fn test_routes_from_file_source() {
        let toml = r#"
            api_key = "tok"
            base_url = "https://api.example.test"
            timeout_secs = 3

            [routes.list_users]
            method = "GET"
            path = "sites/{site_id}/users"
        "#;

        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap();

        let settings = Settings::from_config(config).unwrap();
        assert_eq!(settings.base_url, "https://api.example.test");
        assert_eq!(settings.timeout_secs, 3);
        assert_eq!(
            settings.routes.get("list_users"),
            Some(&Route::new(HttpMethod::Get, "sites/{site_id}/users"))
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::builder()
            .set_override("api_key", "super-secret")
            .unwrap()
            .build()
            .unwrap();
        let settings = Settings::from_config(config).unwrap();

        let debug = format!("{:?}", settings);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
