use crate::error::ConfigError;
use chatline::providers::configs::{CompletionConfig, DEFAULT_HOST, DEFAULT_MODEL};
use config::{Config, Environment};
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|source| ConfigError::InvalidAddress { addr, source })
    }
}

#[derive(Debug)]
pub struct Settings {
    pub server: ServerSettings,
    pub completion: CompletionConfig,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            server: Self::load_server()?,
            completion: Self::load_completion()?,
        })
    }

    // CHATLINE_HOST, CHATLINE_PORT
    fn load_server() -> Result<ServerSettings, ConfigError> {
        let config = Config::builder()
            .set_default("host", default_host())?
            .set_default("port", default_port())?
            .add_source(
                Environment::with_prefix("CHATLINE")
                    .prefix_separator("_")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize().map_err(|err| {
            tracing::debug!("Configuration error: {:?}", &err);
            ConfigError::Load(err)
        })
    }

    // OPENAI_API_KEY, OPENAI_MODEL, OPENAI_HOST
    fn load_completion() -> Result<CompletionConfig, ConfigError> {
        let config = Config::builder()
            .set_default("model", DEFAULT_MODEL)?
            .set_default("host", DEFAULT_HOST)?
            .add_source(
                Environment::with_prefix("OPENAI")
                    .prefix_separator("_")
                    .ignore_empty(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clean_env() {
        for (key, _) in env::vars() {
            if key.starts_with("CHATLINE_") || key.starts_with("OPENAI_") {
                env::remove_var(&key);
            }
        }
    }

    #[test]
    #[serial]
    fn test_default_settings() {
        clean_env();

        let settings = Settings::new().unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.completion.api_key, None);
        assert_eq!(settings.completion.model, "gpt-5");
        assert_eq!(settings.completion.host, "https://api.openai.com");
        assert!(settings.completion.credential().is_none());
    }

    #[test]
    #[serial]
    fn test_environment_override() {
        clean_env();
        env::set_var("CHATLINE_PORT", "8080");
        env::set_var("CHATLINE_HOST", "0.0.0.0");
        env::set_var("OPENAI_API_KEY", "test-key");
        env::set_var("OPENAI_MODEL", "gpt-4.1-mini");
        env::set_var("OPENAI_HOST", "http://localhost:9999");

        let settings = Settings::new().unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(
            settings.server.socket_addr().unwrap().to_string(),
            "0.0.0.0:8080"
        );
        assert_eq!(settings.completion.credential(), Some("test-key"));
        assert_eq!(settings.completion.model, "gpt-4.1-mini");
        assert_eq!(settings.completion.host, "http://localhost:9999");

        clean_env();
    }

    #[test]
    #[serial]
    fn test_empty_values_fall_back() {
        clean_env();
        env::set_var("OPENAI_API_KEY", "");
        env::set_var("OPENAI_MODEL", "");

        let settings = Settings::new().unwrap();
        assert!(settings.completion.credential().is_none());
        assert_eq!(settings.completion.model, "gpt-5");

        clean_env();
    }

    #[test]
    fn test_socket_addr_conversion() {
        let server_settings = ServerSettings::default();
        let addr = server_settings.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn test_invalid_socket_addr() {
        let server_settings = ServerSettings {
            host: "not a host".to_string(),
            port: 8000,
        };
        assert!(matches!(
            server_settings.socket_addr(),
            Err(ConfigError::InvalidAddress { .. })
        ));
    }
}
