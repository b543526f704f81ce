use std::{env, time::Duration};

use secrecy::{ExposeSecret, SecretString};

use crate::errors::ConfigError;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const TEMPERATURE_RANGE: (f32, f32) = (0.6, 0.8);
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 500;
pub const MAX_OUTPUT_TOKENS_RANGE: (u32, u32) = (100, 900);
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_model: String,
    pub openai_base_url: Option<String>,
    pub openai_temperature: f32,
    pub openai_max_output_tokens: u32,
    pub openai_timeout: Duration,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let openai_api_key = get("OPENAI_API_KEY")
            .map(SecretString::from)
            .ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;

        let openai_temperature = match get("OPENAI_TEMPERATURE") {
            Some(raw) => raw.parse::<f32>().unwrap_or_else(|_| {
                log::warn!("OPENAI_TEMPERATURE={raw} is not a number, using {DEFAULT_TEMPERATURE}");
                DEFAULT_TEMPERATURE
            }),
            None => DEFAULT_TEMPERATURE,
        };
        let openai_temperature = if openai_temperature.is_nan() {
            DEFAULT_TEMPERATURE
        } else {
            openai_temperature.clamp(TEMPERATURE_RANGE.0, TEMPERATURE_RANGE.1)
        };

        let openai_max_output_tokens = match get("OPENAI_MAX_OUTPUT_TOKENS") {
            Some(raw) => raw.parse::<i64>().unwrap_or_else(|_| {
                log::warn!(
                    "OPENAI_MAX_OUTPUT_TOKENS={raw} is not an integer, using {DEFAULT_MAX_OUTPUT_TOKENS}"
                );
                DEFAULT_MAX_OUTPUT_TOKENS as i64
            }),
            None => DEFAULT_MAX_OUTPUT_TOKENS as i64,
        }
        .clamp(
            MAX_OUTPUT_TOKENS_RANGE.0 as i64,
            MAX_OUTPUT_TOKENS_RANGE.1 as i64,
        ) as u32;

        let openai_timeout = match get("OPENAI_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                    key: "OPENAI_TIMEOUT_SECS",
                    reason: e.to_string(),
                })?;
                Duration::from_secs(secs.max(1))
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let web_server_port = match get("WEB_SERVER_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "WEB_SERVER_PORT",
                reason: e.to_string(),
            })?,
            None => 8000,
        };

        let cors_allowed_origins = parse_origins(
            &get("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string()),
        )?;

        Ok(Self {
            openai_api_key,
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_base_url: get("OPENAI_BASE_URL"),
            openai_temperature,
            openai_max_output_tokens,
            openai_timeout,
            web_server_host: get("WEB_SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            web_server_port,
            cors_allowed_origins,
        })
    }

    pub fn has_api_key(&self) -> bool {
        !self.openai_api_key.expose_secret().trim().is_empty()
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("sk-test".to_string()),
            openai_model: DEFAULT_MODEL.to_string(),
            openai_base_url: None,
            openai_temperature: DEFAULT_TEMPERATURE,
            openai_max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            openai_timeout: Duration::from_secs(5),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|o| o.trim().trim_end_matches('/').to_string())
        .filter(|o| !o.is_empty())
        .collect();

    if origins.iter().any(|o| o == "*") {
        return Err(ConfigError::Invalid {
            key: "CORS_ALLOWED_ORIGINS",
            reason: "wildcard origin is not allowed, list origins explicitly".to_string(),
        });
    }

    Ok(origins)
}
