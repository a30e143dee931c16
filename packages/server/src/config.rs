use std::env;
use std::num::ParseIntError;
use std::time::Duration;

use namecraft_ai::{AIServiceConfig, DEFAULT_MODEL, GEMINI_API_BASE_URL};
use namecraft_config::constants;
use namecraft_config::{env_first, env_parse_or};
use thiserror::Error;

const DEFAULT_PORT: u16 = 4001;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Timeout {name} must be at least one second")]
    InvalidTimeout { name: &'static str },
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub cors_origin: String,
    pub ai: AIServiceConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env_first(&[constants::NAMECRAFT_API_PORT, constants::PORT]) {
            Some(raw) => raw.parse::<u16>()?,
            None => DEFAULT_PORT,
        };

        // Validate port is in valid range
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let cors_origin = env::var(constants::NAMECRAFT_CORS_ORIGIN)
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());

        let request_timeout_secs =
            env_parse_or(constants::NAMECRAFT_HTTP_REQUEST_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS);
        if request_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                name: constants::NAMECRAFT_HTTP_REQUEST_TIMEOUT_SECS,
            });
        }
        let connect_timeout_secs =
            env_parse_or(constants::NAMECRAFT_HTTP_CONNECT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS);
        if connect_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                name: constants::NAMECRAFT_HTTP_CONNECT_TIMEOUT_SECS,
            });
        }

        let ai = AIServiceConfig {
            api_key: env_first(&[constants::GEMINI_API_KEY, constants::API_KEY]),
            model: env_first(&[constants::GEMINI_MODEL]).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: env_first(&[constants::GEMINI_API_BASE_URL])
                .unwrap_or_else(|| GEMINI_API_BASE_URL.to_string()),
            request_timeout: Duration::from_secs(request_timeout_secs),
            connect_timeout: Duration::from_secs(connect_timeout_secs),
        };

        Ok(Config {
            port,
            cors_origin,
            ai,
        })
    }
}
