//! Service configuration module
//! All runtime settings come from the environment (a `.env` file is loaded
//! by `main` before this runs).

use shared::Language;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingEnv(name))
}

/// Settings for the HTTP mail delivery API.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub api_url: String,
    pub api_key: String,
    pub from_address: String,
    pub owner_address: String,
}

impl MailConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(MailConfig {
            api_url: required("EMAIL_API_URL")?,
            api_key: required("EMAIL_API_KEY")?,
            from_address: required("EMAIL_FROM")?,
            owner_address: required("OWNER_EMAIL")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mail: MailConfig,
    pub testimonials_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub language: Language,
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mail = MailConfig::from_env()?;

        let testimonials_path: PathBuf = env::var("TESTIMONIALS_PATH")
            .unwrap_or_else(|_| "data/testimonials.json".to_string())
            .into();

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3001".to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidConfig(format!("Invalid bind address: {}", e)))?;

        let language = match env::var("SITE_LANGUAGE") {
            Ok(value) => value
                .parse::<Language>()
                .map_err(ConfigError::InvalidConfig)?,
            Err(_) => Language::De,
        };

        let allowed_origins: Vec<String> = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        info!(
            "Configuration loaded: bind={}, testimonials={}, language={}, origins={}",
            bind_addr,
            testimonials_path.display(),
            language,
            allowed_origins.len()
        );

        Ok(AppConfig {
            mail,
            testimonials_path,
            bind_addr,
            language,
            allowed_origins,
        })
    }
}
