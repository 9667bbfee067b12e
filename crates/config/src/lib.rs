use dotenv::dotenv;
use dotenv::from_path;
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_API_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_BODY_LIMIT_MB: usize = 50;
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not defined")]
    Missing(&'static str),

    #[error("Invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Failed to load env file {path}: {reason}")]
    EnvFile { path: String, reason: String },
}

/// Server-side settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub api_host: String,
    pub api_port: u16,
    pub body_limit_mb: usize,
    pub expose_error_details: bool,
}

/// Settings for the dashboard client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Load configuration from a specified `.env` file path, the file named by
    /// `CONFIG_ENV`, or the `.env` in the working directory.
    pub fn from_env(env_path: Option<&str>) -> Result<Self, ConfigError> {
        load_env_file(env_path)?;
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // A missing connection string is fatal
        let database_url = lookup("DATABASE_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Self {
            database_url,
            api_host: lookup("API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            api_port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            body_limit_mb: parse_or(&lookup, "BODY_LIMIT_MB", DEFAULT_BODY_LIMIT_MB)?,
            expose_error_details: parse_or(&lookup, "EXPOSE_ERROR_DETAILS", true)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }

    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_mb.saturating_mul(1024 * 1024)
    }
}

impl ClientConfig {
    pub fn from_env(env_path: Option<&str>) -> Result<Self, ConfigError> {
        load_env_file(env_path)?;
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("API_BASE_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }
}

fn load_env_file(env_path: Option<&str>) -> Result<(), ConfigError> {
    let explicit = env_path
        .map(str::to_string)
        .or_else(|| env::var("CONFIG_ENV").ok());

    match explicit {
        Some(path) => from_path(&path).map(|_| ()).map_err(|e| ConfigError::EnvFile {
            path,
            reason: e.to_string(),
        }),
        None => {
            // Default to `.env` in the working directory, if any
            dotenv().ok();
            Ok(())
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => {
            value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                key,
                value,
                reason: e.to_string(),
            })
        }
        _ => Ok(default),
    }
}
