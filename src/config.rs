use std::{env, fs::read_to_string, str::FromStr};

use tracing::{info, warn};

use crate::error::AppError;

pub const SUPABASE_URL: &str = "SUPABASE_URL";
pub const SUPABASE_KEY: &str = "SUPABASE_KEY";

pub struct Config {
    pub host: String,
    pub port: u16,
    pub supabase_url: String,
    pub supabase_key: String,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        if dotenv::dotenv().is_ok() {
            info!("Loaded environment from .env");
        }

        Ok(Self {
            host: try_load("RUST_HOST", "0.0.0.0")?,
            port: try_load("RUST_PORT", "5001")?,
            supabase_url: var(SUPABASE_URL).ok_or_else(|| missing(SUPABASE_URL))?,
            supabase_key: var(SUPABASE_KEY)
                .or_else(|| read_secret(SUPABASE_KEY))
                .ok_or_else(|| missing(SUPABASE_KEY))?,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn missing(key: &str) -> AppError {
    warn!("Environment variable {key} not found");
    AppError::MissingConfig(key.to_string())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, AppError> {
    let value = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|_| {
        warn!("Invalid {key} value: {value}");
        AppError::InvalidConfig {
            key: key.to_string(),
            value,
        }
    })
}

fn read_secret(secret_name: &str) -> Option<String> {
    let path = format!("/run/secrets/{secret_name}");

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            warn!("Failed to read {secret_name} from file: {e}");
        })
        .ok()
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_load_default() {
        let port: u16 = try_load("GUESTBOOK_TEST_UNSET_PORT", "5001").unwrap();

        assert_eq!(port, 5001);
    }

    #[test]
    fn test_try_load_invalid_default() {
        let result: Result<u16, AppError> = try_load("GUESTBOOK_TEST_UNSET_PORT", "not-a-port");

        assert!(matches!(result, Err(AppError::InvalidConfig { .. })));
    }

    #[test]
    fn test_missing_secret() {
        assert!(read_secret("GUESTBOOK_TEST_MISSING_SECRET").is_none());
    }
}
