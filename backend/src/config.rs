use std::{env, fmt::Display, net::IpAddr, path::PathBuf, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

pub const SECRET_VAR: &str = "TURNSTILE_SECRET";
pub const DEFAULT_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_VOTES_FILE: &str = "votes.json";
pub const DEFAULT_STATIC_DIR: &str = ".";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub address: IpAddr,
    pub port: u16,
    pub votes_file: PathBuf,
    pub static_dir: PathBuf,
    pub turnstile_secret: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let turnstile_secret = lookup(SECRET_VAR).filter(|s| !s.trim().is_empty());
        if turnstile_secret.is_none() {
            warn!("{SECRET_VAR} not set - every vote will fail verification");
        }

        Ok(Self {
            address: try_load(&lookup, "ADDRESS", DEFAULT_ADDRESS)?,
            port: try_load(&lookup, "PORT", DEFAULT_PORT)?,
            votes_file: try_load(&lookup, "VOTES_FILE", DEFAULT_VOTES_FILE)?,
            static_dir: try_load(&lookup, "STATIC_DIR", DEFAULT_STATIC_DIR)?,
            turnstile_secret,
        })
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}
