// src/config.rs
use crate::infrastructure::seed::AdminSeed;
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    biscuit_private_key: String,
    token_ttl: Duration,
    allowed_origins: Vec<String>,
    admin: AdminSeed,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

const fn default_token_ttl() -> u64 {
    3600
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".into()]
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for everything except the token signing key.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads keys through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let biscuit_private_key = lookup("BISCUIT_ROOT_PRIVATE_KEY")
            .ok_or(ConfigError::Missing("BISCUIT_ROOT_PRIVATE_KEY"))?;
        if biscuit_private_key.len() != 64
            || !biscuit_private_key.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(ConfigError::Invalid(
                "BISCUIT_ROOT_PRIVATE_KEY must be a 32-byte hex string".into(),
            ));
        }

        let token_ttl_secs = match lookup("TOKEN_TTL_SECONDS") {
            Some(raw) => raw.parse::<u64>().ok().filter(|secs| *secs > 0).ok_or_else(|| {
                ConfigError::Invalid(format!("TOKEN_TTL_SECONDS must be a positive integer, got '{raw}'"))
            })?,
            None => default_token_ttl(),
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let defaults = AdminSeed::default();
        let admin = AdminSeed {
            email: lookup("ADMIN_EMAIL").unwrap_or(defaults.email),
            password: lookup("ADMIN_PASSWORD").unwrap_or(defaults.password),
        };

        Ok(Self {
            listen_addr,
            biscuit_private_key,
            token_ttl: Duration::from_secs(token_ttl_secs),
            allowed_origins,
            admin,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn biscuit_private_key(&self) -> &str {
        &self.biscuit_private_key
    }

    pub const fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub const fn admin(&self) -> &AdminSeed {
        &self.admin
    }
}
