use std::{str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_JWT_AUDIENCE: &str = "localhost";
const DEFAULT_JWT_ISSUER: &str = "localhost";
const DEFAULT_ACCESS_TOKEN_TTL_SECS: u64 = 3600;
const DEFAULT_REFRESH_TOKEN_TTL_SECS: u64 = 86400;

/// Minimum length of the HMAC secret used to sign tokens.
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub jwt: JwtConfig,
}

/// Token signing settings.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub audience: String,
    pub issuer: String,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let secret = required("JWT_SECRET")?;
        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::InvalidValue {
                name: "JWT_SECRET".to_string(),
                reason: format!("must be at least {} characters", MIN_JWT_SECRET_LENGTH),
            }
            .into());
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr: optional("BIND_ADDR", DEFAULT_BIND_ADDR.to_string())?,
            jwt: JwtConfig {
                secret,
                audience: optional("JWT_AUDIENCE", DEFAULT_JWT_AUDIENCE.to_string())?,
                issuer: optional("JWT_ISSUER", DEFAULT_JWT_ISSUER.to_string())?,
                access_token_ttl: Duration::from_secs(optional(
                    "JWT_ACCESS_TOKEN_TTL",
                    DEFAULT_ACCESS_TOKEN_TTL_SECS,
                )?),
                refresh_token_ttl: Duration::from_secs(optional(
                    "JWT_REFRESH_TOKEN_TTL",
                    DEFAULT_REFRESH_TOKEN_TTL_SECS,
                )?),
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads and parses `name`, falling back to `default` when it is unset.
fn optional<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
