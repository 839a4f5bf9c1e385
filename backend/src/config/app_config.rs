use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;
use thiserror::Error;

pub const DEFAULT_FROM_EMAIL: &str = "onboarding@resend.dev";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_STATIC_DIR: &str = "dist";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings read from the environment (after `.env` is loaded).
#[derive(Clone)]
pub struct Config {
    pub resend_api_key: String,
    /// Address that receives every contact message.
    pub operator_email: String,
    pub from_email: String,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    /// Restricts CORS to this origin when set.
    pub frontend_origin: Option<HeaderValue>,
    pub sentry_dsn: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &'static str| optional(key).ok_or(ConfigError::Missing(key));

        let bind_raw = optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let frontend_origin = optional("FRONTEND_URL")
            .map(|url| {
                HeaderValue::from_str(url.trim().trim_end_matches('/')).map_err(|_| ConfigError::Invalid {
                    name: "FRONTEND_URL",
                    value: url.clone(),
                })
            })
            .transpose()?;

        Ok(Self {
            resend_api_key: required("RESEND_API_KEY")?,
            operator_email: required("EMAIL_USER")?,
            from_email: optional("EMAIL_FROM").unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string()),
            bind_addr,
            static_dir: PathBuf::from(optional("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())),
            frontend_origin,
            sentry_dsn: optional("SENTRY_DSN"),
        })
    }
}
