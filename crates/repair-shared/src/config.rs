//! Configuration management

use std::net::{IpAddr, SocketAddr};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::AppError;

use crate::constants::{
    DEFAULT_API_PORT, DEFAULT_APP_ENV, DEFAULT_APP_NAME, DEFAULT_FRONTEND_ORIGIN, DEFAULT_HOST,
};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub cors: CorsSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsSettings {
    /// The only origin allowed to call the API from a browser.
    pub frontend_origin: String,
}

/// Single-name variables kept for compatibility with existing deployments
/// (`API_PORT`, `FRONTEND_ORIGIN`). They take precedence over every other source.
#[derive(Debug, Default, Clone)]
pub struct LegacyOverrides {
    pub api_port: Option<i64>,
    pub frontend_origin: Option<String>,
}

impl LegacyOverrides {
    pub fn from_env() -> Self {
        Self {
            // An unparsable port is ignored and the layered value is used instead.
            api_port: std::env::var("API_PORT").ok().and_then(|v| v.trim().parse().ok()),
            frontend_origin: std::env::var("FRONTEND_ORIGIN")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_APP_ENV.into());
        Ok(Self::build(&env, LegacyOverrides::from_env())?)
    }

    pub fn build(env: &str, overrides: LegacyOverrides) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("app.env", env)?
            .set_default("app.host", DEFAULT_HOST)?
            .set_default("app.port", i64::from(DEFAULT_API_PORT))?
            .set_default("app.name", DEFAULT_APP_NAME)?
            .set_default("cors.frontend_origin", DEFAULT_FRONTEND_ORIGIN)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .set_override_option("app.port", overrides.api_port)?
            .set_override_option("cors.frontend_origin", overrides.frontend_origin)?
            .build()?;
        config.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        let host: IpAddr = self
            .app
            .host
            .parse()
            .map_err(|_| AppError::InvalidAddress(self.app.host.clone()))?;
        Ok(SocketAddr::from((host, self.app.port)))
    }
}
