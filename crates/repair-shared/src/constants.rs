//! Application-wide constants

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_API_PORT: u16 = 4000;
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_APP_NAME: &str = "repair-server";
pub const DEFAULT_APP_ENV: &str = "development";
pub const AUDIT_TARGET: &str = "audit";
