//! Environment-driven configuration.

use std::env;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_USER_AGENT: &str = "ClearFind/0.1 (+student project)";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults
    /// for anything unset or unparseable.
    pub fn from_env() -> Self {
        Self {
            port: env_parsed("PORT", DEFAULT_PORT),
            fetch_timeout_secs: env_parsed("CLEARFIND_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            user_agent: env::var("CLEARFIND_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            fetch_timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
