use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const API_URL_KEY: &str = "API_URL";
pub const MAX_RETRIES_KEY: &str = "MAX_RETRIES";
pub const TIMEOUT_KEY: &str = "TIMEOUT_SECONDS";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub max_retries: u32,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Reads the process environment. Call once at startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; missing, empty or unparseable
    /// values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(API_URL_KEY)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let max_retries = parse_or(&lookup, MAX_RETRIES_KEY, DEFAULT_MAX_RETRIES);
        let timeout_secs = parse_or(&lookup, TIMEOUT_KEY, DEFAULT_TIMEOUT_SECS);
        let timeout = if timeout_secs == 0 {
            log::warn!("{} must be positive, using {}", TIMEOUT_KEY, DEFAULT_TIMEOUT_SECS);
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            Duration::from_secs(timeout_secs)
        };

        Config {
            api_url,
            max_retries,
            timeout,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("invalid {} {:?}, using {}", key, raw, default);
            default
        }),
        _ => default,
    }
}
