//! Application Configuration
//!
//! Values are baked in at build time from environment variables:
//! `BOARD_API_BASE_URL`, `BOARD_LOG_LEVEL` and `BOARD_RETRY`.

use std::str::FromStr;
use std::sync::OnceLock;

use log::LevelFilter;

use crate::query::RetryPolicy;

pub const DEFAULT_API_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_RETRY: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// API root without trailing slash
    pub api_base_url: String,
    pub log_level: LevelFilter,
    /// Retry policy for list views that don't opt out
    pub retry: RetryPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: LevelFilter::Info,
            retry: RetryPolicy::new(DEFAULT_RETRY),
        }
    }
}

impl AppConfig {
    /// Build from raw variable values; unset or unparsable values keep defaults
    pub fn from_vars(base_url: Option<&str>, log_level: Option<&str>, retry: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.and_then(|l| LevelFilter::from_str(l.trim()).ok()) {
            config.log_level = level;
        }
        if let Some(retries) = retry.and_then(|r| r.trim().parse::<u32>().ok()) {
            config.retry = RetryPolicy::new(retries);
        }
        config
    }

    fn from_build_env() -> Self {
        Self::from_vars(
            option_env!("BOARD_API_BASE_URL"),
            option_env!("BOARD_LOG_LEVEL"),
            option_env!("BOARD_RETRY"),
        )
    }
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Process-wide configuration, read once
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::from_build_env)
}
