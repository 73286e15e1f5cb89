//! Client configuration resolved from build-time environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle cannot read process environment at runtime, so values are
//! captured with `option_env!` when the crate is compiled and parsed once into
//! a process-wide [`ClientConfig`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::OnceLock;

pub const DEFAULT_API_PREFIX: &str = "/api/v1";
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme + host of the backend, or empty for same-origin requests.
    pub api_base_url: String,
    /// Versioned API root appended to the base URL.
    pub api_prefix: String,
    /// How long a notice stays on screen before auto-dismissing.
    pub notice_timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            api_prefix: DEFAULT_API_PREFIX.to_owned(),
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// Build config from values baked in at compile time.
    ///
    /// Optional:
    /// - `SHAREWISE_API_URL`: backend origin, default same origin
    /// - `SHAREWISE_API_PREFIX`: default `/api/v1`
    /// - `SHAREWISE_NOTICE_TIMEOUT_MS`: default 3000
    pub fn from_build_env() -> Self {
        Self::from_raw(
            option_env!("SHAREWISE_API_URL"),
            option_env!("SHAREWISE_API_PREFIX"),
            option_env!("SHAREWISE_NOTICE_TIMEOUT_MS"),
        )
    }

    fn from_raw(base_url: Option<&str>, prefix: Option<&str>, notice_timeout_ms: Option<&str>) -> Self {
        Self {
            api_base_url: parse_base_url(base_url),
            api_prefix: parse_prefix(prefix),
            notice_timeout_ms: parse_notice_timeout(notice_timeout_ms),
        }
    }

    /// Absolute (or origin-relative) URL for an API path such as `/articles/42`.
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if self.api_prefix.is_empty() {
            format!("{}/{path}", self.api_base_url)
        } else {
            format!("{}{}/{path}", self.api_base_url, self.api_prefix)
        }
    }
}

/// Process-wide config, parsed on first use.
pub fn client_config() -> &'static ClientConfig {
    static CONFIG: OnceLock<ClientConfig> = OnceLock::new();
    CONFIG.get_or_init(ClientConfig::from_build_env)
}

fn parse_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().trim_end_matches('/').to_owned()
}

fn parse_prefix(raw: Option<&str>) -> String {
    let trimmed = raw.map_or(DEFAULT_API_PREFIX, str::trim).trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

fn parse_notice_timeout(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_NOTICE_TIMEOUT_MS)
}
