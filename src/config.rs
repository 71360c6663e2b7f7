//! Client configuration baked in at build time.
//!
//! A WASM bundle has no process environment, so values come from
//! `option_env!` when the crate is compiled:
//! - `BLOG_API_BASE`: origin prefix for REST calls (default: same origin)
//! - `BLOG_PAGE_SIZE`: posts per page for feed and profile lists (default 10)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("BLOG_API_BASE must be an http(s) URL or empty, got {0:?}")]
    InvalidApiBase(String),
    #[error("BLOG_PAGE_SIZE must be between 1 and {MAX_PAGE_SIZE}, got {0:?}")]
    InvalidPageSize(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix joined in front of every `/api/...` path, without trailing slash.
    pub api_base: String,
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: String::new(), page_size: DEFAULT_PAGE_SIZE }
    }
}

impl ClientConfig {
    /// Build from the variables captured at compile time.
    ///
    /// Invalid values are logged and replaced by defaults so a bad build
    /// variable never blanks the whole app.
    pub fn from_build_env() -> Self {
        match Self::from_values(option_env!("BLOG_API_BASE"), option_env!("BLOG_PAGE_SIZE")) {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::warn!("invalid client config, using defaults: {e}");
                Self::default()
            }
        }
    }

    pub fn from_values(api_base: Option<&str>, page_size: Option<&str>) -> Result<Self, ConfigError> {
        let api_base = parse_api_base(api_base)?;
        let page_size = parse_page_size(page_size)?;
        Ok(Self { api_base, page_size })
    }

    /// Absolute (or origin-relative) URL for an `/api/...` path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

fn parse_api_base(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Ok(String::new());
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidApiBase(value.to_owned()));
    }
    Ok(value.trim_end_matches('/').to_owned())
}

fn parse_page_size(raw: Option<&str>) -> Result<u32, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PAGE_SIZE);
    };
    match value.parse::<u32>() {
        Ok(size) if (1..=MAX_PAGE_SIZE).contains(&size) => Ok(size),
        _ => Err(ConfigError::InvalidPageSize(value.to_owned())),
    }
}
