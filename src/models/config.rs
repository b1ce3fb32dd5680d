//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP and pacing behavior settings
    #[serde(default)]
    pub harvest: HarvestConfig,

    /// Site structure: entry URL and CSS selectors
    #[serde(default)]
    pub site: SiteConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.harvest.user_agent.trim().is_empty() {
            return Err(AppError::config("harvest.user_agent is empty"));
        }
        if self.harvest.timeout_secs == 0 {
            return Err(AppError::config("harvest.timeout_secs must be > 0"));
        }
        if self.harvest.max_pages == 0 {
            return Err(AppError::config("harvest.max_pages must be > 0"));
        }
        if self.site.index_url.trim().is_empty() {
            return Err(AppError::config("site.index_url is empty"));
        }
        Ok(())
    }
}

/// HTTP client and pacing behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Fixed delay before every request in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,

    /// Pagination ceiling per letter
    #[serde(default = "defaults::max_pages")]
    pub max_pages: usize,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            request_delay_ms: defaults::request_delay(),
            max_pages: defaults::max_pages(),
        }
    }
}

/// Entry URL and CSS selectors describing the dictionary site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Search index page used to discover per-letter entry points
    #[serde(default = "defaults::index_url")]
    pub index_url: String,

    /// Selector for per-letter pagination links on the index page
    #[serde(default = "defaults::letter_links_selector")]
    pub letter_links_selector: String,

    /// Selector for the search-results container on a letter page
    #[serde(default = "defaults::results_selector")]
    pub results_selector: String,

    /// Selector for the "next page" affordance on a letter page
    #[serde(default = "defaults::next_link_selector")]
    pub next_link_selector: String,

    /// Selector for the dialect table on a word detail page
    #[serde(default = "defaults::table_selector")]
    pub table_selector: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            index_url: defaults::index_url(),
            letter_links_selector: defaults::letter_links_selector(),
            results_selector: defaults::results_selector(),
            next_link_selector: defaults::next_link_selector(),
            table_selector: defaults::table_selector(),
        }
    }
}

mod defaults {
    // Harvest defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn request_delay() -> u64 {
        1000
    }
    pub fn max_pages() -> usize {
        20
    }

    // Site defaults (istarski-rjecnik.com as observed)
    pub fn index_url() -> String {
        "https://www.istarski-rjecnik.com/pretrazivanje/1/A/".into()
    }
    pub fn letter_links_selector() -> String {
        "p a[href*='/pretrazivanje/1/']".into()
    }
    pub fn results_selector() -> String {
        "#rezultati-pretrazivanja".into()
    }
    pub fn next_link_selector() -> String {
        "a[title='Sljedeca']".into()
    }
    pub fn table_selector() -> String {
        "table.prikaz-rijeci".into()
    }
}
