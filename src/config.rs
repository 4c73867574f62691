//! Configuration for photopager
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{PagerError, Result};

/// Main configuration for a photopager instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Remote Configuration
    // -------------------------------------------------------------------------
    /// Root of the photos API; `/photos` is appended
    pub base_url: String,

    /// Request timeout (milliseconds), 0 disables the timeout
    pub request_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Pagination Configuration
    // -------------------------------------------------------------------------
    /// Items per page
    pub per_page: usize,

    // -------------------------------------------------------------------------
    // Snapshot Configuration
    // -------------------------------------------------------------------------
    /// Root directory for local files
    /// Internal structure:
    ///   {data_dir}/
    ///     └── photos.snap      (last fetched collection)
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://jsonplaceholder.typicode.com".to_string(),
            request_timeout_ms: 10_000,
            per_page: 10,
            data_dir: PathBuf::from("./photopager_data"),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject values the rest of the crate cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.per_page == 0 {
            return Err(PagerError::Config("per_page must be greater than 0".to_string()));
        }
        if self.base_url.trim().is_empty() {
            return Err(PagerError::Config("base_url must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the API root URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout (in milliseconds)
    pub fn request_timeout_ms(mut self, ms: u64) -> Self {
        self.config.request_timeout_ms = ms;
        self
    }

    /// Set the page size
    pub fn per_page(mut self, per_page: usize) -> Self {
        self.config.per_page = per_page;
        self
    }

    /// Set the data directory (snapshot location)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
