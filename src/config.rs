use crate::error::{Result, ScraperError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Largest `maxResults` the commentThreads endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    pub key: Option<String>,
    pub base_url: String,
    pub page_size: u32,
    /// Unset means pagination follows the server until it stops sending a cursor.
    pub max_pages: Option<u32>,
    pub timeout: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: MAX_PAGE_SIZE,
            max_pages: None,
            timeout: 30,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ScraperError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ScraperError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ScraperError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = [
                    "yt-comments.toml",
                    "yt-comments.config.toml",
                    ".yt-comments.toml",
                ];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref key) = cli_args.api_key {
            self.api.key = Some(key.clone());
        }

        if let Some(page_size) = cli_args.page_size {
            self.api.page_size = page_size;
        }

        if let Some(max_pages) = cli_args.max_pages {
            self.api.max_pages = Some(max_pages);
        }

        if let Some(timeout) = cli_args.timeout {
            self.api.timeout = timeout;
        }

        if let Some(ref output_dir) = cli_args.output_dir {
            self.output.directory = output_dir.clone();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key().is_none() {
            return Err(ScraperError::Config {
                message: "No YouTube Data API key configured".to_string(),
            });
        }

        if self.api.page_size == 0 || self.api.page_size > MAX_PAGE_SIZE {
            return Err(ScraperError::Config {
                message: format!(
                    "Page size must be between 1 and {} (got {})",
                    MAX_PAGE_SIZE, self.api.page_size
                ),
            });
        }

        if self.api.max_pages == Some(0) {
            return Err(ScraperError::Config {
                message: "Maximum page count must be greater than 0".to_string(),
            });
        }

        if self.api.timeout == 0 {
            return Err(ScraperError::Config {
                message: "Request timeout must be greater than 0".to_string(),
            });
        }

        url::Url::parse(&self.api.base_url).map_err(|e| ScraperError::Config {
            message: format!("Invalid API base URL {}: {}", self.api.base_url, e),
        })?;

        if !self.output.directory.is_dir() {
            return Err(ScraperError::Config {
                message: format!(
                    "Output directory does not exist: {}",
                    self.output.directory.display()
                ),
            });
        }

        Ok(())
    }

    /// The configured key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.api
            .key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout)
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub api_key: Option<String>,
    pub page_size: Option<u32>,
    pub max_pages: Option<u32>,
    pub timeout: Option<u64>,
    pub output_dir: Option<PathBuf>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_page_size(mut self, page_size: Option<u32>) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<u64>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.output_dir = output_dir;
        self
    }
}
