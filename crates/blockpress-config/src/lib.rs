use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Environment variable overriding `cms_url`.
pub const CMS_URL_VAR: &str = "WORDPRESS_URL";
/// Environment variable overriding `api_url`.
pub const API_URL_VAR: &str = "WORDPRESS_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("No CMS URL configured. Pass one as an argument, set WORDPRESS_URL or add cms_url to the config file")]
    MissingCmsUrl,

    #[error("Invalid {field} {value:?}: {source}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Public root of the WordPress site, e.g. `https://cms.example.com`.
    pub cms_url: String,
    /// REST API base; defaults to `{cms_url}/wp-json/wp/v2`.
    pub api_url: Option<String>,
    pub site_name: String,
    pub tagline: String,
    pub home_slug: String,
    /// ACF options page holding the main menu.
    pub main_menu_option: String,
    pub pages_per_request: u32,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub min_query_len: usize,
    pub debounce_ms: u64,
    pub max_results: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cms_url: String::new(),
            api_url: None,
            site_name: "Blockpress".to_string(),
            tagline: "Headless WordPress front-end".to_string(),
            home_slug: "home".to_string(),
            main_menu_option: "main-menu".to_string(),
            pages_per_request: 100,
            search: SearchConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: 3,
            debounce_ms: 500,
            max_results: 10,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables in the loaded URLs
        config.cms_url = Self::expand(&config.cms_url).unwrap_or(config.cms_url);
        config.api_url = config
            .api_url
            .map(|api_url| Self::expand(&api_url).unwrap_or(api_url));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Effective configuration: file (or defaults), then environment, then
    /// the command-line CMS URL, validated.
    pub fn resolve(cli_cms_url: Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::load()?.unwrap_or_default();
        config.apply_overrides(|name| std::env::var(name).ok());
        if let Some(cms_url) = cli_cms_url {
            config.cms_url = cms_url;
        }
        config.validate()?;
        Ok(config)
    }

    /// Apply `WORDPRESS_URL`/`WORDPRESS_API_URL` style overrides from `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        if let Some(cms_url) = non_empty(CMS_URL_VAR) {
            self.cms_url = cms_url;
        }
        if let Some(api_url) = non_empty(API_URL_VAR) {
            self.api_url = Some(api_url);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cms_url.trim().is_empty() {
            return Err(ConfigError::MissingCmsUrl);
        }
        Self::check_url("cms_url", &self.cms_url)?;
        if let Some(api_url) = &self.api_url {
            Self::check_url("api_url", api_url)?;
        }
        Ok(())
    }

    fn check_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
        Url::parse(value)
            .map(|_| ())
            .map_err(|source| ConfigError::InvalidUrl {
                field,
                value: value.to_string(),
                source,
            })
    }

    /// The CMS root without a trailing slash.
    pub fn site_url(&self) -> &str {
        self.cms_url.trim_end_matches('/')
    }

    pub fn api_base(&self) -> String {
        match &self.api_url {
            Some(api_url) => api_url.trim_end_matches('/').to_string(),
            None => format!("{}/wp-json/wp/v2", self.site_url()),
        }
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/blockpress");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand(value: &str) -> Option<String> {
        shellexpand::full(value)
            .ok()
            .map(|expanded| expanded.into_owned())
    }
}
