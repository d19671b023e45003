#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_optional_url, validate_url, Validate};

/// Backend reached directly, without a dev-server proxy in front.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub proxy: Option<String>,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            proxy: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn from_provider<C: ConfigProvider + ?Sized>(provider: &C) -> Self {
        Self {
            base_url: provider.base_url().to_string(),
            proxy: provider.proxy().map(str::to_string),
            user_agent: provider.user_agent().map(str::to_string),
        }
    }
}

impl ConfigProvider for ClientConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_optional_url("proxy", self.proxy.as_deref())
    }
}
