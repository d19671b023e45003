use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SocialGraphError};
use crate::utils::validation::{validate_optional_url, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub client: ClientSection,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub proxy: Option<String>,
    pub user_agent: Option<String>,
}

impl Default for ClientSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            proxy: None,
            user_agent: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

fn env_placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is a valid regex")
    })
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SocialGraphError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SocialGraphError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left
    /// in place so validation reports them.
    fn substitute_env_vars(content: &str) -> String {
        env_placeholder()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.json)
            .unwrap_or(false)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::from_provider(self)
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.client.base_url
    }

    fn proxy(&self) -> Option<&str> {
        self.client.proxy.as_deref()
    }

    fn user_agent(&self) -> Option<&str> {
        self.client.user_agent.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("client.base_url", &self.client.base_url)?;
        validate_optional_url("client.proxy", self.client.proxy.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[client]
base_url = "https://graph.example.com/api"
proxy = "http://127.0.0.1:3128"
user_agent = "graph-viewer/1.0"

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_url(), "https://graph.example.com/api");
        assert_eq!(config.proxy(), Some("http://127.0.0.1:3128"));
        assert_eq!(config.user_agent(), Some("graph-viewer/1.0"));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.proxy(), None);
        assert_eq!(config.log_level(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SOCIAL_GRAPH_TEST_HOST", "graph.internal:9000");
        let config = TomlConfig::from_toml_str(
            r#"
[client]
base_url = "http://${SOCIAL_GRAPH_TEST_HOST}/api"
"#,
        )
        .unwrap();
        assert_eq!(config.base_url(), "http://graph.internal:9000/api");
    }

    #[test]
    fn test_unset_env_var_is_kept() {
        let config = TomlConfig::from_toml_str(
            r#"
[client]
base_url = "${SOCIAL_GRAPH_TEST_SURELY_UNSET}"
"#,
        )
        .unwrap();
        assert_eq!(config.base_url(), "${SOCIAL_GRAPH_TEST_SURELY_UNSET}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[client\nbase_url = ").unwrap_err();
        assert!(matches!(err, SocialGraphError::ConfigError { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[client]\nbase_url = \"http://127.0.0.1:8000\"").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.client_config().base_url, "http://127.0.0.1:8000");
    }
}
