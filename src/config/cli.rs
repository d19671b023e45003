use crate::config::toml_config::TomlConfig;
use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "social-graph")]
#[command(about = "Fetch, seed and export social graph data from the graph API")]
pub struct CliConfig {
    /// API root the endpoint paths are joined onto
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// HTTP proxy for all requests
    #[arg(long, global = true)]
    pub proxy: Option<String>,

    /// TOML file with a [client] section; flags win over it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Load graph data and analytics and print the resulting state
    Fetch,
    /// Reset the backend with sample data, then reload
    Seed,
    /// Print the analytics array as returned by the backend
    Analytics,
    /// Check the backend root and its node/relationship counts
    Health,
    /// Load everything and write nodes.csv, edges.csv and analytics.json
    Export {
        #[arg(long, default_value = "./output")]
        output_dir: PathBuf,
    },
}

impl CliConfig {
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        self.config.as_ref().map(TomlConfig::from_file).transpose()
    }

    /// Merges flags over the optional TOML file.
    pub fn resolve(&self) -> Result<ClientConfig> {
        let file = self.load_file()?;
        self.merge(file.as_ref())
    }

    pub fn merge(&self, file: Option<&TomlConfig>) -> Result<ClientConfig> {
        let mut resolved = file.map(TomlConfig::client_config).unwrap_or_default();

        if let Some(base_url) = &self.base_url {
            resolved.base_url = base_url.clone();
        }
        if let Some(proxy) = &self.proxy {
            resolved.proxy = Some(proxy.clone());
        }

        resolved.validate()?;
        Ok(resolved)
    }
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    fn user_agent(&self) -> Option<&str> {
        None
    }
}
