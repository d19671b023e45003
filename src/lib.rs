pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{toml_config::TomlConfig, ClientConfig};
pub use core::{api::ApiClient, store::SocialStore, view::GraphView};
pub use utils::error::{Result, SocialGraphError};
