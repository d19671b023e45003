use crate::domain::model::{AnalyticsData, GraphData, SeedSummary};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn proxy(&self) -> Option<&str>;
    fn user_agent(&self) -> Option<&str>;
}

/// The three backend calls the store depends on.
#[async_trait]
pub trait SocialApi: Send + Sync {
    async fn seed_database(&self) -> Result<SeedSummary>;
    async fn get_graph_data(&self) -> Result<GraphData>;
    async fn get_analytics(&self) -> Result<AnalyticsData>;
}
