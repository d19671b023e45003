use crate::domain::model::{AnalyticsData, DebugCounts, GraphData, SeedSummary, ServiceStatus};
use crate::domain::ports::{ConfigProvider, SocialApi};
use crate::utils::error::{Result, SocialGraphError};
use async_trait::async_trait;
use reqwest::{Client, Proxy, Response};
use serde::de::DeserializeOwned;
use url::Url;

/// reqwest-backed client for the graph API. Calls go straight through: no
/// retry, no timeout, no reshaping of the response.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(proxy) = config.proxy() {
            tracing::debug!("Routing API requests through proxy {}", proxy);
            builder = builder.proxy(Proxy::all(proxy)?);
        }
        if let Some(user_agent) = config.user_agent() {
            builder = builder.user_agent(user_agent.to_string());
        }

        Self::with_client(config.base_url(), builder.build()?)
    }

    pub fn with_client(base_url: &str, client: Client) -> Result<Self> {
        // parse only to reject garbage early; requests use the string form
        Url::parse(base_url)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET /`
    pub async fn health(&self) -> Result<ServiceStatus> {
        self.get_json("").await
    }

    /// `GET /debug`
    pub async fn debug_counts(&self) -> Result<DebugCounts> {
        self.get_json("debug").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::decode(url, response).await
    }

    async fn post_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        tracing::debug!("POST {}", url);
        let response = self.client.post(&url).send().await?;
        Self::decode(url, response).await
    }

    async fn decode<T: DeserializeOwned>(url: String, response: Response) -> Result<T> {
        let status = response.status();
        tracing::debug!("API response status: {} ({})", status, url);

        if !status.is_success() {
            return Err(SocialGraphError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl SocialApi for ApiClient {
    async fn seed_database(&self) -> Result<SeedSummary> {
        self.post_json("seed").await
    }

    async fn get_graph_data(&self) -> Result<GraphData> {
        self.get_json("graph-data").await
    }

    async fn get_analytics(&self) -> Result<AnalyticsData> {
        self.get_json("analytics").await
    }
}
