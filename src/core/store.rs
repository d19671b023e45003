use crate::core::view::GraphView;
use crate::domain::model::{AnalyticsData, EdgeMap, NodeMap, SeedSummary, SocialState};
use crate::domain::ports::SocialApi;
use crate::utils::error::Result;
use tokio::sync::watch;

/// Reactive state container for the graph view.
///
/// State lives in a `watch` channel: readers take a [`snapshot`] or
/// [`subscribe`] to every change. Concurrent fetches are not coordinated;
/// whichever assignment lands last wins.
///
/// [`snapshot`]: SocialStore::snapshot
/// [`subscribe`]: SocialStore::subscribe
pub struct SocialStore<A: SocialApi> {
    api: A,
    state: watch::Sender<SocialState>,
}

/// Clears `is_loading` when dropped, including when the owning future is
/// dropped before completion.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<SocialState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        set_loading(self.state, false);
    }
}

fn set_loading(state: &watch::Sender<SocialState>, value: bool) {
    state.send_if_modified(|s| {
        if s.is_loading == value {
            return false;
        }
        s.is_loading = value;
        true
    });
}

impl<A: SocialApi> SocialStore<A> {
    pub fn new(api: A) -> Self {
        let (state, _) = watch::channel(SocialState::default());
        Self { api, state }
    }

    /// Loads graph data, then analytics.
    ///
    /// Never fails: an error from either call is logged and the state keeps
    /// whatever was assigned before it. If the graph call succeeded and the
    /// analytics call failed, the new nodes and edges stay next to the old
    /// analytics.
    pub async fn fetch_all_data(&self) {
        set_loading(&self.state, true);
        let _loading = LoadingGuard { state: &self.state };

        if let Err(e) = self.load_graph_and_analytics().await {
            tracing::error!("❌ Failed to fetch graph data: {}", e);
        }
    }

    /// Seeds the backend, then runs [`fetch_all_data`](Self::fetch_all_data).
    /// A seed failure is returned to the caller and nothing is fetched.
    pub async fn reset_and_seed(&self) -> Result<SeedSummary> {
        set_loading(&self.state, true);
        let _loading = LoadingGuard { state: &self.state };

        let summary = self.api.seed_database().await?;
        tracing::info!(
            "🌱 Seeded backend: {} nodes, {} relationships",
            summary.nodes,
            summary.relationships
        );

        self.fetch_all_data().await;
        Ok(summary)
    }

    async fn load_graph_and_analytics(&self) -> Result<()> {
        let graph = self.api.get_graph_data().await?;
        let view = GraphView::from_graph_data(&graph);
        tracing::debug!(
            "fetch_all_data: {} nodes, {} edges",
            view.nodes.len(),
            view.edges.len()
        );
        self.state.send_modify(|s| {
            s.nodes = view.nodes;
            s.edges = view.edges;
        });

        let analytics = self.api.get_analytics().await?;
        tracing::debug!("fetch_all_data: {} analytics rows", analytics.len());
        self.state.send_modify(|s| s.analytics_data = analytics);

        Ok(())
    }

    pub fn snapshot(&self) -> SocialState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SocialState> {
        self.state.subscribe()
    }

    pub fn nodes(&self) -> NodeMap {
        self.state.borrow().nodes.clone()
    }

    pub fn edges(&self) -> EdgeMap {
        self.state.borrow().edges.clone()
    }

    pub fn analytics_data(&self) -> AnalyticsData {
        self.state.borrow().analytics_data.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }
}
