use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Node record as returned by `GET /graph-data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub links: Vec<GraphLink>,
}

/// Analytics rows are not interpreted by the store; they are handed to the
/// view as the backend sent them.
pub type AnalyticsData = Vec<serde_json::Value>;

/// Typed reading of one analytics row, for callers that want it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowerCount {
    pub name: Option<String>,
    pub followers: u64,
}

impl FollowerCount {
    /// Rows that do not match the `{ name, followers }` shape are skipped.
    pub fn from_analytics(data: &[serde_json::Value]) -> Vec<FollowerCount> {
        data.iter()
            .filter_map(|row| serde_json::from_value(row.clone()).ok())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedSummary {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub nodes: u64,
    #[serde(default)]
    pub relationships: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugCounts {
    pub nodes: u64,
    pub relationships: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeView {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeView {
    pub source: String,
    pub target: String,
}

/// Positional edge label. Renders as `edge<index>` and orders by index, so a
/// map keyed by it iterates in response order (`edge2` before `edge10`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey(pub usize);

impl EdgeKey {
    pub fn index(&self) -> usize {
        self.0
    }

    pub fn parse(label: &str) -> Option<EdgeKey> {
        label
            .strip_prefix("edge")
            .and_then(|digits| digits.parse().ok())
            .map(EdgeKey)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge{}", self.0)
    }
}

impl Serialize for EdgeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EdgeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        EdgeKey::parse(&label)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid edge key: {}", label)))
    }
}

pub type NodeMap = BTreeMap<String, NodeView>;
pub type EdgeMap = BTreeMap<EdgeKey, EdgeView>;

/// Everything the graph view renders from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SocialState {
    pub nodes: NodeMap,
    pub edges: EdgeMap,
    pub analytics_data: AnalyticsData,
    pub is_loading: bool,
}
