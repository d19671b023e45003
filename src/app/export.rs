use crate::domain::model::SocialState;
use crate::utils::error::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const NODES_FILE: &str = "nodes.csv";
pub const EDGES_FILE: &str = "edges.csv";
pub const ANALYTICS_FILE: &str = "analytics.json";

#[derive(Serialize)]
struct NodeRow<'a> {
    id: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct EdgeRow<'a> {
    key: String,
    source: &'a str,
    target: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub nodes_path: PathBuf,
    pub edges_path: PathBuf,
    pub analytics_path: PathBuf,
    pub node_count: usize,
    pub edge_count: usize,
    pub analytics_count: usize,
}

/// Writes the current view state to `output_dir`, creating it if needed.
/// Existing files with the same names are overwritten.
pub fn export_state(state: &SocialState, output_dir: &Path) -> Result<ExportSummary> {
    fs::create_dir_all(output_dir)?;

    let nodes_path = output_dir.join(NODES_FILE);
    let mut nodes = csv::Writer::from_path(&nodes_path)?;
    for (id, node) in &state.nodes {
        nodes.serialize(NodeRow {
            id,
            name: &node.name,
        })?;
    }
    nodes.flush()?;

    let edges_path = output_dir.join(EDGES_FILE);
    let mut edges = csv::Writer::from_path(&edges_path)?;
    for (key, edge) in &state.edges {
        edges.serialize(EdgeRow {
            key: key.to_string(),
            source: &edge.source,
            target: &edge.target,
        })?;
    }
    edges.flush()?;

    let analytics_path = output_dir.join(ANALYTICS_FILE);
    let json_data = serde_json::to_string_pretty(&state.analytics_data)?;
    fs::write(&analytics_path, json_data)?;

    tracing::debug!(
        "Exported {} nodes, {} edges and {} analytics rows to {}",
        state.nodes.len(),
        state.edges.len(),
        state.analytics_data.len(),
        output_dir.display()
    );

    Ok(ExportSummary {
        nodes_path,
        edges_path,
        analytics_path,
        node_count: state.nodes.len(),
        edge_count: state.edges.len(),
        analytics_count: state.analytics_data.len(),
    })
}
