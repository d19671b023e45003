use crate::domain::model::{EdgeKey, EdgeMap, EdgeView, GraphData, NodeMap, NodeView};

/// Keyed node and edge maps, the shape the graph widget consumes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphView {
    pub nodes: NodeMap,
    pub edges: EdgeMap,
}

impl GraphView {
    /// Nodes are keyed by server id (a repeated id keeps the last record);
    /// edges get `edge<i>` by position in `links`.
    pub fn from_graph_data(data: &GraphData) -> Self {
        let nodes: NodeMap = data
            .nodes
            .iter()
            .map(|n| {
                (
                    n.id.clone(),
                    NodeView {
                        name: n.name.clone().unwrap_or_default(),
                    },
                )
            })
            .collect();

        let edges: EdgeMap = data
            .links
            .iter()
            .enumerate()
            .map(|(i, l)| {
                (
                    EdgeKey(i),
                    EdgeView {
                        source: l.source.clone(),
                        target: l.target.clone(),
                    },
                )
            })
            .collect();

        Self { nodes, edges }
    }
}
