//! Graph model
//!
//! Owns insertion-ordered nodes and edges plus derived adjacency structures.
//! The model is write-append-then-compute: `add_node` / `add_edge` never
//! validate or deduplicate, and the adjacency lists are rebuilt explicitly by
//! [`Graph::build_adjacency_list`] rather than kept in sync with edits.

use crate::core::error::{EngineError, EngineResult};
use crate::core::step::GraphStep;
use crate::services::algorithm::{AStar, Bfs, Dfs, Dijkstra, Kruskal, Prim};
use serde::{Deserialize, Serialize};

/// A graph node. Immutable after creation; coordinates feed only the A*
/// heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: usize,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl GraphNode {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            label: String::new(),
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn with_label(id: usize, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::new(id)
        }
    }

    pub fn with_position(id: usize, x: f64, y: f64) -> Self {
        Self { x, y, ..Self::new(id) }
    }
}

/// A graph edge. Endpoints need not have been added as nodes; they are
/// validated against the id bound when the adjacency lists are built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: usize,
    pub to: usize,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub directed: bool,
}

fn default_weight() -> f64 {
    1.0
}

impl GraphEdge {
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            weight: 1.0,
            directed: false,
        }
    }

    pub fn weighted(from: usize, to: usize, weight: f64) -> Self {
        Self {
            weight,
            ..Self::new(from, to)
        }
    }

    pub fn directed(from: usize, to: usize, weight: f64) -> Self {
        Self {
            weight,
            directed: true,
            ..Self::new(from, to)
        }
    }
}

/// The graph model shared by all graph algorithms.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    adj_list: Vec<Vec<usize>>,
    weighted_adj_list: Vec<Vec<(usize, f64)>>,
    adjacency_built: bool,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node. Duplicate ids are legal and not checked here.
    pub fn add_node(&mut self, node: GraphNode) {
        self.nodes.push(node);
        self.adjacency_built = false;
    }

    /// Append an edge. Duplicate edges are legal and simply produce duplicate
    /// adjacency entries.
    pub fn add_edge(&mut self, edge: GraphEdge) {
        self.edges.push(edge);
        self.adjacency_built = false;
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Rebuild both adjacency representations from scratch in O(N+E).
    ///
    /// Arrays are sized `max(node.id) + 1`. Node ids referenced by edges but
    /// never added via `add_node` are tolerated as long as they stay inside
    /// that bound; an out-of-range endpoint fails fast with
    /// [`EngineError::InvalidNodeReference`]. Non-finite weights are rejected
    /// here so every algorithm can rely on total ordering.
    pub fn build_adjacency_list(&mut self) -> EngineResult<()> {
        let bound = self
            .nodes
            .iter()
            .map(|node| node.id + 1)
            .max()
            .unwrap_or(0);

        let mut adj_list = vec![Vec::new(); bound];
        let mut weighted_adj_list = vec![Vec::new(); bound];

        for edge in &self.edges {
            if edge.from >= bound {
                return Err(EngineError::InvalidNodeReference(edge.from));
            }
            if edge.to >= bound {
                return Err(EngineError::InvalidNodeReference(edge.to));
            }
            if !edge.weight.is_finite() {
                return Err(EngineError::UnsupportedWeight(format!(
                    "edge {} -> {} has non-finite weight {}",
                    edge.from, edge.to, edge.weight
                )));
            }

            adj_list[edge.from].push(edge.to);
            weighted_adj_list[edge.from].push((edge.to, edge.weight));

            if !edge.directed {
                adj_list[edge.to].push(edge.from);
                weighted_adj_list[edge.to].push((edge.from, edge.weight));
            }
        }

        self.adj_list = adj_list;
        self.weighted_adj_list = weighted_adj_list;
        self.adjacency_built = true;
        Ok(())
    }

    /// 算法入口的公共校验：图非空且邻接表已构建
    pub(crate) fn require_built(&self) -> EngineResult<()> {
        if self.nodes.is_empty() {
            return Err(EngineError::EmptyInput("graph has no nodes".to_string()));
        }
        if !self.adjacency_built {
            return Err(EngineError::AdjacencyNotBuilt);
        }
        Ok(())
    }

    /// 节点 id 的上界（邻接数组长度）
    pub(crate) fn id_bound(&self) -> usize {
        self.adj_list.len()
    }

    pub(crate) fn validate_node(&self, id: usize) -> EngineResult<()> {
        if id >= self.id_bound() {
            return Err(EngineError::InvalidNodeReference(id));
        }
        Ok(())
    }

    pub(crate) fn adjacency(&self) -> &[Vec<usize>] {
        &self.adj_list
    }

    pub(crate) fn weighted_adjacency(&self) -> &[Vec<(usize, f64)>] {
        &self.weighted_adj_list
    }

    /// Dijkstra/A*/Prim 的正确性依赖非负权重，入口处显式拒绝
    pub(crate) fn require_non_negative_weights(&self, algorithm: &str) -> EngineResult<()> {
        for edge in &self.edges {
            if edge.weight < 0.0 {
                return Err(EngineError::UnsupportedWeight(format!(
                    "{} does not support negative weight {} on edge {} -> {}",
                    algorithm, edge.weight, edge.from, edge.to
                )));
            }
        }
        Ok(())
    }

    /// Breadth-first traversal trace from `start`.
    pub fn bfs(&self, start: usize) -> EngineResult<Vec<GraphStep>> {
        log::debug!(
            "executing bfs with {} nodes and {} edges, start={}",
            self.nodes.len(),
            self.edges.len(),
            start
        );
        Bfs::trace(self, start)
    }

    /// Depth-first traversal trace from `start`.
    pub fn dfs(&self, start: usize) -> EngineResult<Vec<GraphStep>> {
        log::debug!(
            "executing dfs with {} nodes and {} edges, start={}",
            self.nodes.len(),
            self.edges.len(),
            start
        );
        Dfs::trace(self, start)
    }

    /// Shortest-path trace from `start`; stops early when `end` is processed.
    pub fn dijkstra(&self, start: usize, end: Option<usize>) -> EngineResult<Vec<GraphStep>> {
        log::debug!(
            "executing dijkstra with {} nodes and {} edges, start={}, end={:?}",
            self.nodes.len(),
            self.edges.len(),
            start,
            end
        );
        Dijkstra::trace(self, start, end)
    }

    /// A* trace toward a mandatory target.
    pub fn astar(&self, start: usize, end: usize) -> EngineResult<Vec<GraphStep>> {
        log::debug!(
            "executing astar with {} nodes and {} edges, start={}, end={}",
            self.nodes.len(),
            self.edges.len(),
            start,
            end
        );
        AStar::trace(self, start, end)
    }

    /// Kruskal MST trace; disconnected graphs yield a spanning forest.
    pub fn kruskal(&self) -> EngineResult<Vec<GraphStep>> {
        log::debug!(
            "executing kruskal with {} nodes and {} edges",
            self.nodes.len(),
            self.edges.len()
        );
        Kruskal::trace(self)
    }

    /// Prim MST trace, always rooted at node 0.
    pub fn prim(&self) -> EngineResult<Vec<GraphStep>> {
        log::debug!(
            "executing prim with {} nodes and {} edges",
            self.nodes.len(),
            self.edges.len()
        );
        Prim::trace(self)
    }
}
