//! Prim算法模块
//!
//! 最小生成树的追踪实现。固定从节点 0 生长（显式策略，不参数化），
//! 堆键为 (进入树的边权, 节点 id)，懒删除：弹出时用树内成员检查
//! 跳过过期条目。非连通图静默产生只覆盖节点 0 所在分量的局部树。

use crate::core::error::EngineResult;
use crate::core::step::GraphStep;
use crate::graph::Graph;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Prim算法结构体
pub struct Prim;

/// 边界条目结构体，用于优先队列
#[derive(Debug, Clone, PartialEq)]
struct FrontierEntry {
    node: usize,
    key: f64,
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // 最小堆：键小的优先，相同时节点 id 小的优先
        other
            .key
            .partial_cmp(&self.key)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Prim {
    /// 运行 Prim 并返回完整步骤序列
    pub fn trace(graph: &Graph) -> EngineResult<Vec<GraphStep>> {
        graph.require_built()?;
        graph.require_non_negative_weights("prim")?;

        let weighted = graph.weighted_adjacency();
        let bound = graph.id_bound();

        let mut steps = Vec::new();
        let mut in_mst = vec![false; bound];
        let mut key: Vec<Option<f64>> = vec![None; bound];
        let mut parent: Vec<Option<usize>> = vec![None; bound];
        let mut heap: BinaryHeap<FrontierEntry> = BinaryHeap::new();

        let start = 0;
        key[start] = Some(0.0);
        heap.push(FrontierEntry {
            node: start,
            key: 0.0,
        });

        steps.push(GraphStep::new(format!(
            "Starting Prim's MST algorithm from node {}",
            start
        )));

        while let Some(FrontierEntry { node: u, .. }) = heap.pop() {
            if in_mst[u] {
                continue;
            }
            in_mst[u] = true;

            let mut add_step = GraphStep::new(format!("Added node {} to MST", u));
            add_step.visited_nodes.push(u);
            if let Some(p) = parent[u] {
                add_step.visited_edges.push((p, u));
            }
            steps.push(add_step);

            for &(v, weight) in &weighted[u] {
                let improves = match key[v] {
                    Some(current) => weight < current,
                    None => true,
                };

                if !in_mst[v] && improves {
                    key[v] = Some(weight);
                    parent[v] = Some(u);
                    heap.push(FrontierEntry {
                        node: v,
                        key: weight,
                    });

                    let mut update_step =
                        GraphStep::new(format!("Updated key for node {}", v));
                    update_step.current_edges.push((u, v));
                    steps.push(update_step);
                }
            }
        }

        steps.push(GraphStep::new("Prim's MST Complete"));
        log::debug!("prim completed with {} steps", steps.len());
        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::EngineError;
    use crate::graph::{GraphEdge, GraphNode};

    fn mst_edges(steps: &[GraphStep]) -> Vec<(usize, usize)> {
        steps
            .iter()
            .filter(|s| s.operation.starts_with("Added node"))
            .flat_map(|s| s.visited_edges.clone())
            .collect()
    }

    fn weighted_square() -> Graph {
        let mut graph = Graph::new();
        for id in 0..4 {
            graph.add_node(GraphNode::new(id));
        }
        graph.add_edge(GraphEdge::weighted(0, 1, 1.0));
        graph.add_edge(GraphEdge::weighted(1, 2, 2.0));
        graph.add_edge(GraphEdge::weighted(2, 3, 1.0));
        graph.add_edge(GraphEdge::weighted(3, 0, 5.0));
        graph
            .build_adjacency_list()
            .expect("Adjacency build should succeed");
        graph
    }

    #[test]
    fn test_always_starts_from_node_zero() {
        let graph = weighted_square();
        let steps = Prim::trace(&graph).expect("Prim should succeed");

        assert_eq!(steps[0].operation, "Starting Prim's MST algorithm from node 0");
        let first_added = steps
            .iter()
            .find(|s| s.operation.starts_with("Added node"))
            .expect("Added-node step should exist");
        assert_eq!(first_added.visited_nodes, vec![0]);
        // 根节点没有父边
        assert!(first_added.visited_edges.is_empty());
    }

    #[test]
    fn test_spanning_tree_avoids_heaviest_edge() {
        let graph = weighted_square();
        let steps = Prim::trace(&graph).expect("Prim should succeed");

        let edges = mst_edges(&steps);
        assert_eq!(edges.len(), 3);
        assert!(!edges.contains(&(3, 0)));
        assert!(!edges.contains(&(0, 3)));
    }

    #[test]
    fn test_update_steps_carry_improving_edge() {
        let graph = weighted_square();
        let steps = Prim::trace(&graph).expect("Prim should succeed");

        let first_update = steps
            .iter()
            .find(|s| s.operation.starts_with("Updated key"))
            .expect("Update step should exist");
        assert_eq!(first_update.current_edges.len(), 1);
        assert_eq!(first_update.current_edges[0].0, 0);
    }

    #[test]
    fn test_disconnected_graph_covers_only_start_component() {
        let mut graph = Graph::new();
        for id in 0..4 {
            graph.add_node(GraphNode::new(id));
        }
        graph.add_edge(GraphEdge::weighted(0, 1, 1.0));
        graph.add_edge(GraphEdge::weighted(2, 3, 1.0));
        graph
            .build_adjacency_list()
            .expect("Adjacency build should succeed");

        let steps = Prim::trace(&graph).expect("Prim should succeed");
        let added: Vec<usize> = steps
            .iter()
            .filter(|s| s.operation.starts_with("Added node"))
            .map(|s| s.visited_nodes[0])
            .collect();
        assert_eq!(added, vec![0, 1]);
    }

    #[test]
    fn test_stale_entries_skipped_silently() {
        let graph = weighted_square();
        let steps = Prim::trace(&graph).expect("Prim should succeed");

        // 每个可达节点恰好一个 added 步骤，过期堆条目不产生步骤
        let added = steps
            .iter()
            .filter(|s| s.operation.starts_with("Added node"))
            .count();
        assert_eq!(added, 4);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut graph = Graph::new();
        graph.add_node(GraphNode::new(0));
        graph.add_node(GraphNode::new(1));
        graph.add_edge(GraphEdge::weighted(0, 1, -3.0));
        graph
            .build_adjacency_list()
            .expect("Adjacency build should succeed");

        assert!(matches!(
            Prim::trace(&graph),
            Err(EngineError::UnsupportedWeight(_))
        ));
    }

    #[test]
    fn test_empty_graph_rejected() {
        let mut graph = Graph::new();
        graph
            .build_adjacency_list()
            .expect("Empty adjacency build should succeed");
        assert!(matches!(
            Prim::trace(&graph),
            Err(EngineError::EmptyInput(_))
        ));
    }
}
