//! Kruskal算法模块
//!
//! 最小生成树的追踪实现。边按权重稳定升序排序（权重相同保持
//! 插入顺序，保证轨迹确定），并查集判断环。每个 "Added edge to MST"
//! 步骤携带到目前为止的累计 MST 边集（增量维护的运行集合）。
//! 非连通图产生生成森林，不视为错误。

use crate::core::error::EngineResult;
use crate::core::step::GraphStep;
use crate::graph::Graph;
use std::cmp::Ordering;

/// Kruskal算法结构体
pub struct Kruskal;

/// 并查集，路径压缩 + 按秩合并
///
/// find 为两遍迭代式路径压缩，避免在病态输入上的递归深度风险
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // 第二遍：把路径上的所有节点直接挂到根
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// 合并两个集合，若本就同属一个集合则返回 false
    fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }
        match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Less => self.parent[root_x] = root_y,
            Ordering::Greater => self.parent[root_y] = root_x,
            Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }
}

impl Kruskal {
    /// 运行 Kruskal 并返回完整步骤序列
    pub fn trace(graph: &Graph) -> EngineResult<Vec<GraphStep>> {
        graph.require_built()?;

        let bound = graph.id_bound();
        let mut steps = Vec::new();

        // 稳定排序：权重相同的边保持原始插入顺序
        let mut sorted_edges = graph.edges().to_vec();
        sorted_edges.sort_by(|a, b| {
            a.weight
                .partial_cmp(&b.weight)
                .unwrap_or(Ordering::Equal)
        });

        steps.push(GraphStep::new("Starting Kruskal's MST algorithm"));

        let mut uf = UnionFind::new(bound);
        let mut mst_edges: Vec<(usize, usize)> = Vec::new();

        for edge in &sorted_edges {
            let mut consider_step = GraphStep::new(format!(
                "Considering edge {} -> {} (weight: {})",
                edge.from, edge.to, edge.weight
            ));
            consider_step.current_edges.push((edge.from, edge.to));
            steps.push(consider_step);

            if uf.union(edge.from, edge.to) {
                mst_edges.push((edge.from, edge.to));
                let mut add_step = GraphStep::new("Added edge to MST");
                add_step.visited_edges = mst_edges.clone();
                steps.push(add_step);
            } else {
                steps.push(GraphStep::new("Rejected edge (would create cycle)"));
            }
        }

        steps.push(GraphStep::new("Kruskal's MST Complete"));
        log::debug!(
            "kruskal completed with {} steps, {} mst edges",
            steps.len(),
            mst_edges.len()
        );
        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::EngineError;
    use crate::graph::{GraphEdge, GraphNode};

    fn accepted_edges(steps: &[GraphStep]) -> Vec<(usize, usize)> {
        steps
            .iter()
            .filter(|s| s.operation == "Added edge to MST")
            .last()
            .map(|s| s.visited_edges.clone())
            .unwrap_or_default()
    }

    #[test]
    fn test_triangle_rejects_cycle_edge() {
        let mut graph = Graph::new();
        for id in 0..3 {
            graph.add_node(GraphNode::new(id));
        }
        graph.add_edge(GraphEdge::weighted(0, 1, 1.0));
        graph.add_edge(GraphEdge::weighted(1, 2, 2.0));
        graph.add_edge(GraphEdge::weighted(0, 2, 3.0));
        graph
            .build_adjacency_list()
            .expect("Adjacency build should succeed");

        let steps = Kruskal::trace(&graph).expect("Kruskal should succeed");
        assert_eq!(accepted_edges(&steps), vec![(0, 1), (1, 2)]);
        let rejected = steps
            .iter()
            .filter(|s| s.operation.starts_with("Rejected"))
            .count();
        assert_eq!(rejected, 1);
    }

    #[test]
    fn test_edges_considered_in_ascending_weight_order() {
        let mut graph = Graph::new();
        for id in 0..4 {
            graph.add_node(GraphNode::new(id));
        }
        graph.add_edge(GraphEdge::weighted(0, 1, 4.0));
        graph.add_edge(GraphEdge::weighted(1, 2, 1.0));
        graph.add_edge(GraphEdge::weighted(2, 3, 3.0));
        graph
            .build_adjacency_list()
            .expect("Adjacency build should succeed");

        let steps = Kruskal::trace(&graph).expect("Kruskal should succeed");
        let considered: Vec<(usize, usize)> = steps
            .iter()
            .filter(|s| s.operation.starts_with("Considering"))
            .map(|s| s.current_edges[0])
            .collect();
        assert_eq!(considered, vec![(1, 2), (2, 3), (0, 1)]);
    }

    #[test]
    fn test_equal_weights_keep_insertion_order() {
        let mut graph = Graph::new();
        for id in 0..3 {
            graph.add_node(GraphNode::new(id));
        }
        graph.add_edge(GraphEdge::weighted(2, 1, 1.0));
        graph.add_edge(GraphEdge::weighted(0, 1, 1.0));
        graph
            .build_adjacency_list()
            .expect("Adjacency build should succeed");

        let steps = Kruskal::trace(&graph).expect("Kruskal should succeed");
        let considered: Vec<(usize, usize)> = steps
            .iter()
            .filter(|s| s.operation.starts_with("Considering"))
            .map(|s| s.current_edges[0])
            .collect();
        assert_eq!(considered, vec![(2, 1), (0, 1)]);
    }

    #[test]
    fn test_cumulative_mst_edge_sets() {
        let mut graph = Graph::new();
        for id in 0..4 {
            graph.add_node(GraphNode::new(id));
        }
        graph.add_edge(GraphEdge::weighted(0, 1, 1.0));
        graph.add_edge(GraphEdge::weighted(1, 2, 2.0));
        graph.add_edge(GraphEdge::weighted(2, 3, 3.0));
        graph
            .build_adjacency_list()
            .expect("Adjacency build should succeed");

        let steps = Kruskal::trace(&graph).expect("Kruskal should succeed");
        let added: Vec<&GraphStep> = steps
            .iter()
            .filter(|s| s.operation == "Added edge to MST")
            .collect();
        assert_eq!(added.len(), 3);
        for (i, step) in added.iter().enumerate() {
            assert_eq!(step.visited_edges.len(), i + 1);
        }
        // 前序步骤的边始终保留在后续快照中
        assert_eq!(added[2].visited_edges[0], (0, 1));
    }

    #[test]
    fn test_disconnected_graph_yields_forest() {
        let mut graph = Graph::new();
        for id in 0..5 {
            graph.add_node(GraphNode::new(id));
        }
        // 两个分量：{0,1,2} 和 {3,4}
        graph.add_edge(GraphEdge::weighted(0, 1, 1.0));
        graph.add_edge(GraphEdge::weighted(1, 2, 1.0));
        graph.add_edge(GraphEdge::weighted(3, 4, 1.0));
        graph
            .build_adjacency_list()
            .expect("Adjacency build should succeed");

        let steps = Kruskal::trace(&graph).expect("Kruskal should succeed");
        // |V| - c = 5 - 2 = 3
        assert_eq!(accepted_edges(&steps).len(), 3);
    }

    #[test]
    fn test_empty_graph_rejected() {
        let mut graph = Graph::new();
        graph
            .build_adjacency_list()
            .expect("Empty adjacency build should succeed");
        assert!(matches!(
            Kruskal::trace(&graph),
            Err(EngineError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_union_find_basics() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(!uf.union(1, 0));
        assert_ne!(uf.find(0), uf.find(2));
        assert!(uf.union(1, 3));
        assert_eq!(uf.find(0), uf.find(2));
    }

    #[test]
    fn test_union_find_path_compression() {
        let mut uf = UnionFind::new(6);
        for i in 0..5 {
            uf.union(i, i + 1);
        }
        let root = uf.find(5);
        for i in 0..6 {
            assert_eq!(uf.find(i), root);
        }
    }
}
