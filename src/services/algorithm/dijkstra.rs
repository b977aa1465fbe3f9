//! Dijkstra算法模块
//!
//! 带权图最短路径的追踪实现。经典松弛 + 二叉最小堆，堆键为
//! (暂定距离, 节点 id)，与原生 pair 比较一致，保证轨迹确定。
//! 距离表用 `Option<f64>` 表示"无穷大"，步骤中只出现有限距离。

use crate::core::error::EngineResult;
use crate::core::step::{sparse_distances, sparse_parents, GraphStep};
use crate::graph::Graph;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Dijkstra算法结构体
pub struct Dijkstra;

/// 节点距离结构体，用于优先队列
#[derive(Debug, Clone, PartialEq)]
struct NodeDistance {
    node: usize,
    distance: f64,
}

impl Eq for NodeDistance {}

impl Ord for NodeDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        // 最小堆：距离小的优先，距离相同时节点 id 小的优先
        // 权重在构建邻接表时已校验为有限值
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for NodeDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Dijkstra {
    /// 从 `start` 运行 Dijkstra 并返回完整步骤序列
    ///
    /// 提供 `end` 时在处理完目标节点后提前终止；否则跑完整个可达分量。
    pub fn trace(graph: &Graph, start: usize, end: Option<usize>) -> EngineResult<Vec<GraphStep>> {
        graph.require_built()?;
        graph.validate_node(start)?;
        if let Some(end) = end {
            graph.validate_node(end)?;
        }
        graph.require_non_negative_weights("dijkstra")?;

        let weighted = graph.weighted_adjacency();
        let bound = graph.id_bound();

        let mut steps = Vec::new();
        let mut dist: Vec<Option<f64>> = vec![None; bound];
        let mut parent: Vec<Option<usize>> = vec![None; bound];
        let mut heap: BinaryHeap<NodeDistance> = BinaryHeap::new();

        dist[start] = Some(0.0);
        heap.push(NodeDistance {
            node: start,
            distance: 0.0,
        });

        let mut initial_step = GraphStep::new(format!("Starting Dijkstra from node {}", start));
        initial_step.distances.insert(start, 0.0);
        steps.push(initial_step);

        while let Some(NodeDistance { node: u, distance: d }) = heap.pop() {
            // 懒删除：过期的堆条目不产生步骤
            match dist[u] {
                Some(best) if d > best => continue,
                _ => {}
            }

            let mut processing_step =
                GraphStep::new(format!("Processing node {} with distance {}", u, d));
            processing_step.current_nodes.push(u);
            processing_step.distances = sparse_distances(&dist);
            processing_step.parents = sparse_parents(&parent);
            steps.push(processing_step);

            for &(v, weight) in &weighted[u] {
                let candidate = d + weight;
                let improves = match dist[v] {
                    Some(current) => candidate < current,
                    None => true,
                };

                if improves {
                    dist[v] = Some(candidate);
                    parent[v] = Some(u);
                    heap.push(NodeDistance {
                        node: v,
                        distance: candidate,
                    });

                    let mut relax_step = GraphStep::new(format!("Relaxed edge {} -> {}", u, v));
                    relax_step.current_edges.push((u, v));
                    relax_step.distances = sparse_distances(&dist);
                    relax_step.parents = sparse_parents(&parent);
                    steps.push(relax_step);
                }
            }

            if end == Some(u) {
                break;
            }
        }

        let mut final_step = GraphStep::new("Dijkstra Complete");
        final_step.distances = sparse_distances(&dist);
        final_step.parents = sparse_parents(&parent);
        steps.push(final_step);

        log::debug!("dijkstra completed with {} steps", steps.len());
        Ok(steps)
    }
}
