//! A*算法模块
//!
//! 带启发式的最短路径追踪实现。启发函数为节点平面坐标到目标的
//! 欧几里得距离（可采纳，不会高估非负权重下的剩余代价）。
//! 与 Dijkstra 不同，A* 必须提供目标节点，不支持跑到穷尽模式。

use crate::core::error::EngineResult;
use crate::core::step::GraphStep;
use crate::graph::Graph;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A*算法结构体
pub struct AStar;

/// A*节点结构体，用于优先队列
#[derive(Debug, Clone, PartialEq)]
struct AStarNode {
    node: usize,
    /// 从起点到当前节点的实际代价
    g_score: f64,
    /// g_score + 启发式估计
    f_score: f64,
}

impl Eq for AStarNode {}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // 最小堆：f_score 小的优先，相同时节点 id 小的优先
        other
            .f_score
            .partial_cmp(&self.f_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl AStar {
    /// 从 `start` 向 `end` 运行 A* 并返回完整步骤序列
    ///
    /// 找到目标时以一个 "Path found!" 步骤结束，其中按源→目标顺序
    /// 携带完整路径的节点与边；开放集耗尽而未到达目标时，以一个
    /// 显式的 "No path" 终止步骤结束，调用方无需从步骤缺失推断失败。
    pub fn trace(graph: &Graph, start: usize, end: usize) -> EngineResult<Vec<GraphStep>> {
        graph.require_built()?;
        graph.validate_node(start)?;
        graph.validate_node(end)?;
        graph.require_non_negative_weights("astar")?;

        let weighted = graph.weighted_adjacency();
        let bound = graph.id_bound();

        // 坐标按 id 索引；仅被边引用而未显式添加的节点没有坐标，
        // 对它们启发式退化为 0（等价于局部的 Dijkstra）
        let mut coordinates: Vec<Option<(f64, f64)>> = vec![None; bound];
        for node in graph.nodes() {
            coordinates[node.id] = Some((node.x, node.y));
        }
        let heuristic = |a: usize, b: usize| -> f64 {
            match (coordinates[a], coordinates[b]) {
                (Some((ax, ay)), Some((bx, by))) => {
                    let dx = ax - bx;
                    let dy = ay - by;
                    (dx * dx + dy * dy).sqrt()
                }
                _ => 0.0,
            }
        };

        let mut steps = Vec::new();
        let mut g_score: Vec<Option<f64>> = vec![None; bound];
        let mut parent: Vec<Option<usize>> = vec![None; bound];
        let mut open_set: BinaryHeap<AStarNode> = BinaryHeap::new();

        g_score[start] = Some(0.0);
        open_set.push(AStarNode {
            node: start,
            g_score: 0.0,
            f_score: heuristic(start, end),
        });

        steps.push(GraphStep::new(format!(
            "Starting A* from {} to {}",
            start, end
        )));

        let mut path_found = false;

        while let Some(current) = open_set.pop() {
            let u = current.node;

            let mut exploring_step = GraphStep::new(format!("Exploring node {}", u));
            exploring_step.current_nodes.push(u);
            steps.push(exploring_step);

            if u == end {
                log::debug!("astar reached target {} with cost {}", end, current.g_score);
                let mut path_step = GraphStep::new("Path found!");
                let mut node = end;
                path_step.visited_nodes.push(node);
                while let Some(p) = parent[node] {
                    path_step.visited_edges.push((p, node));
                    path_step.visited_nodes.push(p);
                    node = p;
                }
                // 父指针回溯得到目标→起点，校正为源→目标顺序
                path_step.visited_nodes.reverse();
                path_step.visited_edges.reverse();
                steps.push(path_step);
                path_found = true;
                break;
            }

            let current_g = match g_score[u] {
                Some(g) => g,
                None => continue,
            };

            for &(neighbor, weight) in &weighted[u] {
                let tentative = current_g + weight;
                let improves = match g_score[neighbor] {
                    Some(existing) => tentative < existing,
                    None => true,
                };

                if improves {
                    parent[neighbor] = Some(u);
                    g_score[neighbor] = Some(tentative);
                    open_set.push(AStarNode {
                        node: neighbor,
                        g_score: tentative,
                        f_score: tentative + heuristic(neighbor, end),
                    });

                    let mut update_step =
                        GraphStep::new(format!("Updated path to node {}", neighbor));
                    update_step.current_edges.push((u, neighbor));
                    steps.push(update_step);
                }
            }
        }

        if !path_found {
            steps.push(GraphStep::new(format!(
                "No path from {} to {} found",
                start, end
            )));
        }

        log::debug!(
            "astar completed with {} steps, path_found={}",
            steps.len(),
            path_found
        );
        Ok(steps)
    }
}
