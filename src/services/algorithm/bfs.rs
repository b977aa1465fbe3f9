//! BFS算法模块
//!
//! 广度优先搜索的追踪实现。采用"入队即标记"协议：节点在入队时
//! 标记为已发现，出队时记录 visiting 步骤。每个 visiting 步骤携带
//! 到目前为止的累计访问集合（增量维护的运行集合，逐步复制）。

use crate::core::error::EngineResult;
use crate::core::step::{GraphStep, VisitSet};
use crate::graph::Graph;
use std::collections::VecDeque;

/// BFS算法结构体
pub struct Bfs;

impl Bfs {
    /// 从 `start` 运行广度优先搜索并返回完整步骤序列
    pub fn trace(graph: &Graph, start: usize) -> EngineResult<Vec<GraphStep>> {
        graph.require_built()?;
        graph.validate_node(start)?;

        let adjacency = graph.adjacency();
        let bound = graph.id_bound();

        let mut steps = Vec::new();
        let mut discovered = vec![false; bound];
        let mut visited = VisitSet::with_bound(bound);
        let mut queue: VecDeque<usize> = VecDeque::new();

        steps.push(GraphStep::new(format!("Starting BFS from node {}", start)));

        queue.push_back(start);
        discovered[start] = true;

        let mut first_step = GraphStep::new("Added start node to queue");
        first_step.current_nodes.push(start);
        steps.push(first_step);

        while let Some(current) = queue.pop_front() {
            visited.insert(current);

            let mut visit_step = GraphStep::new(format!("Visiting node {}", current));
            visit_step.visited_nodes = visited.snapshot();
            steps.push(visit_step);

            for &neighbor in &adjacency[current] {
                if !discovered[neighbor] {
                    discovered[neighbor] = true;
                    queue.push_back(neighbor);

                    let mut explore_step =
                        GraphStep::new(format!("Exploring neighbor {}", neighbor));
                    explore_step.visited_nodes = visited.snapshot();
                    explore_step.current_nodes.push(neighbor);
                    explore_step.current_edges.push((current, neighbor));
                    steps.push(explore_step);
                }
            }
        }

        steps.push(GraphStep::new("BFS Complete"));
        log::debug!("bfs completed with {} steps", steps.len());
        Ok(steps)
    }
}
