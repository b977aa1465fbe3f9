//! DFS算法模块
//!
//! 深度优先搜索的追踪实现。采用"发现即压栈、弹栈才访问"协议：
//! 邻居按邻接顺序压栈，因而以逆邻接顺序被访问；弹出已访问节点
//! 不产生任何步骤。与 BFS 的"入队即标记"协议的不对称是有意的，
//! 并且在轨迹中可观察。

use crate::core::error::EngineResult;
use crate::core::step::{GraphStep, VisitSet};
use crate::graph::Graph;

/// DFS算法结构体
pub struct Dfs;

impl Dfs {
    /// 从 `start` 运行深度优先搜索并返回完整步骤序列
    pub fn trace(graph: &Graph, start: usize) -> EngineResult<Vec<GraphStep>> {
        graph.require_built()?;
        graph.validate_node(start)?;

        let adjacency = graph.adjacency();
        let bound = graph.id_bound();

        let mut steps = Vec::new();
        let mut visited = VisitSet::with_bound(bound);
        let mut stack: Vec<usize> = Vec::new();

        steps.push(GraphStep::new(format!("Starting DFS from node {}", start)));

        stack.push(start);

        while let Some(current) = stack.pop() {
            // 同一节点可能被压栈多次，只有首次弹出才算访问
            if !visited.insert(current) {
                continue;
            }

            let mut visit_step = GraphStep::new(format!("Visiting node {}", current));
            visit_step.visited_nodes = visited.snapshot();
            steps.push(visit_step);

            for &neighbor in &adjacency[current] {
                if !visited.contains(neighbor) {
                    stack.push(neighbor);

                    let mut explore_step =
                        GraphStep::new(format!("Added neighbor {} to stack", neighbor));
                    explore_step.visited_nodes = visited.snapshot();
                    explore_step.current_nodes.push(neighbor);
                    explore_step.current_edges.push((current, neighbor));
                    steps.push(explore_step);
                }
            }
        }

        steps.push(GraphStep::new("DFS Complete"));
        log::debug!("dfs completed with {} steps", steps.len());
        Ok(steps)
    }
}
