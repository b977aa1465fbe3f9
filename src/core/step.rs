//! 步骤快照类型
//!
//! 每个算法在语义上有意义的时刻向步骤序列追加一个不可变快照，
//! 序列化字段名构成对外绑定层的稳定 schema，不可随意改动。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One immutable snapshot of graph-algorithm state.
///
/// `distances` is sparse: only nodes with a finite best-known distance appear,
/// there is no numeric infinity sentinel. Edge pairs are ordered and not
/// deduplicated; node id collections are ordered, deduplicated sets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStep {
    pub visited_nodes: Vec<usize>,
    pub current_nodes: Vec<usize>,
    pub visited_edges: Vec<(usize, usize)>,
    pub current_edges: Vec<(usize, usize)>,
    pub distances: BTreeMap<usize, f64>,
    pub parents: BTreeMap<usize, usize>,
    pub operation: String,
}

impl GraphStep {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            ..Default::default()
        }
    }
}

/// One immutable snapshot of sorting state, carrying the full array at this
/// instant plus static complexity annotations for the running algorithm.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SortStep {
    pub array: Vec<i32>,
    pub highlighted: Vec<usize>,
    pub comparing: Vec<usize>,
    pub operation: String,
    pub operations_count: u64,
    pub time_complexity: String,
    pub space_complexity: String,
}

impl SortStep {
    pub fn record(
        array: &[i32],
        highlighted: Vec<usize>,
        comparing: Vec<usize>,
        operation: impl Into<String>,
        operations_count: u64,
        complexity: (&str, &str),
    ) -> Self {
        Self {
            array: array.to_vec(),
            highlighted,
            comparing,
            operation: operation.into(),
            operations_count,
            time_complexity: complexity.0.to_string(),
            space_complexity: complexity.1.to_string(),
        }
    }
}

/// 有序去重的运行中节点集合
///
/// BFS/DFS 的每个 visiting 步骤都携带到目前为止访问过的全部节点。
/// 增量维护一个运行中集合并在每步复制，代价线性而非对历史步骤的重复扫描。
#[derive(Debug, Clone)]
pub(crate) struct VisitSet {
    order: Vec<usize>,
    seen: Vec<bool>,
}

impl VisitSet {
    pub(crate) fn with_bound(bound: usize) -> Self {
        Self {
            order: Vec::new(),
            seen: vec![false; bound],
        }
    }

    /// 插入一个节点 id，返回其是否为首次出现
    pub(crate) fn insert(&mut self, id: usize) -> bool {
        if self.seen[id] {
            return false;
        }
        self.seen[id] = true;
        self.order.push(id);
        true
    }

    pub(crate) fn contains(&self, id: usize) -> bool {
        self.seen[id]
    }

    /// 按访问顺序复制当前集合
    pub(crate) fn snapshot(&self) -> Vec<usize> {
        self.order.clone()
    }
}

/// 将内部的 `Option<f64>` 距离表转为步骤中的稀疏映射（仅有限距离）
pub(crate) fn sparse_distances(distances: &[Option<f64>]) -> BTreeMap<usize, f64> {
    distances
        .iter()
        .enumerate()
        .filter_map(|(id, d)| d.map(|d| (id, d)))
        .collect()
}

/// 将内部的父节点表转为步骤中的稀疏映射
pub(crate) fn sparse_parents(parents: &[Option<usize>]) -> BTreeMap<usize, usize> {
    parents
        .iter()
        .enumerate()
        .filter_map(|(id, p)| p.map(|p| (id, p)))
        .collect()
}
