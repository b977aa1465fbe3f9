//! 统一错误处理系统 for AlgoViz
//!
//! 引擎信任结构良好的输入，但对以下情况显式失败而不是产生未定义行为：
//! 越界的节点引用、空输入、负权重。所有失败都是终止性的，
//! 不会返回半成品的步骤序列。

use thiserror::Error;

/// 统一的引擎错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// 起点/终点或边端点不是合法的、在界内的节点 id
    #[error("无效的节点引用: {0}")]
    InvalidNodeReference(usize),

    /// 图没有任何节点
    #[error("输入为空: {0}")]
    EmptyInput(String),

    /// Dijkstra / A* / Prim 不支持负权重
    #[error("不支持的边权重: {0}")]
    UnsupportedWeight(String),

    /// 在调用 build_adjacency_list 之前（或在图被修改之后）运行了算法
    #[error("邻接表尚未构建，请先调用 build_adjacency_list")]
    AdjacencyNotBuilt,

    /// 计数排序的值域超出上限
    #[error("计数排序值域过大: {range} (上限 {max})")]
    CountingRangeExceeded { range: usize, max: usize },
}

/// 统一的结果类型
pub type EngineResult<T> = Result<T, EngineError>;
