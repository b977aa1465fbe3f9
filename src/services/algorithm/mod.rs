//! 算法模块
//!
//! 包含带步骤追踪的图算法与排序算法实现。每次调用都拥有独立的
//! 步骤缓冲区，完整序列在返回前一次性物化，调用期间不回调调用方。

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod sorting;

// 重新导出常用算法结构体
pub use astar::AStar;
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use kruskal::Kruskal;
pub use prim::Prim;
pub use sorting::SortingAlgorithms;
