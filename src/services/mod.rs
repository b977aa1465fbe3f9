//! 服务层模块
//!
//! 包含算法执行与追踪服务

pub mod algorithm;

pub use algorithm::*;
