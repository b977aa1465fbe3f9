//! 核心模块
//!
//! 包含错误类型和共享的步骤快照类型

pub mod error;
pub mod step;

pub use error::{EngineError, EngineResult};
pub use step::{GraphStep, SortStep};
