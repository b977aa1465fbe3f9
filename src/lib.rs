//! AlgoViz - A synchronous algorithm execution and tracing engine
//!
//! This crate runs classic sorting and graph algorithms while recording an
//! ordered, replayable sequence of immutable state snapshots ("steps") that an
//! external visualization layer can play back one at a time. The step sequence
//! is the engine's entire observable output besides the final sorted array /
//! shortest-path table.

pub mod config;
pub mod core;
pub mod graph;
pub mod services;
pub mod utils;

pub use crate::core::error::{EngineError, EngineResult};
pub use crate::core::step::{GraphStep, SortStep};
pub use crate::graph::{Graph, GraphEdge, GraphNode};
pub use crate::services::algorithm::SortingAlgorithms;
