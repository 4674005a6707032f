//! 图算法模块
//!
//! 包含 Edmonds-Karp 最大流与最小割

mod max_flow;

pub use max_flow::{AugmentingPath, EdmondsKarp, MaxFlow, MinCut, SolveStats};
