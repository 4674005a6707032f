//! FlowNet - 有向容量网络最大流
//!
//! 基于 Edmonds-Karp 算法求解最大流：
//! - 流网络表示（有向容量边、出边/入边索引、残余容量）
//! - BFS 最短增广路径、瓶颈计算、反向边抵消
//! - 最小割提取
//! - 文本格式网络导入与命令行工具

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod import;
pub mod network;

// 重导出常用类型
pub use algorithm::{AugmentingPath, EdmondsKarp, MaxFlow, MinCut, SolveStats};
pub use error::{Error, Result};
pub use network::{Capacity, Edge, EdgeFlow, EdgeId, FlowValue, Network, NodeId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
