//! 流网络模块
//!
//! 定义节点、边和流网络的核心数据结构

mod edge;
mod index;
mod network;

pub use edge::{Capacity, Edge, EdgeId, FlowValue, NodeId};
pub use index::AdjacencyIndex;
pub use network::{EdgeFlow, Network};
