//! 边定义
//!
//! 有向带容量边，容量固定，流量可变

use serde::{Deserialize, Serialize};
use std::fmt;

/// 节点编号，取值范围 [0, N)
pub type NodeId = usize;

/// 单条边容量与流量的数值类型
pub type Capacity = u64;

/// 多条边流量/容量之和的数值类型
///
/// 总和最多为边数乘以 `Capacity::MAX`，u128 不会溢出。
pub type FlowValue = u128;

/// 边 ID（即边在网络中的插入序号）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// 边
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// 起点
    source: NodeId,
    /// 终点
    destination: NodeId,
    /// 容量
    capacity: Capacity,
    /// 当前流量，稳定状态下满足 0 <= flow <= capacity
    flow: Capacity,
}

impl Edge {
    /// 创建新边，初始流量为 0
    pub fn new(source: NodeId, destination: NodeId, capacity: Capacity) -> Self {
        Self {
            source,
            destination,
            capacity,
            flow: 0,
        }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn destination(&self) -> NodeId {
        self.destination
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn flow(&self) -> Capacity {
        self.flow
    }

    /// 正向残余容量（capacity - flow）
    ///
    /// 反向残余容量即当前流量本身，见 [`Edge::flow`]。
    pub fn residual_capacity(&self) -> Capacity {
        self.capacity - self.flow
    }

    /// 流量是否已达容量上限
    pub fn is_saturated(&self) -> bool {
        self.flow == self.capacity
    }

    /// 沿正向推送流量
    pub(crate) fn add_flow(&mut self, amount: Capacity) {
        debug_assert!(amount <= self.residual_capacity());
        self.flow += amount;
    }

    /// 沿反向抵消流量
    pub(crate) fn cancel_flow(&mut self, amount: Capacity) {
        debug_assert!(amount <= self.flow);
        self.flow -= amount;
    }

    pub(crate) fn reset_flow(&mut self) {
        self.flow = 0;
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}->{} ({}/{})",
            self.source, self.destination, self.flow, self.capacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_new() {
        let e = Edge::new(1, 2, 10);

        assert_eq!(e.source(), 1);
        assert_eq!(e.destination(), 2);
        assert_eq!(e.capacity(), 10);
        assert_eq!(e.flow(), 0);
        assert_eq!(e.residual_capacity(), 10);
        assert!(!e.is_saturated());
    }

    #[test]
    fn test_edge_flow_updates() {
        let mut e = Edge::new(0, 1, 7);

        e.add_flow(5);
        assert_eq!(e.flow(), 5);
        assert_eq!(e.residual_capacity(), 2);

        e.cancel_flow(3);
        assert_eq!(e.flow(), 2);

        e.add_flow(5);
        assert!(e.is_saturated());

        e.reset_flow();
        assert_eq!(e.flow(), 0);
        assert_eq!(e.capacity(), 7);
    }

    #[test]
    fn test_edge_display() {
        let mut e = Edge::new(3, 4, 12);
        e.add_flow(8);

        assert_eq!(e.to_string(), "3->4 (8/12)");
    }

    #[test]
    fn test_zero_capacity_edge_is_saturated() {
        let e = Edge::new(0, 1, 0);
        assert!(e.is_saturated());
        assert_eq!(e.residual_capacity(), 0);
    }
}
