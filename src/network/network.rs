//! 流网络
//!
//! 节点隐式编号为 0..N-1，边按插入顺序保存，
//! 同时维护每个节点的出边/入边索引

use super::edge::{Capacity, Edge, EdgeId, FlowValue, NodeId};
use super::index::AdjacencyIndex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 单条边的流量快照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeFlow {
    pub source: NodeId,
    pub destination: NodeId,
    pub flow: Capacity,
    pub capacity: Capacity,
}

/// 流网络
#[derive(Debug, Clone)]
pub struct Network {
    /// 节点数（构造后不变）
    num_nodes: usize,
    /// 全部边，按插入顺序
    edges: Vec<Edge>,
    /// 出边/入边索引
    index: AdjacencyIndex,
}

impl Network {
    /// 创建含 num_nodes 个节点、没有边的网络
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            edges: Vec::new(),
            index: AdjacencyIndex::new(num_nodes),
        }
    }

    /// 添加一条流量为 0 的有向边
    ///
    /// 不检查重边与自环；端点越界时 panic，
    /// 调用方需保证 `source, destination < num_nodes`。
    pub fn add_edge(
        &mut self,
        source: NodeId,
        destination: NodeId,
        capacity: Capacity,
    ) -> EdgeId {
        let id = EdgeId::new(self.edges.len());
        self.index.add_edge(id, source, destination);
        self.edges.push(Edge::new(source, destination, capacity));
        id
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// 节点是否在 [0, num_nodes) 内
    pub fn contains_node(&self, node: NodeId) -> bool {
        node < self.num_nodes
    }

    /// 获取边
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    pub(crate) fn edge_mut(&mut self, id: EdgeId) -> &mut Edge {
        &mut self.edges[id.index()]
    }

    /// 全部边，按插入顺序
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 节点的出边 ID
    pub fn outgoing_edges(&self, node: NodeId) -> &[EdgeId] {
        self.index.outgoing(node)
    }

    /// 节点的入边 ID
    pub fn incoming_edges(&self, node: NodeId) -> &[EdgeId] {
        self.index.incoming(node)
    }

    /// 将所有边的流量清零，拓扑和容量不变
    pub fn reset_flows(&mut self) {
        for edge in &mut self.edges {
            edge.reset_flow();
        }
    }

    /// 节点出边上的流量之和
    pub fn total_outflow(&self, node: NodeId) -> FlowValue {
        self.outgoing_edges(node)
            .iter()
            .map(|&id| FlowValue::from(self.edge(id).flow()))
            .sum()
    }

    /// 节点入边上的流量之和
    pub fn total_inflow(&self, node: NodeId) -> FlowValue {
        self.incoming_edges(node)
            .iter()
            .map(|&id| FlowValue::from(self.edge(id).flow()))
            .sum()
    }

    /// 净流出量（流出 - 流入）
    pub fn net_outflow(&self, node: NodeId) -> i128 {
        self.total_outflow(node) as i128 - self.total_inflow(node) as i128
    }

    /// 每条边的当前流量，按插入顺序
    pub fn edge_flows(&self) -> Vec<EdgeFlow> {
        self.edges
            .iter()
            .map(|e| EdgeFlow {
                source: e.source(),
                destination: e.destination(),
                flow: e.flow(),
                capacity: e.capacity(),
            })
            .collect()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in &self.edges {
            writeln!(f, "{}", edge)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_diamond() -> Network {
        let mut network = Network::new(4);
        network.add_edge(0, 1, 10);
        network.add_edge(0, 2, 10);
        network.add_edge(1, 3, 10);
        network.add_edge(2, 3, 10);
        network
    }

    #[test]
    fn test_add_edge_updates_indexes() {
        let network = create_diamond();

        assert_eq!(network.num_nodes(), 4);
        assert_eq!(network.num_edges(), 4);
        assert_eq!(
            network.outgoing_edges(0),
            &[EdgeId::new(0), EdgeId::new(1)]
        );
        assert_eq!(
            network.incoming_edges(3),
            &[EdgeId::new(2), EdgeId::new(3)]
        );
        assert!(network.incoming_edges(0).is_empty());
        assert!(network.outgoing_edges(3).is_empty());
    }

    #[test]
    fn test_parallel_edges_tracked_independently() {
        let mut network = Network::new(2);
        let a = network.add_edge(0, 1, 3);
        let b = network.add_edge(0, 1, 4);

        assert_ne!(a, b);
        network.edge_mut(b).add_flow(4);

        assert_eq!(network.edge(a).flow(), 0);
        assert_eq!(network.edge(b).flow(), 4);
        assert_eq!(network.total_outflow(0), 4);
    }

    #[test]
    fn test_reset_flows_keeps_topology() {
        let mut network = create_diamond();
        for i in 0..network.num_edges() {
            network.edge_mut(EdgeId::new(i)).add_flow(5);
        }
        assert_eq!(network.total_outflow(0), 10);

        network.reset_flows();

        assert!(network.edges().iter().all(|e| e.flow() == 0));
        assert_eq!(network.num_edges(), 4);
        assert!(network.edges().iter().all(|e| e.capacity() == 10));
        assert_eq!(network.outgoing_edges(1), &[EdgeId::new(2)]);
    }

    #[test]
    fn test_flow_totals_beyond_capacity_range() {
        let mut network = Network::new(2);
        let a = network.add_edge(0, 1, Capacity::MAX);
        let b = network.add_edge(0, 1, Capacity::MAX);
        network.edge_mut(a).add_flow(Capacity::MAX);
        network.edge_mut(b).add_flow(Capacity::MAX);

        let expected = 2 * FlowValue::from(Capacity::MAX);
        assert_eq!(network.total_outflow(0), expected);
        assert_eq!(network.total_inflow(1), expected);
        assert_eq!(network.net_outflow(0), expected as i128);
    }

    #[test]
    fn test_net_outflow() {
        let mut network = create_diamond();
        network.edge_mut(EdgeId::new(0)).add_flow(6);
        network.edge_mut(EdgeId::new(2)).add_flow(6);

        assert_eq!(network.net_outflow(0), 6);
        assert_eq!(network.net_outflow(1), 0);
        assert_eq!(network.net_outflow(3), -6);
    }

    #[test]
    fn test_edge_flows_and_display() {
        let mut network = Network::new(3);
        network.add_edge(0, 1, 5);
        network.add_edge(1, 2, 3);
        network.edge_mut(EdgeId::new(1)).add_flow(3);

        let flows = network.edge_flows();
        assert_eq!(flows.len(), 2);
        assert_eq!(
            flows[1],
            EdgeFlow {
                source: 1,
                destination: 2,
                flow: 3,
                capacity: 3,
            }
        );

        assert_eq!(network.to_string(), "0->1 (0/5)\n1->2 (3/3)\n");
    }

    #[test]
    fn test_contains_node() {
        let network = Network::new(2);
        assert!(network.contains_node(1));
        assert!(!network.contains_node(2));
    }
}
