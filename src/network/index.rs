//! 邻接索引
//!
//! 每个节点的出边与入边列表，按边插入顺序排列

use super::edge::{EdgeId, NodeId};

/// 邻接索引
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    /// 节点到出边的映射
    outgoing: Vec<Vec<EdgeId>>,
    /// 节点到入边的映射
    incoming: Vec<Vec<EdgeId>>,
}

impl AdjacencyIndex {
    /// 为 num_nodes 个节点创建空索引
    pub fn new(num_nodes: usize) -> Self {
        Self {
            outgoing: vec![Vec::new(); num_nodes],
            incoming: vec![Vec::new(); num_nodes],
        }
    }

    /// 登记一条边
    ///
    /// 端点越界时 panic。
    pub fn add_edge(&mut self, edge_id: EdgeId, source: NodeId, destination: NodeId) {
        self.outgoing[source].push(edge_id);
        self.incoming[destination].push(edge_id);
    }

    /// 获取出边
    pub fn outgoing(&self, node: NodeId) -> &[EdgeId] {
        &self.outgoing[node]
    }

    /// 获取入边
    pub fn incoming(&self, node: NodeId) -> &[EdgeId] {
        &self.incoming[node]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_preserves_insertion_order() {
        let mut index = AdjacencyIndex::new(3);
        index.add_edge(EdgeId::new(0), 0, 1);
        index.add_edge(EdgeId::new(1), 0, 2);
        index.add_edge(EdgeId::new(2), 1, 2);
        index.add_edge(EdgeId::new(3), 0, 1);

        assert_eq!(
            index.outgoing(0),
            &[EdgeId::new(0), EdgeId::new(1), EdgeId::new(3)]
        );
        assert_eq!(index.incoming(1), &[EdgeId::new(0), EdgeId::new(3)]);
        assert_eq!(index.incoming(2), &[EdgeId::new(1), EdgeId::new(2)]);
        assert!(index.outgoing(2).is_empty());
        assert!(index.incoming(0).is_empty());
    }

    #[test]
    fn test_self_loop_registers_both_sides() {
        let mut index = AdjacencyIndex::new(2);
        index.add_edge(EdgeId::new(0), 1, 1);

        assert_eq!(index.outgoing(1), &[EdgeId::new(0)]);
        assert_eq!(index.incoming(1), &[EdgeId::new(0)]);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_node_panics() {
        let index = AdjacencyIndex::new(2);
        let _ = index.outgoing(5);
    }
}
