//! 最大流算法
//!
//! 实现 Edmonds-Karp 算法（基于 BFS 的 Ford-Fulkerson）。
//! 残余图中的反向边不单独建模：一条边的当前流量即其反向残余容量。

use crate::error::{Error, Result};
use crate::network::{Capacity, EdgeId, FlowValue, Network, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Instant;
use tracing::{debug, info};

/// 一条增广路径
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentingPath {
    /// 从源点到汇点（含两端）的节点序列
    pub nodes: Vec<NodeId>,
    /// 本次推送的瓶颈流量
    pub amount: Capacity,
}

/// 求解统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// BFS 搜索次数（含最后一次失败的搜索）
    pub searches: usize,
    /// 成功增广次数
    pub augmentations: usize,
    /// 耗时（微秒）
    pub duration_us: u64,
}

/// 最大流结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxFlow {
    pub source: NodeId,
    pub sink: NodeId,
    /// 最大流量值（多条路径之和可超出单边容量范围）
    pub value: FlowValue,
    /// 按发现顺序排列的增广路径
    pub paths: Vec<AugmentingPath>,
    pub stats: SolveStats,
}

/// 最小割
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinCut {
    /// 源侧节点（升序）
    pub source_side: Vec<NodeId>,
    /// 从源侧指向汇侧的边
    pub cut_edges: Vec<EdgeId>,
    /// 割容量
    pub capacity: FlowValue,
}

/// 残余图中的一步遍历
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Traversal {
    /// 沿边方向，受残余容量限制
    Forward(EdgeId),
    /// 逆边方向（抵消已有流量），受当前流量限制
    Backward(EdgeId),
}

impl Traversal {
    /// 该步可推送的上限
    fn limit(self, network: &Network) -> Capacity {
        match self {
            Traversal::Forward(id) => network.edge(id).residual_capacity(),
            Traversal::Backward(id) => network.edge(id).flow(),
        }
    }

    /// 从汇点往回走时，这一步之前的节点
    fn tail(self, network: &Network) -> NodeId {
        match self {
            Traversal::Forward(id) => network.edge(id).source(),
            Traversal::Backward(id) => network.edge(id).destination(),
        }
    }
}

/// 一次 BFS 的结果：每个节点首次被发现时经过的边
struct ResidualSearch {
    visited: Vec<bool>,
    parents: Vec<Option<Traversal>>,
}

impl ResidualSearch {
    /// 从 sink 沿父边走回 source
    fn walk<'a>(&'a self, network: &'a Network, source: NodeId, sink: NodeId) -> PathWalk<'a> {
        PathWalk {
            network,
            parents: &self.parents,
            current: sink,
            source,
        }
    }
}

/// 从汇点到源点的逆向遍历
struct PathWalk<'a> {
    network: &'a Network,
    parents: &'a [Option<Traversal>],
    current: NodeId,
    source: NodeId,
}

impl Iterator for PathWalk<'_> {
    type Item = Traversal;

    fn next(&mut self) -> Option<Traversal> {
        if self.current == self.source {
            return None;
        }
        let step = self.parents[self.current]?;
        self.current = step.tail(self.network);
        Some(step)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SolverState {
    Searching,
    Done,
}

/// Edmonds-Karp 最大流算法
///
/// 求解期间独占借用网络，原地修改边上的流量；
/// 求解结束后网络可继续使用（例如查询流量或重新求解）。
pub struct EdmondsKarp<'a> {
    network: &'a mut Network,
    source: NodeId,
    sink: NodeId,
    augmenting_paths: Vec<AugmentingPath>,
}

impl<'a> EdmondsKarp<'a> {
    /// 创建算法实例
    ///
    /// 调用方需保证 source 与 sink 互不相同且都在网络范围内。
    pub fn new(network: &'a mut Network, source: NodeId, sink: NodeId) -> Self {
        Self {
            network,
            source,
            sink,
            augmenting_paths: Vec::new(),
        }
    }

    /// 校验源点与汇点后创建算法实例
    pub fn try_new(network: &'a mut Network, source: NodeId, sink: NodeId) -> Result<Self> {
        let num_nodes = network.num_nodes();
        for node in [source, sink] {
            if !network.contains_node(node) {
                return Err(Error::InvalidNode { node, num_nodes });
            }
        }
        if source == sink {
            return Err(Error::SameSourceAndSink(source));
        }
        Ok(Self::new(network, source, sink))
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn sink(&self) -> NodeId {
        self.sink
    }

    /// 当前网络（含求解后的流量）
    pub fn network(&self) -> &Network {
        self.network
    }

    /// 上一次求解找到的增广路径
    pub fn augmenting_paths(&self) -> &[AugmentingPath] {
        &self.augmenting_paths
    }

    /// 计算从 source 到 sink 的最大流
    ///
    /// 开始前会清零所有流量，因此重复调用结果一致。
    pub fn solve(&mut self) -> MaxFlow {
        let start = Instant::now();
        self.network.reset_flows();
        self.augmenting_paths.clear();

        let mut value: FlowValue = 0;
        let mut stats = SolveStats::default();
        let mut state = SolverState::Searching;

        while state == SolverState::Searching {
            stats.searches += 1;
            state = match self.find_augmenting_path() {
                Some(search) => {
                    let bottleneck = self.bottleneck(&search);
                    self.augment(&search, bottleneck);

                    let nodes = self.reconstruct_path(&search);
                    debug!(
                        path = ?nodes,
                        amount = bottleneck,
                        "找到增广路径 #{}",
                        stats.augmentations + 1
                    );

                    value += FlowValue::from(bottleneck);
                    stats.augmentations += 1;
                    self.augmenting_paths.push(AugmentingPath {
                        nodes,
                        amount: bottleneck,
                    });
                    SolverState::Searching
                }
                None => SolverState::Done,
            };
        }

        stats.duration_us = start.elapsed().as_micros() as u64;
        info!(
            source = self.source,
            sink = self.sink,
            value = %value,
            augmentations = stats.augmentations,
            "最大流求解完成"
        );

        MaxFlow {
            source: self.source,
            sink: self.sink,
            value,
            paths: self.augmenting_paths.clone(),
            stats,
        }
    }

    /// 在残余图上 BFS
    ///
    /// 先遍历出边（残余容量 > 0），再遍历入边（流量 > 0，即反向边）。
    /// 给定 stop_at 时，该节点被访问后立即停止。
    fn residual_bfs(&self, stop_at: Option<NodeId>) -> ResidualSearch {
        let num_nodes = self.network.num_nodes();
        let mut visited = vec![false; num_nodes];
        let mut parents: Vec<Option<Traversal>> = vec![None; num_nodes];
        let mut queue = VecDeque::new();

        // 源点必须先标记，避免经反向边被重新发现
        visited[self.source] = true;
        queue.push_back(self.source);

        while let Some(current) = queue.pop_front() {
            if stop_at.map_or(false, |t| visited[t]) {
                break;
            }

            for &id in self.network.outgoing_edges(current) {
                let edge = self.network.edge(id);
                let next = edge.destination();
                if !visited[next] && edge.residual_capacity() > 0 {
                    visited[next] = true;
                    parents[next] = Some(Traversal::Forward(id));
                    queue.push_back(next);
                }
            }

            for &id in self.network.incoming_edges(current) {
                let edge = self.network.edge(id);
                let next = edge.source();
                if !visited[next] && edge.flow() > 0 {
                    visited[next] = true;
                    parents[next] = Some(Traversal::Backward(id));
                    queue.push_back(next);
                }
            }
        }

        ResidualSearch { visited, parents }
    }

    /// BFS 找最短增广路径，不存在时返回 None
    fn find_augmenting_path(&self) -> Option<ResidualSearch> {
        let search = self.residual_bfs(Some(self.sink));
        if search.visited[self.sink] {
            Some(search)
        } else {
            None
        }
    }

    /// 路径上的最小可推送量
    fn bottleneck(&self, search: &ResidualSearch) -> Capacity {
        search
            .walk(self.network, self.source, self.sink)
            .map(|step| step.limit(self.network))
            .min()
            .unwrap_or(0)
    }

    /// 沿路径推送 amount：正向边加流量，反向边减流量
    fn augment(&mut self, search: &ResidualSearch, amount: Capacity) {
        let steps: Vec<Traversal> = search
            .walk(self.network, self.source, self.sink)
            .collect();

        for step in steps {
            match step {
                Traversal::Forward(id) => self.network.edge_mut(id).add_flow(amount),
                Traversal::Backward(id) => self.network.edge_mut(id).cancel_flow(amount),
            }
        }
    }

    /// 重构从源点到汇点的节点序列
    fn reconstruct_path(&self, search: &ResidualSearch) -> Vec<NodeId> {
        let mut nodes = vec![self.sink];
        nodes.extend(
            search
                .walk(self.network, self.source, self.sink)
                .map(|step| step.tail(self.network)),
        );
        nodes.reverse();
        nodes
    }

    /// 基于当前流量计算最小割
    ///
    /// 源侧为残余图中从源点可达的节点。求解完成后割容量等于最大流。
    pub fn min_cut(&self) -> MinCut {
        let search = self.residual_bfs(None);
        let source_side: Vec<NodeId> = (0..self.network.num_nodes())
            .filter(|&n| search.visited[n])
            .collect();

        let mut cut_edges = Vec::new();
        let mut capacity: FlowValue = 0;
        for (i, edge) in self.network.edges().iter().enumerate() {
            if search.visited[edge.source()] && !search.visited[edge.destination()] {
                cut_edges.push(EdgeId::new(i));
                capacity += FlowValue::from(edge.capacity());
            }
        }

        MinCut {
            source_side,
            cut_edges,
            capacity,
        }
    }

    /// 分析流量瓶颈
    /// 返回流量等于容量的正容量边
    pub fn saturated_edges(&self) -> Vec<EdgeId> {
        self.network
            .edges()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.capacity() > 0 && e.is_saturated())
            .map(|(i, _)| EdgeId::new(i))
            .collect()
    }
}
