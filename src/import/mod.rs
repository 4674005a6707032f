//! 网络导入模块
//!
//! 从文本文件读取流网络。格式：
//!
//! ```text
//! <节点数>
//! <起点> <终点> <容量>
//! ...
//! ```
//!
//! 所有越界节点和非法容量都在这里拒绝，算法层不再校验。

use crate::error::{Error, Result};
use crate::network::{Capacity, Network, NodeId};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, warn};

/// 导入统计
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub edges_imported: usize,
    /// 字段数不为 3 而被跳过的行
    pub lines_skipped: usize,
    pub duration_ms: u64,
}

/// 网络读取器
#[derive(Debug, Clone, Default)]
pub struct NetworkReader {
    /// 严格模式下字段数不为 3 的行视为错误
    strict: bool,
}

impl NetworkReader {
    /// 创建读取器（宽松模式）
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置严格模式
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// 从文件读取
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<(Network, ImportStats)> {
        let path = path.as_ref();
        debug!(path = %path.display(), "读取网络文件");
        let file = File::open(path)?;
        self.read(BufReader::new(file))
    }

    /// 从字符串解析
    pub fn parse_str(&self, input: &str) -> Result<(Network, ImportStats)> {
        self.read(input.as_bytes())
    }

    /// 从任意 BufRead 读取
    pub fn read<R: BufRead>(&self, reader: R) -> Result<(Network, ImportStats)> {
        let start = Instant::now();
        let mut stats = ImportStats::default();
        let mut lines = reader.lines().enumerate();

        // 第一个非空行是节点数
        let mut network = loop {
            let Some((idx, line)) = lines.next() else {
                return Err(Error::parse(1, "缺少节点数"));
            };
            let line = line?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                break Self::parse_header(trimmed, idx + 1)?;
            }
        };

        for (idx, line) in lines {
            let line_no = idx + 1;
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let parts: Vec<&str> = trimmed.split_whitespace().collect();
            if parts.len() != 3 {
                if self.strict {
                    return Err(Error::parse(
                        line_no,
                        format!("期望 3 个字段，实际 {} 个", parts.len()),
                    ));
                }
                warn!(line = line_no, content = trimmed, "跳过格式不正确的行");
                stats.lines_skipped += 1;
                continue;
            }

            let source = Self::parse_node(parts[0], &network, line_no)?;
            let destination = Self::parse_node(parts[1], &network, line_no)?;
            let capacity = parts[2].parse::<Capacity>().map_err(|_| {
                Error::parse(
                    line_no,
                    format!("容量必须为不超过 {} 的非负整数: {}", Capacity::MAX, parts[2]),
                )
            })?;

            network.add_edge(source, destination, capacity);
            stats.edges_imported += 1;
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        debug!(
            nodes = network.num_nodes(),
            edges = stats.edges_imported,
            skipped = stats.lines_skipped,
            "网络导入完成"
        );
        Ok((network, stats))
    }

    fn parse_header(line: &str, line_no: usize) -> Result<Network> {
        let num_nodes = line
            .parse::<usize>()
            .map_err(|_| Error::parse(line_no, format!("无效的节点数: {}", line)))?;
        if num_nodes < 2 {
            return Err(Error::TooFewNodes(num_nodes));
        }
        Ok(Network::new(num_nodes))
    }

    fn parse_node(token: &str, network: &Network, line_no: usize) -> Result<NodeId> {
        let node = token
            .parse::<NodeId>()
            .map_err(|_| Error::parse(line_no, format!("无效的节点编号: {}", token)))?;
        if !network.contains_node(node) {
            return Err(Error::InvalidNode {
                node,
                num_nodes: network.num_nodes(),
            });
        }
        Ok(node)
    }
}

/// 从文件读取网络
pub fn read_network<P: AsRef<Path>>(path: P) -> Result<Network> {
    NetworkReader::new().read_path(path).map(|(network, _)| network)
}

/// 从字符串解析网络
pub fn parse_network(input: &str) -> Result<Network> {
    NetworkReader::new().parse_str(input).map(|(network, _)| network)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::EdmondsKarp;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic() {
        let (network, stats) = NetworkReader::new()
            .parse_str("4\n0 1 10\n0 2 10\n1 3 10\n2 3 10\n")
            .unwrap();

        assert_eq!(network.num_nodes(), 4);
        assert_eq!(network.num_edges(), 4);
        assert_eq!(stats.edges_imported, 4);
        assert_eq!(stats.lines_skipped, 0);
        assert_eq!(network.edges()[2].to_string(), "1->3 (0/10)");
    }

    #[test]
    fn test_blank_and_malformed_lines() {
        let (network, stats) = NetworkReader::new()
            .parse_str("\n  3  \n0 1 5\n\n1 2\n 1   2   3 \n0 1 2 9\n")
            .unwrap();

        assert_eq!(network.num_nodes(), 3);
        assert_eq!(network.num_edges(), 2);
        assert_eq!(stats.lines_skipped, 2);
    }

    #[test]
    fn test_strict_mode_rejects_malformed_lines() {
        let err = NetworkReader::new()
            .with_strict(true)
            .parse_str("3\n0 1 5\n1 2\n")
            .unwrap_err();

        assert!(matches!(err, Error::Parse { line: 3, .. }));
    }

    #[test]
    fn test_negative_capacity_rejected() {
        let err = parse_network("2\n0 1 -4\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn test_capacity_upper_bound() {
        let mut network = parse_network("2\n0 1 18446744073709551615\n0 1 5\n").unwrap();
        assert_eq!(network.edges()[0].capacity(), u64::MAX);

        let result = EdmondsKarp::new(&mut network, 0, 1).solve();
        assert_eq!(result.value, 18446744073709551620);

        let err = parse_network("2\n0 1 18446744073709551616\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn test_out_of_range_node_rejected() {
        let err = parse_network("3\n0 3 1\n").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidNode {
                node: 3,
                num_nodes: 3
            }
        ));
    }

    #[test]
    fn test_invalid_header() {
        assert!(matches!(
            parse_network("abc\n0 1 1\n").unwrap_err(),
            Error::Parse { line: 1, .. }
        ));
        assert!(matches!(
            parse_network("1\n").unwrap_err(),
            Error::TooFewNodes(1)
        ));
        assert!(matches!(
            parse_network("").unwrap_err(),
            Error::Parse { line: 1, .. }
        ));
    }

    #[test]
    fn test_read_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "3").unwrap();
        writeln!(file, "0 1 5").unwrap();
        writeln!(file, "1 2 3").unwrap();

        let network = read_network(file.path()).unwrap();
        assert_eq!(network.num_nodes(), 3);
        assert_eq!(network.num_edges(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = read_network("/nonexistent/flownet/network.txt").unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }
}
