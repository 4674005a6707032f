//! 控制台命令处理
//!
//! 解析交互式输入（基准名称或退出指令），读取网络并求解

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::printer::{PrintMode, Printer};
use crate::algorithm::EdmondsKarp;
use crate::error::Result;
use crate::import::NetworkReader;
use crate::network::NodeId;

/// 退出指令
pub const EXIT_COMMAND: &str = "0";

/// 基准文件扩展名
pub const BENCHMARK_EXTENSION: &str = "txt";

/// 控制台命令执行结果
#[derive(Debug)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 运行配置
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// 基准文件目录
    pub benchmarks_dir: PathBuf,
    /// 源点，默认 0
    pub source: Option<NodeId>,
    /// 汇点，默认最后一个节点
    pub sink: Option<NodeId>,
    pub print_mode: PrintMode,
    /// 额外输出每条边的流量与最小割
    pub show_flows: bool,
    /// 严格解析
    pub strict: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            benchmarks_dir: PathBuf::from("benchmarks"),
            source: None,
            sink: None,
            print_mode: PrintMode::Plain,
            show_flows: false,
            strict: false,
        }
    }
}

/// 将基准名称解析为文件路径
///
/// `bridge_3` -> `<dir>/bridge_3.txt`，已带 `.txt` 的名称不再追加。
pub fn resolve_benchmark(dir: &Path, name: &str) -> PathBuf {
    let suffix = format!(".{}", BENCHMARK_EXTENSION);
    if name.ends_with(&suffix) {
        dir.join(name)
    } else {
        dir.join(format!("{}{}", name, suffix))
    }
}

/// 列出目录下的基准名称（不含扩展名，已排序）
///
/// 目录不存在时返回空列表。
pub fn list_benchmarks(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(BENCHMARK_EXTENSION)
        })
        .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(String::from))
        .collect();
    names.sort();
    names
}

/// 读取网络文件、求解并渲染结果
pub fn solve_file(path: &Path, config: &CliConfig) -> Result<String> {
    let (mut network, stats) = NetworkReader::new()
        .with_strict(config.strict)
        .read_path(path)?;
    info!(
        path = %path.display(),
        nodes = network.num_nodes(),
        edges = stats.edges_imported,
        "网络已加载"
    );

    let source = config.source.unwrap_or(0);
    let sink = config.sink.unwrap_or(network.num_nodes() - 1);

    let mut algo = EdmondsKarp::try_new(&mut network, source, sink)?;
    let result = algo.solve();
    let min_cut = config.show_flows.then(|| algo.min_cut());

    Printer::new(config.print_mode).render(&result, algo.network(), min_cut.as_ref())
}

/// 解析并执行一行交互输入
pub fn execute_input(input: &str, config: &CliConfig) -> CommandResult {
    let name = input.trim();

    if name.is_empty() {
        return CommandResult::Continue;
    }
    if name == EXIT_COMMAND {
        return CommandResult::Exit;
    }

    let path = resolve_benchmark(&config.benchmarks_dir, name);
    match solve_file(&path, config) {
        Ok(output) => CommandResult::Message(output),
        Err(e) => CommandResult::Error(format!("{}: {}", path.display(), e)),
    }
}
