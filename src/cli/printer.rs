//! 结果打印器
//!
//! 提供纯文本、表格和 JSON 三种输出格式

use crate::algorithm::{MaxFlow, MinCut};
use crate::error::Result;
use crate::network::{EdgeFlow, Network};
use clap::ValueEnum;
use prettytable::{format, row, Cell, Row, Table};
use serde::Serialize;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PrintMode {
    /// 逐行输出增广路径
    #[default]
    Plain,
    /// 表格模式
    Table,
    /// JSON
    Json,
}

/// JSON 输出结构
#[derive(Debug, Serialize)]
struct Report<'a> {
    max_flow: &'a MaxFlow,
    #[serde(skip_serializing_if = "Option::is_none")]
    edges: Option<Vec<EdgeFlow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_cut: Option<&'a MinCut>,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Plain)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 渲染求解结果
    ///
    /// 给定 min_cut 时同时输出每条边的流量与最小割。
    pub fn render(
        &self,
        result: &MaxFlow,
        network: &Network,
        min_cut: Option<&MinCut>,
    ) -> Result<String> {
        match self.mode {
            PrintMode::Json => {
                let report = Report {
                    max_flow: result,
                    edges: min_cut.map(|_| network.edge_flows()),
                    min_cut,
                };
                Ok(serde_json::to_string_pretty(&report)? + "\n")
            }
            PrintMode::Plain | PrintMode::Table => {
                let mut output = String::from("\nFinal Augmenting Paths and Flow Calculations:\n");
                output.push_str(&self.format_paths(result));
                output.push_str(&format!("\nMaximum Flow: {}\n", result.value));

                if let Some(cut) = min_cut {
                    output.push('\n');
                    output.push_str(&self.format_edges(&network.edge_flows()));
                    output.push('\n');
                    output.push_str(&self.format_min_cut(cut, network));
                }
                Ok(output)
            }
        }
    }

    /// 增广路径
    fn format_paths(&self, result: &MaxFlow) -> String {
        if self.mode == PrintMode::Table {
            let mut table = Table::new();
            table.set_format(*format::consts::FORMAT_BOX_CHARS);
            table.set_titles(row!["#", "Path", "Flow"]);
            for (i, path) in result.paths.iter().enumerate() {
                table.add_row(Row::new(vec![
                    Cell::new(&(i + 1).to_string()),
                    Cell::new(&join_path(&path.nodes)),
                    Cell::new(&path.amount.to_string()),
                ]));
            }
            return table.to_string();
        }

        result
            .paths
            .iter()
            .enumerate()
            .map(|(i, path)| {
                format!(
                    "Path {}: {} with flow = {}\n",
                    i + 1,
                    join_path(&path.nodes),
                    path.amount
                )
            })
            .collect()
    }

    /// 每条边的流量
    fn format_edges(&self, flows: &[EdgeFlow]) -> String {
        if self.mode == PrintMode::Plain {
            return flows
                .iter()
                .map(|f| {
                    format!(
                        "{}->{} ({}/{})\n",
                        f.source, f.destination, f.flow, f.capacity
                    )
                })
                .collect();
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Edge", "Flow", "Capacity"]);
        for f in flows {
            table.add_row(row![
                format!("{}->{}", f.source, f.destination),
                f.flow.to_string(),
                f.capacity.to_string()
            ]);
        }
        table.to_string()
    }

    /// 最小割
    fn format_min_cut(&self, cut: &MinCut, network: &Network) -> String {
        let side: Vec<String> = cut.source_side.iter().map(|n| n.to_string()).collect();
        let edges: Vec<String> = cut
            .cut_edges
            .iter()
            .map(|&id| {
                let e = network.edge(id);
                format!("{}->{}", e.source(), e.destination())
            })
            .collect();

        format!(
            "Min Cut: {{{}}} | edges [{}] | capacity = {}\n",
            side.join(", "),
            edges.join(", "),
            cut.capacity
        )
    }
}

fn join_path(nodes: &[usize]) -> String {
    nodes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
