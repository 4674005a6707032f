//! 基准名称补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use std::path::{Path, PathBuf};

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use super::commands::{list_benchmarks, EXIT_COMMAND};

/// 基准名称补全器
///
/// 每次补全时重新扫描目录，新加入的文件无需重启即可补全。
pub struct BenchmarkCompleter {
    benchmarks_dir: PathBuf,
}

impl BenchmarkCompleter {
    pub fn new(benchmarks_dir: impl AsRef<Path>) -> Self {
        Self {
            benchmarks_dir: benchmarks_dir.as_ref().to_path_buf(),
        }
    }

    /// 以 prefix 开头的候选项
    pub fn candidates(&self, prefix: &str) -> Vec<String> {
        let mut names = list_benchmarks(&self.benchmarks_dir);
        names.push(EXIT_COMMAND.to_string());
        names.retain(|name| name.starts_with(prefix));
        names
    }
}

impl Completer for BenchmarkCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_cursor = &line[..pos];
        let prefix = line_to_cursor.trim_start();
        let start_pos = line_to_cursor.len() - prefix.len();

        let completions = self
            .candidates(prefix)
            .into_iter()
            .map(|name| Pair {
                display: name.clone(),
                replacement: name,
            })
            .collect();

        Ok((start_pos, completions))
    }
}

impl Hinter for BenchmarkCompleter {
    type Hint = String;
}

impl Highlighter for BenchmarkCompleter {}

impl Validator for BenchmarkCompleter {}

impl Helper for BenchmarkCompleter {}
