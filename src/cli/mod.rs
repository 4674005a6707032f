//! 命令行支持
//!
//! 交互式输入处理、结果打印和 Tab 补全

pub mod commands;
pub mod completer;
pub mod printer;

pub use commands::{execute_input, resolve_benchmark, solve_file, CliConfig, CommandResult};
pub use completer::BenchmarkCompleter;
pub use printer::{PrintMode, Printer};
