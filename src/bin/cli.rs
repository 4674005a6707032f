//! FlowNet CLI 工具
//!
//! 求解单个网络文件，或进入交互模式反复输入基准名称

use anyhow::Context;
use clap::{ArgAction, Parser};
use colored::Colorize;
use flownet::cli::{
    execute_input, solve_file, BenchmarkCompleter, CliConfig, CommandResult, PrintMode,
};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "\nEnter the benchmark file name (eg-: bridge_3,ladder_4): ";

#[derive(Parser, Debug)]
#[command(name = "flownet-cli")]
#[command(about = "Edmonds-Karp 最大流命令行工具")]
#[command(version)]
struct Args {
    /// 求解单个网络文件后退出
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// 基准文件目录
    #[arg(short = 'd', long, default_value = "benchmarks")]
    benchmarks_dir: PathBuf,

    /// 源点（默认 0）
    #[arg(short, long)]
    source: Option<usize>,

    /// 汇点（默认最后一个节点）
    #[arg(short = 't', long)]
    sink: Option<usize>,

    /// 输出格式
    #[arg(long, value_enum, default_value_t = PrintMode::Plain)]
    format: PrintMode,

    /// 输出每条边的流量与最小割
    #[arg(long)]
    show_flows: bool,

    /// 严格解析：字段数不为 3 的行视为错误
    #[arg(long)]
    strict: bool,

    /// 日志详细程度（-v: debug, -vv: trace）
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> CliConfig {
        CliConfig {
            benchmarks_dir: self.benchmarks_dir.clone(),
            source: self.source,
            sink: self.sink,
            print_mode: self.format,
            show_flows: self.show_flows,
            strict: self.strict,
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    // RUST_LOG 优先
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let config = args.config();

    // 单文件模式
    if let Some(path) = &args.file {
        let output = solve_file(path, &config)
            .with_context(|| format!("无法求解 {}", path.display()))?;
        print!("{}", output);
        return Ok(());
    }

    print_banner();
    run_interactive(&config)?;

    println!("\n{}", "***************************************".cyan());
    println!("    Program terminated successfully!   ");
    println!("{}", "***************************************".cyan());
    Ok(())
}

fn run_interactive(config: &CliConfig) -> anyhow::Result<()> {
    let mut rl: Editor<BenchmarkCompleter, DefaultHistory> =
        Editor::new().context("无法初始化行编辑器")?;
    rl.set_helper(Some(BenchmarkCompleter::new(&config.benchmarks_dir)));

    loop {
        let line = match rl.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("读取输入失败"),
        };
        if !line.trim().is_empty() {
            let _ = rl.add_history_entry(line.trim());
        }

        match execute_input(&line, config) {
            CommandResult::Exit => break,
            CommandResult::Continue => {}
            CommandResult::Message(output) => print!("{}", output),
            CommandResult::Error(msg) => eprintln!("{} {}", "错误:".red().bold(), msg),
        }
    }

    Ok(())
}

fn print_banner() {
    let border = "***************************************".cyan();
    println!("{}", border);
    println!("{}", "         Network Flow Algorithm        ".bold());
    println!("{}", format!("{:^39}", format!("flownet v{}", flownet::VERSION)).dimmed());
    println!("{}", border);
    println!("     Enter '0' to exit the program     ");
    println!("{}", border);
}
