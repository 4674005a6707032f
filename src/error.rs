//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("解析错误 (第 {line} 行): {message}")]
    Parse { line: usize, message: String },

    #[error("节点越界: {node} (节点数 {num_nodes})")]
    InvalidNode { node: usize, num_nodes: usize },

    #[error("节点数过少: {0}，至少需要 2 个节点")]
    TooFewNodes(usize),

    #[error("源点与汇点相同: {0}")]
    SameSourceAndSink(usize),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl Error {
    /// 构造带行号的解析错误
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}
