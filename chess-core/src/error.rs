//! 错误类型定义

use std::path::PathBuf;

use thiserror::Error;

/// 局面解析错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChessError {
    /// 无效的 FEN 字符串
    #[error("Invalid FEN string: {reason}")]
    InvalidFen { reason: String },

    /// 无法识别的棋子字符
    #[error("Unknown piece symbol '{symbol}' at offset {offset}")]
    UnknownPiece { symbol: char, offset: usize },

    /// 无效的格子名称
    #[error("Invalid square: {name}")]
    InvalidSquare { name: String },
}

impl ChessError {
    pub(crate) fn invalid_fen(reason: impl Into<String>) -> Self {
        ChessError::InvalidFen {
            reason: reason.into(),
        }
    }
}

/// 读取局面文件的错误
#[derive(Error, Debug)]
pub enum LoadError {
    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 文件内容为空
    #[error("FEN file is empty: {path:?}")]
    EmptyInput { path: PathBuf },

    /// 局面解析错误
    #[error("Chess error: {0}")]
    Chess(#[from] ChessError),
}
