//! 错误类型定义

use thiserror::Error;

/// 非法落子的具体原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalReason {
    /// 目标格子已被占用
    Occupied,
    /// 对局已经结束
    GameOver,
}

impl std::fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalReason::Occupied => write!(f, "cell is occupied"),
            IllegalReason::GameOver => write!(f, "game is already over"),
        }
    }
}

/// 井字棋规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 格子索引越界（调用方错误）
    #[error("Cell index out of range: {index} (expected 0..9)")]
    OutOfRange { index: usize },

    /// 非法落子（严格接口）
    #[error("Illegal move at cell {index}: {reason}")]
    IllegalMove { index: usize, reason: IllegalReason },

    /// 没有可走的格子
    #[error("No legal moves left on the board")]
    NoLegalMoves,

    /// 棋盘状态违反规则
    #[error("Invalid game state: {reason}")]
    InvalidGameState { reason: String },

    /// 快照字符串格式错误
    #[error("Invalid board snapshot: {reason}")]
    InvalidSnapshot { reason: String },
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
