//! 井字棋规则库
//!
//! 包含:
//! - 格子、玩家、位置等核心数据结构
//! - 棋盘与胜负/平局判定
//! - 对局状态与落子校验
//! - AI 难度定义
//! - 棋盘快照格式

mod board;
mod cell;
mod constants;
mod difficulty;
mod error;
mod game;
mod snapshot;
mod status;

pub use board::Board;
pub use cell::{Cell, Player, Position};
pub use constants::*;
pub use difficulty::Difficulty;
pub use error::{GameError, IllegalReason, Result};
pub use game::GameState;
pub use snapshot::Snapshot;
pub use status::GameStatus;
