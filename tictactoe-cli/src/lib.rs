//! 井字棋终端客户端
//!
//! 包含:
//! - 命令解析
//! - 棋盘渲染
//! - 对局会话
//! - 胜负统计
//! - 设置与本地存储

pub mod command;
pub mod render;
pub mod scores;
pub mod session;
pub mod settings;
pub mod storage;

pub use command::Command;
pub use scores::Scoreboard;
pub use session::{Session, TurnOutcome};
pub use settings::{LogLevel, Settings};
pub use storage::{SavedSession, Storage};
