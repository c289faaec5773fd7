//! 井字棋电脑对手
//!
//! 包含:
//! - 一步制胜、堵截、均匀随机三种子策略
//! - 按难度组合子策略的落子选择器（可指定随机种子）

mod selector;
mod tactics;

pub use selector::{select_move, MoveSelector, Selection, SelectorConfig};
pub use tactics::{Strategy, Tactics};

// 重导出 Difficulty 以便外部使用
pub use tictactoe_core::Difficulty;
