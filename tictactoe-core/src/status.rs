//! 对局状态

use serde::{Deserialize, Serialize};

use crate::cell::Player;

/// 对局状态（由棋盘实时推导，从不缓存）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// 进行中
    InProgress,
    /// 平局
    Tie,
    /// 人类获胜
    HumanWon,
    /// 电脑获胜
    ComputerWon,
}

impl GameStatus {
    /// 是否已终局
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// 获胜方
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::HumanWon => Some(Player::Human),
            GameStatus::ComputerWon => Some(Player::Computer),
            _ => None,
        }
    }

    /// 由获胜方构造状态
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Human => GameStatus::HumanWon,
            Player::Computer => GameStatus::ComputerWon,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            GameStatus::InProgress => "in progress",
            GameStatus::Tie => "tie",
            GameStatus::HumanWon => "human won",
            GameStatus::ComputerWon => "computer won",
        };
        f.write_str(text)
    }
}
