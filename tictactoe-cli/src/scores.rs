//! 胜负统计

use serde::{Deserialize, Serialize};
use tictactoe_core::GameStatus;

/// 人类、电脑胜局与平局计数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoreboard {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub ties: u32,
}

impl Scoreboard {
    /// 记录一局结果，进行中的状态不计数
    pub fn record(&mut self, status: GameStatus) -> bool {
        match status {
            GameStatus::HumanWon => self.human_wins += 1,
            GameStatus::ComputerWon => self.computer_wins += 1,
            GameStatus::Tie => self.ties += 1,
            GameStatus::InProgress => return false,
        }
        true
    }

    /// 清零
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 已完成的总局数
    pub fn games_played(&self) -> u32 {
        self.human_wins + self.computer_wins + self.ties
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "人类: {}  电脑: {}  平局: {}",
            self.human_wins, self.computer_wins, self.ties
        )
    }
}
