//! 电脑落子选择器
//!
//! 按难度依次尝试子策略，前一个找不到落子时落到下一个。

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictactoe_core::{Board, Difficulty, GameError, Position, Result};

use crate::tactics::{Strategy, Tactics};

/// 选择器配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    pub difficulty: Difficulty,
    /// 依次尝试的子策略
    pub strategies: &'static [Strategy],
}

impl SelectorConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let strategies: &'static [Strategy] = match difficulty {
            Difficulty::Easy => &[Strategy::Random],
            Difficulty::Hard => &[Strategy::Winning, Strategy::Random],
            Difficulty::Expert => &[Strategy::Winning, Strategy::Blocking, Strategy::Random],
        };
        Self {
            difficulty,
            strategies,
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::default())
    }
}

/// 一次选择的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub position: Position,
    /// 产生该落子的子策略
    pub strategy: Strategy,
}

/// 电脑落子选择器
///
/// 持有自己的随机数生成器；相同种子、相同棋盘序列得到相同落子。
#[derive(Debug, Clone)]
pub struct MoveSelector {
    config: SelectorConfig,
    rng: ChaCha8Rng,
}

impl MoveSelector {
    /// 使用指定种子创建（可复现）
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            config: SelectorConfig::from_difficulty(difficulty),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// 从难度创建（随机种子）
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::with_seed(difficulty, rand::random())
    }

    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// 切换难度，随机数状态保持不变
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config = SelectorConfig::from_difficulty(difficulty);
    }

    /// 选择电脑的下一步，返回格子索引
    pub fn select_move(&mut self, board: &Board) -> Result<usize> {
        self.choose(board).map(|selection| selection.position.index())
    }

    /// 选择电脑的下一步，同时返回使用的子策略
    ///
    /// 棋盘已满或已分胜负时返回 [`GameError::NoLegalMoves`]。
    pub fn choose(&mut self, board: &Board) -> Result<Selection> {
        if board.status().is_over() {
            return Err(GameError::NoLegalMoves);
        }

        for &strategy in self.config.strategies {
            if let Some(position) = Tactics::apply(strategy, board, &mut self.rng) {
                tracing::debug!(
                    difficulty = %self.config.difficulty,
                    %strategy,
                    index = position.index(),
                    "电脑选择落子"
                );
                return Ok(Selection { position, strategy });
            }
        }

        Err(GameError::NoLegalMoves)
    }
}

/// 按难度为棋盘选择一步（每次使用新的随机种子）
pub fn select_move(board: &Board, difficulty: Difficulty) -> Result<usize> {
    MoveSelector::from_difficulty(difficulty).select_move(board)
}
