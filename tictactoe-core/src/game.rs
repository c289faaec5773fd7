//! 对局规则引擎
//!
//! `GameState` 独占一局的棋盘，负责落子校验和终局判定。

use crate::board::Board;
use crate::cell::{Cell, Player, Position};
use crate::error::{GameError, IllegalReason, Result};
use crate::snapshot::Snapshot;
use crate::status::GameStatus;

/// 一局游戏的状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    board: Board,
}

impl GameState {
    /// 创建新对局（空棋盘）
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
        }
    }

    /// 从已有棋盘创建对局（校验规则）
    pub fn from_board(board: Board) -> Result<Self> {
        board.validate()?;
        Ok(Self { board })
    }

    /// 清空棋盘
    pub fn reset(&mut self) {
        self.board = Board::empty();
        tracing::debug!("棋盘已重置");
    }

    /// 获取棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 获取指定格子的占据者
    pub fn occupant(&self, index: usize) -> Result<Cell> {
        self.board.get(index).ok_or(GameError::OutOfRange { index })
    }

    /// 计算当前对局状态
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// 尝试落子，失败时返回 false 且棋盘不变
    pub fn apply_move(&mut self, player: Player, index: usize) -> bool {
        self.try_move(player, index).is_ok()
    }

    /// 严格落子：失败时返回具体错误，棋盘不变
    pub fn try_move(&mut self, player: Player, index: usize) -> Result<()> {
        let pos = Position::new(index).ok_or(GameError::OutOfRange { index })?;

        if !self.board.at(pos).is_empty() {
            return Err(GameError::IllegalMove {
                index,
                reason: IllegalReason::Occupied,
            });
        }

        if self.status().is_over() {
            return Err(GameError::IllegalMove {
                index,
                reason: IllegalReason::GameOver,
            });
        }

        self.board.set(pos, Cell::from(player));
        tracing::debug!(%player, index, status = %self.status(), "落子");
        Ok(())
    }

    /// 所有空格位置
    pub fn empty_cells(&self) -> Vec<Position> {
        self.board.empty_cells()
    }

    /// 已落子数
    pub fn move_count(&self) -> usize {
        self.board.move_count()
    }

    /// 导出快照字符串
    pub fn snapshot(&self) -> String {
        Snapshot::encode(&self.board)
    }

    /// 从快照恢复棋盘，失败时当前棋盘不变
    pub fn restore(&mut self, snapshot: &str) -> Result<()> {
        match Snapshot::parse(snapshot) {
            Ok(board) => {
                self.board = board;
                tracing::debug!(snapshot, "棋盘已恢复");
                Ok(())
            }
            Err(e) => {
                tracing::warn!("快照恢复失败: {}", e);
                Err(e)
            }
        }
    }
}
