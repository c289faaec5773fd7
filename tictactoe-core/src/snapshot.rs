//! 棋盘快照编码
//!
//! 快照是按索引顺序排列的 9 个字符：
//! `X` 为人类，`O` 为电脑，`-` 为空格（解析时也接受空格和 `.`，标记不区分大小写）。
//!
//! 示例：`XO--X-O--`
//! ```text
//! X O -
//! - X -
//! O - -
//! ```

use crate::board::Board;
use crate::cell::Cell;
use crate::constants::BOARD_SIZE;
use crate::error::{GameError, Result};

/// 快照格式处理
pub struct Snapshot;

impl Snapshot {
    /// 解析快照字符串为棋盘，并校验棋盘规则
    pub fn parse(text: &str) -> Result<Board> {
        let board = Board::from_cells(Self::decode_cells(text)?);
        board.validate()?;
        Ok(board)
    }

    /// 只解析字符格式，不校验规则
    pub fn decode_cells(text: &str) -> Result<[Cell; BOARD_SIZE]> {
        let len = text.chars().count();
        if len != BOARD_SIZE {
            return Err(GameError::InvalidSnapshot {
                reason: format!("expected {} cells, got {}", BOARD_SIZE, len),
            });
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (index, c) in text.chars().enumerate() {
            cells[index] = Cell::from_char(c).ok_or_else(|| GameError::InvalidSnapshot {
                reason: format!("invalid cell character {:?} at index {}", c, index),
            })?;
        }

        Ok(cells)
    }

    /// 将棋盘编码为快照字符串
    pub fn encode(board: &Board) -> String {
        board.cells().iter().map(|c| c.to_char()).collect()
    }
}
