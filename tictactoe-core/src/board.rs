//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, Player, Position};
use crate::constants::{BOARD_SIZE, BOARD_WIDTH, WINNING_LINES};
use crate::error::{GameError, Result};
use crate::snapshot::Snapshot;
use crate::status::GameStatus;

/// 棋盘
///
/// 3x3 棋盘，索引为 row * 3 + col。序列化时使用 9 字符快照，反序列化会校验规则。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// 从格子数组创建棋盘（不检查规则，需要时调用 [`Board::validate`]）
    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// 获取指定索引的格子
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// 获取指定位置的格子
    pub fn at(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// 设置指定位置的格子（不检查规则）
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// 返回在指定位置落子后的棋盘副本（不检查规则，原棋盘不变）
    pub fn with_mark(&self, pos: Position, player: Player) -> Board {
        let mut scratch = *self;
        scratch.set(pos, Cell::from(player));
        scratch
    }

    /// 全部格子
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// 所有空格位置，按索引升序
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::all().filter(|pos| self.at(*pos).is_empty()).collect()
    }

    /// 指定玩家的棋子数
    pub fn count(&self, player: Player) -> usize {
        let target = Cell::from(player);
        self.cells.iter().filter(|c| **c == target).count()
    }

    /// 已落子数
    pub fn move_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// 是否已下满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// 某条连线的归属（三格同属一方时返回该方）
    fn line_owner(&self, line: &[usize; 3]) -> Option<Player> {
        let [a, b, c] = *line;
        let owner = self.cells[a].player()?;
        if self.cells[b] == self.cells[a] && self.cells[c] == self.cells[a] {
            Some(owner)
        } else {
            None
        }
    }

    /// 按固定顺序找到的第一条完整连线
    pub fn winning_line(&self) -> Option<(Player, [usize; 3])> {
        WINNING_LINES
            .iter()
            .find_map(|line| self.line_owner(line).map(|owner| (owner, *line)))
    }

    /// 指定玩家是否已连成一线
    pub fn has_line(&self, player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| self.line_owner(line) == Some(player))
    }

    /// 计算对局状态
    pub fn status(&self) -> GameStatus {
        if let Some((winner, _)) = self.winning_line() {
            return GameStatus::won_by(winner);
        }

        if self.is_full() {
            GameStatus::Tie
        } else {
            GameStatus::InProgress
        }
    }

    /// 校验棋盘是否可能由合法对局产生
    pub fn validate(&self) -> Result<()> {
        let humans = self.count(Player::Human);
        let computers = self.count(Player::Computer);

        if humans.abs_diff(computers) > 1 {
            return Err(GameError::InvalidGameState {
                reason: format!("wrong number of marks: {} X vs {} O", humans, computers),
            });
        }

        let human_line = self.has_line(Player::Human);
        let computer_line = self.has_line(Player::Computer);

        if human_line && computer_line {
            return Err(GameError::InvalidGameState {
                reason: "both players have a winning line".to_string(),
            });
        }

        // 获胜方必须是最后落子的一方
        if human_line && humans < computers {
            return Err(GameError::InvalidGameState {
                reason: "human won with fewer marks than computer".to_string(),
            });
        }
        if computer_line && computers < humans {
            return Err(GameError::InvalidGameState {
                reason: "computer won with fewer marks than human".to_string(),
            });
        }

        Ok(())
    }
}

impl TryFrom<String> for Board {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self> {
        Snapshot::parse(&value)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        Snapshot::encode(&board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_WIDTH).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: String = cells.iter().map(|c| c.to_char()).collect();
            f.write_str(&line)?;
        }
        Ok(())
    }
}
