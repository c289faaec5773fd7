//! 格子、玩家与位置定义

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, BOARD_WIDTH, COMPUTER_MARK, EMPTY_MARK, HUMAN_MARK};

/// 玩家
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// 人类玩家（X）
    Human,
    /// 电脑玩家（O）
    Computer,
}

impl Player {
    /// 获取对手
    pub fn opponent(&self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// 获取棋子标记
    pub fn mark(&self) -> char {
        match self {
            Player::Human => HUMAN_MARK,
            Player::Computer => COMPUTER_MARK,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Computer => write!(f, "Computer"),
        }
    }
}

/// 格子状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// 空格
    #[default]
    Empty,
    /// 人类玩家占据
    Human,
    /// 电脑玩家占据
    Computer,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    /// 占据该格子的玩家
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Player::Human),
            Cell::Computer => Some(Player::Computer),
        }
    }

    /// 获取快照字符
    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => EMPTY_MARK,
            Cell::Human => HUMAN_MARK,
            Cell::Computer => COMPUTER_MARK,
        }
    }

    /// 从快照字符解析（大小写不敏感，空格和 `.` 也视为空）
    pub fn from_char(c: char) -> Option<Cell> {
        match c.to_ascii_uppercase() {
            HUMAN_MARK => Some(Cell::Human),
            COMPUTER_MARK => Some(Cell::Computer),
            EMPTY_MARK | ' ' | '.' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Cell::Human,
            Player::Computer => Cell::Computer,
        }
    }
}

/// 棋盘位置（0-8，行优先）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position(u8);

impl Position {
    /// 从索引创建位置
    pub fn new(index: usize) -> Option<Self> {
        if index < BOARD_SIZE {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// 从行列创建位置（均从 0 开始）
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_WIDTH && col < BOARD_WIDTH {
            Some(Self((row * BOARD_WIDTH + col) as u8))
        } else {
            None
        }
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn row(&self) -> usize {
        self.index() / BOARD_WIDTH
    }

    pub fn col(&self) -> usize {
        self.index() % BOARD_WIDTH
    }

    /// 全部位置，按索引升序
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8).map(Position)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
