//! 规则常量定义

/// 棋盘边长（行数 = 列数）
pub const BOARD_WIDTH: usize = 3;

/// 棋盘格子总数
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_WIDTH;

/// 人类玩家标记
pub const HUMAN_MARK: char = 'X';

/// 电脑玩家标记
pub const COMPUTER_MARK: char = 'O';

/// 空格标记（快照编码使用）
pub const EMPTY_MARK: char = '-';

/// 全部 8 条连线，按固定顺序检查：
/// 三行（上到下）、三列（左到右）、主对角线、副对角线
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];
