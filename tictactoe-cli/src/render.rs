//! 终端渲染

use tictactoe_core::{Board, GameStatus, Position, BOARD_WIDTH};

const ROW_SEPARATOR: &str = "---+---+---";

/// 绘制棋盘，空格显示 1-9 编号
///
/// ```text
///  X | 2 | 3
/// ---+---+---
///  4 | O | 6
/// ---+---+---
///  7 | 8 | 9
/// ```
pub fn render_board(board: &Board) -> String {
    let mut lines = Vec::with_capacity(BOARD_WIDTH * 2 - 1);

    for row in 0..BOARD_WIDTH {
        let cells: Vec<String> = (0..BOARD_WIDTH)
            .filter_map(|col| Position::from_row_col(row, col))
            .map(|pos| match board.at(pos).player() {
                Some(player) => format!(" {} ", player.mark()),
                None => format!(" {} ", pos.index() + 1),
            })
            .collect();

        if row > 0 {
            lines.push(ROW_SEPARATOR.to_string());
        }
        lines.push(cells.join("|").trim_end().to_string());
    }

    lines.join("\n")
}

/// 对局状态提示
pub fn status_message(status: GameStatus) -> &'static str {
    match status {
        GameStatus::InProgress => "轮到你了 (X)",
        GameStatus::HumanWon => "你赢了！",
        GameStatus::ComputerWon => "电脑获胜。",
        GameStatus::Tie => "平局。",
    }
}

/// 命令帮助
pub fn help_text() -> &'static str {
    "命令:
  1-9        在对应格子落子
  <行> <列>  按行列落子，例如 2 3
  n          新对局
  d <难度>   切换难度 (easy / hard / expert) 并开始新对局
  s          查看胜负统计
  z          统计清零
  h          帮助
  q          退出（未完成的对局会被保存）"
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Snapshot;

    #[test]
    fn test_render_empty_board() {
        let expected = " 1 | 2 | 3\n---+---+---\n 4 | 5 | 6\n---+---+---\n 7 | 8 | 9";
        assert_eq!(render_board(&Board::empty()), expected);
    }

    #[test]
    fn test_render_marks() {
        let board = Snapshot::parse("X---O----").unwrap();
        let rendered = render_board(&board);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], " X | 2 | 3");
        assert_eq!(lines[2], " 4 | O | 6");
    }

    #[test]
    fn test_status_message() {
        assert_eq!(status_message(GameStatus::HumanWon), "你赢了！");
        assert_ne!(
            status_message(GameStatus::Tie),
            status_message(GameStatus::InProgress)
        );
    }
}
