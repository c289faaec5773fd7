//! 交互命令解析

use std::str::FromStr;

use tictactoe_core::{Difficulty, Position};

/// 终端输入的一条命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 在指定格子（0-8）落子
    Play(usize),
    NewGame,
    /// 切换难度并开始新对局
    Difficulty(Difficulty),
    Score,
    ResetScore,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();

        match words.as_slice() {
            [] => Err("请输入命令，输入 h 查看帮助".to_string()),
            [cell] if cell.chars().all(|c| c.is_ascii_digit()) => parse_cell(cell),
            [row, col] if row.parse::<usize>().is_ok() => parse_row_col(row, col),
            [word, rest @ ..] => match (word.to_lowercase().as_str(), rest) {
                ("n" | "new", []) => Ok(Command::NewGame),
                ("d" | "difficulty", [level]) => level.parse().map(Command::Difficulty),
                ("d" | "difficulty", _) => Err("用法: d <easy|hard|expert>".to_string()),
                ("s" | "score", []) => Ok(Command::Score),
                ("z" | "reset", []) => Ok(Command::ResetScore),
                ("h" | "help" | "?", []) => Ok(Command::Help),
                ("q" | "quit" | "exit", []) => Ok(Command::Quit),
                _ => Err(format!("未知命令: {}", s.trim())),
            },
        }
    }
}

/// 解析 1-9 的格子编号
fn parse_cell(s: &str) -> Result<Command, String> {
    s.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(Position::new)
        .map(|pos| Command::Play(pos.index()))
        .ok_or_else(|| format!("格子编号应在 1-9 之间: {}", s))
}

/// 解析从 1 开始的行列
fn parse_row_col(row: &str, col: &str) -> Result<Command, String> {
    let index = |s: &str| s.parse::<usize>().ok().and_then(|n| n.checked_sub(1));

    index(row)
        .zip(index(col))
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .map(|pos| Command::Play(pos.index()))
        .ok_or_else(|| format!("行列应在 1-3 之间: {} {}", row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_number() {
        assert_eq!("1".parse(), Ok(Command::Play(0)));
        assert_eq!(" 9 ".parse(), Ok(Command::Play(8)));
        assert!("0".parse::<Command>().is_err());
        assert!("10".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_row_col() {
        assert_eq!("1 1".parse(), Ok(Command::Play(0)));
        assert_eq!("2 3".parse(), Ok(Command::Play(5)));
        assert_eq!("3 1".parse(), Ok(Command::Play(6)));
        assert!("0 1".parse::<Command>().is_err());
        assert!("1 4".parse::<Command>().is_err());
        assert!("2 x".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_words() {
        assert_eq!("n".parse(), Ok(Command::NewGame));
        assert_eq!("NEW".parse(), Ok(Command::NewGame));
        assert_eq!("s".parse(), Ok(Command::Score));
        assert_eq!("z".parse(), Ok(Command::ResetScore));
        assert_eq!("?".parse(), Ok(Command::Help));
        assert_eq!("exit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("d easy".parse(), Ok(Command::Difficulty(Difficulty::Easy)));
        assert_eq!(
            "difficulty Hard".parse(),
            Ok(Command::Difficulty(Difficulty::Hard))
        );
        assert_eq!("d x".parse(), Ok(Command::Difficulty(Difficulty::Expert)));
        assert!("d".parse::<Command>().is_err());
        assert!("d insane".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<Command>().is_err());
        assert!("   ".parse::<Command>().is_err());
        assert!("fly".parse::<Command>().is_err());
        assert!("n now".parse::<Command>().is_err());
    }
}
