//! 落子子策略
//!
//! 所有假设性落子都在棋盘副本上进行，调用方的棋盘不会被修改。

use rand::seq::SliceRandom;
use rand::Rng;
use tictactoe_core::{Board, GameStatus, Player, Position};

/// 子策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// 一步制胜
    Winning,
    /// 堵截对手的一步制胜
    Blocking,
    /// 在空格中均匀随机选择
    Random,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::Winning => "winning",
            Strategy::Blocking => "blocking",
            Strategy::Random => "random",
        };
        f.write_str(name)
    }
}

/// 子策略实现
pub struct Tactics;

impl Tactics {
    /// 执行指定子策略，找不到落子时返回 None
    pub fn apply<R: Rng + ?Sized>(
        strategy: Strategy,
        board: &Board,
        rng: &mut R,
    ) -> Option<Position> {
        match strategy {
            Strategy::Winning => Self::winning_move(board),
            Strategy::Blocking => Self::blocking_move(board),
            Strategy::Random => Self::random_move(board, rng),
        }
    }

    /// 电脑落子后立即获胜的第一个空格（按索引升序）
    pub fn winning_move(board: &Board) -> Option<Position> {
        Self::first_completing(board, Player::Computer)
    }

    /// 人类落子后立即获胜的第一个空格（按索引升序）
    ///
    /// 只看一步：对手同时有两条将成的线时只能堵住其中一条。
    pub fn blocking_move(board: &Board) -> Option<Position> {
        Self::first_completing(board, Player::Human)
    }

    /// 在所有空格中均匀随机选择一个
    pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
        board.empty_cells().choose(rng).copied()
    }

    /// 找到让指定玩家立即连成一线的第一个空格
    fn first_completing(board: &Board, player: Player) -> Option<Position> {
        let target = GameStatus::won_by(player);
        board
            .empty_cells()
            .into_iter()
            .find(|pos| board.with_mark(*pos, player).status() == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tictactoe_core::{Cell, Snapshot};

    fn board(s: &str) -> Board {
        Snapshot::parse(s).unwrap()
    }

    #[test]
    fn test_winning_move() {
        // O 在 3、4，5 号格可以连成一行
        let b = board("XX-OO----");
        assert_eq!(Tactics::winning_move(&b).map(|p| p.index()), Some(5));
    }

    #[test]
    fn test_winning_move_none() {
        let b = board("X---O----");
        assert_eq!(Tactics::winning_move(&b), None);
    }

    #[test]
    fn test_winning_move_lowest_index() {
        // O 可以在 2（第一行）或 6（第一列）获胜，取较小索引
        let b = board("OO-O-X-XX");
        assert_eq!(Tactics::winning_move(&b).map(|p| p.index()), Some(2));
    }

    #[test]
    fn test_blocking_move() {
        let b = board("XX--O----");
        assert_eq!(Tactics::blocking_move(&b).map(|p| p.index()), Some(2));
    }

    #[test]
    fn test_blocking_ignores_second_threat() {
        // X 在第一行和第一列都差一步，只会堵住索引较小的 2
        let b = board("XX-X-O-O-");
        assert_eq!(Tactics::blocking_move(&b).map(|p| p.index()), Some(2));
    }

    #[test]
    fn test_probes_do_not_mutate() {
        let b = board("XX-OO----");
        let before = b;

        Tactics::winning_move(&b);
        Tactics::blocking_move(&b);
        assert_eq!(b, before);
    }

    #[test]
    fn test_random_move_lands_on_empty() {
        let b = board("XOXOX-O--");
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..100 {
            let pos = Tactics::random_move(&b, &mut rng).unwrap();
            assert_eq!(b.at(pos), Cell::Empty);
        }
    }

    #[test]
    fn test_random_move_covers_all_empty_cells() {
        let b = board("X---O----");
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut seen = [false; 9];

        for _ in 0..500 {
            let pos = Tactics::random_move(&b, &mut rng).unwrap();
            seen[pos.index()] = true;
        }

        for pos in b.empty_cells() {
            assert!(seen[pos.index()], "空格 {} 从未被选中", pos.index());
        }
        assert!(!seen[0] && !seen[4]);
    }

    #[test]
    fn test_random_move_full_board() {
        let b = board("XOXXOOOXX");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(Tactics::random_move(&b, &mut rng), None);
    }
}
