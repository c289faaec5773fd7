//! 对局会话
//!
//! 串联规则引擎和电脑选择器：人类先手，每次人类落子被接受后电脑立即应对。

use chrono::Utc;
use tictactoe_ai::{MoveSelector, Selection};
use tictactoe_core::{Board, Difficulty, GameError, GameState, GameStatus, Player, Result};

use crate::scores::Scoreboard;
use crate::storage::SavedSession;

/// 一个回合的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    /// 人类落子位置
    pub human: usize,
    /// 电脑应对（人类这一步已终局时为 None）
    pub computer: Option<Selection>,
    /// 回合结束后的状态
    pub status: GameStatus,
}

/// 对局会话
pub struct Session {
    game: GameState,
    selector: MoveSelector,
    scores: Scoreboard,
}

impl Session {
    /// 创建会话，指定种子时电脑落子可复现
    pub fn new(difficulty: Difficulty, seed: Option<u64>, scores: Scoreboard) -> Self {
        let selector = match seed {
            Some(seed) => MoveSelector::with_seed(difficulty, seed),
            None => MoveSelector::from_difficulty(difficulty),
        };
        Self {
            game: GameState::new(),
            selector,
            scores,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    pub fn difficulty(&self) -> Difficulty {
        self.selector.difficulty()
    }

    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// 开始新的一局
    pub fn new_game(&mut self) {
        self.game.reset();
        tracing::info!("新对局开始，难度: {}", self.difficulty());
    }

    /// 修改难度，不影响当前棋盘
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.selector.set_difficulty(difficulty);
    }

    /// 修改难度并开始新的一局
    pub fn change_difficulty(&mut self, difficulty: Difficulty) {
        self.set_difficulty(difficulty);
        self.new_game();
    }

    /// 统计清零
    pub fn reset_scores(&mut self) {
        self.scores.reset();
        tracing::info!("统计已清零");
    }

    /// 人类在指定格子落子，未终局时电脑随即应对
    ///
    /// 人类落子非法时返回错误，棋盘和统计都不变。
    pub fn play(&mut self, index: usize) -> Result<TurnOutcome> {
        self.game.try_move(Player::Human, index)?;

        let mut computer = None;
        if !self.is_over() {
            computer = Some(self.computer_turn()?);
        }

        let status = self.status();
        if status.is_over() {
            self.scores.record(status);
            tracing::info!("对局结束: {}，{}", status, self.scores);
        }

        Ok(TurnOutcome {
            human: index,
            computer,
            status,
        })
    }

    /// 电脑走一步
    fn computer_turn(&mut self) -> Result<Selection> {
        let selection = self.selector.choose(self.game.board())?;
        self.game
            .try_move(Player::Computer, selection.position.index())?;
        Ok(selection)
    }

    /// 导出当前对局用于保存
    pub fn to_saved(&self) -> SavedSession {
        SavedSession {
            board: *self.game.board(),
            difficulty: self.difficulty(),
            saved_at: Utc::now(),
        }
    }

    /// 恢复保存的对局
    ///
    /// 保存时若轮到电脑（人类比电脑多一子），电脑立即补走一步。
    /// 不符合人类先手顺序的棋盘被拒绝，当前对局不变。
    pub fn restore(&mut self, saved: &SavedSession) -> Result<()> {
        let game = GameState::from_board(saved.board)?;
        check_turn_order(game.board())?;
        self.game = game;
        self.selector.set_difficulty(saved.difficulty);

        let board = self.game.board();
        if !self.is_over() && board.count(Player::Human) > board.count(Player::Computer) {
            self.computer_turn()?;
            let status = self.status();
            if status.is_over() {
                self.scores.record(status);
            }
        }

        tracing::info!(snapshot = %self.game.snapshot(), "已恢复对局");
        Ok(())
    }
}

/// 人类先手：电脑的棋子不能多于人类，人类获胜后电脑不能再落子
fn check_turn_order(board: &Board) -> Result<()> {
    let humans = board.count(Player::Human);
    let computers = board.count(Player::Computer);

    if computers > humans {
        return Err(GameError::InvalidGameState {
            reason: format!("computer moved first: {} X vs {} O", humans, computers),
        });
    }
    if board.status() == GameStatus::HumanWon && computers == humans {
        return Err(GameError::InvalidGameState {
            reason: "computer moved after human won".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Cell, IllegalReason, Snapshot};

    fn saved(snapshot: &str, difficulty: Difficulty) -> SavedSession {
        SavedSession {
            board: Snapshot::parse(snapshot).unwrap(),
            difficulty,
            saved_at: Utc::now(),
        }
    }

    #[test]
    fn test_play_answers_with_computer_move() {
        let mut session = Session::new(Difficulty::Expert, Some(9), Scoreboard::default());

        let outcome = session.play(4).unwrap();
        assert_eq!(outcome.human, 4);
        assert_eq!(outcome.status, GameStatus::InProgress);

        let computer = outcome.computer.unwrap();
        assert_ne!(computer.position.index(), 4);
        assert_eq!(session.game().occupant(4), Ok(Cell::Human));
        assert_eq!(
            session.game().occupant(computer.position.index()),
            Ok(Cell::Computer)
        );
        assert_eq!(session.game().move_count(), 2);
    }

    #[test]
    fn test_illegal_move_changes_nothing() {
        let mut session = Session::new(Difficulty::Expert, Some(1), Scoreboard::default());
        let outcome = session.play(0).unwrap();
        let taken = outcome.computer.unwrap().position.index();
        let before = session.game().clone();

        assert_eq!(
            session.play(taken),
            Err(GameError::IllegalMove {
                index: taken,
                reason: IllegalReason::Occupied
            })
        );
        assert_eq!(session.play(9), Err(GameError::OutOfRange { index: 9 }));
        assert_eq!(session.game(), &before);
    }

    #[test]
    fn test_human_win_is_counted_once() {
        let mut session = Session::new(Difficulty::Easy, Some(0), Scoreboard::default());
        // X 在 0、1，O 在 3、4，人类下 2 获胜，电脑不再应对
        session.restore(&saved("XX-OO----", Difficulty::Easy)).unwrap();

        let outcome = session.play(2).unwrap();
        assert_eq!(outcome.status, GameStatus::HumanWon);
        assert!(outcome.computer.is_none());
        assert_eq!(session.scores().human_wins, 1);

        assert!(session.play(5).is_err());
        assert_eq!(session.scores().games_played(), 1);
    }

    #[test]
    fn test_expert_computer_wins() {
        let mut session = Session::new(Difficulty::Expert, Some(0), Scoreboard::default());
        session.restore(&saved("XX-OO----", Difficulty::Expert)).unwrap();

        // 人类不堵 2 而是下 8，电脑在 5 获胜
        let outcome = session.play(8).unwrap();
        assert_eq!(outcome.computer.map(|s| s.position.index()), Some(5));
        assert_eq!(outcome.status, GameStatus::ComputerWon);
        assert_eq!(session.scores().computer_wins, 1);
    }

    #[test]
    fn test_restore_runs_pending_computer_turn() {
        let mut session = Session::new(Difficulty::Expert, Some(0), Scoreboard::default());
        session.restore(&saved("XX--O-X-O", Difficulty::Hard)).unwrap();
        // 人类三子、电脑两子，轮到电脑补走一步
        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert_eq!(session.game().board().count(Player::Computer), 3);
    }

    #[test]
    fn test_restore_rejects_computer_first() {
        let mut session = Session::new(Difficulty::Expert, Some(0), Scoreboard::default());
        session.play(4).unwrap();
        let before = session.game().clone();

        let result = session.restore(&saved("O--------", Difficulty::Easy));
        assert!(matches!(result, Err(GameError::InvalidGameState { .. })));
        assert_eq!(session.game(), &before);
        assert_eq!(session.difficulty(), Difficulty::Expert);
    }

    #[test]
    fn test_restore_rejects_move_after_human_win() {
        let mut session = Session::new(Difficulty::Expert, Some(0), Scoreboard::default());

        let result = session.restore(&saved("XXXOO-O--", Difficulty::Hard));
        assert!(matches!(result, Err(GameError::InvalidGameState { .. })));
        assert_eq!(session.game().move_count(), 0);
        assert_eq!(session.scores().games_played(), 0);
    }

    #[test]
    fn test_restore_accepts_finished_games() {
        let mut session = Session::new(Difficulty::Expert, Some(0), Scoreboard::default());
        session.restore(&saved("XXXOO----", Difficulty::Hard)).unwrap();
        assert_eq!(session.status(), GameStatus::HumanWon);

        session.restore(&saved("OOOXX-X--", Difficulty::Hard)).unwrap();
        assert_eq!(session.status(), GameStatus::ComputerWon);
    }

    #[test]
    fn test_saved_roundtrip() {
        let mut session = Session::new(Difficulty::Hard, Some(3), Scoreboard::default());
        session.play(0).unwrap();
        let saved = session.to_saved();

        let mut restored = Session::new(Difficulty::Easy, Some(3), Scoreboard::default());
        restored.restore(&saved).unwrap();

        assert_eq!(restored.game(), session.game());
        assert_eq!(restored.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_change_difficulty_starts_new_game() {
        let mut session = Session::new(Difficulty::Expert, Some(2), Scoreboard::default());
        session.play(4).unwrap();

        session.change_difficulty(Difficulty::Easy);
        assert_eq!(session.difficulty(), Difficulty::Easy);
        assert_eq!(session.game().move_count(), 0);

        session.play(4).unwrap();
        session.set_difficulty(Difficulty::Hard);
        assert_eq!(session.game().move_count(), 2);
    }

    #[test]
    fn test_full_game_always_finishes() {
        let mut session = Session::new(Difficulty::Expert, Some(77), Scoreboard::default());

        while !session.is_over() {
            let index = session.game().empty_cells()[0].index();
            session.play(index).unwrap();
        }
        assert_eq!(session.scores().games_played(), 1);

        session.new_game();
        assert_eq!(session.status(), GameStatus::InProgress);
        session.reset_scores();
        assert_eq!(session.scores().games_played(), 0);
    }
}
