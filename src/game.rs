use tracing::debug;

use crate::board::Board;
use crate::capture::CaptureOutcome;
use crate::config::GameConfig;
use crate::error::EngineError;
use crate::handicap::apply_handicap;
use crate::rules::{self, MoveVerdict};
use crate::scoring;
use crate::types::{CaptureCounts, Color, GameState, Move, MoveReport, Position, Score};

/// What a player did on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Play(Position),
    Pass,
}

/// One undo-log entry: the position before the action and who took it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub prior_board: Board,
    pub prior_captures: CaptureCounts,
    pub color: Color,
    pub action: Action,
    pub captured: Vec<Position>,
}

/// A game in progress: composes the pure rule functions per committed move.
///
/// The ko reference is always the board before the most recent action, which
/// is the `prior_board` of the last history entry.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    current_player: Color,
    captures: CaptureCounts,
    history: Vec<HistoryEntry>,
    is_game_over: bool,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let board = apply_handicap(&Board::new(config.board_size)?, config.handicap)?;
        let current_player = if config.handicap > 0 {
            Color::White
        } else {
            Color::Black
        };
        debug!(size = config.board_size, handicap = config.handicap, "new game");
        Ok(Self {
            config,
            board,
            current_player,
            captures: CaptureCounts::default(),
            history: Vec::new(),
            is_game_over: false,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn captures(&self) -> CaptureCounts {
        self.captures
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn ko_reference(&self) -> Option<&Board> {
        self.history.last().map(|entry| &entry.prior_board)
    }

    /// Checks a move for the player to move without committing it.
    pub fn check(&self, row: u8, col: u8) -> Result<MoveVerdict, EngineError> {
        rules::check_move(
            &self.board,
            Move::new(row, col, self.current_player),
            self.ko_reference(),
            self.config.legality,
        )
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        if self.is_game_over {
            return Vec::new();
        }
        // The board and the ko reference always share a size.
        rules::legal_moves(
            &self.board,
            self.current_player,
            self.ko_reference(),
            self.config.legality,
        )
        .unwrap_or_default()
    }

    /// Places a stone for the player to move, removing any captured groups.
    pub fn play(&mut self, row: u8, col: u8) -> Result<MoveReport, EngineError> {
        if self.is_game_over {
            return Err(EngineError::GameOver);
        }

        let position = Position::new(row, col);
        self.board.check_position(position)?;
        let color = self.current_player;
        let CaptureOutcome { board, captured } = rules::judge(
            &self.board,
            Move { position, color },
            self.ko_reference(),
            self.config.legality,
        )
        .map_err(|reason| EngineError::IllegalMove { position, reason })?;

        let prior_board = std::mem::replace(&mut self.board, board);
        let prior_captures = self.captures;
        self.captures.add(color, captured.len() as u32);
        self.history.push(HistoryEntry {
            prior_board,
            prior_captures,
            color,
            action: Action::Play(position),
            captured: captured.clone(),
        });
        self.current_player = color.opponent();

        Ok(MoveReport {
            color,
            position,
            captured,
        })
    }

    /// Passes the turn. Two consecutive passes end the game.
    pub fn pass(&mut self) -> Result<(), EngineError> {
        if self.is_game_over {
            return Err(EngineError::GameOver);
        }

        let previous_was_pass = self
            .history
            .last()
            .is_some_and(|entry| entry.action == Action::Pass);
        self.history.push(HistoryEntry {
            prior_board: self.board.clone(),
            prior_captures: self.captures,
            color: self.current_player,
            action: Action::Pass,
            captured: Vec::new(),
        });
        debug!(color = ?self.current_player, "pass");
        self.current_player = self.current_player.opponent();

        if previous_was_pass {
            self.end_game();
        }
        Ok(())
    }

    /// Reverts the most recent action, including a game-ending pass.
    pub fn undo(&mut self) -> Result<(), EngineError> {
        let entry = self.history.pop().ok_or(EngineError::NothingToUndo)?;
        debug!(color = ?entry.color, action = ?entry.action, "undo");
        self.board = entry.prior_board;
        self.captures = entry.prior_captures;
        self.current_player = entry.color;
        self.is_game_over = false;
        Ok(())
    }

    pub fn end_game(&mut self) {
        debug!("game over");
        self.is_game_over = true;
    }

    pub fn score(&self) -> Score {
        scoring::score(&self.board, self.captures)
    }

    pub fn territory_map(&self) -> Vec<u8> {
        scoring::territory_map(&self.board)
    }

    pub fn to_game_state(&self) -> GameState {
        let last = self.history.last();
        GameState {
            size: self.board.size(),
            board: self.board.to_array(),
            current_player: self.current_player,
            captures: self.captures,
            move_count: self.history.len(),
            is_game_over: self.is_game_over,
            is_pass: last.is_some_and(|entry| entry.action == Action::Pass),
            captured: last.map(|entry| entry.captured.clone()).unwrap_or_default(),
            last_move: last.and_then(|entry| match entry.action {
                Action::Play(pos) => Some(pos),
                Action::Pass => None,
            }),
            can_undo: !self.history.is_empty(),
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Color) {
        self.board = board;
        self.current_player = current_player;
        self.history.clear();
        self.is_game_over = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LegalityRule;
    use crate::error::IllegalReason;

    fn nine() -> GameSession {
        GameSession::new(GameConfig::with_size(9)).unwrap()
    }

    fn play_all(game: &mut GameSession, moves: &[(u8, u8)]) {
        for &(row, col) in moves {
            game.play(row, col).unwrap();
        }
    }

    /// Alternating moves that build a ko where Black captures at (1,2).
    fn ko_game() -> GameSession {
        let mut game = GameSession::new(GameConfig::with_size(5)).unwrap();
        play_all(
            &mut game,
            &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1), (1, 3), (4, 4), (2, 2)],
        );
        game
    }

    #[test]
    fn initial_state_is_correct() {
        let game = nine();
        let state = game.to_game_state();

        assert_eq!(state.size, 9);
        assert_eq!(state.current_player, Color::Black);
        assert_eq!(state.captures, CaptureCounts::default());
        assert!(!state.is_game_over);
        assert!(!state.is_pass);
        assert!(!state.can_undo);
        assert!(state.captured.is_empty());
        assert_eq!(game.legal_moves().len(), 81);
    }

    #[test]
    fn occupied_point_returns_error_and_keeps_turn() {
        let mut game = nine();
        game.play(4, 4).unwrap();

        let err = game.play(4, 4).unwrap_err();

        assert_eq!(
            err,
            EngineError::IllegalMove {
                position: Position::new(4, 4),
                reason: IllegalReason::Occupied
            }
        );
        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn out_of_range_move_is_out_of_bounds() {
        let mut game = nine();

        assert!(matches!(game.play(9, 0), Err(EngineError::OutOfBounds { .. })));
    }

    #[test]
    fn capture_is_credited_to_mover() {
        let mut game = ko_game();

        let report = game.play(1, 2).unwrap();

        assert_eq!(report.captured, vec![Position::new(1, 1)]);
        assert_eq!(game.captures(), CaptureCounts { black: 1, white: 0 });
        assert_eq!(game.board().get(Position::new(1, 1)), Ok(None));
        assert_eq!(game.score().black, 1 + scoring::score(game.board(), CaptureCounts::default()).black);
    }

    #[test]
    fn immediate_recapture_is_refused_then_allowed_after_exchange() {
        let mut game = ko_game();
        game.play(1, 2).unwrap();

        assert_eq!(game.check(1, 1), Ok(MoveVerdict::Ko));
        let err = game.play(1, 1).unwrap_err();
        assert_eq!(
            err,
            EngineError::IllegalMove {
                position: Position::new(1, 1),
                reason: IllegalReason::Ko
            }
        );

        play_all(&mut game, &[(4, 0), (3, 4)]);
        let report = game.play(1, 1).unwrap();

        assert_eq!(report.captured, vec![Position::new(1, 2)]);
        assert_eq!(game.captures(), CaptureCounts { black: 1, white: 1 });
    }

    #[test]
    fn undo_restores_board_and_player() {
        let mut game = nine();
        let before = game.board().clone();

        game.play(2, 3).unwrap();
        game.undo().unwrap();

        assert_eq!(game.board(), &before);
        assert_eq!(game.current_player(), Color::Black);
        assert!(game.history().is_empty());
        assert_eq!(game.undo(), Err(EngineError::NothingToUndo));
    }

    #[test]
    fn undo_of_capture_restores_tally_and_ko_reference() {
        let mut game = ko_game();
        let shape = game.board().clone();
        let reference = game.ko_reference().cloned();

        game.play(1, 2).unwrap();
        game.undo().unwrap();

        assert_eq!(game.board(), &shape);
        assert_eq!(game.captures(), CaptureCounts::default());
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.ko_reference().cloned(), reference);
    }

    #[test]
    fn two_passes_end_the_game() {
        let mut game = nine();

        game.pass().unwrap();
        assert!(game.to_game_state().is_pass);
        assert_eq!(game.current_player(), Color::White);
        assert!(!game.is_game_over());

        game.pass().unwrap();
        assert!(game.is_game_over());
        assert_eq!(game.play(0, 0), Err(EngineError::GameOver));
        assert_eq!(game.pass(), Err(EngineError::GameOver));
        assert!(game.legal_moves().is_empty());

        game.undo().unwrap();
        assert!(!game.is_game_over());
        assert_eq!(game.current_player(), Color::White);
    }

    #[test]
    fn move_after_pass_resets_pass_chain() {
        let mut game = nine();

        game.pass().unwrap();
        game.play(0, 0).unwrap();
        game.pass().unwrap();

        assert!(!game.is_game_over());
        assert_eq!(game.to_game_state().last_move, None);
    }

    #[test]
    fn handicap_game_starts_with_white() {
        let config = GameConfig {
            board_size: 19,
            handicap: 4,
            ..GameConfig::default()
        };

        let game = GameSession::new(config).unwrap();

        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.board().stone_count(Color::Black), 4);
        assert!(game.ko_reference().is_none());
    }

    #[test]
    fn approximate_rule_rejects_filling_own_eye() {
        let eye = Board::from_diagram(
            "
            . X . . .
            X . X . .
            . X . . .
            . . . . .
            . . . . .
            ",
        );
        let mut strict = GameSession::new(GameConfig::with_size(5)).unwrap();
        strict.set_board_for_test(eye.clone(), Color::Black);
        let mut approximate = GameSession::new(GameConfig {
            board_size: 5,
            legality: LegalityRule::Approximate,
            ..GameConfig::default()
        })
        .unwrap();
        approximate.set_board_for_test(eye, Color::Black);

        assert!(strict.play(1, 1).is_ok());
        assert_eq!(
            approximate.play(1, 1),
            Err(EngineError::IllegalMove {
                position: Position::new(1, 1),
                reason: IllegalReason::Suicide
            })
        );
    }

    #[test]
    fn state_reports_last_move_and_captures() {
        let mut game = ko_game();
        game.play(1, 2).unwrap();

        let state = game.to_game_state();

        assert_eq!(state.last_move, Some(Position::new(1, 2)));
        assert_eq!(state.captured, vec![Position::new(1, 1)]);
        assert_eq!(state.move_count, 9);
        assert!(state.can_undo);
        assert_eq!(state.board[5 + 1], 0);
    }
}
