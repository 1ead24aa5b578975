use rand::Rng;

use crate::board::Board;
use crate::types::{FirstPlayer, GameStatus, Mark};
use crate::win_detector::evaluate;

/// One game of human versus computer. Owns the live board, whose turn it is,
/// and the cached status; every move goes through `place_mark`.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    human_mark: Mark,
    bot_mark: Mark,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<usize>,
}

impl GameState {
    pub fn new(first_player: FirstPlayer) -> Self {
        let human_plays_x = match first_player {
            FirstPlayer::Human => true,
            FirstPlayer::Computer => false,
            FirstPlayer::Random => rand::rng().random(),
        };

        let (human_mark, bot_mark) = if human_plays_x {
            (Mark::X, Mark::O)
        } else {
            (Mark::O, Mark::X)
        };

        Self {
            board: Board::new(),
            human_mark,
            bot_mark,
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, mark: Mark, position: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        self.board = self.board.with_move(mark, position)?;
        self.last_move = Some(position);

        self.status = evaluate(&self.board);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => unreachable!(),
        };
    }

    pub fn reset(&mut self, first_player: FirstPlayer) {
        *self = GameState::new(first_player);
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn bot_mark(&self) -> Mark {
        self.bot_mark
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn is_bot_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.bot_mark
    }

    pub fn winner_mark(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_first_assigns_x_to_human() {
        let state = GameState::new(FirstPlayer::Human);
        assert_eq!(state.human_mark(), Mark::X);
        assert_eq!(state.bot_mark(), Mark::O);
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(!state.is_bot_turn());
    }

    #[test]
    fn test_computer_first_assigns_x_to_bot() {
        let state = GameState::new(FirstPlayer::Computer);
        assert_eq!(state.human_mark(), Mark::O);
        assert_eq!(state.bot_mark(), Mark::X);
        assert!(state.is_bot_turn());
    }

    #[test]
    fn test_random_first_always_starts_with_x() {
        for _ in 0..16 {
            let state = GameState::new(FirstPlayer::Random);
            assert_eq!(state.current_mark(), Mark::X);
            assert_eq!(state.human_mark(), state.bot_mark().opponent().unwrap());
        }
    }

    #[test]
    fn test_place_mark_alternates_turns() {
        let mut state = GameState::new(FirstPlayer::Human);
        state.place_mark(Mark::X, 0).unwrap();
        assert_eq!(state.current_mark(), Mark::O);
        assert_eq!(state.last_move(), Some(0));

        state.place_mark(Mark::O, 4).unwrap();
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_place_mark_rejects_out_of_turn_move() {
        let mut state = GameState::new(FirstPlayer::Human);
        let result = state.place_mark(Mark::O, 0);
        assert_eq!(result, Err("Not your turn".to_string()));
    }

    #[test]
    fn test_place_mark_rejects_occupied_cell() {
        let mut state = GameState::new(FirstPlayer::Human);
        state.place_mark(Mark::X, 0).unwrap();
        let result = state.place_mark(Mark::O, 0);
        assert_eq!(result, Err("Cell is already marked".to_string()));
    }

    #[test]
    fn test_win_ends_the_game() {
        let mut state = GameState::new(FirstPlayer::Human);
        for (mark, position) in [
            (Mark::X, 0),
            (Mark::O, 3),
            (Mark::X, 1),
            (Mark::O, 4),
            (Mark::X, 2),
        ] {
            state.place_mark(mark, position).unwrap();
        }

        assert_eq!(state.status(), GameStatus::XWon);
        assert_eq!(state.winner_mark(), Some(Mark::X));
        assert!(!state.is_bot_turn());

        let result = state.place_mark(Mark::O, 5);
        assert_eq!(result, Err("Game is already over".to_string()));
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        let mut state = GameState::new(FirstPlayer::Human);
        for (mark, position) in [
            (Mark::X, 0),
            (Mark::O, 2),
            (Mark::X, 1),
            (Mark::O, 3),
            (Mark::X, 5),
            (Mark::O, 4),
            (Mark::X, 6),
            (Mark::O, 8),
            (Mark::X, 7),
        ] {
            state.place_mark(mark, position).unwrap();
        }

        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.winner_mark(), None);
    }

    #[test]
    fn test_reset_starts_a_fresh_game() {
        let mut state = GameState::new(FirstPlayer::Human);
        state.place_mark(Mark::X, 0).unwrap();

        state.reset(FirstPlayer::Computer);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.board(), Board::new());
        assert_eq!(state.last_move(), None);
        assert!(state.is_bot_turn());
    }
}
