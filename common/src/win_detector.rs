use crate::board::{Board, WIN_COMBOS};
use crate::types::{GameStatus, Mark, WinningLine};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for combo in WIN_COMBOS {
        let mark = cells[combo[0]];
        if mark != Mark::Empty && mark == cells[combo[1]] && mark == cells[combo[2]] {
            return Some(WinningLine::new(mark, combo));
        }
    }
    None
}

/// Derives the status of a board. A win is checked before a draw, so a full
/// board that contains a completed line counts as a win.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner_mark) = check_win(board) {
        return match winner_mark {
            Mark::X => GameStatus::XWon,
            Mark::O => GameStatus::OWon,
            Mark::Empty => unreachable!(),
        };
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
