use crate::board::Board;
use crate::types::Mark;
use crate::win_detector::check_win;

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;

/// Picks the bot's move by scoring every open position with an exhaustive
/// minimax search. Returns `None` when the board has no open positions, which
/// means the caller asked for a move after the game already ended.
pub fn select_move(board: &Board, bot_mark: Mark) -> Option<usize> {
    let human_mark = bot_mark.opponent()?;
    let open_positions = board.open_positions();

    if open_positions.is_empty() {
        return None;
    }

    let mut best_position = None;
    let mut best_score = i32::MIN;

    // Ascending scan, replace only on strict improvement: equal scores
    // resolve to the lowest position index.
    for position in open_positions {
        let candidate = board.place(bot_mark, position);
        let score = minimax(&candidate, bot_mark, human_mark);

        if score > best_score {
            best_score = score;
            best_position = Some(position);
        }
    }

    best_position
}

/// Full-depth game tree score of `board` from the bot's point of view:
/// 10 for a line the bot completed, -10 for one its opponent completed,
/// 0 for a draw. Scores are not depth-adjusted, so a win now and a win three
/// plies later are worth the same.
pub fn minimax(board: &Board, bot_mark: Mark, mark_to_move: Mark) -> i32 {
    // Whoever completed a line moved last; it is never mark_to_move.
    if let Some(winner_mark) = check_win(board) {
        return if winner_mark == bot_mark {
            WIN_SCORE
        } else {
            LOSS_SCORE
        };
    }

    if board.is_full() {
        return 0;
    }

    let next_mark = mark_to_move.opponent().unwrap();
    let is_maximizing = mark_to_move == bot_mark;

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for position in board.open_positions() {
            let eval = minimax(&board.place(mark_to_move, position), bot_mark, next_mark);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for position in board.open_positions() {
            let eval = minimax(&board.place(mark_to_move, position), bot_mark, next_mark);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
