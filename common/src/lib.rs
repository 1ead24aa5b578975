pub mod board;
pub mod bot_controller;
pub mod game_state;
pub mod logger;
pub mod protocol;
pub mod types;
pub mod win_detector;

pub use board::{BOARD_CELLS, Board, WIN_COMBOS};
pub use bot_controller::{minimax, select_move};
pub use game_state::GameState;
pub use protocol::{ClientMessage, GameOverNotification, ServerMessage, StateUpdate};
pub use types::{FirstPlayer, GameStatus, Mark, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate};
