use serde::{Deserialize, Serialize};

use crate::game_state::GameState;
use crate::types::{FirstPlayer, GameStatus, Mark, WinningLine};
use crate::win_detector::check_win_with_line;

/// Messages the browser sends over the WebSocket, as tagged JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    NewGame { first_player: FirstPlayer },
    PlaceMark { position: usize },
}

/// Messages the server sends back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    State(StateUpdate),
    GameOver(GameOverNotification),
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateUpdate {
    pub cells: Vec<Mark>,
    pub current_mark: Mark,
    pub human_mark: Mark,
    pub bot_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl StateUpdate {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            cells: state.board().cells().to_vec(),
            current_mark: state.current_mark(),
            human_mark: state.human_mark(),
            bot_mark: state.bot_mark(),
            status: state.status(),
            last_move: state.last_move(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOverNotification {
    pub status: GameStatus,
    pub winner: Option<Mark>,
    pub winning_line: Option<WinningLine>,
}

impl GameOverNotification {
    pub fn from_game_state(state: &GameState) -> Self {
        let winning_line = if state.winner_mark().is_some() {
            check_win_with_line(&state.board())
        } else {
            None
        };

        Self {
            status: state.status(),
            winner: state.winner_mark(),
            winning_line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_new_game_message() {
        let message: ClientMessage =
            serde_json::from_str(r#"{"type":"new_game","first_player":"computer"}"#).unwrap();
        assert_eq!(
            message,
            ClientMessage::NewGame {
                first_player: FirstPlayer::Computer
            }
        );
    }

    #[test]
    fn test_parses_place_mark_message() {
        let message: ClientMessage =
            serde_json::from_str(r#"{"type":"place_mark","position":4}"#).unwrap();
        assert_eq!(message, ClientMessage::PlaceMark { position: 4 });
    }

    #[test]
    fn test_rejects_unknown_message_type() {
        let result: Result<ClientMessage, _> =
            serde_json::from_str(r#"{"type":"teleport","position":4}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_state_update_serialization() {
        let state = GameState::new(FirstPlayer::Human);
        let message = ServerMessage::State(StateUpdate::from_game_state(&state));
        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(value["type"], "state");
        assert_eq!(value["status"], "in_progress");
        assert_eq!(value["current_mark"], "x");
        assert_eq!(value["human_mark"], "x");
        assert_eq!(value["bot_mark"], "o");
        assert_eq!(value["cells"].as_array().unwrap().len(), 9);
        assert_eq!(value["cells"][0], "empty");
        assert!(value["last_move"].is_null());
    }

    #[test]
    fn test_game_over_serialization_includes_winning_line() {
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

        let message = ServerMessage::GameOver(GameOverNotification::from_game_state(&state));
        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(value["type"], "game_over");
        assert_eq!(value["status"], "x_won");
        assert_eq!(value["winner"], "x");
        assert_eq!(value["winning_line"]["positions"], serde_json::json!([0, 1, 2]));
    }

    #[test]
    fn test_draw_has_no_winner_and_no_line() {
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

        let notification = GameOverNotification::from_game_state(&state);
        assert_eq!(notification.status, GameStatus::Draw);
        assert_eq!(notification.winner, None);
        assert_eq!(notification.winning_line, None);
    }
}
