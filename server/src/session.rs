use tokio::sync::mpsc;
use tokio::time::Duration;

use common::{
    FirstPlayer, GameOverNotification, GameState, GameStatus, ServerMessage, StateUpdate, log,
    select_move,
};

/// One human-versus-computer game tied to a single WebSocket connection.
/// Human moves arrive through `handle_place_mark`; the computer's reply is
/// computed off the async runtime and applied through the same game-state
/// transition a human move uses.
pub struct GameSession {
    game_state: Option<GameState>,
    bot_move_delay: Duration,
    tx: mpsc::Sender<ServerMessage>,
}

impl GameSession {
    pub fn new(bot_move_delay_ms: u64, tx: mpsc::Sender<ServerMessage>) -> Self {
        Self {
            game_state: None,
            bot_move_delay: Duration::from_millis(bot_move_delay_ms),
            tx,
        }
    }

    pub async fn start_new_game(&mut self, first_player: FirstPlayer) {
        if let Some(game_state) = self.game_state.as_mut() {
            game_state.reset(first_player);
        } else {
            self.game_state = Some(GameState::new(first_player));
        }

        self.broadcast_state().await;
        self.advance_bot().await;
    }

    pub async fn handle_place_mark(&mut self, position: usize) {
        let result = match self.game_state.as_mut() {
            Some(game_state) => {
                let human_mark = game_state.human_mark();
                game_state.place_mark(human_mark, position)
            }
            None => Err("No game in progress".to_string()),
        };

        if let Err(e) = result {
            self.send_error(e).await;
            return;
        }

        self.broadcast_state().await;
        self.advance_bot().await;
    }

    /// Finishes the turn cycle: reports a terminal position, or plays the
    /// computer's move when it is next. The pause before the move is purely
    /// cosmetic, letting the browser render the human's mark first.
    async fn advance_bot(&mut self) {
        let (status, is_bot_turn, board, bot_mark) = match &self.game_state {
            Some(game_state) => (
                game_state.status(),
                game_state.is_bot_turn(),
                game_state.board(),
                game_state.bot_mark(),
            ),
            None => return,
        };

        if status != GameStatus::InProgress {
            self.send_game_over().await;
            return;
        }

        if !is_bot_turn {
            return;
        }

        tokio::time::sleep(self.bot_move_delay).await;

        let selected = tokio::task::spawn_blocking(move || select_move(&board, bot_mark)).await;

        let position = match selected {
            Ok(Some(position)) => position,
            Ok(None) => {
                log!("Bot move requested with no open positions");
                return;
            }
            Err(e) => {
                log!("Bot move task failed: {}", e);
                return;
            }
        };

        let Some(game_state) = self.game_state.as_mut() else {
            return;
        };
        if let Err(e) = game_state.place_mark(bot_mark, position) {
            log!("Bot failed to place mark at {}: {}", position, e);
            return;
        }

        self.broadcast_state().await;

        let game_over = self
            .game_state
            .as_ref()
            .is_some_and(|game_state| game_state.status() != GameStatus::InProgress);
        if game_over {
            self.send_game_over().await;
        }
    }

    async fn broadcast_state(&self) {
        let Some(game_state) = &self.game_state else {
            return;
        };
        let update = StateUpdate::from_game_state(game_state);
        self.send(ServerMessage::State(update)).await;
    }

    async fn send_game_over(&self) {
        let Some(game_state) = &self.game_state else {
            return;
        };
        let notification = GameOverNotification::from_game_state(game_state);
        self.send(ServerMessage::GameOver(notification)).await;
    }

    pub async fn send_error(&self, message: String) {
        self.send(ServerMessage::Error { message }).await;
    }

    async fn send(&self, message: ServerMessage) {
        if let Err(e) = self.tx.send(message).await {
            log!("Failed to queue server message: {}", e);
        }
    }
}
