//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! submitting player input, reading state, or streaming events from specific
//! topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{Action, CardinalDirection, ExecutionOutcome, GameSnapshot, GameState};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Steps the player one tile.
    ///
    /// Returns the committed outcomes: empty when the move was refused, two
    /// entries when the step started an encounter.
    pub async fn move_player(&self, direction: CardinalDirection) -> Result<Vec<ExecutionOutcome>> {
        self.execute_action(Action::move_player(direction)).await
    }

    pub async fn attack(&self) -> Result<Vec<ExecutionOutcome>> {
        self.execute_action(Action::attack()).await
    }

    pub async fn use_herb(&self) -> Result<Vec<ExecutionOutcome>> {
        self.execute_action(Action::use_herb()).await
    }

    /// Due battle transitions are fired first, so the action sees the state
    /// as of now. Only player actions are submitted through here; system
    /// actions are the worker's own business.
    async fn execute_action(&self, action: Action) -> Result<Vec<ExecutionOutcome>> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::ExecuteAction {
                action,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Render-ready view of the current state, including field flags.
    pub async fn snapshot(&self) -> Result<GameSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Snapshot { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Replaces the session with a fresh one.
    ///
    /// Pending battle transitions of the old session are dropped. A `None`
    /// seed draws a random one.
    pub async fn reset(&self, seed: Option<u64>) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Reset {
                seed,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::GameState` - Executed, rejected and failed actions, resets
    /// - `Topic::Audio` - Every cue handed to the audio sink
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut game_rx = handle.subscribe(Topic::GameState);
    /// while let Ok(event) = game_rx.recv().await {
    ///     // Handle game state events
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
