//! Simulation worker that owns the authoritative [`game_core::GameState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), executes
//! actions via [`game_core::GameEngine`], fires delayed battle transitions
//! when they come due, and publishes events to the EventBus.
//!
//! Logical time is milliseconds since the session started, measured with
//! [`tokio::time::Instant`] so paused-clock tests drive it deterministically.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, error, info, trace, warn};

use game_core::{
    Action, AudioCue, ExecuteError, ExecutionOutcome, GameEngine, GameError, GameSnapshot,
    GameState, Timestamp,
};

use crate::api::{AudioSink, Result, RuntimeError};
use crate::events::{AudioEvent, Event, EventBus, GameStateEvent};
use crate::oracle::OracleManager;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Execute a player action after firing every due transition.
    ExecuteAction {
        action: Action,
        reply: oneshot::Sender<Result<Vec<ExecutionOutcome>>>,
    },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
    /// Render-ready view of the current state.
    Snapshot { reply: oneshot::Sender<GameSnapshot> },
    /// Replace the session. `None` draws a random seed.
    Reset {
        seed: Option<u64>,
        reply: oneshot::Sender<Result<GameState>>,
    },
}

/// Background task that processes gameplay commands and timers.
pub struct SimulationWorker {
    state: GameState,
    oracles: OracleManager,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    audio: Arc<dyn AudioSink>,
    /// Instant corresponding to logical time zero.
    epoch: Instant,
}

impl SimulationWorker {
    /// Creates a new simulation worker. The session clock starts now, so a
    /// resumed state is rebased to zero with its pending steps shifted along.
    pub fn new(
        mut state: GameState,
        oracles: OracleManager,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        audio: Arc<dyn AudioSink>,
    ) -> Self {
        if state.clock > Timestamp::ZERO {
            debug!(
                target: "runtime::worker",
                clock = %state.clock,
                pending = state.pending.len(),
                "Rebasing resumed session clock"
            );
            state.rebase_clock();
        }

        info!(
            target: "runtime::worker",
            seed = state.seed,
            position = %state.player.position,
            next_encounter_in = state.encounter.remaining(),
            "SimulationWorker initialized"
        );

        Self {
            state,
            oracles,
            command_rx,
            event_bus,
            audio,
            epoch: Instant::now(),
        }
    }

    /// Main worker loop.
    ///
    /// Runs until every command sender is dropped.
    pub async fn run(mut self) {
        self.dispatch_cue(AudioCue::NormalThemeStart);

        loop {
            let deadline = self.next_deadline();
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                _ = wait_until(deadline) => {
                    let now = self.now();
                    self.fire_due_transitions(now);
                }
            }
        }

        debug!(target: "runtime::worker", "Command channel closed, simulation worker stopping");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::ExecuteAction { action, reply } => {
                let now = self.now();
                self.fire_due_transitions(now);
                let result = self.handle_player_action(action, now);
                if reply.send(result).is_err() {
                    debug!("ExecuteAction reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                let now = self.now();
                self.fire_due_transitions(now);
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::Snapshot { reply } => {
                let now = self.now();
                self.fire_due_transitions(now);
                let snapshot =
                    GameSnapshot::capture(&self.state, self.oracles.field_view().clone());
                if reply.send(snapshot).is_err() {
                    debug!("Snapshot reply channel closed (caller dropped)");
                }
            }
            Command::Reset { seed, reply } => {
                let result = self.handle_reset(seed);
                if reply.send(result).is_err() {
                    debug!("Reset reply channel closed (caller dropped)");
                }
            }
        }
    }

    /// Runs a player action against a copy of the state and commits it only
    /// on success.
    fn handle_player_action(
        &mut self,
        action: Action,
        now: Timestamp,
    ) -> Result<Vec<ExecutionOutcome>> {
        let mut working = self.state.clone();
        let result =
            GameEngine::new(&mut working).execute(self.oracles.as_game_env(), &action, now);

        match result {
            Ok(outcomes) => {
                self.state = working;
                for outcome in &outcomes {
                    self.publish_outcome(outcome);
                }
                Ok(outcomes)
            }
            Err(error) if error.is_rejection() => {
                debug!(
                    target: "runtime::worker",
                    action = action.as_snake_case(),
                    code = error.error_code(),
                    error = %error,
                    "Action rejected during pre-validate"
                );
                // The clock still moves; the action itself changed nothing.
                self.state.advance_clock(now);
                self.event_bus
                    .publish(Event::GameState(GameStateEvent::ActionRejected {
                        action,
                        code: error.error_code().to_owned(),
                        reason: error.to_string(),
                        clock: self.state.clock,
                    }));
                Ok(Vec::new())
            }
            Err(error) => {
                self.report_failure(action, &error);
                Err(RuntimeError::Execution(error))
            }
        }
    }

    /// Fires every queued transition due at `now`.
    ///
    /// If a transition fails past validation the whole batch is rolled back
    /// and the due entries are dropped, so a broken transition cannot wedge
    /// the loop.
    fn fire_due_transitions(&mut self, now: Timestamp) {
        if self.state.pending.next_due().is_none_or(|due| due > now) {
            return;
        }

        let mut working = self.state.clone();
        let result = GameEngine::new(&mut working).advance(self.oracles.as_game_env(), now);

        match result {
            Ok(report) => {
                self.state = working;
                for discarded in &report.discarded {
                    trace!(
                        target: "runtime::worker",
                        step = discarded.entry.step.as_str(),
                        battle = %discarded.entry.battle,
                        error = %discarded.error,
                        "Discarded stale transition"
                    );
                }
                for outcome in &report.executed {
                    self.publish_outcome(outcome);
                }
            }
            Err(error) => {
                while let Some(entry) = self.state.pending.pop_due(now) {
                    self.report_failure(Action::scheduled(&entry), &error);
                }
            }
        }
    }

    fn handle_reset(&mut self, seed: Option<u64>) -> Result<GameState> {
        let seed = seed.unwrap_or_else(rand::random);
        let env = self.oracles.as_game_env();
        let state = GameState::new(seed, &env).map_err(RuntimeError::InitialState)?;

        let was_in_battle = self.state.is_in_battle();
        self.state = state;
        self.epoch = Instant::now();

        info!(target: "runtime::worker", seed, "Session reset");

        if was_in_battle {
            self.dispatch_cue(AudioCue::BattleThemeStop);
        }
        self.dispatch_cue(AudioCue::NormalThemeStart);
        self.event_bus
            .publish(Event::GameState(GameStateEvent::SessionReset {
                seed,
                state: Box::new(self.state.clone()),
            }));

        Ok(self.state.clone())
    }

    fn publish_outcome(&self, outcome: &ExecutionOutcome) {
        debug!(
            target: "runtime::worker",
            action = outcome.action.as_snake_case(),
            clock = outcome.clock.as_millis(),
            "Action executed"
        );

        for &cue in outcome.result.cues() {
            self.dispatch_cue(cue);
        }

        self.event_bus
            .publish(Event::GameState(GameStateEvent::ActionExecuted {
                action: outcome.action,
                result: outcome.result.clone(),
                clock: outcome.clock,
                state: Box::new(self.state.clone()),
            }));
    }

    fn report_failure(&self, action: Action, error: &ExecuteError) {
        error!(
            target: "runtime::worker",
            action = action.as_snake_case(),
            phase = ?error.phase(),
            severity = error.severity().as_str(),
            error = %error,
            "Action execution failed"
        );

        self.event_bus
            .publish(Event::GameState(GameStateEvent::ActionFailed {
                action,
                phase: error.phase(),
                error: error.to_string(),
                clock: self.state.clock,
            }));
    }

    fn dispatch_cue(&self, cue: AudioCue) {
        if let Err(error) = self.audio.play(cue) {
            warn!(target: "runtime::audio", cue = %cue, %error, "Audio sink failed to play cue");
        }
        self.event_bus
            .publish(Event::Audio(AudioEvent::new(cue, self.state.clock)));
    }

    fn now(&self) -> Timestamp {
        let elapsed = self.epoch.elapsed().as_millis();
        Timestamp::from_millis(u64::try_from(elapsed).unwrap_or(u64::MAX))
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.state
            .pending
            .next_due()
            .map(|due| self.epoch + Duration::from_millis(due.as_millis()))
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
