//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive the session.

use std::env;
use std::str::FromStr;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use game_core::GameState;

use crate::api::{AudioSink, NullAudioSink, Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::oracle::OracleManager;
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Session seed. `None` draws a random seed at build time.
    pub game_seed: Option<u64>,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_seed: None,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

impl RuntimeConfig {
    /// Reads overrides from the environment, falling back to defaults.
    ///
    /// - `FIELD_GAME_SEED`
    /// - `FIELD_COMMAND_BUFFER`
    /// - `FIELD_EVENT_BUFFER`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            game_seed: read_env("FIELD_GAME_SEED"),
            event_buffer_size: read_env("FIELD_EVENT_BUFFER").unwrap_or(defaults.event_buffer_size),
            command_buffer_size: read_env("FIELD_COMMAND_BUFFER")
                .unwrap_or(defaults.command_buffer_size),
        }
    }
}

fn read_env<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok()?.parse().ok()
}

/// Main runtime that orchestrates the game session
///
/// Runtime owns the worker; [`RuntimeHandle`] provides a cloneable façade
/// for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once every handle clone is dropped; this waits for it.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    state: Option<GameState>,
    audio: Option<Arc<dyn AudioSink>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            state: None,
            audio: None,
        }
    }

    /// Set runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Resume from an existing state instead of starting fresh.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Set oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Audio collaborator. Defaults to [`NullAudioSink`].
    pub fn audio(mut self, sink: impl AudioSink) -> Self {
        self.audio = Some(Arc::new(sink));
        self
    }

    /// Build the runtime
    pub async fn build(self) -> Result<Runtime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;

        let initial_state = match self.state {
            Some(state) => state,
            None => {
                let seed = self.config.game_seed.unwrap_or_else(rand::random);
                let env = oracles.as_game_env();
                GameState::new(seed, &env).map_err(RuntimeError::InitialState)?
            }
        };

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let audio = self
            .audio
            .unwrap_or_else(|| Arc::new(NullAudioSink) as Arc<dyn AudioSink>);

        let sim_worker =
            SimulationWorker::new(initial_state, oracles, command_rx, event_bus, audio);

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            sim_worker_handle,
        })
    }
}
