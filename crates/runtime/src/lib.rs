//! Runtime orchestration for the field game session.
//!
//! This crate wires together oracle access, the event bus and the simulation
//! worker into a cohesive runtime API. Consumers embed [`Runtime`] to submit
//! player input, subscribe to events, and render snapshots through
//! [`RuntimeHandle`]. Delayed battle steps fire on their own timers inside
//! the worker; clients never poll for them.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`oracle`] adapts loaded content to the `game-core` oracle traits
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod oracle;
pub mod runtime;

mod workers;

pub use api::{AudioError, AudioSink, NullAudioSink, Result, RuntimeError, RuntimeHandle};
pub use events::{AudioEvent, Event, EventBus, GameStateEvent, Topic};
pub use oracle::{EnemyOracleImpl, MapOracleImpl, OracleManager};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
