//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the session and is the only task that mutates
//! it. Everything else talks to it through [`Command`]s.

mod simulation;

pub use simulation::{Command, SimulationWorker};
