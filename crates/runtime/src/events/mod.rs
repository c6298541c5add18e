//! Topic-based event bus for runtime events.
//!
//! Events are published to specific topics and consumers subscribe only to
//! the topics they need. Delivery is best-effort: a lagging subscriber loses
//! the oldest events, never the worker's progress.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{AudioEvent, GameStateEvent};
