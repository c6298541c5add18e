//! Event loop wiring runtime events, keyboard input and rendering.
//!
//! Runtime events trigger a redraw from a fresh snapshot; keyboard input is
//! polled once per frame and forwarded to the runtime. Timed battle steps
//! arrive as events like everything else.
use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use runtime::{RuntimeError, RuntimeHandle, Topic};
use tokio::{
    sync::broadcast::error::RecvError,
    time::{self, Duration},
};

use crate::input::{self, KeyAction};
use crate::presentation::{terminal::Tui, ui};

const FRAME_INTERVAL_MS: u64 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct App {
    handle: RuntimeHandle,
}

impl App {
    pub fn new(handle: RuntimeHandle) -> Self {
        Self { handle }
    }

    /// Runs until the player quits or the runtime goes away.
    pub async fn run(self, terminal: &mut Tui) -> Result<()> {
        let mut game_rx = self.handle.subscribe(Topic::GameState);
        self.redraw(terminal).await?;

        let mut ticker = time::interval(Duration::from_millis(FRAME_INTERVAL_MS));

        loop {
            tokio::select! {
                result = game_rx.recv() => match result {
                    Ok(_) => self.redraw(terminal).await?,
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!("Dropped {} stale events", skipped);
                        self.redraw(terminal).await?;
                    }
                    Err(RecvError::Closed) => {
                        tracing::warn!("Event stream closed");
                        break;
                    }
                },
                _ = ticker.tick() => {
                    if self.handle_input(terminal).await? == Flow::Quit {
                        break;
                    }
                }
            }
        }

        tracing::info!("Quit requested");
        Ok(())
    }

    /// Drains pending terminal events without blocking.
    async fn handle_input(&self, terminal: &mut Tui) -> Result<Flow> {
        while term_event::poll(Duration::from_millis(0))? {
            match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.dispatch(input::handle_key(key)).await? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                TermEvent::Resize(_, _) => self.redraw(terminal).await?,
                _ => {}
            }
        }
        Ok(Flow::Continue)
    }

    async fn dispatch(&self, action: KeyAction) -> Result<Flow> {
        let result = match action {
            KeyAction::Quit => return Ok(Flow::Quit),
            KeyAction::Move(direction) => self.handle.move_player(direction).await,
            KeyAction::Attack => self.handle.attack().await,
            KeyAction::UseHerb => self.handle.use_herb().await,
            KeyAction::Reset => {
                let state = self.handle.reset(None).await?;
                tracing::info!(seed = state.seed, "Started a new session");
                return Ok(Flow::Continue);
            }
            KeyAction::None => return Ok(Flow::Continue),
        };

        match result {
            Ok(_) => Ok(Flow::Continue),
            // Rolled back by the worker and already logged there.
            Err(RuntimeError::Execution(error)) => {
                tracing::warn!("Action failed: {error}");
                Ok(Flow::Continue)
            }
            Err(error) => Err(error.into()),
        }
    }

    async fn redraw(&self, terminal: &mut Tui) -> Result<()> {
        let snapshot = self.handle.snapshot().await?;
        ui::render(terminal, &snapshot)
    }
}
