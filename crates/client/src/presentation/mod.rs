//! Presentation layer: terminal lifecycle and frame rendering.
pub mod terminal;
pub mod ui;
mod widgets;
