//! One module per panel.
pub mod battle;
pub mod field;
pub mod footer;
pub mod messages;
pub mod status;
