//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`slots`]: The slot bars, live or replayed
//! - [`history`]: Recorded snapshots with the replayed one highlighted
//! - [`input`]: The command line and the help listing
//! - [`status`]: Status bar with the last message and keybindings
//!
//! Each pane module exports a primary `render_*` function taking a
//! `*RenderData` struct, plus any scroll state it keeps between frames.

pub mod history;
pub mod input;
pub mod slots;
pub mod status;

// Re-export render functions for convenience
pub use history::{render_history_pane, HistoryRenderData, HistoryScrollState};
pub use input::{render_help_pane, render_input_pane};
pub use slots::{render_slots_pane, SlotsRenderData};
pub use status::{render_status_bar, StatusKind, StatusRenderData};
