//! Slot engine
//!
//! This module provides the core command logic:
//! - [`store`]: [`SlotStore`](store::SlotStore), the live slots plus their history
//! - [`router`]: [`CommandRouter`](router::CommandRouter), command dispatch and snapshot recording
//! - [`errors`]: Engine error types
//!
//! # Execution Model
//!
//! Commands are applied one at a time. After each command except `replay`,
//! the router records a snapshot of the slot set, even when the command turned
//! out to be a no-op. `undo` and `replay` then walk that history backwards
//! from its end.

pub mod errors;
pub mod router;
pub mod store;
