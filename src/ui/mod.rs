//! User interfaces built on top of the slot engine.
//!
//! Two front ends share the same parser and engine:
//!
//! - **[`app`]**: full-screen [ratatui](https://github.com/ratatui-org/ratatui) application with
//!   slot bars, history, command line, paced replay playback
//! - **[`repl`]**: line-based prompt for pipes and plain terminals
//! - **[`panes`]**: stateless render functions used by [`app`]
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! Both take ownership of a [`SlotStore`] and drive it exclusively through
//! [`CommandRouter`].
//!
//! [`SlotStore`]: crate::interpreter::store::SlotStore
//! [`CommandRouter`]: crate::interpreter::router::CommandRouter

pub mod app;
pub mod panes;
pub mod repl;
pub mod theme;

pub use app::App;
