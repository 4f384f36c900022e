//! Terminal checkout screen.
//!
//! The screen holds no flow logic: it renders the controller's current
//! snapshot and forwards the visible button to a worker task.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::{run, run_flow_worker};
