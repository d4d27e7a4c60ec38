//! Single-room polling chat server.
//!
//! Participants register a display name, exchange broadcast and direct
//! messages over plain HTTP, keep themselves present with heartbeats, and
//! are evicted by a background sweeper once they stop sending them.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::{run as run_server, serve};
