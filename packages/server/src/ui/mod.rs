//! HTTP chat server: handlers, state, lifecycle and the liveness sweeper.

pub mod error;
mod handler;
pub mod identity;
mod runner;
mod signal;
pub mod state;
pub mod sweeper;

pub use runner::{build_router, run, serve};
