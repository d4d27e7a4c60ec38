//! Shared utilities for Parlor.
//!
//! Logger setup and wall-clock helpers used by the server binary and tests.

pub mod logger;
pub mod time;
