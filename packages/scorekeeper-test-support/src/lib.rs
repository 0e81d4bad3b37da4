//! Scorekeeper test support utilities
//!
//! Shared helpers for integration tests: unified logging initialization and
//! compact rally scripts.

pub mod logging;
pub mod rallies;
