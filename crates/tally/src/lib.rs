//! tally library
//!
//! This module exports the command-line configuration and the orchestration
//! of one invocation so both can be exercised from integration tests.

pub mod app;
pub mod config;
pub mod output;
