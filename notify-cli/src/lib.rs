//! Library target for the `dealdrip-cli` package.
//!
//! The primary deliverable of this package is the `send-notification` binary
//! (`src/main.rs`). Argument handling, stdout markers and the run loop live
//! here so they can be exercised from `tests/`.

pub mod cli;
pub mod output;
pub mod runner;
