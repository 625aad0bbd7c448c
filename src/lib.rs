//! # Ltb - Little Time Buddy
//!
//! A two-button personal time-tracking appliance. The buttons navigate a
//! small menu state machine (home → profile → tracking / focus timer →
//! voice note → record); entering and leaving the tracking state captures
//! timestamps and appends start/stop records with computed durations to an
//! append-only activity log.
//!
//! ## Features
//!
//! - **Menu Navigation**: Fixed seven-state machine with exactly-once
//!   entry/exit side effects per transition
//! - **Time Tracking**: Local timestamps on session start/stop with
//!   field-wise duration arithmetic (borrow across seconds, minutes, hours
//!   and midnight)
//! - **Durable Log**: Append-only session records plus voice-note markers
//! - **Session Summary**: Parse the log back into a terminal table
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ltb::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod core;
pub mod libs;
