//! The navigation and timing engine: states, transitions, timestamps and
//! the append-only activity log.

pub mod activity_log;
pub mod clock;
pub mod display;
pub mod elapsed;
pub mod error;
pub mod input;
pub mod machine;
pub mod state;
