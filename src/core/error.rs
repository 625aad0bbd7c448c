use thiserror::Error;

/// Errors raised by the navigation and timing engine.
///
/// `UnknownState` and `DuplicateState` indicate configuration bugs and are
/// treated as fatal by callers. `LogWrite` and `ClockUnavailable` are
/// reported to the operator without unwinding the state change that
/// triggered them: by the time the side effect fails, the transition has
/// already committed.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Transition target was never registered with the machine.
    #[error("unknown state '{0}'")]
    UnknownState(String),

    /// A state with the same name was already registered.
    #[error("state '{0}' is already registered")]
    DuplicateState(String),

    /// The durable log sink refused an append.
    #[error("failed to write activity log: {0}")]
    LogWrite(#[from] std::io::Error),

    /// The time source could not produce a timestamp.
    #[error("time source unavailable")]
    ClockUnavailable,
}
