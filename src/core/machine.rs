//! The finite-state navigation engine.
//!
//! Holds the registry of menu states and the single current state, and
//! drives the exit → switch → enter protocol for every transition. Entry
//! and exit side effects (display flags, timestamp capture, log appends)
//! run exactly once per transition, synchronously to completion, so from
//! the observer's perspective a transition is atomic.

use crate::core::activity_log::ActivityLog;
use crate::core::clock::{Clock, Timestamp};
use crate::core::display::DisplayOutput;
use crate::core::elapsed::Elapsed;
use crate::core::error::EngineError;
use crate::core::input::InputSnapshot;
use crate::core::state::StateId;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};

/// Timing data owned by one Tracking activation: captured on enter,
/// consumed on the matching exit. A fresh entry overwrites any prior
/// session; only one session is ever in flight.
#[derive(Debug)]
struct Session {
    /// `None` when the clock was unreachable at session start; the log row
    /// is then flagged timestamp-incomplete.
    time_in: Option<Timestamp>,
}

/// Drives the menu state machine and its coupled timestamp capture.
pub struct StateMachine<C: Clock, D: DisplayOutput> {
    clock: C,
    display: D,
    log: ActivityLog,
    registered: Vec<StateId>,
    current: Option<StateId>,
    session: Option<Session>,
}

impl<C: Clock, D: DisplayOutput> StateMachine<C, D> {
    pub fn new(clock: C, display: D, log: ActivityLog) -> Self {
        StateMachine {
            clock,
            display,
            log,
            registered: Vec::new(),
            current: None,
            session: None,
        }
    }

    /// Adds a state to the lookup table. Registering the same name twice is
    /// a configuration bug and fails fast instead of silently replacing the
    /// earlier entry.
    pub fn register(&mut self, state: StateId) -> Result<(), EngineError> {
        if self.registered.iter().any(|s| s.name() == state.name()) {
            return Err(EngineError::DuplicateState(state.name().to_string()));
        }
        self.registered.push(state);
        Ok(())
    }

    pub fn current(&self) -> Option<StateId> {
        self.current
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Moves the machine to the named state: the current state's exit
    /// routine runs to completion, then the target becomes current, then
    /// its enter routine runs to completion. An unknown name fails without
    /// touching the current state.
    pub fn transition_to(&mut self, name: &str) -> Result<(), EngineError> {
        let target = self
            .registered
            .iter()
            .copied()
            .find(|state| state.name() == name)
            .ok_or_else(|| EngineError::UnknownState(name.to_string()))?;

        if let Some(current) = self.current {
            msg_debug!(format!("Exiting {}", current.name()));
            self.exit(current);
        }
        self.current = Some(target);
        msg_debug!(format!("Entering {}", target.name()));
        self.enter(target);
        Ok(())
    }

    /// Applies one input snapshot to the current state's transition table.
    ///
    /// Button A is evaluated first and short-circuits: when both buttons
    /// are down in the same snapshot, only A's transition fires.
    /// Re-evaluating B against the post-transition state would produce
    /// accidental double hops; one deterministic hop per snapshot.
    pub fn handle_input(&mut self, input: InputSnapshot) -> Result<(), EngineError> {
        let Some(current) = self.current else {
            return Ok(());
        };
        msg_debug!(format!("Updating {}", current.name()));

        let (on_a, on_b) = current.targets();
        if input.button_a {
            return self.transition_to(on_a.name());
        }
        if input.button_b {
            return self.transition_to(on_b.name());
        }
        Ok(())
    }

    fn enter(&mut self, state: StateId) {
        match state {
            StateId::Tracking => {
                let time_in = self.capture_stamp();
                self.session = Some(Session {
                    time_in: time_in.clone(),
                });
                self.display.set_active(state.screen(), true);
                let result = self.log.append_start(time_in.as_ref());
                self.report(result);
            }
            _ => self.display.set_active(state.screen(), true),
        }
    }

    fn exit(&mut self, state: StateId) {
        match state {
            StateId::Tracking => {
                let time_out = self.capture_stamp();
                let time_in = self.session.take().and_then(|session| session.time_in);
                let elapsed = match (&time_in, &time_out) {
                    (Some(time_in), Some(time_out)) => Some(Elapsed::between(time_in, time_out)),
                    _ => None,
                };
                let result = self.log.append_stop(time_out.as_ref(), elapsed.as_ref());
                self.report(result);
                self.display.set_active(state.screen(), false);
            }
            StateId::Record => {
                let result = self.log.append_note();
                self.report(result);
                self.display.set_active(state.screen(), false);
            }
            _ => self.display.set_active(state.screen(), false),
        }
    }

    /// Reads the clock, downgrading failure to an operator report. The
    /// transition still completes; the affected record is flagged
    /// timestamp-incomplete.
    fn capture_stamp(&self) -> Option<Timestamp> {
        match self.clock.now() {
            Ok(stamp) => Some(stamp),
            Err(err) => {
                msg_error!(Message::ClockReadFailed(err.to_string()));
                None
            }
        }
    }

    /// Surfaces a failed log append without unwinding the state change;
    /// the data loss is the operator's to act on.
    fn report(&self, result: Result<(), EngineError>) {
        if let Err(err) = result {
            msg_error!(Message::LogWriteFailed(err.to_string()));
        }
    }
}
