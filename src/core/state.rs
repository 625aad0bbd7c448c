//! The closed set of menu states and their transition table.
//!
//! The device menu is a fixed tree: home → profile → tracking / focus timer
//! → voice note → record. No open extension is needed, so the states are a
//! plain enum rather than trait objects; the machine matches on the variant
//! to run entry and exit side effects.

use crate::core::display::ScreenId;

/// One node of the navigation menu tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateId {
    Home,
    Profile1,
    Tracking,
    FocusTimer,
    Profile2,
    VoiceNote,
    Record,
}

impl StateId {
    /// Every state, in registration order.
    pub const ALL: [StateId; 7] = [
        StateId::Home,
        StateId::Profile1,
        StateId::Tracking,
        StateId::FocusTimer,
        StateId::Profile2,
        StateId::VoiceNote,
        StateId::Record,
    ];

    /// Unique stable name used as the registry lookup key.
    pub fn name(self) -> &'static str {
        match self {
            StateId::Home => "Home",
            StateId::Profile1 => "Profile 1",
            StateId::Tracking => "Tracking",
            StateId::FocusTimer => "Focus Timer",
            StateId::Profile2 => "Profile 2",
            StateId::VoiceNote => "Voice Note",
            StateId::Record => "Record",
        }
    }

    /// The display flag owned by this state.
    pub fn screen(self) -> ScreenId {
        match self {
            StateId::Home => ScreenId::Home,
            StateId::Profile1 => ScreenId::Profile1,
            StateId::Tracking => ScreenId::Track,
            StateId::FocusTimer => ScreenId::Focus,
            StateId::Profile2 => ScreenId::Profile2,
            StateId::VoiceNote => ScreenId::VoiceNote,
            StateId::Record => ScreenId::Record,
        }
    }

    /// Transition targets for (button A, button B).
    pub fn targets(self) -> (StateId, StateId) {
        match self {
            StateId::Home => (StateId::Profile1, StateId::Profile2),
            StateId::Profile1 => (StateId::Tracking, StateId::FocusTimer),
            // Either button ends the session and offers a voice note.
            StateId::Tracking => (StateId::VoiceNote, StateId::VoiceNote),
            StateId::FocusTimer => (StateId::Home, StateId::Home),
            StateId::Profile2 => (StateId::Home, StateId::Home),
            // Yes records a note, no returns home.
            StateId::VoiceNote => (StateId::Record, StateId::Home),
            StateId::Record => (StateId::Home, StateId::Home),
        }
    }
}
