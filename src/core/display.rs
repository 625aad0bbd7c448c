//! Display flag signalling for the per-state screens.
//!
//! The physical device drives one e-paper screen select line per menu state.
//! The engine only toggles the named flags; rendering belongs to external
//! hardware. `ConsolePanel` is the host-side stand-in that prints a banner
//! for whichever screen goes active.

use crate::libs::messages::Message;
use crate::msg_print;

/// One "this screen is active" signal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Home,
    Profile1,
    Track,
    Focus,
    Profile2,
    VoiceNote,
    Record,
}

/// Receives the per-state active-screen signal.
///
/// The engine guarantees at most one screen is active outside of a
/// transition window.
pub trait DisplayOutput {
    fn set_active(&mut self, screen: ScreenId, active: bool);
}

/// Console stand-in for the e-paper panel: prints a banner when a screen
/// goes active, stays silent on deactivation.
#[derive(Debug, Default)]
pub struct ConsolePanel;

impl DisplayOutput for ConsolePanel {
    fn set_active(&mut self, screen: ScreenId, active: bool) {
        if !active {
            return;
        }
        match screen {
            ScreenId::Home => msg_print!(Message::ScreenHome),
            ScreenId::Profile1 => msg_print!(Message::ScreenProfile1),
            ScreenId::Track => msg_print!(Message::ScreenTracking),
            ScreenId::Focus => msg_print!(Message::ScreenFocusTimer),
            ScreenId::Profile2 => msg_print!(Message::ScreenProfile2),
            ScreenId::VoiceNote => msg_print!(Message::ScreenVoiceNote),
            ScreenId::Record => msg_print!(Message::ScreenRecord),
        }
    }
}
