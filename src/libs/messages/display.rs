//! Text rendering for application messages.
//!
//! All user-facing text lives in this one `Display` impl so wording stays
//! consistent and the rest of the code passes typed variants around.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let message = match self {
            // === SCREEN BANNERS ===
            Message::ScreenHome => "#### Home ####\nDate and time".to_string(),
            Message::ScreenProfile1 => "#### Profile 1 ####\nTrack a task or start a focus timer".to_string(),
            Message::ScreenTracking => "#### Tracking ####\nCounting tracked time".to_string(),
            Message::ScreenFocusTimer => "#### Focus Timer ####\nFocus timer counting down".to_string(),
            Message::ScreenProfile2 => "#### Profile 2 ####".to_string(),
            Message::ScreenVoiceNote => "#### Voice Note ####\nRecord a note? Yes or no".to_string(),
            Message::ScreenRecord => "#### Record Note ####\nRecording".to_string(),

            // === ENGINE REPORTS ===
            Message::ClockReadFailed(e) => format!("Failed to read the time source: {}", e),
            Message::LogWriteFailed(e) => format!("Failed to append to the activity log: {}", e),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigDeviceSection => "Device settings".to_string(),
            Message::ConfigLogSection => "Activity log settings".to_string(),
            Message::PromptPollInterval => "Button poll interval (ms)".to_string(),
            Message::PromptButtonAKey => "Keyboard key for button A".to_string(),
            Message::PromptButtonBKey => "Keyboard key for button B".to_string(),
            Message::PromptLogPath => "Activity log file path".to_string(),
            Message::InvalidKeyName(name) => format!("'{}' is not a usable button key (try F1..F12, a letter or a digit)", name),

            // === RUN MESSAGES ===
            Message::DeviceTime(now) => format!("Current device time: {}", now),
            Message::RunStarted => "Buttons ready; press them to navigate the menu".to_string(),

            // === SUMMARY MESSAGES ===
            Message::SumHeader(path) => format!("Tracked sessions in {}", path),
            Message::LogEmpty => "No tracked sessions yet".to_string(),
            Message::TotalTracked(total) => format!("Total tracked: {}", total),
        };
        write!(f, "{}", message)
    }
}
