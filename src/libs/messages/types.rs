/// All user-facing message variants, converted to text in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === SCREEN BANNERS ===
    ScreenHome,
    ScreenProfile1,
    ScreenTracking,
    ScreenFocusTimer,
    ScreenProfile2,
    ScreenVoiceNote,
    ScreenRecord,

    // === ENGINE REPORTS ===
    ClockReadFailed(String),
    LogWriteFailed(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigDeviceSection,
    ConfigLogSection,
    PromptPollInterval,
    PromptButtonAKey,
    PromptButtonBKey,
    PromptLogPath,
    InvalidKeyName(String),

    // === RUN MESSAGES ===
    DeviceTime(String),
    RunStarted,

    // === SUMMARY MESSAGES ===
    SumHeader(String), // log path
    LogEmpty,
    TotalTracked(String),
}
