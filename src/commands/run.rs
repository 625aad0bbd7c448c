//! The appliance loop: poll the buttons, drive the state machine.
//!
//! One logical thread of control samples the input source, forwards the
//! snapshot to the engine and sleeps the configured poll interval. The
//! sleep only bounds the input sample rate; every transition's side
//! effects complete synchronously before the next snapshot is taken.

use crate::core::activity_log::ActivityLog;
use crate::core::clock::{Clock, SystemClock};
use crate::core::display::ConsolePanel;
use crate::core::input::{parse_key, InputSource, KeyButtons};
use crate::core::machine::StateMachine;
use crate::core::state::StateId;
use crate::libs::config::Config;
use crate::libs::messages::macros::is_debug_mode;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_info, msg_print};
use anyhow::Result;
use tokio::time::{self, Duration};

pub async fn cmd() -> Result<()> {
    if is_debug_mode() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    let config = Config::read()?;
    let device = config.device();
    let log = ActivityLog::new(config.log_path()?);

    let button_a = parse_key(&device.button_a_key).ok_or_else(|| msg_error_anyhow!(Message::InvalidKeyName(device.button_a_key.clone())))?;
    let button_b = parse_key(&device.button_b_key).ok_or_else(|| msg_error_anyhow!(Message::InvalidKeyName(device.button_b_key.clone())))?;

    let clock = SystemClock;
    msg_print!(Message::DeviceTime(clock.now()?.to_string()), true);

    let mut machine = StateMachine::new(clock, ConsolePanel, log);
    for state in StateId::ALL {
        machine.register(state)?;
    }
    machine.transition_to(StateId::Home.name())?;

    let mut buttons = KeyButtons::spawn(button_a, button_b);
    msg_info!(Message::RunStarted);

    loop {
        let snapshot = buttons.take();
        machine.handle_input(snapshot)?;
        // Bounds the poll rate; nothing else runs during the pause.
        time::sleep(Duration::from_millis(device.poll_interval)).await;
    }
}
