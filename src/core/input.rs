//! Button input sampling.
//!
//! Transition logic never reads hardware directly; the loop samples the
//! input source once per iteration and hands the engine an immutable
//! [`InputSnapshot`]. On a host machine two keyboard keys stand in for the
//! device's physical switches, captured by a background `rdev` listener
//! thread and latched until the next poll consumes them.

use rdev::{listen, Event, EventType, Key};
use std::sync::{Arc, Mutex};

/// Press status of the two logical buttons, sampled once per loop
/// iteration and passed by value into the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub button_a: bool,
    pub button_b: bool,
}

impl InputSnapshot {
    pub const RELEASED: InputSnapshot = InputSnapshot {
        button_a: false,
        button_b: false,
    };
}

/// Reports the press status of the two logical buttons.
pub trait InputSource {
    /// Takes the pending snapshot, clearing any latched presses.
    fn take(&mut self) -> InputSnapshot;
}

#[derive(Debug, Default)]
struct Latched {
    button_a: bool,
    button_b: bool,
}

/// Keyboard-backed input source: a spawned listener thread latches presses
/// of the two configured keys until the poll loop consumes them.
pub struct KeyButtons {
    latched: Arc<Mutex<Latched>>,
}

impl KeyButtons {
    /// Spawns the listener thread. The thread restarts the listener on
    /// error so a transient hook failure does not silence the buttons.
    pub fn spawn(button_a: Key, button_b: Key) -> Self {
        let latched = Arc::new(Mutex::new(Latched::default()));

        let shared = latched.clone();
        std::thread::spawn(move || loop {
            let latched_for_listener = shared.clone();
            if listen(move |event: Event| {
                if let EventType::KeyPress(key) = event.event_type {
                    let mut latched = latched_for_listener.lock().unwrap();
                    if key == button_a {
                        latched.button_a = true;
                    } else if key == button_b {
                        latched.button_b = true;
                    }
                }
            })
            .is_err()
            {
                eprintln!("Failed to listen for key events. Retrying in 1 second...");
                std::thread::sleep(std::time::Duration::from_secs(1));
            } else {
                break;
            }
        });

        KeyButtons { latched }
    }
}

impl InputSource for KeyButtons {
    fn take(&mut self) -> InputSnapshot {
        let mut latched = self.latched.lock().unwrap();
        let snapshot = InputSnapshot {
            button_a: latched.button_a,
            button_b: latched.button_b,
        };
        *latched = Latched::default();
        snapshot
    }
}

/// Maps a configured key name to an `rdev` key. Function keys, letters and
/// digits cover the keys a host keyboard can dedicate to the two buttons.
pub fn parse_key(name: &str) -> Option<Key> {
    let key = match name.to_ascii_uppercase().as_str() {
        "F1" => Key::F1,
        "F2" => Key::F2,
        "F3" => Key::F3,
        "F4" => Key::F4,
        "F5" => Key::F5,
        "F6" => Key::F6,
        "F7" => Key::F7,
        "F8" => Key::F8,
        "F9" => Key::F9,
        "F10" => Key::F10,
        "F11" => Key::F11,
        "F12" => Key::F12,
        "A" => Key::KeyA,
        "B" => Key::KeyB,
        "C" => Key::KeyC,
        "D" => Key::KeyD,
        "E" => Key::KeyE,
        "F" => Key::KeyF,
        "G" => Key::KeyG,
        "H" => Key::KeyH,
        "I" => Key::KeyI,
        "J" => Key::KeyJ,
        "K" => Key::KeyK,
        "L" => Key::KeyL,
        "M" => Key::KeyM,
        "N" => Key::KeyN,
        "O" => Key::KeyO,
        "P" => Key::KeyP,
        "Q" => Key::KeyQ,
        "R" => Key::KeyR,
        "S" => Key::KeyS,
        "T" => Key::KeyT,
        "U" => Key::KeyU,
        "V" => Key::KeyV,
        "W" => Key::KeyW,
        "X" => Key::KeyX,
        "Y" => Key::KeyY,
        "Z" => Key::KeyZ,
        "0" => Key::Num0,
        "1" => Key::Num1,
        "2" => Key::Num2,
        "3" => Key::Num3,
        "4" => Key::Num4,
        "5" => Key::Num5,
        "6" => Key::Num6,
        "7" => Key::Num7,
        "8" => Key::Num8,
        "9" => Key::Num9,
        _ => return None,
    };
    Some(key)
}
