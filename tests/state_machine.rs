#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ltb::core::activity_log::ActivityLog;
    use ltb::core::clock::{Clock, Timestamp};
    use ltb::core::display::{DisplayOutput, ScreenId};
    use ltb::core::error::EngineError;
    use ltb::core::input::InputSnapshot;
    use ltb::core::machine::StateMachine;
    use ltb::core::state::StateId;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use tempfile::TempDir;

    /// Hands out a scripted sequence of timestamps.
    struct FakeClock {
        stamps: RefCell<VecDeque<Timestamp>>,
    }

    impl FakeClock {
        fn new(stamps: Vec<Timestamp>) -> Self {
            FakeClock {
                stamps: RefCell::new(stamps.into()),
            }
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> Result<Timestamp, EngineError> {
            self.stamps.borrow_mut().pop_front().ok_or(EngineError::ClockUnavailable)
        }
    }

    /// Records every display flag toggle for later inspection.
    #[derive(Default)]
    struct RecordingPanel {
        events: Vec<(ScreenId, bool)>,
    }

    impl DisplayOutput for RecordingPanel {
        fn set_active(&mut self, screen: ScreenId, active: bool) {
            self.events.push((screen, active));
        }
    }

    fn stamp(hour: u32, minute: u32, second: u32) -> Timestamp {
        let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        Timestamp::from_parts(date, hour, minute, second, "+00:00")
    }

    fn machine_with_stamps(
        temp_dir: &TempDir,
        stamps: Vec<Timestamp>,
    ) -> StateMachine<FakeClock, RecordingPanel> {
        let log = ActivityLog::new(temp_dir.path().join("tracking.csv"));
        let mut machine = StateMachine::new(FakeClock::new(stamps), RecordingPanel::default(), log);
        for state in StateId::ALL {
            machine.register(state).unwrap();
        }
        machine
    }

    #[test]
    fn test_duplicate_registration_fails_fast() {
        let temp_dir = TempDir::new().unwrap();
        let mut machine = machine_with_stamps(&temp_dir, vec![]);

        let err = machine.register(StateId::Home).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateState(name) if name == "Home"));
    }

    #[test]
    fn test_unknown_state_leaves_current_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let mut machine = machine_with_stamps(&temp_dir, vec![]);
        machine.transition_to("Home").unwrap();

        let err = machine.transition_to("Profile 3").unwrap_err();
        assert!(matches!(err, EngineError::UnknownState(name) if name == "Profile 3"));
        assert_eq!(machine.current(), Some(StateId::Home));
    }

    #[test]
    fn test_enter_then_exit_touches_only_the_states_own_flag() {
        for state in StateId::ALL {
            let temp_dir = TempDir::new().unwrap();
            let mut machine = machine_with_stamps(&temp_dir, vec![stamp(10, 0, 0), stamp(10, 5, 0)]);

            machine.transition_to(state.name()).unwrap();
            let (next, _) = state.targets();
            machine.transition_to(next.name()).unwrap();

            let events = &machine.display().events;
            assert_eq!(events[0], (state.screen(), true), "enter of {}", state.name());
            assert_eq!(events[1], (state.screen(), false), "exit of {}", state.name());
            assert_eq!(events[2], (next.screen(), true));
            assert_eq!(events.len(), 3);
        }
    }

    #[test]
    fn test_released_buttons_never_change_state() {
        let temp_dir = TempDir::new().unwrap();
        let mut machine = machine_with_stamps(&temp_dir, vec![]);
        machine.transition_to("Home").unwrap();

        for _ in 0..5 {
            machine.handle_input(InputSnapshot::RELEASED).unwrap();
            assert_eq!(machine.current(), Some(StateId::Home));
        }
    }

    #[test]
    fn test_button_a_takes_priority_over_b() {
        let temp_dir = TempDir::new().unwrap();
        let mut machine = machine_with_stamps(&temp_dir, vec![]);
        machine.transition_to("Home").unwrap();

        // Both buttons down in one snapshot: exactly one hop, along A.
        machine
            .handle_input(InputSnapshot {
                button_a: true,
                button_b: true,
            })
            .unwrap();
        assert_eq!(machine.current(), Some(StateId::Profile1));
    }

    #[test]
    fn test_button_b_transitions_when_a_is_released() {
        let temp_dir = TempDir::new().unwrap();
        let mut machine = machine_with_stamps(&temp_dir, vec![]);
        machine.transition_to("Home").unwrap();

        machine
            .handle_input(InputSnapshot {
                button_a: false,
                button_b: true,
            })
            .unwrap();
        assert_eq!(machine.current(), Some(StateId::Profile2));
    }

    #[test]
    fn test_profile2_round_trip_leaves_no_trace() {
        let temp_dir = TempDir::new().unwrap();
        let mut machine = machine_with_stamps(&temp_dir, vec![]);
        machine.transition_to("Home").unwrap();

        machine
            .handle_input(InputSnapshot {
                button_a: false,
                button_b: true,
            })
            .unwrap();
        machine
            .handle_input(InputSnapshot {
                button_a: true,
                button_b: false,
            })
            .unwrap();

        assert_eq!(machine.current(), Some(StateId::Home));

        // Net display state identical to the initial Home activation.
        let events = &machine.display().events;
        assert_eq!(
            events.as_slice(),
            &[
                (ScreenId::Home, true),
                (ScreenId::Home, false),
                (ScreenId::Profile2, true),
                (ScreenId::Profile2, false),
                (ScreenId::Home, true),
            ]
        );

        // And zero activity records were appended.
        assert!(!temp_dir.path().join("tracking.csv").exists());
    }

    #[test]
    fn test_clock_failure_still_completes_the_transition() {
        let temp_dir = TempDir::new().unwrap();
        // No stamps scripted: every clock read fails.
        let mut machine = machine_with_stamps(&temp_dir, vec![]);
        machine.transition_to("Home").unwrap();
        machine.transition_to("Profile 1").unwrap();

        machine.transition_to("Tracking").unwrap();
        assert_eq!(machine.current(), Some(StateId::Tracking));

        machine.transition_to("Voice Note").unwrap();
        assert_eq!(machine.current(), Some(StateId::VoiceNote));

        // The record was written, flagged timestamp-incomplete.
        let content = std::fs::read_to_string(temp_dir.path().join("tracking.csv")).unwrap();
        assert_eq!(content, ",incomplete,,incomplete,incomplete,");
    }
}
