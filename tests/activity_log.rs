#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ltb::core::activity_log::{ActivityLog, INCOMPLETE_STAMP, NOTE_MARKER};
    use ltb::core::clock::Timestamp;
    use ltb::core::elapsed::Elapsed;
    use std::fs;
    use tempfile::TempDir;

    fn stamp(hour: u32, minute: u32, second: u32) -> Timestamp {
        let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        Timestamp::from_parts(date, hour, minute, second, "+00:00")
    }

    #[test]
    fn test_start_fragment_layout() {
        let temp_dir = TempDir::new().unwrap();
        let log = ActivityLog::new(temp_dir.path().join("tracking.csv"));

        log.append_start(Some(&stamp(10, 15, 30))).unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        assert_eq!(content, "+00:00,2026-08-24_10:15:30,");
    }

    #[test]
    fn test_stop_fragment_continues_the_row() {
        let temp_dir = TempDir::new().unwrap();
        let log = ActivityLog::new(temp_dir.path().join("tracking.csv"));

        log.append_start(Some(&stamp(10, 15, 30))).unwrap();
        let elapsed = Elapsed {
            hours: 1,
            minutes: 4,
            seconds: 30,
        };
        log.append_stop(Some(&stamp(11, 20, 0)), Some(&elapsed)).unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        assert_eq!(content, "+00:00,2026-08-24_10:15:30,+00:00,2026-08-24_11:20:0,1:4:30,");
    }

    #[test]
    fn test_note_marker_terminates_the_row() {
        let temp_dir = TempDir::new().unwrap();
        let log = ActivityLog::new(temp_dir.path().join("tracking.csv"));

        log.append_note().unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        assert_eq!(content, format!("{}\r\n", NOTE_MARKER));
    }

    #[test]
    fn test_missing_stamp_is_flagged_incomplete() {
        let temp_dir = TempDir::new().unwrap();
        let log = ActivityLog::new(temp_dir.path().join("tracking.csv"));

        log.append_start(None).unwrap();
        log.append_stop(None, None).unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        assert_eq!(
            content,
            format!(",{},,{},{},", INCOMPLETE_STAMP, INCOMPLETE_STAMP, INCOMPLETE_STAMP)
        );
    }

    #[test]
    fn test_appends_never_rewrite_prior_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let log = ActivityLog::new(temp_dir.path().join("tracking.csv"));

        log.append_start(Some(&stamp(9, 0, 0))).unwrap();
        let first = fs::read_to_string(log.path()).unwrap();

        log.append_stop(Some(&stamp(9, 30, 0)), Some(&Elapsed::ZERO)).unwrap();
        log.append_note().unwrap();
        let second = fs::read_to_string(log.path()).unwrap();

        assert!(second.starts_with(&first));
    }

    #[test]
    fn test_write_to_unavailable_sink_fails() {
        let temp_dir = TempDir::new().unwrap();
        // A directory component that does not exist; append must not
        // create intermediate directories.
        let log = ActivityLog::new(temp_dir.path().join("missing").join("tracking.csv"));

        assert!(log.append_note().is_err());
    }
}
