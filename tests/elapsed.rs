#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ltb::core::clock::Timestamp;
    use ltb::core::elapsed::Elapsed;

    fn stamp(hour: u32, minute: u32, second: u32) -> Timestamp {
        let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        Timestamp::from_parts(date, hour, minute, second, "+00:00")
    }

    #[test]
    fn test_same_minute_difference() {
        let elapsed = Elapsed::between(&stamp(10, 15, 30), &stamp(10, 15, 45));
        assert_eq!(
            elapsed,
            Elapsed {
                hours: 0,
                minutes: 0,
                seconds: 15
            }
        );
    }

    #[test]
    fn test_borrow_across_seconds() {
        let elapsed = Elapsed::between(&stamp(10, 15, 45), &stamp(10, 16, 5));
        assert_eq!(
            elapsed,
            Elapsed {
                hours: 0,
                minutes: 0,
                seconds: 20
            }
        );
    }

    #[test]
    fn test_borrow_across_hour_boundary() {
        let elapsed = Elapsed::between(&stamp(9, 59, 59), &stamp(10, 0, 1));
        assert_eq!(
            elapsed,
            Elapsed {
                hours: 0,
                minutes: 0,
                seconds: 2
            }
        );
    }

    #[test]
    fn test_midnight_rollover_borrows_a_day() {
        let elapsed = Elapsed::between(&stamp(23, 50, 0), &stamp(0, 10, 0));
        assert_eq!(
            elapsed,
            Elapsed {
                hours: 0,
                minutes: 20,
                seconds: 0
            }
        );
    }

    #[test]
    fn test_multi_hour_session() {
        let elapsed = Elapsed::between(&stamp(9, 5, 40), &stamp(12, 3, 10));
        assert_eq!(
            elapsed,
            Elapsed {
                hours: 2,
                minutes: 57,
                seconds: 30
            }
        );
    }

    #[test]
    fn test_zero_interval() {
        let elapsed = Elapsed::between(&stamp(8, 0, 0), &stamp(8, 0, 0));
        assert_eq!(elapsed, Elapsed::ZERO);
    }

    #[test]
    fn test_display_pads_seconds_only() {
        let elapsed = Elapsed {
            hours: 1,
            minutes: 4,
            seconds: 3,
        };
        assert_eq!(elapsed.to_string(), "1:4:03");
    }

    #[test]
    fn test_seconds_round_trip() {
        let elapsed = Elapsed::from_seconds(3723);
        assert_eq!(
            elapsed,
            Elapsed {
                hours: 1,
                minutes: 2,
                seconds: 3
            }
        );
        assert_eq!(elapsed.total_seconds(), 3723);
    }
}
