    use super::*;

    fn at(secs: i64) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(secs).unwrap()
    }

    #[test]
    fn recent_records_show_relative_time() {
        let now = at(1_700_000_000);
        let ms = |secs_ago: i64| (1_700_000_000 - secs_ago) * 1000;

        assert_eq!(fmt_created(ms(5), now), "just now");
        assert_eq!(fmt_created(ms(5 * 60), now), "5m ago");
        assert_eq!(fmt_created(ms(3 * 3600), now), "3h ago");
        assert_eq!(fmt_created(ms(3 * 86_400), now), "3d ago");
    }

    #[test]
    fn old_or_future_records_show_absolute_date() {
        let now = at(1_700_000_000);
        assert_eq!(fmt_created(0, now), "1970-01-01 00:00Z");
        assert_eq!(
            fmt_created(1_700_000_600 * 1000, now),
            "2023-11-14 22:23Z"
        );
    }
