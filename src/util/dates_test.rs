use time::macros::datetime;

use super::*;

#[test]
fn parses_django_timestamps() {
    let at = parse_timestamp("2024-01-05T10:07:33.123456Z").unwrap();
    assert_eq!(at.year(), 2024);
    assert_eq!(at.minute(), 7);
    assert!(parse_timestamp("2024-01-05T10:07:33+03:00").is_some());
    assert!(parse_timestamp("yesterday").is_none());
}

#[test]
fn long_date_uses_genitive_month() {
    assert_eq!(format_long_date(datetime!(2024-01-05 10:00 UTC)), "5 января 2024 г.");
    assert_eq!(format_long_date(datetime!(2026-10-19 0:00 UTC)), "19 октября 2026 г.");
}

#[test]
fn date_time_is_zero_padded() {
    assert_eq!(format_date_time(datetime!(2024-03-07 09:05 UTC)), "07.03.2024, 09:05");
}

#[test]
fn relative_buckets() {
    let now = datetime!(2024-06-15 12:00 UTC);
    assert_eq!(format_relative(datetime!(2024-06-15 11:59:30 UTC), now), "только что");
    assert_eq!(format_relative(datetime!(2024-06-15 11:15 UTC), now), "45 мин. назад");
    assert_eq!(format_relative(datetime!(2024-06-15 07:00 UTC), now), "5 ч. назад");
    assert_eq!(format_relative(datetime!(2024-06-12 12:00 UTC), now), "3 дн. назад");
}

#[test]
fn relative_falls_back_to_date_after_a_week() {
    let now = datetime!(2024-06-15 12:00 UTC);
    assert_eq!(format_relative(datetime!(2024-05-01 12:00 UTC), now), "1 мая");
    assert_eq!(format_relative(datetime!(2023-12-31 12:00 UTC), now), "31 декабря 2023 г.");
}

#[test]
fn future_timestamps_read_as_just_now() {
    let now = datetime!(2024-06-15 12:00 UTC);
    assert_eq!(format_relative(datetime!(2024-06-15 12:05 UTC), now), "только что");
}

#[test]
fn label_helpers_echo_unparseable_input() {
    assert_eq!(relative_label("garbage"), "garbage");
    assert_eq!(date_time_label("garbage"), "garbage");
    assert_eq!(long_date_label(""), "");
}
