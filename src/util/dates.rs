//! Timestamp parsing and Russian-locale date labels.
//!
//! Formatting is pure and takes "now" and the display offset explicitly;
//! only `now` and `local_offset` touch the browser clock.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw, &Rfc3339).ok()
}

/// Current time from the browser clock (or the system clock off-browser).
pub fn now() -> OffsetDateTime {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let nanos = (js_sys::Date::now() * 1_000_000.0) as i128;
        OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
    #[cfg(not(feature = "csr"))]
    {
        OffsetDateTime::now_utc()
    }
}

/// The viewer's UTC offset; UTC when unknown.
pub fn local_offset() -> UtcOffset {
    #[cfg(feature = "csr")]
    {
        // JS reports minutes *behind* UTC.
        #[allow(clippy::cast_possible_truncation)]
        let minutes = -(js_sys::Date::new_0().get_timezone_offset() as i32);
        UtcOffset::from_whole_seconds(minutes * 60).unwrap_or(UtcOffset::UTC)
    }
    #[cfg(not(feature = "csr"))]
    {
        UtcOffset::UTC
    }
}

fn month_name(at: OffsetDateTime) -> &'static str {
    MONTHS_GENITIVE[usize::from(u8::from(at.month())) - 1]
}

/// `5 января 2024 г.`
pub fn format_long_date(at: OffsetDateTime) -> String {
    format!("{} {} {} г.", at.day(), month_name(at), at.year())
}

/// `05.01.2024, 10:07`
pub fn format_date_time(at: OffsetDateTime) -> String {
    format!(
        "{:02}.{:02}.{}, {:02}:{:02}",
        at.day(),
        u8::from(at.month()),
        at.year(),
        at.hour(),
        at.minute()
    )
}

/// Feed-card label: relative for the last week, a date after that.
pub fn format_relative(at: OffsetDateTime, now: OffsetDateTime) -> String {
    let elapsed = now - at;
    let minutes = elapsed.whole_minutes();
    let hours = elapsed.whole_hours();
    let days = elapsed.whole_days();

    if minutes < 1 {
        return "только что".to_owned();
    }
    if minutes < 60 {
        return format!("{minutes} мин. назад");
    }
    if hours < 24 {
        return format!("{hours} ч. назад");
    }
    if days < 7 {
        return format!("{days} дн. назад");
    }
    if at.year() == now.year() {
        format!("{} {}", at.day(), month_name(at))
    } else {
        format_long_date(at)
    }
}

// =============================================================
// Raw-string helpers used by components
// =============================================================

/// Relative label in the viewer's offset; echoes unparseable input.
pub fn relative_label(raw: &str) -> String {
    let offset = local_offset();
    parse_timestamp(raw).map_or_else(
        || raw.to_owned(),
        |at| format_relative(at.to_offset(offset), now().to_offset(offset)),
    )
}

pub fn date_time_label(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), |at| format_date_time(at.to_offset(local_offset())))
}

pub fn long_date_label(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), |at| format_long_date(at.to_offset(local_offset())))
}
