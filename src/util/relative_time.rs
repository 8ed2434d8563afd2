//! Russian date and relative-time formatting.
//!
//! Absolute dates use the ru-RU numeric form `DD.MM.YYYY, HH:MM` in the
//! viewer's local offset. Relative times floor to whole units and switch to
//! the absolute form after a week. Callers pass "now" and the local offset
//! explicitly; the browser layer reads both from `js_sys::Date`.

#[cfg(test)]
#[path = "relative_time_test.rs"]
mod relative_time_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::error::UiError;

pub const JUST_NOW: &str = "только что";

/// Parse a timestamp the way `new Date(..)` reads template output.
///
/// - RFC 3339 keeps its own offset.
/// - A naive `YYYY-MM-DDTHH:MM[:SS[.fff]]` is wall time in the viewer's zone.
///   `offset_at` gives that zone's offset at an instant, so a winter time
///   read in summer still gets the winter offset.
/// - A bare `YYYY-MM-DD` is midnight UTC.
///
/// A space may stand in for the `T` separator.
///
/// # Errors
///
/// Returns [`UiError::Timestamp`] for anything else.
pub fn parse_timestamp(
    raw: &str,
    offset_at: impl Fn(OffsetDateTime) -> UtcOffset,
) -> Result<OffsetDateTime, UiError> {
    let raw = raw.trim();
    let normalized = match raw.as_bytes().get(10) {
        Some(b' ') => format!("{}T{}", &raw[..10], &raw[11..]),
        _ => raw.to_owned(),
    };
    if let Ok(at) = OffsetDateTime::parse(&normalized, &Rfc3339) {
        return Ok(at);
    }
    if let Ok(day) = Date::parse(&normalized, format_description!("[year]-[month]-[day]")) {
        return Ok(day.midnight().assume_utc());
    }
    PrimitiveDateTime::parse(
        &normalized,
        format_description!("[year]-[month]-[day]T[hour]:[minute][optional [:[second]]][optional [.[subsecond]]]"),
    )
    .map(|naive| assume_local(naive, offset_at))
    .map_err(|e| UiError::Timestamp(format!("{raw:?}: {e}")))
}

/// Pin wall time `naive` to the zone described by `offset_at`.
///
/// The first guess reads the wall time as UTC; the second pass uses the
/// offset in effect at that guess, which settles across a DST change.
fn assume_local(naive: PrimitiveDateTime, offset_at: impl Fn(OffsetDateTime) -> UtcOffset) -> OffsetDateTime {
    let guess = naive.assume_offset(offset_at(naive.assume_utc()));
    naive.assume_offset(offset_at(guess))
}

/// `DD.MM.YYYY, HH:MM` in the `local` offset.
#[must_use]
pub fn format_date(at: OffsetDateTime, local: UtcOffset) -> String {
    let at = at.to_offset(local);
    format!("{:02}.{:02}.{}, {:02}:{:02}", at.day(), u8::from(at.month()), at.year(), at.hour(), at.minute())
}

/// Human-readable age of `then` as seen at `now`.
#[must_use]
pub fn format_relative_time(then: OffsetDateTime, now: OffsetDateTime, local: UtcOffset) -> String {
    let elapsed = now - then;
    let minutes = elapsed.whole_minutes();
    if minutes < 1 {
        return JUST_NOW.to_owned();
    }
    if minutes < 60 {
        return format!("{minutes} мин. назад");
    }
    let hours = elapsed.whole_hours();
    if hours < 24 {
        return format!("{hours} ч. назад");
    }
    let days = elapsed.whole_days();
    if days < 7 {
        return format!("{days} дн. назад");
    }
    format_date(then, local)
}
