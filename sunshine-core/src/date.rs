//! Day labels for forecast rows.
//!
//! Every function takes the day boundary explicitly instead of reading the
//! process timezone, so the same inputs always give the same label.

use chrono::{DateTime, FixedOffset};

use crate::{
    error::{PresentationError, PresentationResult},
    model::{DayBoundary, LocalePreference},
};

/// Julian day number of 1970-01-01.
pub const EPOCH_JULIAN_DAY: i64 = 2_440_588;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Days ahead (exclusive) for which a row is labelled with the weekday alone.
const WEEKDAY_ONLY_HORIZON: i64 = 7;

/// Julian day number of `epoch_millis` as seen from `boundary`.
pub fn julian_day(epoch_millis: i64, boundary: DayBoundary) -> i64 {
    let offset_millis = i64::from(boundary.offset_seconds()) * 1000;
    epoch_millis.saturating_add(offset_millis).div_euclid(MILLIS_PER_DAY) + EPOCH_JULIAN_DAY
}

/// Label for a forecast row.
///
/// - today: `Today, June 08`
/// - the following six days: the weekday, e.g. `Wednesday`
/// - anything else: `Mon Jun 15`, or `Mon 15 Jun` for day-first locales
pub fn friendly_day_label(
    date_epoch_millis: i64,
    now_epoch_millis: i64,
    locale: LocalePreference,
    boundary: DayBoundary,
) -> PresentationResult<String> {
    let day = julian_day(date_epoch_millis, boundary);
    let today = julian_day(now_epoch_millis, boundary);
    let local = local_datetime(date_epoch_millis, boundary)?;

    if day == today {
        let month_day = month_day_label(date_epoch_millis, locale, boundary)?;
        return Ok(format!("Today, {month_day}"));
    }

    if day > today && day < today + WEEKDAY_ONLY_HORIZON {
        return Ok(local.format("%A").to_string());
    }

    let pattern = if locale.day_first() { "%a %d %b" } else { "%a %b %d" };
    Ok(local.format(pattern).to_string())
}

/// `Today`, `Tomorrow`, or the full weekday name.
pub fn day_name(
    date_epoch_millis: i64,
    now_epoch_millis: i64,
    _locale: LocalePreference,
    boundary: DayBoundary,
) -> PresentationResult<String> {
    let day = julian_day(date_epoch_millis, boundary);
    let today = julian_day(now_epoch_millis, boundary);

    let name = match day - today {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => local_datetime(date_epoch_millis, boundary)?.format("%A").to_string(),
    };

    Ok(name)
}

/// `June 08`, or `08 June` for day-first locales.
pub fn month_day_label(
    date_epoch_millis: i64,
    locale: LocalePreference,
    boundary: DayBoundary,
) -> PresentationResult<String> {
    let pattern = if locale.day_first() { "%d %B" } else { "%B %d" };
    Ok(local_datetime(date_epoch_millis, boundary)?.format(pattern).to_string())
}

/// Medium-length date, e.g. `Jun 8, 2015`.
pub fn format_date(date_epoch_millis: i64, boundary: DayBoundary) -> PresentationResult<String> {
    Ok(local_datetime(date_epoch_millis, boundary)?.format("%b %-d, %Y").to_string())
}

fn local_datetime(
    epoch_millis: i64,
    boundary: DayBoundary,
) -> PresentationResult<DateTime<FixedOffset>> {
    DateTime::from_timestamp_millis(epoch_millis)
        .map(|utc| utc.with_timezone(&boundary.offset()))
        .ok_or(PresentationError::InvalidTimestamp(epoch_millis))
}
