// File: ./src/model/datetime.rs
//! Resolution of date and time phrases against a reference instant.
//!
//! Everything is computed on the reference instant's wall clock and converted
//! to UTC at the very end. No calendar validation happens beyond what the
//! patterns enforce: out-of-range days, months and hours roll over into the
//! following period rather than being rejected.

use crate::model::patterns::{
    DAY_MONTH, MONTH_DAY, MONTHS, NUMERIC_DATE, RELATIVE_DAY, RELATIVE_OFFSET, TIME_OF_DAY,
    WEEKDAY, WEEKDAYS,
};
use chrono::{
    DateTime, Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};

type DateRule = fn(&str, NaiveDate) -> Option<NaiveDate>;

// Tried in this order; the first rule that yields a date wins.
const DATE_RULES: [(&str, DateRule); 6] = [
    ("relative day", relative_day),
    ("weekday", weekday),
    ("day month", day_month),
    ("month day", month_day),
    ("numeric", numeric_date),
    ("offset", relative_offset),
];

/// Resolves the due instant described by `input`, relative to `now`.
///
/// - Date without time: last millisecond of that day.
/// - Time without date: that time on `now`'s calendar day.
/// - Neither, or an instant chrono cannot represent: `None`.
pub fn resolve_due<Tz: TimeZone>(input: &str, now: &DateTime<Tz>) -> Option<DateTime<Utc>> {
    let today = now.naive_local().date();
    let date = find_date(input, today);
    let time = parse_time_of_day(input);

    let wall = match (date, time) {
        (None, None) => return None,
        (Some(d), None) => end_of_day(d)?,
        (d, Some((hour, minute))) => at_time(d.unwrap_or(today), hour, minute)?,
    };
    log::trace!("Resolved '{}' to local wall time {}", input, wall);
    localize(&now.timezone(), wall)
}

/// Finds the first date phrase in `input` and resolves it against `today`.
pub fn find_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    DATE_RULES.iter().find_map(|(label, rule)| {
        let d = rule(input, today)?;
        log::trace!("Date rule '{}' matched: {}", label, d);
        Some(d)
    })
}

/// 12-hour clock with mandatory am/pm, returned as a 24-hour `(hour, minute)`.
pub fn parse_time_of_day(input: &str) -> Option<(u32, u32)> {
    let caps = TIME_OF_DAY.captures(input)?;
    let mut hour = caps[1].parse::<u32>().ok()?;
    let minute = match caps.get(2) {
        Some(m) => m.as_str().parse::<u32>().ok()?,
        None => 0,
    };
    let is_pm = caps[3].eq_ignore_ascii_case("pm");

    if is_pm && hour != 12 {
        hour += 12;
    } else if !is_pm && hour == 12 {
        hour = 0;
    }
    Some((hour, minute))
}

// --- DATE RULES ---

fn relative_day(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = RELATIVE_DAY.captures(input)?;
    match caps[1].to_lowercase().as_str() {
        "tomorrow" => today.checked_add_signed(Duration::days(1)),
        "yesterday" => today.checked_sub_signed(Duration::days(1)),
        _ => Some(today),
    }
}

fn weekday(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = WEEKDAY.captures(input)?;
    let target = position_of(&WEEKDAYS, &caps[2])? as i64;
    let current = today.weekday().num_days_from_sunday() as i64;

    let mut offset = target - current;
    if offset <= 0 {
        offset += 7;
    }
    if caps
        .get(1)
        .is_some_and(|q| q.as_str().eq_ignore_ascii_case("next"))
    {
        offset += 7;
    }
    today.checked_add_signed(Duration::days(offset))
}

fn day_month(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = DAY_MONTH.captures(input)?;
    let day = caps[1].parse::<i64>().ok()?;
    let month0 = position_of(&MONTHS, &caps[2])? as i64;
    upcoming(today, month0, day)
}

fn month_day(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = MONTH_DAY.captures(input)?;
    let month0 = position_of(&MONTHS, &caps[1])? as i64;
    let day = caps[2].parse::<i64>().ok()?;
    upcoming(today, month0, day)
}

fn numeric_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = NUMERIC_DATE.captures(input)?;
    let month0 = caps[1].parse::<i64>().ok()? - 1;
    let day = caps[2].parse::<i64>().ok()?;
    let year = match caps.get(3) {
        Some(y) => {
            let y = y.as_str().parse::<i32>().ok()?;
            if y < 100 { y + 2000 } else { y }
        }
        None => today.year(),
    };
    overflowing_ymd(year, month0, day)
}

fn relative_offset(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = RELATIVE_OFFSET.captures(input)?;
    let amount = caps[2].parse::<u32>().ok()?;
    let unit = caps[3].to_lowercase();

    if unit.starts_with("day") {
        today.checked_add_signed(Duration::try_days(amount as i64)?)
    } else if unit.starts_with("week") {
        today.checked_add_signed(Duration::try_days(amount as i64 * 7)?)
    } else {
        today.checked_add_months(Months::new(amount))
    }
}

// --- HELPERS ---

fn position_of(names: &[&str], word: &str) -> Option<usize> {
    let lower = word.to_lowercase();
    names.iter().position(|n| *n == lower)
}

/// Day/month in the current year, or next year when that date already passed.
fn upcoming(today: NaiveDate, month0: i64, day: i64) -> Option<NaiveDate> {
    let this_year = overflowing_ymd(today.year(), month0, day)?;
    if this_year < today {
        overflowing_ymd(today.year() + 1, month0, day)
    } else {
        Some(this_year)
    }
}

/// Builds a date from a zero-based month and a day that may fall outside the
/// month, carrying the excess into the following months and years.
pub(crate) fn overflowing_ymd(year: i32, month0: i64, day: i64) -> Option<NaiveDate> {
    let year = i32::try_from(year as i64 + month0.div_euclid(12)).ok()?;
    let month = (month0.rem_euclid(12) + 1) as u32;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(Duration::try_days(day - 1)?)
}

fn end_of_day(d: NaiveDate) -> Option<NaiveDateTime> {
    d.and_time(NaiveTime::MIN).checked_add_signed(Duration::milliseconds(86_399_999))
}

fn at_time(d: NaiveDate, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    d.and_time(NaiveTime::MIN)
        .checked_add_signed(Duration::hours(hour as i64))?
        .checked_add_signed(Duration::minutes(minute as i64))
}

/// Maps a wall-clock time to an instant. Ambiguous times take the earlier
/// instant; times skipped by a DST jump move forward one hour.
fn localize<Tz: TimeZone>(tz: &Tz, wall: NaiveDateTime) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&wall)
        .earliest()
        .or_else(|| {
            let shifted = wall.checked_add_signed(Duration::hours(1))?;
            tz.from_local_datetime(&shifted).earliest()
        })
        .map(|dt| dt.with_timezone(&Utc))
}
