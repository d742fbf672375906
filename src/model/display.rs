// File: ./src/model/display.rs
use crate::model::item::{ParsedMeetingTask, ParsedTask};
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use std::fmt::Display;

fn local_date<Tz: TimeZone>(instant: &DateTime<Utc>, now: &DateTime<Tz>) -> NaiveDate {
    instant.with_timezone(&now.timezone()).date_naive()
}

pub fn is_overdue<Tz: TimeZone>(due: &DateTime<Utc>, now: &DateTime<Tz>) -> bool {
    *due < now.with_timezone(&Utc)
}

pub fn is_due_today<Tz: TimeZone>(due: &DateTime<Utc>, now: &DateTime<Tz>) -> bool {
    local_date(due, now) == now.date_naive()
}

pub fn is_due_tomorrow<Tz: TimeZone>(due: &DateTime<Utc>, now: &DateTime<Tz>) -> bool {
    now.date_naive()
        .checked_add_signed(Duration::days(1))
        .is_some_and(|tomorrow| local_date(due, now) == tomorrow)
}

/// Human label such as `Today, 3:00 PM`, `Tomorrow, 9:30 AM` or `Mar 5, 3:00 PM`.
/// The year is appended when it differs from `now`'s.
pub fn format_due_date<Tz: TimeZone>(due: &DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    let local = due.with_timezone(&now.timezone());
    let time = local.format("%-I:%M %p");

    if is_due_today(due, now) {
        format!("Today, {}", time)
    } else if is_due_tomorrow(due, now) {
        format!("Tomorrow, {}", time)
    } else if local.year() != now.year() {
        format!("{}, {}", local.format("%b %-d, %Y"), time)
    } else {
        format!("{}, {}", local.format("%b %-d"), time)
    }
}

pub trait TaskDisplay {
    /// One-line summary: priority, name, assignee and due label.
    fn summary_line<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display;
}

impl TaskDisplay for ParsedTask {
    fn summary_line<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        let mut s = format!("[{}] {}", self.priority, self.name);
        if let Some(who) = &self.assignee {
            s.push_str(&format!(" (@{})", who));
        }
        if let Some(due) = &self.due_date {
            s.push_str(&format!(" - {}", format_due_date(due, now)));
            if is_overdue(due, now) {
                s.push_str(" [overdue]");
            }
        }
        s
    }
}

impl TaskDisplay for ParsedMeetingTask {
    fn summary_line<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        format!("{} {{{}}}", self.task.summary_line(now), self.confidence)
    }
}
