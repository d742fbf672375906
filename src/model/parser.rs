// File: src/model/parser.rs
use crate::model::datetime::resolve_due;
use crate::model::item::{PLACEHOLDER_NAME, ParsedTask, Priority};
use crate::model::patterns::{
    ASSIGN_MARKER, ASSIGNEE_RULES, CONNECTORS, FALLBACK_STRIPS, NAME_BOUNDARIES, PRIORITY,
    date_time_phrases,
};
use chrono::{DateTime, Local, TimeZone};
use regex::Regex;
use std::str::FromStr;

/// First standalone `P1`..`P4` token, or the default level.
pub fn extract_priority(input: &str) -> Priority {
    PRIORITY
        .captures(input)
        .and_then(|caps| Priority::from_str(&caps[1]).ok())
        .unwrap_or_default()
}

/// Walks the assignee table in order and returns the first capture.
pub fn extract_assignee(input: &str) -> Option<String> {
    ASSIGNEE_RULES.iter().find_map(|rule| {
        let found = rule.regex.captures(input)?.get(1)?.as_str();
        if found.is_empty() {
            return None;
        }
        log::debug!("Assignee '{}' matched by rule '{}'", found, rule.label);
        Some(found.to_string())
    })
}

/// Picks the raw task-name candidate: the text before the first structural
/// boundary, or the input with every trailing keyword clause cut off.
pub fn extract_task_name(input: &str) -> String {
    let structural = NAME_BOUNDARIES.iter().find_map(|rule| {
        let found = rule.regex.captures(input)?.get(1)?.as_str();
        if found.is_empty() {
            return None;
        }
        log::debug!("Task name boundary '{}' matched", rule.label);
        Some(found.trim().to_string())
    });
    if let Some(name) = structural {
        return name;
    }

    let mut name = input.to_string();
    for strip in FALLBACK_STRIPS.iter() {
        name = strip.replace(&name, "").into_owned();
    }
    name.trim().to_string()
}

/// Strips everything the other extractors recognise from `candidate`.
///
/// Removes priority tags, date and time phrases, connector words and the
/// assignee (whole word, any case), then collapses whitespace. Never returns
/// an empty string.
pub fn clean_task_name(candidate: &str, assignee: Option<&str>) -> String {
    let mut name = PRIORITY.replace_all(candidate, " ").into_owned();
    for phrase in date_time_phrases() {
        name = phrase.replace_all(&name, " ").into_owned();
    }
    name = ASSIGN_MARKER.replace_all(&name, " ").into_owned();
    name = CONNECTORS.replace_all(&name, " ").into_owned();

    if let Some(who) = assignee.filter(|a| !a.is_empty())
        && let Ok(word) = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(who)))
    {
        name = word.replace_all(&name, " ").into_owned();
    }

    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        PLACEHOLDER_NAME.to_string()
    } else {
        collapsed
    }
}

/// Parses one free-text task description against the current local time.
pub fn parse_task(input: &str) -> ParsedTask {
    parse_task_at(input, &Local::now())
}

/// Parses one free-text task description against the reference instant `now`.
pub fn parse_task_at<Tz: TimeZone>(input: &str, now: &DateTime<Tz>) -> ParsedTask {
    let input = input.trim();

    let priority = extract_priority(input);
    let assignee = extract_assignee(input);
    let due_date = resolve_due(input, now);
    let name = clean_task_name(&extract_task_name(input), assignee.as_deref());

    log::debug!(
        "Parsed task '{}' (assignee: {:?}, due: {:?}, priority: {})",
        name,
        assignee,
        due_date,
        priority
    );

    ParsedTask {
        name,
        assignee,
        due_date,
        priority,
    }
}
