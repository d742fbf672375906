// Primary extractor failures fall back to the rule engine.
use anyhow::{Result, anyhow};
use chrono::{TimeZone, Utc};
use tasksift::extractor::{
    RuleBasedExtractor, TaskExtractor, parse_task_with_fallback, parse_transcript_with_fallback,
};
use tasksift::model::{ParsedMeetingTask, ParsedTask, Priority, parse_task_at, parse_transcript_at};

struct Unavailable;

impl TaskExtractor for Unavailable {
    fn name(&self) -> &str {
        "unavailable"
    }
    fn extract(&self, _input: &str) -> Result<ParsedTask> {
        Err(anyhow!("missing API key"))
    }
    fn extract_transcript(&self, _transcript: &str) -> Result<Vec<ParsedMeetingTask>> {
        Err(anyhow!("network unreachable"))
    }
}

struct Canned;

impl TaskExtractor for Canned {
    fn name(&self) -> &str {
        "canned"
    }
    fn extract(&self, _input: &str) -> Result<ParsedTask> {
        Ok(ParsedTask {
            name: "From primary".to_string(),
            assignee: None,
            due_date: None,
            priority: Priority::P1,
        })
    }
    fn extract_transcript(&self, _transcript: &str) -> Result<Vec<ParsedMeetingTask>> {
        Ok(Vec::new())
    }
}

#[test]
fn test_failure_falls_back_to_rules() {
    let task = parse_task_with_fallback(Some(&Unavailable), "Submit report @sneha P2");
    assert_eq!(task.name, "Submit report");
    assert_eq!(task.assignee.as_deref(), Some("sneha"));
    assert_eq!(task.priority, Priority::P2);

    let tasks = parse_transcript_with_fallback(Some(&Unavailable), "Aman please ship the build.");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].assignee.as_deref(), Some("Aman"));
}

#[test]
fn test_successful_primary_is_used() {
    let task = parse_task_with_fallback(Some(&Canned), "Submit report @sneha P2");
    assert_eq!(task.name, "From primary");

    let tasks = parse_transcript_with_fallback(Some(&Canned), "Aman please ship the build.");
    assert!(tasks.is_empty());
}

#[test]
fn test_no_primary_uses_rules() {
    let task = parse_task_with_fallback(None, "Water the plants");
    assert_eq!(task.name, "Water the plants");
    assert_eq!(task.priority, Priority::P3);
}

#[test]
fn test_rule_extractor_with_fixed_reference() {
    let now = Utc.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap();
    let rules = RuleBasedExtractor::at(&now);

    let input = "Renew passport by Friday";
    assert_eq!(rules.extract(input).unwrap(), parse_task_at(input, &now));

    let transcript = "Aman you take the landing page by 10pm tomorrow.";
    assert_eq!(
        rules.extract_transcript(transcript).unwrap(),
        parse_transcript_at(transcript, &now)
    );
}
