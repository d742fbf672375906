// Assignment extraction from meeting transcripts.
use chrono::{DateTime, Duration, TimeZone, Utc};
use tasksift::model::{Confidence, Priority, parse_transcript_at};

// Wednesday
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap()
}

fn end_of_day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 23, 59, 59).unwrap() + Duration::milliseconds(999)
}

#[test]
fn test_landing_page_example() {
    let tasks = parse_transcript_at("Aman you take the landing page by 10pm tomorrow.", &now());

    assert_eq!(tasks.len(), 1);
    let t = &tasks[0];
    assert!(t.name.contains("landing page"));
    assert_eq!(t.assignee.as_deref(), Some("Aman"));
    assert_eq!(
        t.due_date,
        Some(Utc.with_ymd_and_hms(2026, 10, 15, 22, 0, 0).unwrap())
    );
    assert_eq!(t.confidence, Confidence::High);
    assert_eq!(t.original_text, "Aman you take the landing page by 10pm tomorrow");
}

#[test]
fn test_sentence_order_and_skips() {
    let transcript = "Good morning everyone. Aman you take the landing page by 10pm tomorrow. \
                      The weather is nice! Priya please review the PR P1 by Friday? \
                      Ravi take care of the invoices.";
    let tasks = parse_transcript_at(transcript, &now());

    let who: Vec<&str> = tasks.iter().filter_map(|t| t.assignee.as_deref()).collect();
    assert_eq!(who, vec!["Aman", "Priya", "Ravi"]);

    let priya = &tasks[1];
    assert_eq!(priya.name, "review the PR");
    assert_eq!(priya.priority, Priority::P1);
    assert_eq!(priya.due_date, Some(end_of_day(2026, 10, 16)));
    assert_eq!(priya.confidence, Confidence::High);

    let ravi = &tasks[2];
    assert_eq!(ravi.name, "the invoices");
    assert_eq!(ravi.priority, Priority::P3);
    assert_eq!(ravi.due_date, None);
    assert_eq!(ravi.confidence, Confidence::Medium);
}

#[test]
fn test_unmatched_sentences_yield_nothing() {
    assert!(parse_transcript_at("The weather is nice. Lunch was great!", &now()).is_empty());
    assert!(parse_transcript_at("", &now()).is_empty());
    assert!(parse_transcript_at(" ... ?! ", &now()).is_empty());
}

#[test]
fn test_low_confidence_fragment() {
    let tasks = parse_transcript_at("X please go.", &now());
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].confidence, Confidence::Low);
    assert_eq!(tasks[0].name, "go");
}

#[test]
fn test_task_before_name_pattern() {
    let tasks = parse_transcript_at("Finish the report Priya by Friday.", &now());
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].name, "Finish the report");
    assert_eq!(tasks[0].assignee.as_deref(), Some("Priya"));
    assert_eq!(tasks[0].due_date, Some(end_of_day(2026, 10, 16)));
}

#[test]
fn test_responsibility_pattern() {
    let tasks = parse_transcript_at("Chen your responsibility the vendor contract.", &now());
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].assignee.as_deref(), Some("Chen"));
    assert_eq!(tasks[0].name, "the vendor contract");
    assert_eq!(tasks[0].due_date, None);
    assert_eq!(tasks[0].confidence, Confidence::Medium);
}

#[test]
fn test_task_before_name_pattern_is_tried_first() {
    // With a "by" clause the task-first pattern claims the sentence before the
    // responsibility pattern gets a chance.
    let tasks = parse_transcript_at(
        "Chen your responsibility the vendor contract by next Monday",
        &now(),
    );
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].assignee.as_deref(), Some("contract"));
    assert_eq!(tasks[0].name, "Chen your responsibility the vendor");
    assert_eq!(tasks[0].due_date, Some(end_of_day(2026, 10, 26)));
}

#[test]
fn test_unresolvable_deadline_still_counts() {
    let tasks = parse_transcript_at("Sam please update the docs by end of sprint", &now());
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].due_date, None);
    assert_eq!(tasks[0].confidence, Confidence::High);
}

#[test]
fn test_priority_read_from_whole_sentence() {
    let tasks = parse_transcript_at("Lee can you fix the build by Monday P2", &now());
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].name, "fix the build");
    assert_eq!(tasks[0].priority, Priority::P2);
    assert_eq!(tasks[0].due_date, Some(end_of_day(2026, 10, 19)));
}

#[test]
fn test_original_text_is_untouched() {
    let tasks = parse_transcript_at("  Dana handle   the P1 outage review  !", &now());
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].original_text, "Dana handle   the P1 outage review");
    assert_eq!(tasks[0].name, "the outage review");
    assert_eq!(tasks[0].priority, Priority::P1);
}
