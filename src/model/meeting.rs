// File: ./src/model/meeting.rs
// Extraction of task assignments from meeting transcripts.
//
// The transcript is cut into sentences and every sentence is matched on its own
// against two ordered tiers of assignment patterns. Sentences that match
// nothing are skipped. No state is carried between sentences.

use crate::model::datetime::resolve_due;
use crate::model::item::{Confidence, ParsedMeetingTask, ParsedTask};
use crate::model::parser::{clean_task_name, extract_priority};
use crate::model::patterns::{
    MEETING_ALTERNATE, MEETING_PRIMARY, MeetingPattern, SENTENCE_TERMINATORS,
};
use chrono::{DateTime, Local, TimeZone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Primary,
    Alternate,
}

/// Raw captures of one assignment sentence, before any cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentMatch<'a> {
    pub tier: MatchTier,
    pub pattern: &'static str,
    pub assignee: &'a str,
    pub task: &'a str,
    pub deadline: Option<&'a str>,
}

pub fn split_sentences(transcript: &str) -> Vec<&str> {
    SENTENCE_TERMINATORS
        .split(transcript)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn apply<'a>(
    pattern: &MeetingPattern,
    tier: MatchTier,
    sentence: &'a str,
) -> Option<AssignmentMatch<'a>> {
    let caps = pattern.regex.captures(sentence)?;
    let assignee = caps.get(pattern.roles.assignee)?.as_str();
    let task = caps.get(pattern.roles.task)?.as_str();
    let deadline = caps
        .get(pattern.roles.deadline)
        .map(|m| m.as_str().trim())
        .filter(|d| !d.is_empty());

    Some(AssignmentMatch {
        tier,
        pattern: pattern.label,
        assignee,
        task,
        deadline,
    })
}

/// Tries every primary pattern, then every alternate one. First hit wins.
pub fn match_assignment(sentence: &str) -> Option<AssignmentMatch<'_>> {
    MEETING_PRIMARY
        .iter()
        .map(|p| (p, MatchTier::Primary))
        .chain(MEETING_ALTERNATE.iter().map(|p| (p, MatchTier::Alternate)))
        .find_map(|(pattern, tier)| apply(pattern, tier, sentence))
}

/// One point each for a real assignee name, a task longer than a few
/// characters, and a deadline.
pub fn confidence_for(found: &AssignmentMatch<'_>) -> Confidence {
    let score = [
        found.assignee.chars().count() > 1,
        found.task.chars().count() > 5,
        found.deadline.is_some(),
    ]
    .into_iter()
    .filter(|hit| *hit)
    .count();
    Confidence::from_score(score as u8)
}

pub fn parse_transcript(transcript: &str) -> Vec<ParsedMeetingTask> {
    parse_transcript_at(transcript, &Local::now())
}

pub fn parse_transcript_at<Tz: TimeZone>(
    transcript: &str,
    now: &DateTime<Tz>,
) -> Vec<ParsedMeetingTask> {
    let mut tasks = Vec::new();

    for sentence in split_sentences(transcript) {
        let Some(found) = match_assignment(sentence) else {
            log::debug!("No assignment pattern matched: '{}'", sentence);
            continue;
        };
        log::debug!(
            "Sentence matched {:?} pattern '{}': '{}'",
            found.tier,
            found.pattern,
            sentence
        );

        let task = ParsedTask {
            name: clean_task_name(found.task, Some(found.assignee)),
            assignee: Some(found.assignee.to_string()),
            due_date: found.deadline.and_then(|d| resolve_due(d, now)),
            priority: extract_priority(sentence),
        };
        tasks.push(ParsedMeetingTask {
            task,
            confidence: confidence_for(&found),
            original_text: sentence.to_string(),
        });
    }

    tasks
}
