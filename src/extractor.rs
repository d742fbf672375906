// File: ./src/extractor.rs
/*! Pluggable extraction with a deterministic fallback.

Callers that have a smarter extractor (for example one backed by a remote
language model) wrap it in `TaskExtractor` and go through the `*_with_fallback`
helpers. Any error from the primary extractor is logged and the rule-based
engine answers instead, so these helpers never fail.
*/

use crate::model::{ParsedMeetingTask, ParsedTask, parse_task_at, parse_transcript_at};
use anyhow::Result;
use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone};

pub trait TaskExtractor: Send + Sync {
    fn name(&self) -> &str;
    fn extract(&self, input: &str) -> Result<ParsedTask>;
    fn extract_transcript(&self, transcript: &str) -> Result<Vec<ParsedMeetingTask>>;
}

/// The built-in pattern engine. Resolves against the local clock, or a fixed
/// instant (and its UTC offset) when constructed with `at`.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedExtractor {
    reference: Option<DateTime<FixedOffset>>,
}

impl RuleBasedExtractor {
    pub fn new() -> Self {
        Self { reference: None }
    }

    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self {
            reference: Some(now.with_timezone(&now.offset().fix())),
        }
    }
}

impl TaskExtractor for RuleBasedExtractor {
    fn name(&self) -> &str {
        "rules"
    }

    fn extract(&self, input: &str) -> Result<ParsedTask> {
        Ok(match &self.reference {
            Some(now) => parse_task_at(input, now),
            None => parse_task_at(input, &Local::now()),
        })
    }

    fn extract_transcript(&self, transcript: &str) -> Result<Vec<ParsedMeetingTask>> {
        Ok(match &self.reference {
            Some(now) => parse_transcript_at(transcript, now),
            None => parse_transcript_at(transcript, &Local::now()),
        })
    }
}

pub fn parse_task_with_fallback(primary: Option<&dyn TaskExtractor>, input: &str) -> ParsedTask {
    if let Some(extractor) = primary {
        match extractor.extract(input) {
            Ok(task) => return task,
            Err(e) => log::warn!(
                "Extractor '{}' failed, falling back to rules: {:#}",
                extractor.name(),
                e
            ),
        }
    }
    crate::model::parse_task(input)
}

pub fn parse_transcript_with_fallback(
    primary: Option<&dyn TaskExtractor>,
    transcript: &str,
) -> Vec<ParsedMeetingTask> {
    if let Some(extractor) = primary {
        match extractor.extract_transcript(transcript) {
            Ok(tasks) => return tasks,
            Err(e) => log::warn!(
                "Extractor '{}' failed on transcript, falling back to rules: {:#}",
                extractor.name(),
                e
            ),
        }
    }
    crate::model::parse_transcript(transcript)
}
