// File: ./src/model/patterns.rs
//! Compiled pattern tables shared by every extractor.
//!
//! Each table is built the first time it is touched and is read-only from then
//! on. Ordered tables are evaluated front to back and the first hit wins, so the
//! position of an entry is its precedence.

use once_cell::sync::Lazy;
use regex::Regex;

pub const WEEKDAYS: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

pub const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Words that end the task name in the keyword fallback, applied in order.
pub const FALLBACK_KEYWORDS: [&str; 9] = [
    "by", "due", "deadline", "tomorrow", "today", "next", "this", "assign", "@",
];

/// One entry of an ordered table: a label for logs plus the compiled pattern.
/// The value of interest is always capture group 1.
pub struct Rule {
    pub label: &'static str,
    pub regex: Regex,
}

/// Which capture group holds which field of a meeting assignment.
#[derive(Debug, Clone, Copy)]
pub struct CaptureRoles {
    pub assignee: usize,
    pub task: usize,
    pub deadline: usize,
}

const NAME_FIRST: CaptureRoles = CaptureRoles {
    assignee: 1,
    task: 2,
    deadline: 3,
};

const TASK_FIRST: CaptureRoles = CaptureRoles {
    assignee: 2,
    task: 1,
    deadline: 3,
};

pub struct MeetingPattern {
    pub label: &'static str,
    pub regex: Regex,
    pub roles: CaptureRoles,
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid built-in pattern")
}

fn rule(label: &'static str, pattern: &str) -> Rule {
    Rule {
        label,
        regex: compile(pattern),
    }
}

fn weekday_alternation() -> String {
    WEEKDAYS.join("|")
}

fn month_alternation() -> String {
    MONTHS.join("|")
}

// --- FIELD PATTERNS ---

pub static PRIORITY: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\b(P[1-4])\b"));

pub static ASSIGNEE_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        rule("explicit marker", r"(?i)(?:assign(?:ed)?\s+to\s+|@)(\w+)"),
        rule("word before deadline", r"(?i)\b(\w+)\s+(?:by|due|deadline)"),
        rule("word near by or digit", r"(?i)\s(\w+)(?:\s+by|\s+\d)"),
    ]
});

pub static NAME_BOUNDARIES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        rule("before deadline marker", r"(?i)^(.*?)\s+(?:by|due|deadline|@)"),
        rule("before day word", r"(?i)^(.*?)\s+\w+day"),
        rule("before digit", r"(?i)^(.*?)\s+\d"),
    ]
});

pub static FALLBACK_STRIPS: Lazy<Vec<Regex>> = Lazy::new(|| {
    FALLBACK_KEYWORDS
        .iter()
        .map(|kw| compile(&format!(r"(?i)\s+{}\b.*", regex::escape(kw))))
        .collect()
});

// --- DATE & TIME PATTERNS ---

pub static TIME_OF_DAY: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)\b(\d{1,2}):?(\d{2})?\s*(am|pm)\b"));

pub static RELATIVE_DAY: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)\b(today|tonight|tomorrow|yesterday)\b"));

pub static WEEKDAY: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i)\b(?:(next|this)\s+)?({})\b",
        weekday_alternation()
    ))
});

pub static DAY_MONTH: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i)\b(\d{{1,2}})(?:st|nd|rd|th)?\s+({})\b",
        month_alternation()
    ))
});

pub static MONTH_DAY: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i)\b({})\s+(\d{{1,2}})(?:st|nd|rd|th)?\b",
        month_alternation()
    ))
});

pub static NUMERIC_DATE: Lazy<Regex> =
    Lazy::new(|| compile(r"\b(\d{1,2})[/-](\d{1,2})(?:[/-](\d{2,4}))?\b"));

pub static RELATIVE_OFFSET: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)\b(in|after)\s+(\d+)\s+(days?|weeks?|months?)\b"));

/// Every date or time phrase the cleaner strips from a task name.
pub fn date_time_phrases() -> [&'static Regex; 7] {
    [
        &*RELATIVE_DAY,
        &*WEEKDAY,
        &*TIME_OF_DAY,
        &*DAY_MONTH,
        &*MONTH_DAY,
        &*NUMERIC_DATE,
        &*RELATIVE_OFFSET,
    ]
}

// --- CLEANUP ---

pub static CONNECTORS: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)(?:\b(?:by|due|deadline)\b|@)"));

pub static ASSIGN_MARKER: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\bassign(?:ed)?\s+to\b"));

// --- TRANSCRIPTS ---

pub static SENTENCE_TERMINATORS: Lazy<Regex> = Lazy::new(|| compile(r"[.!?]+"));

pub static MEETING_PRIMARY: Lazy<Vec<MeetingPattern>> = Lazy::new(|| {
    let optional_deadline = r"(?:\s+by\s+(.+?))?$";
    [
        ("you take", r"(?i)(\w+)\s+you\s+take\s+(.+?)"),
        ("please", r"(?i)(\w+)\s+please\s+(.+?)"),
        ("can you", r"(?i)(\w+)\s+can\s+you\s+(.+?)"),
        ("handle", r"(?i)(\w+)\s+handle\s+(.+?)"),
        ("take care of", r"(?i)(\w+)\s+take\s+care\s+of\s+(.+?)"),
    ]
    .into_iter()
    .map(|(label, head)| MeetingPattern {
        label,
        regex: compile(&format!("{}{}", head, optional_deadline)),
        roles: NAME_FIRST,
    })
    .collect()
});

pub static MEETING_ALTERNATE: Lazy<Vec<MeetingPattern>> = Lazy::new(|| {
    vec![
        MeetingPattern {
            label: "task then name by deadline",
            regex: compile(r"(?i)(.+?)\s+(\w+)\s+by\s+(.+)$"),
            roles: TASK_FIRST,
        },
        MeetingPattern {
            label: "your responsibility",
            regex: compile(r"(?i)(\w+)\s+your\s+responsibility\s+(.+?)(?:\s+by\s+(.+?))?$"),
            roles: NAME_FIRST,
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_compile_in_order() {
        assert_eq!(ASSIGNEE_RULES.len(), 3);
        assert_eq!(ASSIGNEE_RULES[0].label, "explicit marker");
        assert_eq!(NAME_BOUNDARIES.len(), 3);
        assert_eq!(FALLBACK_STRIPS.len(), FALLBACK_KEYWORDS.len());
        assert_eq!(MEETING_PRIMARY.len(), 5);
        assert_eq!(MEETING_ALTERNATE.len(), 2);
        assert_eq!(date_time_phrases().len(), 7);
    }

    #[test]
    fn test_priority_needs_standalone_token() {
        assert!(PRIORITY.is_match("fix login p2"));
        assert!(!PRIORITY.is_match("fix P5 issue"));
        assert!(!PRIORITY.is_match("read chapter XP1"));
    }

    #[test]
    fn test_weekday_captures_qualifier() {
        let caps = WEEKDAY.captures("ship by next Monday").unwrap();
        assert_eq!(caps.get(1).map(|m| m.as_str()), Some("next"));
        assert_eq!(&caps[2], "Monday");

        let caps = WEEKDAY.captures("ship friday").unwrap();
        assert!(caps.get(1).is_none());
    }
}
