// File: ./src/model/mod.rs
pub mod datetime;
pub mod display;
pub mod item;
pub mod meeting;
pub mod parser;
pub mod patterns;

pub use item::{Confidence, PLACEHOLDER_NAME, ParsedMeetingTask, ParsedTask, Priority};
pub use meeting::{parse_transcript, parse_transcript_at};
pub use parser::{parse_task, parse_task_at};
