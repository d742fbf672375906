// Crate root library declaration and module exports.
pub mod cli;
pub mod config;
pub mod context;
pub mod extractor;
pub mod model;

pub use model::{
    Confidence, ParsedMeetingTask, ParsedTask, Priority, parse_task, parse_task_at,
    parse_transcript, parse_transcript_at,
};
