// File: ./src/cli.rs
//! Shared command-line interface logic: argument parsing, help and rendering.

use crate::config::{Config, OutputFormat};
use crate::model::display::TaskDisplay;
use crate::model::{ParsedMeetingTask, ParsedTask};
use anyhow::{Result, bail};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::path::PathBuf;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Free text of a single task.
    Parse(String),
    /// Transcript path; `None` reads stdin.
    Transcript(Option<PathBuf>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: Command,
    pub json: bool,
    pub verbose: bool,
    pub root: Option<PathBuf>,
}

impl CliArgs {
    /// Parses arguments without the binary name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut json = false;
        let mut verbose = false;
        let mut root = None;
        let mut positional = Vec::new();

        let mut iter = args.into_iter().map(Into::into);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" | "help" => {
                    return Ok(Self {
                        command: Command::Help,
                        json,
                        verbose,
                        root,
                    });
                }
                "--json" => json = true,
                "-v" | "--verbose" => verbose = true,
                "-r" | "--root" => match iter.next() {
                    Some(path) => root = Some(PathBuf::from(path)),
                    None => bail!("--root requires a path"),
                },
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let command = match positional.next().as_deref() {
            None => Command::Help,
            Some("parse") => {
                let text = positional.collect::<Vec<_>>().join(" ");
                if text.trim().is_empty() {
                    bail!("'parse' needs the task text");
                }
                Command::Parse(text)
            }
            Some("transcript") => match positional.next() {
                Some(p) if p != "-" => Command::Transcript(Some(PathBuf::from(p))),
                _ => Command::Transcript(None),
            },
            Some(other) => bail!("Unknown command '{}'. Try --help.", other),
        };

        Ok(Self {
            command,
            json,
            verbose,
            root,
        })
    }

    pub fn output_format(&self, config: &Config) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            config.output
        }
    }
}

pub fn render_task<Tz: TimeZone>(
    task: &ParsedTask,
    format: OutputFormat,
    now: &DateTime<Tz>,
) -> Result<String>
where
    Tz::Offset: Display,
{
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(task)?,
        OutputFormat::Text => task.summary_line(now),
    })
}

pub fn render_meeting_tasks<Tz: TimeZone>(
    tasks: &[ParsedMeetingTask],
    format: OutputFormat,
    config: &Config,
    now: &DateTime<Tz>,
) -> Result<String>
where
    Tz::Offset: Display,
{
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(tasks)?);
    }
    if tasks.is_empty() {
        return Ok("No assignments found.".to_string());
    }

    let mut lines = Vec::with_capacity(tasks.len());
    for (i, t) in tasks.iter().enumerate() {
        let line = if config.show_confidence {
            t.summary_line(now)
        } else {
            t.task.summary_line(now)
        };
        lines.push(format!("{}. {}", i + 1, line));
        if config.show_original_text {
            lines.push(format!("   \"{}\"", t.original_text));
        }
    }
    Ok(lines.join("\n"))
}

pub fn print_help(binary_name: &str) {
    println!(
        "Tasksift v{} - Turn free text and meeting notes into structured tasks",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} parse <text...>             Parse one task description", binary_name);
    println!(
        "    {} transcript [<file>|-]       Extract assignments from a transcript",
        binary_name
    );
    println!("    {} --help                      Show this help message", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    --json                Print JSON instead of text.");
    println!("    -v, --verbose         Log which patterns matched (to stderr).");
    println!("    -r, --root <path>     Use a different directory for config.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("TASK SYNTAX:");
    println!("    P1-P4             Priority (P1=most urgent, default P3)");
    println!("    @name             Assignee (also: 'assigned to name')");
    println!("    today, tonight    Relative days (also tomorrow, yesterday)");
    println!("    friday            Next friday after today (next friday = one week later)");
    println!("    5th March         Day and month (also March 5, 3/5, 3-5-27)");
    println!("    in 2 weeks        Offsets in days, weeks or months (also 'after')");
    println!("    3pm, 10:30am      Time of day (date-only deadlines end at 23:59)");
    println!();
    println!("TRANSCRIPT PATTERNS:");
    println!(
        "    <name> you take / please / can you / handle / take care of <task> [by <deadline>]"
    );
    println!("    <task> <name> by <deadline>");
    println!("    <name> your responsibility <task> [by <deadline>]");
    println!();
    println!("EXAMPLES:");
    println!("    {} parse Submit report @sneha by Friday 5pm P2", binary_name);
    println!("    {} transcript minutes.txt --json", binary_name);
    println!();
    let formats: Vec<String> = OutputFormat::iter().map(|f| f.to_string()).collect();
    println!("CONFIG:");
    println!(
        "    config.toml keys: output ({}), log_level, show_confidence, show_original_text",
        formats.join("|")
    );
}
