use anyhow::{Context, Result};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::io::Read;
use tasksift::cli::{self, CliArgs, Command};
use tasksift::config::Config;
use tasksift::context::StandardContext;
use tasksift::model::{parse_task_at, parse_transcript_at};

fn init_logging(level: LevelFilter) {
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    // A second init (e.g. in tests) is harmless; keep the first logger.
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn main() -> Result<()> {
    let args = CliArgs::parse(env::args().skip(1))?;

    if args.command == Command::Help {
        cli::print_help("tasksift");
        return Ok(());
    }

    let ctx = StandardContext::new(args.root.clone());
    let config = Config::load_or_default(&ctx)?;
    init_logging(if args.verbose {
        LevelFilter::Debug
    } else {
        config.log_filter()
    });
    if let Ok(path) = Config::get_path_string(&ctx) {
        log::debug!("Using config at {}", path);
    }

    let format = args.output_format(&config);
    // One reference instant for the whole invocation.
    let now = chrono::Local::now();

    match &args.command {
        Command::Parse(text) => {
            let task = parse_task_at(text, &now);
            println!("{}", cli::render_task(&task, format, &now)?);
        }
        Command::Transcript(path) => {
            let transcript = match path {
                Some(p) => std::fs::read_to_string(p)
                    .with_context(|| format!("Failed to read transcript {:?}", p))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read transcript from stdin")?;
                    buf
                }
            };
            let tasks = parse_transcript_at(&transcript, &now);
            log::info!("Extracted {} assignment(s)", tasks.len());
            println!(
                "{}",
                cli::render_meeting_tasks(&tasks, format, &config, &now)?
            );
        }
        Command::Help => {}
    }
    Ok(())
}
