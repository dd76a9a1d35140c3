use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::indexer::build_index;
use crate::models::{MessageRecord, ParseOptions, ParseResult, parse_offset};
use crate::parsers::parse_chat_log_file;
use crate::utils::{get_log_dir, sanitize_for_terminal};

const TOP_SENDERS: usize = 5;

#[derive(Parser)]
#[command(name = "chatlog-explorer")]
#[command(version = "0.1.0")]
#[command(about = "Parse and summarize UTF-16 chat log transcripts", long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse one chat log and print its header and messages
    Parse {
        /// Chat log file
        file: PathBuf,

        /// Start decoding messages at this byte offset (e.g. a previous byteLength)
        #[arg(long, value_parser = parse_offset)]
        offset: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Show statistics for a chat log or a directory of chat logs
    Stats {
        /// File or directory (defaults to $CHATLOG_DIR)
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

pub fn execute(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Parse { file, offset, format }) => {
            parse_log(file, ParseOptions { offset: *offset }, *format)?;
        }
        Some(Commands::Stats { path }) => {
            show_stats(path.as_deref())?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn parse_log(file: &Path, options: ParseOptions, format: OutputFormat) -> Result<()> {
    let result = parse_chat_log_file(file, &options)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .context("Failed to serialize parse result")?;
            println!("{}", json);
        }
        OutputFormat::Text => print_text(&result),
    }

    Ok(())
}

fn print_text(result: &ParseResult) {
    for (key, value) in result.header.fields() {
        println!("{}: {}", sanitize_for_terminal(key), sanitize_for_terminal(value));
    }
    println!();
    for message in &result.messages {
        println!(
            "[{}] {} > {}",
            message.timestamp,
            sanitize_for_terminal(&message.sender),
            sanitize_for_terminal(&message.text)
        );
    }
    println!();
    println!("byteLength: {}", result.byte_length);
}

fn show_stats(path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => get_log_dir()?,
    };

    let (logs_parsed, logs_failed, messages) = if path.is_dir() {
        let index = build_index(&path)?;
        let messages: Vec<MessageRecord> =
            index.messages.into_iter().map(|m| m.message).collect();
        (index.files_parsed, index.files_failed, messages)
    } else {
        let parsed = parse_chat_log_file(&path, &ParseOptions::default())?;
        (1, 0, parsed.messages)
    };

    let unparseable = messages.iter().filter(|m| !m.timestamp.is_valid()).count();
    let mut sender_counts: HashMap<&str, usize> = HashMap::new();
    for message in &messages {
        *sender_counts.entry(message.sender.as_str()).or_default() += 1;
    }
    let mut top_senders: Vec<(&str, usize)> =
        sender_counts.iter().map(|(&sender, &count)| (sender, count)).collect();
    top_senders.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    println!("Chat Log Statistics");
    println!("===================");
    println!("Chat logs: {} ({} failed)", logs_parsed, logs_failed);
    println!("Total messages: {}", messages.len());
    println!("  Unparseable timestamps: {}", unparseable);
    println!("Distinct senders: {}", sender_counts.len());
    for (sender, count) in top_senders.iter().take(TOP_SENDERS) {
        println!("  {}: {}", sanitize_for_terminal(sender), count);
    }
    println!();
    println!("Source: {}", path.display());

    let instants = messages.iter().filter_map(|m| m.timestamp.as_datetime());
    if let Some(oldest) = instants.clone().min() {
        println!("Oldest message: {}", oldest.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(newest) = instants.max() {
        println!("Newest message: {}", newest.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}
