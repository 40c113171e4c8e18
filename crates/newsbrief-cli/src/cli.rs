//! CLI command definitions and argument parsing.

use crate::output::{TOPIC_USAGE, URL_USAGE};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// newsbrief - Summarize news articles into a short bullet list.
#[derive(Debug, Parser)]
#[command(name = "newsbrief")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "NEWSBRIEF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize a single article
    Url(UrlArgs),

    /// Search the news feed for a topic and summarize the top articles
    Topic(TopicArgs),

    /// Install the NLP data files
    Setup,
}

impl Command {
    /// Usage text to print when a required argument is missing.
    ///
    /// Checked before the configuration is loaded, so a broken config file
    /// never hides the usage message.
    pub fn missing_args_usage(&self) -> Option<&'static str> {
        match self {
            Command::Url(UrlArgs { url: None }) => Some(URL_USAGE),
            Command::Topic(TopicArgs { topic, count }) if topic.is_none() || count.is_none() => {
                Some(TOPIC_USAGE)
            }
            _ => None,
        }
    }
}

/// Arguments for the url command.
///
/// Missing values print a usage example instead of a clap error.
#[derive(Debug, Parser)]
pub struct UrlArgs {
    /// Article URL
    pub url: Option<String>,
}

/// Arguments for the topic command.
#[derive(Debug, Parser)]
pub struct TopicArgs {
    /// Search topic
    pub topic: Option<String>,

    /// Number of feed articles to process
    pub count: Option<usize>,
}
