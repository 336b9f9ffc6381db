//! CLI module for Laer.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Laer - study material from YouTube videos
///
/// Fetches a video's transcript and asks an LLM for a summary, a multiple-choice
/// quiz and a set of flashcards. "Lær" is Norwegian for "learn."
#[derive(Parser, Debug)]
#[command(name = "laer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Completion endpoint URL (overrides config)
    #[arg(long, env = "GEMINI_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Completion API key (overrides config)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Host to bind to (default from config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (default from config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate summary, quiz and flashcards for one video
    Process {
        /// YouTube URL or video ID
        video_url: String,

        /// Number of quiz questions
        #[arg(short, long, allow_negative_numbers = true)]
        num_questions: Option<i64>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration (API key masked)
    Show,

    /// Show configuration file path
    Path,
}
