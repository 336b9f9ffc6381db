//! Laer - study material from YouTube videos
//!
//! Turns a video transcript into a summary, a multiple-choice quiz and a set of
//! flashcards by prompting an LLM and parsing its free-text replies.
//!
//! The name "Laer" comes from the Norwegian word "lær", meaning "learn."
//!
//! # Architecture
//!
//! - `config` - Settings and prompt templates
//! - `transcript` - Video-ID extraction and caption retrieval
//! - `completion` - LLM completion client (failures become placeholder text)
//! - `study` - Prompt construction and quiz/flashcard parsing
//! - `orchestrator` - Pipeline coordination
//! - `cli` - Command line and HTTP server
//!
//! # Example
//!
//! ```rust,no_run
//! use laer::config::Settings;
//! use laer::orchestrator::Orchestrator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let orchestrator = Orchestrator::new(&settings)?;
//!
//!     let pack = orchestrator
//!         .process_video("https://youtu.be/dQw4w9WgXcQ", 5)
//!         .await?;
//!     println!("{}", pack.summary);
//!     println!("{} questions, {} flashcards", pack.quiz.len(), pack.flashcards.len());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod study;
pub mod transcript;

#[cfg(test)]
mod test_support;

pub use error::{LaerError, Result};
