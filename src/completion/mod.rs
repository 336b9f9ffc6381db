//! Text completion against an external LLM service.
//!
//! A completion call never fails from the caller's point of view: transport and
//! status errors are logged and come back as [`Completion::Failed`], which still
//! carries a human-readable string that downstream parsers accept like any
//! other model output.

mod gemini;

pub use gemini::{CompletionConfig, GeminiClient, GenerationConfig};

use async_trait::async_trait;
use std::fmt;

/// Prefix of the placeholder text produced when a completion call fails.
pub const FAILURE_MARKER: &str = "Error calling Gemini API";

/// Outcome of a single completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Generated text from the first candidate.
    Text(String),
    /// Placeholder text describing why generation failed.
    Failed(String),
}

impl Completion {
    /// Build a failure placeholder embedding the error description.
    pub fn failed(reason: impl fmt::Display) -> Self {
        Completion::Failed(format!("{}: {}", FAILURE_MARKER, reason))
    }

    /// Text to hand to parsers, whichever variant this is.
    pub fn text(&self) -> &str {
        match self {
            Completion::Text(text) | Completion::Failed(text) => text,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Completion::Failed(_))
    }

    pub fn into_text(self) -> String {
        match self {
            Completion::Text(text) | Completion::Failed(text) => text,
        }
    }
}

/// Trait for text completion services.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a prompt and return the generated text or a failure placeholder.
    async fn generate(&self, prompt: &str) -> Completion;
}
