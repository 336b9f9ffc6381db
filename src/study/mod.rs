//! Study artifacts derived from a transcript.
//!
//! Prompt construction lives in [`PromptBuilder`]; the parsers recover
//! structured records from loosely formatted model output. Parsing is
//! best-effort positional matching over lines: it never fails, it only
//! extracts whatever the lines hold.

mod cursor;
mod flashcards;
mod prompt;
mod quiz;

pub use flashcards::parse_flashcards;
pub use prompt::{truncate_chars, PromptBuilder, FLASHCARD_COUNT, MAX_TRANSCRIPT_CHARS};
pub use quiz::parse_quiz;

use serde::{Deserialize, Serialize};

/// A multiple-choice question with its four options, in model order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: [String; 4],
}

/// A question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

/// The combined output for one transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyPack {
    pub summary: String,
    pub quiz: Vec<QuizQuestion>,
    pub flashcards: Vec<Flashcard>,
}
