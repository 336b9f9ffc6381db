//! Prompt construction for the three study artifacts.

use crate::config::Prompts;
use std::collections::HashMap;

/// Maximum transcript characters sent to the model, to stay within token limits.
pub const MAX_TRANSCRIPT_CHARS: usize = 4000;

/// Number of flashcards requested from the model.
pub const FLASHCARD_COUNT: usize = 5;

/// The first `max_chars` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Builds task prompts from a transcript.
///
/// Pure: the same transcript and parameters always give the same prompt.
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    prompts: Prompts,
}

impl PromptBuilder {
    pub fn new(prompts: Prompts) -> Self {
        Self { prompts }
    }

    /// Prompt asking for a single concise paragraph.
    pub fn summary(&self, transcript: &str) -> String {
        self.render(&self.prompts.study.summary, transcript, HashMap::new())
    }

    /// Prompt asking for `num_questions` four-option questions with answers.
    ///
    /// `num_questions` is passed through as given.
    pub fn quiz(&self, transcript: &str, num_questions: i64) -> String {
        let mut vars = HashMap::new();
        vars.insert("num_questions".to_string(), num_questions.to_string());
        self.render(&self.prompts.study.quiz, transcript, vars)
    }

    /// Prompt asking for [`FLASHCARD_COUNT`] question/answer cards.
    pub fn flashcards(&self, transcript: &str) -> String {
        let mut vars = HashMap::new();
        vars.insert("num_flashcards".to_string(), FLASHCARD_COUNT.to_string());
        self.render(&self.prompts.study.flashcards, transcript, vars)
    }

    fn render(&self, template: &str, transcript: &str, mut vars: HashMap<String, String>) -> String {
        vars.insert(
            "transcript".to_string(),
            truncate_chars(transcript, MAX_TRANSCRIPT_CHARS).to_string(),
        );
        self.prompts.render_with_custom(template, &vars)
    }
}
