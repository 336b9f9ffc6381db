//! Flashcard parsing.

use super::cursor::{after_delimiter, LineCursor};
use super::Flashcard;

/// Lines per card: question, answer, separator.
const FLASHCARD_STRIDE: usize = 3;

/// Parse raw flashcard text into question/answer pairs.
///
/// Reads blocks of three lines (`"Q: ..."`, `"A: ..."`, separator) and keeps
/// the text after the first `": "` on each, or the whole line when absent.
/// There is no upper bound on the number of cards. A trailing question with
/// no answer line is dropped.
pub fn parse_flashcards(raw: &str) -> Vec<Flashcard> {
    let mut cards = Vec::new();
    let mut cursor = LineCursor::new(raw);

    while let Some(window) = cursor.next_window(FLASHCARD_STRIDE) {
        if let [question, answer, ..] = window {
            cards.push(Flashcard {
                question: after_delimiter(question, ": ").to_string(),
                answer: after_delimiter(answer, ": ").to_string(),
            });
        }
    }

    cards
}
