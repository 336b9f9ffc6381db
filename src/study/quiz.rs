//! Quiz parsing.

use super::cursor::{after_delimiter, LineCursor};
use super::QuizQuestion;
use tracing::debug;

/// Lines per question: the question, four options, one separator.
const QUIZ_STRIDE: usize = 6;
/// Lines a window needs before it is turned into a question.
const QUIZ_MIN_LINES: usize = 5;
const OPTION_LABELS: [&str; 4] = ["A. ", "B. ", "C. ", "D. "];

/// Parse raw quiz text into at most `max_questions` questions.
///
/// Expects blocks of six lines: `"1. Question"`, four options labelled
/// `A. `..`D. `, then a separator. The stride is fixed whatever the lines
/// contain; a line that does not carry the expected prefix is used as-is so
/// later questions keep their alignment. A trailing window too short to hold
/// a question and four options is dropped.
pub fn parse_quiz(raw: &str, max_questions: usize) -> Vec<QuizQuestion> {
    let mut questions = Vec::new();
    let mut cursor = LineCursor::new(raw);

    while let Some(window) = cursor.next_window(QUIZ_STRIDE) {
        if questions.len() >= max_questions {
            break;
        }
        if window.len() < QUIZ_MIN_LINES {
            debug!("Dropping incomplete trailing quiz block ({} lines)", window.len());
            break;
        }

        let options = std::array::from_fn(|i| strip_option_label(window[i + 1], OPTION_LABELS[i]));
        questions.push(QuizQuestion {
            question: after_delimiter(window[0], ". ").to_string(),
            options,
        });
    }

    questions
}

fn strip_option_label(line: &str, label: &str) -> String {
    let line = line.trim();
    line.strip_prefix(label).unwrap_or(line).to_string()
}
