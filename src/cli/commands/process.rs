//! Process command - build a study pack for one video from the terminal.

use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use crate::study::StudyPack;
use anyhow::Result;
use console::style;
use std::fmt::Write;

/// Output format for the process command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Run the process command.
pub async fn run_process(
    video_url: &str,
    num_questions: Option<i64>,
    format: &str,
    settings: Settings,
) -> Result<()> {
    let format: OutputFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let num_questions = num_questions.unwrap_or(settings.study.default_questions);
    let orchestrator = Orchestrator::new(&settings)?;

    let spinner = Output::spinner("Generating summary, quiz and flashcards...");
    let result = orchestrator.process_video(video_url, num_questions).await;
    spinner.finish_and_clear();

    let pack = result?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&pack)?),
        OutputFormat::Text => {
            Output::header("Summary");
            println!("{}", pack.summary);
            print!("{}", render_text(&pack));
        }
    }

    if (pack.quiz.len() as i64) < num_questions {
        Output::warning(&format!(
            "Only {} of {} requested questions could be parsed.",
            pack.quiz.len(),
            num_questions
        ));
    }

    Ok(())
}

/// Render the quiz and flashcards as plain numbered text.
fn render_text(pack: &StudyPack) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", style("Quiz").bold().underlined());
    for (i, q) in pack.quiz.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, q.question);
        for (label, option) in ['A', 'B', 'C', 'D'].iter().zip(&q.options) {
            let _ = writeln!(out, "   {}. {}", label, option);
        }
    }

    let _ = writeln!(out, "\n{}", style("Flashcards").bold().underlined());
    for card in &pack.flashcards {
        let _ = writeln!(out, "  Q: {}", card.question);
        let _ = writeln!(out, "  A: {}", card.answer);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study::{Flashcard, QuizQuestion};

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_text_lists_quiz_and_cards() {
        console::set_colors_enabled(false);
        let pack = StudyPack {
            summary: "s".to_string(),
            quiz: vec![QuizQuestion {
                question: "What are cats?".to_string(),
                options: ["Mammals", "Reptiles", "Birds", "Fish"].map(str::to_string),
            }],
            flashcards: vec![Flashcard {
                question: "What is H2O?".to_string(),
                answer: "Water".to_string(),
            }],
        };

        let text = render_text(&pack);
        assert!(text.contains("1. What are cats?\n   A. Mammals\n   B. Reptiles\n   C. Birds\n   D. Fish\n"));
        assert!(text.contains("  Q: What is H2O?\n  A: Water\n"));
    }
}
