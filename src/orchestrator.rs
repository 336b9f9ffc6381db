//! Pipeline orchestrator for Laer.
//!
//! Coordinates transcript retrieval, prompt construction, completion and parsing.

use crate::completion::{CompletionClient, CompletionConfig, GeminiClient};
use crate::config::{Prompts, Settings};
use crate::error::{LaerError, Result};
use crate::study::{parse_flashcards, parse_quiz, Flashcard, PromptBuilder, QuizQuestion, StudyPack};
use crate::transcript::{extract_video_id, TranscriptSource, YoutubeTranscripts};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// The main orchestrator for the Laer pipeline.
pub struct Orchestrator {
    completion: Arc<dyn CompletionClient>,
    transcripts: Arc<dyn TranscriptSource>,
    prompts: PromptBuilder,
}

impl Orchestrator {
    /// Create an orchestrator from settings.
    ///
    /// Fails if the completion endpoint or API key is not configured.
    pub fn new(settings: &Settings) -> Result<Self> {
        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;

        let config = CompletionConfig::from_settings(&settings.completion)?;
        info!("Using completion endpoint {}", config.api_url);
        let completion: Arc<dyn CompletionClient> = Arc::new(GeminiClient::new(config)?);

        let transcripts: Arc<dyn TranscriptSource> =
            Arc::new(YoutubeTranscripts::new(&settings.transcript));

        Ok(Self::with_components(completion, transcripts, PromptBuilder::new(prompts)))
    }

    /// Create an orchestrator with custom components.
    pub fn with_components(
        completion: Arc<dyn CompletionClient>,
        transcripts: Arc<dyn TranscriptSource>,
        prompts: PromptBuilder,
    ) -> Self {
        Self {
            completion,
            transcripts,
            prompts,
        }
    }

    /// Resolve a video URL, fetch its transcript and build the study pack.
    ///
    /// URL and transcript errors are returned before any completion call is made.
    #[instrument(skip(self))]
    pub async fn process_video(&self, video_url: &str, num_questions: i64) -> Result<StudyPack> {
        let video_id = extract_video_id(video_url)
            .ok_or_else(|| LaerError::InvalidVideoUrl(video_url.to_string()))?;

        info!("Fetching transcript for {}", video_id);
        let transcript = self.transcripts.fetch(&video_id).await?;

        Ok(self.run(&transcript.full_text(), num_questions).await)
    }

    /// Generate summary, quiz and flashcards for a flattened transcript.
    ///
    /// The three generations run concurrently and never abort one another; a
    /// failed completion degrades only its own artifact. `num_questions` goes
    /// into the quiz prompt as given; a count below one yields an empty quiz.
    #[instrument(skip(self, transcript), fields(transcript_chars = transcript.chars().count()))]
    pub async fn run(&self, transcript: &str, num_questions: i64) -> StudyPack {
        let (summary, quiz, flashcards) = tokio::join!(
            self.summary(transcript),
            self.quiz(transcript, num_questions),
            self.flashcards(transcript),
        );

        info!(
            "Generated study pack: {} questions, {} flashcards",
            quiz.len(),
            flashcards.len()
        );

        StudyPack {
            summary,
            quiz,
            flashcards,
        }
    }

    async fn summary(&self, transcript: &str) -> String {
        let completion = self.completion.generate(&self.prompts.summary(transcript)).await;
        if completion.is_failed() {
            warn!("Summary generation failed");
        }
        completion.into_text()
    }

    async fn quiz(&self, transcript: &str, num_questions: i64) -> Vec<QuizQuestion> {
        let completion = self
            .completion
            .generate(&self.prompts.quiz(transcript, num_questions))
            .await;
        if completion.is_failed() {
            warn!("Quiz generation failed");
        }
        let max_questions = usize::try_from(num_questions).unwrap_or(0);
        let quiz = parse_quiz(completion.text(), max_questions);
        if quiz.len() < max_questions {
            warn!("Model produced {} of {} requested questions", quiz.len(), max_questions);
        }
        quiz
    }

    async fn flashcards(&self, transcript: &str) -> Vec<Flashcard> {
        let completion = self.completion.generate(&self.prompts.flashcards(transcript)).await;
        if completion.is_failed() {
            warn!("Flashcard generation failed");
        }
        parse_flashcards(completion.text())
    }
}
