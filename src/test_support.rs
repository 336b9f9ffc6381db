use crate::completion::{Completion, CompletionClient};
use crate::error::{LaerError, Result};
use crate::transcript::{CaptionEntry, Transcript, TranscriptSource};
use async_trait::async_trait;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Mutex;

/// Serve `router` on an ephemeral local port.
pub async fn spawn_server(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Completion client answering each task with canned text.
pub struct ScriptedCompletion {
    summary: Completion,
    quiz: Completion,
    flashcards: Completion,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedCompletion {
    pub fn new(summary: Completion, quiz: Completion, flashcards: Completion) -> Self {
        Self {
            summary,
            quiz,
            flashcards,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn text(summary: &str, quiz: &str, flashcards: &str) -> Self {
        Self::new(
            Completion::Text(summary.to_string()),
            Completion::Text(quiz.to_string()),
            Completion::Text(flashcards.to_string()),
        )
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedCompletion {
    async fn generate(&self, prompt: &str) -> Completion {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if prompt.starts_with("Summarize") {
            self.summary.clone()
        } else if prompt.contains("multiple-choice") {
            self.quiz.clone()
        } else {
            self.flashcards.clone()
        }
    }
}

/// Transcript source returning one fixed transcript, or failing.
pub struct StaticTranscripts {
    text: Option<String>,
    fetched: Mutex<Vec<String>>,
}

impl StaticTranscripts {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            fetched: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            text: None,
            fetched: Mutex::new(Vec::new()),
        }
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranscriptSource for StaticTranscripts {
    async fn fetch(&self, video_id: &str) -> Result<Transcript> {
        self.fetched.lock().unwrap().push(video_id.to_string());
        match &self.text {
            Some(text) => Ok(Transcript::new(
                video_id.to_string(),
                vec![CaptionEntry {
                    text: text.clone(),
                    start: 0.0,
                    duration: 1.0,
                }],
            )),
            None => Err(LaerError::TranscriptFetch(
                "Subtitles are disabled for this video".to_string(),
            )),
        }
    }
}
