//! YouTube caption retrieval.

use super::{CaptionEntry, Transcript, TranscriptSource};
use crate::config::TranscriptSettings;
use crate::error::{LaerError, Result};
use async_trait::async_trait;
use tracing::{debug, info, instrument};
use yt_transcript_rs::api::YouTubeTranscriptApi;

/// Fetches captions straight from YouTube.
pub struct YoutubeTranscripts {
    languages: Vec<String>,
    preserve_formatting: bool,
}

impl YoutubeTranscripts {
    pub fn new(settings: &TranscriptSettings) -> Self {
        Self {
            languages: settings.languages.clone(),
            preserve_formatting: settings.preserve_formatting,
        }
    }
}

impl Default for YoutubeTranscripts {
    fn default() -> Self {
        Self::new(&TranscriptSettings::default())
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscripts {
    #[instrument(skip(self))]
    async fn fetch(&self, video_id: &str) -> Result<Transcript> {
        debug!("Fetching captions in {:?}", self.languages);

        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| LaerError::TranscriptFetch(e.to_string()))?;

        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();
        let fetched = api
            .fetch_transcript(video_id, &languages, self.preserve_formatting)
            .await
            .map_err(|e| LaerError::TranscriptFetch(e.to_string()))?;

        let entries: Vec<CaptionEntry> = fetched
            .snippets
            .into_iter()
            .map(|s| CaptionEntry {
                text: s.text,
                start: s.start,
                duration: s.duration,
            })
            .collect();

        info!("Fetched {} caption entries for {}", entries.len(), video_id);
        Ok(Transcript::new(video_id.to_string(), entries))
    }
}
