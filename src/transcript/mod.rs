//! Transcript retrieval for YouTube videos.
//!
//! Provides video-ID extraction from URLs and a trait-based interface over
//! caption providers.

mod youtube;

pub use youtube::YoutubeTranscripts;

use crate::error::Result;
use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

static VIDEO_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{11}$").expect("Invalid regex"));

/// A single caption line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionEntry {
    pub text: String,
    /// Start time in seconds.
    pub start: f64,
    /// Duration in seconds.
    pub duration: f64,
}

/// Captions for one video, in playback order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub video_id: String,
    pub entries: Vec<CaptionEntry>,
}

impl Transcript {
    pub fn new(video_id: String, entries: Vec<CaptionEntry>) -> Self {
        Self { video_id, entries }
    }

    /// All caption text joined with single spaces.
    pub fn full_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Trait for transcript providers.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the transcript for a video ID.
    async fn fetch(&self, video_id: &str) -> Result<Transcript>;
}

/// Extract the video ID from a YouTube URL or a bare ID.
///
/// Accepts `youtube.com/watch?v=`, `youtu.be/`, `/embed/`, `/shorts/`,
/// `/live/` and `/v/` forms, with or without a scheme.
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();
    if VIDEO_ID.is_match(input) {
        return Some(input.to_string());
    }

    let url = if input.contains("://") {
        Url::parse(input).ok()?
    } else {
        Url::parse(&format!("https://{}", input)).ok()?
    };

    let host = url.host_str()?;
    let host = host
        .strip_prefix("www.")
        .or_else(|| host.strip_prefix("m."))
        .unwrap_or(host);

    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
    let candidate = match host {
        "youtu.be" => segments.next().map(str::to_string),
        "youtube.com" | "music.youtube.com" | "youtube-nocookie.com" => match segments.next()? {
            "watch" => url
                .query_pairs()
                .find(|(k, _)| k == "v")
                .map(|(_, v)| v.into_owned()),
            "embed" | "shorts" | "live" | "v" => segments.next().map(str::to_string),
            _ => None,
        },
        _ => None,
    }?;

    VIDEO_ID.is_match(&candidate).then_some(candidate)
}
