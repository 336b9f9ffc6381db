//! Configuration module for Laer.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{Prompts, StudyPrompts};
pub use settings::{
    CompletionSettings, GeneralSettings, PromptSettings, ServerSettings, Settings,
    StudySettings, TranscriptSettings,
};
