//! Prompt templates for Laer.
//!
//! Prompts can be customized by placing a `study.toml` file in the custom prompts directory.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Prompts {
    pub study: StudyPrompts,
    /// Custom variables from config, available in all prompts.
    #[serde(skip)]
    pub variables: HashMap<String, String>,
}

/// Prompts for the three study artifacts.
///
/// Available variables: `{{transcript}}`, `{{num_questions}}` (quiz),
/// `{{num_flashcards}}` (flashcards).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyPrompts {
    pub summary: String,
    pub quiz: String,
    pub flashcards: String,
}

impl Default for StudyPrompts {
    fn default() -> Self {
        Self {
            summary: "Summarize this transcript in a concise paragraph: {{transcript}}".to_string(),

            quiz: "Generate {{num_questions}} multiple-choice quiz questions based on this transcript. \
                   For each question, provide 4 options and indicate the correct answer: {{transcript}}"
                .to_string(),

            flashcards: "Generate {{num_flashcards}} flashcards based on this transcript. \
                         For each flashcard, provide a question and its answer: {{transcript}}"
                .to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts from the default location, with optional custom directory and variables.
    pub fn load(
        custom_dir: Option<&str>,
        custom_variables: Option<&HashMap<String, String>>,
    ) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(vars) = custom_variables {
            prompts.variables = vars.clone();
        }

        if let Some(dir) = custom_dir {
            let custom_path = super::Settings::expand_path(dir);

            let study_path = custom_path.join("study.toml");
            if study_path.exists() {
                let content = std::fs::read_to_string(&study_path)?;
                prompts.study = toml::from_str(&content)?;
            }
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    ///
    /// Substitution is a single left-to-right pass, so placeholder-like text
    /// inside a substituted value (a transcript, say) is never expanded again.
    /// Unknown placeholders are left untouched.
    pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            result.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => {
                    let key = &after[..end];
                    match vars.get(key) {
                        Some(value) => result.push_str(value),
                        None => {
                            result.push_str("{{");
                            result.push_str(key);
                            result.push_str("}}");
                        }
                    }
                    rest = &after[end + 2..];
                }
                None => {
                    result.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        result.push_str(rest);
        result
    }

    /// Render a prompt template with both provided variables and custom config variables.
    /// Provided variables take precedence over custom config variables.
    pub fn render_with_custom(&self, template: &str, vars: &HashMap<String, String>) -> String {
        let mut merged = self.variables.clone();
        for (key, value) in vars {
            merged.insert(key.clone(), value.clone());
        }
        Self::render(template, &merged)
    }
}
