//! Configuration settings for Laer.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub completion: CompletionSettings,
    pub transcript: TranscriptSettings,
    pub study: StudySettings,
    pub server: ServerSettings,
    pub prompts: PromptSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Completion service settings.
///
/// `api_url` and `api_key` have no usable defaults; both must come from the
/// config file or the environment before the service can start.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionSettings {
    /// Full URL of the generate-content endpoint.
    pub api_url: Option<String>,
    /// Bearer token sent with every request.
    pub api_key: Option<String>,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            api_url: None,
            api_key: None,
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
            timeout_secs: 120,
        }
    }
}

/// Transcript retrieval settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSettings {
    /// Preferred caption languages, in order.
    pub languages: Vec<String>,
    /// Keep caption formatting markup.
    pub preserve_formatting: bool,
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            languages: vec!["en".to_string()],
            preserve_formatting: false,
        }
    }
}

/// Study artifact settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StudySettings {
    /// Quiz size used when a request does not name one.
    pub default_questions: i64,
}

impl Default for StudySettings {
    fn default() -> Self {
        Self {
            default_questions: 5,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Prompt customization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PromptSettings {
    /// Directory for custom prompts (overrides defaults).
    pub custom_dir: Option<String>,
    /// Custom variables available in all prompts as {{variable_name}}.
    pub variables: std::collections::HashMap<String, String>,
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Apply endpoint and token overrides (from flags or environment).
    pub fn with_overrides(mut self, api_url: Option<String>, api_key: Option<String>) -> Self {
        if api_url.is_some() {
            self.completion.api_url = api_url;
        }
        if api_key.is_some() {
            self.completion.api_key = api_key;
        }
        self
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("laer")
            .join("config.toml")
    }

    /// The config file in effect: an explicit path (with `~` expanded) or the default.
    pub fn resolve_config_path(explicit: Option<&str>) -> PathBuf {
        match explicit {
            Some(path) => Self::expand_path(path),
            None => Self::default_config_path(),
        }
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Serialize to TOML with the API key masked.
    pub fn to_redacted_toml(&self) -> crate::error::Result<String> {
        let mut redacted = self.clone();
        if redacted.completion.api_key.is_some() {
            redacted.completion.api_key = Some("********".to_string());
        }
        toml::to_string_pretty(&redacted)
            .map_err(|e| crate::error::LaerError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_resolve_config_path_prefers_explicit_file() {
        assert_eq!(
            Settings::resolve_config_path(Some("/tmp/laer-alt.toml")),
            PathBuf::from("/tmp/laer-alt.toml")
        );
        assert_eq!(Settings::resolve_config_path(None), Settings::default_config_path());

        let expanded = Settings::resolve_config_path(Some("~/laer.toml"));
        assert!(!expanded.starts_with("~"));
        assert!(expanded.ends_with("laer.toml"));
    }

    #[test]
    fn test_defaults_match_generation_parameters() {
        let settings = Settings::default();
        assert_eq!(settings.completion.temperature, 0.7);
        assert_eq!(settings.completion.top_k, 40);
        assert_eq!(settings.completion.top_p, 0.95);
        assert_eq!(settings.completion.max_output_tokens, 1024);
        assert_eq!(settings.transcript.languages, vec!["en".to_string()]);
        assert!(settings.completion.api_key.is_none());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[completion]\napi_url = \"http://localhost:9000/generate\"\n\n[server]\nport = 8080"
        )
        .unwrap();

        let settings = Settings::load_from(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(
            settings.completion.api_url.as_deref(),
            Some("http://localhost:9000/generate")
        );
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.completion.top_k, 40);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let settings = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(settings.study.default_questions, 5);
    }

    #[test]
    fn test_overrides_only_replace_given_values() {
        let settings = Settings::default()
            .with_overrides(Some("http://x".to_string()), None)
            .with_overrides(None, Some("secret".to_string()));
        assert_eq!(settings.completion.api_url.as_deref(), Some("http://x"));
        assert_eq!(settings.completion.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_redacted_toml_hides_key() {
        let settings = Settings::default().with_overrides(None, Some("secret".to_string()));
        let rendered = settings.to_redacted_toml().unwrap();
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("********"));
    }
}
