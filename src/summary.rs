//! File summaries — remote chat-completion or deterministic stub.
//!
//! The implementation is chosen once at startup from `SummaryConfig`;
//! call sites never consult the environment.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::json;
use std::path::Path;

/// Where summaries come from for this run.
pub trait Summarize {
    /// Produce a one-line summary for the file at `path` with contents `text`.
    fn summarize(&self, path: &Path, text: &str) -> Result<String>;
}

/// Summary provider settings, resolved once in `main`.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl SummaryConfig {
    /// Read provider settings from the environment. A missing or empty
    /// `OPENAI_API_KEY` silently selects the stub path.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
        }
    }
}

/// Build the summarizer for this run: remote when a key is configured,
/// stub otherwise.
pub fn create_summarizer(config: &SummaryConfig) -> Box<dyn Summarize> {
    match &config.api_key {
        Some(key) => Box::new(RemoteSummarizer {
            client: reqwest::blocking::Client::new(),
            api_key: key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
        }),
        None => Box::new(StubSummarizer),
    }
}

/// Deterministic fallback: a fixed phrase built from the file name.
pub struct StubSummarizer;

impl Summarize for StubSummarizer {
    fn summarize(&self, path: &Path, _text: &str) -> Result<String> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(format!("Auto generated summary for {}.", filename))
    }
}

/// Sends the full file text to an OpenAI-compatible chat-completion
/// endpoint and returns the trimmed first-choice content.
///
/// Blocking, single attempt, transport-default timeout. Any transport,
/// auth, or response-shape failure propagates and aborts the run.
pub struct RemoteSummarizer {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

impl Summarize for RemoteSummarizer {
    fn summarize(&self, path: &Path, text: &str) -> Result<String> {
        let body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": "Summarize the following Python file in one sentence.",
                },
                { "role": "user", "content": text },
            ],
        });

        let response: ChatResponse = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .with_context(|| format!("summary request failed for {}", path.display()))?
            .error_for_status()
            .context("summary request rejected by provider")?
            .json()
            .context("malformed summary response")?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("summary response contained no choices"))?;
        Ok(choice.message.content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_summary_uses_filename() {
        let summary = StubSummarizer
            .summarize(Path::new("pkg/views.py"), "def f():\n    pass\n")
            .unwrap();
        assert_eq!(summary, "Auto generated summary for views.py.");
    }

    #[test]
    fn stub_summary_ignores_content() {
        let a = StubSummarizer.summarize(Path::new("a.py"), "x = 1\n").unwrap();
        let b = StubSummarizer.summarize(Path::new("a.py"), "y = 2\n").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_key_selects_stub() {
        let config = SummaryConfig {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
        };
        let summarizer = create_summarizer(&config);
        let summary = summarizer.summarize(Path::new("a.py"), "").unwrap();
        assert_eq!(summary, "Auto generated summary for a.py.");
    }
}
