/**
 * AI Suggestion Client
 *
 * This module wraps the outbound call to an OpenAI-style
 * chat-completions endpoint. It builds a fixed two-message exchange
 * (system instructions embedding the current document text, plus the
 * user's instruction) and returns the first completion's text.
 *
 * # Error Handling
 *
 * Transport failures, non-success statuses, and malformed responses all
 * surface as a typed `ApiError::AiProvider` so the API layer can return
 * a distinguishable 502 instead of handing error text to the editor as
 * if it were a suggestion.
 *
 * # Timeouts
 *
 * The request timeout comes from configuration (`AI_TIMEOUT_SECS`); a
 * slow provider fails the request rather than stalling it indefinitely.
 */

use crate::error::ApiError;
use crate::server::config::Config;

/// Client for the external completion service
#[derive(Debug, Clone)]
pub struct SuggestionClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl SuggestionClient {
    /// Build a client from server configuration
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.ai_timeout)
            .build()?;

        Ok(Self {
            http,
            api_url: config.openai_api_url.clone(),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
        })
    }

    /// Request a suggestion for the given document text and instruction
    ///
    /// # Arguments
    /// * `current_text` - The document as the editor currently sees it
    /// * `user_prompt` - The user's instruction to the assistant
    ///
    /// # Returns
    /// The first completion's text, unmodified
    pub async fn suggest(&self, current_text: &str, user_prompt: &str) -> Result<String, ApiError> {
        let system_prompt = build_system_prompt(current_text);

        let response = self
            .http
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": system_prompt},
                    {"role": "user", "content": user_prompt},
                ],
            }))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("AI provider request failed: {:?}", e);
                ApiError::ai_provider(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error = response.text().await.unwrap_or_default();
            tracing::error!("AI provider returned {}: {}", status, error);
            return Err(ApiError::ai_provider(format!("API error ({status}): {error}")));
        }

        let result: serde_json::Value = response.json().await.map_err(|e| {
            tracing::error!("AI provider response was not valid JSON: {:?}", e);
            ApiError::ai_provider(e.to_string())
        })?;

        let content = result["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                tracing::error!("AI provider response missing completion text");
                ApiError::ai_provider("response contained no completion text")
            })?;

        Ok(content.to_string())
    }
}

/// Build the fixed instructional template embedding the document text
fn build_system_prompt(current_text: &str) -> String {
    format!(
        "You are an expert AI assistant for document editing.\n\
         The user is currently working on a document.\n\
         The current content of the document is:\n\
         ---\n\
         {current_text}\n\
         ---\n\
         Please provide a helpful response to the user's prompt, \
         which you can then insert into the document."
    )
}
