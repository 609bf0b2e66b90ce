//! Gemini API client for the generateContent endpoint

use std::time::Duration;

use serde::{Deserialize, Serialize};

const API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Upper bound on one generateContent exchange.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Gemini generateContent API
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

/// A content block in the request or response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// A single text part within a content block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Request body for generateContent
#[derive(Serialize)]
struct ApiRequest {
    contents: Vec<Content>,
}

/// Response from generateContent
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One completion candidate
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

impl GeminiClient {
    /// Create a new client with the given API key
    pub fn new(api_key: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Send a prompt and return the completion text.
    ///
    /// One attempt, no retries. Transport failures, non-200 statuses and
    /// unexpected response shapes all surface as errors for the caller
    /// to recover from.
    pub async fn generate(&self, prompt: &str) -> Result<String, String> {
        let request = ApiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let url = format!(
            "{}/{}:generateContent?key={}",
            API_URL, self.model, self.api_key
        );

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("HTTP request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Gemini API error ({}): {}", status, body));
        }

        let response = response
            .json::<ApiResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        extract_text(&response)
    }
}

/// Extract the first candidate's first text part
fn extract_text(response: &ApiResponse) -> Result<String, String> {
    response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .ok_or_else(|| "No text content in response".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_candidate_text() {
        let response: ApiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Disease: Flu"}]}}]}"#,
        )
        .expect("valid response json");

        assert_eq!(extract_text(&response).as_deref(), Ok("Disease: Flu"));
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let response: ApiResponse =
            serde_json::from_str(r#"{"candidates":[]}"#).expect("valid response json");
        assert!(extract_text(&response).is_err());
    }

    #[test]
    fn missing_candidates_field_is_tolerated_then_rejected() {
        let response: ApiResponse = serde_json::from_str("{}").expect("valid response json");
        assert!(extract_text(&response).is_err());
    }
}
