//! Adapter for OpenAI-compatible chat completion APIs.
use std::time::Duration;

use serde_json::{Value, json};
use thiserror::Error;

/// Decoding configuration is fixed; there is no per-request tuning.
pub const TEMPERATURE: f64 = 0.7;
pub const MAX_OUTPUT_TOKENS: u32 = 1000;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("completion response missing message content: {0}")]
    MalformedResponse(Value),
}

/// Request a single completion for `prompt` under `system_prompt`.
/// Errors propagate immediately; there is no retry.
pub async fn completion(
    system_prompt: &str,
    prompt: &str,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<String, CompletionError> {
    let payload = json!({
        "model": model,
        "messages": [
            { "role": "system", "content": system_prompt },
            { "role": "user", "content": prompt }
        ],
        "temperature": TEMPERATURE,
        "max_tokens": MAX_OUTPUT_TOKENS
    });
    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let response: Value = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60 * 10))
        .json(&payload)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    match response["choices"][0]["message"]["content"].as_str() {
        Some(content) => Ok(content.to_string()),
        None => Err(CompletionError::MalformedResponse(response)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_completion_returns_message_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-4o",
                "temperature": 0.7,
                "max_tokens": 1000,
                "messages": [
                    { "role": "system", "content": "You are a test persona." },
                    { "role": "user", "content": "Say hi" }
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "choices": [
                        { "message": { "role": "assistant", "content": "Hi there!" } }
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let result = completion(
            "You are a test persona.",
            "Say hi",
            &server.url(),
            "test-api-key",
            "gpt-4o",
        )
        .await
        .unwrap();

        assert_eq!(result, "Hi there!");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_completion_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(500)
            .with_body("upstream exploded")
            .create_async()
            .await;

        let result = completion("sys", "prompt", &server.url(), "test-api-key", "gpt-4o").await;
        assert!(matches!(result, Err(CompletionError::Upstream(_))));
    }

    #[tokio::test]
    async fn test_completion_malformed_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "choices": [] }).to_string())
            .create_async()
            .await;

        let result = completion("sys", "prompt", &server.url(), "test-api-key", "gpt-4o").await;
        assert!(matches!(result, Err(CompletionError::MalformedResponse(_))));
    }
}
