use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::{prompt_for, GeneratorError, QuestionGenerator, Result};
use crate::config::GeneratorConfig;

/// Generator backed by an OpenAI-compatible `/v1/completions` endpoint
/// (llama.cpp server, vLLM, and similar).
pub struct HttpGenerator {
    client: Client,
    config: GeneratorConfig,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: String,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    top_k: u32,
    repetition_penalty: f32,
    n: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    text: String,
}

impl HttpGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn request_body(&self, topic: &str) -> CompletionRequest<'_> {
        CompletionRequest {
            model: &self.config.model,
            prompt: prompt_for(topic, self.config.question_count),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            top_k: self.config.top_k,
            repetition_penalty: self.config.repetition_penalty,
            n: 1,
        }
    }
}

impl QuestionGenerator for HttpGenerator {
    fn generate(&self, topic: &str) -> Result<String> {
        let body = self.request_body(topic);
        log::debug!("POST {} (model {})", self.config.endpoint, body.model);

        let mut request = self.client.post(&self.config.endpoint).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(GeneratorError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let completion: CompletionResponse = response.json()?;
        first_choice_text(completion)
    }
}

fn first_choice_text(completion: CompletionResponse) -> Result<String> {
    completion
        .choices
        .into_iter()
        .next()
        .map(|c| c.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or(GeneratorError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_uses_config() {
        let generator = HttpGenerator::new(GeneratorConfig::default()).unwrap();
        let body = serde_json::to_value(generator.request_body("rivers")).unwrap();

        assert_eq!(body["model"], "TinyLlama/TinyLlama-1.1B-Chat-v1.0");
        assert_eq!(body["max_tokens"], 3000);
        assert_eq!(body["top_k"], 50);
        assert_eq!(body["n"], 1);
        assert!(body["prompt"].as_str().unwrap().contains("about the topic: rivers"));
    }

    #[test]
    fn test_first_choice_text() {
        let completion: CompletionResponse =
            serde_json::from_str(r#"{"id":"cmpl-1","choices":[{"text":"Question #1: x","index":0},{"text":"other"}]}"#)
                .unwrap();
        assert_eq!(first_choice_text(completion).unwrap(), "Question #1: x");
    }

    #[test]
    fn test_empty_completion() {
        let completion: CompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(first_choice_text(completion), Err(GeneratorError::EmptyResponse)));

        let completion: CompletionResponse = serde_json::from_str(r#"{"choices":[{"text":"  \n"}]}"#).unwrap();
        assert!(matches!(first_choice_text(completion), Err(GeneratorError::EmptyResponse)));
    }
}
