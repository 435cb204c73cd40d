/**
 * AI Analysis Client
 *
 * A thin pass-through client for an OpenAI-compatible chat completion API.
 * The prompt asks for a strict JSON object describing the feasibility of a
 * project requirement; the reply content is parsed as that JSON and relayed
 * verbatim. Nothing is persisted.
 */
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::server::config::AiConfig;

/// Feasibility analysis produced per request, returned directly to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    pub feasibility: String,
    pub tech_stack: Vec<String>,
    pub timeline: String,
    pub suggestions: Vec<String>,
}

/// Errors from the analysis call
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No API key was configured at startup
    #[error("analysis service is not configured")]
    NotConfigured,

    /// The completion request failed or returned a non-success status
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The completion response carried no content
    #[error("completion response contained no content")]
    EmptyResponse,

    /// The completion content was not the expected JSON shape
    #[error("completion content was not the expected JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize, Debug)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChatChoiceMessage {
    content: Option<String>,
}

const SYSTEM_PROMPT: &str = "You are a professional technical consultant who analyzes \
project requirements and gives expert advice. Always return the analysis as JSON.";

fn build_prompt(title: &str, description: &str) -> String {
    format!(
        r#"Analyze the following project requirement and provide detailed advice.

Project title: {title}
Project description: {description}

Provide the following:
1. A feasibility analysis of the project
2. A recommended technology stack
3. An estimated development timeline
4. Concrete suggestions and caveats

Return the result as JSON with these fields:
- feasibility: feasibility analysis (string)
- techStack: recommended technologies (array of strings)
- timeline: estimated development timeline (string)
- suggestions: concrete suggestions (array of strings)

Example:
{{
  "feasibility": "Feasible",
  "techStack": ["React", "Next.js", "Tailwind CSS"],
  "timeline": "2 weeks",
  "suggestions": ["Use the Next.js framework", "Style with Tailwind CSS"]
}}
"#
    )
}

/// Client for the configured completion endpoint
#[derive(Clone)]
pub struct AnalysisClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl AnalysisClient {
    pub fn new(config: &AiConfig) -> Self {
        AnalysisClient {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Request a feasibility analysis for a requirement.
    ///
    /// # Errors
    ///
    /// Any upstream failure (transport, non-success status, missing or
    /// unparseable content) surfaces as an `AnalysisError`; the handler
    /// collapses them all to a generic 500.
    pub async fn analyze(
        &self,
        title: &str,
        description: &str,
    ) -> Result<AiAnalysis, AnalysisError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_prompt(title, description),
                },
            ],
            temperature: 0.7,
            max_tokens: 1000,
        };

        tracing::debug!("requesting analysis from {} ({})", self.base_url, self.model);

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(AnalysisError::EmptyResponse)?;

        let analysis = serde_json::from_str(&content)?;

        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server_uri: &str) -> AnalysisClient {
        AnalysisClient::new(&AiConfig {
            base_url: server_uri.to_string(),
            api_key: "test-key".to_string(),
            model: "gpt-4o-mini".to_string(),
        })
    }

    fn completion_body(content: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })
    }

    #[tokio::test]
    async fn test_analyze_parses_completion_json() {
        let server = MockServer::start().await;
        let content = serde_json::json!({
            "feasibility": "Feasible",
            "techStack": ["Rust", "axum"],
            "timeline": "2 weeks",
            "suggestions": ["Start with the data model"]
        })
        .to_string();

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(
                serde_json::json!({"model": "gpt-4o-mini"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(&content)))
            .mount(&server)
            .await;

        let analysis = client_for(&server.uri())
            .analyze("A requirements marketplace", "A place to post requirements")
            .await
            .unwrap();

        assert_eq!(analysis.feasibility, "Feasible");
        assert_eq!(analysis.tech_stack, vec!["Rust", "axum"]);
        assert_eq!(analysis.timeline, "2 weeks");
        assert_eq!(analysis.suggestions.len(), 1);
    }

    #[tokio::test]
    async fn test_analyze_rejects_non_json_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(completion_body("sorry, no JSON today")),
            )
            .mount(&server)
            .await;

        let err = client_for(&server.uri())
            .analyze("title", "description")
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::Parse(_)));
    }

    #[tokio::test]
    async fn test_analyze_surfaces_upstream_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server.uri())
            .analyze("title", "description")
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::Request(_)));
    }

    #[tokio::test]
    async fn test_analyze_handles_empty_choices() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server.uri())
            .analyze("title", "description")
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::EmptyResponse));
    }

    #[test]
    fn test_prompt_mentions_both_fields() {
        let prompt = build_prompt("My title", "My description");
        assert!(prompt.contains("My title"));
        assert!(prompt.contains("My description"));
        assert!(prompt.contains("techStack"));
    }
}
