//! HTTP client for a Gemini-style `generateContent` endpoint.
//!
//! The client asks the model for structured dish suggestions: the request
//! carries a JSON response schema, and the reply's text part is itself a
//! JSON array of suggestions.

use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Errors from the HTTP layer, one variant per failure class.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Cannot reach the generative endpoint.
    #[error("cannot connect to generative endpoint at {0}")]
    ConnectionFailed(String),
    /// 401/403 — invalid or missing API key.
    #[error("unauthorized: invalid or missing API key")]
    Unauthorized,
    /// 429 Too Many Requests.
    #[error("rate limited: too many requests")]
    RateLimited,
    /// Server returned a 5xx error.
    #[error("server error ({0}): {1}")]
    ServerError(u16, String),
    /// Failed to parse the response body or the model's JSON payload.
    #[error("parse error: {0}")]
    Parse(String),
}

/// One structured suggestion from the model.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Suggestion {
    pub name: String,
    pub description: String,
    /// Price in currency units; the schema asks the model for 10–30.
    pub price: f64,
    pub calories: Option<u32>,
    pub category: String,
    /// Single keyword used to source an image for the dish.
    #[serde(rename = "imageKeyword")]
    pub image_keyword: String,
}

/// HTTP client that wraps `generateContent` calls.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com";

    pub fn new(
        base_url: String,
        model: String,
        api_key: String,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            model,
            api_key,
        }
    }

    /// Ask for dish suggestions matching a craving query.
    pub async fn suggest_dishes(&self, query: &str) -> Result<Vec<Suggestion>, ClientError> {
        let body = request_body(query);
        let response = self.generate(&body).await?;
        parse_suggestions(&response)
    }

    /// POST one `generateContent` request and return the raw JSON body.
    async fn generate(&self, body: &Value) -> Result<Value, ClientError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::ConnectionFailed(format!("{}: {e}", self.base_url)))?;
        self.handle_response(resp).await
    }

    /// Check status codes and parse the JSON body.
    async fn handle_response(&self, resp: reqwest::Response) -> Result<Value, ClientError> {
        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(ClientError::Unauthorized);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ClientError::RateLimited);
        }
        if status.is_server_error() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::ServerError(status.as_u16(), body));
        }
        resp.json::<Value>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

/// Build the `generateContent` request for a craving query.
fn request_body(query: &str) -> Value {
    let prompt = format!(
        "Suggest 5 distinct and delicious food dishes based on this craving: \"{query}\". \
         Make them sound appetizing. Return a JSON array."
    );
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "price": {
                            "type": "NUMBER",
                            "description": "Price in USD, between 10 and 30"
                        },
                        "calories": { "type": "NUMBER" },
                        "category": {
                            "type": "STRING",
                            "description": "e.g., Italian, Mexican, etc."
                        },
                        "imageKeyword": {
                            "type": "STRING",
                            "description": "A single keyword to search for an image, e.g., 'pizza', 'burger'"
                        }
                    },
                    "required": ["name", "description", "price", "category", "imageKeyword"]
                }
            }
        }
    })
}

/// Extract the model's text part and parse it as a suggestion array.
fn parse_suggestions(body: &Value) -> Result<Vec<Suggestion>, ClientError> {
    let text = body
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .ok_or_else(|| ClientError::Parse("response has no text part".to_string()))?;
    serde_json::from_str(text).map_err(|e| ClientError::Parse(e.to_string()))
}
