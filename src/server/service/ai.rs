//! LLM provider client for the optional meal suggestion features.
//!
//! Thin typed client for an OpenAI-compatible API: chat completions for meal
//! suggestions and descriptions, and an image generation endpoint for meal
//! photos. The whole feature is optional; without an API key in the
//! configuration no client is constructed and the routes answer 503.

use serde::{Deserialize, Serialize};

use crate::server::{config::Config, error::AppError};

const CHAT_MODEL: &str = "gpt-4o-mini";
const IMAGE_MODEL: &str = "dall-e-3";
const IMAGE_SIZE: &str = "1024x1024";

const SUGGEST_SYSTEM_PROMPT: &str = "You suggest dishes for a workplace communal meal. \
    Respond with a JSON object of the shape {\"title\": string, \"description\": string} \
    and nothing else. The description is 2-3 sentences, appetizing but factual.";

const DESCRIBE_SYSTEM_PROMPT: &str = "You write short menu descriptions for workplace \
    communal meals. Respond with 2-3 appetizing but factual sentences describing the \
    dish you are given. Respond with the description only.";

/// Chat completion request structure.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Chat completion response structure.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Image generation request structure.
#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    prompt: String,
    n: u8,
    size: &'a str,
}

/// Image generation response structure.
#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: String,
}

/// An AI-proposed meal.
#[derive(Debug, Clone, Deserialize)]
pub struct MealSuggestion {
    pub title: String,
    pub description: String,
}

/// Client for the LLM text/image provider.
#[derive(Clone)]
pub struct AiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AiClient {
    /// Builds the client when an API key is configured.
    ///
    /// # Returns
    /// - `Some(AiClient)` - Both API URL and key are present
    /// - `None` - Feature disabled
    pub fn from_config(http: reqwest::Client, config: &Config) -> Option<Self> {
        let base_url = config.ai_api_url.clone()?;
        let api_key = config.ai_api_key.clone()?;

        Some(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Asks the model to propose a meal for the given constraints.
    ///
    /// # Returns
    /// - `Ok(MealSuggestion)` - Parsed title and description
    /// - `Err(AppError)` - Provider failure or a response outside the requested shape
    pub async fn suggest_meal(&self, prompt: &str) -> Result<MealSuggestion, AppError> {
        let content = self.chat(SUGGEST_SYSTEM_PROMPT, prompt).await?;

        let suggestion = serde_json::from_str(content.trim()).map_err(|e| {
            AppError::InternalError(format!("AI returned malformed suggestion JSON: {}", e))
        })?;

        Ok(suggestion)
    }

    /// Asks the model for a menu description of an existing title.
    pub async fn generate_description(&self, title: &str) -> Result<String, AppError> {
        let content = self.chat(DESCRIBE_SYSTEM_PROMPT, title).await?;
        Ok(content.trim().to_string())
    }

    /// Asks the image model for a photo of the dish.
    ///
    /// # Returns
    /// - `Ok(String)` - Provider-hosted URL of the generated image
    /// - `Err(AppError)` - Provider failure or empty response
    pub async fn generate_image(&self, title: &str) -> Result<String, AppError> {
        let request = ImageRequest {
            model: IMAGE_MODEL,
            prompt: format!("An appetizing photo of {}, served in a workplace canteen", title),
            n: 1,
            size: IMAGE_SIZE,
        };

        let response: ImageResponse = self
            .http
            .post(format!("{}/images/generations", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let image = response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| AppError::InternalError("AI returned no image".to_string()))?;

        Ok(image.url)
    }

    /// Runs one system+user chat completion and returns the assistant content.
    async fn chat(&self, system: &str, user: &str) -> Result<String, AppError> {
        let request = ChatRequest {
            model: CHAT_MODEL,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
        };

        let response: ChatResponse = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::InternalError("AI returned no choices".to_string()))?;

        Ok(choice.message.content)
    }
}
