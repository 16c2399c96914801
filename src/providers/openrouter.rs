use async_trait::async_trait;
use log::{debug, error, trace};
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::Error;
use super::{CompletionBackend, CompletionRequest};

// ===== Wire Types =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   #[serde(default)]
    pub role: String
  , pub content: String
}

impl ChatMessage
{   pub fn system(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "system".to_string()
          , content: content.into()
        }
    }

    pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "user".to_string()
          , content: content.into()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub temperature: f32
  , pub max_tokens: usize
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ChatMessage
  , #[serde(default)]
    pub finish_reason: Option<String>
}

// ===== Classification =====

/// Map a transport-level failure onto the error taxonomy.
/// Timeouts win over connection errors, a connect timeout is a timeout.
pub fn classify_transport(
  err: &reqwest::Error
, timeout_secs: u64
) -> Error
{   if err.is_timeout()
    {   Error::Timeout { secs: timeout_secs }
    } else if err.is_connect()
    {   Error::Connection
    } else
    {   Error::Transport(err.to_string())
    }
}

/// Map a non-200 status onto the error taxonomy.
pub fn classify_status(status: u16, body: &str) -> Error
{   match status
    {   401 => Error::InvalidApiKey
      , 402 => Error::InsufficientCredits
      , 429 => Error::RateLimited
      , _ => Error::upstream(status, body)
    }
}

/// Pull `choices[0].message.content` out of a 200 body.
pub fn extract_content(body: &str) -> Result<String, Error>
{   let parsed: ChatResponse = serde_json::from_str(body)
      .map_err(|e| {
        debug!("Response did not match chat shape: {}", e);
        Error::malformed(body)
      })?;

    parsed.choices
      .into_iter()
      .next()
      .map(|c| {
        trace!("finish_reason: {:?}", c.finish_reason);
        c.message.content
      })
      .ok_or_else(|| Error::malformed(body))
}

// ===== Client =====

/// Chat-completion client for the OpenRouter API.
///
/// Holds no credentials; the key travels with each request.
#[derive(Debug, Clone)]
pub struct OpenRouterClient
{   config: ClientConfig
  , http_client: reqwest::Client
}

impl OpenRouterClient
{   pub fn new(config: ClientConfig) -> Result<Self, Error>
    {   debug!(
          "Creating OpenRouterClient for {} ({}s timeout)",
          config.endpoint(),
          config.timeout_secs
        );
        let http_client = reqwest::Client::builder()
          .timeout(config.timeout())
          .build()
          .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(OpenRouterClient
        {   config
          , http_client
        })
    }

    pub fn config(&self) -> &ClientConfig
    {   &self.config
    }

    /// Send one chat completion and return the reply text.
    pub async fn call_completion(
      &self
    , api_key: &str
    , model: &str
    , system_prompt: &str
    , user_message: &str
    , temperature: f32
    ) -> Result<String, Error>
    {   let request = ChatRequest
        {   model: model.to_string()
          , messages: vec![
              ChatMessage::system(system_prompt)
            , ChatMessage::user(user_message)
            ]
          , temperature
          , max_tokens: self.config.max_tokens
        };

        debug!(
          "Sending completion to {} (model {}, temperature {})",
          self.config.endpoint(), model, temperature
        );
        trace!("User message: {}", user_message);

        let timeout_secs = self.config.timeout_secs;
        let response = self.http_client
          .post(self.config.endpoint())
          .header("Authorization", format!("Bearer {}", api_key))
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("OpenRouter request failed: {}", e);
            classify_transport(&e, timeout_secs)
          })?;

        let status = response.status().as_u16();
        trace!("OpenRouter response status: {}", status);

        let body = response.text().await.map_err(|e| {
          error!("Failed to read OpenRouter body: {}", e);
          classify_transport(&e, timeout_secs)
        })?;

        if status != 200
        {   error!("OpenRouter returned HTTP {}", status);
            return Err(classify_status(status, &body));
        }

        let content = extract_content(&body).map_err(|e| {
          error!("Unexpected OpenRouter response shape");
          e
        })?;
        debug!("Received {} chars of completion", content.len());
        Ok(content)
    }
}

#[async_trait]
impl CompletionBackend for OpenRouterClient
{   async fn complete(
      &self
    , request: &CompletionRequest
    ) -> Result<String, Error>
    {   self.call_completion(
          &request.api_key,
          &request.model,
          &request.system_prompt,
          &request.user_message,
          request.temperature
        ).await
    }
}
