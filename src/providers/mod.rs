//! Completion backends

pub mod openrouter;

use async_trait::async_trait;
use std::fmt;

// Re-export for convenience
pub use openrouter::OpenRouterClient;

/// One chat completion: system prompt plus a single user message.
#[derive(Clone, PartialEq)]
pub struct CompletionRequest
{   pub api_key: String
  , pub model: String
  , pub system_prompt: String
  , pub user_message: String
  , pub temperature: f32
}

// The key never reaches a log line through `{:?}`.
impl fmt::Debug for CompletionRequest
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.debug_struct("CompletionRequest")
          .field("api_key", &"<redacted>")
          .field("model", &self.model)
          .field("system_prompt_len", &self.system_prompt.len())
          .field("user_message", &self.user_message)
          .field("temperature", &self.temperature)
          .finish()
    }
}

/// Anything that can turn a `CompletionRequest` into reply text.
///
/// One attempt per call. Implementations classify their own failures
/// into `crate::Error`; retrying is left to whoever calls `enhance`.
#[async_trait]
pub trait CompletionBackend: Send + Sync
{   async fn complete(
      &self
    , request: &CompletionRequest
    ) -> Result<String, crate::Error>;
}
