//! Configuration for the completion client

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenRouter API base.
pub const OPENROUTER_API_BASE: &str = "https://openrouter.ai/api/v1";

/// Request timeout in seconds.
pub const TIMEOUT_SECONDS: u64 = 60;

/// Response length cap sent as `max_tokens`.
pub const MAX_TOKENS: usize = 1024;

/// Completion client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig
{   /// API base URL, `/chat/completions` is appended
    pub api_base: String
  , /// Request timeout in seconds
    pub timeout_secs: u64
  , /// Max tokens the model may generate
    pub max_tokens: usize
}

impl ClientConfig
{   /// Default configuration pointed at another base URL.
    pub fn with_api_base(api_base: impl Into<String>) -> Self
    {   ClientConfig
        {   api_base: api_base.into()
          , ..ClientConfig::default()
        }
    }

    /// Full chat-completions endpoint.
    pub fn endpoint(&self) -> String
    {   format!(
          "{}/chat/completions",
          self.api_base.trim_end_matches('/')
        )
    }

    pub fn timeout(&self) -> Duration
    {   Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ClientConfig
{   fn default() -> Self
    {   ClientConfig
        {   api_base: OPENROUTER_API_BASE.to_string()
          , timeout_secs: TIMEOUT_SECONDS
          , max_tokens: MAX_TOKENS
        }
    }
}
