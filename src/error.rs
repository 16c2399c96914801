//! Error taxonomy for prompt enhancement.
//!
//! The `Display` text of every variant is operator-facing: it is what
//! ends up after `ERROR: ` in the positive prompt slot. None of them
//! carries the API key.

use thiserror::Error;

/// Longest body excerpt quoted in an error message, in characters.
pub const BODY_EXCERPT_CHARS: usize = 300;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error
{   /// User input was empty or whitespace
    #[error("Please enter a prompt idea or iteration instructions.")]
    EmptyInput
  , /// API key was empty or whitespace
    #[error(
      "OpenRouter API key is required. \
       Get your key at https://openrouter.ai/keys"
    )]
    MissingApiKey
  , /// Request exceeded the client timeout
    #[error(
      "OpenRouter request timed out after {secs}s. \
       The LLM may be overloaded. Try again."
    )]
    Timeout { secs: u64 }
  , /// Endpoint could not be reached
    #[error(
      "Could not connect to OpenRouter. \
       Check your internet connection."
    )]
    Connection
  , /// Any other network-layer failure
    #[error("Network error calling OpenRouter: {0}")]
    Transport(String)
  , /// HTTP 401
    #[error(
      "OpenRouter API key is invalid or missing. \
       Get your key at https://openrouter.ai/keys"
    )]
    InvalidApiKey
  , /// HTTP 402
    #[error(
      "OpenRouter account has insufficient credits. \
       Add credits at https://openrouter.ai/credits"
    )]
    InsufficientCredits
  , /// HTTP 429
    #[error(
      "OpenRouter rate limit exceeded. \
       Wait a moment and try again."
    )]
    RateLimited
  , /// Any other non-200 status
    #[error("OpenRouter returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String }
  , /// 200 response without `choices[0].message.content`
    #[error("Unexpected response format from OpenRouter: {0}")]
    MalformedResponse(String)
  , /// Target label not recognised
    #[error(
      "Unknown target model: {0:?} (expected SDXL or Z-Image-Turbo)"
    )]
    UnknownTarget(String)
}

impl Error
{   /// Build an `Upstream` error, truncating the body excerpt.
    pub fn upstream(status: u16, body: &str) -> Self
    {   Error::Upstream
        {   status
          , body: excerpt(body)
        }
    }

    /// Build a `MalformedResponse` error, truncating the body excerpt.
    pub fn malformed(body: &str) -> Self
    {   Error::MalformedResponse(excerpt(body))
    }

    /// True for failures detected before any network call.
    pub fn is_validation(&self) -> bool
    {   matches!(self, Error::EmptyInput | Error::MissingApiKey)
    }

    /// HTTP status behind an upstream-classified error.
    pub fn status(&self) -> Option<u16>
    {   match self
        {   Error::InvalidApiKey => Some(401)
          , Error::InsufficientCredits => Some(402)
          , Error::RateLimited => Some(429)
          , Error::Upstream { status, .. } => Some(*status)
          , _ => None
        }
    }
}

/// First `BODY_EXCERPT_CHARS` characters of `text`.
pub fn excerpt(text: &str) -> String
{   text.chars().take(BODY_EXCERPT_CHARS).collect()
}
